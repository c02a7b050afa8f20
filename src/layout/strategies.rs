use crate::foundation::core::{Canvas, Point, Vec2};
use crate::foundation::rng::RmxRng;
use crate::model::page::ItemBox;

/// Angle step between consecutive blocks of an interpolated page spiral.
pub const PAGE_SPIRAL_ANGLE_STEP: f64 = 0.5;
/// Default spatial frequency of the wave layout.
pub const WAVE_FREQUENCY: f64 = 0.02;
/// Anchor of the single-word page, as fractions of the canvas size.
pub const SINGLE_WORD_ANCHOR: (f64, f64) = (0.4, 0.5);

/// Top-left corner of a `width` x `height` box whose center sits on a spiral arm at
/// (`angle`, `radius`) around `center`.
pub fn spiral_position(center: Point, angle: f64, radius: f64, width: f64, height: f64) -> Point {
    center + Vec2::from_angle(angle) * radius - Vec2::new(width * 0.5, height * 0.5)
}

/// One-shot placement used by a static remix page.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LayoutMode {
    /// Source geometry mapped straight onto the canvas.
    Grid,
    /// Grid position pulled toward a spiral arm by `lerp` (0 = grid, 1 = spiral).
    Spiral {
        /// Interpolation weight toward the spiral target.
        lerp: f64,
    },
    /// Grid position displaced vertically by a sine of x.
    Wave {
        /// Spatial frequency, radians per pixel.
        #[serde(default = "default_wave_frequency")]
        frequency: f64,
        /// Peak displacement in pixels. `None` uses the page intensity.
        #[serde(default)]
        amplitude: Option<f64>,
    },
}

fn default_wave_frequency() -> f64 {
    WAVE_FREQUENCY
}

/// Where a strategy puts a block. `rotation` is in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Top-left corner.
    pub origin: Point,
    /// Rotation in radians.
    pub rotation: f64,
}

impl LayoutMode {
    /// Place the `index`-th of `count` items. `intensity` is the spiral radius, and the
    /// wave amplitude when the mode does not fix one.
    pub fn place(
        self,
        grid: &ItemBox,
        index: usize,
        count: usize,
        canvas: Canvas,
        intensity: f64,
    ) -> Placement {
        let origin = Point::new(grid.left, grid.top);
        match self {
            Self::Grid => Placement {
                origin,
                rotation: 0.0,
            },
            Self::Spiral { lerp } => {
                let angle = PAGE_SPIRAL_ANGLE_STEP * index as f64;
                let radius = intensity * (index as f64 / count.max(1) as f64);
                let target =
                    spiral_position(canvas.center(), angle, radius, grid.width, grid.height);
                Placement {
                    origin: origin.lerp(target, lerp),
                    rotation: angle * lerp,
                }
            }
            Self::Wave {
                frequency,
                amplitude,
            } => Placement {
                origin: Point::new(
                    origin.x,
                    origin.y + amplitude.unwrap_or(intensity) * (origin.x * frequency).sin(),
                ),
                rotation: 0.0,
            },
        }
    }
}

/// Random box for a chaos page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChaosBox {
    /// Top-left corner in canvas pixels.
    pub origin: Point,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Font size in em.
    pub font_em: f64,
}

/// x, y in [0, 100%) of the canvas, width in [10%, 50%), height in [5%, 20%) and font
/// size in [0.01, 39.51) em.
pub fn chaos_box(canvas: Canvas, rng: &mut RmxRng) -> ChaosBox {
    let x = rng.unit() * canvas.width;
    let y = rng.unit() * canvas.height;
    let width = rng.range(0.10, 0.50) * canvas.width;
    let height = rng.range(0.05, 0.20) * canvas.height;
    let font_em = rng.range(0.01, 39.51);
    ChaosBox {
        origin: Point::new(x, y),
        width,
        height,
        font_em,
    }
}

/// Origin of the lone block on a single-word page.
pub fn single_word_origin(canvas: Canvas) -> Point {
    Point::new(
        canvas.width * SINGLE_WORD_ANCHOR.0,
        canvas.height * SINGLE_WORD_ANCHOR.1,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/layout/strategies.rs"]
mod tests;

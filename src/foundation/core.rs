use crate::foundation::error::{RmxError, RmxResult};

pub use kurbo::{Point, Vec2};

/// Drawing surface the blocks are laid out on, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 800.0,
        }
    }
}

impl Canvas {
    /// Build a canvas, rejecting negative or non-finite dimensions.
    pub fn new(width: f64, height: f64) -> RmxResult<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(RmxError::validation("canvas dimensions must be finite"));
        }
        if width < 0.0 || height < 0.0 {
            return Err(RmxError::validation("canvas dimensions must be >= 0"));
        }
        Ok(Self { width, height })
    }

    /// Geometric center.
    pub fn center(self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// Length of the diagonal.
    pub fn diagonal(self) -> f64 {
        self.width.hypot(self.height)
    }

    /// Zero-area canvases turn every layout rule into a no-op.
    pub fn is_degenerate(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

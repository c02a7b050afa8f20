use std::f64::consts::TAU;

use crate::foundation::core::Canvas;
use crate::foundation::rng::RmxRng;
use crate::layout::strategies::spiral_position;
use crate::model::block::{LayoutBlock, VisualState};
use crate::stage::params::ActivationParams;

/// Minimum gap between the canvas center and a single-word casualty's scaled box.
pub const EXIT_DISTANCE: f64 = 2000.0;

/// Names of the built-in stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum StageName {
    /// Every block at rest with its source text.
    #[serde(rename = "INITIAL")]
    Initial,
    /// 10% of blocks show generated text.
    #[serde(rename = "REPLACE_10_PERCENT")]
    Replace10Percent,
    /// 50% of blocks show generated text.
    #[serde(rename = "REPLACE_50_PERCENT")]
    Replace50Percent,
    /// Every block shows generated text.
    #[serde(rename = "REPLACE_100_PERCENT")]
    Replace100Percent,
    /// Blocks wind around the canvas center.
    #[serde(rename = "SPIRAL")]
    Spiral,
    /// Blocks scatter to random positions and rotations.
    #[serde(rename = "CHAOS_POSITION")]
    ChaosPosition,
    /// Blocks freeze in place and swell.
    #[serde(rename = "CHAOS_MORPH")]
    ChaosMorph,
    /// One survivor centered, everything else off-screen.
    #[serde(rename = "SINGLE_WORD")]
    SingleWord,
    /// Back to rest, like `Initial`.
    #[serde(rename = "RETURN")]
    Return,
}

impl StageName {
    /// Canonical upper-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "INITIAL",
            Self::Replace10Percent => "REPLACE_10_PERCENT",
            Self::Replace50Percent => "REPLACE_50_PERCENT",
            Self::Replace100Percent => "REPLACE_100_PERCENT",
            Self::Spiral => "SPIRAL",
            Self::ChaosPosition => "CHAOS_POSITION",
            Self::ChaosMorph => "CHAOS_MORPH",
            Self::SingleWord => "SINGLE_WORD",
            Self::Return => "RETURN",
        }
    }
}

impl std::fmt::Display for StageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a stage wants done with a block's displayed text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentDirective {
    /// Leave content (and any running reveal) alone.
    Keep,
    /// Show the original content immediately.
    Original,
    /// Generate new content and reveal it.
    Generate,
}

/// Output of a stage rule for one block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageOutcome {
    /// New target state.
    pub target: VisualState,
    /// Content change.
    pub content: ContentDirective,
}

/// Inputs shared by every block of one activation.
#[derive(Clone, Copy, Debug)]
pub struct StageCtx<'a> {
    /// Block position in the collection.
    pub index: usize,
    /// Number of blocks.
    pub count: usize,
    /// Canvas the blocks live on.
    pub canvas: Canvas,
    /// Per-activation random parameters.
    pub params: &'a ActivationParams,
    /// `ranks[i]` is block `i`'s position in the load-time shuffled order.
    pub ranks: &'a [usize],
    /// Height multiplier for the morph stage.
    pub morph_height_factor: f64,
}

/// Pure rule computing one block's outcome.
pub type StageRule = fn(&StageCtx<'_>, &LayoutBlock) -> StageOutcome;

/// A named entry of the stage table.
#[derive(Clone, Copy)]
pub struct Stage {
    /// Stage name.
    pub name: StageName,
    /// Rule applied to every block on activation.
    pub rule: StageRule,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage").field("name", &self.name).finish()
    }
}

impl Stage {
    /// Built-in rule for `name`.
    pub fn builtin(name: StageName) -> Self {
        let rule: StageRule = match name {
            StageName::Initial | StageName::Return => rest,
            StageName::Replace10Percent => replace_10,
            StageName::Replace50Percent => replace_50,
            StageName::Replace100Percent => replace_100,
            StageName::Spiral => spiral,
            StageName::ChaosPosition => chaos_position,
            StageName::ChaosMorph => chaos_morph,
            StageName::SingleWord => single_word,
        };
        Self { name, rule }
    }
}

/// The canonical nine-stage cycle.
pub fn canonical_stages() -> Vec<Stage> {
    [
        StageName::Initial,
        StageName::Replace10Percent,
        StageName::Replace50Percent,
        StageName::Replace100Percent,
        StageName::Spiral,
        StageName::ChaosPosition,
        StageName::ChaosMorph,
        StageName::SingleWord,
        StageName::Return,
    ]
    .into_iter()
    .map(Stage::builtin)
    .collect()
}

/// Number of blocks a `percent` replacement stage marks: `floor(count * percent / 100)`.
pub fn replacement_threshold(count: usize, percent: usize) -> usize {
    count * percent.min(100) / 100
}

/// Previous target with height, font size and scale back at their initial values.
fn settled(b: &LayoutBlock) -> VisualState {
    let init = b.initial_state();
    VisualState {
        height: init.height,
        font_size: init.font_size,
        scale: init.scale,
        ..*b.target_state()
    }
}

fn rest(_ctx: &StageCtx<'_>, b: &LayoutBlock) -> StageOutcome {
    StageOutcome {
        target: *b.initial_state(),
        content: ContentDirective::Original,
    }
}

fn replace_percent(ctx: &StageCtx<'_>, b: &LayoutBlock, percent: usize) -> StageOutcome {
    let threshold = replacement_threshold(ctx.count, percent);
    let rank = ctx.ranks.get(ctx.index).copied().unwrap_or(usize::MAX);
    StageOutcome {
        target: settled(b),
        content: if rank < threshold {
            ContentDirective::Generate
        } else {
            ContentDirective::Original
        },
    }
}

fn replace_10(ctx: &StageCtx<'_>, b: &LayoutBlock) -> StageOutcome {
    replace_percent(ctx, b, 10)
}

fn replace_50(ctx: &StageCtx<'_>, b: &LayoutBlock) -> StageOutcome {
    replace_percent(ctx, b, 50)
}

fn replace_100(ctx: &StageCtx<'_>, b: &LayoutBlock) -> StageOutcome {
    replace_percent(ctx, b, 100)
}

fn spiral(ctx: &StageCtx<'_>, b: &LayoutBlock) -> StageOutcome {
    let s = ctx.params.spiral;
    let angle = s.tightness * ctx.index as f64 * s.direction;
    let radius = s.max_radius * (ctx.index as f64 / ctx.count.max(1) as f64);
    let target = settled(b);
    let pos = spiral_position(
        ctx.canvas.center(),
        angle,
        radius,
        target.width,
        target.height,
    );
    StageOutcome {
        target: VisualState {
            x: pos.x,
            y: pos.y,
            rotation: angle.to_degrees(),
            ..target
        },
        content: ContentDirective::Keep,
    }
}

fn chaos_position(ctx: &StageCtx<'_>, b: &LayoutBlock) -> StageOutcome {
    let mut rng = RmxRng::derive(ctx.params.chaos_seed, ctx.index as u64);
    StageOutcome {
        target: VisualState {
            x: rng.unit() * ctx.canvas.width,
            y: rng.unit() * ctx.canvas.height,
            rotation: rng.unit() * 360.0,
            ..settled(b)
        },
        content: ContentDirective::Keep,
    }
}

fn chaos_morph(ctx: &StageCtx<'_>, b: &LayoutBlock) -> StageOutcome {
    let mut rng = RmxRng::derive(ctx.params.chaos_seed, ctx.index as u64);
    let cur = b.current_state();
    let init = b.initial_state();
    StageOutcome {
        target: VisualState {
            x: cur.x,
            y: cur.y,
            rotation: cur.rotation,
            height: init.height * ctx.morph_height_factor,
            scale: rng.range(ctx.params.morph.scale_lo, ctx.params.morph.scale_hi),
            ..settled(b)
        },
        content: ContentDirective::Keep,
    }
}

fn single_word(ctx: &StageCtx<'_>, b: &LayoutBlock) -> StageOutcome {
    let center = ctx.canvas.center();
    let init = b.initial_state();
    let target = if ctx.params.survivor == Some(ctx.index) {
        VisualState {
            x: center.x - init.width * 0.5,
            y: center.y - init.height * 0.5,
            rotation: 0.0,
            height: init.height,
            font_size: init.font_size,
            scale: init.scale,
            ..*b.target_state()
        }
    } else {
        let mut rng = RmxRng::derive(ctx.params.chaos_seed, ctx.index as u64);
        let angle = rng.unit() * TAU;
        let target = settled(b);
        let reach = 0.5 * target.width.hypot(target.height) * target.scale.abs();
        let distance = exit_distance(ctx.canvas) + reach;
        // Box center on the exit ray; the scaled box fits in a circle of radius `reach`.
        VisualState {
            x: center.x + angle.cos() * distance - target.width * 0.5,
            y: center.y + angle.sin() * distance - target.height * 0.5,
            ..target
        }
    };
    StageOutcome {
        target,
        content: ContentDirective::Keep,
    }
}

/// Clearance past which a casualty's scaled box cannot touch the canvas.
pub fn exit_distance(canvas: Canvas) -> f64 {
    EXIT_DISTANCE.max(canvas.diagonal() * 2.0)
}

#[cfg(test)]
#[path = "../../tests/unit/stage/rules.rs"]
mod tests;

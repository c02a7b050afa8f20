use crate::model::block::{LayoutBlock, VisualState};

/// Default fraction of the remaining distance covered per tick.
pub const DEFAULT_SMOOTHING: f64 = 0.05;

/// Move `start` toward `end` by `amount` of the remaining distance.
pub fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    start + (end - start) * amount
}

/// Exponential smoothing of every animatable field. Width is never touched.
pub fn smooth_state(current: &mut VisualState, target: &VisualState, factor: f64) {
    current.x = lerp(current.x, target.x, factor);
    current.y = lerp(current.y, target.y, factor);
    current.rotation = lerp(current.rotation, target.rotation, factor);
    current.height = lerp(current.height, target.height, factor);
    current.font_size = lerp(current.font_size, target.font_size, factor);
    current.scale = lerp(current.scale, target.scale, factor);
}

/// Stage-agnostic per-tick convergence of blocks toward their targets.
///
/// After `n` steps with a fixed target, the remaining distance on each field is the initial
/// distance times `(1 - factor)^n`. The target is approached but never reached; use
/// [`Animator::snap`] when an exact landing is needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animator {
    factor: f64,
}

impl Default for Animator {
    fn default() -> Self {
        Self {
            factor: DEFAULT_SMOOTHING,
        }
    }
}

impl Animator {
    /// Animator with the given factor, clamped into `(0, 1]`. Non-finite values fall back
    /// to [`DEFAULT_SMOOTHING`].
    pub fn new(factor: f64) -> Self {
        let factor = if factor.is_finite() && factor > 0.0 {
            factor.min(1.0)
        } else {
            DEFAULT_SMOOTHING
        };
        Self { factor }
    }

    /// Smoothing factor in use.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Advance one block by one tick.
    pub fn step(&self, block: &mut LayoutBlock) {
        let target = block.target;
        smooth_state(&mut block.current, &target, self.factor);
    }

    /// Advance every block by one tick.
    pub fn step_all(&self, blocks: &mut [LayoutBlock]) {
        for block in blocks {
            self.step(block);
        }
    }

    /// Jump straight to the target.
    pub fn snap(block: &mut LayoutBlock) {
        block.current = block.target;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/smoothing.rs"]
mod tests;

use crate::foundation::rng::RmxRng;
use crate::model::block::{LayoutBlock, TextAnimation, VisualState};

/// Characters used to pad the unrevealed tail.
pub const SCRAMBLE_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789#%&*+=?@";

/// Average glyph advance as a fraction of the font size.
pub const CHAR_ADVANCE_EM: f64 = 0.6;

/// Result of one reveal update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStatus {
    /// The block has no transition.
    Idle,
    /// The transition's (staggered) start time has not been reached.
    Pending,
    /// Head revealed, tail scrambled.
    Running,
    /// Content fixed to the target; the transition was cleared this tick.
    Finished,
}

/// Time-boxed scramble-to-target content transition.
///
/// Only touches a block's displayed text; positional state is left alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextReveal {
    duration_ms: f64,
}

impl TextReveal {
    /// Reveal lasting `duration_ms`.
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms: duration_ms.max(0.0),
        }
    }

    /// Configured duration.
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Schedule a transition to `target_text` starting `stagger_ms` after `now_ms`.
    pub fn start(
        &self,
        block: &mut LayoutBlock,
        target_text: impl Into<String>,
        now_ms: f64,
        stagger_ms: f64,
    ) {
        block.text_animation = Some(TextAnimation {
            target_text: target_text.into(),
            start_ms: now_ms + stagger_ms.max(0.0),
            duration_ms: self.duration_ms,
        });
    }

    /// Advance the block's transition to `now_ms`.
    pub fn update(block: &mut LayoutBlock, now_ms: f64, rng: &mut RmxRng) -> RevealStatus {
        let Some(anim) = block.text_animation.as_ref() else {
            return RevealStatus::Idle;
        };
        let Some(p) = progress(anim, now_ms) else {
            return RevealStatus::Pending;
        };
        if p >= 1.0 {
            if let Some(anim) = block.text_animation.take() {
                block.text = anim.target_text;
            }
            return RevealStatus::Finished;
        }

        let total = anim.target_text.chars().count();
        let revealed = (total as f64 * p).floor() as usize;
        let capacity = visible_capacity(&block.current).max(revealed);
        let mut text: String = anim.target_text.chars().take(revealed).collect();
        for _ in revealed..capacity {
            let idx = rng.index(SCRAMBLE_ALPHABET.len());
            text.push(char::from(SCRAMBLE_ALPHABET[idx]));
        }
        block.text = text;
        RevealStatus::Running
    }
}

/// Fraction of the transition elapsed at `now_ms`, clamped to `[0, 1]`, or `None` before
/// the start time.
pub fn progress(anim: &TextAnimation, now_ms: f64) -> Option<f64> {
    if now_ms < anim.start_ms {
        return None;
    }
    if anim.duration_ms <= 0.0 {
        return Some(1.0);
    }
    Some(((now_ms - anim.start_ms) / anim.duration_ms).clamp(0.0, 1.0))
}

/// Number of characters a block can show on one line at its current font size.
pub fn visible_capacity(state: &VisualState) -> usize {
    let advance = state.font_size * CHAR_ADVANCE_EM;
    if !(advance > 0.0) || !state.width.is_finite() || state.width <= 0.0 {
        return 0;
    }
    (state.width / advance).floor() as usize
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;

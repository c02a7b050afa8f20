use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Canvas;
use crate::foundation::error::{RmxError, RmxResult};

/// Session-wide tuning knobs. Every field has a default, so a config file only needs the
/// values it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemixConfig {
    /// Remix canvas size in pixels.
    pub canvas: Canvas,
    /// Cap on the number of terms kept per category.
    pub max_terms: usize,
    /// Fraction of the remaining distance covered per tick.
    pub smoothing: f64,
    /// Duration of one scramble-reveal transition.
    pub reveal_duration_ms: f64,
    /// Delay added per block index before its reveal starts.
    pub reveal_stagger_ms: f64,
    /// How many times a generated fragment is repeated to fill its block.
    pub fill_repeats: usize,
    /// Font size every block starts with.
    pub base_font_size: f64,
    /// Extra height added to every block on top of its source glyph height.
    pub height_padding: f64,
    /// Height multiplier applied during the morph stage.
    pub morph_height_factor: f64,
    /// Seed for the session random source; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for RemixConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            max_terms: 100,
            smoothing: 0.05,
            reveal_duration_ms: 600.0,
            reveal_stagger_ms: 15.0,
            fill_repeats: 50,
            base_font_size: 8.0,
            height_padding: 30.0,
            morph_height_factor: 5.5,
            seed: None,
        }
    }
}

impl RemixConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json_str(s: &str) -> RmxResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: &Path) -> RmxResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Check ranges. A zero-area canvas is allowed; it only makes stages no-ops.
    pub fn validate(&self) -> RmxResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)
            .map_err(|e| RmxError::config(e.to_string()))?;
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(RmxError::config("smoothing must be in (0, 1]"));
        }
        if self.max_terms == 0 {
            return Err(RmxError::config("max_terms must be > 0"));
        }
        for (name, v) in [
            ("reveal_duration_ms", self.reveal_duration_ms),
            ("reveal_stagger_ms", self.reveal_stagger_ms),
            ("base_font_size", self.base_font_size),
            ("height_padding", self.height_padding),
            ("morph_height_factor", self.morph_height_factor),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(RmxError::config(format!("{name} must be finite and >= 0")));
            }
        }
        if self.reveal_duration_ms <= 0.0 {
            return Err(RmxError::config("reveal_duration_ms must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::config::RemixConfig;
use crate::foundation::core::Canvas;
use crate::foundation::error::{RmxError, RmxResult};
use crate::foundation::rng::RmxRng;
use crate::model::block::{LayoutBlock, VisualState};

/// Unscaled page dimensions reported by the document parser.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Page width in document units.
    pub width: f64,
    /// Page height in document units.
    pub height: f64,
}

/// One positioned text run on a source page.
///
/// `transform` is the `[a, b, c, d, e, f]` text matrix; `e`/`f` hold the baseline origin
/// with `y` growing upward.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextItem {
    /// Text content of the run.
    #[serde(rename = "str", alias = "text")]
    pub text: String,
    /// Text matrix.
    pub transform: [f64; 6],
    /// Advance width in document units.
    pub width: f64,
    /// Glyph height in document units; `0` means unknown.
    #[serde(default)]
    pub height: f64,
}

impl TextItem {
    /// Height, falling back to `d - b` of the text matrix when the parser reported none.
    pub fn effective_height(&self) -> f64 {
        if self.height > 0.0 {
            self.height
        } else {
            self.transform[3] - self.transform[1]
        }
    }
}

/// Grid placement of one item in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemBox {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Scaled width.
    pub width: f64,
    /// Scaled glyph height.
    pub height: f64,
}

/// Geometry and text of one source page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SourcePage {
    /// Page dimensions.
    pub viewport: Viewport,
    /// Text runs in reading order.
    pub items: Vec<TextItem>,
}

impl SourcePage {
    /// Parse and validate a page from JSON.
    pub fn from_json_str(s: &str) -> RmxResult<Self> {
        let page: Self = serde_json::from_str(s)?;
        page.validate()?;
        Ok(page)
    }

    /// Reject non-finite geometry and negative sizes.
    pub fn validate(&self) -> RmxResult<()> {
        if !(self.viewport.width >= 0.0 && self.viewport.height >= 0.0) {
            return Err(RmxError::validation(
                "viewport dimensions must be finite and >= 0",
            ));
        }
        if !self.viewport.width.is_finite() || !self.viewport.height.is_finite() {
            return Err(RmxError::validation("viewport dimensions must be finite"));
        }
        for (idx, item) in self.items.iter().enumerate() {
            if item.transform.iter().any(|v| !v.is_finite()) {
                return Err(RmxError::validation(format!(
                    "item {idx}: transform must be finite"
                )));
            }
            if !(item.width.is_finite() && item.width >= 0.0) {
                return Err(RmxError::validation(format!(
                    "item {idx}: width must be finite and >= 0"
                )));
            }
            if !item.height.is_finite() {
                return Err(RmxError::validation(format!(
                    "item {idx}: height must be finite"
                )));
            }
        }
        Ok(())
    }

    /// All runs joined by single spaces; the input handed to term extraction.
    pub fn full_text(&self) -> String {
        self.items
            .iter()
            .map(|i| i.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Uniform scale fitting the viewport inside `canvas`. Zero for degenerate viewports.
    pub fn fit_scale(&self, canvas: Canvas) -> f64 {
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            return 0.0;
        }
        (canvas.width / self.viewport.width).min(canvas.height / self.viewport.height)
    }

    /// Grid placement of `item`: flips the y axis and applies `scale`.
    pub fn item_box(&self, item: &TextItem, scale: f64) -> ItemBox {
        let h = item.effective_height();
        ItemBox {
            left: item.transform[4] * scale,
            top: (self.viewport.height - item.transform[5] - h) * scale,
            width: item.width * scale,
            height: h * scale,
        }
    }

    /// One layout block per item, resting at its grid placement.
    pub fn layout_blocks(&self, cfg: &RemixConfig) -> Vec<LayoutBlock> {
        let scale = self.fit_scale(cfg.canvas);
        self.items
            .iter()
            .map(|item| {
                let b = self.item_box(item, scale);
                LayoutBlock::new(
                    item.text.clone(),
                    VisualState {
                        x: b.left,
                        y: b.top,
                        width: b.width,
                        height: b.height + cfg.height_padding,
                        rotation: 0.0,
                        font_size: cfg.base_font_size,
                        scale: 1.0,
                    },
                )
            })
            .collect()
    }
}

/// A parsed multi-page document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SourceDocument {
    /// Pages in document order.
    pub pages: Vec<SourcePage>,
}

impl SourceDocument {
    /// Parse a document. Accepts either `{ "pages": [...] }` or a bare single page.
    pub fn from_json_str(s: &str) -> RmxResult<Self> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        let doc = if value.get("pages").is_some() {
            serde_json::from_value::<Self>(value)?
        } else {
            Self {
                pages: vec![serde_json::from_value::<SourcePage>(value)?],
            }
        };
        for page in &doc.pages {
            page.validate()?;
        }
        Ok(doc)
    }

    /// Read and parse a document file.
    pub fn from_path(path: &Path) -> RmxResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read source '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Uniformly chosen page, or `None` for an empty document.
    pub fn random_page(&self, rng: &mut RmxRng) -> Option<(usize, &SourcePage)> {
        if self.pages.is_empty() {
            return None;
        }
        let idx = rng.index(self.pages.len());
        Some((idx, &self.pages[idx]))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/page.rs"]
mod tests;

/// Maximum number of appends performed by [`fill_with_content`].
pub const FILL_MAX_APPENDS: usize = 100;
/// Maximum number of decrements performed by [`shrink_to_fit`].
pub const SHRINK_MAX_ITERATIONS: usize = 25;
/// Default floor for [`shrink_to_fit`], in pixels.
pub const MIN_FONT_SIZE: f64 = 4.0;
/// Line height of [`MonospaceOracle::default`], in em.
pub const LINE_HEIGHT_EM: f64 = 1.2;

/// A sized box of text handed to an [`OverflowOracle`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FitBlock {
    /// Text laid out inside the box.
    pub content: String,
    /// Box width in pixels.
    pub width: f64,
    /// Box height in pixels.
    pub height: f64,
    /// Font size in pixels.
    pub font_size: f64,
}

/// Answers whether a block's content exceeds its box in either dimension.
pub trait OverflowOracle {
    /// `true` when `block.content` does not fit.
    fn overflows(&self, block: &FitBlock) -> bool;
}

impl<F> OverflowOracle for F
where
    F: Fn(&FitBlock) -> bool,
{
    fn overflows(&self, block: &FitBlock) -> bool {
        self(block)
    }
}

/// Fill `block` with as many copies of `base` as fit.
///
/// Blank `base` leaves the block untouched. Otherwise the content becomes `base`; if that
/// already overflows it stays, else `base` is appended until the next append would
/// overflow or [`FILL_MAX_APPENDS`] is reached. Returns the number of appends kept.
pub fn fill_with_content<O>(block: &mut FitBlock, base: &str, oracle: &O) -> usize
where
    O: OverflowOracle + ?Sized,
{
    if base.trim().is_empty() {
        return 0;
    }
    block.content = base.to_owned();
    if oracle.overflows(block) {
        return 0;
    }
    let mut kept = 0;
    for _ in 0..FILL_MAX_APPENDS {
        let last_good = block.content.len();
        block.content.push_str(base);
        if oracle.overflows(block) {
            block.content.truncate(last_good);
            break;
        }
        kept += 1;
    }
    kept
}

/// Step the font size down by one pixel until the block fits, the size reaches
/// `min_font_size`, or [`SHRINK_MAX_ITERATIONS`] steps were taken. Returns `true` when
/// the block fits afterwards.
pub fn shrink_to_fit<O>(block: &mut FitBlock, oracle: &O, min_font_size: f64) -> bool
where
    O: OverflowOracle + ?Sized,
{
    for _ in 0..SHRINK_MAX_ITERATIONS {
        if !oracle.overflows(block) {
            return true;
        }
        if block.font_size <= min_font_size {
            return false;
        }
        block.font_size = (block.font_size - 1.0).max(min_font_size);
    }
    !oracle.overflows(block)
}

/// Fixed-pitch estimate of wrapped text: every glyph advances `advance_em` and every
/// line takes `line_height_em`, both relative to the font size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceOracle {
    /// Glyph advance in em.
    pub advance_em: f64,
    /// Line height in em.
    pub line_height_em: f64,
}

impl Default for MonospaceOracle {
    fn default() -> Self {
        Self {
            advance_em: crate::animation::reveal::CHAR_ADVANCE_EM,
            line_height_em: LINE_HEIGHT_EM,
        }
    }
}

impl MonospaceOracle {
    /// Characters that fit on one line of `block`.
    pub fn columns(&self, block: &FitBlock) -> usize {
        let advance = block.font_size * self.advance_em;
        if !(advance > 0.0) || !(block.width > 0.0) {
            return 0;
        }
        (block.width / advance).floor() as usize
    }

    /// Lines needed to greedily wrap `content` at `columns`, and the widest word in
    /// characters.
    pub fn wrap(content: &str, columns: usize) -> (usize, usize) {
        let mut lines = 0usize;
        let mut line_len = 0usize;
        let mut widest = 0usize;
        for word in content.split_whitespace() {
            let len = word.chars().count();
            widest = widest.max(len);
            if line_len == 0 {
                lines += 1;
                line_len = len;
            } else if line_len + 1 + len <= columns {
                line_len += 1 + len;
            } else {
                lines += 1;
                line_len = len;
            }
        }
        (lines, widest)
    }

    /// Estimated rendered size of `block.content`, in pixels.
    pub fn measure(&self, block: &FitBlock) -> (f64, f64) {
        let columns = self.columns(block);
        let (lines, widest) = Self::wrap(&block.content, columns.max(1));
        let longest_line = columns.min(block.content.trim().chars().count());
        let width = widest.max(longest_line) as f64 * block.font_size * self.advance_em;
        (width, lines as f64 * block.font_size * self.line_height_em)
    }
}

impl OverflowOracle for MonospaceOracle {
    fn overflows(&self, block: &FitBlock) -> bool {
        if block.content.trim().is_empty() {
            return false;
        }
        let columns = self.columns(block);
        let (lines, widest) = Self::wrap(&block.content, columns.max(1));
        widest > columns || lines as f64 * block.font_size * self.line_height_em > block.height
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;

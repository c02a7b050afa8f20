use std::path::Path;

use anyhow::Context as _;
use rayon::prelude::*;

use crate::animation::reveal::CHAR_ADVANCE_EM;
use crate::content::generator::{BlockClass, ContentGenerator, PAGE_HEIGHT_FACTOR};
use crate::foundation::core::Canvas;
use crate::foundation::error::{RmxError, RmxResult};
use crate::foundation::rng::RmxRng;
use crate::layout::fit::{
    FitBlock, LINE_HEIGHT_EM, MIN_FONT_SIZE, OverflowOracle, fill_with_content, shrink_to_fit,
};
use crate::layout::strategies::{LayoutMode, chaos_box, single_word_origin};
use crate::model::page::SourcePage;
use crate::terms::set::TermSet;

/// Pixels per em on static pages.
pub const EM_PX: f64 = 16.0;
/// Range the per-page spiral radius / wave amplitude is drawn from.
pub const INTENSITY_RANGE: (f64, f64) = (10.0, 100.0);

/// How one static remix page is composed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageRecipe {
    /// One block per source item, placed by `layout`.
    Remix {
        /// Independent per-block probability of generated text.
        replacement_chance: f64,
        /// Placement strategy.
        layout: LayoutMode,
        /// Run the font-shrink refinement after filling.
        shrink_fonts: bool,
    },
    /// One randomly boxed block per source item.
    Chaos,
    /// A single random term.
    SingleWord,
}

impl PageRecipe {
    /// Reject probabilities outside [0, 1] and non-finite layout parameters.
    pub fn validate(&self) -> RmxResult<()> {
        let Self::Remix {
            replacement_chance,
            layout,
            ..
        } = self
        else {
            return Ok(());
        };
        if !(0.0..=1.0).contains(replacement_chance) {
            return Err(RmxError::validation(format!(
                "replacement_chance must be in [0, 1], got {replacement_chance}"
            )));
        }
        let finite = match *layout {
            LayoutMode::Grid => true,
            LayoutMode::Spiral { lerp } => lerp.is_finite(),
            LayoutMode::Wave {
                frequency,
                amplitude,
            } => frequency.is_finite() && amplitude.is_none_or(f64::is_finite),
        };
        if !finite {
            return Err(RmxError::validation("layout parameters must be finite"));
        }
        Ok(())
    }

    fn remix(replacement_chance: f64, layout: LayoutMode, shrink_fonts: bool) -> Self {
        Self::Remix {
            replacement_chance,
            layout,
            shrink_fonts,
        }
    }
}

/// The nine-page book: text replacement ramps up, then the layout dissolves.
pub fn default_book() -> Vec<PageRecipe> {
    vec![
        PageRecipe::remix(0.0, LayoutMode::Grid, true),
        PageRecipe::remix(0.2, LayoutMode::Grid, true),
        PageRecipe::remix(0.5, LayoutMode::Grid, true),
        PageRecipe::remix(1.0, LayoutMode::Grid, false),
        PageRecipe::remix(1.0, LayoutMode::Spiral { lerp: 0.034 }, false),
        PageRecipe::remix(1.0, LayoutMode::Spiral { lerp: 0.34 }, false),
        PageRecipe::remix(1.0, LayoutMode::Spiral { lerp: 1.0 }, false),
        PageRecipe::Chaos,
        PageRecipe::SingleWord,
    ]
}

/// Parse a JSON array of recipes and validate each one.
pub fn recipes_from_json_str(s: &str) -> RmxResult<Vec<PageRecipe>> {
    let recipes: Vec<PageRecipe> = serde_json::from_str(s)?;
    for recipe in &recipes {
        recipe.validate()?;
    }
    Ok(recipes)
}

/// Read and parse a recipe file.
pub fn recipes_from_path(path: &Path) -> RmxResult<Vec<PageRecipe>> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read recipes '{}'", path.display()))?;
    recipes_from_json_str(&s)
}

/// A block as laid out on a static page.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlacedBlock {
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Rotation in radians.
    pub rotation: f64,
    /// Font size in pixels.
    pub font_size: f64,
    /// Filled content.
    pub text: String,
    /// Fragment class; `None` on chaos and single-word pages.
    pub class: Option<BlockClass>,
}

/// One finished static page.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RemixPage {
    /// Position in the book.
    pub index: usize,
    /// Recipe the page was built from.
    pub recipe: PageRecipe,
    /// Laid-out blocks.
    pub blocks: Vec<PlacedBlock>,
}

/// Build the blocks of one page.
pub fn build_page<O>(
    recipe: PageRecipe,
    source: &SourcePage,
    terms: Option<&TermSet>,
    canvas: Canvas,
    oracle: &O,
    rng: &mut RmxRng,
) -> Vec<PlacedBlock>
where
    O: OverflowOracle + ?Sized,
{
    let generator = ContentGenerator::new(terms);
    match recipe {
        PageRecipe::SingleWord => {
            let text = generator.pick_term(None, rng);
            let origin = single_word_origin(canvas);
            vec![PlacedBlock {
                x: origin.x,
                y: origin.y,
                width: text.chars().count() as f64 * CHAR_ADVANCE_EM * EM_PX,
                height: LINE_HEIGHT_EM * EM_PX,
                rotation: 0.0,
                font_size: EM_PX,
                text,
                class: None,
            }]
        }
        PageRecipe::Chaos => source
            .items
            .iter()
            .map(|_| {
                let b = chaos_box(canvas, rng);
                let base = generator.chaos_fragment(rng);
                let mut fit = FitBlock {
                    content: String::new(),
                    width: b.width,
                    height: b.height,
                    font_size: b.font_em * EM_PX,
                };
                fill_with_content(&mut fit, &base, oracle);
                PlacedBlock {
                    x: b.origin.x,
                    y: b.origin.y,
                    width: fit.width,
                    height: fit.height,
                    rotation: 0.0,
                    font_size: fit.font_size,
                    text: fit.content,
                    class: None,
                }
            })
            .collect(),
        PageRecipe::Remix {
            replacement_chance,
            layout,
            shrink_fonts,
        } => {
            let scale = source.fit_scale(canvas);
            let count = source.items.len();
            let intensity = rng.range(INTENSITY_RANGE.0, INTENSITY_RANGE.1);
            source
                .items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let grid = source.item_box(item, scale);
                    let placed = layout.place(&grid, index, count, canvas, intensity);
                    let (base, class, height_factor) = if rng.chance(replacement_chance) {
                        let f = generator.page_fragment(rng);
                        (f.text, f.class, f.height_factor)
                    } else {
                        (item.text.clone(), BlockClass::OriginalText, PAGE_HEIGHT_FACTOR)
                    };
                    let mut fit = FitBlock {
                        content: String::new(),
                        width: grid.width,
                        height: grid.height * height_factor,
                        font_size: EM_PX,
                    };
                    fill_with_content(&mut fit, &base, oracle);
                    if shrink_fonts {
                        shrink_to_fit(&mut fit, oracle, MIN_FONT_SIZE);
                    }
                    PlacedBlock {
                        x: placed.origin.x,
                        y: placed.origin.y,
                        width: fit.width,
                        height: fit.height,
                        rotation: placed.rotation,
                        font_size: fit.font_size,
                        text: fit.content,
                        class: Some(class),
                    }
                })
                .collect()
        }
    }
}

/// Build every page of `recipes` in parallel. Page `i` draws from its own generator
/// derived from `(seed, i)`, so the book is reproducible regardless of scheduling.
#[tracing::instrument(skip_all, fields(pages = recipes.len(), items = source.items.len()))]
pub fn build_book<O>(
    recipes: &[PageRecipe],
    source: &SourcePage,
    terms: Option<&TermSet>,
    canvas: Canvas,
    oracle: &O,
    seed: u64,
) -> Vec<RemixPage>
where
    O: OverflowOracle + Sync + ?Sized,
{
    let book: Vec<RemixPage> = recipes
        .par_iter()
        .enumerate()
        .map(|(index, &recipe)| {
            let mut rng = RmxRng::derive(seed, index as u64);
            RemixPage {
                index,
                recipe,
                blocks: build_page(recipe, source, terms, canvas, oracle, &mut rng),
            }
        })
        .collect();
    tracing::debug!(
        blocks = book.iter().map(|p| p.blocks.len()).sum::<usize>(),
        "remix book built"
    );
    book
}

#[cfg(test)]
#[path = "../../tests/unit/layout/pages.rs"]
mod tests;

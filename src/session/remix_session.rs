use std::time::Duration;

use crate::animation::reveal::TextReveal;
use crate::animation::smoothing::Animator;
use crate::content::generator::ContentGenerator;
use crate::foundation::config::RemixConfig;
use crate::foundation::error::RmxResult;
use crate::foundation::rng::RmxRng;
use crate::model::block::LayoutBlock;
use crate::model::page::{SourceDocument, SourcePage};
use crate::stage::director::{ActivationReport, ContentSink, StageDirector, apply_outcomes};
use crate::stage::params::ActivationParams;
use crate::stage::rules::StageName;
use crate::terms::extract::{TermExtractor, TermProvider};
use crate::terms::set::TermSet;

/// Token proving the right to tick a session. Invalidated by [`RemixSession::cancel_loop`],
/// by a newer [`RemixSession::start_loop`] and by every load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoopHandle {
    generation: u64,
}

/// Read-only snapshot of one block for a renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BlockFrame {
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Font size in pixels.
    pub font_size: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Displayed text.
    pub text: String,
}

impl BlockFrame {
    fn of(block: &LayoutBlock) -> Self {
        let s = block.current_state();
        Self {
            x: s.x,
            y: s.y,
            width: s.width,
            height: s.height,
            rotation: s.rotation,
            font_size: s.font_size,
            scale: s.scale,
            text: block.text_content().to_owned(),
        }
    }
}

/// Explicit context object for one animated remix.
///
/// Owns the term set, the blocks, the stage director, the random source, the clock and the
/// frame-loop token. The embedding driver calls [`RemixSession::tick`] once per frame and
/// [`RemixSession::advance`] whenever the user moves to the next stage.
#[derive(Debug)]
pub struct RemixSession {
    config: RemixConfig,
    rng: RmxRng,
    extractor: TermExtractor,
    animator: Animator,
    reveal: TextReveal,
    director: StageDirector,

    terms: Option<TermSet>,
    blocks: Vec<LayoutBlock>,
    ranks: Vec<usize>,

    clock_ms: f64,
    generation: u64,
    running: bool,
}

impl RemixSession {
    /// Validate `config` and build an empty session on the canonical stage cycle.
    pub fn new(config: RemixConfig) -> RmxResult<Self> {
        Self::with_director(config, StageDirector::canonical())
    }

    /// Like [`RemixSession::new`] with a custom stage table.
    pub fn with_director(config: RemixConfig, director: StageDirector) -> RmxResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => RmxRng::seed_from_u64(seed),
            None => RmxRng::from_entropy(),
        };
        Ok(Self {
            extractor: TermExtractor::new(config.max_terms),
            animator: Animator::new(config.smoothing),
            reveal: TextReveal::new(config.reveal_duration_ms),
            config,
            rng,
            director,
            terms: None,
            blocks: Vec::new(),
            ranks: Vec::new(),
            clock_ms: 0.0,
            generation: 0,
            running: false,
        })
    }

    /// Replace the source: cancel the loop, rebuild the term set, blocks and replacement
    /// order, and go back to the first stage.
    ///
    /// A failing term provider leaves the term set unavailable; generated text then
    /// degrades to the error sentinel.
    #[tracing::instrument(skip_all, fields(items = page.items.len()))]
    pub fn load(&mut self, page: &SourcePage, provider: &dyn TermProvider) {
        self.cancel_loop();

        self.terms = match self
            .extractor
            .extract(provider, &page.full_text(), &mut self.rng)
        {
            Ok(terms) => Some(terms),
            Err(err) => {
                tracing::warn!(error = %err, "term extraction failed");
                None
            }
        };

        self.blocks = page.layout_blocks(&self.config);
        self.ranks = shuffled_ranks(self.blocks.len(), &mut self.rng);
        self.director.reset();
        tracing::debug!(
            blocks = self.blocks.len(),
            terms = self.terms.as_ref().map(TermSet::len),
            "source loaded"
        );
    }

    /// Load a uniformly chosen page of `doc`. Returns its index, or `None` (and changes
    /// nothing) for an empty document.
    pub fn load_random_page(
        &mut self,
        doc: &SourceDocument,
        provider: &dyn TermProvider,
    ) -> Option<usize> {
        let (index, page) = doc.random_page(&mut self.rng)?;
        self.load(page, provider);
        Some(index)
    }

    /// Start (or restart) the frame loop. Any previously issued handle becomes stale.
    pub fn start_loop(&mut self) -> LoopHandle {
        self.generation += 1;
        self.running = true;
        LoopHandle {
            generation: self.generation,
        }
    }

    /// Stop the frame loop. Every issued handle becomes stale.
    pub fn cancel_loop(&mut self) {
        self.generation += 1;
        self.running = false;
    }

    /// `true` when `handle` may tick this session.
    pub fn is_live(&self, handle: LoopHandle) -> bool {
        self.running && handle.generation == self.generation
    }

    /// One frame: advance the clock by `dt`, smooth every block toward its target and
    /// update running reveals. A stale `handle` is rejected without touching anything.
    pub fn tick(&mut self, handle: LoopHandle, dt: Duration) -> bool {
        if !self.is_live(handle) {
            return false;
        }
        self.clock_ms += dt.as_secs_f64() * 1000.0;
        self.animator.step_all(&mut self.blocks);
        for block in &mut self.blocks {
            TextReveal::update(block, self.clock_ms, &mut self.rng);
        }
        true
    }

    /// Move to the next stage (wrapping) and activate it.
    #[tracing::instrument(skip(self), fields(from = %self.director.current_stage().name))]
    pub fn advance(&mut self) -> ActivationReport {
        self.director.advance();
        self.activate()
    }

    /// Re-apply the current stage without moving the index.
    pub fn activate(&mut self) -> ActivationReport {
        let stage = *self.director.current_stage();
        if self.blocks.is_empty() || self.config.canvas.is_degenerate() {
            tracing::debug!(stage = %stage.name, "nothing to arrange; stage skipped");
            return ActivationReport {
                stage: stage.name,
                generated: 0,
                restored: 0,
            };
        }

        let params = ActivationParams::sample(&mut self.rng, self.blocks.len());
        let outcomes = StageDirector::plan(
            &stage,
            &self.blocks,
            self.config.canvas,
            &params,
            &self.ranks,
            self.config.morph_height_factor,
        );
        let sink = ContentSink {
            generator: ContentGenerator::new(self.terms.as_ref()),
            reveal: self.reveal,
            now_ms: self.clock_ms,
            stagger_ms: self.config.reveal_stagger_ms,
            fill_repeats: self.config.fill_repeats,
        };
        let report = apply_outcomes(stage.name, &mut self.blocks, &outcomes, &sink, &mut self.rng);
        tracing::debug!(
            stage = %report.stage,
            generated = report.generated,
            restored = report.restored,
            "stage activated"
        );
        report
    }

    /// Renderer snapshot of every block's current state and text.
    pub fn frame(&self) -> Vec<BlockFrame> {
        self.blocks.iter().map(BlockFrame::of).collect()
    }

    /// Active configuration.
    pub fn config(&self) -> &RemixConfig {
        &self.config
    }

    /// Blocks of the loaded source.
    pub fn blocks(&self) -> &[LayoutBlock] {
        &self.blocks
    }

    /// Term set of the loaded source; `None` before a load or after an extraction failure.
    pub fn terms(&self) -> Option<&TermSet> {
        self.terms.as_ref()
    }

    /// Name of the active stage.
    pub fn stage(&self) -> StageName {
        self.director.current_stage().name
    }

    /// Stage director.
    pub fn director(&self) -> &StageDirector {
        &self.director
    }

    /// Session clock in milliseconds.
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// `true` while some block still has a reveal pending or running.
    pub fn is_revealing(&self) -> bool {
        self.blocks.iter().any(LayoutBlock::is_animating_text)
    }
}

/// `ranks[i]` is the position of block `i` in a uniformly shuffled order.
fn shuffled_ranks(count: usize, rng: &mut RmxRng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..count).collect();
    rng.shuffle(&mut order);
    let mut ranks = vec![0; count];
    for (rank, &block) in order.iter().enumerate() {
        ranks[block] = rank;
    }
    ranks
}

#[cfg(test)]
#[path = "../../tests/unit/session/remix_session.rs"]
mod tests;

use crate::animation::reveal::TextReveal;
use crate::content::generator::{ContentGenerator, repeat_fill};
use crate::foundation::core::Canvas;
use crate::foundation::error::{RmxError, RmxResult};
use crate::foundation::rng::RmxRng;
use crate::model::block::LayoutBlock;
use crate::stage::params::ActivationParams;
use crate::stage::rules::{ContentDirective, Stage, StageCtx, StageName, StageOutcome};

/// Cyclic table of stages and the index of the active one.
#[derive(Clone, Debug)]
pub struct StageDirector {
    stages: Vec<Stage>,
    current: usize,
}

impl Default for StageDirector {
    fn default() -> Self {
        Self::canonical()
    }
}

impl StageDirector {
    /// Director over a custom table. The table must not be empty.
    pub fn new(stages: Vec<Stage>) -> RmxResult<Self> {
        if stages.is_empty() {
            return Err(RmxError::validation("stage table must not be empty"));
        }
        Ok(Self { stages, current: 0 })
    }

    /// Director over the canonical nine-stage cycle.
    pub fn canonical() -> Self {
        Self {
            stages: crate::stage::rules::canonical_stages(),
            current: 0,
        }
    }

    /// Stage table in cycle order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Index of the active stage.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Active stage.
    pub fn current_stage(&self) -> &Stage {
        &self.stages[self.current]
    }

    /// Back to the first stage (new source loaded).
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Move to the next stage, wrapping from the last to the first.
    pub fn advance(&mut self) -> StageName {
        self.current = (self.current + 1) % self.stages.len();
        self.current_stage().name
    }

    /// Outcomes of `stage` for every block. Pure: the same inputs give the same outcomes.
    pub fn plan(
        stage: &Stage,
        blocks: &[LayoutBlock],
        canvas: Canvas,
        params: &ActivationParams,
        ranks: &[usize],
        morph_height_factor: f64,
    ) -> Vec<StageOutcome> {
        let count = blocks.len();
        blocks
            .iter()
            .enumerate()
            .map(|(index, block)| {
                let ctx = StageCtx {
                    index,
                    count,
                    canvas,
                    params,
                    ranks,
                    morph_height_factor,
                };
                (stage.rule)(&ctx, block)
            })
            .collect()
    }
}

/// Collaborators needed to turn content directives into text.
pub struct ContentSink<'a> {
    /// Fragment source.
    pub generator: ContentGenerator<'a>,
    /// Reveal transition applied to generated text.
    pub reveal: TextReveal,
    /// Session clock at activation.
    pub now_ms: f64,
    /// Per-index reveal delay.
    pub stagger_ms: f64,
    /// Fragment repetitions forming the reveal target.
    pub fill_repeats: usize,
}

/// Summary of one activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ActivationReport {
    /// Activated stage.
    pub stage: StageName,
    /// Blocks that started a generated-content reveal.
    pub generated: usize,
    /// Blocks reverted to their original content.
    pub restored: usize,
}

/// Write `outcomes` into `blocks`: new targets plus content changes.
pub fn apply_outcomes(
    stage: StageName,
    blocks: &mut [LayoutBlock],
    outcomes: &[StageOutcome],
    sink: &ContentSink<'_>,
    rng: &mut RmxRng,
) -> ActivationReport {
    let mut report = ActivationReport {
        stage,
        generated: 0,
        restored: 0,
    };
    for (index, (block, outcome)) in blocks.iter_mut().zip(outcomes).enumerate() {
        block.set_target(outcome.target);
        match outcome.content {
            ContentDirective::Keep => {}
            ContentDirective::Original => {
                block.show_original();
                report.restored += 1;
            }
            ContentDirective::Generate => {
                let fragment = sink.generator.generate(rng);
                let text = repeat_fill(&fragment, sink.fill_repeats);
                sink.reveal.start(
                    block,
                    text,
                    sink.now_ms,
                    index as f64 * sink.stagger_ms,
                );
                report.generated += 1;
            }
        }
    }
    report
}

#[cfg(test)]
#[path = "../../tests/unit/stage/director.rs"]
mod tests;

//! rmx is a stage-driven generative layout and animation engine for remixing the text of a
//! document page.
//!
//! The public API is session-oriented:
//!
//! - Parse a [`SourcePage`] (or a multi-page [`SourceDocument`])
//! - Create a [`RemixSession`] and [`RemixSession::load`] the page with a [`TermProvider`]
//! - Drive it with [`RemixSession::tick`] and [`RemixSession::advance`], reading
//!   [`RemixSession::frame`] snapshots
//!
//! Static remix pages are built with [`build_book`] from a list of [`PageRecipe`]s.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Per-block smoothing and the scramble-reveal content transition.
pub mod animation;
/// Synthetic text fragments built from a term set.
pub mod content;
/// Shared primitives: geometry, errors, configuration, randomness.
pub mod foundation;
/// Static remix pages.
pub mod layout;
/// Layout blocks and source page geometry.
pub mod model;
/// The animated remix session.
pub mod session;
/// Stage table and stage rules.
pub mod stage;
/// Term extraction and the built-in term providers.
pub mod terms;

pub use crate::foundation::config::RemixConfig;
pub use crate::foundation::core::{Canvas, Point, Vec2};
pub use crate::foundation::error::{RmxError, RmxResult};
pub use crate::foundation::rng::RmxRng;

pub use crate::animation::reveal::{RevealStatus, TextReveal};
pub use crate::animation::smoothing::Animator;
pub use crate::content::generator::{BlockClass, ContentForm, ContentGenerator};
pub use crate::layout::fit::{FitBlock, MonospaceOracle, OverflowOracle};
pub use crate::layout::pages::{
    PageRecipe, PlacedBlock, RemixPage, build_book, default_book, recipes_from_path,
};
pub use crate::layout::strategies::LayoutMode;
pub use crate::model::block::{LayoutBlock, TextAnimation, VisualState};
pub use crate::model::page::{SourceDocument, SourcePage, TextItem, Viewport};
pub use crate::session::remix_session::{BlockFrame, LoopHandle, RemixSession};
pub use crate::stage::director::{ActivationReport, StageDirector};
pub use crate::stage::rules::{Stage, StageName};
pub use crate::terms::extract::{TermExtractor, TermProvider};
pub use crate::terms::set::{Category, TermSet};
pub use crate::terms::taggers::{Lexicon, SuffixTagger};

//! Static remix pages: placement strategies and overflow-driven refinement.

/// Overflow oracle and the fill / shrink refinement loops.
pub mod fit;
/// Static page recipes and the parallel book builder.
pub mod pages;
/// One-shot placement strategies.
pub mod strategies;

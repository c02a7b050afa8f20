//! Per-tick motion: positional smoothing and the scramble-reveal text transition.

/// Scramble-to-target text transition.
pub mod reveal;
/// Exponential convergence of visual state.
pub mod smoothing;

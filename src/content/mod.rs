//! Synthetic text generation from term sets.

/// Content generator and static-page fragments.
pub mod generator;

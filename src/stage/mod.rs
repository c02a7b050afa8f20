//! Stage table, per-activation parameters and the pure stage rules.

/// Stage cycling and outcome application.
pub mod director;
/// Per-activation random parameters.
pub mod params;
/// Built-in stage rules.
pub mod rules;

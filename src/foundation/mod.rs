/// Session configuration.
pub mod config;
/// Canvas and geometry primitives.
pub mod core;
/// Error taxonomy.
pub mod error;
/// Seedable random source.
pub mod rng;

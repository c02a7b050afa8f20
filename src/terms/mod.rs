//! Term extraction: categorized word lists sampled from source text.

/// Provider trait, filtering and windowed sampling.
pub mod extract;
/// Categories and the immutable term set.
pub mod set;
/// Built-in providers (dictionary and suffix heuristic).
pub mod taggers;

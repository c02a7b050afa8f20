//! Plain-data layout blocks and the source geometry they are built from.

/// Layout block and its visual state.
pub mod block;
/// Source page geometry (the geometry provider's output).
pub mod page;

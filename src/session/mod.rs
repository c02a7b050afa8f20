//! The remix session context object.

/// Session state, frame loop and renderer snapshot.
pub mod remix_session;

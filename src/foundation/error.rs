/// Convenience result type used across rmx.
pub type RmxResult<T> = Result<T, RmxError>;

/// Top-level error taxonomy used by fallible engine boundaries.
///
/// Stage activation, content generation and ticking never produce errors; only loading
/// configuration, source pages and terms can fail.
#[derive(thiserror::Error, Debug)]
pub enum RmxError {
    /// Invalid user-provided data (pages, geometry, recipes).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid or inconsistent configuration values.
    #[error("config error: {0}")]
    Config(String),

    /// Term provider failures while extracting categorized words.
    #[error("extraction error: {0}")]
    Extraction(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RmxError {
    /// Build a [`RmxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RmxError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`RmxError::Extraction`] value.
    pub fn extraction(msg: impl Into<String>) -> Self {
        Self::Extraction(msg.into())
    }

    /// Build a [`RmxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RmxError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

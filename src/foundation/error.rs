/// Convenience result type used across glowfield.
pub type GlowResult<T> = Result<T, GlowError>;

/// Top-level error taxonomy used by library APIs.
///
/// Cosmetic failure paths (no container, zero-area surface) never surface here; they are
/// silent no-ops in the canvas component.
#[derive(thiserror::Error, Debug)]
pub enum GlowError {
    /// Invalid user-provided data (palette index, config values, filter names).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while preparing or rasterizing a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem errors from config loading and frame sinks.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlowError {
    /// Build a [`GlowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlowError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`GlowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

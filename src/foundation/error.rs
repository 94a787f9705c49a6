/// Convenience result alias used across the crate.
pub type UnveilResult<T> = Result<T, UnveilError>;

#[derive(thiserror::Error, Debug)]
/// Error type for page validation, animation specs, and engine evaluation.
pub enum UnveilError {
    /// A page, trigger, or transition spec failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// An animation spec is malformed (empty tracks, zero periods).
    #[error("animation error: {0}")]
    Animation(String),

    /// The engine was asked something it cannot answer (unknown ids).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// A page or script document could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped external error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UnveilError {
    /// Build a [`UnveilError::Validation`] from any message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`UnveilError::Animation`] from any message.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`UnveilError::Evaluation`] from any message.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`UnveilError::Serde`] from any message.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

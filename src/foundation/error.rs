/// Convenience result type used across Crestkit.
pub type CrestResult<T> = Result<T, CrestError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Resolution and geometry paths never construct these; they degrade to empty
/// or fallback results instead. Errors are reserved for validating authored
/// configs and for failures reported by a host [`crate::DecorationSurface`].
#[derive(thiserror::Error, Debug)]
pub enum CrestError {
    /// Invalid user-authored customization config data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure reported by a host drawing surface while executing a plan.
    #[error("surface error: {0}")]
    Surface(String),

    /// Errors when serializing or deserializing config structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or the host.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CrestError {
    /// Build a [`CrestError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CrestError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`CrestError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

/// Convenience alias for results produced by this crate.
pub type ScrollweaveResult<T> = Result<T, ScrollweaveError>;

/// Error taxonomy for the animation/layout core.
///
/// No variant here is fatal to a running frame loop: evaluation failures
/// degrade to "omit the visual element this frame" and self-heal on the next
/// recomputation. Errors surface at configuration time (validation) or at
/// explicit API boundaries (serde, CLI).
#[derive(thiserror::Error, Debug)]
pub enum ScrollweaveError {
    /// A scene or segment failed structural validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A timeline was sampled or constructed outside its contract.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// A measurement pass could not run at all.
    #[error("layout error: {0}")]
    Layout(String),

    /// Frame evaluation was handed inconsistent inputs.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Serialization or deserialization of a scene/snapshot failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped external error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollweaveError {
    /// Build a [`ScrollweaveError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollweaveError::Timeline`].
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build a [`ScrollweaveError::Layout`].
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`ScrollweaveError::Evaluation`].
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ScrollweaveError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

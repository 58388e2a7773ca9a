/// Convenience result type used across ctrlpanel.
pub type PanelResult<T> = Result<T, PanelError>;

/// Top-level error taxonomy used by generator APIs.
#[derive(thiserror::Error, Debug)]
pub enum PanelError {
    /// Invalid user-provided configuration or frame data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing a panel.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while handing frames to a video encoder.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PanelError {
    /// Build a [`PanelError::Validation`] from any string-like message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PanelError::Render`] from any string-like message.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PanelError::Encode`] from any string-like message.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`PanelError::Serde`] from any string-like message.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

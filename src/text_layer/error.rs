//! Errors raised while building a text layer

use thiserror::Error;

/// Failure modes of the text-layer mapper
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TextLayerError {
    /// Recognition data or mapping parameters are malformed
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl TextLayerError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

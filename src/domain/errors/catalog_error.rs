//! Catalog error types.

use thiserror::Error;

/// Errors raised while listing images from the remote service.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum CatalogError {
    #[error("network error while listing images: {message}")]
    Network { message: String },

    #[error("listing service returned HTTP {status}")]
    Status { status: u16 },

    #[error("malformed listing payload: {message}")]
    Decode { message: String },

    #[error("unexpected catalog error: {message}")]
    Unexpected { message: String },
}

impl CatalogError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates status error.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether trying again later may succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Status { status } => *status == 429 || *status >= 500,
            Self::Decode { .. } | Self::Unexpected { .. } => false,
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Status { .. })
    }
}

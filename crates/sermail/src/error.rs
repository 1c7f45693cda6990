//! Error types for the mail API client.

use std::io;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Client error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Message construction or validation failed.
    #[error(transparent)]
    Message(#[from] sermail_data::Error),

    /// I/O error while loading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Endpoint rejected the request.
    #[error("Send failed with HTTP {status}: {reason}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Reason phrase or server explanation.
        reason: String,
    },

    /// Transport could not deliver the request.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl Error {
    /// Creates a rejection error from a status code and reason.
    #[must_use]
    pub fn rejected(status: u16, reason: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            reason: reason.into(),
        }
    }

    /// Returns true for server-side (5xx) rejections and transport
    /// failures, which a caller may choose to retry.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Rejected { status, .. } => *status >= 500 && *status < 600,
            Self::Transport(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_transient() {
        assert!(Error::rejected(503, "Service Unavailable").is_transient());
        assert!(!Error::rejected(400, "Bad Request").is_transient());
        assert!(Error::Transport("connection reset".into()).is_transient());
        assert!(!Error::Config("empty base url".into()).is_transient());
    }

    #[test]
    fn test_message_error_is_transparent() {
        let inner = sermail_data::Error::from(sermail_data::ValidationError::MissingSender);
        let err = Error::from(inner);
        assert_eq!(err.to_string(), "Validation failed: sender required");
    }
}

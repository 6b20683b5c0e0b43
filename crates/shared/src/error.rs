//! Client error types.
//!
//! Every failure surfaced by the API client is one of these variants, so
//! callers can tell a dead backend apart from a rejected request without
//! matching on message text.

use thiserror::Error;

/// Result type alias using `ClientError`.
pub type ClientResult<T> = Result<T, ClientError>;

/// API client error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, reset).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    ///
    /// `message` is the `detail` field of the error body when present,
    /// otherwise the status's reason phrase.
    #[error("{message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Human-readable failure message.
        message: String,
    },

    /// A success body did not decode into the declared response type.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A request body could not be encoded. Nothing was sent.
    #[error("Encode error: {0}")]
    Encode(String),

    /// The client could not be built from its configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Returns the single human-readable message carried by this error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Transport(msg) | Self::Decode(msg) | Self::Encode(msg) | Self::Config(msg) => msg,
            Self::Http { message, .. } => message,
        }
    }

    /// Returns the HTTP status code, if the backend responded at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the backend could not be reached.
    #[must_use]
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns the error code for logs and diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Http { .. } => "HTTP_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Encode(_) => "ENCODE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

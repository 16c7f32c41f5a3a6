//! Public failure taxonomy for the access layer.
//!
//! Nothing is swallowed: every failed request either performed the
//! documented 401 side effect before erroring, or errors directly. Callers
//! own user-visible messaging.

use serde_json::Value;

use crate::domain::ports::{SessionStoreError, TransportError};

/// Failure surfaced by [`ApiClient::request`](crate::ApiClient::request).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Backend answered with a non-success status; payload surfaced verbatim.
    #[error("backend returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-provided error payload, decoded as JSON when possible.
        body: Value,
    },
    /// The session was rejected (401). Credentials were wiped and the shell
    /// was redirected to login before this error surfaced; it is fatal to
    /// the session, not recoverable per request.
    #[error("session rejected by backend")]
    Unauthorized {
        /// Server-provided error payload.
        body: Value,
    },
    /// No response was received, after any permitted fallback attempt.
    #[error("transport failed before a response arrived: {message}")]
    Transport {
        /// Transport diagnostic.
        message: String,
    },
    /// The request exceeded the configured timeout.
    #[error("request timed out: {message}")]
    Timeout {
        /// Transport diagnostic.
        message: String,
    },
    /// A success response carried a body that did not decode as the caller's
    /// expected shape.
    #[error("response body could not be decoded: {message}")]
    Decode {
        /// Decoder diagnostic.
        message: String,
    },
    /// The request was rejected before anything was sent.
    #[error("request rejected before send: {message}")]
    InvalidRequest {
        /// Diagnostic naming the offending input.
        message: String,
    },
    /// The credential store failed while being read or cleared.
    #[error("session store failed: {message}")]
    Session {
        /// Store diagnostic.
        message: String,
    },
}

impl ApiError {
    /// Build an [`ApiError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Build an [`ApiError::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// HTTP status carried by this error, when a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }

    /// Whether the failure happened before any response arrived.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Timeout { message } => Self::Timeout { message },
            TransportError::Connect { message } | TransportError::Protocol { message } => {
                Self::Transport { message }
            }
            TransportError::InvalidRequest { message } => Self::InvalidRequest { message },
        }
    }
}

impl From<SessionStoreError> for ApiError {
    fn from(error: SessionStoreError) -> Self {
        Self::Session {
            message: error.to_string(),
        }
    }
}

//! Driven ports for the primary and fallback HTTP transports.
//!
//! The service resolves the URL and assembles headers before either port is
//! invoked, so both transports see identical request material. The fallback
//! port carries GET requests only; the service enforces that restriction.

use async_trait::async_trait;
use url::Url;

use crate::domain::access::{Method, RequestBody};

/// One outgoing request, fully resolved by the access layer.
#[derive(Debug, Clone)]
pub struct WireRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL.
    pub url: Url,
    /// Header name/value pairs; later entries win on conflict.
    pub headers: Vec<(String, String)>,
    /// Optional structured payload.
    pub body: Option<RequestBody>,
}

/// A received response, however it was transported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl WireResponse {
    /// Whether the status is in the 2xx success range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures occurring before a usable response exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request exceeded the configured timeout.
    #[error("request timed out: {message}")]
    Timeout {
        /// Transport diagnostic.
        message: String,
    },
    /// The connection could not be established or was dropped mid-exchange.
    #[error("connection failed: {message}")]
    Connect {
        /// Transport diagnostic.
        message: String,
    },
    /// The peer spoke something the transport could not interpret.
    #[error("transport protocol failure: {message}")]
    Protocol {
        /// Transport diagnostic.
        message: String,
    },
    /// The request could not be issued as constructed.
    #[error("request could not be issued: {message}")]
    InvalidRequest {
        /// Transport diagnostic.
        message: String,
    },
}

impl TransportError {
    /// Build a [`TransportError::Timeout`].
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Build a [`TransportError::Connect`].
    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect {
            message: message.into(),
        }
    }

    /// Build a [`TransportError::Protocol`].
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Build a [`TransportError::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Whether this failure was a timeout; timeouts are logged distinctly.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Port for the primary HTTP client.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute one request and return whatever response arrived.
    async fn execute(&self, request: WireRequest) -> Result<WireResponse, TransportError>;
}

/// Port for the lower-level fallback transport.
///
/// Invoked at most once per request, and only after the primary transport
/// failed without producing a response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FallbackTransport: Send + Sync {
    /// Issue a bare GET against `url` with the supplied headers.
    async fn get(
        &self,
        url: &Url,
        headers: &[(String, String)],
    ) -> Result<WireResponse, TransportError>;
}

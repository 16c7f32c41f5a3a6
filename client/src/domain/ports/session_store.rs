//! Driven port for reading and clearing the stored credential.
//!
//! The access layer reads the bearer token on every outgoing request and
//! clears the store when the backend rejects the session. Writing a fresh
//! token is the login flow's job and stays off this surface.

use std::fmt;

use async_trait::async_trait;
use zeroize::Zeroizing;

/// Bearer token proving the current user's session.
///
/// The inner value is wiped from memory on drop and redacted from `Debug`
/// output so tokens never leak into logs.
#[derive(Clone)]
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    /// Wrap a raw token string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Zeroizing::new(raw.into()))
    }

    /// Borrow the raw token for header construction.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

impl PartialEq for AccessToken {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_str() == other.0.as_str()
    }
}

impl Eq for AccessToken {}

/// Errors surfaced by the credential store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    /// Underlying storage could not be read or written.
    #[error("session storage failed: {message}")]
    Storage {
        /// Backend diagnostic.
        message: String,
    },
}

impl SessionStoreError {
    /// Build a [`SessionStoreError::Storage`] from any displayable source.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Port for the browser-persistent credential store.
///
/// The access layer never writes a token through this port. It reads per
/// request and clears on authentication failure or explicit logout; both
/// operations must be safe to repeat.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the current access token, if one is stored.
    async fn access_token(&self) -> Result<Option<AccessToken>, SessionStoreError>;

    /// Remove any stored credential. Clearing an empty store succeeds.
    async fn clear(&self) -> Result<(), SessionStoreError>;
}

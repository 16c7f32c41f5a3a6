//! In-process credential store standing in for browser storage.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{AccessToken, SessionStore, SessionStoreError};

/// Thread-safe in-memory token store.
///
/// Hosts embedding the client in a real shell implement [`SessionStore`]
/// over whatever persistent storage the platform offers; this adapter covers
/// headless hosts and tests. Writing a fresh token happens on the concrete
/// type only: the login flow owns that path, the access layer never does.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<AccessToken>>,
}

impl MemorySessionStore {
    /// Build an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding `token`.
    #[must_use]
    pub fn with_token(token: AccessToken) -> Self {
        Self {
            token: RwLock::new(Some(token)),
        }
    }

    /// Store a freshly issued token (the login flow's write path).
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Storage`] when the lock is poisoned.
    pub fn set_access_token(&self, token: AccessToken) -> Result<(), SessionStoreError> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| SessionStoreError::storage("token lock poisoned"))?;
        *guard = Some(token);
        Ok(())
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn access_token(&self) -> Result<Option<AccessToken>, SessionStoreError> {
        let guard = self
            .token
            .read()
            .map_err(|_| SessionStoreError::storage("token lock poisoned"))?;
        Ok(guard.clone())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| SessionStoreError::storage("token lock poisoned"))?;
        *guard = None;
        Ok(())
    }
}

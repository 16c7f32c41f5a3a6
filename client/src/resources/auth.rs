//! Authentication endpoints and session lifecycle helpers.

use crate::domain::access::{ApiClient, ApiError, Method, RequestOptions};

use super::models::{Credentials, LoginSession};
use super::{ApiEnvelope, json_body};

/// Login and logout against the backend's auth routes.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    /// Borrow the shared client.
    #[must_use]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a session.
    ///
    /// The caller owns persisting the returned token into its session store;
    /// the access layer only ever reads it back.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`]; a wrong password surfaces as the backend's
    /// status error, not as anything session-fatal.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginSession, ApiError> {
        let envelope: ApiEnvelope<LoginSession> = self
            .client
            .post("/api/auth/login", json_body(credentials)?)
            .await?;
        Ok(envelope.data)
    }

    /// End the session server-side, then drop the stored credential.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`]. The credential is only cleared after the
    /// backend acknowledged the logout.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client
            .request::<()>(
                Method::Post,
                "/api/auth/logout",
                None,
                RequestOptions::default(),
            )
            .await?;
        self.client.clear_session().await
    }
}

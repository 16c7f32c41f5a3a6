//! Boat catalogue endpoints.

use crate::domain::access::{ApiClient, ApiError};

use super::ApiEnvelope;
use super::models::Boat;

/// Read-only fleet listing for the marketing site.
pub struct BoatsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> BoatsApi<'a> {
    /// Borrow the shared client.
    #[must_use]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List the fleet.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn list(&self) -> Result<Vec<Boat>, ApiError> {
        let envelope: ApiEnvelope<Vec<Boat>> = self.client.get("/api/boats").await?;
        Ok(envelope.data)
    }

    /// Fetch one boat by id.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn fetch(&self, id: i64) -> Result<Boat, ApiError> {
        let envelope: ApiEnvelope<Boat> = self.client.get(&format!("/api/boats/{id}")).await?;
        Ok(envelope.data)
    }
}

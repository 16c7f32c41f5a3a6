//! Trip catalogue and dashboard CRUD endpoints.

use crate::domain::access::{ApiClient, ApiError};

use super::models::{Trip, TripDraft};
use super::{ApiEnvelope, json_body};

/// Trips as the marketing site and dashboard consume them.
pub struct TripsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TripsApi<'a> {
    /// Borrow the shared client.
    #[must_use]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List all trips.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn list(&self) -> Result<Vec<Trip>, ApiError> {
        let envelope: ApiEnvelope<Vec<Trip>> = self.client.get("/api/trips").await?;
        Ok(envelope.data)
    }

    /// Fetch one trip by id.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`]; an unknown id surfaces as the backend's 404.
    pub async fn fetch(&self, id: i64) -> Result<Trip, ApiError> {
        let envelope: ApiEnvelope<Trip> = self.client.get(&format!("/api/trips/{id}")).await?;
        Ok(envelope.data)
    }

    /// Create a trip from the dashboard.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn create(&self, draft: &TripDraft) -> Result<Trip, ApiError> {
        let envelope: ApiEnvelope<Trip> = self
            .client
            .post("/api/trips", json_body(draft)?)
            .await?;
        Ok(envelope.data)
    }

    /// Replace a trip from the dashboard.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn update(&self, id: i64, draft: &TripDraft) -> Result<Trip, ApiError> {
        let envelope: ApiEnvelope<Trip> = self
            .client
            .put(&format!("/api/trips/{id}"), json_body(draft)?)
            .await?;
        Ok(envelope.data)
    }

    /// Delete a trip from the dashboard.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn remove(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete::<()>(&format!("/api/trips/{id}")).await
    }
}

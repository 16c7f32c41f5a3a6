//! Booking endpoints for the public site and dashboard.

use crate::domain::access::{ApiClient, ApiError, Method, RequestOptions};

use super::models::{Booking, NewBooking};
use super::{ApiEnvelope, json_body};

/// Bookings: creation from the public site, management from the dashboard.
pub struct BookingsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> BookingsApi<'a> {
    /// Borrow the shared client.
    #[must_use]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List all bookings (dashboard view).
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn list(&self) -> Result<Vec<Booking>, ApiError> {
        let envelope: ApiEnvelope<Vec<Booking>> = self.client.get("/api/bookings").await?;
        Ok(envelope.data)
    }

    /// Fetch one booking by id.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn fetch(&self, id: i64) -> Result<Booking, ApiError> {
        let envelope: ApiEnvelope<Booking> =
            self.client.get(&format!("/api/bookings/{id}")).await?;
        Ok(envelope.data)
    }

    /// Create a booking from the public site.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`]. Never retried: a failed create must not risk
    /// double-booking.
    pub async fn create(&self, booking: &NewBooking) -> Result<Booking, ApiError> {
        let envelope: ApiEnvelope<Booking> = self
            .client
            .post("/api/bookings", json_body(booking)?)
            .await?;
        Ok(envelope.data)
    }

    /// Cancel a booking.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn cancel(&self, id: i64) -> Result<Booking, ApiError> {
        let envelope: ApiEnvelope<Booking> = self
            .client
            .request(
                Method::Post,
                &format!("/api/bookings/{id}/cancel"),
                None,
                RequestOptions::default(),
            )
            .await?;
        Ok(envelope.data)
    }
}

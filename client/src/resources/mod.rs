//! Typed pass-through facade over the access layer.
//!
//! Every operation here is a thin delegation to
//! [`ApiClient::request`](crate::ApiClient::request); the backend owns all
//! business rules and payload shapes, and nothing is reshaped on the way
//! through beyond unwrapping the standard `data` envelope.

mod auth;
mod blogs;
mod boats;
mod bookings;
mod models;
mod trips;

pub use auth::AuthApi;
pub use blogs::BlogsApi;
pub use boats::BoatsApi;
pub use bookings::BookingsApi;
pub use models::{
    BlogDraft, BlogPost, Boat, Booking, BookingStatus, Credentials, LoginSession, NewBooking,
    Trip, TripDraft, UserAccount,
};
pub use trips::TripsApi;

use serde::{Deserialize, Serialize};

use crate::domain::access::{ApiClient, ApiError, RequestBody};

/// Standard backend payload envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Wrapped payload.
    pub data: T,
}

impl ApiClient {
    /// Authentication endpoints.
    #[must_use]
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Trip catalogue and dashboard CRUD endpoints.
    #[must_use]
    pub fn trips(&self) -> TripsApi<'_> {
        TripsApi::new(self)
    }

    /// Boat catalogue endpoints.
    #[must_use]
    pub fn boats(&self) -> BoatsApi<'_> {
        BoatsApi::new(self)
    }

    /// Blog endpoints.
    #[must_use]
    pub fn blogs(&self) -> BlogsApi<'_> {
        BlogsApi::new(self)
    }

    /// Booking endpoints.
    #[must_use]
    pub fn bookings(&self) -> BookingsApi<'_> {
        BookingsApi::new(self)
    }
}

fn json_body<T: Serialize>(payload: &T) -> Result<RequestBody, ApiError> {
    RequestBody::json_payload(payload)
        .map_err(|error| ApiError::invalid_request(format!("unencodable payload: {error}")))
}

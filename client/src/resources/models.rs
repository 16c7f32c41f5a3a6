//! Serde contracts for the backend payloads the facade passes through.
//!
//! Field sets mirror what the backend sends; optional fields stay optional
//! rather than being defaulted so callers see exactly what arrived.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A bookable trip as listed on the marketing site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Backend identifier.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Marketing copy.
    pub description: String,
    /// Formatted price string; the backend owns pricing, so it passes
    /// through untouched.
    pub price: String,
    /// Length of the trip in days.
    pub duration_days: u32,
    /// Boat assigned to the trip, when any.
    pub boat_id: Option<i64>,
    /// Cover image URL.
    pub cover_image: Option<String>,
}

/// Payload for creating or updating a trip from the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDraft {
    /// Display title.
    pub title: String,
    /// Marketing copy.
    pub description: String,
    /// Formatted price string.
    pub price: String,
    /// Length of the trip in days.
    pub duration_days: u32,
    /// Boat assigned to the trip, when any.
    pub boat_id: Option<i64>,
    /// Cover image URL.
    pub cover_image: Option<String>,
}

/// A boat in the operator's fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boat {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Passenger capacity.
    pub capacity: u32,
    /// Marketing copy.
    pub description: String,
    /// Gallery image URLs.
    pub images: Vec<String>,
}

/// A published or draft blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Backend identifier.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Post body as the backend stores it.
    pub body: String,
    /// Author display name.
    pub author: String,
    /// Publication timestamp; `None` for drafts.
    pub published_at: Option<DateTime<Utc>>,
}

/// Payload for creating or updating a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogDraft {
    /// Display title.
    pub title: String,
    /// Post body.
    pub body: String,
    /// Author display name.
    pub author: String,
}

/// Lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Awaiting confirmation or payment.
    Pending,
    /// Confirmed by the operator.
    Confirmed,
    /// Cancelled by either side.
    Cancelled,
}

/// A booking as the dashboard sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Backend identifier.
    pub id: i64,
    /// Trip being booked.
    pub trip_id: i64,
    /// Customer display name.
    pub customer_name: String,
    /// Customer contact address.
    pub customer_email: String,
    /// Party size.
    pub guests: u32,
    /// Requested departure date.
    pub departure_date: NaiveDate,
    /// Lifecycle state.
    pub status: BookingStatus,
}

/// Payload for creating a booking from the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    /// Trip being booked.
    pub trip_id: i64,
    /// Customer display name.
    pub customer_name: String,
    /// Customer contact address.
    pub customer_email: String,
    /// Party size.
    pub guests: u32,
    /// Requested departure date.
    pub departure_date: NaiveDate,
}

/// A dashboard user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login address.
    pub email: String,
    /// Role label as the backend defines it.
    pub role: String,
}

/// Login request payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    /// Login address.
    pub email: String,
    /// Plaintext password, forwarded over TLS to the backend.
    pub password: String,
}

/// A freshly issued session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginSession {
    /// Bearer token to persist in the host's session store.
    pub token: String,
    /// Account the token belongs to.
    pub user: UserAccount,
}

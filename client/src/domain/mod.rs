//! Domain services and port boundaries for the access layer.
//!
//! The access layer owns no durable state and performs no reshaping of
//! backend payloads. Everything it touches beyond the process boundary is
//! reached through a port in [`ports`]; [`access`] holds the one operation
//! every caller uses.

pub mod access;
pub mod ports;

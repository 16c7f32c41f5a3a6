//! Saltline API client library modules.

pub mod config;
pub mod domain;
pub mod outbound;
pub mod resources;

pub use config::ClientSettings;
pub use domain::access::{
    ApiClient, ApiError, Method, MultipartField, RequestBody, RequestOptions,
};

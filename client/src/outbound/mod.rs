//! Outbound adapters: concrete transports and credential storage.

pub mod http;
pub mod session;

use std::sync::Arc;

use crate::config::{ClientSettings, SettingsError};
use crate::domain::access::{AccessPorts, ApiClient};
use crate::domain::ports::{Navigator, SessionStore};
use http::{ReqwestTransport, TcpFallbackTransport};

/// Errors surfaced while assembling the production client.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Settings did not validate.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The primary HTTP client could not be constructed.
    #[error("failed to build primary HTTP client: {message}")]
    PrimaryTransport {
        /// Builder diagnostic.
        message: String,
    },
}

/// Wire an [`ApiClient`] with the production transports.
///
/// Primary transport is reqwest; fallback is the raw-socket GET. Both resolve
/// against the one base URL in `settings`.
///
/// # Errors
///
/// Returns [`BuildError`] when the base URL does not validate or the reqwest
/// client cannot be built.
pub fn build_client(
    settings: &ClientSettings,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
) -> Result<ApiClient, BuildError> {
    let base_url = settings.base_url()?;
    let timeout = settings.timeout();
    let transport =
        Arc::new(
            ReqwestTransport::new(timeout).map_err(|error| BuildError::PrimaryTransport {
                message: error.to_string(),
            })?,
        );
    let fallback = Arc::new(TcpFallbackTransport::new(timeout));
    Ok(ApiClient::new(
        base_url,
        AccessPorts {
            transport,
            fallback,
            session,
            navigator,
        },
    ))
}

//! Domain ports and supporting types for the hexagonal boundary.

mod navigator;
mod session_store;
mod transport;


#[cfg(test)]
pub use navigator::MockNavigator;
pub use navigator::{Navigator, NoopNavigator};
#[cfg(test)]
pub use session_store::MockSessionStore;
pub use session_store::{AccessToken, SessionStore, SessionStoreError};
#[cfg(test)]
pub use transport::{MockFallbackTransport, MockHttpTransport};
pub use transport::{
    FallbackTransport, HttpTransport, TransportError, WireRequest, WireResponse,
};

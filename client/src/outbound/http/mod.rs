//! HTTP transport adapters.
//!
//! [`ReqwestTransport`] is the primary client; [`TcpFallbackTransport`] is
//! the deliberately small raw-socket GET used when the primary fails without
//! producing a response.

mod reqwest_transport;
mod tcp_fallback;

pub use reqwest_transport::ReqwestTransport;
pub use tcp_fallback::TcpFallbackTransport;

//! Driven port for steering the host shell after session loss.

use async_trait::async_trait;

/// Port for redirecting the user interface to the login surface.
///
/// Triggered once per rejected response. Concurrent failing requests may all
/// invoke it, so implementations must tolerate redundant calls; redirecting
/// to the already-current page has no adverse effect.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Send the user to the login page.
    async fn redirect_to_login(&self);
}

/// Navigator that does nothing, for headless hosts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

#[async_trait]
impl Navigator for NoopNavigator {
    async fn redirect_to_login(&self) {}
}

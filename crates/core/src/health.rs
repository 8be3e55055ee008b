//! Liveness probing of backing stores.

use async_trait::async_trait;

/// A backend that can report whether it is reachable.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Short backend name used in health reports (e.g. `"sqlite"`).
    fn name(&self) -> &'static str;

    /// Returns `Err` with a human-readable reason when the backend is unreachable.
    async fn ping(&self) -> Result<(), String>;
}

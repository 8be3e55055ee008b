//! Cancellation helpers shared by the orchestrator operations.

use std::future::Future;

use catalog_core::catalog::CatalogError;
use tokio_util::sync::CancellationToken;

/// Races `fut` against `cancel`.
///
/// An already-cancelled token wins without polling `fut`. On cancellation
/// `fut` is dropped mid-flight; stores either apply a write within a single
/// poll or roll it back when the future is dropped.
pub(crate) async fn cancellable<F>(
    cancel: &CancellationToken,
    fut: F,
) -> Result<F::Output, CatalogError>
where
    F: Future,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(CatalogError::Cancelled),
        out = fut => Ok(out),
    }
}

//! Pure types for request-scoped context.

use std::sync::Arc;

use tokio_util::sync::{CancellationToken, DropGuard};
use uuid::Uuid;

/// Unique identifier for a request, used for tracing and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request-scoped context available to all handlers.
///
/// Complements `AppState` (application-scoped) with request-specific data.
/// The cancellation token fires on server shutdown or when the request
/// deadline elapses, whichever comes first. Dropping the last clone of the
/// context cancels the token, which also stops its deadline timer.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique request identifier for tracing.
    pub request_id: RequestId,
    cancel: CancellationToken,
    _guard: Arc<DropGuard>,
}

impl RequestContext {
    pub fn new(request_id: RequestId, cancel: CancellationToken) -> Self {
        let guard = Arc::new(cancel.clone().drop_guard());
        Self {
            request_id,
            cancel,
            _guard: guard,
        }
    }

    /// Token passed to every catalog operation made for this request.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropping_last_clone_cancels() {
        let token = CancellationToken::new();
        let ctx = RequestContext::new(RequestId::new(), token.clone());
        let clone = ctx.clone();

        drop(ctx);
        assert!(!token.is_cancelled());

        drop(clone);
        assert!(token.is_cancelled());
    }
}

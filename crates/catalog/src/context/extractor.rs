//! Axum extractor for RequestContext.

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::types::{RequestContext, RequestId};
use crate::state::AppState;

fn extract_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .map(RequestId::from_uuid)
        .unwrap_or_else(RequestId::new)
}

/// Cancels `token` once `timeout` elapses, unless it is cancelled first.
fn spawn_deadline(token: CancellationToken, timeout: Duration, request_id: RequestId) {
    tokio::spawn(async move {
        tokio::select! {
            _ = token.cancelled() => {}
            _ = tokio::time::sleep(timeout) => {
                tracing::debug!(%request_id, ?timeout, "Request deadline elapsed");
                token.cancel();
            }
        }
    });
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let request_id = extract_request_id(&parts.headers);
        let cancel = state.shutdown.child_token();
        spawn_deadline(cancel.clone(), state.request_timeout, request_id);

        Ok(RequestContext::new(request_id, cancel))
    }
}

//! Health check endpoints.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/health` - Pings every backend; 502 if any is unreachable

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::error::ErrorBody;
use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /health - Backend reachability.
///
/// Pings the store and the cache in order and stops at the first failure.
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Response {
    for check in &state.health_checks {
        if let Err(reason) = check.ping().await {
            tracing::warn!(backend = check.name(), %reason, "Health check failed");
            return ErrorBody::new(StatusCode::BAD_GATEWAY, "status bad gateway").into_response();
        }
    }

    let backends: Vec<&str> = state.health_checks.iter().map(|c| c.name()).collect();
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "ok", "backends": backends })),
    )
        .into_response()
}

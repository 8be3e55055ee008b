use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        entries::{create_entry, delete_entry, get_entry, update_entry},
        health::{health, livez},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // Backstop only; the per-request cancellation token fires first.
    let timeout = state.request_timeout + Duration::from_secs(1);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/entries", post(create_entry))
        .route(
            "/entries/{key}",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
        .layer(cors);

    Router::new()
        .route("/health", get(health))
        .route("/livez", get(livez))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .with_state(state)
}

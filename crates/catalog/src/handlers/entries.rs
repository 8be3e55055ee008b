//! Entry CRUD handlers.
//!
//! Thin adapters between HTTP and `CatalogOrchestrator`: decode and validate
//! the request, forward the request's cancellation token, encode the result.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use catalog_core::catalog::{
    validate_name, validate_price, CatalogError, CreateEntryRequest, Entry, UpdateEntryRequest,
};

use crate::{context::RequestContext, handlers::AppError, state::AppState};

/// Parses an identifier path segment.
///
/// Anything that cannot name a stored entry is reported as `NotFound`.
fn parse_id(key: &str) -> Result<i64, CatalogError> {
    match key.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CatalogError::NotFound),
    }
}

/// Create a new entry (POST /api/v1/entries).
pub async fn create_entry(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<CreateEntryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Entry>), AppError> {
    let Json(request) = payload?;
    validate_name(&request.name)?;
    validate_price(request.price)?;

    let entry = state
        .catalog
        .create(request.into_entry(), ctx.cancellation())
        .await?;

    tracing::debug!(request_id = %ctx.request_id, entry_id = entry.id, "Entry created");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Get an entry by slug (GET /api/v1/entries/{slug}).
pub async fn get_entry(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(slug): Path<String>,
) -> Result<Json<Entry>, AppError> {
    let entry = state.catalog.get_by_slug(&slug, ctx.cancellation()).await?;
    Ok(Json(entry))
}

/// Update an entry's name and price (PUT /api/v1/entries/{id}).
pub async fn update_entry(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(key): Path<String>,
    payload: Result<Json<UpdateEntryRequest>, JsonRejection>,
) -> Result<Json<Entry>, AppError> {
    let id = parse_id(&key)?;
    let Json(request) = payload?;
    validate_name(&request.name)?;
    validate_price(request.price)?;

    let entry = state
        .catalog
        .update(request.into_entry(id), ctx.cancellation())
        .await?;

    tracing::debug!(request_id = %ctx.request_id, entry_id = entry.id, "Entry updated");
    Ok(Json(entry))
}

/// Delete an entry (DELETE /api/v1/entries/{id}).
pub async fn delete_entry(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(key): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&key)?;
    state.catalog.delete(id, ctx.cancellation()).await?;

    tracing::debug!(request_id = %ctx.request_id, entry_id = id, "Entry deleted");
    Ok(StatusCode::OK)
}

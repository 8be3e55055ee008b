use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use catalog_core::catalog::{
    catalog_error_to_status_code, entry_error_to_status_code, CatalogError, EntryError,
};

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ErrorBody {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Public status and message. Unknown errors never leak their detail.
    fn to_body(&self) -> ErrorBody {
        if let Some(err) = self.0.downcast_ref::<CatalogError>() {
            let status = StatusCode::from_u16(catalog_error_to_status_code(err))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return ErrorBody::new(status, err.to_string());
        }

        if let Some(err) = self.0.downcast_ref::<EntryError>() {
            let status = StatusCode::from_u16(entry_error_to_status_code(err))
                .unwrap_or(StatusCode::BAD_REQUEST);
            return ErrorBody::new(status, err.to_string());
        }

        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            return ErrorBody::new(StatusCode::BAD_REQUEST, rejection.body_text());
        }

        tracing::error!(error = %self.0, "Unhandled error");
        ErrorBody::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Internal.to_string(),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = self.to_body();
        if body.code >= 500 {
            tracing::warn!(code = body.code, message = %body.message, "API error");
        } else {
            tracing::debug!(code = body.code, message = %body.message, "API error");
        }
        body.into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

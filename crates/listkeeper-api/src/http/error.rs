//! Application error type mapping to HTTP status codes and an HTML page.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use listkeeper_types::error::ListError;

use crate::http::views::layout;

/// Handler error that renders as an HTML error page.
#[derive(Debug)]
pub enum AppError {
    /// A list or item position that does not exist.
    NotFound(String),
    /// Input rejected outside the normal re-render flow.
    Validation(String),
    /// Anything else.
    Internal(String),
}

impl From<ListError> for AppError {
    fn from(e: ListError) -> Self {
        match e {
            ListError::ListNotFound(_) | ListError::ItemNotFound { .. } => {
                AppError::NotFound(e.to_string())
            }
            ListError::Validation(v) => AppError::Validation(v.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => {
                tracing::debug!(%msg, "not found");
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!(%msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong.".to_string(),
                )
            }
        };

        (status, Html(layout::error_page(status, &message))).into_response()
    }
}

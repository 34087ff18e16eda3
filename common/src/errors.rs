//! Application error type.
//!
//! Every failure a handler can produce is an [`AppError`]. Client errors are
//! rendered as a plain-text `400` whose body is the error's display text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Result alias used across services.
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced by the services.
#[derive(Debug, Error)]
pub enum AppError {
    /// `city` is missing or not present in the catalog.
    #[error("unknown city")]
    UnknownCity,

    /// `count` is present but not a non-negative integer.
    #[error("incorrect count")]
    IncorrectCount,

    /// The city catalog could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(String),
}

impl AppError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnknownCity | AppError::IncorrectCount => StatusCode::BAD_REQUEST,
            AppError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code, used as a log field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UnknownCity => "UNKNOWN_CITY",
            AppError::IncorrectCount => "INCORRECT_COUNT",
            AppError::Catalog(_) => "CATALOG_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "请求处理失败");
        } else {
            tracing::debug!(code = self.code(), error = %self, "请求被拒绝");
        }
        (status, self.to_string()).into_response()
    }
}

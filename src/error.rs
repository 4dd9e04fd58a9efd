//! Error types for the URL shortener
//!
//! Every failure a request can hit is a variant of [`AppError`]. Handlers
//! return `Result<_, AppError>` and axum turns the error into a
//! `{"detail": "..."}` JSON response with the matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The submitted URL is already registered under `alias`
    #[error("URL already exists. Short URL: {alias}")]
    DuplicateUrl { alias: String },

    /// The supplied or derived alias is already taken
    #[error("Short URL already exists: {alias}")]
    DuplicateAlias { alias: String },

    #[error("Short URL not found")]
    NotFound,

    /// The URL does not parse as an absolute URL with a host
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A request field breaks a length constraint
    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Storage(#[from] redb::Error),

    #[error("Corrupt record: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DuplicateUrl { .. } | AppError::DuplicateAlias { .. } => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidUrl(_) | AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Storage(_) | AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = if status.is_server_error() {
            error!(error = %self, "Request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

// redb reports failures through one error type per operation kind; all of
// them fold into the umbrella `redb::Error` so `?` works inside the store.
macro_rules! storage_error_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AppError {
                fn from(err: $ty) -> Self {
                    AppError::Storage(err.into())
                }
            }
        )*
    };
}

storage_error_from!(
    redb::DatabaseError,
    redb::TransactionError,
    redb::TableError,
    redb::StorageError,
    redb::CommitError,
);

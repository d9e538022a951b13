//! Error taxonomy for the storefront.
//!
//! Two classes with very different propagation rules:
//! - [`StorefrontError`] covers catalog data-source failures. These reach
//!   the REST layer and are shown to the caller with a manual retry.
//! - [`StorageError`] covers cart persistence failures. These are logged
//!   and swallowed inside the cart store; in-memory state stays
//!   authoritative and callers never see them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error("catalog source unavailable: {0}")]
    DataSource(#[source] std::io::Error),

    #[error("catalog source returned malformed data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),
}

impl From<std::io::Error> for StorefrontError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => StorefrontError::NotFound(err.to_string()),
            _ => StorefrontError::DataSource(err),
        }
    }
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        let status = match &self {
            StorefrontError::NotFound(_) => StatusCode::NOT_FOUND,
            // Terminal for this request; the client retries manually.
            StorefrontError::DataSource(_) | StorefrontError::Malformed(_) => {
                StatusCode::BAD_GATEWAY
            }
        };
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

/// Cart persistence failure. Never propagates past the cart store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored payload unreadable: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("backing store unavailable")]
    Unavailable,
}

pub type Result<T> = std::result::Result<T, StorefrontError>;

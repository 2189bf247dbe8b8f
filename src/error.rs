//! Domain error taxonomy and HTTP mapping.
//!
//! Domain errors carry a stable (code, message, status) triple and are mapped
//! to the response envelope exactly once, at the router boundary. Anything
//! else surfaces as a generic 500 with only a stringified cause for clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::response::Envelope;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Sample data not found")]
    NotFound,
    #[error("Sample data already exists")]
    AlreadyExists,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl ApiError {
    /// Stable domain code; `None` for unhandled errors.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            ApiError::NotFound => Some("S404"),
            ApiError::AlreadyExists => Some("S409"),
            ApiError::Db(_) => None,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::AlreadyExists => StatusCode::CONFLICT,
            ApiError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self.code() {
            Some(code) => format!("{}: {}", code, self),
            None => format!("Unhandled error: {}", self),
        };
        let body = Envelope::<()>::error(status.as_u16(), message);
        (status, Json(body)).into_response()
    }
}

//! Development-only documentation endpoints.

use axum::http::StatusCode;
use axum::response::Redirect;
use axum::Json;

use crate::response::Envelope;

/// Root redirects to the Swagger UI (development only).
pub async fn home() -> Redirect {
    Redirect::to("/docs")
}

/// Mounted in place of the docs routes outside development.
pub async fn hidden() -> (StatusCode, Json<Envelope<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(Envelope::error(404, "404 Not Found")),
    )
}

//! HTTP surface: sample CRUD, health, and development-only docs.

pub mod docs;
pub mod health;
pub mod samples;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Environment;
use crate::doc::ApiDoc;
use crate::state::AppState;

/// Full application router. The docs UI and `/` redirect are mounted only in
/// development; in production those paths answer with a 404 envelope.
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        .merge(health::routes())
        .merge(samples::routes());

    let router = match state.settings.environment {
        Environment::Development => router
            .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
            .route("/", get(docs::home)),
        Environment::Production => router
            .route("/docs", get(docs::hidden))
            .route("/", get(docs::hidden)),
    };

    router
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! Sample CRUD endpoints. Each handler validates input through its typed
//! extractors, runs the service call inside the handler span, and wraps the
//! outcome in the response envelope.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{SampleCreate, SamplePublic, SampleUpdate};
use crate::response::{Envelope, Page, PageParams};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/samples/", get(read_all).post(create))
        .route("/samples/:id", get(read).patch(update).delete(delete))
}

#[utoipa::path(
    post,
    path = "/samples/",
    request_body = SampleCreate,
    responses(
        (status = 200, description = "Sample created", body = Envelope<SamplePublic>),
        (status = 409, description = "Sample id already exists"),
    ),
    tag = "samples",
)]
pub async fn create(
    State(state): State<AppState>,
    Json(sample): Json<SampleCreate>,
) -> Result<Json<Envelope<SamplePublic>>, ApiError> {
    let created = state
        .tracer
        .observe("create", module_path!(), state.samples.create(sample))
        .await?;
    Ok(Json(Envelope::ok(
        "Sample created successfully",
        created.into(),
    )))
}

#[utoipa::path(
    get,
    path = "/samples/",
    params(PageParams),
    responses((status = 200, description = "One page of samples", body = Page<SamplePublic>)),
    tag = "samples",
)]
pub async fn read_all(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<SamplePublic>>, ApiError> {
    let page = state
        .tracer
        .observe("read_all", module_path!(), state.samples.read_all(params))
        .await?;
    Ok(Json(page.map(SamplePublic::from)))
}

#[utoipa::path(
    get,
    path = "/samples/{id}",
    params(("id" = Uuid, Path, description = "Sample id")),
    responses(
        (status = 200, description = "Sample found", body = Envelope<SamplePublic>),
        (status = 404, description = "No sample with this id"),
    ),
    tag = "samples",
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<SamplePublic>>, ApiError> {
    let sample = state
        .tracer
        .observe("read", module_path!(), state.samples.read(id))
        .await?;
    Ok(Json(Envelope::ok(
        "Sample read successfully",
        sample.into(),
    )))
}

#[utoipa::path(
    patch,
    path = "/samples/{id}",
    params(("id" = Uuid, Path, description = "Sample id")),
    request_body = SampleUpdate,
    responses(
        (status = 200, description = "Sample updated", body = Envelope<SamplePublic>),
        (status = 404, description = "No sample with this id"),
    ),
    tag = "samples",
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(sample): Json<SampleUpdate>,
) -> Result<Json<Envelope<SamplePublic>>, ApiError> {
    let updated = state
        .tracer
        .observe("update", module_path!(), state.samples.update(id, sample))
        .await?;
    Ok(Json(Envelope::ok(
        "Sample updated successfully",
        updated.into(),
    )))
}

#[utoipa::path(
    delete,
    path = "/samples/{id}",
    params(("id" = Uuid, Path, description = "Sample id")),
    responses(
        (status = 200, description = "Sample deleted"),
        (status = 404, description = "No sample with this id"),
    ),
    tag = "samples",
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<SamplePublic>>, ApiError> {
    state
        .tracer
        .observe("delete", module_path!(), state.samples.delete(id))
        .await?;
    Ok(Json(Envelope::ok_empty("Sample deleted successfully")))
}

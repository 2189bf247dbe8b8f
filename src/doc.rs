//! OpenAPI document assembled from route annotations.

use utoipa::OpenApi;

use crate::models::{SampleCreate, SamplePublic, SampleUpdate};
use crate::service::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::samples::create,
        crate::routes::samples::read_all,
        crate::routes::samples::read,
        crate::routes::samples::update,
        crate::routes::samples::delete,
        crate::routes::health::health,
    ),
    components(schemas(SampleCreate, SampleUpdate, SamplePublic, HealthCheck)),
    tags(
        (name = "samples", description = "Sample CRUD"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

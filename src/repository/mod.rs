//! Data-access layer: repository traits and their PostgreSQL implementations.

mod health;
mod sample;

pub use health::PgHealthRepository;
pub use sample::PgSampleRepository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Sample, SampleCreate, SampleUpdate};
use crate::response::{Page, PageParams};

/// CRUD persistence for `Sample` rows. The seam between services and storage;
/// tests substitute an in-memory implementation.
#[async_trait]
pub trait SampleRepository: Send + Sync {
    /// Inserts a new row; `AlreadyExists` when the id is taken.
    async fn create(&self, sample: SampleCreate) -> Result<Sample, ApiError>;

    /// One page of rows in stable insertion order.
    async fn read_all(&self, params: PageParams) -> Result<Page<Sample>, ApiError>;

    /// Fetches by the supplied id; `NotFound` when no row matches.
    async fn read(&self, id: Uuid) -> Result<Sample, ApiError>;

    /// Applies only the non-null fields of `sample`, refreshes `updated_at`,
    /// and returns the updated row; `NotFound` when no row matches.
    async fn update(&self, id: Uuid, sample: SampleUpdate) -> Result<Sample, ApiError>;

    /// Removes the row. Fails with `NotFound` when absent rather than
    /// succeeding idempotently, so clients learn about stale ids.
    async fn delete(&self, id: Uuid) -> Result<(), ApiError>;
}

/// Liveness probe against the backing store.
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// True when a trivial query succeeds; probe failures are swallowed.
    async fn check(&self) -> bool;
}

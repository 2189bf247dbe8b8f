//! PostgreSQL-backed sample repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Sample, SampleCreate, SampleUpdate};
use crate::repository::SampleRepository;
use crate::response::{Page, PageParams};

pub struct PgSampleRepository {
    pool: PgPool,
}

impl PgSampleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// PostgreSQL SQLSTATE for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION))
}

#[async_trait]
impl SampleRepository for PgSampleRepository {
    async fn create(&self, sample: SampleCreate) -> Result<Sample, ApiError> {
        sqlx::query_as::<_, Sample>(
            "INSERT INTO samples (id, name) VALUES ($1, $2) \
             RETURNING id, name, created_at, updated_at",
        )
        .bind(sample.id)
        .bind(&sample.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::AlreadyExists
            } else {
                ApiError::Db(e)
            }
        })
    }

    async fn read_all(&self, params: PageParams) -> Result<Page<Sample>, ApiError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM samples")
            .fetch_one(&self.pool)
            .await?;
        let items = sqlx::query_as::<_, Sample>(
            "SELECT id, name, created_at, updated_at FROM samples \
             ORDER BY created_at, id LIMIT $1 OFFSET $2",
        )
        .bind(params.size() as i64)
        .bind(params.offset() as i64)
        .fetch_all(&self.pool)
        .await?;
        Ok(Page::new(items, total as u64, params))
    }

    async fn read(&self, id: Uuid) -> Result<Sample, ApiError> {
        sqlx::query_as::<_, Sample>(
            "SELECT id, name, created_at, updated_at FROM samples WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ApiError::NotFound)
    }

    async fn update(&self, id: Uuid, sample: SampleUpdate) -> Result<Sample, ApiError> {
        // COALESCE keeps the stored value for fields absent from the patch.
        sqlx::query_as::<_, Sample>(
            "UPDATE samples SET name = COALESCE($2, name), updated_at = NOW() \
             WHERE id = $1 RETURNING id, name, created_at, updated_at",
        )
        .bind(id)
        .bind(&sample.name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ApiError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM samples WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}

//! The `Sample` entity and its API view shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Name applied when a creation request omits one.
pub const DEFAULT_SAMPLE_NAME: &str = "default sample";

/// Stored entity. Timestamps never leave the store; clients see [`SamplePublic`].
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Sample {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation input: id supplied by the caller, name defaulted when omitted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SampleCreate {
    pub id: Uuid,
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    DEFAULT_SAMPLE_NAME.to_string()
}

/// Partial update: only present fields are applied.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SampleUpdate {
    pub name: Option<String>,
}

/// Client-facing view of a [`Sample`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SamplePublic {
    pub id: Uuid,
    pub name: String,
}

impl From<Sample> for SamplePublic {
    fn from(sample: Sample) -> Self {
        Self {
            id: sample.id,
            name: sample.name,
        }
    }
}

//! Health check: store probe plus service version.

use std::sync::Arc;

use serde::Serialize;
use utoipa::ToSchema;

use crate::repository::HealthRepository;

/// Liveness report; always served with HTTP 200.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheck {
    pub status: &'static str,
    pub version: String,
}

pub struct HealthService {
    repository: Arc<dyn HealthRepository>,
    version: String,
}

impl HealthService {
    pub fn new(repository: Arc<dyn HealthRepository>, version: impl Into<String>) -> Self {
        Self {
            repository,
            version: version.into(),
        }
    }

    pub async fn check(&self) -> HealthCheck {
        let status = if self.repository.check().await {
            "OK"
        } else {
            "UNAVAILABLE"
        };
        HealthCheck {
            status,
            version: self.version.clone(),
        }
    }
}

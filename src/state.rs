//! Shared application state: settings plus explicitly wired services.
//!
//! No framework-managed resolution: routers receive constructed services,
//! services receive repositories, repositories receive the pool.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Settings;
use crate::repository::{PgHealthRepository, PgSampleRepository};
use crate::service::{HealthService, SampleService};
use crate::telemetry::Tracer;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub samples: Arc<SampleService>,
    pub health: Arc<HealthService>,
    pub tracer: Tracer,
}

impl AppState {
    /// Production wiring: PostgreSQL repositories behind the services.
    pub fn new(settings: Settings, pool: PgPool) -> Self {
        let samples = SampleService::new(Arc::new(PgSampleRepository::new(pool.clone())));
        let health = HealthService::new(
            Arc::new(PgHealthRepository::new(pool)),
            env!("CARGO_PKG_VERSION"),
        );
        Self::with_services(settings, samples, health)
    }

    /// Wiring with caller-provided services; used by tests to substitute
    /// in-memory repositories.
    pub fn with_services(
        settings: Settings,
        samples: SampleService,
        health: HealthService,
    ) -> Self {
        let tracer = Tracer::new(&settings.service);
        Self {
            settings: Arc::new(settings),
            samples: Arc::new(samples),
            health: Arc::new(health),
            tracer,
        }
    }
}

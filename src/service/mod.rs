//! Orchestration layer between routers and repositories.

mod health;
mod sample;

pub use health::{HealthCheck, HealthService};
pub use sample::SampleService;

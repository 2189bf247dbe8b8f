//! Sample service: boilerplate CRUD web service template.
//!
//! Routers delegate to services, services to repositories, repositories to
//! PostgreSQL; results flow back wrapped in a uniform `{status, message, data}`
//! envelope. Health check, logging, tracing and layered configuration round
//! out the template.

pub mod config;
pub mod db;
pub mod doc;
pub mod error;
pub mod models;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod telemetry;

pub use config::{Environment, Settings};
pub use error::ApiError;
pub use response::{Envelope, Page, PageParams};
pub use routes::app;
pub use state::AppState;

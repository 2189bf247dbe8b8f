#![allow(dead_code)]
//! In-memory repositories and request helpers for HTTP-level tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use sample_service::config::{Environment, Settings};
use sample_service::error::ApiError;
use sample_service::models::{Sample, SampleCreate, SampleUpdate};
use sample_service::repository::{HealthRepository, SampleRepository};
use sample_service::response::{Page, PageParams};
use sample_service::routes;
use sample_service::service::{HealthService, SampleService};
use sample_service::state::AppState;

pub const TEST_VERSION: &str = "0.1.0-test";

/// Vec-backed store preserving insertion order, matching the repository's
/// stable pagination ordering.
#[derive(Default)]
pub struct MemorySampleRepository {
    rows: Mutex<Vec<Sample>>,
}

#[async_trait]
impl SampleRepository for MemorySampleRepository {
    async fn create(&self, sample: SampleCreate) -> Result<Sample, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| r.id == sample.id) {
            return Err(ApiError::AlreadyExists);
        }
        let now = Utc::now();
        let row = Sample {
            id: sample.id,
            name: sample.name,
            created_at: now,
            updated_at: now,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn read_all(&self, params: PageParams) -> Result<Page<Sample>, ApiError> {
        let rows = self.rows.lock().unwrap();
        let total = rows.len() as u64;
        let items = rows
            .iter()
            .skip(params.offset() as usize)
            .take(params.size() as usize)
            .cloned()
            .collect();
        Ok(Page::new(items, total, params))
    }

    async fn read(&self, id: Uuid) -> Result<Sample, ApiError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn update(&self, id: Uuid, sample: SampleUpdate) -> Result<Sample, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ApiError::NotFound)?;
        if let Some(name) = sample.name {
            row.name = name;
        }
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}

pub struct StaticHealthRepository {
    pub healthy: bool,
}

#[async_trait]
impl HealthRepository for StaticHealthRepository {
    async fn check(&self) -> bool {
        self.healthy
    }
}

pub fn test_settings(environment: Environment) -> Settings {
    Settings {
        environment,
        ..Settings::default()
    }
}

pub fn test_app(environment: Environment, healthy: bool) -> Router {
    let samples = SampleService::new(Arc::new(MemorySampleRepository::default()));
    let health = HealthService::new(Arc::new(StaticHealthRepository { healthy }), TEST_VERSION);
    routes::app(AppState::with_services(
        test_settings(environment),
        samples,
        health,
    ))
}

pub fn dev_app() -> Router {
    test_app(Environment::Development, true)
}

/// Send a request and parse the JSON body; `Null` when the body is empty.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, value)
}

/// Send a request and return only the status; for endpoints with non-JSON bodies.
pub async fn send_status(app: &Router, method: &str, uri: &str) -> StatusCode {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap().status()
}

//! Pass-through orchestration for samples. Adds no rules today; exists to
//! decouple the router from the repository and as the seam for future ones.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Sample, SampleCreate, SampleUpdate};
use crate::repository::SampleRepository;
use crate::response::{Page, PageParams};

pub struct SampleService {
    repository: Arc<dyn SampleRepository>,
}

impl SampleService {
    pub fn new(repository: Arc<dyn SampleRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, sample: SampleCreate) -> Result<Sample, ApiError> {
        self.repository.create(sample).await
    }

    pub async fn read_all(&self, params: PageParams) -> Result<Page<Sample>, ApiError> {
        self.repository.read_all(params).await
    }

    pub async fn read(&self, id: Uuid) -> Result<Sample, ApiError> {
        self.repository.read(id).await
    }

    pub async fn update(&self, id: Uuid, sample: SampleUpdate) -> Result<Sample, ApiError> {
        self.repository.update(id, sample).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.repository.delete(id).await
    }
}

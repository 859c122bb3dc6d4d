//! Application state for shared services

use std::sync::Arc;

use crate::domain::store::{ArtifactStore, DatasetStore};
use crate::domain::{DomainError, Prediction, TrainingMetrics};
use crate::infrastructure::services::{DatasetService, PredictionService, TrainingService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub dataset_service: Arc<dyn DatasetServiceTrait>,
    pub training_service: Arc<dyn TrainingServiceTrait>,
    pub prediction_service: Arc<dyn PredictionServiceTrait>,
}

/// Trait for dataset upload operations
#[async_trait::async_trait]
pub trait DatasetServiceTrait: Send + Sync {
    async fn upload(&self, bytes: &[u8]) -> Result<usize, DomainError>;
}

/// Trait for training operations
#[async_trait::async_trait]
pub trait TrainingServiceTrait: Send + Sync {
    async fn train(&self) -> Result<TrainingMetrics, DomainError>;
}

/// Trait for prediction operations
#[async_trait::async_trait]
pub trait PredictionServiceTrait: Send + Sync {
    async fn predict(&self, payload: &serde_json::Value) -> Result<Prediction, DomainError>;

    /// Whether a fitted pair is available in memory or on disk.
    async fn model_available(&self) -> Result<bool, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<S: DatasetStore + 'static> DatasetServiceTrait for DatasetService<S> {
    async fn upload(&self, bytes: &[u8]) -> Result<usize, DomainError> {
        DatasetService::upload(self, bytes).await
    }
}

#[async_trait::async_trait]
impl<D: DatasetStore + 'static, A: ArtifactStore + 'static> TrainingServiceTrait
    for TrainingService<D, A>
{
    async fn train(&self) -> Result<TrainingMetrics, DomainError> {
        TrainingService::train(self).await
    }
}

#[async_trait::async_trait]
impl<A: ArtifactStore + 'static> PredictionServiceTrait for PredictionService<A> {
    async fn predict(&self, payload: &serde_json::Value) -> Result<Prediction, DomainError> {
        PredictionService::predict(self, payload).await
    }

    async fn model_available(&self) -> Result<bool, DomainError> {
        PredictionService::model_available(self).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        dataset_service: Arc<dyn DatasetServiceTrait>,
        training_service: Arc<dyn TrainingServiceTrait>,
        prediction_service: Arc<dyn PredictionServiceTrait>,
    ) -> Self {
        Self {
            dataset_service,
            training_service,
            prediction_service,
        }
    }
}

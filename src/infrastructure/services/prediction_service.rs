//! Prediction service - inference against the current fitted pair

use std::sync::Arc;

use tracing::debug;

use crate::domain::store::ArtifactStore;
use crate::domain::{CurrentModel, DomainError, FeatureVector, ModelArtifacts, Prediction};

/// Serves point predictions from the current-model handle, lazily reloading
/// persisted artifacts when the handle is empty (e.g. after a restart).
///
/// A failed prediction never mutates the handle.
pub struct PredictionService<A: ArtifactStore> {
    artifact_store: Arc<A>,
    current_model: Arc<CurrentModel>,
}

impl<A: ArtifactStore> PredictionService<A> {
    pub fn new(artifact_store: Arc<A>, current_model: Arc<CurrentModel>) -> Self {
        Self {
            artifact_store,
            current_model,
        }
    }

    /// Validate the payload against the fixed feature schema and predict.
    pub async fn predict(&self, payload: &serde_json::Value) -> Result<Prediction, DomainError> {
        let artifacts = self.active_model().await?;
        let vector = FeatureVector::from_json(payload)?;
        artifacts.predict(&vector)
    }

    /// Whether a fitted pair exists in memory or in the artifact slot.
    /// Used by the readiness probe; does not populate the handle.
    pub async fn model_available(&self) -> Result<bool, DomainError> {
        if self.current_model.snapshot()?.is_some() {
            return Ok(true);
        }
        Ok(self.artifact_store.load().await?.is_some())
    }

    /// Snapshot the handle, falling back to the persisted pair on a miss.
    async fn active_model(&self) -> Result<Arc<ModelArtifacts>, DomainError> {
        if let Some(artifacts) = self.current_model.snapshot()? {
            return Ok(artifacts);
        }

        let loaded = self.artifact_store.load().await?.ok_or_else(|| {
            DomainError::no_model_available("no trained model in memory or on disk; train first")
        })?;
        debug!(trained_at = %loaded.trained_at, "Reloaded persisted artifacts");

        let artifacts = Arc::new(loaded);
        self.current_model.replace(artifacts.clone())?;
        Ok(artifacts)
    }
}

//! Manufacturing Defect Predictor API
//!
//! A minimal model-serving service for a binary defect classifier:
//! - upload tabular process data
//! - train a scaler + decision tree pair with held-out evaluation
//! - serve point predictions from the fitted pair, surviving restarts via
//!   persisted artifacts

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::CurrentModel;
use infrastructure::services::{DatasetService, PredictionService, TrainingService};
use infrastructure::storage::{FsArtifactStore, FsDatasetStore};
use tracing::info;

/// Create the application state with all services initialized
pub fn create_app_state(config: &AppConfig) -> AppState {
    info!(data_dir = %config.storage.data_dir, "Using filesystem storage");

    let dataset_store = Arc::new(FsDatasetStore::new(&config.storage.data_dir));
    let artifact_store = Arc::new(FsArtifactStore::new(&config.storage.data_dir));
    let current_model = Arc::new(CurrentModel::new());

    let dataset_service = Arc::new(DatasetService::new(dataset_store.clone()));
    let training_service = Arc::new(TrainingService::new(
        dataset_store,
        artifact_store.clone(),
        current_model.clone(),
    ));
    let prediction_service = Arc::new(PredictionService::new(artifact_store, current_model));

    AppState::new(dataset_service, training_service, prediction_service)
}

//! Predictor API endpoints

pub mod dataset;
pub mod prediction;
pub mod training;

use axum::{Router, routing::post};

use super::state::AppState;

/// Create the predictor API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(dataset::upload_dataset))
        .route("/train", post(training::train_model))
        .route("/predict", post(prediction::predict))
}

//! Training endpoint handler

use axum::extract::State;
use tracing::info;
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, TrainResponse};

/// POST /train
///
/// Runs the full pipeline against the current dataset and returns the
/// held-out metrics. On success the newly fitted pair replaces both the
/// persisted artifacts and the in-process model.
pub async fn train_model(State(state): State<AppState>) -> Result<Json<TrainResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    info!(request_id = %request_id, "Processing training request");

    let metrics = state
        .training_service
        .train()
        .await
        .map_err(ApiError::from)?;

    info!(
        request_id = %request_id,
        accuracy = metrics.accuracy,
        f1_score = metrics.f1_score,
        "Training complete"
    );
    Ok(Json(metrics.into()))
}

//! Prediction endpoint handler

use axum::extract::State;
use tracing::{debug, info};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, PredictResponse};

/// POST /predict
///
/// Accepts a JSON object with exactly the 16 named feature fields. The
/// payload is taken as a raw value so field validation happens in the
/// domain and surfaces as an invalid-feature-vector error rather than an
/// opaque deserialization rejection.
pub async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<PredictResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    debug!(request_id = %request_id, "Received prediction input");

    let prediction = state
        .prediction_service
        .predict(&payload)
        .await
        .map_err(ApiError::from)?;

    info!(
        request_id = %request_id,
        label = ?prediction.label,
        confidence = prediction.confidence,
        "Prediction served"
    );
    Ok(Json(prediction.into()))
}

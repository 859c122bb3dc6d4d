//! Dataset upload endpoint handler

use axum::extract::{Multipart, State};
use tracing::info;
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, UploadResponse};

/// POST /upload
///
/// Accepts a multipart form with one file field of delimited tabular text.
/// The upload replaces any previously stored dataset wholesale.
pub async fn upload_dataset(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    let mut payload: Option<bytes::Bytes> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().map(|n| n.to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read file contents: {}", e)))?;

        if !data.is_empty() {
            info!(
                request_id = %request_id,
                field = name.as_deref().unwrap_or("file"),
                bytes = data.len(),
                "Processing dataset upload"
            );
            payload = Some(data);
            break;
        }
    }

    let Some(data) = payload else {
        return Err(ApiError::bad_request("No file provided"));
    };

    let rows = state
        .dataset_service
        .upload(&data)
        .await
        .map_err(ApiError::from)?;

    info!(request_id = %request_id, rows, "Dataset uploaded");
    Ok(Json(UploadResponse::new(rows)))
}

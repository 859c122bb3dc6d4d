//! Request/response types for the predictor endpoints

use serde::{Deserialize, Serialize};

use crate::domain::{DefectLabel, Prediction, TrainingMetrics};

/// Response to a dataset upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub rows: usize,
}

impl UploadResponse {
    pub fn new(rows: usize) -> Self {
        Self {
            message: "Data uploaded successfully".to_string(),
            rows,
        }
    }
}

/// Metrics returned by a training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainResponse {
    pub accuracy: f64,
    pub f1_score: f64,
}

impl From<TrainingMetrics> for TrainResponse {
    fn from(metrics: TrainingMetrics) -> Self {
        Self {
            accuracy: metrics.accuracy,
            f1_score: metrics.f1_score,
        }
    }
}

/// Prediction for one feature vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(rename = "DefectStatus")]
    pub defect_status: String,
    #[serde(rename = "Confidence")]
    pub confidence: f64,
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        let defect_status = match prediction.label {
            DefectLabel::Yes => "Yes",
            DefectLabel::No => "No",
        };
        Self {
            defect_status: defect_status.to_string(),
            confidence: prediction.confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_serialization() {
        let json = serde_json::to_string(&UploadResponse::new(1000)).unwrap();
        assert!(json.contains("\"rows\":1000"));
        assert!(json.contains("Data uploaded successfully"));
    }

    #[test]
    fn test_train_response_from_metrics() {
        let response: TrainResponse = TrainingMetrics {
            accuracy: 0.95,
            f1_score: 0.94,
        }
        .into();

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"accuracy\":0.95"));
        assert!(json.contains("\"f1_score\":0.94"));
    }

    #[test]
    fn test_predict_response_field_names() {
        let response: PredictResponse = Prediction {
            label: DefectLabel::Yes,
            confidence: 0.87,
        }
        .into();

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"DefectStatus\":\"Yes\""));
        assert!(json.contains("\"Confidence\":0.87"));
    }

    #[test]
    fn test_no_defect_maps_to_no() {
        let response: PredictResponse = Prediction {
            label: DefectLabel::No,
            confidence: 1.0,
        }
        .into();

        assert_eq!(response.defect_status, "No");
    }
}

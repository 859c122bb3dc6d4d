//! API error responses and status mapping

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Error classes surfaced to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    ServerError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::ServerError => write!(f, "server_error"),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                },
            },
        }
    }

    /// Client error: bad input, safe to retry after correction.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ApiErrorType::InvalidRequestError,
            message,
        )
    }

    /// Server error: missing prerequisite state or an internal failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorType::ServerError,
            message,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let message = err.to_string();
        match err {
            DomainError::MalformedInput { .. } | DomainError::InvalidFeatureVector { .. } => {
                Self::bad_request(message)
            }
            DomainError::NoDataset { .. }
            | DomainError::Schema { .. }
            | DomainError::Training { .. }
            | DomainError::NoModelAvailable { .. }
            | DomainError::Storage { .. }
            | DomainError::Internal { .. } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("row 2 has 3 columns, expected 17");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.response.error.error_type,
            ApiErrorType::InvalidRequestError
        );
    }

    #[test]
    fn test_client_errors_map_to_400() {
        let malformed: ApiError = DomainError::malformed_input("bad csv").into();
        let invalid: ApiError = DomainError::invalid_feature_vector("missing field").into();

        assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_server_errors_map_to_500() {
        let errors: Vec<ApiError> = vec![
            DomainError::no_dataset("none").into(),
            DomainError::schema("missing column").into(),
            DomainError::training("fit failed").into(),
            DomainError::no_model_available("none").into(),
            DomainError::storage("io").into(),
            DomainError::internal("oops").into(),
        ];

        for err in errors {
            assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.response.error.error_type, ApiErrorType::ServerError);
        }
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::internal("No model available: train first");
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("server_error"));
        assert!(json.contains("No model available"));
    }

    #[test]
    fn test_message_preserved_through_conversion() {
        let err: ApiError = DomainError::schema("dataset is missing 'DefectStatus'").into();
        assert!(
            err.response
                .error
                .message
                .contains("dataset is missing 'DefectStatus'")
        );
    }
}

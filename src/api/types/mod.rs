//! API request/response types

pub mod error;
pub mod json;
pub mod predictor;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use predictor::{PredictResponse, TrainResponse, UploadResponse};

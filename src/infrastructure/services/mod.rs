//! Infrastructure services implementing the train/predict lifecycle

pub mod dataset_service;
pub mod prediction_service;
pub mod training_service;

pub use dataset_service::DatasetService;
pub use prediction_service::PredictionService;
pub use training_service::{SPLIT_SEED, TEST_RATIO, TrainingService};

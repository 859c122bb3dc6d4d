use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    #[error("No dataset available: {message}")]
    NoDataset { message: String },

    #[error("Schema error: {message}")]
    Schema { message: String },

    #[error("Training failed: {message}")]
    Training { message: String },

    #[error("No model available: {message}")]
    NoModelAvailable { message: String },

    #[error("Invalid feature vector: {message}")]
    InvalidFeatureVector { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    pub fn no_dataset(message: impl Into<String>) -> Self {
        Self::NoDataset {
            message: message.into(),
        }
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    pub fn training(message: impl Into<String>) -> Self {
        Self::Training {
            message: message.into(),
        }
    }

    pub fn no_model_available(message: impl Into<String>) -> Self {
        Self::NoModelAvailable {
            message: message.into(),
        }
    }

    pub fn invalid_feature_vector(message: impl Into<String>) -> Self {
        Self::InvalidFeatureVector {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

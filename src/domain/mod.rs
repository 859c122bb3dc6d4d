//! Domain layer - Core business logic and entities

pub mod artifact;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod scaler;
pub mod schema;
pub mod split;
pub mod store;
pub mod tree;

pub use artifact::{CurrentModel, DefectLabel, ModelArtifacts, Prediction};
pub use dataset::DataTable;
pub use error::DomainError;
pub use metrics::{TrainingMetrics, evaluate};
pub use scaler::StandardScaler;
pub use schema::{FEATURE_COLUMNS, FeatureVector, TARGET_COLUMN};
pub use split::train_test_split;
pub use store::{ArtifactStore, DatasetStore};
pub use tree::DecisionTreeClassifier;

//! Persistence traits for the single dataset and artifact slots
//!
//! Each slot holds at most one value and is overwritten wholesale on each
//! successful write. No history, no versioning.

use async_trait::async_trait;

use super::DomainError;
use super::artifact::ModelArtifacts;
use super::dataset::DataTable;

/// Durable slot for the current dataset.
#[async_trait]
pub trait DatasetStore: Send + Sync {
    /// Overwrite the slot with a new table.
    async fn save(&self, table: &DataTable) -> Result<(), DomainError>;

    /// Load the current table, or `None` if nothing was ever uploaded.
    async fn load(&self) -> Result<Option<DataTable>, DomainError>;
}

/// Durable slot for the fitted scaler/tree pair.
///
/// The pair is written and read as one unit; implementations must never
/// expose a half-written or mismatched pair to readers.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Overwrite the slot with a newly fitted pair.
    async fn save(&self, artifacts: &ModelArtifacts) -> Result<(), DomainError>;

    /// Load the current pair, or `None` if training never completed.
    async fn load(&self) -> Result<Option<ModelArtifacts>, DomainError>;
}

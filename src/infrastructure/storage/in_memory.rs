//! In-memory slot storage
//!
//! Useful for testing and development. Data is lost when the process
//! terminates.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::store::{ArtifactStore, DatasetStore};
use crate::domain::{DataTable, DomainError, ModelArtifacts};

/// Thread-safe in-memory dataset slot.
#[derive(Debug, Default)]
pub struct InMemoryDatasetStore {
    slot: RwLock<Option<DataTable>>,
}

impl InMemoryDatasetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DatasetStore for InMemoryDatasetStore {
    async fn save(&self, table: &DataTable) -> Result<(), DomainError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| DomainError::storage(format!("failed to acquire write lock: {}", e)))?;
        *slot = Some(table.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<DataTable>, DomainError> {
        let slot = self
            .slot
            .read()
            .map_err(|e| DomainError::storage(format!("failed to acquire read lock: {}", e)))?;
        Ok(slot.clone())
    }
}

/// Thread-safe in-memory artifact slot.
#[derive(Debug, Default)]
pub struct InMemoryArtifactStore {
    slot: RwLock<Option<ModelArtifacts>>,
}

impl InMemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArtifactStore for InMemoryArtifactStore {
    async fn save(&self, artifacts: &ModelArtifacts) -> Result<(), DomainError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| DomainError::storage(format!("failed to acquire write lock: {}", e)))?;
        *slot = Some(artifacts.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<ModelArtifacts>, DomainError> {
        let slot = self
            .slot
            .read()
            .map_err(|e| DomainError::storage(format!("failed to acquire read lock: {}", e)))?;
        Ok(slot.clone())
    }
}

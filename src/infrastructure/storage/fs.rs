//! Filesystem slot storage
//!
//! Each slot is one JSON file under the configured data directory. Writes go
//! to a temp file in the same directory and rename over the slot, so a
//! concurrent reader sees either the old blob or the new one, never a torn
//! write.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::store::{ArtifactStore, DatasetStore};
use crate::domain::{DataTable, DomainError, ModelArtifacts};

pub const DATASET_FILE: &str = "dataset.json";
pub const ARTIFACTS_FILE: &str = "artifacts.json";

/// Filesystem-backed dataset slot.
#[derive(Debug)]
pub struct FsDatasetStore {
    path: PathBuf,
}

impl FsDatasetStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(DATASET_FILE),
        }
    }
}

#[async_trait]
impl DatasetStore for FsDatasetStore {
    async fn save(&self, table: &DataTable) -> Result<(), DomainError> {
        write_slot(&self.path, table).await
    }

    async fn load(&self) -> Result<Option<DataTable>, DomainError> {
        read_slot(&self.path).await
    }
}

/// Filesystem-backed artifact slot holding the fitted pair as one blob.
#[derive(Debug)]
pub struct FsArtifactStore {
    path: PathBuf,
}

impl FsArtifactStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(ARTIFACTS_FILE),
        }
    }
}

#[async_trait]
impl ArtifactStore for FsArtifactStore {
    async fn save(&self, artifacts: &ModelArtifacts) -> Result<(), DomainError> {
        write_slot(&self.path, artifacts).await
    }

    async fn load(&self) -> Result<Option<ModelArtifacts>, DomainError> {
        read_slot(&self.path).await
    }
}

async fn write_slot<T: Serialize>(path: &Path, value: &T) -> Result<(), DomainError> {
    let bytes = serde_json::to_vec(value)
        .map_err(|e| DomainError::storage(format!("failed to serialize slot: {}", e)))?;

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            DomainError::storage(format!("failed to create {}: {}", parent.display(), e))
        })?;
    }

    let tmp = path.with_extension("tmp");
    tokio::fs::write(&tmp, &bytes)
        .await
        .map_err(|e| DomainError::storage(format!("failed to write {}: {}", tmp.display(), e)))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| DomainError::storage(format!("failed to replace {}: {}", path.display(), e)))?;

    debug!(path = %path.display(), bytes = bytes.len(), "Slot written");
    Ok(())
}

async fn read_slot<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, DomainError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(DomainError::storage(format!(
                "failed to read {}: {}",
                path.display(),
                e
            )));
        }
    };

    let value = serde_json::from_slice(&bytes)
        .map_err(|e| DomainError::storage(format!("corrupt slot {}: {}", path.display(), e)))?;
    Ok(Some(value))
}

//! Dataset service - upload and persistence of the current dataset

use std::sync::Arc;

use tracing::debug;

use crate::domain::store::DatasetStore;
use crate::domain::{DataTable, DomainError};

/// Parses uploads and overwrites the single dataset slot.
///
/// No schema validation happens here: a dataset missing the target or feature
/// columns uploads fine and only fails once training reads it.
#[derive(Debug)]
pub struct DatasetService<S: DatasetStore> {
    store: Arc<S>,
}

impl<S: DatasetStore> DatasetService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Parse raw upload bytes and persist the table, replacing any prior
    /// dataset. Returns the data row count.
    pub async fn upload(&self, bytes: &[u8]) -> Result<usize, DomainError> {
        let table = DataTable::parse_csv(bytes)?;
        self.store.save(&table).await?;

        debug!(
            rows = table.row_count(),
            columns = table.columns().len(),
            "Dataset stored"
        );
        Ok(table.row_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryDatasetStore;

    fn create_service() -> (DatasetService<InMemoryDatasetStore>, Arc<InMemoryDatasetStore>) {
        let store = Arc::new(InMemoryDatasetStore::new());
        (DatasetService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_upload_returns_row_count() {
        let (service, store) = create_service();

        let rows = service.upload(b"a,b\n1,2\n3,4\n5,6\n").await.unwrap();

        assert_eq!(rows, 3);
        assert_eq!(store.load().await.unwrap().unwrap().row_count(), 3);
    }

    #[tokio::test]
    async fn test_upload_replaces_prior_dataset() {
        let (service, store) = create_service();

        service.upload(b"a\n1\n2\n").await.unwrap();
        service.upload(b"a\n1\n").await.unwrap();

        assert_eq!(store.load().await.unwrap().unwrap().row_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_upload_leaves_slot_untouched() {
        let (service, store) = create_service();
        service.upload(b"a,b\n1,2\n").await.unwrap();

        let err = service.upload(b"a,b\n1,2\n3\n").await.unwrap_err();

        assert!(matches!(err, DomainError::MalformedInput { .. }));
        // The prior dataset is still the stored one.
        assert_eq!(store.load().await.unwrap().unwrap().row_count(), 1);
    }

    #[tokio::test]
    async fn test_upload_does_not_validate_schema() {
        let (service, _) = create_service();

        // No DefectStatus column, but upload is fine with that.
        let rows = service.upload(b"OnlyColumn\n1\n2\n").await.unwrap();
        assert_eq!(rows, 2);
    }
}

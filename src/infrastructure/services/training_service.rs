//! Training service - the full fit/evaluate/persist pipeline

use std::sync::Arc;

use chrono::Utc;
use ndarray::{Array2, Axis};
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::store::{ArtifactStore, DatasetStore};
use crate::domain::{
    CurrentModel, DataTable, DecisionTreeClassifier, DomainError, FEATURE_COLUMNS, ModelArtifacts,
    StandardScaler, TARGET_COLUMN, TrainingMetrics, evaluate, train_test_split,
};

/// Held-out fraction of the dataset.
pub const TEST_RATIO: f64 = 0.2;
/// Fixed shuffle seed so repeated runs partition identically.
pub const SPLIT_SEED: u64 = 42;

/// Runs the train pipeline: load dataset, split, scale, fit, evaluate,
/// persist the fitted pair and swap the current-model handle.
///
/// Runs are serialized behind a mutex; on any failure the persisted pair and
/// the handle keep their previous state.
pub struct TrainingService<D: DatasetStore, A: ArtifactStore> {
    dataset_store: Arc<D>,
    artifact_store: Arc<A>,
    current_model: Arc<CurrentModel>,
    train_lock: Mutex<()>,
}

impl<D: DatasetStore, A: ArtifactStore> TrainingService<D, A> {
    pub fn new(
        dataset_store: Arc<D>,
        artifact_store: Arc<A>,
        current_model: Arc<CurrentModel>,
    ) -> Self {
        Self {
            dataset_store,
            artifact_store,
            current_model,
            train_lock: Mutex::new(()),
        }
    }

    pub async fn train(&self) -> Result<TrainingMetrics, DomainError> {
        let _guard = self.train_lock.lock().await;

        let table = self
            .dataset_store
            .load()
            .await?
            .ok_or_else(|| DomainError::no_dataset("upload a dataset before training"))?;

        let (x, y) = features_and_target(&table)?;
        let (train_idx, test_idx) = train_test_split(x.nrows(), TEST_RATIO, SPLIT_SEED)?;
        debug!(
            train_rows = train_idx.len(),
            test_rows = test_idx.len(),
            "Dataset partitioned"
        );

        let x_train = x.select(Axis(0), &train_idx);
        let x_test = x.select(Axis(0), &test_idx);
        let y_train: Vec<usize> = train_idx.iter().map(|&i| y[i]).collect();
        let y_test: Vec<usize> = test_idx.iter().map(|&i| y[i]).collect();

        // The scaler only ever sees the train partition.
        let (scaler, x_train_scaled) = StandardScaler::fit_transform(x_train.view())?;
        let x_test_scaled = scaler.transform(x_test.view())?;

        let tree = DecisionTreeClassifier::fit(x_train_scaled.view(), &y_train)?;
        let predicted = tree.predict(x_test_scaled.view())?;
        let metrics = evaluate(&y_test, &predicted)?;

        let artifacts = Arc::new(ModelArtifacts {
            scaler,
            tree,
            feature_names: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            trained_at: Utc::now(),
        });

        // Persist first; the handle only swaps once the pair is durable.
        self.artifact_store.save(&artifacts).await?;
        self.current_model.replace(artifacts)?;

        Ok(metrics)
    }
}

/// Separate the table into the feature matrix (canonical column order) and
/// the binary target vector.
fn features_and_target(table: &DataTable) -> Result<(Array2<f64>, Vec<usize>), DomainError> {
    let target_idx = table.column_index(TARGET_COLUMN).ok_or_else(|| {
        DomainError::schema(format!(
            "dataset is missing the target column '{}'",
            TARGET_COLUMN
        ))
    })?;

    let mut feature_indices = Vec::with_capacity(FEATURE_COLUMNS.len());
    let mut missing = Vec::new();
    for name in FEATURE_COLUMNS {
        match table.column_index(name) {
            Some(idx) => feature_indices.push(idx),
            None => missing.push(name),
        }
    }
    if !missing.is_empty() {
        return Err(DomainError::schema(format!(
            "dataset is missing feature columns: {}",
            missing.join(", ")
        )));
    }

    if table.row_count() == 0 {
        return Err(DomainError::training("dataset has no rows"));
    }

    let mut data = Vec::with_capacity(table.row_count() * FEATURE_COLUMNS.len());
    let mut y = Vec::with_capacity(table.row_count());

    for (row_no, row) in table.rows().iter().enumerate() {
        for (&idx, name) in feature_indices.iter().zip(FEATURE_COLUMNS.iter()) {
            let value: f64 = row[idx].parse().map_err(|_| {
                DomainError::training(format!(
                    "row {} column '{}' value '{}' is not numeric",
                    row_no + 1,
                    name,
                    row[idx]
                ))
            })?;
            data.push(value);
        }

        let target: f64 = row[target_idx].parse().map_err(|_| {
            DomainError::training(format!(
                "row {} target value '{}' is not numeric",
                row_no + 1,
                row[target_idx]
            ))
        })?;
        y.push(match target {
            t if t == 0.0 => 0,
            t if t == 1.0 => 1,
            _ => {
                return Err(DomainError::training(format!(
                    "row {} target value '{}' is not a 0/1 label",
                    row_no + 1,
                    row[target_idx]
                )));
            }
        });
    }

    let x = Array2::from_shape_vec((table.row_count(), FEATURE_COLUMNS.len()), data)
        .map_err(|e| DomainError::internal(format!("failed to assemble feature matrix: {}", e)))?;
    Ok((x, y))
}

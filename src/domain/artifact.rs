//! Fitted artifacts and the process-wide current-model handle

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::DomainError;
use super::schema::{FEATURE_COLUMNS, FeatureVector};
use super::scaler::StandardScaler;
use super::tree::DecisionTreeClassifier;

/// The fitted scaler/tree pair from one training run.
///
/// The two are persisted and loaded only as a unit: a scaler must never be
/// paired with a tree fit on differently-scaled data. `feature_names` records
/// the fit-time column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifacts {
    pub scaler: StandardScaler,
    pub tree: DecisionTreeClassifier,
    pub feature_names: Vec<String>,
    pub trained_at: DateTime<Utc>,
}

/// Predicted defect outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefectLabel {
    Yes,
    No,
}

/// Result of a single inference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: DefectLabel,
    pub confidence: f64,
}

impl ModelArtifacts {
    /// Scale a feature vector and run it through the tree.
    ///
    /// Confidence is the maximum class probability at the reached leaf.
    pub fn predict(&self, vector: &FeatureVector) -> Result<Prediction, DomainError> {
        let row = vector.to_row();
        let matrix = Array2::from_shape_vec((1, FEATURE_COLUMNS.len()), row.to_vec())
            .map_err(|e| DomainError::internal(format!("failed to assemble input row: {}", e)))?;

        let scaled = self.scaler.transform(matrix.view())?;
        let class = self.tree.predict_row(scaled.row(0))?;
        let probabilities = self.tree.predict_proba_row(scaled.row(0))?;
        let confidence = probabilities.iter().copied().fold(0.0, f64::max);

        let label = if class == 1 {
            DefectLabel::Yes
        } else {
            DefectLabel::No
        };

        Ok(Prediction { label, confidence })
    }
}

/// Atomically swappable handle to the currently active model.
///
/// Readers snapshot the `Arc` and keep working against it even if training
/// swaps in a new pair concurrently; they never observe a partial update.
#[derive(Debug, Default)]
pub struct CurrentModel {
    slot: RwLock<Option<Arc<ModelArtifacts>>>,
}

impl CurrentModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a snapshot of the active pair, if any.
    pub fn snapshot(&self) -> Result<Option<Arc<ModelArtifacts>>, DomainError> {
        let slot = self
            .slot
            .read()
            .map_err(|e| DomainError::internal(format!("model handle lock poisoned: {}", e)))?;
        Ok(slot.clone())
    }

    /// Replace the active pair in one store.
    pub fn replace(&self, artifacts: Arc<ModelArtifacts>) -> Result<(), DomainError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| DomainError::internal(format!("model handle lock poisoned: {}", e)))?;
        *slot = Some(artifacts);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use serde_json::json;

    fn fitted_artifacts() -> ModelArtifacts {
        // One informative feature (column 4, DefectRate); the rest constant.
        let mut rows = Vec::new();
        let mut y = Vec::new();
        for i in 0..10 {
            let mut row = vec![1.0; FEATURE_COLUMNS.len()];
            row[4] = i as f64;
            rows.push(row);
            y.push(usize::from(i >= 5));
        }
        let x = Array2::from_shape_vec((10, FEATURE_COLUMNS.len()), rows.concat()).unwrap();

        let (scaler, scaled) = StandardScaler::fit_transform(x.view()).unwrap();
        let tree = DecisionTreeClassifier::fit(scaled.view(), &y).unwrap();

        ModelArtifacts {
            scaler,
            tree,
            feature_names: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            trained_at: Utc::now(),
        }
    }

    fn vector_with_defect_rate(rate: f64) -> FeatureVector {
        FeatureVector::from_json(&json!({
            "ProductionVolume": 1.0,
            "ProductionCost": 1.0,
            "SupplierQuality": 1.0,
            "DeliveryDelay": 1.0,
            "DefectRate": rate,
            "QualityScore": 1.0,
            "MaintenanceHours": 1.0,
            "DowntimePercentage": 1.0,
            "InventoryTurnover": 1.0,
            "StockoutRate": 1.0,
            "WorkerProductivity": 1.0,
            "SafetyIncidents": 1.0,
            "EnergyConsumption": 1.0,
            "EnergyEfficiency": 1.0,
            "AdditiveProcessTime": 1.0,
            "AdditiveMaterialCost": 1.0,
        }))
        .unwrap()
    }

    #[test]
    fn test_predict_follows_training_signal() {
        let artifacts = fitted_artifacts();

        let low = artifacts.predict(&vector_with_defect_rate(0.0)).unwrap();
        let high = artifacts.predict(&vector_with_defect_rate(9.0)).unwrap();

        assert_eq!(low.label, DefectLabel::No);
        assert_eq!(high.label, DefectLabel::Yes);
        assert!((0.0..=1.0).contains(&low.confidence));
        assert!((0.0..=1.0).contains(&high.confidence));
    }

    #[test]
    fn test_serde_round_trip_preserves_predictions() {
        let artifacts = fitted_artifacts();
        let json = serde_json::to_string(&artifacts).unwrap();
        let restored: ModelArtifacts = serde_json::from_str(&json).unwrap();

        let vector = vector_with_defect_rate(7.5);
        assert_eq!(
            restored.predict(&vector).unwrap(),
            artifacts.predict(&vector).unwrap()
        );
    }

    #[test]
    fn test_current_model_starts_empty() {
        let handle = CurrentModel::new();
        assert!(handle.snapshot().unwrap().is_none());
    }

    #[test]
    fn test_replace_and_snapshot() {
        let handle = CurrentModel::new();
        handle.replace(Arc::new(fitted_artifacts())).unwrap();

        assert!(handle.snapshot().unwrap().is_some());
    }

    #[test]
    fn test_snapshot_survives_concurrent_replace() {
        let handle = CurrentModel::new();
        let first = Arc::new(fitted_artifacts());
        handle.replace(first.clone()).unwrap();

        let snapshot = handle.snapshot().unwrap().unwrap();
        handle.replace(Arc::new(fitted_artifacts())).unwrap();

        // The reader's snapshot still points at the pair it started with.
        assert!(Arc::ptr_eq(&snapshot, &first));
    }

    #[test]
    fn test_scaler_width_guard() {
        let artifacts = fitted_artifacts();
        let x = array![[1.0, 2.0]];
        assert!(artifacts.scaler.transform(x.view()).is_err());
    }
}

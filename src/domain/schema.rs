//! Fixed feature schema for the manufacturing defect dataset
//!
//! The canonical column order defined here is the single source of truth for
//! matrix assembly. A scaler or tree fit against this order must only ever be
//! applied to rows assembled in the same order.

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Feature columns in canonical order.
pub const FEATURE_COLUMNS: [&str; 16] = [
    "ProductionVolume",
    "ProductionCost",
    "SupplierQuality",
    "DeliveryDelay",
    "DefectRate",
    "QualityScore",
    "MaintenanceHours",
    "DowntimePercentage",
    "InventoryTurnover",
    "StockoutRate",
    "WorkerProductivity",
    "SafetyIncidents",
    "EnergyConsumption",
    "EnergyEfficiency",
    "AdditiveProcessTime",
    "AdditiveMaterialCost",
];

/// Binary target column: 1 = defect, 0 = no defect.
pub const TARGET_COLUMN: &str = "DefectStatus";

/// A single manufacturing observation submitted for prediction.
///
/// Deserialization requires exactly the 16 feature fields: missing, extra or
/// non-numeric fields are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct FeatureVector {
    pub production_volume: f64,
    pub production_cost: f64,
    pub supplier_quality: f64,
    pub delivery_delay: f64,
    pub defect_rate: f64,
    pub quality_score: f64,
    pub maintenance_hours: f64,
    pub downtime_percentage: f64,
    pub inventory_turnover: f64,
    pub stockout_rate: f64,
    pub worker_productivity: f64,
    pub safety_incidents: f64,
    pub energy_consumption: f64,
    pub energy_efficiency: f64,
    pub additive_process_time: f64,
    pub additive_material_cost: f64,
}

impl FeatureVector {
    /// Parse a JSON object into a feature vector.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, DomainError> {
        serde_json::from_value(value.clone())
            .map_err(|e| DomainError::invalid_feature_vector(e.to_string()))
    }

    /// Flatten into a row matching [`FEATURE_COLUMNS`] order.
    pub fn to_row(&self) -> [f64; 16] {
        [
            self.production_volume,
            self.production_cost,
            self.supplier_quality,
            self.delivery_delay,
            self.defect_rate,
            self.quality_score,
            self.maintenance_hours,
            self.downtime_percentage,
            self.inventory_turnover,
            self.stockout_rate,
            self.worker_productivity,
            self.safety_incidents,
            self.energy_consumption,
            self.energy_efficiency,
            self.additive_process_time,
            self.additive_material_cost,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "ProductionVolume": 500.0,
            "ProductionCost": 10000.0,
            "SupplierQuality": 90.0,
            "DeliveryDelay": 2.0,
            "DefectRate": 1.5,
            "QualityScore": 88.0,
            "MaintenanceHours": 10.0,
            "DowntimePercentage": 2.0,
            "InventoryTurnover": 5.0,
            "StockoutRate": 0.1,
            "WorkerProductivity": 85.0,
            "SafetyIncidents": 1.0,
            "EnergyConsumption": 2500.0,
            "EnergyEfficiency": 0.3,
            "AdditiveProcessTime": 4.0,
            "AdditiveMaterialCost": 200.0,
        })
    }

    #[test]
    fn test_from_json_valid() {
        let vector = FeatureVector::from_json(&sample_json()).unwrap();
        assert_eq!(vector.production_volume, 500.0);
        assert_eq!(vector.additive_material_cost, 200.0);
    }

    #[test]
    fn test_from_json_missing_field() {
        let mut value = sample_json();
        value.as_object_mut().unwrap().remove("DefectRate");

        let err = FeatureVector::from_json(&value).unwrap_err();
        assert!(matches!(err, DomainError::InvalidFeatureVector { .. }));
        assert!(err.to_string().contains("DefectRate"));
    }

    #[test]
    fn test_from_json_extra_field() {
        let mut value = sample_json();
        value
            .as_object_mut()
            .unwrap()
            .insert("Unexpected".to_string(), json!(1.0));

        let err = FeatureVector::from_json(&value).unwrap_err();
        assert!(matches!(err, DomainError::InvalidFeatureVector { .. }));
    }

    #[test]
    fn test_from_json_non_numeric_field() {
        let mut value = sample_json();
        value
            .as_object_mut()
            .unwrap()
            .insert("QualityScore".to_string(), json!("high"));

        let err = FeatureVector::from_json(&value).unwrap_err();
        assert!(matches!(err, DomainError::InvalidFeatureVector { .. }));
    }

    #[test]
    fn test_to_row_matches_column_order() {
        let vector = FeatureVector::from_json(&sample_json()).unwrap();
        let row = vector.to_row();

        assert_eq!(row.len(), FEATURE_COLUMNS.len());
        // Spot-check positions against the canonical order.
        assert_eq!(row[0], vector.production_volume);
        assert_eq!(row[4], vector.defect_rate);
        assert_eq!(row[15], vector.additive_material_cost);
    }

    #[test]
    fn test_integer_values_accepted() {
        let mut value = sample_json();
        value
            .as_object_mut()
            .unwrap()
            .insert("ProductionVolume".to_string(), json!(500));

        let vector = FeatureVector::from_json(&value).unwrap();
        assert_eq!(vector.production_volume, 500.0);
    }
}

//! Standard (z-score) feature scaler

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use super::DomainError;

/// Per-feature affine normalization learned from training data.
///
/// Each column is mapped to `(x - mean) / std`, with the population standard
/// deviation. Zero-variance columns divide by 1.0 so constant features map to
/// zero instead of NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    std: Vec<f64>,
}

impl StandardScaler {
    /// Learn column means and deviations from the given matrix.
    pub fn fit(x: ArrayView2<'_, f64>) -> Result<Self, DomainError> {
        let rows = x.nrows();
        if rows == 0 {
            return Err(DomainError::training(
                "cannot fit scaler on an empty matrix",
            ));
        }

        let n = rows as f64;
        let mut mean = Vec::with_capacity(x.ncols());
        let mut std = Vec::with_capacity(x.ncols());

        for column in x.columns() {
            let m = column.sum() / n;
            let var = column.iter().map(|v| (v - m).powi(2)).sum::<f64>() / n;
            let s = var.sqrt();

            mean.push(m);
            std.push(if s == 0.0 { 1.0 } else { s });
        }

        Ok(Self { mean, std })
    }

    /// Normalize a matrix with the learned parameters.
    pub fn transform(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>, DomainError> {
        if x.ncols() != self.mean.len() {
            return Err(DomainError::internal(format!(
                "scaler was fit on {} features but received {}",
                self.mean.len(),
                x.ncols()
            )));
        }

        let mut scaled = x.to_owned();
        for (j, mut column) in scaled.columns_mut().into_iter().enumerate() {
            column.mapv_inplace(|v| (v - self.mean[j]) / self.std[j]);
        }

        Ok(scaled)
    }

    /// Fit on a matrix and return it scaled.
    pub fn fit_transform(x: ArrayView2<'_, f64>) -> Result<(Self, Array2<f64>), DomainError> {
        let scaler = Self::fit(x)?;
        let scaled = scaler.transform(x)?;
        Ok((scaler, scaled))
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fit_computes_mean_and_std() {
        let x = array![[1.0, 10.0], [3.0, 10.0], [5.0, 10.0]];
        let scaler = StandardScaler::fit(x.view()).unwrap();

        assert_eq!(scaler.mean, vec![3.0, 10.0]);
        // Population std of [1, 3, 5] is sqrt(8/3); constant column falls back to 1.0.
        assert!((scaler.std[0] - (8.0_f64 / 3.0).sqrt()).abs() < 1e-12);
        assert_eq!(scaler.std[1], 1.0);
    }

    #[test]
    fn test_transform_standardizes_columns() {
        let x = array![[1.0], [3.0], [5.0]];
        let (_, scaled) = StandardScaler::fit_transform(x.view()).unwrap();

        let mean = scaled.column(0).sum() / 3.0;
        let var = scaled.column(0).iter().map(|v| (v - mean).powi(2)).sum::<f64>() / 3.0;

        assert!(mean.abs() < 1e-12);
        assert!((var - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_column_maps_to_zero() {
        let x = array![[7.0], [7.0], [7.0]];
        let (_, scaled) = StandardScaler::fit_transform(x.view()).unwrap();

        assert!(scaled.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_transform_rejects_width_mismatch() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let scaler = StandardScaler::fit(x.view()).unwrap();

        let narrow = array![[1.0], [2.0]];
        assert!(scaler.transform(narrow.view()).is_err());
    }

    #[test]
    fn test_fit_rejects_empty_matrix() {
        let x = Array2::<f64>::zeros((0, 3));
        let err = StandardScaler::fit(x.view()).unwrap_err();

        assert!(matches!(err, DomainError::Training { .. }));
    }

    #[test]
    fn test_serde_round_trip_preserves_transform() {
        let x = array![[1.0, 2.0], [3.0, 8.0], [5.0, 5.0]];
        let scaler = StandardScaler::fit(x.view()).unwrap();

        let json = serde_json::to_string(&scaler).unwrap();
        let restored: StandardScaler = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, scaler);
        assert_eq!(
            restored.transform(x.view()).unwrap(),
            scaler.transform(x.view()).unwrap()
        );
    }
}

//! Evaluation metrics for a training run

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Metrics computed on the held-out partition. Returned to the caller and
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingMetrics {
    pub accuracy: f64,
    pub f1_score: f64,
}

/// Accuracy and weighted F1 of predictions against true labels.
///
/// The F1 per class is weighted by class support; classes the model never
/// predicts contribute a zero precision rather than an error.
pub fn evaluate(truth: &[usize], predicted: &[usize]) -> Result<TrainingMetrics, DomainError> {
    if truth.is_empty() {
        return Err(DomainError::training("cannot evaluate on an empty partition"));
    }
    if truth.len() != predicted.len() {
        return Err(DomainError::training(format!(
            "{} true labels but {} predictions",
            truth.len(),
            predicted.len()
        )));
    }

    let n = truth.len();
    let n_classes = truth
        .iter()
        .chain(predicted.iter())
        .max()
        .copied()
        .unwrap_or(0)
        + 1;

    let correct = truth
        .iter()
        .zip(predicted.iter())
        .filter(|(t, p)| t == p)
        .count();
    let accuracy = correct as f64 / n as f64;

    let mut f1_score = 0.0;
    for class in 0..n_classes {
        let tp = truth
            .iter()
            .zip(predicted.iter())
            .filter(|(t, p)| **t == class && **p == class)
            .count() as f64;
        let support = truth.iter().filter(|t| **t == class).count() as f64;
        let predicted_count = predicted.iter().filter(|p| **p == class).count() as f64;

        if support == 0.0 {
            continue;
        }

        let precision = if predicted_count > 0.0 { tp / predicted_count } else { 0.0 };
        let recall = tp / support;
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        f1_score += f1 * support / n as f64;
    }

    Ok(TrainingMetrics { accuracy, f1_score })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_predictions() {
        let metrics = evaluate(&[0, 1, 0, 1], &[0, 1, 0, 1]).unwrap();
        assert_eq!(metrics.accuracy, 1.0);
        assert_eq!(metrics.f1_score, 1.0);
    }

    #[test]
    fn test_known_confusion() {
        // class 0: precision 2/3, recall 2/3, f1 2/3, support 3
        // class 1: precision 1/2, recall 1/2, f1 1/2, support 2
        // weighted f1 = (3 * 2/3 + 2 * 1/2) / 5 = 0.6
        let metrics = evaluate(&[0, 0, 0, 1, 1], &[0, 0, 1, 1, 0]).unwrap();

        assert!((metrics.accuracy - 0.6).abs() < 1e-12);
        assert!((metrics.f1_score - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_never_predicted_class_scores_zero() {
        // Model collapses to class 0; class 1 gets f1 = 0.
        let metrics = evaluate(&[0, 0, 1, 1], &[0, 0, 0, 0]).unwrap();

        assert_eq!(metrics.accuracy, 0.5);
        // class 0: precision 0.5, recall 1.0, f1 2/3, weight 0.5
        assert!((metrics.f1_score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_metrics_in_unit_interval() {
        let metrics = evaluate(&[0, 1, 1, 0, 1], &[1, 1, 0, 0, 1]).unwrap();
        assert!((0.0..=1.0).contains(&metrics.accuracy));
        assert!((0.0..=1.0).contains(&metrics.f1_score));
    }

    #[test]
    fn test_empty_partition_rejected() {
        assert!(evaluate(&[], &[]).is_err());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert!(evaluate(&[0, 1], &[0]).is_err());
    }
}

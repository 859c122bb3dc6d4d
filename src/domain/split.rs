//! Deterministic train/test partitioning

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::DomainError;

/// Shuffle `0..n_rows` with a seeded RNG and cut off the test partition.
///
/// The same row count, ratio and seed always produce the same partition, so
/// repeated training runs on identical data are reproducible bit-for-bit.
/// Returns `(train_indices, test_indices)`.
pub fn train_test_split(
    n_rows: usize,
    test_ratio: f64,
    seed: u64,
) -> Result<(Vec<usize>, Vec<usize>), DomainError> {
    if !(0.0..1.0).contains(&test_ratio) || test_ratio == 0.0 {
        return Err(DomainError::training(format!(
            "test ratio must be in (0, 1), got {}",
            test_ratio
        )));
    }

    let n_test = (n_rows as f64 * test_ratio).ceil() as usize;
    if n_test == 0 || n_test >= n_rows {
        return Err(DomainError::training(format!(
            "cannot split {} rows into train and test partitions with ratio {}",
            n_rows, test_ratio
        )));
    }

    let mut indices: Vec<usize> = (0..n_rows).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let train = indices.split_off(n_test);
    Ok((train, indices))
}

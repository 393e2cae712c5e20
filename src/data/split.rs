//! Stratified train/test splitting
//!
//! The split preserves each class's share of the whole in both partitions:
//! rows are pooled per class, each pool is shuffled with a seeded RNG, and
//! the leading `round(pool_len * test_fraction)` rows of each pool become
//! the test partition. Deterministic for a fixed seed.

use ndarray::{Array1, Array2, Axis};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Train and test partitions, each a row-aligned (features, labels) pair.
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub train_features: Array2<f32>,
    pub test_features: Array2<f32>,
    pub train_labels: Array1<f32>,
    pub test_labels: Array1<f32>,
}

/// Partition rows into stratified train and test subsets.
///
/// `test_fraction` is the target share of each class placed in the test
/// partition; `seed` fixes the shuffle so two runs over the same data
/// produce identical partitions.
///
/// # Panics
///
/// Panics if `features` and `labels` disagree on row count.
pub fn stratified_split(
    features: &Array2<f32>,
    labels: &Array1<f32>,
    test_fraction: f64,
    seed: u64,
) -> TrainTestSplit {
    assert_eq!(
        features.nrows(),
        labels.len(),
        "features and labels must be row-aligned"
    );

    let mut negatives: Vec<usize> = Vec::new();
    let mut positives: Vec<usize> = Vec::new();
    for (i, &label) in labels.iter().enumerate() {
        if label == 1.0 {
            positives.push(i);
        } else {
            negatives.push(i);
        }
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    negatives.shuffle(&mut rng);
    positives.shuffle(&mut rng);

    let test_neg = (negatives.len() as f64 * test_fraction).round() as usize;
    let test_pos = (positives.len() as f64 * test_fraction).round() as usize;

    let test_indices: Vec<usize> = negatives[..test_neg]
        .iter()
        .chain(positives[..test_pos].iter())
        .copied()
        .collect();
    let train_indices: Vec<usize> = negatives[test_neg..]
        .iter()
        .chain(positives[test_pos..].iter())
        .copied()
        .collect();

    TrainTestSplit {
        train_features: features.select(Axis(0), &train_indices),
        test_features: features.select(Axis(0), &test_indices),
        train_labels: labels.select(Axis(0), &train_indices),
        test_labels: labels.select(Axis(0), &test_indices),
    }
}

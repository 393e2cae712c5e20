//! Mini-batch iteration over the training rows

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Mini-batch iterator over borrowed feature/label views.
///
/// Yields `(features, labels)` batches of `batch_size` rows (the last batch
/// of an epoch may be smaller). Call [`reshuffle`](Self::reshuffle) at the
/// start of each epoch; the RNG is derived from `seed + epoch` so a run is
/// reproducible end to end.
pub struct BatchIterator<'a> {
    features: ArrayView2<'a, f32>,
    labels: ArrayView1<'a, f32>,
    indices: Vec<usize>,
    batch_size: usize,
    pos: usize,
}

impl<'a> BatchIterator<'a> {
    /// # Panics
    ///
    /// Panics if `batch_size` is zero or the inputs are misaligned.
    pub fn new(
        features: ArrayView2<'a, f32>,
        labels: ArrayView1<'a, f32>,
        batch_size: usize,
    ) -> Self {
        assert!(batch_size > 0, "batch_size must be > 0");
        assert_eq!(
            features.nrows(),
            labels.len(),
            "features and labels must be row-aligned"
        );
        let n = features.nrows();
        Self {
            features,
            labels,
            indices: (0..n).collect(),
            batch_size,
            pos: 0,
        }
    }

    /// Reshuffle for a new epoch and rewind to the first batch.
    pub fn reshuffle(&mut self, seed: u64, epoch: usize) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(epoch as u64));
        self.indices.shuffle(&mut rng);
        self.pos = 0;
    }

    /// Next mini-batch, or `None` once the epoch is exhausted.
    pub fn next_batch(&mut self) -> Option<(Array2<f32>, Array1<f32>)> {
        let n = self.indices.len();
        if self.pos >= n {
            return None;
        }

        let end = (self.pos + self.batch_size).min(n);
        let batch_idx = &self.indices[self.pos..end];
        self.pos = end;

        Some((
            self.features.select(Axis(0), batch_idx),
            self.labels.select(Axis(0), batch_idx),
        ))
    }
}

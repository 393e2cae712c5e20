//! Training configuration

/// Hyperparameters for one training run.
///
/// The pipeline has no tunable surface (every value is a fixed constant),
/// so `Default` carries the canonical settings and tests shrink them.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// Hidden layer width
    pub hidden_units: usize,
    /// Adam learning rate
    pub learning_rate: f32,
    /// Full passes over the training data
    pub epochs: usize,
    /// Mini-batch size (final batch may be smaller)
    pub batch_size: usize,
    /// Seed for weight initialization and epoch shuffles
    pub seed: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            hidden_units: 100,
            learning_rate: 0.001,
            epochs: 100,
            batch_size: 32,
            seed: 0,
        }
    }
}

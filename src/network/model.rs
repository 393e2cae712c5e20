//! Network definition, forward pass, and gradients
//!
//! A two-layer dense network: `input -> hidden (ReLU) -> 1 (sigmoid)`.
//! The output is a fraud probability in [0, 1]. Training minimizes binary
//! cross-entropy computed in the numerically stable logit form
//! `max(z, 0) - z*t + ln(1 + exp(-|z|))`, whose gradient with respect to
//! the logit is simply `sigmoid(z) - t`.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Two-layer dense network producing a fraud probability.
///
/// Weight matrices are stored row-major: `w1` is `[input, hidden]`, `w2`
/// is `[hidden, 1]`. Serializes as a whole (architecture + weights), which
/// is the on-disk model artifact format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudNet {
    w1: Array2<f32>,
    b1: Array1<f32>,
    w2: Array2<f32>,
    b2: Array1<f32>,
}

/// Per-parameter gradients from one backward pass, shaped like the network.
#[derive(Debug, Clone)]
pub struct Gradients {
    pub w1: Array2<f32>,
    pub b1: Array1<f32>,
    pub w2: Array2<f32>,
    pub b2: Array1<f32>,
}

/// Outcome of a backward pass over one batch.
#[derive(Debug, Clone)]
pub struct BackwardPass {
    /// Mean binary cross-entropy over the batch
    pub loss: f32,
    /// Correct predictions at the 0.5 threshold
    pub correct: usize,
    pub grads: Gradients,
}

/// Numerically stable sigmoid.
fn sigmoid(z: f32) -> f32 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let exp_z = z.exp();
        exp_z / (1.0 + exp_z)
    }
}

/// Stable per-element BCE on a logit: `max(z, 0) - z*t + ln(1 + exp(-|z|))`.
fn stable_bce(logit: f32, target: f32) -> f32 {
    logit.max(0.0) - logit * target + (1.0 + (-logit.abs()).exp()).ln()
}

impl FraudNet {
    /// Create a fresh network with Glorot-uniform weights and zero biases.
    ///
    /// Initialization is seeded, so the same seed yields the same starting
    /// point.
    #[must_use]
    pub fn new(input_dim: usize, hidden_units: usize, seed: u64) -> Self {
        assert!(input_dim > 0, "input_dim must be > 0");
        assert!(hidden_units > 0, "hidden_units must be > 0");

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let limit1 = (6.0 / (input_dim + hidden_units) as f32).sqrt();
        let limit2 = (6.0 / (hidden_units + 1) as f32).sqrt();

        let w1 =
            Array2::from_shape_fn((input_dim, hidden_units), |_| rng.random_range(-limit1..limit1));
        let w2 = Array2::from_shape_fn((hidden_units, 1), |_| rng.random_range(-limit2..limit2));

        Self {
            w1,
            b1: Array1::zeros(hidden_units),
            w2,
            b2: Array1::zeros(1),
        }
    }

    /// Input dimensionality (feature count the network was built for).
    #[must_use]
    pub fn input_dim(&self) -> usize {
        self.w1.nrows()
    }

    /// Hidden layer width.
    #[must_use]
    pub fn hidden_units(&self) -> usize {
        self.w1.ncols()
    }

    /// Total trainable parameter count.
    #[must_use]
    pub fn num_parameters(&self) -> usize {
        self.w1.len() + self.b1.len() + self.w2.len() + self.b2.len()
    }

    /// Whether the stored layer shapes agree with each other. A
    /// deserialized artifact that fails this check is unusable.
    #[must_use]
    pub fn shapes_consistent(&self) -> bool {
        self.b1.len() == self.w1.ncols()
            && self.w2.nrows() == self.w1.ncols()
            && self.w2.ncols() == 1
            && self.b2.len() == 1
    }

    /// Fraud probabilities for a batch of rows, one per row.
    #[must_use]
    pub fn predict_proba(&self, features: &Array2<f32>) -> Array1<f32> {
        let z1 = features.dot(&self.w1) + &self.b1;
        let a1 = z1.mapv(|v| v.max(0.0));
        let logits = a1.dot(&self.w2) + &self.b2;
        logits.column(0).mapv(sigmoid)
    }

    /// Forward + backward over one batch of unweighted labels.
    ///
    /// Returns the mean BCE loss, the number of thresholded predictions
    /// matching the labels, and gradients for every parameter.
    ///
    /// # Panics
    ///
    /// Panics if the batch is empty or features and labels disagree on
    /// row count.
    #[must_use]
    pub fn backward(&self, features: ArrayView2<'_, f32>, labels: ArrayView1<'_, f32>) -> BackwardPass {
        let batch = features.nrows();
        assert!(batch > 0, "backward pass needs a non-empty batch");
        assert_eq!(batch, labels.len(), "features and labels must be row-aligned");

        let z1 = features.dot(&self.w1) + &self.b1;
        let a1 = z1.mapv(|v| v.max(0.0));
        let logits = a1.dot(&self.w2) + &self.b2;
        let probs = logits.mapv(sigmoid);

        let loss = logits
            .iter()
            .zip(labels.iter())
            .map(|(&z, &t)| stable_bce(z, t))
            .sum::<f32>()
            / batch as f32;
        let correct = probs
            .iter()
            .zip(labels.iter())
            .filter(|&(&p, &t)| (p >= 0.5) == (t >= 0.5))
            .count();

        // d(loss)/d(logit) = (sigmoid(z) - t) / batch
        let targets = labels.insert_axis(Axis(1));
        let d_logits = (&probs - &targets) / batch as f32;

        let grad_w2 = a1.t().dot(&d_logits);
        let grad_b2 = d_logits.sum_axis(Axis(0));

        let d_a1 = d_logits.dot(&self.w2.t());
        let relu_mask = z1.mapv(|v| if v > 0.0 { 1.0 } else { 0.0 });
        let d_z1 = d_a1 * &relu_mask;

        let grad_w1 = features.t().dot(&d_z1);
        let grad_b1 = d_z1.sum_axis(Axis(0));

        BackwardPass {
            loss,
            correct,
            grads: Gradients {
                w1: grad_w1,
                b1: grad_b1,
                w2: grad_w2,
                b2: grad_b2,
            },
        }
    }

    /// Parameters as flat mutable slices, in a fixed order matching
    /// [`Gradients::as_slices`].
    pub fn parameters_mut(&mut self) -> Vec<&mut [f32]> {
        vec![
            self.w1.as_slice_mut().expect("w1 must be contiguous"),
            self.b1.as_slice_mut().expect("b1 must be contiguous"),
            self.w2.as_slice_mut().expect("w2 must be contiguous"),
            self.b2.as_slice_mut().expect("b2 must be contiguous"),
        ]
    }
}

impl Gradients {
    /// Gradients as flat slices, ordered like [`FraudNet::parameters_mut`].
    #[must_use]
    pub fn as_slices(&self) -> Vec<&[f32]> {
        vec![
            self.w1.as_slice().expect("w1 grad must be contiguous"),
            self.b1.as_slice().expect("b1 grad must be contiguous"),
            self.w2.as_slice().expect("w2 grad must be contiguous"),
            self.b2.as_slice().expect("b2 grad must be contiguous"),
        ]
    }
}

//! Per-sample class weights
//!
//! Fraud is roughly 580x rarer than legitimate traffic in the source
//! dataset, so plain accuracy would reward a classifier that never flags
//! anything. Scoring instead weights each sample by its class, using two
//! fixed constants derived from the inverse class frequencies of the
//! original dataset. They are deliberately NOT recomputed from the input:
//! the comparison baselines were measured with these exact values.

use ndarray::Array1;

/// Weight of a legitimate (label 0) sample.
pub const LEGITIMATE_WEIGHT: f64 = 0.001_758_612_806_218_45;

/// Weight of a fraudulent (label 1) sample.
pub const FRAUD_WEIGHT: f64 = 1.016_260_162_601_63;

/// Derive a per-sample weight vector from a binary label vector.
///
/// Pure substitution, label 0 → [`LEGITIMATE_WEIGHT`], label 1 →
/// [`FRAUD_WEIGHT`]; the labels themselves are untouched. The result is
/// `f64` so the weighted-accuracy arithmetic keeps full precision.
///
/// # Example
///
/// ```
/// use detectar::data::{sample_weights, FRAUD_WEIGHT, LEGITIMATE_WEIGHT};
/// use ndarray::array;
///
/// let weights = sample_weights(&array![0.0, 1.0, 0.0]);
/// assert_eq!(weights, vec![LEGITIMATE_WEIGHT, FRAUD_WEIGHT, LEGITIMATE_WEIGHT]);
/// ```
#[must_use]
pub fn sample_weights(labels: &Array1<f32>) -> Vec<f64> {
    labels
        .iter()
        .map(|&label| {
            if label == 1.0 {
                FRAUD_WEIGHT
            } else {
                LEGITIMATE_WEIGHT
            }
        })
        .collect()
}

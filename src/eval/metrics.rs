//! Classification metrics
//!
//! The network outputs continuous probabilities, so thresholding to
//! discrete labels happens here; accuracy is then weighted per sample to
//! compensate for the heavy class imbalance.

use ndarray::Array1;

/// Threshold probabilities into binary class labels (p >= 0.5 → 1).
#[must_use]
pub fn predict_classes(probabilities: &Array1<f32>) -> Array1<f32> {
    probabilities.mapv(|p| if p >= 0.5 { 1.0 } else { 0.0 })
}

/// Sample-weighted classification accuracy:
/// `Σ wᵢ·[predᵢ == labelᵢ] / Σ wᵢ`.
///
/// A misclassified rare positive costs far more than a misclassified
/// common negative when the weights come from
/// [`sample_weights`](crate::data::sample_weights). Returns 0.0 for empty
/// input.
///
/// # Example
///
/// ```
/// use detectar::eval::weighted_accuracy;
/// use ndarray::array;
///
/// let labels = array![0.0, 0.0, 1.0, 1.0];
/// let predictions = array![0.0, 1.0, 1.0, 0.0];
/// let weights = [1.0, 1.0, 10.0, 10.0];
/// assert_eq!(weighted_accuracy(&labels, &predictions, &weights), 0.5);
/// ```
///
/// # Panics
///
/// Panics if the three inputs disagree on length.
#[must_use]
pub fn weighted_accuracy(labels: &Array1<f32>, predictions: &Array1<f32>, weights: &[f64]) -> f64 {
    assert_eq!(
        labels.len(),
        predictions.len(),
        "labels and predictions must have same length"
    );
    assert_eq!(
        labels.len(),
        weights.len(),
        "labels and weights must have same length"
    );

    let mut total = 0.0f64;
    let mut matched = 0.0f64;
    for ((&label, &prediction), &weight) in labels.iter().zip(predictions.iter()).zip(weights) {
        total += weight;
        if label == prediction {
            matched += weight;
        }
    }

    if total > 0.0 {
        matched / total
    } else {
        0.0
    }
}

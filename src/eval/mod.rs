//! Scoring and baseline comparison

mod comparison;
mod metrics;

pub use comparison::{best_technique, Technique, DECISION_TREE_SCORE, SVM_SCORE};
pub use metrics::{predict_classes, weighted_accuracy};

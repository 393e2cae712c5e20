//! Comparison against the precomputed baseline classifiers
//!
//! The decision-tree and SVM scores were measured once on the same dataset
//! with the same weighting scheme; only the constants survive here. The
//! comparison is a sequential short-circuit, not a three-way maximum: the
//! decision tree is checked first and wins any overlap. That priority is
//! inherited behavior and must not be "corrected" to a true max.

use std::fmt;

/// Test weighted accuracy of the precomputed decision-tree classifier.
pub const DECISION_TREE_SCORE: f64 = 0.97122;

/// Test weighted accuracy of the precomputed SVM classifier.
pub const SVM_SCORE: f64 = 0.98415;

/// One of the three compared classification techniques.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Technique {
    DecisionTree,
    Svm,
    NeuralNetwork,
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Technique::DecisionTree => write!(f, "Decision Tree Classifier"),
            Technique::Svm => write!(f, "SVM Classifier"),
            Technique::NeuralNetwork => write!(f, "Neural Network"),
        }
    }
}

/// Pick the winning technique for a given network test score.
///
/// # Example
///
/// ```
/// use detectar::eval::{best_technique, Technique};
///
/// assert_eq!(best_technique(0.99), Technique::NeuralNetwork);
/// assert_eq!(best_technique(0.96), Technique::DecisionTree);
/// ```
#[must_use]
pub fn best_technique(test_score: f64) -> Technique {
    if DECISION_TREE_SCORE > test_score {
        Technique::DecisionTree
    } else if SVM_SCORE > test_score {
        Technique::Svm
    } else {
        Technique::NeuralNetwork
    }
}

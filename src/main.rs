//! detectar CLI
//!
//! End-to-end fraud detection pipeline: load the dataset, split, derive
//! class weights, load-or-train the network, score both partitions with
//! weighted accuracy, and report the best of the three techniques. Every
//! parameter is a fixed constant; there are no flags, environment
//! variables, or config files.

use std::process::ExitCode;

use detectar::data::{load_dataset, sample_weights, stratified_split};
use detectar::eval::{
    best_technique, predict_classes, weighted_accuracy, DECISION_TREE_SCORE, SVM_SCORE,
};
use detectar::io::{load_network, save_network};
use detectar::train::{train, TrainConfig};
use detectar::Result;

/// Fixed relative name of the labeled transaction dataset.
const DATASET_FILE: &str = "creditcard_dataset.csv";

/// Fixed relative name of the model artifact.
const MODEL_FILE: &str = "fraud_net.json";

/// Share of each class placed in the test partition.
const TEST_FRACTION: f64 = 0.33;

/// Seed for the stratified split shuffle.
const SPLIT_SEED: u64 = 0;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let dataset = load_dataset(DATASET_FILE)?;
    println!(
        "Loaded {} transactions with {} features",
        dataset.n_rows(),
        dataset.n_features()
    );

    let split = stratified_split(&dataset.features, &dataset.labels, TEST_FRACTION, SPLIT_SEED);
    let train_weights = sample_weights(&split.train_labels);
    let test_weights = sample_weights(&split.test_labels);

    let net = match load_network(MODEL_FILE, dataset.n_features()) {
        Some(net) => {
            println!("Loaded saved model from {MODEL_FILE}");
            net
        }
        None => {
            let net = train(
                &split.train_features,
                &split.train_labels,
                &TrainConfig::default(),
            );
            save_network(&net, MODEL_FILE)?;
            println!("Saved trained model to {MODEL_FILE}");
            net
        }
    };

    let train_predictions = predict_classes(&net.predict_proba(&split.train_features));
    let test_predictions = predict_classes(&net.predict_proba(&split.test_features));

    let train_score = weighted_accuracy(&split.train_labels, &train_predictions, &train_weights);
    let test_score = weighted_accuracy(&split.test_labels, &test_predictions, &test_weights);
    println!("Train Weighted Classification Accuracy: {train_score:.6}");
    println!("Test Weighted Classification Accuracy: {test_score:.6}");

    println!();
    println!("* * * Comparison with Decision Tree and SVM Classifiers * * *");
    println!();
    println!(
        "Test Weighted Classification Accuracy Using Decision Tree Classifier: {DECISION_TREE_SCORE:.6}"
    );
    println!("Test Weighted Classification Accuracy Using SVM Classifier: {SVM_SCORE:.6}");

    println!();
    println!("{} provided the most accurate result", best_technique(test_score));

    Ok(())
}

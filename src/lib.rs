//! detectar: credit-card fraud detection trainer
//!
//! A linear supervised-learning pipeline over an anonymized tabular dataset:
//!
//! 1. Load the labeled dataset ([`data::load_dataset`])
//! 2. Stratified train/test split, fixed seed ([`data::stratified_split`])
//! 3. Per-sample class weights for imbalance-aware scoring
//!    ([`data::sample_weights`])
//! 4. Load a saved network, or train and persist a fresh one
//!    ([`io`], [`train`], [`network`])
//! 5. Score with weighted accuracy and compare against the precomputed
//!    decision-tree and SVM baselines ([`eval`])
//!
//! The binary (`src/main.rs`) threads these stages together; every stage is
//! a plain function over explicit inputs and outputs.

pub mod data;
pub mod error;
pub mod eval;
pub mod io;
pub mod network;
pub mod optim;
pub mod train;

pub use error::{Error, Result};
pub use network::FraudNet;

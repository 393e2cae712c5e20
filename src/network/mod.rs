//! Feed-forward fraud classifier

mod model;

pub use model::{BackwardPass, FraudNet, Gradients};

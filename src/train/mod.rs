//! Training loop for the fraud network
//!
//! Mini-batch gradient descent with Adam over a fixed number of epochs,
//! reshuffling the training rows each epoch with a seeded RNG. Sample
//! weights play no part here; they exist only for scoring.

mod batch;
mod config;
mod trainer;

pub use batch::BatchIterator;
pub use config::TrainConfig;
pub use trainer::train;

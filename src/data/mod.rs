//! Dataset loading, splitting, and class weighting

mod loader;
mod split;
mod weights;

pub use loader::{load_dataset, CreditDataset, LABEL_COLUMN};
pub use split::{stratified_split, TrainTestSplit};
pub use weights::{sample_weights, FRAUD_WEIGHT, LEGITIMATE_WEIGHT};

//! Crate error types

use thiserror::Error;

/// Fatal pipeline errors.
///
/// Only the fatal paths appear here: an unreadable or malformed dataset and
/// a failed model save. A model artifact that cannot be *loaded* is not an
/// error; `io::load_network` returns `None` and the pipeline trains fresh.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset error: {0}")]
    Dataset(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

//! Model saving

use crate::network::FraudNet;
use crate::{Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a trained network to a JSON file.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the network cannot be encoded and
/// [`Error::Io`] if the file cannot be written. Both are fatal: a run that
/// trained a model but failed to persist it halts.
pub fn save_network(net: &FraudNet, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(net)
        .map_err(|e| Error::Serialization(format!("model serialization failed: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;

    Ok(())
}

//! Model loading

use crate::network::FraudNet;
use std::fs;
use std::path::Path;

/// Attempt to load a saved network compatible with the given input width.
///
/// Returns `None` for *every* failure mode: missing file, unreadable file,
/// corrupt JSON, internally inconsistent layer shapes, or an input width
/// that does not match the dataset. The caller treats `None` as "no usable
/// artifact" and trains from scratch; nothing here is reported as an error.
#[must_use]
pub fn load_network(path: impl AsRef<Path>, expected_input_dim: usize) -> Option<FraudNet> {
    let content = fs::read_to_string(path).ok()?;
    let net: FraudNet = serde_json::from_str(&content).ok()?;

    if !net.shapes_consistent() || net.input_dim() != expected_input_dim {
        return None;
    }

    Some(net)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::io::save_network;
    use ndarray::Array2;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_round_trip_preserves_predictions() {
        let net = FraudNet::new(5, 12, 9);
        let file = NamedTempFile::new().unwrap();
        save_network(&net, file.path()).unwrap();

        let restored = load_network(file.path(), 5).expect("round trip");

        let x = Array2::from_shape_fn((8, 5), |(i, j)| (i as f32) * 1.3 - j as f32);
        assert_eq!(net.predict_proba(&x), restored.predict_proba(&x));
    }

    #[test]
    fn test_missing_file_is_none() {
        assert!(load_network("/nonexistent/fraud_net.json", 30).is_none());
    }

    #[test]
    fn test_corrupt_json_is_none() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json at all").unwrap();
        file.flush().unwrap();
        assert!(load_network(file.path(), 30).is_none());
    }

    #[test]
    fn test_unexpected_schema_is_none() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"weights": [1.0, 2.0]}"#).unwrap();
        file.flush().unwrap();
        assert!(load_network(file.path(), 30).is_none());
    }

    #[test]
    fn test_wrong_input_dim_is_none() {
        let net = FraudNet::new(5, 12, 0);
        let file = NamedTempFile::new().unwrap();
        save_network(&net, file.path()).unwrap();

        assert!(load_network(file.path(), 30).is_none());
        assert!(load_network(file.path(), 5).is_some());
    }
}

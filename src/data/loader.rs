//! Labeled dataset loading
//!
//! Reads the headered CSV of anonymized transactions: the leading column is
//! a transaction index and is dropped, the `Class` column is the binary
//! fraud label, and everything in between is a numeric feature. The loader
//! only parses; it does not validate label values or feature ranges.

use crate::{Error, Result};
use ndarray::{Array1, Array2};
use std::fs::File;
use std::path::Path;

/// Header name of the label column.
pub const LABEL_COLUMN: &str = "Class";

/// An immutable in-memory dataset: feature matrix and label vector,
/// row-aligned (`features.nrows() == labels.len()`).
#[derive(Debug, Clone)]
pub struct CreditDataset {
    /// Feature matrix `[rows, features]`
    pub features: Array2<f32>,
    /// Binary label vector (0 = legitimate, 1 = fraud)
    pub labels: Array1<f32>,
}

impl CreditDataset {
    /// Number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.features.nrows()
    }

    /// Number of feature columns (identifier and label excluded).
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }
}

/// Load the dataset from a CSV file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened and [`Error::Dataset`]
/// if the label column is missing, a row is ragged, or a field fails to
/// parse as a number. All of these are fatal to the pipeline.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<CreditDataset> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| Error::Dataset(format!("{}: invalid header row: {e}", path.display())))?
        .clone();
    let label_idx = headers.iter().position(|h| h == LABEL_COLUMN).ok_or_else(|| {
        Error::Dataset(format!(
            "{}: label column '{LABEL_COLUMN}' not found",
            path.display()
        ))
    })?;
    if headers.len() < 3 {
        return Err(Error::Dataset(format!(
            "{}: expected an identifier column, feature columns, and '{LABEL_COLUMN}'",
            path.display()
        )));
    }

    // One identifier column plus the label column are excluded.
    let n_features = headers.len() - 2;

    let mut features = Vec::new();
    let mut labels = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| Error::Dataset(format!("{}: row {}: {e}", path.display(), row + 1)))?;
        for (col, field) in record.iter().enumerate() {
            if col == 0 {
                continue;
            }
            let value: f32 = field.trim().parse().map_err(|_| {
                Error::Dataset(format!(
                    "{}: row {}, column '{}': invalid number '{field}'",
                    path.display(),
                    row + 1,
                    &headers[col],
                ))
            })?;
            if col == label_idx {
                labels.push(value);
            } else {
                features.push(value);
            }
        }
    }

    let n_rows = labels.len();
    let features = Array2::from_shape_vec((n_rows, n_features), features)
        .map_err(|e| Error::Dataset(format!("{}: inconsistent row width: {e}", path.display())))?;

    Ok(CreditDataset {
        features,
        labels: Array1::from(labels),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_drops_identifier_column() {
        let file = write_csv("Id,V1,V2,Class\n0,1.5,-0.5,0\n1,2.5,0.25,1\n");
        let dataset = load_dataset(file.path()).unwrap();

        assert_eq!(dataset.n_rows(), 2);
        assert_eq!(dataset.n_features(), 2);
        // Identifier values (0, 1) must not appear as features.
        assert_eq!(dataset.features[[0, 0]], 1.5);
        assert_eq!(dataset.features[[0, 1]], -0.5);
        assert_eq!(dataset.features[[1, 0]], 2.5);
    }

    #[test]
    fn test_load_extracts_labels() {
        let file = write_csv("Id,V1,Class\n0,0.1,0\n1,0.2,1\n2,0.3,0\n");
        let dataset = load_dataset(file.path()).unwrap();

        assert_eq!(dataset.labels.to_vec(), vec![0.0, 1.0, 0.0]);
        assert_eq!(dataset.features.ncols(), 1);
    }

    #[test]
    fn test_rows_and_labels_aligned() {
        let file = write_csv("Id,V1,V2,V3,Class\n0,1,2,3,0\n1,4,5,6,1\n2,7,8,9,0\n");
        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.features.nrows(), dataset.labels.len());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_dataset("/nonexistent/creditcard_dataset.csv").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_missing_label_column() {
        let file = write_csv("Id,V1,V2\n0,1.0,2.0\n");
        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, Error::Dataset(_)));
        assert!(err.to_string().contains("Class"));
    }

    #[test]
    fn test_unparsable_field() {
        let file = write_csv("Id,V1,Class\n0,not-a-number,0\n");
        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, Error::Dataset(_)));
        assert!(err.to_string().contains("V1"));
    }

    #[test]
    fn test_ragged_row() {
        let file = write_csv("Id,V1,V2,Class\n0,1.0,2.0,0\n1,3.0,1\n");
        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, Error::Dataset(_)));
    }

    #[test]
    fn test_empty_dataset() {
        let file = write_csv("Id,V1,V2,Class\n");
        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.n_rows(), 0);
        assert_eq!(dataset.n_features(), 2);
    }

    #[test]
    fn test_label_values_not_validated() {
        // Malformed labels load as-is; downstream behavior is undefined.
        let file = write_csv("Id,V1,Class\n0,1.0,3\n");
        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.labels[0], 3.0);
    }
}

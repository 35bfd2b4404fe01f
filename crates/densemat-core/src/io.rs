//! Matrix persistence
//!
//! A matrix is stored as a JSON document `{ "n_rows", "n_cols", "data" }`
//! with `data` in column-major order. Loading validates that the buffer
//! length agrees with the declared shape.

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

#[derive(Serialize, Deserialize)]
struct MatrixRecord {
    n_rows: usize,
    n_cols: usize,
    data: Vec<f64>,
}

impl From<&Matrix> for MatrixRecord {
    fn from(m: &Matrix) -> Self {
        Self {
            n_rows: m.n_rows(),
            n_cols: m.n_cols(),
            data: m.as_slice().to_vec(),
        }
    }
}

impl TryFrom<MatrixRecord> for Matrix {
    type Error = Error;

    fn try_from(rec: MatrixRecord) -> Result<Self> {
        if rec.data.len() != rec.n_rows * rec.n_cols {
            return Err(Error::ShapeMismatch {
                op: "load",
                expected: format!("{} elements for {}x{}", rec.n_rows * rec.n_cols, rec.n_rows, rec.n_cols),
                actual: format!("{} elements", rec.data.len()),
            });
        }
        Matrix::from_vec(rec.n_rows, rec.n_cols, rec.data)
    }
}

pub fn to_writer<W: Write>(writer: W, m: &Matrix) -> Result<()> {
    serde_json::to_writer(writer, &MatrixRecord::from(m))?;
    Ok(())
}

pub fn from_reader<R: Read>(reader: R) -> Result<Matrix> {
    let rec: MatrixRecord = serde_json::from_reader(reader)?;
    Matrix::try_from(rec)
}

/// Write `m` to `path`, replacing any existing file
pub fn save<P: AsRef<Path>>(path: P, m: &Matrix) -> Result<()> {
    let path = path.as_ref();
    debug!("Saving {}x{} matrix to {}", m.n_rows(), m.n_cols(), path.display());
    let mut writer = BufWriter::new(File::create(path)?);
    to_writer(&mut writer, m)?;
    writer.flush()?;
    Ok(())
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let path = path.as_ref();
    let m = from_reader(BufReader::new(File::open(path)?))?;
    debug!("Loaded {}x{} matrix from {}", m.n_rows(), m.n_cols(), path.display());
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_roundtrip() {
        let m = Matrix::from_rows(&[[1.5, -2.0, 3.0], [0.0, 4.25, -6.5]]).unwrap();
        let mut buf = Vec::new();
        to_writer(&mut buf, &m).unwrap();
        let back = from_reader(buf.as_slice()).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_document_layout_is_column_major() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let mut buf = Vec::new();
        to_writer(&mut buf, &m).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["n_rows"], 2);
        assert_eq!(value["data"], serde_json::json!([1.0, 3.0, 2.0, 4.0]));
    }

    #[test]
    fn test_rejects_inconsistent_shape() {
        let doc = r#"{"n_rows": 2, "n_cols": 2, "data": [1.0, 2.0, 3.0]}"#;
        assert!(matches!(
            from_reader(doc.as_bytes()),
            Err(Error::ShapeMismatch { .. })
        ));
        assert!(matches!(
            from_reader("not json".as_bytes()),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_file_roundtrip() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("densemat-io-{}.json", std::process::id()));
        let m = Matrix::from_fn(3, 2, |r, c| r as f64 - c as f64 * 0.5);
        save(&path, &m)?;
        let back = load(&path)?;
        std::fs::remove_file(&path)?;
        assert_eq!(back, m);
        assert!(matches!(load(&path), Err(Error::Io(_))));
        Ok(())
    }
}

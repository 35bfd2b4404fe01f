//! Error types for dense matrix operations
//!
//! Provides a unified error type for all densemat crates.

use thiserror::Error;

/// Core error type for matrix operations
#[derive(Error, Debug)]
pub enum Error {
    /// Operands or blocks whose shapes are incompatible
    #[error("Shape mismatch in {op}: expected {expected}, got {actual}")]
    ShapeMismatch {
        op: &'static str,
        expected: String,
        actual: String,
    },

    /// Element, row, column, range or index-list addressing outside the current shape
    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),

    /// Invalid parameter provided to a function
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Inverse, solve or log-determinant of a (numerically) singular matrix
    #[error("Singular matrix: {0}")]
    SingularMatrix(String),

    /// Decomposition that failed or did not converge
    #[error("Decomposition failed: {0}")]
    DecompositionFailure(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed persisted matrix
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for two shapes that must agree
    pub fn shape_mismatch(op: &'static str, expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::ShapeMismatch {
            op,
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create an error for element counts that must agree
    pub fn length_mismatch(op: &'static str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            op,
            expected: format!("{expected} elements"),
            actual: format!("{actual} elements"),
        }
    }

    /// Create an error for an index outside `0..extent`
    pub fn out_of_range(op: &str, index: usize, extent: usize) -> Self {
        Self::IndexOutOfRange(format!("{op}: index {index} outside extent {extent}"))
    }

    /// Create an error for an operation that needs a square matrix
    pub fn not_square(op: &str, shape: (usize, usize)) -> Self {
        Self::InvalidArgument(format!(
            "{op}: matrix must be square, got {}x{}",
            shape.0, shape.1
        ))
    }
}

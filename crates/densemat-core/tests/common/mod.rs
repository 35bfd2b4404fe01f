//! Shared utilities for integration tests

use densemat_core::Matrix;
use proptest::prelude::*;

pub const EPSILON: f64 = 1e-10;

/// Shapes that exercise empty, vector and square edge cases
pub fn edge_case_shapes() -> Vec<(usize, usize)> {
    vec![
        (0, 0),
        (0, 3),
        (3, 0),
        (1, 1),
        (1, 5), // row vector
        (5, 1), // column vector
        (2, 2),
        (3, 4),
        (7, 3),
    ]
}

/// Matrix whose every value encodes its own coordinates
pub fn coordinate_matrix(n_rows: usize, n_cols: usize) -> Matrix {
    Matrix::from_fn(n_rows, n_cols, |r, c| (1000 * r + c) as f64)
}

/// Strategy for small non-empty matrices with bounded values
pub fn small_matrix() -> impl Strategy<Value = Matrix> {
    (1usize..6, 1usize..6).prop_flat_map(|(r, c)| {
        prop::collection::vec(-100.0f64..100.0, r * c)
            .prop_map(move |data| Matrix::from_vec(r, c, data).unwrap())
    })
}

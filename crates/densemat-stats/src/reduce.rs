//! Directional reduction plumbing shared by the kernels

use densemat_core::{Dim, Matrix};

/// Values of row `i`, gathered from the column-major buffer
pub(crate) fn row_values(x: &Matrix, i: usize) -> Vec<f64> {
    let n_rows = x.n_rows();
    x.as_slice().iter().skip(i).step_by(n_rows.max(1)).copied().collect()
}

/// Lanes a reduction runs over: the columns for `EachCol`, the rows for `EachRow`
pub(crate) fn lanes(x: &Matrix, dim: Dim) -> Vec<Vec<f64>> {
    match dim {
        Dim::EachCol => (0..x.n_cols())
            .map(|c| x.as_slice()[c * x.n_rows()..(c + 1) * x.n_rows()].to_vec())
            .collect(),
        Dim::EachRow => (0..x.n_rows()).map(|i| row_values(x, i)).collect(),
    }
}

/// Reduce each lane to a scalar
///
/// `EachCol` yields a `1 x n_cols` row, `EachRow` an `n_rows x 1` column.
pub(crate) fn reduce<F>(x: &Matrix, dim: Dim, f: F) -> Matrix
where
    F: Fn(&[f64]) -> f64,
{
    match dim {
        Dim::EachCol => Matrix::from_fn(1, x.n_cols(), |_, c| {
            let start = c * x.n_rows();
            f(&x.as_slice()[start..start + x.n_rows()])
        }),
        Dim::EachRow => {
            let values: Vec<f64> = (0..x.n_rows()).map(|i| f(&row_values(x, i))).collect();
            Matrix::from_fn(x.n_rows(), 1, |r, _| values[r])
        }
    }
}

/// Map each lane to a vector of `width` values
///
/// `EachCol` stacks the results as columns (`width x n_cols`), `EachRow`
/// as rows (`n_rows x width`).
pub(crate) fn map_lanes<F>(x: &Matrix, dim: Dim, width: usize, f: F) -> Matrix
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    let results: Vec<Vec<f64>> = lanes(x, dim).iter().map(|lane| f(lane)).collect();
    match dim {
        Dim::EachCol => Matrix::from_fn(width, results.len(), |r, c| results[c][r]),
        Dim::EachRow => Matrix::from_fn(results.len(), width, |r, c| results[r][c]),
    }
}

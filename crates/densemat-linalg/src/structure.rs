//! Diagonal, symmetric and triangular views materialised as new matrices

use densemat_core::{Col, Error, Matrix, Result};

pub(crate) fn require_square(a: &Matrix, op: &str) -> Result<usize> {
    if !a.is_square() {
        return Err(Error::not_square(op, a.shape()));
    }
    Ok(a.n_rows())
}

/// `a` divided by its largest magnitude, and that magnitude
///
/// Sums of squares over the result cannot overflow or underflow. Zero and
/// non-finite inputs come back unscaled with factor 1.
pub(crate) fn unit_scaled(a: &Matrix) -> (Matrix, f64) {
    let scale = a.max_abs();
    if scale == 0.0 || !scale.is_finite() {
        return (a.clone(), 1.0);
    }
    (a.map(|x| x / scale), scale)
}

/// Sum of the main diagonal (any shape)
pub fn trace(a: &Matrix) -> f64 {
    a.diag().as_slice().iter().sum()
}

/// Vector input becomes a square diagonal matrix; a matrix keeps only its
/// main diagonal
pub fn diagmat(x: &Matrix) -> Matrix {
    if x.is_vec() {
        let v = x.as_slice();
        let n = v.len();
        return Matrix::from_fn(n, n, |r, c| if r == c { v[r] } else { 0.0 });
    }
    Matrix::from_fn(x.n_rows(), x.n_cols(), |r, c| if r == c { x[(r, c)] } else { 0.0 })
}

/// Main diagonal as a column
pub fn diagvec(x: &Matrix) -> Col {
    x.diag()
}

/// Symmetric matrix built from the upper triangle
pub fn symmatu(a: &Matrix) -> Result<Matrix> {
    let n = require_square(a, "symmatu")?;
    Ok(Matrix::from_fn(n, n, |r, c| if r <= c { a[(r, c)] } else { a[(c, r)] }))
}

/// Symmetric matrix built from the lower triangle
pub fn symmatl(a: &Matrix) -> Result<Matrix> {
    let n = require_square(a, "symmatl")?;
    Ok(Matrix::from_fn(n, n, |r, c| if r >= c { a[(r, c)] } else { a[(c, r)] }))
}

pub fn trimatu(a: &Matrix) -> Result<Matrix> {
    let n = require_square(a, "trimatu")?;
    Ok(Matrix::from_fn(n, n, |r, c| if r <= c { a[(r, c)] } else { 0.0 }))
}

pub fn trimatl(a: &Matrix) -> Result<Matrix> {
    let n = require_square(a, "trimatl")?;
    Ok(Matrix::from_fn(n, n, |r, c| if r >= c { a[(r, c)] } else { 0.0 }))
}

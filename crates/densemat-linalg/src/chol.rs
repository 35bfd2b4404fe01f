//! Cholesky factorisation and the symmetric positive-definite inverse

use crate::structure::require_square;
use densemat_core::{Error, Matrix, Result};

/// Upper triangular `R` with `Rᵀ·R == A`
///
/// Only the upper triangle of `a` is read. A matrix that is not positive
/// definite fails with `DecompositionFailure`.
pub fn chol(a: &Matrix) -> Result<Matrix> {
    let n = require_square(a, "chol")?;
    let mut r = Matrix::zeros(n, n);
    for j in 0..n {
        for i in 0..=j {
            let mut s = a[(i, j)];
            for k in 0..i {
                s -= r[(k, i)] * r[(k, j)];
            }
            if i == j {
                if s <= 0.0 || s.is_nan() {
                    return Err(Error::DecompositionFailure(format!(
                        "chol: matrix is not positive definite (pivot {j} is {s:e})"
                    )));
                }
                r[(j, j)] = s.sqrt();
            } else {
                r[(i, j)] = s / r[(i, i)];
            }
        }
    }
    Ok(r)
}

/// Lower triangular `L` with `L·Lᵀ == A`
pub fn chol_lower(a: &Matrix) -> Result<Matrix> {
    Ok(chol(a)?.t())
}

/// Inverse of an upper triangular matrix with a nonzero diagonal
fn upper_inverse(r: &Matrix) -> Matrix {
    let n = r.n_rows();
    let mut inv = Matrix::zeros(n, n);
    for j in 0..n {
        inv[(j, j)] = 1.0 / r[(j, j)];
        for i in (0..j).rev() {
            let mut s = 0.0;
            for k in i + 1..=j {
                s += r[(i, k)] * inv[(k, j)];
            }
            inv[(i, j)] = -s / r[(i, i)];
        }
    }
    inv
}

/// Inverse of a symmetric positive-definite matrix through `A⁻¹ = R⁻¹·R⁻ᵀ`
pub fn inv_sympd(a: &Matrix) -> Result<Matrix> {
    let r = chol(a).map_err(|e| match e {
        Error::DecompositionFailure(msg) => Error::SingularMatrix(format!("inv_sympd: {msg}")),
        other => other,
    })?;
    let ri = upper_inverse(&r);
    ri.matmul(&ri.t())
}

//! Sylvester equation `A·X + X·B + C = 0`
//!
//! Solved as the `mn x mn` linear system
//! `(I_n ⊗ A + Bᵀ ⊗ I_m)·vec(X) = -vec(C)`, which is singular exactly when
//! `A` and `-B` share an eigenvalue.

use crate::config::LinalgConfig;
use crate::lu::solve_square;
use crate::structure::require_square;
use densemat_core::{Error, Matrix, Result};
use tracing::instrument;

pub fn syl(a: &Matrix, b: &Matrix, c: &Matrix) -> Result<Matrix> {
    syl_with(a, b, c, &LinalgConfig::default())
}

#[instrument(skip(a, b, c, config), fields(m = a.n_rows(), n = b.n_rows()))]
pub fn syl_with(a: &Matrix, b: &Matrix, c: &Matrix, config: &LinalgConfig) -> Result<Matrix> {
    let m = require_square(a, "syl")?;
    let n = require_square(b, "syl")?;
    if c.shape() != (m, n) {
        return Err(Error::shape_mismatch("syl", (m, n), c.shape()));
    }
    if c.is_empty() {
        return Ok(Matrix::zeros(m, n));
    }

    let dim = m * n;
    let mut k = Matrix::zeros(dim, dim);
    for j in 0..n {
        for i in 0..m {
            let row = i + j * m;
            for p in 0..m {
                k[(row, p + j * m)] += a[(i, p)];
            }
            for l in 0..n {
                k[(row, i + l * m)] += b[(l, j)];
            }
        }
    }
    let rhs = Matrix::from_vec(dim, 1, c.as_slice().iter().map(|v| -v).collect())?;
    let x = solve_square(&k, &rhs, config).map_err(|e| match e {
        Error::SingularMatrix(msg) => {
            Error::SingularMatrix(format!("syl: A and -B share an eigenvalue ({msg})"))
        }
        other => other,
    })?;
    Matrix::from_vec(m, n, x.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual(a: &Matrix, b: &Matrix, c: &Matrix, x: &Matrix) -> f64 {
        let ax = a.matmul(x).unwrap();
        let xb = x.matmul(b).unwrap();
        ax.plus(&xb).unwrap().plus(c).unwrap().max_abs()
    }

    #[test]
    fn test_rectangular_solution() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [0.0, 3.0]]).unwrap();
        let b = Matrix::from_rows(&[[4.0, 1.0, 0.0], [0.0, 5.0, 1.0], [1.0, 0.0, 6.0]]).unwrap();
        let c = Matrix::from_rows(&[[1.0, -2.0, 3.0], [0.5, 0.0, -1.0]]).unwrap();
        let x = syl(&a, &b, &c).unwrap();
        assert_eq!(x.shape(), (2, 3));
        assert!(residual(&a, &b, &c, &x) < 1e-12);
    }

    #[test]
    fn test_scalar_case() {
        let a = Matrix::from_vec(1, 1, vec![2.0]).unwrap();
        let b = Matrix::from_vec(1, 1, vec![3.0]).unwrap();
        let c = Matrix::from_vec(1, 1, vec![10.0]).unwrap();
        assert_eq!(syl(&a, &b, &c).unwrap().as_slice(), &[-2.0]);
    }

    #[test]
    fn test_shared_eigenvalue_is_singular() {
        let a = Matrix::from_vec(1, 1, vec![1.0]).unwrap();
        let b = Matrix::from_vec(1, 1, vec![-1.0]).unwrap();
        let c = Matrix::ones(1, 1);
        assert!(matches!(syl(&a, &b, &c), Err(Error::SingularMatrix(_))));
    }

    #[test]
    fn test_shape_checks() {
        let a = Matrix::eye(2, 2);
        let b = Matrix::eye(3, 3);
        assert!(matches!(syl(&a, &b, &Matrix::ones(3, 2)), Err(Error::ShapeMismatch { .. })));
        assert!(matches!(syl(&Matrix::ones(2, 3), &b, &Matrix::ones(2, 3)), Err(Error::InvalidArgument(_))));
    }
}

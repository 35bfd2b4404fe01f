//! Linear system solvers
//!
//! Square systems go through LU with partial pivoting. Rectangular systems
//! are solved in the least-squares / minimum-norm sense through nalgebra's
//! SVD.

use crate::config::LinalgConfig;
use crate::lu::{solve_square, Lu};
use densemat_core::{Error, Matrix, Result};
use nalgebra::DMatrix;
use tracing::{debug, instrument};

pub(crate) fn to_nalgebra(m: &Matrix) -> DMatrix<f64> {
    DMatrix::from_column_slice(m.n_rows(), m.n_cols(), m.as_slice())
}

pub(crate) fn from_nalgebra(m: &DMatrix<f64>) -> Result<Matrix> {
    Matrix::from_vec(m.nrows(), m.ncols(), m.as_slice().to_vec())
}

/// Least-squares (tall) or minimum-norm (wide) solution of `A·X = B`
pub fn lstsq(a: &Matrix, b: &Matrix, config: &LinalgConfig) -> Result<Matrix> {
    if a.n_rows() != b.n_rows() {
        return Err(Error::ShapeMismatch {
            op: "lstsq",
            expected: format!("{} rows", a.n_rows()),
            actual: format!("{}x{}", b.n_rows(), b.n_cols()),
        });
    }
    if a.is_empty() {
        return Ok(Matrix::zeros(a.n_cols(), b.n_cols()));
    }
    let svd = to_nalgebra(a).svd(true, true);
    let s_max = svd.singular_values.max();
    let eps = s_max * a.n_rows().max(a.n_cols()) as f64 * config.lstsq_rcond;
    debug!("lstsq via SVD: s_max={:e}, cutoff={:e}", s_max, eps);
    let x = svd
        .solve(&to_nalgebra(b), eps)
        .map_err(|e| Error::DecompositionFailure(format!("lstsq: {e}")))?;
    from_nalgebra(&x)
}

pub fn solve(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    solve_with(a, b, &LinalgConfig::default())
}

/// Solve `A·X = B`
///
/// Square `a` is singular-checked (`SingularMatrix`); rectangular `a`
/// yields the least-squares or minimum-norm solution.
#[instrument(skip(a, b, config), fields(m = a.n_rows(), n = a.n_cols(), rhs = b.n_cols()))]
pub fn solve_with(a: &Matrix, b: &Matrix, config: &LinalgConfig) -> Result<Matrix> {
    if a.n_rows() != b.n_rows() {
        return Err(Error::ShapeMismatch {
            op: "solve",
            expected: format!("{} rows in b", a.n_rows()),
            actual: format!("{}x{}", b.n_rows(), b.n_cols()),
        });
    }
    if a.is_square() {
        if a.is_empty() {
            return Ok(Matrix::zeros(0, b.n_cols()));
        }
        return solve_square(a, b, config);
    }
    debug!("solve: {}x{} system is rectangular, using least squares", a.n_rows(), a.n_cols());
    lstsq(a, b, config)
}

/// `A⁻¹·B` reusing one factorisation for many right-hand sides
pub fn solve_factored(lu: &Lu, b: &Matrix) -> Result<Matrix> {
    lu.solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_solve() {
        let a = Matrix::from_rows(&[[3.0, 2.0, -1.0], [2.0, -2.0, 4.0], [-1.0, 0.5, -1.0]]).unwrap();
        let b = Matrix::from_rows(&[[1.0], [-2.0], [0.0]]).unwrap();
        let x = solve(&a, &b).unwrap();
        let expected = Matrix::from_rows(&[[1.0], [-2.0], [-2.0]]).unwrap();
        assert!(x.approx_eq(&expected, 1e-12, 1e-12));
    }

    #[test]
    fn test_singular_square() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
        let b = Matrix::ones(2, 1);
        assert!(matches!(solve(&a, &b), Err(Error::SingularMatrix(_))));
    }

    #[test]
    fn test_overdetermined_least_squares() {
        // y = 1 + 2x sampled exactly
        let a = Matrix::from_rows(&[[1.0, 0.0], [1.0, 1.0], [1.0, 2.0], [1.0, 3.0]]).unwrap();
        let b = Matrix::from_rows(&[[1.0], [3.0], [5.0], [7.0]]).unwrap();
        let x = solve(&a, &b).unwrap();
        assert_eq!(x.shape(), (2, 1));
        assert!(x.approx_eq(&Matrix::from_rows(&[[1.0], [2.0]]).unwrap(), 1e-10, 1e-10));
    }

    #[test]
    fn test_underdetermined_minimum_norm() {
        let a = Matrix::from_rows(&[[1.0, 1.0]]).unwrap();
        let b = Matrix::from_rows(&[[2.0]]).unwrap();
        let x = solve(&a, &b).unwrap();
        assert!(x.approx_eq(&Matrix::from_rows(&[[1.0], [1.0]]).unwrap(), 1e-12, 1e-12));
    }

    #[test]
    fn test_row_count_mismatch() {
        let a = Matrix::eye(3, 3);
        assert!(matches!(
            solve(&a, &Matrix::ones(2, 1)),
            Err(Error::ShapeMismatch { .. })
        ));
        assert!(lstsq(&Matrix::ones(3, 2), &Matrix::ones(2, 1), &LinalgConfig::default()).is_err());
    }

    #[test]
    fn test_factored_reuse() {
        let a = Matrix::from_rows(&[[4.0, 1.0], [2.0, 3.0]]).unwrap();
        let lu = Lu::factor(&a).unwrap();
        let b1 = solve_factored(&lu, &Matrix::from_rows(&[[5.0], [5.0]]).unwrap()).unwrap();
        assert!(b1.approx_eq(&Matrix::ones(2, 1), 1e-12, 1e-12));
    }
}

//! LU with partial pivoting, and the determinant / inverse / square solve
//! built on it

use crate::config::LinalgConfig;
use crate::structure::require_square;
use densemat_core::{Error, Matrix, Result};
use tracing::debug;

/// Packed `P·A = L·U` factorisation
///
/// `L` is unit lower triangular and stored below the diagonal of `lu`,
/// `U` on and above it. `perm[i]` is the original row now at position `i`.
#[derive(Debug, Clone)]
pub struct Lu {
    lu: Matrix,
    perm: Vec<usize>,
    sign: f64,
}

impl Lu {
    pub fn factor(a: &Matrix) -> Result<Self> {
        let n = require_square(a, "lu")?;
        let mut lu = a.clone();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut sign = 1.0;
        let d = lu.as_mut_slice();

        for k in 0..n {
            let mut p = k;
            let mut best = d[k + k * n].abs();
            for i in k + 1..n {
                let v = d[i + k * n].abs();
                if v > best {
                    best = v;
                    p = i;
                }
            }
            if p != k {
                for j in 0..n {
                    d.swap(k + j * n, p + j * n);
                }
                perm.swap(k, p);
                sign = -sign;
            }

            let pivot = d[k + k * n];
            if pivot == 0.0 {
                continue;
            }
            for i in k + 1..n {
                d[i + k * n] /= pivot;
            }
            for j in k + 1..n {
                let f = d[k + j * n];
                if f == 0.0 {
                    continue;
                }
                for i in k + 1..n {
                    d[i + j * n] -= d[i + k * n] * f;
                }
            }
        }

        Ok(Self { lu, perm, sign })
    }

    pub fn dim(&self) -> usize {
        self.perm.len()
    }

    /// Diagonal of `U`
    pub fn pivots(&self) -> Vec<f64> {
        self.lu.diag().to_vec()
    }

    /// `+1` or `-1` from the row exchanges
    pub fn permutation_sign(&self) -> f64 {
        self.sign
    }

    pub fn det(&self) -> f64 {
        self.pivots().iter().product::<f64>() * self.sign
    }

    /// `min |pivot| / max |pivot|`, zero when any pivot is zero
    pub fn pivot_ratio(&self) -> f64 {
        let abs: Vec<f64> = self.pivots().iter().map(|p| p.abs()).collect();
        let max = abs.iter().copied().fold(0.0, f64::max);
        if max == 0.0 {
            return 0.0;
        }
        abs.iter().copied().fold(f64::INFINITY, f64::min) / max
    }

    pub fn is_singular(&self, rcond_threshold: f64) -> bool {
        self.dim() > 0 && self.pivot_ratio() <= rcond_threshold
    }

    /// Solve `A·X = B` for every column of `b`
    pub fn solve(&self, b: &Matrix) -> Result<Matrix> {
        let n = self.dim();
        if b.n_rows() != n {
            return Err(Error::ShapeMismatch {
                op: "solve",
                expected: format!("{n} rows"),
                actual: format!("{}x{}", b.n_rows(), b.n_cols()),
            });
        }
        let lu = self.lu.as_slice();
        let mut x = Matrix::zeros(n, b.n_cols());
        for c in 0..b.n_cols() {
            let rhs = b.col_slice(c)?;
            let mut y: Vec<f64> = self.perm.iter().map(|&p| rhs[p]).collect();
            for i in 0..n {
                let mut acc = y[i];
                for k in 0..i {
                    acc -= lu[i + k * n] * y[k];
                }
                y[i] = acc;
            }
            for i in (0..n).rev() {
                let mut acc = y[i];
                for k in i + 1..n {
                    acc -= lu[i + k * n] * y[k];
                }
                y[i] = acc / lu[i + i * n];
            }
            x.as_mut_slice()[c * n..(c + 1) * n].copy_from_slice(&y);
        }
        Ok(x)
    }
}

/// Determinant; closed form up to 3x3, LU above
pub fn det(a: &Matrix) -> Result<f64> {
    let n = require_square(a, "det")?;
    let v = |r: usize, c: usize| a[(r, c)];
    let d = match n {
        0 => 1.0,
        1 => v(0, 0),
        2 => v(0, 0) * v(1, 1) - v(0, 1) * v(1, 0),
        3 => {
            v(0, 0) * (v(1, 1) * v(2, 2) - v(1, 2) * v(2, 1))
                - v(0, 1) * (v(1, 0) * v(2, 2) - v(1, 2) * v(2, 0))
                + v(0, 2) * (v(1, 0) * v(2, 1) - v(1, 1) * v(2, 0))
        }
        _ => Lu::factor(a)?.det(),
    };
    Ok(d)
}

/// `(log |det|, sign)` without overflow for large matrices
pub fn log_det(a: &Matrix) -> Result<(f64, f64)> {
    let lu = Lu::factor(a)?;
    let mut log_abs = 0.0;
    let mut sign = lu.permutation_sign();
    for p in lu.pivots() {
        if p == 0.0 {
            return Err(Error::SingularMatrix("log_det: zero pivot".to_string()));
        }
        log_abs += p.abs().ln();
        sign *= p.signum();
    }
    Ok((log_abs, sign))
}

pub fn inv(a: &Matrix) -> Result<Matrix> {
    inv_with(a, &LinalgConfig::default())
}

/// General inverse; closed form up to 2x2, LU above
///
/// Every size uses the same singularity test: the LU pivot ratio against
/// `rcond_threshold`.
pub fn inv_with(a: &Matrix, config: &LinalgConfig) -> Result<Matrix> {
    let n = require_square(a, "inv")?;
    if n == 0 {
        return Ok(Matrix::new());
    }
    let lu = Lu::factor(a)?;
    if lu.is_singular(config.rcond_threshold) {
        return Err(Error::SingularMatrix(format!(
            "inv: pivot ratio {:e}",
            lu.pivot_ratio()
        )));
    }
    if n > 2 {
        return lu.solve(&Matrix::eye(n, n));
    }
    let d = det(a)?;
    if d == 0.0 || !d.is_finite() {
        return Err(Error::SingularMatrix(format!("inv: determinant {d:e}")));
    }
    if n == 1 {
        return Matrix::from_vec(1, 1, vec![1.0 / d]);
    }
    let (p, q, r, s) = (a[(0, 0)], a[(0, 1)], a[(1, 0)], a[(1, 1)]);
    Matrix::from_rows(&[[s / d, -q / d], [-r / d, p / d]])
}

/// Square solve through LU; `SingularMatrix` when the pivots collapse
pub(crate) fn solve_square(a: &Matrix, b: &Matrix, config: &LinalgConfig) -> Result<Matrix> {
    let lu = Lu::factor(a)?;
    let ratio = lu.pivot_ratio();
    debug!("solve: {}x{} system via LU, pivot ratio {:e}", lu.dim(), lu.dim(), ratio);
    if lu.is_singular(config.rcond_threshold) {
        return Err(Error::SingularMatrix(format!("solve: pivot ratio {ratio:e}")));
    }
    lu.solve(b)
}

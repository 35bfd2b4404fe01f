//! Covariance and correlation
//!
//! Rows are observations and columns are variables. A row vector is read
//! as one variable observed `n` times, i.e. as a column.

use crate::moments::{mean_slice, Norm};
use crate::reduce::lanes;
use densemat_core::{Dim, Error, Matrix, Result};

/// Centered variables (one `Vec` per column) and the observation count
fn centered(x: &Matrix) -> (Vec<Vec<f64>>, usize) {
    let vars = if x.is_row() {
        vec![x.as_slice().to_vec()]
    } else {
        lanes(x, Dim::EachCol)
    };
    let n_obs = vars.first().map_or(0, Vec::len);
    let vars = vars
        .into_iter()
        .map(|v| {
            let mu = mean_slice(&v);
            v.into_iter().map(|x| x - mu).collect()
        })
        .collect();
    (vars, n_obs)
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn cross(xs: &[Vec<f64>], ys: &[Vec<f64>], divisor: f64) -> Matrix {
    Matrix::from_fn(xs.len(), ys.len(), |i, j| dot(&xs[i], &ys[j]) / divisor)
}

/// Covariance matrix of the columns of `x`
pub fn cov(x: &Matrix, norm: Norm) -> Matrix {
    if x.is_empty() {
        return Matrix::new();
    }
    let (vars, n) = centered(x);
    cross(&vars, &vars, norm.divisor(n))
}

/// Cross-covariance between the columns of `x` and those of `y`
pub fn cov_pair(x: &Matrix, y: &Matrix, norm: Norm) -> Result<Matrix> {
    let (xs, nx) = centered(x);
    let (ys, ny) = centered(y);
    if nx != ny {
        return Err(Error::ShapeMismatch {
            op: "cov",
            expected: format!("{nx} observations"),
            actual: format!("{ny} observations"),
        });
    }
    if nx == 0 {
        return Ok(Matrix::new());
    }
    Ok(cross(&xs, &ys, norm.divisor(nx)))
}

fn correlate(xs: &[Vec<f64>], ys: &[Vec<f64>]) -> Matrix {
    let spread = |v: &Vec<f64>| dot(v, v).sqrt();
    let sx: Vec<f64> = xs.iter().map(spread).collect();
    let sy: Vec<f64> = ys.iter().map(spread).collect();
    Matrix::from_fn(xs.len(), ys.len(), |i, j| dot(&xs[i], &ys[j]) / (sx[i] * sy[j]))
}

/// Correlation matrix of the columns of `x`
///
/// A zero-variance variable yields NaN entries. The normalisation cancels
/// out; it is accepted so `cor` and [`cov`] share a signature.
pub fn cor(x: &Matrix, _norm: Norm) -> Matrix {
    if x.is_empty() {
        return Matrix::new();
    }
    let (vars, _) = centered(x);
    correlate(&vars, &vars)
}

pub fn cor_pair(x: &Matrix, y: &Matrix, norm: Norm) -> Result<Matrix> {
    // Validates the observation counts
    if cov_pair(x, y, norm)?.is_empty() {
        return Ok(Matrix::new());
    }
    let (xs, _) = centered(x);
    let (ys, _) = centered(y);
    Ok(correlate(&xs, &ys))
}

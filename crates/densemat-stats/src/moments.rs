//! Sums, means, variances and standard deviations

use crate::reduce::reduce;
use densemat_core::{Dim, Error, Matrix, Result};

/// Variance normalisation
///
/// `Sample` divides by `n - 1` (unbiased), `Population` by `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Norm {
    #[default]
    Sample,
    Population,
}

impl Norm {
    /// Divisor for `n` observations; never below one
    pub(crate) fn divisor(self, n: usize) -> f64 {
        match self {
            Norm::Sample if n > 1 => (n - 1) as f64,
            Norm::Sample => 1.0,
            Norm::Population => n.max(1) as f64,
        }
    }
}

impl TryFrom<u8> for Norm {
    type Error = Error;

    fn try_from(norm_type: u8) -> Result<Self> {
        match norm_type {
            0 => Ok(Norm::Sample),
            1 => Ok(Norm::Population),
            other => Err(Error::InvalidArgument(format!(
                "norm_type must be 0 or 1, got {other}"
            ))),
        }
    }
}

pub fn sum_slice(data: &[f64]) -> f64 {
    data.iter().sum()
}

/// Arithmetic mean; NaN for an empty slice
pub fn mean_slice(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    sum_slice(data) / data.len() as f64
}

/// Two-pass variance; zero when there are fewer than two observations
pub fn var_slice(data: &[f64], norm: Norm) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let mean = mean_slice(data);
    let (ss, comp) = data.iter().fold((0.0, 0.0), |(ss, comp), &x| {
        let d = x - mean;
        (ss + d * d, comp + d)
    });
    // Compensated: corrects the rounding left in the mean
    let v = (ss - comp * comp / n as f64) / norm.divisor(n);
    if v < 0.0 {
        0.0
    } else {
        v
    }
}

pub fn stddev_slice(data: &[f64], norm: Norm) -> f64 {
    var_slice(data, norm).sqrt()
}

pub fn sum(x: &Matrix, dim: Dim) -> Matrix {
    reduce(x, dim, sum_slice)
}

pub fn mean(x: &Matrix, dim: Dim) -> Matrix {
    reduce(x, dim, mean_slice)
}

pub fn var(x: &Matrix, norm: Norm, dim: Dim) -> Matrix {
    reduce(x, dim, |lane| var_slice(lane, norm))
}

pub fn stddev(x: &Matrix, norm: Norm, dim: Dim) -> Matrix {
    reduce(x, dim, |lane| stddev_slice(lane, norm))
}

//! Economical singular value decomposition by one-sided (Hestenes) Jacobi
//!
//! Columns of a working copy are rotated pairwise until they are mutually
//! orthogonal; their norms are then the singular values. For `m < n` the
//! transpose is decomposed and the factors swapped.

use crate::config::LinalgConfig;
use crate::eigen::{jacobi_rotation, rotate_cols};
use crate::structure::unit_scaled;
use densemat_core::{Col, Error, Matrix, Result};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Which singular vectors [`svd_econ`] returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SvdMode {
    Left,
    Right,
    #[default]
    Both,
}

impl FromStr for SvdMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(SvdMode::Left),
            "right" => Ok(SvdMode::Right),
            "both" => Ok(SvdMode::Both),
            other => Err(Error::InvalidArgument(format!(
                "svd mode must be \"left\", \"right\" or \"both\", got {other:?}"
            ))),
        }
    }
}

/// `A = U·diag(s)·Vᵀ` with `k = min(m, n)` columns in `U` (m x k) and `V` (n x k)
#[derive(Debug, Clone, PartialEq)]
pub struct SvdEcon {
    pub u: Option<Matrix>,
    /// Non-increasing
    pub s: Col,
    pub v: Option<Matrix>,
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Tall-or-square case (`m >= n`): returns `(U, s, V)` sorted by `s` descending
fn hestenes(a: &Matrix, config: &LinalgConfig) -> Result<(Matrix, Vec<f64>, Matrix)> {
    let (m, n) = a.shape();
    let mut w = a.clone();
    let mut v = Matrix::eye(n, n);
    // Squared norm below which a column is numerically zero
    let col_floor = (f64::EPSILON * a.norm_fro()).powi(2);

    let mut converged = n < 2;
    let mut sweeps = 0;
    while !converged && sweeps < config.max_sweeps {
        sweeps += 1;
        let mut rotated = false;
        for p in 0..n {
            for q in p + 1..n {
                let (alpha, beta, gamma) = {
                    let cp = &w.as_slice()[p * m..(p + 1) * m];
                    let cq = &w.as_slice()[q * m..(q + 1) * m];
                    (dot(cp, cp), dot(cq, cq), dot(cp, cq))
                };
                if gamma == 0.0
                    || gamma.abs() <= config.tolerance * (alpha * beta).sqrt()
                    || alpha.min(beta) <= col_floor
                {
                    continue;
                }
                rotated = true;
                let (c, s) = jacobi_rotation(alpha, beta, gamma);
                rotate_cols(w.as_mut_slice(), m, p, q, c, s);
                rotate_cols(v.as_mut_slice(), n, p, q, c, s);
            }
        }
        converged = !rotated;
    }
    if !converged {
        return Err(Error::DecompositionFailure(format!(
            "svd: no convergence after {} sweeps",
            config.max_sweeps
        )));
    }
    debug!("svd converged after {} sweeps", sweeps);

    let sigma: Vec<f64> = (0..n)
        .map(|j| dot(&w.as_slice()[j * m..(j + 1) * m], &w.as_slice()[j * m..(j + 1) * m]).sqrt())
        .collect();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| sigma[j].total_cmp(&sigma[i]));

    let s: Vec<f64> = order.iter().map(|&j| sigma[j]).collect();
    let v = v.cols_list(&order)?;
    let u = orthonormal_left(&w, &order, &s)?;
    Ok((u, s, v))
}

/// Normalised columns of `w` (in `order`); columns with negligible norm are
/// replaced by unit vectors orthogonal to the rest
fn orthonormal_left(w: &Matrix, order: &[usize], s: &[f64]) -> Result<Matrix> {
    let m = w.n_rows();
    let k = order.len();
    let s_max = s.first().copied().unwrap_or(0.0);
    let cutoff = s_max * f64::EPSILON * m.max(k) as f64;

    let mut u = Matrix::zeros(m, k);
    let mut deficient = Vec::new();
    for (slot, (&j, &sigma)) in order.iter().zip(s).enumerate() {
        if sigma <= cutoff || sigma == 0.0 {
            deficient.push(slot);
            continue;
        }
        let src = w.col_slice(j)?;
        for (dst, &x) in u.as_mut_slice()[slot * m..(slot + 1) * m].iter_mut().zip(src) {
            *dst = x / sigma;
        }
    }

    let mut filled: Vec<usize> = (0..k).filter(|i| !deficient.contains(i)).collect();
    for slot in deficient {
        let mut candidate = 0;
        let column = loop {
            if candidate >= m {
                return Err(Error::DecompositionFailure(
                    "svd: could not complete the left basis".to_string(),
                ));
            }
            let mut e = vec![0.0; m];
            e[candidate] = 1.0;
            candidate += 1;
            // Two Gram-Schmidt passes
            for _ in 0..2 {
                for &f in &filled {
                    let basis = &u.as_slice()[f * m..(f + 1) * m];
                    let proj = dot(basis, &e);
                    e.iter_mut().zip(basis).for_each(|(x, b)| *x -= proj * b);
                }
            }
            let norm = dot(&e, &e).sqrt();
            if norm > 0.5 {
                break e.into_iter().map(|x| x / norm).collect::<Vec<f64>>();
            }
        };
        u.as_mut_slice()[slot * m..(slot + 1) * m].copy_from_slice(&column);
        filled.push(slot);
    }
    Ok(u)
}

fn decompose(a: &Matrix, config: &LinalgConfig) -> Result<(Matrix, Vec<f64>, Matrix)> {
    let (a, scale) = unit_scaled(a);
    let (u, s, v) = if a.n_rows() >= a.n_cols() {
        hestenes(&a, config)?
    } else {
        let (u, s, v) = hestenes(&a.t(), config)?;
        (v, s, u)
    };
    Ok((u, s.into_iter().map(|x| x * scale).collect(), v))
}

pub fn svd_econ(a: &Matrix, mode: SvdMode) -> Result<SvdEcon> {
    svd_econ_with(a, mode, &LinalgConfig::default())
}

#[instrument(skip(a, config), fields(m = a.n_rows(), n = a.n_cols()))]
pub fn svd_econ_with(a: &Matrix, mode: SvdMode, config: &LinalgConfig) -> Result<SvdEcon> {
    if a.is_empty() {
        let k = a.n_rows().min(a.n_cols());
        return Ok(SvdEcon {
            u: (mode != SvdMode::Right).then(|| Matrix::zeros(a.n_rows(), k)),
            s: Col::zeros(0),
            v: (mode != SvdMode::Left).then(|| Matrix::zeros(a.n_cols(), k)),
        });
    }
    let (u, s, v) = decompose(a, config)?;
    Ok(SvdEcon {
        u: (mode != SvdMode::Right).then_some(u),
        s: Col::from_vec(s),
        v: (mode != SvdMode::Left).then_some(v),
    })
}

/// Singular values only, non-increasing
pub fn svd_values(a: &Matrix) -> Result<Col> {
    Ok(svd_econ(a, SvdMode::Both)?.s)
}

//! Symmetric eigendecomposition by cyclic Jacobi rotations

use crate::config::LinalgConfig;
use crate::structure::{require_square, symmatu, unit_scaled};
use densemat_core::{Col, Error, Matrix, Result};
use tracing::{debug, instrument, warn};

/// Rotation `(c, s)` that annihilates `a_pq` of the symmetric 2x2 block
/// `[[a_pp, a_pq], [a_pq, a_qq]]`
pub(crate) fn jacobi_rotation(app: f64, aqq: f64, apq: f64) -> (f64, f64) {
    let theta = (aqq - app) / (2.0 * apq);
    let sign = if theta >= 0.0 { 1.0 } else { -1.0 };
    let t = sign / (theta.abs() + theta.hypot(1.0));
    let c = 1.0 / t.hypot(1.0);
    (c, t * c)
}

/// Replace columns `p`, `q` of an `n`-row column-major buffer by
/// `c·x_p - s·x_q` and `s·x_p + c·x_q`
pub(crate) fn rotate_cols(data: &mut [f64], n: usize, p: usize, q: usize, c: f64, s: f64) {
    for k in 0..n {
        let xp = data[k + p * n];
        let xq = data[k + q * n];
        data[k + p * n] = c * xp - s * xq;
        data[k + q * n] = s * xp + c * xq;
    }
}

fn rotate_rows(data: &mut [f64], n: usize, p: usize, q: usize, c: f64, s: f64) {
    for k in 0..n {
        let xp = data[p + k * n];
        let xq = data[q + k * n];
        data[p + k * n] = c * xp - s * xq;
        data[q + k * n] = s * xp + c * xq;
    }
}

fn symmetric_input(a: &Matrix) -> Result<Matrix> {
    let n = require_square(a, "eig_sym")?;
    let mut asym: f64 = 0.0;
    for j in 0..n {
        for i in 0..j {
            asym = asym.max((a[(i, j)] - a[(j, i)]).abs());
        }
    }
    if asym > 100.0 * f64::EPSILON * a.max_abs() {
        warn!("eig_sym: input is not symmetric (max asymmetry {:e}); using upper triangle", asym);
    }
    symmatu(a)
}

#[instrument(skip(a, config), fields(n = a.n_rows()))]
fn jacobi_eigen(a: &Matrix, config: &LinalgConfig, want_vectors: bool) -> Result<(Col, Option<Matrix>)> {
    let (mut m, scale) = unit_scaled(&symmetric_input(a)?);
    let n = m.n_rows();
    let mut v = want_vectors.then(|| Matrix::eye(n, n));
    let floor = m.norm_fro() * f64::EPSILON * f64::EPSILON;

    let mut converged = n < 2;
    let mut sweeps = 0;
    while !converged && sweeps < config.max_sweeps {
        sweeps += 1;
        let mut rotated = false;
        for p in 0..n {
            for q in p + 1..n {
                let apq = m[(p, q)];
                let (app, aqq) = (m[(p, p)], m[(q, q)]);
                if apq.abs() <= config.tolerance * app.abs().sqrt() * aqq.abs().sqrt() || apq.abs() <= floor {
                    continue;
                }
                rotated = true;
                let (c, s) = jacobi_rotation(app, aqq, apq);
                let data = m.as_mut_slice();
                rotate_cols(data, n, p, q, c, s);
                rotate_rows(data, n, p, q, c, s);
                data[p + q * n] = 0.0;
                data[q + p * n] = 0.0;
                if let Some(v) = v.as_mut() {
                    rotate_cols(v.as_mut_slice(), n, p, q, c, s);
                }
            }
        }
        converged = !rotated;
    }

    if !converged {
        return Err(Error::DecompositionFailure(format!(
            "eig_sym: no convergence after {} sweeps",
            config.max_sweeps
        )));
    }
    debug!("eig_sym converged after {} sweeps", sweeps);

    let values: Vec<f64> = m.diag().as_slice().iter().map(|x| x * scale).collect();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));
    let sorted = Col::from_vec(order.iter().map(|&i| values[i]).collect());
    let vectors = match v {
        Some(v) => Some(v.cols_list(&order)?),
        None => None,
    };
    Ok((sorted, vectors))
}

/// Eigenvalues of a symmetric matrix, ascending
pub fn eig_sym(a: &Matrix) -> Result<Col> {
    eig_sym_with(a, &LinalgConfig::default())
}

pub fn eig_sym_with(a: &Matrix, config: &LinalgConfig) -> Result<Col> {
    Ok(jacobi_eigen(a, config, false)?.0)
}

/// Eigenvalues ascending and matching orthonormal eigenvectors as columns
pub fn eig_sym_vectors(a: &Matrix) -> Result<(Col, Matrix)> {
    eig_sym_vectors_with(a, &LinalgConfig::default())
}

pub fn eig_sym_vectors_with(a: &Matrix, config: &LinalgConfig) -> Result<(Col, Matrix)> {
    let (values, vectors) = jacobi_eigen(a, config, true)?;
    let vectors = vectors.unwrap_or_else(|| Matrix::eye(values.len(), values.len()));
    Ok((values, vectors))
}

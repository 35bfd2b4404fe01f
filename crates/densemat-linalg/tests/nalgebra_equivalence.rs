//! Equivalence tests comparing the in-house kernels with nalgebra on
//! seeded random matrices

use approx::assert_relative_eq;
use densemat_core::Matrix;
use densemat_linalg::{
    chol, det, eig_sym, eig_sym_vectors, inv, log_det, solve, svd_econ, svd_values, syl, SvdMode,
};
use nalgebra::DMatrix;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_matrix(n_rows: usize, n_cols: usize, seed: u64) -> Matrix {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Matrix::from_fn(n_rows, n_cols, |_, _| rng.gen_range(-1.0..1.0))
}

/// `AᵀA + n·I`, comfortably positive definite
fn random_spd(n: usize, seed: u64) -> Matrix {
    let a = random_matrix(n, n, seed);
    a.t().matmul(&a).unwrap().plus(&Matrix::eye(n, n).scale(n as f64)).unwrap()
}

fn reference(m: &Matrix) -> DMatrix<f64> {
    DMatrix::from_column_slice(m.n_rows(), m.n_cols(), m.as_slice())
}

#[test]
fn test_det_matches_nalgebra() {
    for (n, seed) in [(2, 1), (3, 2), (5, 3), (8, 4)] {
        let a = random_matrix(n, n, seed);
        let expected = reference(&a).determinant();
        assert_relative_eq!(det(&a).unwrap(), expected, max_relative = 1e-10);
        let (log_abs, sign) = log_det(&a).unwrap();
        assert_relative_eq!(sign * log_abs.exp(), expected, max_relative = 1e-10);
    }
}

#[test]
fn test_inverse_matches_nalgebra() {
    for (n, seed) in [(2, 10), (4, 11), (7, 12)] {
        let a = random_matrix(n, n, seed);
        let ours = inv(&a).unwrap();
        let theirs = reference(&a).try_inverse().unwrap();
        assert!(ours.approx_eq(&Matrix::from_vec(n, n, theirs.as_slice().to_vec()).unwrap(), 1e-8, 1e-10));
    }
}

#[test]
fn test_eigenvalues_match_nalgebra() {
    for (n, seed) in [(3, 20), (6, 21), (10, 22)] {
        let a = random_spd(n, seed);
        let ours = eig_sym(&a).unwrap();
        let mut theirs: Vec<f64> = reference(&a).symmetric_eigenvalues().iter().copied().collect();
        theirs.sort_by(|x, y| x.partial_cmp(y).unwrap());
        for (x, y) in ours.as_slice().iter().zip(&theirs) {
            assert_relative_eq!(*x, *y, max_relative = 1e-10);
        }
    }
}

#[test]
fn test_eigen_residual_on_indefinite_input() {
    let b = random_matrix(7, 7, 30);
    let a = b.plus(&b.t()).unwrap();
    let (values, vectors) = eig_sym_vectors(&a).unwrap();
    for j in 0..7 {
        let v = vectors.col(j).unwrap();
        let av = a.matmul(&v).unwrap();
        let lv = v.scale(values[j]);
        assert!(av.approx_eq(&lv, 0.0, 1e-11));
    }
}

#[test]
fn test_singular_values_match_nalgebra() {
    for (m, n, seed) in [(6, 3, 40), (3, 6, 41), (5, 5, 42)] {
        let a = random_matrix(m, n, seed);
        let ours = svd_values(&a).unwrap();
        let mut theirs: Vec<f64> = reference(&a).singular_values().iter().copied().collect();
        theirs.sort_by(|x, y| y.partial_cmp(x).unwrap());
        assert_eq!(ours.len(), m.min(n));
        for (x, y) in ours.as_slice().iter().zip(&theirs) {
            assert_relative_eq!(*x, *y, max_relative = 1e-10);
        }

        let svd = svd_econ(&a, SvdMode::Both).unwrap();
        let u = svd.u.unwrap();
        let v = svd.v.unwrap();
        let us = Matrix::from_fn(m, m.min(n), |r, c| u[(r, c)] * svd.s[c]);
        assert!(us.matmul(&v.t()).unwrap().approx_eq(&a, 0.0, 1e-12));
    }
}

#[test]
fn test_cholesky_of_random_spd() {
    let a = random_spd(6, 50);
    let r = chol(&a).unwrap();
    assert!(r.t().matmul(&r).unwrap().approx_eq(&a, 1e-12, 1e-12));
    let theirs = reference(&a).cholesky().unwrap().l().transpose();
    assert!(r.approx_eq(&Matrix::from_vec(6, 6, theirs.as_slice().to_vec()).unwrap(), 1e-10, 1e-12));
}

#[test]
fn test_solve_and_sylvester_residuals() {
    let a = random_matrix(6, 6, 60);
    let x = random_matrix(6, 2, 61);
    let b = a.matmul(&x).unwrap();
    assert!(solve(&a, &b).unwrap().approx_eq(&x, 1e-8, 1e-10));

    let sa = random_spd(3, 62);
    let sb = random_spd(4, 63);
    let c = random_matrix(3, 4, 64);
    let sol = syl(&sa, &sb, &c).unwrap();
    let res = sa.matmul(&sol).unwrap().plus(&sol.matmul(&sb).unwrap()).unwrap().plus(&c).unwrap();
    assert!(res.max_abs() < 1e-12);
}

//! Decompositions and solvers for dense matrices
//!
//! - determinant, log-determinant and trace; diagonal, symmetric and
//!   triangular helpers
//! - Cholesky ([`chol`], [`chol_lower`]) and [`inv_sympd`]
//! - symmetric eigendecomposition by cyclic Jacobi ([`eig_sym`])
//! - economical SVD by one-sided Jacobi ([`svd_econ`])
//! - general inverse, linear solve (LU / least squares) and the Sylvester
//!   equation
//!
//! Iterative and threshold-sensitive kernels have a `*_with` variant that
//! takes a [`LinalgConfig`].
//!
//! # Example
//!
//! ```rust
//! use densemat_core::Matrix;
//! use densemat_linalg::{chol, det, solve};
//!
//! let a = Matrix::from_rows(&[[4.0, 2.0], [2.0, 3.0]])?;
//! assert_eq!(det(&a)?, 8.0);
//!
//! let r = chol(&a)?;
//! assert!(r.t().matmul(&r)?.approx_eq(&a, 1e-12, 1e-12));
//!
//! let x = solve(&a, &Matrix::from_rows(&[[6.0], [5.0]])?)?;
//! assert!(x.approx_eq(&Matrix::ones(2, 1), 1e-12, 1e-12));
//! # Ok::<(), densemat_core::Error>(())
//! ```

pub mod chol;
pub mod config;
pub mod eigen;
pub mod lu;
pub mod solve;
pub mod structure;
pub mod svd;
pub mod sylvester;

pub use chol::{chol, chol_lower, inv_sympd};
pub use config::LinalgConfig;
pub use eigen::{eig_sym, eig_sym_vectors, eig_sym_vectors_with, eig_sym_with};
pub use lu::{det, inv, inv_with, log_det, Lu};
pub use solve::{lstsq, solve, solve_factored, solve_with};
pub use structure::{diagmat, diagvec, symmatl, symmatu, trace, trimatl, trimatu};
pub use svd::{svd_econ, svd_econ_with, svd_values, SvdEcon, SvdMode};
pub use sylvester::{syl, syl_with};

//! # densemat
//!
//! Dense column-major `f64` matrices with indexing and views, in-place
//! element operators, structural editing, statistics, decompositions and
//! random generation.
//!
//! ## Crates
//!
//! - [`core`]: the [`Matrix`] container, index expressions, operators,
//!   structural mutators, constants and serialization
//! - [`stats`]: moments, covariance, histograms, logical reductions, sorting
//! - [`linalg`]: LU, Cholesky, symmetric eigen, SVD, solvers, Sylvester
//! - [`random`]: uniform, normal and integer generation plus shuffling
//!
//! ## Quick start
//!
//! ```rust
//! use densemat::prelude::*;
//!
//! let mut ctx = RandomContext::seeded(1);
//! let a = ctx.randn(4, 4);
//! let spd = a.t().matmul(&a)?.plus(&Matrix::eye(4, 4))?;
//!
//! let values = eig_sym(&spd)?;
//! assert!(values.as_slice().iter().all(|&v| v >= 1.0 - 1e-10));
//!
//! let col_means = mean(&spd, Dim::EachCol);
//! assert_eq!(col_means.shape(), (1, 4));
//! # Ok::<(), densemat::Error>(())
//! ```

pub use densemat_core as core;
pub use densemat_linalg as linalg;
pub use densemat_random as random;
pub use densemat_stats as stats;

pub use densemat_core::{Col, Dim, DistrParam, Error, IndexExpr, Matrix, Op, Region, Result, Row, Size, Span};
pub use densemat_random::RandomContext;

/// Common imports across all four crates
pub mod prelude {
    pub use densemat_core::prelude::*;
    pub use densemat_linalg::{
        chol, det, eig_sym, eig_sym_vectors, inv, inv_sympd, log_det, solve, svd_econ, svd_values, syl,
        LinalgConfig, SvdMode,
    };
    pub use densemat_random::RandomContext;
    pub use densemat_stats::{
        cor, cov, find, hist, histc, mean, sort, sort_index, stddev, sum, var, FindMode, Norm, SortDirection,
    };
}

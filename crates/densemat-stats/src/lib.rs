//! Statistics, reductions and sorting over dense matrices
//!
//! Directional kernels take a [`Dim`]: `EachCol` reduces every column into
//! a `1 x n_cols` row, `EachRow` reduces every row into an `n_rows x 1`
//! column. `*_slice` variants work on plain slices and return scalars.
//!
//! # Example
//!
//! ```rust
//! use densemat_core::{Dim, Matrix};
//! use densemat_stats::{mean, var, Norm};
//!
//! let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 6.0]])?;
//! assert_eq!(mean(&m, Dim::EachCol).as_slice(), &[2.0, 4.0]);
//! assert_eq!(var(&m, Norm::Sample, Dim::EachCol).as_slice(), &[2.0, 8.0]);
//! # Ok::<(), densemat_core::Error>(())
//! ```

pub mod covariance;
pub mod histogram;
pub mod logical;
pub mod moments;
mod reduce;
pub mod sort;

pub use densemat_core::Dim;

pub use covariance::{cor, cor_pair, cov, cov_pair};
pub use histogram::{auto_centers, hist, hist_bins, hist_dim, histc, histc_dim};
pub use logical::{all, all_slice, any, any_slice, find, find_n, FindMode};
pub use moments::{mean, mean_slice, stddev, stddev_slice, sum, sum_slice, var, var_slice, Norm};
pub use sort::{sort, sort_dim, sort_index, stable_sort_index, SortDirection};

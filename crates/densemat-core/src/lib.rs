//! Dense column-major matrix storage and the layers built directly on it
//!
//! This crate provides the container every other densemat crate works on:
//!
//! 1. **Storage** - [`Matrix`] plus orientation-checked [`Col`] / [`Row`]
//! 2. **Addressing** - [`Span`], [`Size`], [`IndexExpr`] and the extraction
//!    entry points (`row`, `cols`, `submat`, `elem`, ...)
//! 3. **In-place updates** - [`Op`] applied over a [`Region`]
//! 4. **Structural mutators** - fill, resize, reshape, insert, shed, swap
//!
//! # Example
//!
//! ```rust
//! use densemat_core::{Matrix, Op, Region, Span};
//!
//! let mut m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
//! m.apply(&Region::cols(Span::new(1, 2)), Op::Times(10.0))?;
//! assert_eq!(m.row(0)?.as_slice(), &[1.0, 20.0, 30.0]);
//!
//! m.shed_col(0)?;
//! assert_eq!(m.shape(), (2, 2));
//! # Ok::<(), densemat_core::Error>(())
//! ```

pub mod constants;
pub mod error;
pub mod index;
pub mod io;
pub mod matrix;
pub mod mutate;
pub mod ops;
pub mod shape;
pub mod timer;
pub mod vector;

pub use error::{Error, Result};
pub use index::IndexExpr;
pub use matrix::Matrix;
pub use ops::{Op, Region};
pub use shape::{Dim, DistrParam, Size, Span};
pub use timer::Stopwatch;
pub use vector::{Col, Row};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{Col, Dim, DistrParam, IndexExpr, Matrix, Op, Region, Result, Row, Size, Span};
}

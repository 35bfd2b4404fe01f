//! Column and row vectors
//!
//! [`Col`] and [`Row`] wrap a [`Matrix`] whose orientation is fixed
//! (`n_cols == 1` / `n_rows == 1`). They deref to `Matrix` for reading, so
//! every extraction form works on them, but shape-changing mutation goes
//! through the vector-specific methods that keep the orientation intact.

use crate::error::{Error, Result};
use crate::index::IndexExpr;
use crate::matrix::Matrix;
use crate::ops::{Op, Region};
use crate::shape::Span;
use std::ops::{Deref, Index, IndexMut};

macro_rules! vector_type {
    ($name:ident, $orient:literal, $is_ok:ident, $build:expr, $resize:ident, $insert:ident, $insert_from:ident, $shed:ident, $swap:ident) => {
        #[doc = concat!("Dense ", $orient, " vector")]
        #[derive(Clone, Debug, PartialEq, Default)]
        pub struct $name(Matrix);

        impl $name {
            pub fn from_vec(values: Vec<f64>) -> Self {
                let build: fn(Vec<f64>) -> Matrix = $build;
                Self(build(values))
            }

            pub fn zeros(n: usize) -> Self {
                Self::filled(n, 0.0)
            }

            pub fn ones(n: usize) -> Self {
                Self::filled(n, 1.0)
            }

            pub fn filled(n: usize, value: f64) -> Self {
                Self::from_vec(vec![value; n])
            }

            pub fn len(&self) -> usize {
                self.0.n_elem()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn as_matrix(&self) -> &Matrix {
                &self.0
            }

            pub fn into_matrix(self) -> Matrix {
                self.0
            }

            pub fn as_mut_slice(&mut self) -> &mut [f64] {
                self.0.as_mut_slice()
            }

            pub fn to_vec(&self) -> Vec<f64> {
                self.0.as_slice().to_vec()
            }

            /// Elements `first..=last`, same orientation
            pub fn subvec(&self, first: usize, last: usize) -> Result<Self> {
                self.subvec_span(Span::new(first, last))
            }

            pub fn subvec_span(&self, span: Span) -> Result<Self> {
                let picked = self.0.extract_linear(&IndexExpr::from(span))?;
                Ok(Self::from_vec(picked.into_matrix().into_vec()))
            }

            /// Length change preserving the leading elements; new ones are zero
            pub fn resize(&mut self, n: usize) {
                self.0.$resize(n);
            }

            /// Length change with unspecified content
            pub fn set_size(&mut self, n: usize) {
                self.resize(n);
            }

            pub fn fill(&mut self, value: f64) {
                self.0.fill(value);
            }

            /// Insert `k` elements before position `pos` (`pos == len` appends)
            pub fn insert(&mut self, pos: usize, k: usize, zero_fill: bool) -> Result<()> {
                self.0.$insert(pos, k, zero_fill)
            }

            pub fn insert_from(&mut self, pos: usize, values: &Self) -> Result<()> {
                self.0.$insert_from(pos, &values.0)
            }

            pub fn shed(&mut self, i: usize) -> Result<()> {
                self.0.$shed(i, i)
            }

            pub fn shed_range(&mut self, first: usize, last: usize) -> Result<()> {
                self.0.$shed(first, last)
            }

            pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
                self.0.$swap(i, j)
            }

            /// In-place operator over a region; never changes the shape
            pub fn apply(&mut self, region: &Region, op: Op) -> Result<()> {
                self.0.apply(region, op)
            }

            pub fn assign(&mut self, region: &Region, values: &Matrix) -> Result<()> {
                self.0.assign(region, values)
            }
        }

        impl Deref for $name {
            type Target = Matrix;

            fn deref(&self) -> &Matrix {
                &self.0
            }
        }

        impl AsRef<Matrix> for $name {
            fn as_ref(&self) -> &Matrix {
                &self.0
            }
        }

        impl Index<usize> for $name {
            type Output = f64;

            fn index(&self, i: usize) -> &f64 {
                &self.0[i]
            }
        }

        impl IndexMut<usize> for $name {
            fn index_mut(&mut self, i: usize) -> &mut f64 {
                &mut self.0[i]
            }
        }

        impl From<$name> for Matrix {
            fn from(v: $name) -> Matrix {
                v.0
            }
        }

        impl From<Vec<f64>> for $name {
            fn from(values: Vec<f64>) -> Self {
                Self::from_vec(values)
            }
        }

        impl TryFrom<Matrix> for $name {
            type Error = Error;

            fn try_from(m: Matrix) -> Result<Self> {
                if !m.$is_ok() && !m.is_empty() {
                    return Err(Error::ShapeMismatch {
                        op: concat!("into ", $orient, " vector"),
                        expected: $orient.to_string(),
                        actual: format!("{}x{}", m.n_rows(), m.n_cols()),
                    });
                }
                Ok(Self::from_vec(m.into_vec()))
            }
        }
    };
}

vector_type!(
    Col,
    "column",
    is_col,
    |v| {
        let n = v.len();
        Matrix::from_vec(n, 1, v).unwrap_or_default()
    },
    resize_col_vec,
    insert_rows,
    insert_rows_from,
    shed_rows,
    swap_rows
);

vector_type!(
    Row,
    "row",
    is_row,
    |v| {
        let n = v.len();
        Matrix::from_vec(1, n, v).unwrap_or_default()
    },
    resize_row_vec,
    insert_cols,
    insert_cols_from,
    shed_cols,
    swap_cols
);

impl Col {
    /// Same values laid out as a row
    pub fn t(&self) -> Row {
        Row::from_vec(self.to_vec())
    }
}

impl Row {
    /// Same values laid out as a column
    pub fn t(&self) -> Col {
        Col::from_vec(self.to_vec())
    }
}

impl Matrix {
    fn resize_col_vec(&mut self, n: usize) {
        self.resize(n, 1);
    }

    fn resize_row_vec(&mut self, n: usize) {
        self.resize(1, n);
    }
}

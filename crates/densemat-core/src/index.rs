//! Index expressions and read extraction
//!
//! Every addressing form (single index, contiguous range, index list, whole
//! axis) is an [`IndexExpr`]. Extraction is implemented once in
//! [`Matrix::extract`]; the named entry points below are thin wrappers.
//! Results are always freshly allocated copies.

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::shape::{Size, Span};
use crate::vector::{Col, Row};

/// Selection of positions along one axis (or along the linear extent)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexExpr {
    Single(usize),
    /// Inclusive `[first, last]`
    Range { first: usize, last: usize },
    /// Arbitrary order, duplicates allowed
    List(Vec<usize>),
    All,
}

impl IndexExpr {
    /// Check against `extent` and expand to concrete positions
    pub fn resolve(&self, extent: usize, op: &str) -> Result<Vec<usize>> {
        match self {
            IndexExpr::Single(i) => {
                if *i >= extent {
                    return Err(Error::out_of_range(op, *i, extent));
                }
                Ok(vec![*i])
            }
            IndexExpr::Range { first, last } => {
                let (lo, hi) = Span::new(*first, *last).bounds(extent, op)?;
                Ok((lo..hi).collect())
            }
            IndexExpr::List(list) => {
                if let Some(&bad) = list.iter().find(|&&i| i >= extent) {
                    return Err(Error::out_of_range(op, bad, extent));
                }
                Ok(list.clone())
            }
            IndexExpr::All => Ok((0..extent).collect()),
        }
    }

    /// Whether every referenced position is inside `extent`
    pub fn in_range(&self, extent: usize) -> bool {
        match self {
            IndexExpr::Single(i) => *i < extent,
            IndexExpr::Range { first, last } => Span::new(*first, *last).in_range(extent),
            IndexExpr::List(list) => list.iter().all(|&i| i < extent),
            IndexExpr::All => true,
        }
    }
}

impl From<usize> for IndexExpr {
    fn from(i: usize) -> Self {
        IndexExpr::Single(i)
    }
}

impl From<Span> for IndexExpr {
    fn from(span: Span) -> Self {
        if span.is_entire_range() {
            IndexExpr::All
        } else {
            IndexExpr::Range {
                first: span.first,
                last: span.last,
            }
        }
    }
}

impl From<Vec<usize>> for IndexExpr {
    fn from(list: Vec<usize>) -> Self {
        IndexExpr::List(list)
    }
}

impl From<&[usize]> for IndexExpr {
    fn from(list: &[usize]) -> Self {
        IndexExpr::List(list.to_vec())
    }
}

impl Matrix {
    /// Gather the block selected by `rows` x `cols`
    pub fn extract(&self, rows: &IndexExpr, cols: &IndexExpr) -> Result<Matrix> {
        let row_idx = rows.resolve(self.n_rows(), "extract rows")?;
        let col_idx = cols.resolve(self.n_cols(), "extract cols")?;
        let data = self.as_slice();
        let mut out = Vec::with_capacity(row_idx.len() * col_idx.len());
        for &c in &col_idx {
            let base = c * self.n_rows();
            out.extend(row_idx.iter().map(|&r| data[base + r]));
        }
        Matrix::from_vec(row_idx.len(), col_idx.len(), out)
    }

    /// Gather by linear indices into a column
    pub fn extract_linear(&self, idx: &IndexExpr) -> Result<Col> {
        let positions = idx.resolve(self.n_elem(), "elem")?;
        let data = self.as_slice();
        Ok(Col::from_vec(positions.into_iter().map(|i| data[i]).collect()))
    }

    pub fn row(&self, i: usize) -> Result<Row> {
        let m = self.extract(&IndexExpr::Single(i), &IndexExpr::All)?;
        Ok(Row::from_vec(m.into_vec()))
    }

    pub fn col(&self, j: usize) -> Result<Col> {
        Ok(Col::from_vec(self.col_slice(j)?.to_vec()))
    }

    /// Rows `first..=last`
    pub fn rows(&self, first: usize, last: usize) -> Result<Matrix> {
        self.extract(&IndexExpr::Range { first, last }, &IndexExpr::All)
    }

    /// Columns `first..=last`
    pub fn cols(&self, first: usize, last: usize) -> Result<Matrix> {
        self.extract(&IndexExpr::All, &IndexExpr::Range { first, last })
    }

    pub fn rows_span(&self, span: Span) -> Result<Matrix> {
        self.extract(&span.into(), &IndexExpr::All)
    }

    pub fn cols_span(&self, span: Span) -> Result<Matrix> {
        self.extract(&IndexExpr::All, &span.into())
    }

    pub fn rows_list(&self, indices: &[usize]) -> Result<Matrix> {
        self.extract(&indices.into(), &IndexExpr::All)
    }

    pub fn cols_list(&self, indices: &[usize]) -> Result<Matrix> {
        self.extract(&IndexExpr::All, &indices.into())
    }

    /// Elements at the given linear indices, in the given order
    pub fn elem(&self, indices: &[usize]) -> Result<Col> {
        self.extract_linear(&indices.into())
    }

    pub fn submat(&self, rows: Span, cols: Span) -> Result<Matrix> {
        self.extract(&rows.into(), &cols.into())
    }

    /// Block of `size` anchored at `(row, col)`
    pub fn submat_size(&self, row: usize, col: usize, size: Size) -> Result<Matrix> {
        if !self.in_range_size(row, col, size) {
            return Err(Error::IndexOutOfRange(format!(
                "submat: {}x{} block at ({row}, {col}) exceeds {}x{}",
                size.n_rows,
                size.n_cols,
                self.n_rows(),
                self.n_cols()
            )));
        }
        let row_idx = IndexExpr::List((row..row + size.n_rows).collect());
        let col_idx = IndexExpr::List((col..col + size.n_cols).collect());
        self.extract(&row_idx, &col_idx)
    }
}

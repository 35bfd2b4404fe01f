//! Structural mutators
//!
//! Shape-changing and value-resetting operations that work in place. All
//! of them leave `n_elem == n_rows * n_cols`.

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::shape::Span;

impl Matrix {
    pub fn fill(&mut self, value: f64) {
        self.as_mut_slice().fill(value);
    }

    pub fn fill_zeros(&mut self) {
        self.fill(0.0);
    }

    pub fn fill_ones(&mut self) {
        self.fill(1.0);
    }

    pub fn fill_eye(&mut self) {
        let (r, c) = self.shape();
        *self = Matrix::eye(r, c);
    }

    pub fn set_filled(&mut self, n_rows: usize, n_cols: usize, value: f64) {
        *self = Matrix::filled(n_rows, n_cols, value);
    }

    pub fn set_zeros(&mut self, n_rows: usize, n_cols: usize) {
        self.set_filled(n_rows, n_cols, 0.0);
    }

    pub fn set_ones(&mut self, n_rows: usize, n_cols: usize) {
        self.set_filled(n_rows, n_cols, 1.0);
    }

    pub fn set_eye(&mut self, n_rows: usize, n_cols: usize) {
        *self = Matrix::eye(n_rows, n_cols);
    }

    /// Declare a new shape; content afterwards is unspecified
    pub fn set_size(&mut self, n_rows: usize, n_cols: usize) {
        let mut data = std::mem::take(self).into_vec();
        data.resize(n_rows * n_cols, 0.0);
        self.replace(n_rows, n_cols, data);
    }

    /// Change shape keeping values by coordinate over the overlap
    pub fn resize(&mut self, n_rows: usize, n_cols: usize) {
        if self.shape() == (n_rows, n_cols) {
            return;
        }
        let mut out = Matrix::zeros(n_rows, n_cols);
        let keep_rows = self.n_rows().min(n_rows);
        let keep_cols = self.n_cols().min(n_cols);
        for c in 0..keep_cols {
            let src = &self.as_slice()[c * self.n_rows()..c * self.n_rows() + keep_rows];
            out.as_mut_slice()[c * n_rows..c * n_rows + keep_rows].copy_from_slice(src);
        }
        *self = out;
    }

    /// Change shape keeping the column-major order of values
    ///
    /// When the element count changes the buffer is truncated or
    /// zero-extended.
    pub fn reshape(&mut self, n_rows: usize, n_cols: usize) {
        self.set_size(n_rows, n_cols);
    }

    /// Insert `k` rows before row `pos`; `pos == n_rows` appends
    ///
    /// New cells are always zeroed, which also satisfies the unspecified
    /// content allowed when `zero_fill` is false.
    pub fn insert_rows(&mut self, pos: usize, k: usize, _zero_fill: bool) -> Result<()> {
        if pos > self.n_rows() {
            return Err(Error::out_of_range("insert_rows", pos, self.n_rows() + 1));
        }
        let block = Matrix::zeros(k, self.n_cols());
        self.splice_rows(pos, &block);
        Ok(())
    }

    /// Insert `k` columns before column `pos`; `pos == n_cols` appends
    pub fn insert_cols(&mut self, pos: usize, k: usize, _zero_fill: bool) -> Result<()> {
        if pos > self.n_cols() {
            return Err(Error::out_of_range("insert_cols", pos, self.n_cols() + 1));
        }
        let block = Matrix::zeros(self.n_rows(), k);
        self.splice_cols(pos, &block);
        Ok(())
    }

    /// Insert the rows of `block` before row `pos`
    pub fn insert_rows_from(&mut self, pos: usize, block: &Matrix) -> Result<()> {
        if self.is_empty() && self.n_cols() == 0 {
            *self = block.clone();
            return Ok(());
        }
        if pos > self.n_rows() {
            return Err(Error::out_of_range("insert_rows", pos, self.n_rows() + 1));
        }
        if block.n_cols() != self.n_cols() {
            return Err(Error::ShapeMismatch {
                op: "insert_rows",
                expected: format!("{} columns", self.n_cols()),
                actual: format!("{} columns", block.n_cols()),
            });
        }
        self.splice_rows(pos, block);
        Ok(())
    }

    /// Insert the columns of `block` before column `pos`
    pub fn insert_cols_from(&mut self, pos: usize, block: &Matrix) -> Result<()> {
        if self.is_empty() && self.n_rows() == 0 {
            *self = block.clone();
            return Ok(());
        }
        if pos > self.n_cols() {
            return Err(Error::out_of_range("insert_cols", pos, self.n_cols() + 1));
        }
        if block.n_rows() != self.n_rows() {
            return Err(Error::ShapeMismatch {
                op: "insert_cols",
                expected: format!("{} rows", self.n_rows()),
                actual: format!("{} rows", block.n_rows()),
            });
        }
        self.splice_cols(pos, block);
        Ok(())
    }

    fn splice_rows(&mut self, pos: usize, block: &Matrix) {
        let (n_rows, n_cols) = self.shape();
        let new_rows = n_rows + block.n_rows();
        let mut data = Vec::with_capacity(new_rows * n_cols);
        for c in 0..n_cols {
            let col = &self.as_slice()[c * n_rows..(c + 1) * n_rows];
            data.extend_from_slice(&col[..pos]);
            data.extend_from_slice(&block.as_slice()[c * block.n_rows()..(c + 1) * block.n_rows()]);
            data.extend_from_slice(&col[pos..]);
        }
        self.replace(new_rows, n_cols, data);
    }

    fn splice_cols(&mut self, pos: usize, block: &Matrix) {
        let (n_rows, n_cols) = self.shape();
        let new_cols = n_cols + block.n_cols();
        let mut data = Vec::with_capacity(n_rows * new_cols);
        data.extend_from_slice(&self.as_slice()[..pos * n_rows]);
        data.extend_from_slice(block.as_slice());
        data.extend_from_slice(&self.as_slice()[pos * n_rows..]);
        self.replace(n_rows, new_cols, data);
    }

    pub fn shed_row(&mut self, i: usize) -> Result<()> {
        self.shed_rows(i, i)
    }

    /// Remove rows `first..=last`
    pub fn shed_rows(&mut self, first: usize, last: usize) -> Result<()> {
        let (lo, hi) = Span::new(first, last).bounds(self.n_rows(), "shed_rows")?;
        let (n_rows, n_cols) = self.shape();
        let new_rows = n_rows - (hi - lo);
        let mut data = Vec::with_capacity(new_rows * n_cols);
        for c in 0..n_cols {
            let col = &self.as_slice()[c * n_rows..(c + 1) * n_rows];
            data.extend_from_slice(&col[..lo]);
            data.extend_from_slice(&col[hi..]);
        }
        self.replace(new_rows, n_cols, data);
        Ok(())
    }

    pub fn shed_col(&mut self, j: usize) -> Result<()> {
        self.shed_cols(j, j)
    }

    /// Remove columns `first..=last`
    pub fn shed_cols(&mut self, first: usize, last: usize) -> Result<()> {
        let (lo, hi) = Span::new(first, last).bounds(self.n_cols(), "shed_cols")?;
        let (n_rows, n_cols) = self.shape();
        let mut data = self.as_slice()[..lo * n_rows].to_vec();
        data.extend_from_slice(&self.as_slice()[hi * n_rows..]);
        self.replace(n_rows, n_cols - (hi - lo), data);
        Ok(())
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) -> Result<()> {
        let n_rows = self.n_rows();
        if i >= n_rows || j >= n_rows {
            return Err(Error::out_of_range("swap_rows", i.max(j), n_rows));
        }
        let n_cols = self.n_cols();
        let data = self.as_mut_slice();
        for c in 0..n_cols {
            data.swap(i + c * n_rows, j + c * n_rows);
        }
        Ok(())
    }

    pub fn swap_cols(&mut self, i: usize, j: usize) -> Result<()> {
        let n_cols = self.n_cols();
        if i >= n_cols || j >= n_cols {
            return Err(Error::out_of_range("swap_cols", i.max(j), n_cols));
        }
        let n_rows = self.n_rows();
        let data = self.as_mut_slice();
        for r in 0..n_rows {
            data.swap(r + i * n_rows, r + j * n_rows);
        }
        Ok(())
    }

    /// Exchange two equal-length, disjoint row ranges
    pub fn swap_row_spans(&mut self, a: Span, b: Span) -> Result<()> {
        let (a_lo, a_hi) = a.bounds(self.n_rows(), "swap_rows")?;
        let (b_lo, b_hi) = b.bounds(self.n_rows(), "swap_rows")?;
        check_swappable(a_lo, a_hi, b_lo, b_hi)?;
        for (i, j) in (a_lo..a_hi).zip(b_lo..b_hi) {
            self.swap_rows(i, j)?;
        }
        Ok(())
    }

    /// Exchange two equal-length, disjoint column ranges
    pub fn swap_col_spans(&mut self, a: Span, b: Span) -> Result<()> {
        let (a_lo, a_hi) = a.bounds(self.n_cols(), "swap_cols")?;
        let (b_lo, b_hi) = b.bounds(self.n_cols(), "swap_cols")?;
        check_swappable(a_lo, a_hi, b_lo, b_hi)?;
        for (i, j) in (a_lo..a_hi).zip(b_lo..b_hi) {
            self.swap_cols(i, j)?;
        }
        Ok(())
    }
}

fn check_swappable(a_lo: usize, a_hi: usize, b_lo: usize, b_hi: usize) -> Result<()> {
    if a_hi - a_lo != b_hi - b_lo {
        return Err(Error::InvalidArgument(format!(
            "swap: ranges have different lengths ({} vs {})",
            a_hi - a_lo,
            b_hi - b_lo
        )));
    }
    if a_lo < b_hi && b_lo < a_hi && a_lo != b_lo {
        return Err(Error::InvalidArgument("swap: ranges overlap".to_string()));
    }
    Ok(())
}

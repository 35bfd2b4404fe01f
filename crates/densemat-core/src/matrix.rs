//! Dense column-major storage
//!
//! A [`Matrix`] owns `n_rows * n_cols` doubles. Element `(r, c)` lives at
//! linear index `r + c * n_rows`, matching the reference library, so a
//! column is always a contiguous slice.

use crate::error::{Error, Result};
use crate::shape::{Size, Span};
use crate::vector::Col;
use std::fmt;
use std::ops::{Index, IndexMut, Mul, Neg};

/// Dense two-dimensional container of `f64` values
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Matrix {
    n_rows: usize,
    n_cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Empty 0x0 matrix
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self::filled(n_rows, n_cols, 0.0)
    }

    pub fn ones(n_rows: usize, n_cols: usize) -> Self {
        Self::filled(n_rows, n_cols, 1.0)
    }

    pub fn filled(n_rows: usize, n_cols: usize, value: f64) -> Self {
        Self {
            n_rows,
            n_cols,
            data: vec![value; n_rows * n_cols],
        }
    }

    /// Ones on the main diagonal, zeros elsewhere (need not be square)
    pub fn eye(n_rows: usize, n_cols: usize) -> Self {
        let mut m = Self::zeros(n_rows, n_cols);
        for i in 0..n_rows.min(n_cols) {
            m.data[i + i * n_rows] = 1.0;
        }
        m
    }

    /// Build from a column-major buffer
    pub fn from_vec(n_rows: usize, n_cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != n_rows * n_cols {
            return Err(Error::length_mismatch("from_vec", n_rows * n_cols, data.len()));
        }
        Ok(Self {
            n_rows,
            n_cols,
            data,
        })
    }

    /// Build from row-major nested rows, the way matrices are usually written down
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut m = Self::zeros(n_rows, n_cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(Error::length_mismatch("from_rows", n_cols, row.len()));
            }
            for (c, &v) in row.iter().enumerate() {
                m.data[r + c * n_rows] = v;
            }
        }
        Ok(m)
    }

    pub fn from_fn<F>(n_rows: usize, n_cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for c in 0..n_cols {
            for r in 0..n_rows {
                data.push(f(r, c));
            }
        }
        Self {
            n_rows,
            n_cols,
            data,
        }
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    #[inline]
    pub fn n_elem(&self) -> usize {
        self.data.len()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    pub fn size(&self) -> Size {
        Size::new(self.n_rows, self.n_cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.n_rows == self.n_cols
    }

    pub fn is_col(&self) -> bool {
        self.n_cols == 1
    }

    pub fn is_row(&self) -> bool {
        self.n_rows == 1
    }

    pub fn is_vec(&self) -> bool {
        self.is_col() || self.is_row()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Contiguous view of column `j`
    pub fn col_slice(&self, j: usize) -> Result<&[f64]> {
        if j >= self.n_cols {
            return Err(Error::out_of_range("col_slice", j, self.n_cols));
        }
        let start = j * self.n_rows;
        Ok(&self.data[start..start + self.n_rows])
    }

    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        row + col * self.n_rows
    }

    /// Replace shape and buffer together; callers uphold `data.len() == r * c`
    pub(crate) fn replace(&mut self, n_rows: usize, n_cols: usize, data: Vec<f64>) {
        debug_assert_eq!(data.len(), n_rows * n_cols);
        self.n_rows = n_rows;
        self.n_cols = n_cols;
        self.data = data;
    }

    /// Linear (column-major) element read
    pub fn at(&self, i: usize) -> Result<f64> {
        self.data
            .get(i)
            .copied()
            .ok_or_else(|| Error::out_of_range("at", i, self.n_elem()))
    }

    pub fn at_mut(&mut self, i: usize) -> Result<&mut f64> {
        let n = self.data.len();
        self.data
            .get_mut(i)
            .ok_or_else(|| Error::out_of_range("at_mut", i, n))
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_at(row, col, "get")?;
        Ok(self.data[self.offset(row, col)])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        self.check_at(row, col, "get_mut")?;
        let off = self.offset(row, col);
        Ok(&mut self.data[off])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    fn check_at(&self, row: usize, col: usize, op: &str) -> Result<()> {
        if row >= self.n_rows {
            return Err(Error::out_of_range(op, row, self.n_rows));
        }
        if col >= self.n_cols {
            return Err(Error::out_of_range(op, col, self.n_cols));
        }
        Ok(())
    }

    /// Linear index is valid
    pub fn in_range(&self, i: usize) -> bool {
        i < self.n_elem()
    }

    pub fn in_range_at(&self, row: usize, col: usize) -> bool {
        row < self.n_rows && col < self.n_cols
    }

    /// Block of `size` anchored at `(row, col)` fits inside the matrix
    pub fn in_range_size(&self, row: usize, col: usize, size: Size) -> bool {
        row.checked_add(size.n_rows).is_some_and(|end| end <= self.n_rows)
            && col.checked_add(size.n_cols).is_some_and(|end| end <= self.n_cols)
    }

    /// Span over the linear extent
    pub fn in_range_span(&self, span: Span) -> bool {
        span.in_range(self.n_elem())
    }

    pub fn in_range_spans(&self, rows: Span, cols: Span) -> bool {
        rows.in_range(self.n_rows) && cols.in_range(self.n_cols)
    }

    /// Transpose
    pub fn t(&self) -> Matrix {
        Matrix::from_fn(self.n_cols, self.n_rows, |r, c| self.data[c + r * self.n_rows])
    }

    /// Matrix product `self * rhs`
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.n_cols != rhs.n_rows {
            return Err(Error::ShapeMismatch {
                op: "matmul",
                expected: format!("{} rows in rhs", self.n_cols),
                actual: format!("{}x{}", rhs.n_rows, rhs.n_cols),
            });
        }
        let mut out = Matrix::zeros(self.n_rows, rhs.n_cols);
        for j in 0..rhs.n_cols {
            for k in 0..self.n_cols {
                let b = rhs.data[k + j * rhs.n_rows];
                if b == 0.0 {
                    continue;
                }
                let a_col = &self.data[k * self.n_rows..(k + 1) * self.n_rows];
                let out_col = &mut out.data[j * self.n_rows..(j + 1) * self.n_rows];
                for (o, &a) in out_col.iter_mut().zip(a_col) {
                    *o += a * b;
                }
            }
        }
        Ok(out)
    }

    fn zip_with<F>(&self, rhs: &Matrix, op: &'static str, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != rhs.shape() {
            return Err(Error::shape_mismatch(op, self.shape(), rhs.shape()));
        }
        let data = self.data.iter().zip(&rhs.data).map(|(&a, &b)| f(a, b)).collect();
        Ok(Matrix {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            data,
        })
    }

    pub fn plus(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "plus", |a, b| a + b)
    }

    pub fn minus(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "minus", |a, b| a - b)
    }

    /// Elementwise product
    pub fn schur(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "schur", |a, b| a * b)
    }

    pub fn div_elem(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "div_elem", |a, b| a / b)
    }

    pub fn scale(&self, k: f64) -> Matrix {
        self.map(|x| x * k)
    }

    pub fn map<F>(&self, f: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    /// Main diagonal as a column
    pub fn diag(&self) -> Col {
        let n = self.n_rows.min(self.n_cols);
        Col::from_vec((0..n).map(|i| self.data[self.offset(i, i)]).collect())
    }

    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, &x| acc.max(x.abs()))
    }

    /// Frobenius norm
    pub fn norm_fro(&self) -> f64 {
        let scale = self.max_abs();
        if scale == 0.0 || !scale.is_finite() {
            return self.data.iter().map(|x| x * x).sum::<f64>().sqrt();
        }
        scale * self.data.iter().map(|x| (x / scale).powi(2)).sum::<f64>().sqrt()
    }

    /// Same shape and every pair within `abs_tol` or `rel_tol * max(|a|, |b|)`
    pub fn approx_eq(&self, other: &Matrix, rel_tol: f64, abs_tol: f64) -> bool {
        self.shape() == other.shape()
            && self.data.iter().zip(&other.data).all(|(&a, &b)| {
                let diff = (a - b).abs();
                diff <= abs_tol || diff <= rel_tol * a.abs().max(b.abs())
            })
    }
}

impl Index<usize> for Matrix {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl IndexMut<usize> for Matrix {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.data[i]
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < self.n_rows && col < self.n_cols, "matrix index out of bounds");
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(row < self.n_rows && col < self.n_cols, "matrix index out of bounds");
        let off = self.offset(row, col);
        &mut self.data[off]
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, k: f64) -> Matrix {
        self.scale(k)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, k: f64) -> Matrix {
        self.data.iter_mut().for_each(|x| *x *= k);
        self
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(mut self) -> Matrix {
        self.data.iter_mut().for_each(|x| *x = -*x);
        self
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[matrix size: {}x{}]", self.n_rows, self.n_cols)?;
        for r in 0..self.n_rows {
            for c in 0..self.n_cols {
                write!(f, " {:>12.4}", self.data[self.offset(r, c)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_column_major_layout() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(m.get(1, 2).unwrap(), 6.0);
        assert_eq!(m.at(3).unwrap(), 5.0);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m.col_slice(1).unwrap(), &[2.0, 5.0]);
    }

    #[test]
    fn test_constructors() {
        let e = Matrix::eye(2, 3);
        assert_eq!(e.as_slice(), &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(Matrix::ones(2, 2).as_slice(), &[1.0; 4]);
        assert!(Matrix::new().is_empty());
        assert!(Matrix::from_vec(2, 2, vec![1.0; 3]).is_err());
        assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
        let f = Matrix::from_fn(2, 2, |r, c| (r * 10 + c) as f64);
        assert_eq!(f.as_slice(), &[0.0, 10.0, 1.0, 11.0]);
    }

    #[test]
    fn test_element_access_errors() {
        let mut m = Matrix::zeros(2, 2);
        assert!(matches!(m.get(2, 0), Err(Error::IndexOutOfRange(_))));
        assert!(matches!(m.at(4), Err(Error::IndexOutOfRange(_))));
        assert!(m.set(1, 1, 3.0).is_ok());
        assert_eq!(m.at(3).unwrap(), 3.0);
        *m.at_mut(0).unwrap() = -1.0;
        assert_eq!(m[(0, 0)], -1.0);
    }

    #[test]
    fn test_in_range_size() {
        let m = Matrix::zeros(4, 5);
        assert!(m.in_range_size(0, 0, Size::new(4, 5)));
        assert!(m.in_range_size(2, 3, Size::new(2, 2)));
        assert!(!m.in_range_size(3, 3, Size::new(2, 2)));
        assert!(!m.in_range_size(0, 4, Size::new(1, 2)));
        assert!(!m.in_range_size(usize::MAX, 0, Size::new(2, 1)));
        assert!(!m.in_range_size(0, 1, Size::new(1, usize::MAX)));
        assert!(m.in_range_spans(Span::all(), Span::new(1, 4)));
        assert!(!m.in_range_spans(Span::new(0, 4), Span::all()));
        assert!(m.in_range_span(Span::new(0, 19)));
        assert!(!m.in_range_span(Span::new(0, 20)));
    }

    #[test]
    fn test_matmul_and_transpose() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
        let b = Matrix::from_rows(&[[7.0, 8.0, 9.0], [10.0, 11.0, 12.0]]).unwrap();
        let c = a.matmul(&b).unwrap();
        let expected =
            Matrix::from_rows(&[[27.0, 30.0, 33.0], [61.0, 68.0, 75.0], [95.0, 106.0, 117.0]])
                .unwrap();
        assert_eq!(c, expected);
        assert_eq!(a.t().t(), a);
        assert_eq!(a.t().shape(), (2, 3));
        assert!(matches!(a.matmul(&a), Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_elementwise_ops() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let b = Matrix::ones(2, 2);
        assert_eq!(a.plus(&b).unwrap().as_slice(), &[2.0, 4.0, 3.0, 5.0]);
        assert_eq!(a.minus(&b).unwrap().as_slice(), &[0.0, 2.0, 1.0, 3.0]);
        assert_eq!(a.schur(&a).unwrap().as_slice(), &[1.0, 9.0, 4.0, 16.0]);
        assert!(a.plus(&Matrix::ones(2, 3)).is_err());
        assert_eq!((&a * 2.0).as_slice(), &[2.0, 6.0, 4.0, 8.0]);
        assert_eq!((-a.clone()).as_slice(), &[-1.0, -3.0, -2.0, -4.0]);
        assert_relative_eq!(a.norm_fro(), 30.0_f64.sqrt());
        assert_relative_eq!(a.scale(1e200).norm_fro(), 30.0_f64.sqrt() * 1e200, max_relative = 1e-14);
        assert_relative_eq!(a.scale(1e-200).norm_fro(), 30.0_f64.sqrt() * 1e-200, max_relative = 1e-14);
        assert_eq!(Matrix::zeros(2, 2).norm_fro(), 0.0);
        assert_eq!(a.max_abs(), 4.0);
        assert_eq!(a.diag().as_slice(), &[1.0, 4.0]);
    }

    #[test]
    fn test_approx_eq() {
        let a = Matrix::from_rows(&[[1.0, 2.0]]).unwrap();
        let b = Matrix::from_rows(&[[1.0 + 1e-13, 2.0]]).unwrap();
        assert!(a.approx_eq(&b, 1e-12, 0.0));
        assert!(!a.approx_eq(&b.t(), 1e-12, 0.0));
    }
}

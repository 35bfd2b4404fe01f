//! In-place operator engine
//!
//! An [`Op`] is a closed set of elementwise updates. Each tag is one pure
//! function of the old value ([`Op::eval`]); [`Matrix::apply`] maps it over a
//! [`Region`]. Addressed elements are independent of each other, and an
//! index listed twice is updated twice.

use crate::error::{Error, Result};
use crate::index::IndexExpr;
use crate::matrix::Matrix;
use crate::shape::Span;

/// Elementwise in-place operator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Assign(f64),
    Plus(f64),
    Minus(f64),
    Times(f64),
    Divide(f64),
    Increment,
    Decrement,
}

impl Op {
    #[inline]
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Op::Assign(v) => v,
            Op::Plus(v) => x + v,
            Op::Minus(v) => x - v,
            Op::Times(v) => x * v,
            Op::Divide(v) => x / v,
            Op::Increment => x + 1.0,
            Op::Decrement => x - 1.0,
        }
    }
}

/// Target of an in-place update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region {
    /// Every element
    All,
    /// Linear (column-major) positions
    Elems(IndexExpr),
    /// Rows x columns block
    Block { rows: IndexExpr, cols: IndexExpr },
}

impl Region {
    pub fn elem(i: usize) -> Self {
        Region::Elems(IndexExpr::Single(i))
    }

    pub fn elems(indices: Vec<usize>) -> Self {
        Region::Elems(IndexExpr::List(indices))
    }

    pub fn at(row: usize, col: usize) -> Self {
        Region::Block {
            rows: IndexExpr::Single(row),
            cols: IndexExpr::Single(col),
        }
    }

    pub fn row(i: usize) -> Self {
        Region::Block {
            rows: IndexExpr::Single(i),
            cols: IndexExpr::All,
        }
    }

    pub fn col(j: usize) -> Self {
        Region::Block {
            rows: IndexExpr::All,
            cols: IndexExpr::Single(j),
        }
    }

    pub fn rows(span: Span) -> Self {
        Region::Block {
            rows: span.into(),
            cols: IndexExpr::All,
        }
    }

    pub fn cols(span: Span) -> Self {
        Region::Block {
            rows: IndexExpr::All,
            cols: span.into(),
        }
    }

    pub fn submat(rows: Span, cols: Span) -> Self {
        Region::Block {
            rows: rows.into(),
            cols: cols.into(),
        }
    }

    /// Linear positions covered, in column-major block order, plus the block shape
    fn resolve(&self, m: &Matrix) -> Result<(Vec<usize>, Option<(usize, usize)>)> {
        match self {
            Region::All => Ok(((0..m.n_elem()).collect(), Some(m.shape()))),
            Region::Elems(idx) => Ok((idx.resolve(m.n_elem(), "apply elems")?, None)),
            Region::Block { rows, cols } => {
                let r = rows.resolve(m.n_rows(), "apply rows")?;
                let c = cols.resolve(m.n_cols(), "apply cols")?;
                let mut positions = Vec::with_capacity(r.len() * c.len());
                for &j in &c {
                    positions.extend(r.iter().map(|&i| m.offset(i, j)));
                }
                Ok((positions, Some((r.len(), c.len()))))
            }
        }
    }
}

impl Matrix {
    /// Apply `op` to every element addressed by `region`
    pub fn apply(&mut self, region: &Region, op: Op) -> Result<()> {
        let (positions, _) = region.resolve(self)?;
        let data = self.as_mut_slice();
        for i in positions {
            data[i] = op.eval(data[i]);
        }
        Ok(())
    }

    pub fn apply_all(&mut self, op: Op) {
        self.as_mut_slice().iter_mut().for_each(|x| *x = op.eval(*x));
    }

    /// Copy `values` into `region`
    ///
    /// Block regions need `values` to have the block's shape; linear
    /// regions only need the element counts to agree.
    pub fn assign(&mut self, region: &Region, values: &Matrix) -> Result<()> {
        let (positions, block) = region.resolve(self)?;
        match block {
            Some(shape) if shape != values.shape() => {
                return Err(Error::shape_mismatch("assign", shape, values.shape()));
            }
            None if positions.len() != values.n_elem() => {
                return Err(Error::length_mismatch("assign", positions.len(), values.n_elem()));
            }
            _ => {}
        }
        let data = self.as_mut_slice();
        for (i, &v) in positions.into_iter().zip(values.as_slice()) {
            data[i] = v;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Matrix {
        Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap()
    }

    #[test]
    fn test_each_op_tag() {
        assert_eq!(Op::Assign(7.0).eval(1.0), 7.0);
        assert_eq!(Op::Plus(2.0).eval(1.0), 3.0);
        assert_eq!(Op::Minus(2.0).eval(1.0), -1.0);
        assert_eq!(Op::Times(3.0).eval(2.0), 6.0);
        assert_eq!(Op::Divide(4.0).eval(2.0), 0.5);
        assert_eq!(Op::Increment.eval(2.0), 3.0);
        assert_eq!(Op::Decrement.eval(2.0), 1.0);
        assert!(Op::Divide(0.0).eval(0.0).is_nan());
    }

    #[test]
    fn test_apply_whole_and_element() {
        let mut m = grid();
        m.apply(&Region::All, Op::Increment).unwrap();
        assert_eq!(m.as_slice(), &[2.0, 5.0, 3.0, 6.0, 4.0, 7.0]);
        m.apply(&Region::at(1, 2), Op::Assign(0.0)).unwrap();
        assert_eq!(m.get(1, 2).unwrap(), 0.0);
        m.apply(&Region::elem(0), Op::Times(10.0)).unwrap();
        assert_eq!(m.at(0).unwrap(), 20.0);
        assert!(m.apply(&Region::elem(6), Op::Increment).is_err());
    }

    #[test]
    fn test_apply_row_col() {
        let mut m = grid();
        m.apply(&Region::row(0), Op::Minus(1.0)).unwrap();
        assert_eq!(m.row(0).unwrap().as_slice(), &[0.0, 1.0, 2.0]);
        m.apply(&Region::col(1), Op::Divide(2.0)).unwrap();
        assert_eq!(m.col(1).unwrap().as_slice(), &[0.5, 2.5]);
        assert!(m.apply(&Region::row(2), Op::Increment).is_err());
    }

    #[test]
    fn test_index_list_duplicates_apply_twice() {
        let mut m = Matrix::zeros(2, 2);
        m.apply(&Region::elems(vec![1, 1, 3]), Op::Increment).unwrap();
        assert_eq!(m.as_slice(), &[0.0, 2.0, 0.0, 1.0]);
    }

    #[test]
    fn test_untouched_elements_unchanged() {
        let mut m = grid();
        let before = m.clone();
        m.apply(&Region::submat(Span::new(0, 0), Span::new(1, 2)), Op::Plus(100.0))
            .unwrap();
        for i in 0..m.n_elem() {
            if [2, 4].contains(&i) {
                assert_eq!(m.at(i).unwrap(), before.at(i).unwrap() + 100.0);
            } else {
                assert_eq!(m.at(i).unwrap(), before.at(i).unwrap());
            }
        }
    }

    #[test]
    fn test_assign_from_matrix() {
        let mut m = grid();
        let block = Matrix::from_rows(&[[9.0, 8.0]]).unwrap();
        m.assign(&Region::submat(Span::new(1, 1), Span::new(0, 1)), &block)
            .unwrap();
        assert_eq!(m.row(1).unwrap().as_slice(), &[9.0, 8.0, 6.0]);
        assert!(matches!(
            m.assign(&Region::row(0), &block),
            Err(Error::ShapeMismatch { .. })
        ));
        m.assign(&Region::elems(vec![5, 0]), &Matrix::from_vec(2, 1, vec![-1.0, -2.0]).unwrap())
            .unwrap();
        assert_eq!(m.at(5).unwrap(), -1.0);
        assert_eq!(m.at(0).unwrap(), -2.0);
    }
}

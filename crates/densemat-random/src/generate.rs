//! Uniform, normal and integer generation
//!
//! Shape is chosen by the entry point: `*_col` gives a column, `*_row` a
//! row, the plain form an `n_rows x n_cols` matrix.

use crate::context::RandomContext;
use densemat_core::{Col, DistrParam, Error, Matrix, Result, Row};
use rand_distr::{Distribution, Normal, StandardNormal, Uniform};

fn sample<D: Distribution<f64>>(ctx: &mut RandomContext, n_rows: usize, n_cols: usize, dist: D) -> Matrix {
    let rng = ctx.rng();
    Matrix::from_fn(n_rows, n_cols, |_, _| dist.sample(rng))
}

impl RandomContext {
    /// Uniform on `[0, 1)`
    pub fn randu(&mut self, n_rows: usize, n_cols: usize) -> Matrix {
        sample(self, n_rows, n_cols, Uniform::new(0.0, 1.0))
    }

    pub fn randu_col(&mut self, n: usize) -> Col {
        Col::from_vec(self.randu(n, 1).into_vec())
    }

    pub fn randu_row(&mut self, n: usize) -> Row {
        Row::from_vec(self.randu(1, n).into_vec())
    }

    /// Uniform on `[a, b)`; `a == b` yields the constant `a`
    pub fn randu_in(&mut self, n_rows: usize, n_cols: usize, param: DistrParam) -> Result<Matrix> {
        let DistrParam { a, b } = param;
        if !a.is_finite() || !b.is_finite() || a > b {
            return Err(Error::InvalidArgument(format!(
                "randu: interval [{a}, {b}) must be finite with a <= b"
            )));
        }
        if a == b {
            return Ok(Matrix::filled(n_rows, n_cols, a));
        }
        Ok(sample(self, n_rows, n_cols, Uniform::new(a, b)))
    }

    /// Standard normal
    pub fn randn(&mut self, n_rows: usize, n_cols: usize) -> Matrix {
        sample(self, n_rows, n_cols, StandardNormal)
    }

    pub fn randn_col(&mut self, n: usize) -> Col {
        Col::from_vec(self.randn(n, 1).into_vec())
    }

    pub fn randn_row(&mut self, n: usize) -> Row {
        Row::from_vec(self.randn(1, n).into_vec())
    }

    /// Normal with mean `param.a` and standard deviation `param.b`
    pub fn randn_with(&mut self, n_rows: usize, n_cols: usize, param: DistrParam) -> Result<Matrix> {
        let normal = Normal::new(param.a, param.b).map_err(|e| {
            Error::InvalidArgument(format!("randn: mean {} sd {}: {e}", param.a, param.b))
        })?;
        Ok(sample(self, n_rows, n_cols, normal))
    }

    /// Integers drawn uniformly from the closed interval `[a, b]`
    ///
    /// Non-integral bounds are tightened to the integers inside them.
    pub fn randi(&mut self, n_rows: usize, n_cols: usize, param: DistrParam) -> Result<Matrix> {
        let DistrParam { a, b } = param;
        if !a.is_finite() || !b.is_finite() || a > b {
            return Err(Error::InvalidArgument(format!(
                "randi: interval [{a}, {b}] must be finite with a <= b"
            )));
        }
        let (lo, hi) = (a.ceil() as i64, b.floor() as i64);
        if lo > hi {
            return Err(Error::InvalidArgument(format!(
                "randi: interval [{a}, {b}] contains no integer"
            )));
        }
        let dist = Uniform::new_inclusive(lo, hi);
        let rng = self.rng();
        Ok(Matrix::from_fn(n_rows, n_cols, |_, _| dist.sample(rng) as f64))
    }

    pub fn randi_col(&mut self, n: usize, param: DistrParam) -> Result<Col> {
        Ok(Col::from_vec(self.randi(n, 1, param)?.into_vec()))
    }

    pub fn randi_row(&mut self, n: usize, param: DistrParam) -> Result<Row> {
        Ok(Row::from_vec(self.randi(1, n, param)?.into_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes() {
        let mut ctx = RandomContext::seeded(3);
        assert_eq!(ctx.randu(2, 5).shape(), (2, 5));
        assert_eq!(ctx.randu_col(4).shape(), (4, 1));
        assert_eq!(ctx.randn_row(6).shape(), (1, 6));
        assert_eq!(ctx.randi_col(3, DistrParam::new(0.0, 9.0)).unwrap().shape(), (3, 1));
        assert!(ctx.randn(0, 3).is_empty());
    }

    #[test]
    fn test_uniform_bounds() {
        let mut ctx = RandomContext::seeded(4);
        assert!(ctx.randu(50, 50).as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
        let m = ctx.randu_in(20, 20, DistrParam::new(-3.0, -1.0)).unwrap();
        assert!(m.as_slice().iter().all(|&x| (-3.0..-1.0).contains(&x)));
        let c = ctx.randu_in(2, 2, DistrParam::new(5.0, 5.0)).unwrap();
        assert_eq!(c.as_slice(), &[5.0; 4]);
        assert!(ctx.randu_in(1, 1, DistrParam::new(1.0, 0.0)).is_err());
    }

    #[test]
    fn test_integer_bounds_are_inclusive() {
        let mut ctx = RandomContext::seeded(5);
        let m = ctx.randi(40, 40, DistrParam::new(-2.0, 2.0)).unwrap();
        assert!(m.as_slice().iter().all(|&x| x.fract() == 0.0 && (-2.0..=2.0).contains(&x)));
        assert!(m.as_slice().contains(&-2.0));
        assert!(m.as_slice().contains(&2.0));
        let single = ctx.randi_row(5, DistrParam::new(7.0, 7.0)).unwrap();
        assert_eq!(single.as_slice(), &[7.0; 5]);
    }

    #[test]
    fn test_invalid_parameters() {
        let mut ctx = RandomContext::seeded(6);
        assert!(matches!(ctx.randi(1, 1, DistrParam::new(3.0, 1.0)), Err(Error::InvalidArgument(_))));
        assert!(matches!(ctx.randi(1, 1, DistrParam::new(f64::NAN, 1.0)), Err(Error::InvalidArgument(_))));
        assert!(matches!(ctx.randi(1, 1, DistrParam::new(0.2, 0.8)), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            ctx.randn_with(1, 1, DistrParam::new(0.0, -1.0)),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_same_seed_same_matrix() {
        let a = RandomContext::seeded(99).randn(3, 3);
        let b = RandomContext::seeded(99).randn(3, 3);
        assert_eq!(a, b);
    }
}

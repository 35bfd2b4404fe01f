//! Random permutation of elements, rows or columns

use crate::context::RandomContext;
use densemat_core::{Dim, Matrix};
use rand::seq::SliceRandom;

impl RandomContext {
    fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(self.rng());
        order
    }

    /// Vectors have their elements permuted; matrices have their rows
    /// permuted.
    pub fn shuffle(&mut self, x: &Matrix) -> Matrix {
        if x.is_row() {
            self.shuffle_dim(x, Dim::EachRow)
        } else {
            self.shuffle_dim(x, Dim::EachCol)
        }
    }

    /// [`Dim::EachCol`] permutes rows (each column sees the same reordering),
    /// [`Dim::EachRow`] permutes columns.
    pub fn shuffle_dim(&mut self, x: &Matrix, dim: Dim) -> Matrix {
        match dim {
            Dim::EachCol => {
                let order = self.permutation(x.n_rows());
                Matrix::from_fn(x.n_rows(), x.n_cols(), |r, c| x[(order[r], c)])
            }
            Dim::EachRow => {
                let order = self.permutation(x.n_cols());
                Matrix::from_fn(x.n_rows(), x.n_cols(), |r, c| x[(r, order[c])])
            }
        }
    }
}

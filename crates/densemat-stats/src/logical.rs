//! Truth reductions and nonzero search
//!
//! Any value other than `0.0` (NaN included) counts as true.

use crate::reduce::reduce;
use densemat_core::{Dim, Error, Matrix, Result};
use std::str::FromStr;

#[inline]
fn truthy(x: f64) -> bool {
    x != 0.0
}

fn as_flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

pub fn all_slice(data: &[f64]) -> bool {
    data.iter().all(|&x| truthy(x))
}

pub fn any_slice(data: &[f64]) -> bool {
    data.iter().any(|&x| truthy(x))
}

/// 1.0 where every element of the lane is nonzero, else 0.0
pub fn all(x: &Matrix, dim: Dim) -> Matrix {
    reduce(x, dim, |lane| as_flag(all_slice(lane)))
}

/// 1.0 where some element of the lane is nonzero, else 0.0
pub fn any(x: &Matrix, dim: Dim) -> Matrix {
    reduce(x, dim, |lane| as_flag(any_slice(lane)))
}

/// Which end of the match list [`find_n`] keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FindMode {
    #[default]
    First,
    Last,
}

impl FromStr for FindMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "first" => Ok(FindMode::First),
            "last" => Ok(FindMode::Last),
            other => Err(Error::InvalidArgument(format!(
                "find mode must be \"first\" or \"last\", got {other:?}"
            ))),
        }
    }
}

/// Linear indices of every nonzero element, ascending
pub fn find(x: &Matrix) -> Vec<usize> {
    find_n(x, 0, FindMode::First)
}

/// At most `k` linear indices of nonzero elements (`k == 0` keeps all)
///
/// The result is ascending for both modes.
pub fn find_n(x: &Matrix, k: usize, mode: FindMode) -> Vec<usize> {
    let hits = x
        .as_slice()
        .iter()
        .enumerate()
        .filter(|&(_, &v)| truthy(v))
        .map(|(i, _)| i);
    match (k, mode) {
        (0, _) => hits.collect(),
        (k, FindMode::First) => hits.take(k).collect(),
        (k, FindMode::Last) => {
            let matched: Vec<usize> = hits.collect();
            matched[matched.len().saturating_sub(k)..].to_vec()
        }
    }
}

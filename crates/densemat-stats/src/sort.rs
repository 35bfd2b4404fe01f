//! Value sorting and sort permutations
//!
//! NaN has no place in a total order of the data, so any NaN in the input
//! is rejected with `InvalidArgument` instead of being silently placed.

use crate::reduce::map_lanes;
use densemat_core::{Dim, Error, Matrix, Result};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascend,
    Descend,
}

impl SortDirection {
    fn compare(self, a: f64, b: f64) -> Ordering {
        let ord = OrderedFloat(a).cmp(&OrderedFloat(b));
        match self {
            SortDirection::Ascend => ord,
            SortDirection::Descend => ord.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ascend" => Ok(SortDirection::Ascend),
            "descend" => Ok(SortDirection::Descend),
            other => Err(Error::InvalidArgument(format!(
                "sort direction must be \"ascend\" or \"descend\", got {other:?}"
            ))),
        }
    }
}

fn reject_nan(data: &[f64], op: &str) -> Result<()> {
    match data.iter().position(|v| v.is_nan()) {
        Some(i) => Err(Error::InvalidArgument(format!(
            "{op}: NaN at position {i} cannot be ordered"
        ))),
        None => Ok(()),
    }
}

fn sorted_lane(lane: &[f64], dir: SortDirection) -> Vec<f64> {
    let mut out = lane.to_vec();
    out.sort_by(|&a, &b| dir.compare(a, b));
    out
}

/// Sort a vector's elements, or each column of a matrix
pub fn sort(x: &Matrix, dir: SortDirection) -> Result<Matrix> {
    reject_nan(x.as_slice(), "sort")?;
    if x.is_vec() {
        return Matrix::from_vec(x.n_rows(), x.n_cols(), sorted_lane(x.as_slice(), dir));
    }
    Ok(map_lanes(x, Dim::EachCol, x.n_rows(), |lane| sorted_lane(lane, dir)))
}

/// Sort each column (`EachCol`) or each row (`EachRow`)
pub fn sort_dim(x: &Matrix, dir: SortDirection, dim: Dim) -> Result<Matrix> {
    reject_nan(x.as_slice(), "sort")?;
    let width = match dim {
        Dim::EachCol => x.n_rows(),
        Dim::EachRow => x.n_cols(),
    };
    Ok(map_lanes(x, dim, width, |lane| sorted_lane(lane, dir)))
}

/// Permutation that sorts `data`; order among equal keys is unspecified
pub fn sort_index(data: &[f64], dir: SortDirection) -> Result<Vec<usize>> {
    reject_nan(data, "sort_index")?;
    let mut idx: Vec<usize> = (0..data.len()).collect();
    idx.sort_unstable_by(|&i, &j| dir.compare(data[i], data[j]));
    Ok(idx)
}

/// Permutation that sorts `data`, keeping equal keys in their original order
pub fn stable_sort_index(data: &[f64], dir: SortDirection) -> Result<Vec<usize>> {
    reject_nan(data, "stable_sort_index")?;
    let mut idx: Vec<usize> = (0..data.len()).collect();
    idx.sort_by(|&i, &j| dir.compare(data[i], data[j]));
    Ok(idx)
}

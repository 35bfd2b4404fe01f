//! Center-based (`hist`) and edge-based (`histc`) counting
//!
//! Counts are returned as `f64` matrices. A vector input yields counts in
//! the input's orientation; a matrix input is counted per lane in the
//! requested direction (each column by default).

use crate::reduce::map_lanes;
use densemat_core::{Dim, Error, Matrix, Result};
use tracing::debug;

fn check_non_decreasing(values: &[f64], what: &str) -> Result<()> {
    if values.is_empty() {
        return Err(Error::InvalidArgument(format!("{what} must not be empty")));
    }
    if values.iter().any(|v| v.is_nan()) || values.windows(2).any(|w| w[1] < w[0]) {
        return Err(Error::InvalidArgument(format!(
            "{what} must be non-decreasing"
        )));
    }
    Ok(())
}

/// Bucket of the nearest center, ties to the lower one
///
/// `-inf` lands in the first bucket and `+inf` in the last.
fn nearest_center(centers: &[f64], value: f64) -> usize {
    let j = centers.partition_point(|&c| c < value);
    if j == 0 {
        return 0;
    }
    if j == centers.len() {
        return centers.len() - 1;
    }
    if value - centers[j - 1] <= centers[j] - value {
        j - 1
    } else {
        j
    }
}

fn count_centers(lane: &[f64], centers: &[f64]) -> Vec<f64> {
    let mut counts = vec![0.0; centers.len()];
    for &v in lane.iter().filter(|v| !v.is_nan()) {
        counts[nearest_center(centers, v)] += 1.0;
    }
    counts
}

/// Bucket `i` holds `[e_i, e_{i+1})`; the last holds values equal to the last edge
fn count_edges(lane: &[f64], edges: &[f64]) -> Vec<f64> {
    let mut counts = vec![0.0; edges.len()];
    let (first, last) = (edges[0], edges[edges.len() - 1]);
    for &v in lane {
        if v.is_nan() || v < first || v > last {
            continue;
        }
        let bucket = if v == last {
            edges.len() - 1
        } else {
            edges.partition_point(|&e| e <= v) - 1
        };
        counts[bucket] += 1.0;
    }
    counts
}

fn shaped_like(x: &Matrix, counts: Vec<f64>) -> Result<Matrix> {
    let k = counts.len();
    if x.is_row() {
        Matrix::from_vec(1, k, counts)
    } else {
        Matrix::from_vec(k, 1, counts)
    }
}

/// Nearest-center counts
pub fn hist(x: &Matrix, centers: &[f64]) -> Result<Matrix> {
    check_non_decreasing(centers, "hist centers")?;
    if x.is_vec() {
        return shaped_like(x, count_centers(x.as_slice(), centers));
    }
    hist_dim(x, centers, Dim::EachCol)
}

/// Nearest-center counts per column (`k x n_cols`) or per row (`n_rows x k`)
pub fn hist_dim(x: &Matrix, centers: &[f64], dim: Dim) -> Result<Matrix> {
    check_non_decreasing(centers, "hist centers")?;
    Ok(map_lanes(x, dim, centers.len(), |lane| count_centers(lane, centers)))
}

/// Equal-width centers spanning the finite range of `data`
///
/// The range is widened by 0.5 on each side when every finite value is the
/// same (or there are none).
pub fn auto_centers(data: &[f64], n_bins: usize) -> Result<Vec<f64>> {
    if n_bins == 0 {
        return Err(Error::InvalidArgument("n_bins must be positive".to_string()));
    }
    let (mut lo, mut hi) = data
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if lo > hi {
        (lo, hi) = (0.0, 0.0);
    }
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / n_bins as f64;
    debug!("hist: {} centers over [{}, {}], width {}", n_bins, lo, hi, width);
    Ok((0..n_bins).map(|i| lo + width * (i as f64 + 0.5)).collect())
}

/// `hist` with `n_bins` centers derived from the data
pub fn hist_bins(x: &Matrix, n_bins: usize) -> Result<Matrix> {
    let centers = auto_centers(x.as_slice(), n_bins)?;
    hist(x, &centers)
}

/// Edge-interval counts
pub fn histc(x: &Matrix, edges: &[f64]) -> Result<Matrix> {
    check_non_decreasing(edges, "histc edges")?;
    if x.is_vec() {
        return shaped_like(x, count_edges(x.as_slice(), edges));
    }
    histc_dim(x, edges, Dim::EachCol)
}

pub fn histc_dim(x: &Matrix, edges: &[f64], dim: Dim) -> Result<Matrix> {
    check_non_decreasing(edges, "histc edges")?;
    Ok(map_lanes(x, dim, edges.len(), |lane| count_edges(lane, edges)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[f64]) -> Matrix {
        Matrix::from_vec(1, values.len(), values.to_vec()).unwrap()
    }

    #[test]
    fn test_nearest_center_ties_go_low() {
        let centers = [0.0, 1.0, 2.0];
        assert_eq!(nearest_center(&centers, 0.5), 0);
        assert_eq!(nearest_center(&centers, 0.51), 1);
        assert_eq!(nearest_center(&centers, 1.5), 1);
        assert_eq!(nearest_center(&centers, -7.0), 0);
        assert_eq!(nearest_center(&centers, 9.0), 2);
    }

    #[test]
    fn test_hist_vector_keeps_orientation() {
        let x = row(&[0.1, 0.4, 0.6, 1.9, f64::NAN, f64::NEG_INFINITY, f64::INFINITY]);
        let h = hist(&x, &[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(h.shape(), (1, 3));
        assert_eq!(h.as_slice(), &[3.0, 1.0, 2.0]);

        let h = hist(&x.t(), &[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(h.shape(), (3, 1));
    }

    #[test]
    fn test_hist_matrix_counts_each_lane() {
        let m = Matrix::from_rows(&[[0.0, 2.0], [1.0, 2.0], [2.0, 0.0]]).unwrap();
        let h = hist(&m, &[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(h.shape(), (3, 2));
        assert_eq!(h.col(0).unwrap().as_slice(), &[1.0, 1.0, 1.0]);
        assert_eq!(h.col(1).unwrap().as_slice(), &[1.0, 0.0, 2.0]);

        let h = hist_dim(&m, &[0.0, 2.0], Dim::EachRow).unwrap();
        assert_eq!(h.shape(), (3, 2));
        assert_eq!(h.row(1).unwrap().as_slice(), &[1.0, 1.0]);
    }

    #[test]
    fn test_hist_rejects_bad_centers() {
        let x = row(&[1.0]);
        assert!(matches!(hist(&x, &[]), Err(Error::InvalidArgument(_))));
        assert!(matches!(hist(&x, &[1.0, 0.0]), Err(Error::InvalidArgument(_))));
        assert!(matches!(hist_bins(&x, 0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_auto_centers() {
        let c = auto_centers(&[0.0, 10.0, f64::INFINITY], 5).unwrap();
        assert_eq!(c, vec![1.0, 3.0, 5.0, 7.0, 9.0]);
        let c = auto_centers(&[4.0, 4.0], 2).unwrap();
        assert_eq!(c, vec![3.75, 4.25]);

        let h = hist_bins(&row(&[0.0, 1.0, 2.0, 3.0, 10.0]), 5).unwrap();
        assert_eq!(h.as_slice(), &[3.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(h.as_slice().iter().sum::<f64>(), 5.0);
    }

    #[test]
    fn test_histc_half_open_with_closed_last_edge() {
        let x = row(&[0.0, 0.5, 1.0, 1.5, 2.0, 2.5, -1.0, f64::NAN]);
        let h = histc(&x, &[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(h.as_slice(), &[2.0, 2.0, 1.0]);
        let h = histc(&x.t(), &[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(h.shape(), (3, 1));
    }

    #[test]
    fn test_histc_per_row() {
        let m = Matrix::from_rows(&[[0.0, 1.0, 1.0], [3.0, 3.0, 0.5]]).unwrap();
        let h = histc_dim(&m, &[0.0, 1.0, 3.0], Dim::EachRow).unwrap();
        assert_eq!(h.shape(), (2, 3));
        assert_eq!(h.row(0).unwrap().as_slice(), &[1.0, 2.0, 0.0]);
        assert_eq!(h.row(1).unwrap().as_slice(), &[1.0, 0.0, 2.0]);
        assert!(histc(&m, &[2.0, 1.0]).is_err());
    }
}

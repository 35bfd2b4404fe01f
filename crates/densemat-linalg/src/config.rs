//! Solver settings

/// Tuning knobs for the iterative and threshold-sensitive kernels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinalgConfig {
    /// Jacobi sweeps allowed before `eig_sym` / `svd_econ` give up
    pub max_sweeps: usize,
    /// Off-diagonal magnitude, relative to the diagonal, below which a
    /// rotation is skipped
    pub tolerance: f64,
    /// Smallest accepted `min |pivot| / max |pivot|` for LU-based inverse
    /// and solve
    pub rcond_threshold: f64,
    /// Singular values below `lstsq_rcond * max(m, n) * s_max` are treated
    /// as zero by least squares
    pub lstsq_rcond: f64,
}

impl Default for LinalgConfig {
    fn default() -> Self {
        Self {
            max_sweeps: 100,
            tolerance: f64::EPSILON,
            rcond_threshold: f64::EPSILON,
            lstsq_rcond: f64::EPSILON,
        }
    }
}

impl LinalgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Jacobi sweep limit
    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        assert!(max_sweeps > 0, "Sweep limit must be positive");
        self.max_sweeps = max_sweeps;
        self
    }

    /// Set the rotation skip tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        assert!(tolerance > 0.0, "Tolerance must be positive");
        self.tolerance = tolerance;
        self
    }

    pub fn with_rcond_threshold(mut self, rcond_threshold: f64) -> Self {
        assert!(rcond_threshold >= 0.0, "Threshold must be non-negative");
        self.rcond_threshold = rcond_threshold;
        self
    }

    pub fn with_lstsq_rcond(mut self, lstsq_rcond: f64) -> Self {
        assert!(lstsq_rcond >= 0.0, "Cutoff must be non-negative");
        self.lstsq_rcond = lstsq_rcond;
        self
    }
}

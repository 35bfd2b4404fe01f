//! Range, block-shape and distribution descriptors
//!
//! These are plain value types. They carry no reference to a matrix; every
//! check against an actual shape happens at the call that consumes them.

use crate::error::{Error, Result};

/// Inclusive, zero-based index range over one axis
///
/// `Span::all()` is a sentinel for "the entire axis" and is kept distinct
/// from an explicit `Span::new(0, n - 1)`: the former resolves against
/// whatever the extent is at call time, the latter is range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub first: usize,
    pub last: usize,
    pub whole: bool,
}

impl Span {
    /// Explicit inclusive range `[first, last]`
    pub const fn new(first: usize, last: usize) -> Self {
        Self {
            first,
            last,
            whole: false,
        }
    }

    /// Single-index range `[i, i]`
    pub const fn single(i: usize) -> Self {
        Self::new(i, i)
    }

    /// The entire axis
    pub const fn all() -> Self {
        Self {
            first: 0,
            last: 0,
            whole: true,
        }
    }

    /// Whether this is the entire-axis sentinel
    pub fn is_entire_range(&self) -> bool {
        self.whole
    }

    /// Number of indices covered when resolved against `extent`
    pub fn len_within(&self, extent: usize) -> usize {
        if self.whole {
            extent
        } else if self.last >= self.first {
            (self.last - self.first).saturating_add(1)
        } else {
            0
        }
    }

    /// Whether the span is valid for an axis of length `extent`
    pub fn in_range(&self, extent: usize) -> bool {
        self.whole || (self.first <= self.last && self.last < extent)
    }

    /// Resolve to concrete `(first, last_exclusive)` bounds, checking them
    pub fn bounds(&self, extent: usize, op: &str) -> Result<(usize, usize)> {
        if self.whole {
            return Ok((0, extent));
        }
        if self.first > self.last {
            return Err(Error::IndexOutOfRange(format!(
                "{op}: span [{}, {}] has first > last",
                self.first, self.last
            )));
        }
        if self.last >= extent {
            return Err(Error::out_of_range(op, self.last, extent));
        }
        Ok((self.first, self.last + 1))
    }
}

/// Block shape used together with a base `(row, col)` offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub n_rows: usize,
    pub n_cols: usize,
}

impl Size {
    pub const fn new(n_rows: usize, n_cols: usize) -> Self {
        Self { n_rows, n_cols }
    }
}

impl From<(usize, usize)> for Size {
    fn from((n_rows, n_cols): (usize, usize)) -> Self {
        Self { n_rows, n_cols }
    }
}

/// Two doubles parameterising a distribution
///
/// Integer bounds for `randi`, interval bounds for `randu`, mean and
/// standard deviation for `randn`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistrParam {
    pub a: f64,
    pub b: f64,
}

impl DistrParam {
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

impl Default for DistrParam {
    fn default() -> Self {
        Self { a: 0.0, b: 1.0 }
    }
}

/// Direction of a dimension-aware reduction
///
/// `EachCol` (dim 0) reduces every column and produces a row result;
/// `EachRow` (dim 1) reduces every row and produces a column result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dim {
    #[default]
    EachCol,
    EachRow,
}

impl Dim {
    /// Numeric form used by the reference library
    pub fn index(self) -> usize {
        match self {
            Dim::EachCol => 0,
            Dim::EachRow => 1,
        }
    }
}

impl TryFrom<usize> for Dim {
    type Error = Error;

    fn try_from(dim: usize) -> Result<Self> {
        match dim {
            0 => Ok(Dim::EachCol),
            1 => Ok(Dim::EachRow),
            other => Err(Error::InvalidArgument(format!(
                "dim must be 0 or 1, got {other}"
            ))),
        }
    }
}

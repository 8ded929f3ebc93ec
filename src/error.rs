use std::fmt;

use thiserror::Error;

/// Grid axis, used to tag dimension and index errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Col,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Col => write!(f, "col"),
        }
    }
}

/// Errors raised when building or indexing a grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("number of {axis}s can't be missing")]
    MissingDimension { axis: Axis },
    #[error("number of {axis}s must be >= 1")]
    EmptyDimension { axis: Axis },
    #[error("{rows}x{cols} grid exceeds the addressable cell count")]
    TooLarge { rows: usize, cols: usize },
    #[error("{axis} index must be >= 0 and < {bound}, but was {index}")]
    IndexOutOfBounds { axis: Axis, index: i64, bound: usize },
}

impl GridError {
    /// True for errors that prevent a grid from being built at all.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            GridError::MissingDimension { .. }
                | GridError::EmptyDimension { .. }
                | GridError::TooLarge { .. }
        )
    }

    pub fn is_index(&self) -> bool {
        matches!(self, GridError::IndexOutOfBounds { .. })
    }

    /// Axis the error is about, if it concerns a single one.
    pub fn axis(&self) -> Option<Axis> {
        match self {
            GridError::MissingDimension { axis }
            | GridError::EmptyDimension { axis }
            | GridError::IndexOutOfBounds { axis, .. } => Some(*axis),
            GridError::TooLarge { .. } => None,
        }
    }
}

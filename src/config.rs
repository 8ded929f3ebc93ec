use serde::{Deserialize, Serialize};

use crate::error::{Axis, GridError};
use crate::grid::Grid;

/// Largest grid, in cells, that user input may request.
pub const MAX_CELLS: usize = 1 << 24;

/// Grid shape and wrap mode as read from user input. Dimensions are optional
/// here so that a missing one can be reported rather than defaulted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridParams {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub wrap_rows: bool,
    pub wrap_cols: bool,
}

impl GridParams {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: Some(rows),
            cols: Some(cols),
            ..Self::default()
        }
    }

    pub fn wrapping(mut self, wrap_rows: bool, wrap_cols: bool) -> Self {
        self.wrap_rows = wrap_rows;
        self.wrap_cols = wrap_cols;
        self
    }

    pub fn dimensions(&self) -> Result<(usize, usize), GridError> {
        let rows = self.rows.ok_or(GridError::MissingDimension { axis: Axis::Row })?;
        let cols = self.cols.ok_or(GridError::MissingDimension { axis: Axis::Col })?;
        match rows.checked_mul(cols) {
            Some(n) if n <= MAX_CELLS => Ok((rows, cols)),
            _ => Err(GridError::TooLarge { rows, cols }),
        }
    }

    /// Empty grid with these dimensions and wrap flags.
    pub fn build<T>(&self) -> Result<Grid<T>, GridError> {
        let (rows, cols) = self.dimensions()?;
        Ok(Grid::new(rows, cols)?.with_wrap(self.wrap_rows, self.wrap_cols))
    }

    /// Grid filled from row-major `cells`, see [`Grid::from_array`].
    pub fn build_from<T, I>(&self, cells: I) -> Result<Grid<T>, GridError>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let (rows, cols) = self.dimensions()?;
        Ok(Grid::from_array(cells, rows, cols)?.with_wrap(self.wrap_rows, self.wrap_cols))
    }
}

/// Simulation parameters for the life runner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub grid: GridParams,
    /// Probability that a cell starts alive.
    pub density: f32,
    pub generations: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            grid: GridParams::new(64, 64).wrapping(true, true),
            density: 0.3,
            generations: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dimension_is_a_construction_error() {
        let params: GridParams = serde_json::from_str(r#"{"rows": 5}"#).unwrap();
        let err = params.build::<u8>().unwrap_err();
        assert_eq!(err, GridError::MissingDimension { axis: Axis::Col });
        assert!(err.is_construction());
    }

    #[test]
    fn oversized_input_is_rejected_before_allocating() {
        let params: GridParams =
            serde_json::from_str(r#"{"rows": 100000, "cols": 100000}"#).unwrap();
        let err = params.build_from::<u8, _>([]).unwrap_err();
        assert_eq!(err, GridError::TooLarge { rows: 100000, cols: 100000 });
        assert!(err.is_construction());

        let params = GridParams::new(usize::MAX, 2);
        assert!(params.build::<u8>().unwrap_err().is_construction());

        let edge = GridParams::new(MAX_CELLS, 1);
        assert_eq!(edge.dimensions(), Ok((MAX_CELLS, 1)));
    }

    #[test]
    fn build_applies_wrap_flags() {
        let params: GridParams =
            serde_json::from_str(r#"{"rows": 2, "cols": 3, "wrap_cols": true}"#).unwrap();
        let grid = params.build::<u8>().unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert!(!grid.wrap_rows());
        assert!(grid.wrap_cols());
    }

    #[test]
    fn build_from_keeps_row_major_layout() {
        let grid = GridParams::new(2, 2)
            .wrapping(true, true)
            .build_from([Some('a'), None, Some('c')])
            .unwrap();
        assert_eq!(grid.value_at(-1, 0), Ok(Some(&'c')));
        assert_eq!(grid.is_empty(0, 1), Ok(true));
    }

    #[test]
    fn partial_params_fall_back_to_defaults() {
        let params: Params = serde_json::from_str(r#"{"generations": 3}"#).unwrap();
        assert_eq!(params.generations, 3);
        assert_eq!(params.grid, Params::default().grid);
    }
}

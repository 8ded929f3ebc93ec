use std::fmt;

use crate::error::{Axis, GridError};

/// Row-major flat grid of optional cells. `None` marks an empty cell.
/// Each axis can wrap (toroidal topology) independently; a non-wrapping axis
/// rejects out-of-range indices instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<Option<T>>,
    rows: usize,
    cols: usize,
    wrap_rows: bool,
    wrap_cols: bool,
}

/// (row, col) offsets probed by [`Grid::get_neighbours`], in result order.
pub const NEIGHBOUR_OFFSETS: [(i64, i64); 8] = [
    (1, -1), (0, -1), (-1, -1),
    (1, 0),           (-1, 0),
    (1, 1),  (0, 1),  (-1, 1),
];

#[inline]
fn normalize(index: i64, size: usize) -> usize {
    index.rem_euclid(size as i64) as usize
}

impl<T> Grid<T> {
    /// Empty grid with both axes non-wrapping.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 {
            return Err(GridError::EmptyDimension { axis: Axis::Row });
        }
        if cols == 0 {
            return Err(GridError::EmptyDimension { axis: Axis::Col });
        }
        // Indices are i64, so the cell count must fit there as well.
        let size = rows
            .checked_mul(cols)
            .filter(|&n| i64::try_from(n).is_ok())
            .ok_or(GridError::TooLarge { rows, cols })?;
        log::debug!("new {}x{} grid", rows, cols);
        Ok(Self {
            cells: (0..size).map(|_| None).collect(),
            rows,
            cols,
            wrap_rows: false,
            wrap_cols: false,
        })
    }

    /// Build a grid from row-major cells: `array[i]` lands at
    /// `(i / cols, i % cols)`. Missing trailing cells stay empty.
    pub fn from_array<I>(array: I, rows: usize, cols: usize) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let mut grid = Self::new(rows, cols)?;
        for (i, cell) in array.into_iter().enumerate() {
            let (row, col) = (i / cols, i % cols);
            let pos = grid.position(row as i64, col as i64)?;
            grid.cells[pos] = cell;
        }
        Ok(grid)
    }

    pub fn with_wrap(mut self, wrap_rows: bool, wrap_cols: bool) -> Self {
        self.wrap_rows = wrap_rows;
        self.wrap_cols = wrap_cols;
        self
    }

    // === Dimensions ===
    #[inline]
    pub fn rows(&self) -> usize { self.rows }

    #[inline]
    pub fn cols(&self) -> usize { self.cols }

    #[inline]
    pub fn size(&self) -> usize { self.cells.len() }

    // === Wrap flags ===
    #[inline]
    pub fn wrap_rows(&self) -> bool { self.wrap_rows }

    #[inline]
    pub fn wrap_cols(&self) -> bool { self.wrap_cols }

    pub fn set_wrap_rows(&mut self, wrap: bool) {
        self.wrap_rows = wrap;
    }

    pub fn set_wrap_cols(&mut self, wrap: bool) {
        self.wrap_cols = wrap;
    }

    // === Index conversion ===
    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// Inverse of the row-major storage offset.
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    // === Validation / sanitizing ===
    pub fn is_row_valid(&self, row: i64) -> bool {
        self.wrap_rows || (0..self.rows as i64).contains(&row)
    }

    pub fn is_col_valid(&self, col: i64) -> bool {
        self.wrap_cols || (0..self.cols as i64).contains(&col)
    }

    /// Validate `row` against the current wrap mode and fold it into `0..rows`.
    pub fn sanitize_row(&self, row: i64) -> Result<usize, GridError> {
        if !self.is_row_valid(row) {
            return Err(GridError::IndexOutOfBounds {
                axis: Axis::Row,
                index: row,
                bound: self.rows,
            });
        }
        Ok(normalize(row, self.rows))
    }

    /// Validate `col` against the current wrap mode and fold it into `0..cols`.
    pub fn sanitize_col(&self, col: i64) -> Result<usize, GridError> {
        if !self.is_col_valid(col) {
            return Err(GridError::IndexOutOfBounds {
                axis: Axis::Col,
                index: col,
                bound: self.cols,
            });
        }
        Ok(normalize(col, self.cols))
    }

    /// Storage index of `(row, col)`. Every cell access goes through here.
    fn position(&self, row: i64, col: i64) -> Result<usize, GridError> {
        let row = self.sanitize_row(row)?;
        let col = self.sanitize_col(col)?;
        Ok(self.offset(row, col))
    }

    // === Single cells ===
    pub fn value_at(&self, row: i64, col: i64) -> Result<Option<&T>, GridError> {
        let pos = self.position(row, col)?;
        Ok(self.cells[pos].as_ref())
    }

    /// Like [`Grid::value_at`], but an invalid index reads as empty.
    pub fn value_at_or_empty(&self, row: i64, col: i64) -> Option<&T> {
        let pos = self.position(row, col).ok()?;
        self.cells[pos].as_ref()
    }

    pub fn is_empty(&self, row: i64, col: i64) -> Result<bool, GridError> {
        Ok(self.value_at(row, col)?.is_none())
    }

    pub fn insert(&mut self, value: T, row: i64, col: i64) -> Result<(), GridError> {
        let pos = self.position(row, col)?;
        self.cells[pos] = Some(value);
        Ok(())
    }

    // === Rows / cols ===
    pub fn get_row(&self, row: i64) -> Result<Vec<Option<&T>>, GridError> {
        let row = self.sanitize_row(row)?;
        let start = self.offset(row, 0);
        Ok(self.cells[start..start + self.cols]
            .iter()
            .map(Option::as_ref)
            .collect())
    }

    pub fn get_col(&self, col: i64) -> Result<Vec<Option<&T>>, GridError> {
        let col = self.sanitize_col(col)?;
        Ok(self.column(col))
    }

    pub fn get_rows(&self) -> Vec<Vec<Option<&T>>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(Option::as_ref).collect())
            .collect()
    }

    pub fn get_cols(&self) -> Vec<Vec<Option<&T>>> {
        (0..self.cols).map(|col| self.column(col)).collect()
    }

    fn column(&self, col: usize) -> Vec<Option<&T>> {
        (0..self.rows)
            .map(|row| self.cells[self.offset(row, col)].as_ref())
            .collect()
    }

    // === Neighbours ===

    /// Non-empty values of the 8 surrounding cells, in [`NEIGHBOUR_OFFSETS`]
    /// order. Probes that fall off a non-wrapping edge are skipped.
    pub fn get_neighbours(&self, row: i64, col: i64) -> Result<Vec<&T>, GridError> {
        // Probing around the folded position gives the same cells as probing
        // around the raw one, and cannot overflow near i64::MAX.
        let row = self.sanitize_row(row)? as i64;
        let col = self.sanitize_col(col)? as i64;
        Ok(NEIGHBOUR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| self.value_at_or_empty(row + dr, col + dc))
            .collect())
    }

    // === Flat views ===

    /// Row-major view of every cell.
    #[inline]
    pub fn cells(&self) -> &[Option<T>] {
        &self.cells
    }

    pub fn into_array(self) -> Vec<Option<T>> {
        self.cells
    }
}

impl<T: Clone> Grid<T> {
    pub fn fill(&mut self, value: T) {
        self.cells.fill(Some(value));
    }

    /// Row-major copy of every cell, empties included.
    pub fn to_array(&self) -> Vec<Option<T>> {
        self.cells.clone()
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(v) => write!(f, "{}", v)?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

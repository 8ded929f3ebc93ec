//! Conway's Game of Life (B3/S23) on a [`Grid`]. A live cell stores its age
//! in generations; an empty cell is dead. The board's wrap flags decide
//! whether the edges connect.

use crate::config::GridParams;
use crate::error::GridError;
use crate::grid::Grid;
use crate::rng::Rng;

pub type Age = u32;

/// Salt mixed into the user seed for initial board fills.
pub const SALT_BOARD: u64 = 0x5EED_B0A2D;

/// Random board where each cell is alive with probability `density`.
pub fn seed_board(params: &GridParams, density: f32, seed: u64) -> Result<Grid<Age>, GridError> {
    let mut board = params.build()?;
    let mut rng = Rng::new(seed, SALT_BOARD);
    for row in 0..board.rows() as i64 {
        for col in 0..board.cols() as i64 {
            if rng.chance(density) {
                board.insert(0, row, col)?;
            }
        }
    }
    log::debug!(
        "seeded {}x{} board, population {}",
        board.rows(),
        board.cols(),
        population(&board)
    );
    Ok(board)
}

/// Advance one generation. The next board keeps dimensions and wrap flags.
pub fn step(board: &Grid<Age>) -> Result<Grid<Age>, GridError> {
    let mut next = Grid::new(board.rows(), board.cols())?
        .with_wrap(board.wrap_rows(), board.wrap_cols());
    for row in 0..board.rows() as i64 {
        for col in 0..board.cols() as i64 {
            let alive = board.get_neighbours(row, col)?.len();
            match (board.value_at(row, col)?, alive) {
                (Some(&age), 2 | 3) => next.insert(age.saturating_add(1), row, col)?,
                (None, 3) => next.insert(0, row, col)?,
                _ => {}
            }
        }
    }
    Ok(next)
}

pub fn population(board: &Grid<Age>) -> usize {
    board.cells().iter().filter(|c| c.is_some()).count()
}

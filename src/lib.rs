pub mod config;
pub mod error;
pub mod grid;
pub mod life;
pub mod render;
pub mod rng;

use std::time::Instant;

pub use config::{GridParams, Params};
pub use error::{Axis, GridError};
pub use grid::Grid;

use life::Age;

pub struct Run {
    pub rows: usize,
    pub cols: usize,
    pub initial: Grid<Age>,
    pub board: Grid<Age>,
    pub population: usize,
    pub rgba: Vec<u8>,
}

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

pub fn simulate(params: &Params, seed: u64) -> Result<(Run, Vec<Timing>), GridError> {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    // 1. Seed
    let t = Instant::now();
    let initial = life::seed_board(&params.grid, params.density, seed)?;
    timings.push(Timing {
        name: "seed",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 2. Step
    let t = Instant::now();
    let mut board = initial.clone();
    for generation in 0..params.generations {
        board = life::step(&board)?;
        log::trace!("generation {}: population {}", generation + 1, life::population(&board));
    }
    timings.push(Timing {
        name: "generations",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 3. Render
    let t = Instant::now();
    let rgba = render::render_ages(&board);
    timings.push(Timing {
        name: "render",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    timings.push(Timing {
        name: "TOTAL",
        ms: total_start.elapsed().as_secs_f64() * 1000.0,
    });

    let run = Run {
        rows: board.rows(),
        cols: board.cols(),
        population: life::population(&board),
        initial,
        board,
        rgba,
    };

    Ok((run, timings))
}

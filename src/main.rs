use std::path::PathBuf;

use anyhow::Context;
use log::info;
use wrapgrid::Params;
use wrapgrid::render;

/// Boards at most this wide are also printed to stdout.
const PRINT_MAX_COLS: usize = 40;
/// Pixels per cell in the saved PNGs.
const CELL_PX: usize = 8;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let defaults = Params::default();

    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(42);
    let rows: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(64);
    let cols: usize = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(64);
    let generations: usize = args
        .get(4)
        .and_then(|s| s.parse().ok())
        .unwrap_or(defaults.generations);
    let out_dir: PathBuf = args
        .get(5)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("artifacts"));

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut params = defaults;
    params.grid.rows = Some(rows);
    params.grid.cols = Some(cols);
    params.generations = generations;

    info!(
        "Simulating {}x{} board with seed={}, density={}, generations={}",
        rows, cols, seed, params.density, params.generations
    );

    let (run, timings) = wrapgrid::simulate(&params, seed)?;

    info!("Timings:");
    for t in &timings {
        info!("  {:20} {:8.1} ms", t.name, t.ms);
    }
    info!("Final population: {}", run.population);

    let save = |name: &str, rgba: &[u8]| -> anyhow::Result<()> {
        let path = out_dir.join(name);
        let (pw, ph) = render::image_dims(run.cols, run.rows, CELL_PX).with_context(|| {
            format!("{}x{} board is too large for an image", run.rows, run.cols)
        })?;
        let big = render::upscale(rgba, run.cols, run.rows, CELL_PX);
        image::save_buffer(&path, &big, pw, ph, image::ColorType::Rgba8)
            .with_context(|| format!("failed to save {}", path.display()))?;
        info!("Saved {}", path.display());
        Ok(())
    };

    save("initial.png", &render::render_ages(&run.initial))?;
    save("final.png", &run.rgba)?;

    if run.cols <= PRINT_MAX_COLS {
        println!("{}", run.board);
    }

    Ok(())
}

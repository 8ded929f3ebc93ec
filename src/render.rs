use rayon::prelude::*;

use crate::grid::Grid;
use crate::life::Age;

const EMPTY: [u8; 4] = [10, 10, 10, 255];
const NEWBORN: [u8; 4] = [250, 240, 170, 255];
const MATURE: [u8; 4] = [90, 180, 110, 255];
const ANCIENT: [u8; 4] = [40, 70, 140, 255];

/// Ages at which the palette reaches `MATURE` and `ANCIENT`.
const MATURE_AGE: f32 = 8.0;
const ANCIENT_AGE: f32 = 64.0;

#[inline]
fn lerp_color(a: [u8; 4], b: [u8; 4], t: f32) -> [u8; 4] {
    let t = t.clamp(0.0, 1.0);
    [
        (a[0] as f32 + (b[0] as f32 - a[0] as f32) * t).round() as u8,
        (a[1] as f32 + (b[1] as f32 - a[1] as f32) * t).round() as u8,
        (a[2] as f32 + (b[2] as f32 - a[2] as f32) * t).round() as u8,
        255,
    ]
}

/// One RGBA pixel per cell, row-major. Empty cells get the background color.
pub fn render_cells<T, F>(grid: &Grid<T>, color: F) -> Vec<u8>
where
    T: Sync,
    F: Fn(&T) -> [u8; 4] + Sync,
{
    let cols = grid.cols();
    let mut rgba = vec![0u8; grid.size() * 4];

    rgba.par_chunks_mut(cols * 4)
        .zip(grid.cells().par_chunks(cols))
        .for_each(|(out, row)| {
            for (px, cell) in out.chunks_exact_mut(4).zip(row) {
                px.copy_from_slice(&cell.as_ref().map_or(EMPTY, &color));
            }
        });

    rgba
}

/// Life board colored by cell age.
pub fn render_ages(board: &Grid<Age>) -> Vec<u8> {
    render_cells(board, |&age| {
        let age = age as f32;
        if age < MATURE_AGE {
            lerp_color(NEWBORN, MATURE, age / MATURE_AGE)
        } else {
            lerp_color(MATURE, ANCIENT, (age - MATURE_AGE) / (ANCIENT_AGE - MATURE_AGE))
        }
    })
}

/// Pixel size of a `w`x`h` board drawn at `factor` px per cell, or `None` if
/// it does not fit an image dimension.
pub fn image_dims(w: usize, h: usize, factor: usize) -> Option<(u32, u32)> {
    let factor = factor.max(1);
    let pw = u32::try_from(w.checked_mul(factor)?).ok()?;
    let ph = u32::try_from(h.checked_mul(factor)?).ok()?;
    Some((pw, ph))
}

/// Nearest-neighbor enlargement so small boards stay visible.
pub fn upscale(rgba: &[u8], w: usize, h: usize, factor: usize) -> Vec<u8> {
    let factor = factor.max(1);
    let ow = w * factor;
    let mut out = vec![0u8; ow * h * factor * 4];

    out.par_chunks_mut(ow * 4)
        .enumerate()
        .for_each(|(oy, row)| {
            let y = oy / factor;
            for (ox, px) in row.chunks_exact_mut(4).enumerate() {
                let i = (y * w + ox / factor) * 4;
                px.copy_from_slice(&rgba[i..i + 4]);
            }
        });

    out
}

//! Twinkling pixel background.
//!
//! The viewport is split into a `CELL_SIZE` grid and each grid slot is
//! populated independently with probability `density`. Cells never move;
//! only their phase advances, which fades them in and out.

use super::color::{Rgba, PALETTE};
use super::constants::*;
use super::draw::DrawList;
use rand::Rng;
use std::f32::consts::PI;

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundCell {
    pub x: i32,
    pub y: i32,
    /// Phase in [0, 1).
    pub life: f32,
    /// Phase increment per frame.
    pub speed: f32,
    pub color: Rgba,
    pub size: f32,
}

impl BackgroundCell {
    #[inline]
    pub fn alpha(&self) -> f32 {
        cell_alpha(self.life)
    }
}

/// Smooth fade in/out over one phase period, peaking at `CELL_ALPHA_PEAK`.
#[inline]
pub fn cell_alpha(life: f32) -> f32 {
    let phase = life.clamp(0.0, 1.0);
    ((phase * PI).sin() * CELL_ALPHA_PEAK).clamp(0.0, CELL_ALPHA_PEAK)
}

/// Number of grid columns and rows covering a viewport.
#[inline]
pub fn grid_dims(width: u32, height: u32) -> (u32, u32) {
    let cols = (width as f32 / CELL_SIZE).ceil() as u32;
    let rows = (height as f32 / CELL_SIZE).ceil() as u32;
    (cols, rows)
}

/// Mean cell count produced by [`ParticleField::initialize`].
pub fn expected_cell_count(width: u32, height: u32, density: f64) -> f64 {
    let (cols, rows) = grid_dims(width, height);
    cols as f64 * rows as f64 * density
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    cells: Vec<BackgroundCell>,
    density: f64,
}

impl ParticleField {
    pub fn new(density: f64) -> Self {
        Self {
            cells: Vec::new(),
            density: density.clamp(0.0, 1.0),
        }
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn cells(&self) -> &[BackgroundCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Replace every cell with a fresh random population for the viewport.
    pub fn initialize<R: Rng + ?Sized>(&mut self, width: u32, height: u32, rng: &mut R) {
        let (cols, rows) = grid_dims(width, height);
        self.cells.clear();
        for r in 0..rows {
            for c in 0..cols {
                if !rng.gen_bool(self.density) {
                    continue;
                }
                self.cells.push(BackgroundCell {
                    x: (c as f32 * CELL_SIZE) as i32,
                    y: (r as f32 * CELL_SIZE) as i32,
                    life: rng.gen::<f32>(),
                    speed: CELL_SPEED_MIN + rng.gen::<f32>() * CELL_SPEED_SPAN,
                    color: PALETTE[rng.gen_range(0..PALETTE.len())],
                    size: if rng.gen_bool(0.5) {
                        CELL_SIZES[0]
                    } else {
                        CELL_SIZES[1]
                    },
                });
            }
        }
        log::debug!(
            "[field] {}x{} grid -> {} cells (density {})",
            cols,
            rows,
            self.cells.len(),
            self.density
        );
    }

    /// Step every cell's phase by its speed, wrapping at 1.
    pub fn advance(&mut self) {
        for cell in &mut self.cells {
            cell.life = (cell.life + cell.speed).rem_euclid(1.0);
        }
    }

    /// Full clear and redraw of every cell.
    pub fn render(&self, list: &mut DrawList) {
        list.clear_surface();
        for cell in &self.cells {
            list.rect(
                cell.x as f32,
                cell.y as f32,
                cell.size,
                cell.size,
                cell.color,
                cell.alpha(),
            );
        }
    }
}

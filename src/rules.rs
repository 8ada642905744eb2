//! Rule engine for Conway's Game of Life on a toroidal grid
//!
//! Neighbor lookup wraps on both axes: the column left of `x = 0` is
//! `x = size - 1`, and likewise for rows. The grid itself never wraps;
//! this module is the only place wrap-around arithmetic happens.

pub mod patterns;

use crate::grid::Grid;

/// Game of Life standard rules:
/// 1. Any live cell with fewer than two live neighbors dies (underpopulation)
/// 2. Any live cell with two or three live neighbors lives (survival)
/// 3. Any live cell with more than three live neighbors dies (overpopulation)
/// 4. Any dead cell with exactly three live neighbors becomes alive (reproduction)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    /// Minimum neighbors for a live cell to survive
    pub survival_min: u32,
    /// Maximum neighbors for a live cell to survive
    pub survival_max: u32,
    /// Number of neighbors for a dead cell to become alive
    pub birth_count: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        // B3/S23
        Self {
            survival_min: 2,
            survival_max: 3,
            birth_count: 3,
        }
    }
}

impl GameRules {
    pub fn next_state(&self, alive: bool, neighbors: u32) -> bool {
        if alive {
            (self.survival_min..=self.survival_max).contains(&neighbors)
        } else {
            neighbors == self.birth_count
        }
    }
}

/// Count live cells among the 8 toroidally adjacent positions of `(x, y)`
/// in a row-major `size * size` buffer.
pub fn count_neighbors(cells: &[bool], size: usize, x: usize, y: usize) -> u32 {
    let mut count = 0;

    for dy in 0..3 {
        for dx in 0..3 {
            // Skip the cell itself
            if dx == 1 && dy == 1 {
                continue;
            }

            // (x + dx - 1 + size) mod size, kept unsigned
            let nx = (x + size + dx - 1) % size;
            let ny = (y + size + dy - 1) % size;

            if cells[ny * size + nx] {
                count += 1;
            }
        }
    }

    count
}

/// Neighbor count of `(x, y)` in the grid's current generation.
pub fn live_neighbors(grid: &Grid, x: usize, y: usize) -> u32 {
    let size = grid.size();
    assert!(x < size && y < size, "cell ({x}, {y}) is outside the {size}x{size} grid");
    count_neighbors(grid.cells(), size, x, y)
}

/// Advance `grid` by exactly one generation.
pub fn step(grid: &mut Grid, rules: &GameRules) {
    {
        let mut frame = grid.begin_step();
        let size = frame.size();
        for y in 0..size {
            for x in 0..size {
                let neighbors = count_neighbors(frame.snapshot(), size, x, y);
                let alive = rules.next_state(frame.was_alive(x, y), neighbors);
                frame.set_next(x, y, alive);
            }
        }
    }
    grid.commit_step();
    log::trace!("advanced to generation {}", grid.generation());
}

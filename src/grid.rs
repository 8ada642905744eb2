//! Cell storage for the simulation.
//!
//! The grid keeps two named buffers. `current` is the authoritative
//! generation that the controller edits and the renderer reads. `working`
//! is the frozen snapshot the rule engine reads from while it writes the
//! next generation into `current`.

use rand::Rng;

use crate::rules::patterns::Pattern;

pub struct Grid {
    size: usize,
    current: Vec<bool>,
    working: Vec<bool>,
    generation: u64,
}

impl Grid {
    /// Square grid of `size * size` dead cells at generation 0.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be non-zero");
        Self {
            size,
            current: vec![false; size * size],
            working: vec![false; size * size],
            generation: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // Row-major, same layout the GPU cell buffer uses.
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.size && y < self.size,
            "cell ({x}, {y}) is outside the {size}x{size} grid",
            size = self.size
        );
        y * self.size + x
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.current[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index(x, y);
        self.current[idx] = alive;
    }

    /// Flips the cell and returns its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let idx = self.index(x, y);
        self.current[idx] = !self.current[idx];
        self.current[idx]
    }

    /// Overwrites every cell: alive with probability `density`, dead otherwise.
    pub fn randomize<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        for cell in &mut self.current {
            *cell = rng.random_bool(density);
        }
    }

    pub fn clear(&mut self) {
        self.current.fill(false);
    }

    pub fn alive_count(&self) -> usize {
        self.current.iter().filter(|&&alive| alive).count()
    }

    /// Row-major view of the current generation.
    pub fn cells(&self) -> &[bool] {
        &self.current
    }

    /// Marks the cells of `pattern` anchored at `(x, y)`. Cells falling
    /// off the edge are dropped, not wrapped.
    pub fn place_pattern(&mut self, pattern: &Pattern, x: usize, y: usize) {
        for (dx, dy) in pattern.offsets() {
            let (cx, cy) = (x + dx, y + dy);
            if cx < self.size && cy < self.size {
                self.set(cx, cy, true);
            }
        }
    }

    /// Copies `current` into `working` and hands out the pair for one
    /// generation update. Reads go to the snapshot, writes to `current`.
    pub fn begin_step(&mut self) -> StepFrame<'_> {
        self.working.copy_from_slice(&self.current);
        StepFrame {
            size: self.size,
            snapshot: &self.working,
            next: &mut self.current,
        }
    }

    /// Closes a step opened with [`Grid::begin_step`].
    pub fn commit_step(&mut self) {
        self.generation += 1;
    }
}

/// Borrowed buffers for a single generation update.
pub struct StepFrame<'a> {
    size: usize,
    snapshot: &'a [bool],
    next: &'a mut [bool],
}

impl StepFrame<'_> {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn snapshot(&self) -> &[bool] {
        self.snapshot
    }

    pub fn was_alive(&self, x: usize, y: usize) -> bool {
        self.snapshot[y * self.size + x]
    }

    pub fn set_next(&mut self, x: usize, y: usize, alive: bool) {
        self.next[y * self.size + x] = alive;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(40);
        assert_eq!(grid.size(), 40);
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.alive_count(), 0);
        assert!(grid.cells().iter().all(|&c| !c));
    }

    #[test]
    fn set_is_visible_to_get() {
        let mut grid = Grid::new(40);
        grid.set(3, 7, true);
        assert!(grid.get(3, 7));
        assert!(!grid.get(7, 3));
        grid.set(3, 7, false);
        assert!(!grid.get(3, 7));
    }

    #[test]
    fn toggle_twice_restores() {
        let mut grid = Grid::new(40);
        assert!(grid.toggle(5, 5));
        assert!(!grid.toggle(5, 5));
        assert!(!grid.get(5, 5));

        grid.set(9, 9, true);
        grid.toggle(9, 9);
        grid.toggle(9, 9);
        assert!(grid.get(9, 9));
    }

    #[test]
    #[should_panic(expected = "outside the 40x40 grid")]
    fn out_of_range_get_panics() {
        let grid = Grid::new(40);
        grid.get(40, 0);
    }

    #[test]
    #[should_panic(expected = "outside the 40x40 grid")]
    fn out_of_range_set_panics() {
        let mut grid = Grid::new(40);
        grid.set(0, 40, true);
    }

    #[test]
    fn randomize_matches_density() {
        let mut grid = Grid::new(40);
        let mut rng = StdRng::seed_from_u64(7);
        grid.randomize(0.2, &mut rng);
        let alive = grid.alive_count();
        assert!((100..=400).contains(&alive), "alive = {alive}");
    }

    #[test]
    fn randomize_overwrites_existing_cells() {
        let mut grid = Grid::new(40);
        for x in 0..40 {
            for y in 0..40 {
                grid.set(x, y, true);
            }
        }
        let mut rng = StdRng::seed_from_u64(1);
        grid.randomize(0.0, &mut rng);
        assert_eq!(grid.alive_count(), 0);

        grid.randomize(1.0, &mut rng);
        assert_eq!(grid.alive_count(), 1600);
    }

    #[test]
    fn step_frame_reads_snapshot_not_writes() {
        let mut grid = Grid::new(4);
        grid.set(1, 1, true);
        {
            let mut frame = grid.begin_step();
            frame.set_next(1, 1, false);
            frame.set_next(2, 2, true);
            assert!(frame.was_alive(1, 1));
            assert!(!frame.was_alive(2, 2));
        }
        grid.commit_step();
        assert!(!grid.get(1, 1));
        assert!(grid.get(2, 2));
        assert_eq!(grid.generation(), 1);
    }

    #[test]
    fn place_pattern_drops_cells_off_edge() {
        let mut grid = Grid::new(4);
        grid.place_pattern(&Pattern::Block, 3, 3);
        assert_eq!(grid.alive_count(), 1);
        assert!(grid.get(3, 3));
    }
}

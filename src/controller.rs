//! Interaction controller: the editing/running state machine that turns
//! pointer clicks into grid edits, seeding, and the start command.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SimConfig;
use crate::grid::Grid;
use crate::rules::{self, GameRules};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Editing,
    Running,
}

/// What a click did. Returned so the shell can log and redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Start button: mode is now `Running` and one generation was taken.
    Started,
    /// Random button: grid reseeded, mode is now `Running`, no generation taken.
    Seeded { alive: usize },
    /// A grid cell was flipped.
    Toggled { x: usize, y: usize, alive: bool },
    /// Running, or outside the surface.
    Ignored,
}

/// The grid plus the mode flag. Owned by a single driver that delivers
/// both clicks and ticks, so the two never interleave.
pub struct Simulation {
    grid: Grid,
    mode: Mode,
    rules: GameRules,
    config: SimConfig,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Deterministic seeding for the Random button.
    pub fn with_seed(config: SimConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SimConfig, rng: StdRng) -> Self {
        Self {
            grid: Grid::new(config.grid_size),
            mode: Mode::Editing,
            rules: GameRules::default(),
            config,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for scripted setups; clicks are the interactive path.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn generation(&self) -> u64 {
        self.grid.generation()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Handle a click at logical surface pixel `(px, py)`.
    pub fn click(&mut self, px: u32, py: u32) -> ClickOutcome {
        if self.mode == Mode::Running {
            return ClickOutcome::Ignored;
        }

        if self.config.start_button.contains(px, py) {
            self.mode = Mode::Running;
            rules::step(&mut self.grid, &self.rules);
            log::info!("simulation started, generation {}", self.grid.generation());
            return ClickOutcome::Started;
        }

        if self.config.random_button.contains(px, py) {
            self.grid.randomize(self.config.seed_density, &mut self.rng);
            self.mode = Mode::Running;
            let alive = self.grid.alive_count();
            log::info!("seeded {} live cells, simulation started", alive);
            return ClickOutcome::Seeded { alive };
        }

        let cell = self.config.cell_size;
        let (x, y) = ((px / cell) as usize, (py / cell) as usize);
        if x >= self.grid.size() || y >= self.grid.size() {
            log::debug!("click at ({}, {}) is outside the grid", px, py);
            return ClickOutcome::Ignored;
        }
        let alive = self.grid.toggle(x, y);
        ClickOutcome::Toggled { x, y, alive }
    }

    /// Timer callback. Advances one generation while running; returns
    /// whether a step was taken.
    pub fn tick(&mut self) -> bool {
        match self.mode {
            Mode::Running => {
                rules::step(&mut self.grid, &self.rules);
                true
            }
            Mode::Editing => false,
        }
    }
}

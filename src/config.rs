use std::time::Duration;

// Constants
pub const GRID_SIZE: usize = 40;
pub const CELL_SIZE: u32 = 20; // pixels per cell edge, logical
pub const STEP_INTERVAL: Duration = Duration::from_millis(200);
pub const SEED_DENSITY: f64 = 0.2; // one cell in five
pub const WINDOW_TITLE: &str = "Conway's Game of Life";

pub const START_BUTTON: PixelRect = PixelRect::new(15, 40, 57, 20);
pub const RANDOM_BUTTON: PixelRect = PixelRect::new(87, 40, 87, 20);

/// Axis-aligned rectangle in logical surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Hit test with every edge excluded, so a click on the border misses.
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px > self.x && px < self.right() && py > self.y && py < self.bottom()
    }

    pub fn intersects(&self, other: &PixelRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Everything the simulator and its shell need to agree on.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub grid_size: usize,
    pub cell_size: u32,
    pub step_interval: Duration,
    pub seed_density: f64,
    pub start_button: PixelRect,
    pub random_button: PixelRect,
    pub window_title: &'static str,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            cell_size: CELL_SIZE,
            step_interval: STEP_INTERVAL,
            seed_density: SEED_DENSITY,
            start_button: START_BUTTON,
            random_button: RANDOM_BUTTON,
            window_title: WINDOW_TITLE,
        }
    }
}

impl SimConfig {
    /// Edge length of the square drawing surface in logical pixels.
    pub fn surface_size(&self) -> u32 {
        self.grid_size as u32 * self.cell_size
    }
}

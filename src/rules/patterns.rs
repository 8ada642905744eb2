/// Predefined patterns for seeding the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A small stationary pattern
    Block,
    /// A period-2 oscillator, laid out horizontally
    Blinker,
    /// A period-2 oscillator
    Toad,
    /// A diagonal spaceship heading towards +x, +y
    Glider,
    /// A horizontal spaceship
    LightweightSpaceship,
}

impl Pattern {
    /// Cell offsets relative to the pattern's top-left anchor.
    pub fn offsets(&self) -> Vec<(usize, usize)> {
        match self {
            Pattern::Block => vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
            Pattern::Blinker => vec![
                (0, 0), (1, 0), (2, 0),
            ],
            Pattern::Toad => vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
            Pattern::Glider => vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
            Pattern::LightweightSpaceship => vec![
                (0, 1), (0, 3),
                (1, 0),
                (2, 0),
                (3, 0), (3, 3),
                (4, 0), (4, 1), (4, 2),
            ],
        }
    }
}

use rand::rngs::StdRng;

use super::grid_map::GridMap;
use super::position::Position;

/// The buried treasure. Its position never changes once placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Treasure {
    position: Position,
}

impl Treasure {
    pub fn new(position: Position) -> Self {
        Treasure { position }
    }

    /// Bury the treasure on a random open cell other than `reserved`.
    pub fn bury(map: &GridMap, reserved: Position, rng: &mut StdRng) -> Self {
        Treasure {
            position: map.random_open_cell(reserved, rng),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_at(&self, pos: Position) -> bool {
        self.position == pos
    }
}

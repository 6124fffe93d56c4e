use rand::rngs::StdRng;

use super::grid_map::GridMap;
use super::position::Position;
use crate::services::strategy::MovementStrategy;

/// A pirate ship. It only moves when the player's new position is pushed to it.
#[derive(Debug, Clone)]
pub struct PirateShip {
    position: Position,
    target: Position,
    strategy: MovementStrategy,
}

impl PirateShip {
    /// A new pirate initially targets its own cell.
    pub fn new(position: Position, strategy: MovementStrategy) -> Self {
        PirateShip {
            position,
            target: position,
            strategy,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn target(&self) -> Position {
        self.target
    }

    pub fn strategy(&self) -> &MovementStrategy {
        &self.strategy
    }

    pub fn set_strategy(&mut self, strategy: MovementStrategy) {
        self.strategy = strategy;
    }

    /// Record the player's new position and run the strategy once.
    pub fn retarget(&mut self, player: Position, map: &GridMap, rng: &mut StdRng) {
        self.target = player;
        self.position = self
            .strategy
            .next_position(self.position, self.target, map, rng);
    }
}

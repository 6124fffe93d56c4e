//! Pirate movement strategies
//!
//! A pirate's strategy decides its next cell from its own position, the
//! player's last known position and the grid. Both variants only ever return
//! a passable cell or the current one.

mod chase;
mod patrol;

use rand::rngs::StdRng;

use crate::models::grid_map::GridMap;
use crate::models::position::Position;

pub use chase::chase_step;
pub use patrol::PatrolStrategy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovementStrategy {
    /// Shadow the player inside the chase distance band.
    Chase,
    /// Random cardinal step every few calls.
    Patrol(PatrolStrategy),
}

impl MovementStrategy {
    pub fn patrol() -> Self {
        MovementStrategy::Patrol(PatrolStrategy::new())
    }

    /// Fleet composition: even slots chase, odd slots patrol.
    pub fn for_fleet_index(index: usize) -> Self {
        if index % 2 == 0 {
            MovementStrategy::Chase
        } else {
            MovementStrategy::patrol()
        }
    }

    pub fn next_position(
        &mut self,
        current: Position,
        target: Position,
        map: &GridMap,
        rng: &mut StdRng,
    ) -> Position {
        match self {
            MovementStrategy::Chase => chase_step(current, target, map),
            MovementStrategy::Patrol(patrol) => patrol.next_position(current, map, rng),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MovementStrategy::Chase => "chase",
            MovementStrategy::Patrol(_) => "patrol",
        }
    }
}

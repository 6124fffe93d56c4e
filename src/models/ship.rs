use super::grid_map::GridMap;
use super::navigation_types::Direction;
use super::position::Position;

/// The player's ship.
#[derive(Debug, Clone)]
pub struct Ship {
    position: Position,
    dimension: i32,
}

impl Ship {
    pub fn new(position: Position, dimension: i32) -> Self {
        Ship {
            position,
            dimension,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Put the ship on `position` without validation (respawn).
    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    /// Move one cell in `direction` if the target is on the grid and not an island.
    /// Returns the new position on success; the caller forwards it to the pirates.
    pub fn go(&mut self, direction: Direction, map: &GridMap) -> Option<Position> {
        let candidate = self.position.step(direction);
        let on_grid = candidate.x >= 0
            && candidate.x < self.dimension
            && candidate.y >= 0
            && candidate.y < self.dimension;
        if !on_grid || map.is_island(candidate.x, candidate.y) {
            return None;
        }
        self.position = candidate;
        Some(candidate)
    }

    pub fn go_north(&mut self, map: &GridMap) -> Option<Position> {
        self.go(Direction::North, map)
    }

    pub fn go_south(&mut self, map: &GridMap) -> Option<Position> {
        self.go(Direction::South, map)
    }

    pub fn go_east(&mut self, map: &GridMap) -> Option<Position> {
        self.go(Direction::East, map)
    }

    pub fn go_west(&mut self, map: &GridMap) -> Option<Position> {
        self.go(Direction::West, map)
    }
}

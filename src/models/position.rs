use serde::Serialize;

use super::navigation_types::Direction;

/// A cell on the ocean grid.
/// (0,0) is upper-left. X increases left-to-right, Y increases top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Euclidean distance between two cells.
    pub fn distance_to(&self, other: Position) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Position {
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighbouring cell one step in `direction`. Not bounds-checked.
    pub fn step(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    /// Clamp into the inclusive rectangle `min..=max`, coordinate by coordinate.
    pub fn clamped(&self, min: Position, max: Position) -> Position {
        Position {
            x: self.x.clamp(min.x, max.x),
            y: self.y.clamp(min.y, max.y),
        }
    }
}

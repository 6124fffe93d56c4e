use rand::rngs::StdRng;
use rand::Rng;

use super::errors::{GameError, GameResult};
use super::position::Position;

/// Island occupancy for a square ocean grid.
/// Each session owns its own map; nothing here is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    dimension: i32,
    /// Internal indexing: islands[y][x].
    islands: Vec<Vec<bool>>,
}

impl GridMap {
    /// An all-ocean grid of `dimension` x `dimension` cells.
    pub fn new(dimension: i32) -> Self {
        let size = dimension.max(0) as usize;
        GridMap {
            dimension,
            islands: vec![vec![false; size]; size],
        }
    }

    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.dimension && y >= 0 && y < self.dimension
    }

    /// Out-of-bounds cells are never islands; callers bounds-check separately.
    pub fn is_island(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.islands[y as usize][x as usize]
    }

    /// A cell any entity may move onto: inside the grid and open ocean.
    pub fn is_passable(&self, pos: Position) -> bool {
        self.in_bounds(pos.x, pos.y) && !self.is_island(pos.x, pos.y)
    }

    /// Mark a single cell as island. Out-of-bounds positions are ignored.
    pub fn set_island(&mut self, pos: Position) {
        if self.in_bounds(pos.x, pos.y) {
            self.islands[pos.y as usize][pos.x as usize] = true;
        }
    }

    pub fn island_count(&self) -> usize {
        self.islands.iter().flatten().filter(|&&island| island).count()
    }

    /// Scatter exactly `count` new islands on random open cells, never on `reserved`.
    ///
    /// Sampling retries until a free cell comes up, so the request is checked
    /// against the number of free cells first; with that guaranteed the loop
    /// terminates with probability 1.
    pub fn place_islands(
        &mut self,
        count: usize,
        reserved: Position,
        rng: &mut StdRng,
    ) -> GameResult<()> {
        let total = (self.dimension.max(0) as usize).pow(2);
        let reserved_free = self.is_passable(reserved) as usize;
        let available = total - self.island_count() - reserved_free;
        if count > available {
            return Err(GameError::IslandCapacity {
                requested: count,
                available,
            });
        }

        let mut placed = 0;
        while placed < count {
            let pos = Position {
                x: rng.gen_range(0..self.dimension),
                y: rng.gen_range(0..self.dimension),
            };
            if pos != reserved && !self.is_island(pos.x, pos.y) {
                self.set_island(pos);
                placed += 1;
            }
        }
        Ok(())
    }

    /// Return every cell to open ocean.
    pub fn reset(&mut self) {
        for row in self.islands.iter_mut() {
            row.fill(false);
        }
    }

    /// Pick a random open cell other than `reserved`.
    /// The caller guarantees at least one such cell exists.
    pub fn random_open_cell(&self, reserved: Position, rng: &mut StdRng) -> Position {
        loop {
            let pos = Position {
                x: rng.gen_range(0..self.dimension),
                y: rng.gen_range(0..self.dimension),
            };
            if pos != reserved && self.is_passable(pos) {
                return pos;
            }
        }
    }
}

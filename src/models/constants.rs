use super::position::Position;

pub const GRID_DIMENSION: i32 = 20;

/// Where the player starts and respawns after losing a life.
pub const RESPAWN_POSITION: Position = Position { x: 1, y: 1 };

pub const TICK_REWARD: u32 = 10;
pub const COLLISION_PENALTY: u32 = 100;
pub const TREASURE_REWARD: u32 = 1000;

/// Ship-to-treasure distance at which the monsters-active flag is raised.
pub const MONSTER_ACTIVATION_DISTANCE: f64 = 10.0;

/// Chase pirates try to stay between these two distances from the player.
pub const CHASE_BAND_MIN: f64 = 2.0;
pub const CHASE_BAND_MAX: f64 = 3.5;
/// Station-keeping only considers an axis while its delta is below this.
pub const CHASE_PERPENDICULAR_LIMIT: i32 = 5;

/// Patrol pirates act on every Nth call only.
pub const PATROL_INTERVAL: u32 = 5;

pub const DEFAULT_DETECTION_RANGE: i32 = 5;
pub const MONSTER_PATROL_ATTEMPTS: usize = 4;

pub const SHIP_NAME: &str = "Columbus";

/// Grid markers used by the snapshot and the terminal renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContent {
    Empty,
    Island,
    Treasure,
    Ship,
    Pirate,
    Monster,
}

impl CellContent {
    /// Wire marker consumed by the web client.
    pub fn marker(&self) -> &'static str {
        match self {
            CellContent::Empty => "",
            CellContent::Island => "W",
            CellContent::Treasure => "T",
            CellContent::Ship => "S",
            CellContent::Pirate => "P",
            CellContent::Monster => "M",
        }
    }

    /// Three-character cell used by the terminal renderer.
    pub fn symbol(&self) -> &'static str {
        match self {
            CellContent::Empty => " . ",
            CellContent::Island => "###",
            CellContent::Treasure => " $ ",
            CellContent::Ship => "<S>",
            CellContent::Pirate => "+P+",
            CellContent::Monster => "~M~",
        }
    }
}

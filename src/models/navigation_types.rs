//! Type-safe wrappers for navigation values

use std::fmt;
use std::str::FromStr;

use super::errors::GameError;

/// Cardinal heading for a single grid step.
///
/// The grid is drawn with north at the top:
/// - North = y - 1
/// - South = y + 1
/// - East = x + 1
/// - West = x - 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Parse a player command keyword
    ///
    /// # Arguments
    /// * `keyword` - `up`/`north`/`n`, `down`/`south`/`s`, `right`/`east`/`e`
    ///   or `left`/`west`/`w`, in any case
    ///
    /// # Returns
    /// `None` for anything else; unknown input is not an error
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "up" | "north" | "n" => Some(Direction::North),
            "down" | "south" | "s" => Some(Direction::South),
            "right" | "east" | "e" => Some(Direction::East),
            "left" | "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }

    /// Unit step as (delta_x, delta_y)
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
        }
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::parse(s)
            .ok_or_else(|| GameError::InvalidInput(format!("unknown direction '{}'", s.trim())))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_all_aliases() {
        assert_eq!(Direction::parse("up"), Some(Direction::North));
        assert_eq!(Direction::parse("NORTH"), Some(Direction::North));
        assert_eq!(Direction::parse("Down"), Some(Direction::South));
        assert_eq!(Direction::parse("south"), Some(Direction::South));
        assert_eq!(Direction::parse("right"), Some(Direction::East));
        assert_eq!(Direction::parse(" e "), Some(Direction::East));
        assert_eq!(Direction::parse("left"), Some(Direction::West));
        assert_eq!(Direction::parse("WEST"), Some(Direction::West));
    }

    #[test]
    fn parse_rejects_unknown_keywords() {
        assert_eq!(Direction::parse(""), None);
        assert_eq!(Direction::parse("northeast"), None);
        assert_eq!(Direction::parse("jump"), None);
    }

    #[test]
    fn from_str_reports_invalid_input() {
        assert_eq!("n".parse::<Direction>().unwrap(), Direction::North);
        let err = "jump".parse::<Direction>().unwrap_err();
        assert!(matches!(err, GameError::InvalidInput(ref msg) if msg.contains("jump")));
    }

    #[test]
    fn deltas_are_unit_steps() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{} is not a unit step", direction);
        }
    }
}

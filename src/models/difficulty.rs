use std::fmt;

use serde::Serialize;

use super::loadout::ShipUpgrade;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Survival,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Survival,
    ];

    /// Case-insensitive keyword lookup. Unknown keywords fall back to Easy.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.trim().to_ascii_uppercase().as_str() {
            "MEDIUM" => Difficulty::Medium,
            "HARD" => Difficulty::Hard,
            "SURVIVAL" => Difficulty::Survival,
            _ => Difficulty::Easy,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
            Difficulty::Survival => "SURVIVAL",
        }
    }

    pub fn level(&self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Survival => 4,
        }
    }

    pub fn lives(&self) -> i32 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 4,
            Difficulty::Hard => 3,
            Difficulty::Survival => 2,
        }
    }

    /// One pirate per level.
    pub fn pirate_count(&self) -> usize {
        self.level() as usize
    }

    pub fn monster_count(&self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium | Difficulty::Hard | Difficulty::Survival => 2,
        }
    }

    pub fn island_count(&self) -> usize {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 12,
            Difficulty::Hard | Difficulty::Survival => 14,
        }
    }

    pub fn starting_upgrades(&self) -> &'static [ShipUpgrade] {
        match self {
            Difficulty::Easy | Difficulty::Medium => &[ShipUpgrade::Shield],
            Difficulty::Hard | Difficulty::Survival => &[],
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

//! Ship capability upgrades
//!
//! The player's ship is a base hull plus an ordered list of upgrades. Each
//! upgrade adds a fixed armor and protection bonus and appends a fragment to
//! the ship description, so the order of application shows up in the text.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipUpgrade {
    Shield,
    ArmorPlating,
    Regeneration,
    SpeedBoost,
}

impl ShipUpgrade {
    pub fn armor_bonus(&self) -> i32 {
        match self {
            ShipUpgrade::Shield => 5,
            ShipUpgrade::ArmorPlating => 10,
            ShipUpgrade::Regeneration => 0,
            ShipUpgrade::SpeedBoost => 2,
        }
    }

    pub fn protection_bonus(&self) -> i32 {
        match self {
            ShipUpgrade::Shield => 3,
            ShipUpgrade::ArmorPlating => 5,
            ShipUpgrade::Regeneration => 2,
            ShipUpgrade::SpeedBoost => 1,
        }
    }

    pub fn healing_power(&self) -> i32 {
        match self {
            ShipUpgrade::Regeneration => 1,
            _ => 0,
        }
    }

    pub fn description_fragment(&self) -> &'static str {
        match self {
            ShipUpgrade::Shield => " + Shield",
            ShipUpgrade::ArmorPlating => " + Heavy Armor",
            ShipUpgrade::Regeneration => " + Regeneration",
            ShipUpgrade::SpeedBoost => " + Speed Boost",
        }
    }
}

/// Base ship and the upgrades applied to it, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipLoadout {
    name: String,
    upgrades: Vec<ShipUpgrade>,
}

impl ShipLoadout {
    /// A bare hull: no armor, no protection, no shield.
    pub fn new(name: impl Into<String>) -> Self {
        ShipLoadout {
            name: name.into(),
            upgrades: Vec::new(),
        }
    }

    /// Apply one more upgrade on top of the existing ones.
    pub fn with(mut self, upgrade: ShipUpgrade) -> Self {
        self.upgrades.push(upgrade);
        self
    }

    pub fn upgrades(&self) -> &[ShipUpgrade] {
        &self.upgrades
    }

    pub fn armor(&self) -> i32 {
        self.upgrades.iter().map(ShipUpgrade::armor_bonus).sum()
    }

    pub fn protection_level(&self) -> i32 {
        self.upgrades.iter().map(ShipUpgrade::protection_bonus).sum()
    }

    pub fn healing_power(&self) -> i32 {
        self.upgrades.iter().map(ShipUpgrade::healing_power).sum()
    }

    pub fn has_shield(&self) -> bool {
        self.upgrades.contains(&ShipUpgrade::Shield)
    }

    pub fn description(&self) -> String {
        self.upgrades
            .iter()
            .fold(self.name.clone(), |mut text, upgrade| {
                text.push_str(upgrade.description_fragment());
                text
            })
    }

    pub fn stats(&self) -> ShipStats {
        ShipStats {
            description: self.description(),
            armor: self.armor(),
            protection: self.protection_level(),
            shield: self.has_shield(),
        }
    }
}

/// Flattened loadout figures for display and snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShipStats {
    pub description: String,
    pub armor: i32,
    pub protection: i32,
    pub shield: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hull_has_no_bonuses() {
        let ship = ShipLoadout::new("Columbus");
        assert_eq!(ship.armor(), 0);
        assert_eq!(ship.protection_level(), 0);
        assert!(!ship.has_shield());
        assert_eq!(ship.description(), "Columbus");
    }

    #[test]
    fn shield_then_armor_stacks_bonuses_in_order() {
        let ship = ShipLoadout::new("Columbus")
            .with(ShipUpgrade::Shield)
            .with(ShipUpgrade::ArmorPlating);
        assert_eq!(ship.armor(), 15);
        assert_eq!(ship.protection_level(), 8);
        assert!(ship.has_shield());
        assert_eq!(ship.description(), "Columbus + Shield + Heavy Armor");
    }

    #[test]
    fn order_changes_description_not_totals() {
        let a = ShipLoadout::new("Columbus")
            .with(ShipUpgrade::SpeedBoost)
            .with(ShipUpgrade::Regeneration);
        let b = ShipLoadout::new("Columbus")
            .with(ShipUpgrade::Regeneration)
            .with(ShipUpgrade::SpeedBoost);
        assert_eq!(a.armor(), b.armor());
        assert_eq!(a.protection_level(), 3);
        assert_ne!(a.description(), b.description());
        assert_eq!(a.healing_power(), 1);
        assert!(!a.has_shield());
    }

    #[test]
    fn stats_mirror_the_loadout() {
        let stats = ShipLoadout::new("Columbus").with(ShipUpgrade::Shield).stats();
        assert_eq!(
            stats,
            ShipStats {
                description: "Columbus + Shield".to_string(),
                armor: 5,
                protection: 3,
                shield: true,
            }
        );
    }
}

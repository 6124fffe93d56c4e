//! Ocean model
//!
//! One play session's world: the island grid, the player's ship, the
//! treasure, the pirate fleet and the monsters. Every session builds its own
//! ocean, so nothing here is shared between games.

mod generation;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use tracing::debug;

use super::constants::{GRID_DIMENSION, RESPAWN_POSITION};
use super::difficulty::Difficulty;
use super::errors::{GameError, GameResult};
use super::grid_map::GridMap;
use super::monster::OceanEntity;
use super::navigation_types::Direction;
use super::pirate::PirateShip;
use super::position::Position;
use super::ship::Ship;
use super::treasure::Treasure;
use crate::services::monster_ai::advance_entity;

use generation::{bury_treasure, generate_map, spawn_monsters, spawn_pirates};

/// Sizes used to populate a fresh ocean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OceanConfig {
    pub dimension: i32,
    pub island_count: usize,
    pub pirate_count: usize,
    pub monster_count: usize,
}

impl OceanConfig {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        OceanConfig {
            dimension: GRID_DIMENSION,
            island_count: difficulty.island_count(),
            pirate_count: difficulty.pirate_count(),
            monster_count: difficulty.monster_count(),
        }
    }
}

pub struct Ocean {
    map: GridMap,
    ship: Ship,
    treasure: Treasure,
    pirates: Vec<PirateShip>,
    /// Monsters and monster groups, in registration order.
    entities: Vec<OceanEntity>,
    rng: StdRng,
}

impl Ocean {
    /// Generate a populated ocean from `config`.
    ///
    /// # Errors
    ///
    /// `IslandCapacity` when the grid cannot hold the requested islands plus
    /// the open spawn and treasure cells.
    pub fn generate(config: &OceanConfig, seed: u64) -> GameResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let map = generate_map(config.dimension, config.island_count, RESPAWN_POSITION, &mut rng)?;
        let treasure = bury_treasure(&map, RESPAWN_POSITION, &mut rng);
        let pirates = spawn_pirates(config.pirate_count, config.dimension);
        let entities = spawn_monsters(config.monster_count, treasure.position(), config.dimension);

        debug!(
            seed,
            islands = map.island_count(),
            treasure_x = treasure.position().x,
            treasure_y = treasure.position().y,
            "ocean generated"
        );

        Ok(Ocean {
            ship: Ship::new(RESPAWN_POSITION, config.dimension),
            map,
            treasure,
            pirates,
            entities,
            rng,
        })
    }

    /// A hand-built ocean with no pirates or monsters yet.
    pub fn with_layout(map: GridMap, ship: Position, treasure: Position, seed: u64) -> Self {
        Ocean {
            ship: Ship::new(ship, map.dimension()),
            map,
            treasure: Treasure::new(treasure),
            pirates: Vec::new(),
            entities: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    // ========== Accessor Methods ==========

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn ship_position(&self) -> Position {
        self.ship.position()
    }

    pub fn treasure(&self) -> &Treasure {
        &self.treasure
    }

    pub fn pirates(&self) -> &[PirateShip] {
        &self.pirates
    }

    pub fn entities(&self) -> &[OceanEntity] {
        &self.entities
    }

    /// Total monsters across single monsters and groups.
    pub fn monster_count(&self) -> usize {
        self.entities.iter().map(OceanEntity::monster_count).sum()
    }

    pub fn add_pirate(&mut self, pirate: PirateShip) {
        self.pirates.push(pirate);
    }

    pub fn add_entity(&mut self, entity: OceanEntity) {
        self.entities.push(entity);
    }

    // ========== End Accessor Methods ==========

    /// Move the ship; on success every pirate is retargeted to the new cell.
    pub fn move_ship(&mut self, direction: Direction) -> Option<Position> {
        let moved = self.ship.go(direction, &self.map);
        if let Some(pos) = moved {
            self.retarget_pirates(pos);
        }
        moved
    }

    /// Respawn the ship without validation and retarget the pirates there.
    pub fn respawn_ship(&mut self, position: Position) {
        self.ship.move_to(position);
        self.retarget_pirates(position);
    }

    fn retarget_pirates(&mut self, player: Position) {
        for pirate in self.pirates.iter_mut() {
            pirate.retarget(player, &self.map, &mut self.rng);
            debug!(
                strategy = pirate.strategy().name(),
                x = pirate.position().x,
                y = pirate.position().y,
                "pirate retargeted"
            );
        }
    }

    /// Advance every monster and group once. Failures are collected, not fatal.
    pub fn advance_entities(&mut self) -> Vec<GameError> {
        let player = self.ship.position();
        let mut failures = Vec::new();
        for entity in self.entities.iter_mut() {
            if let Err(err) = advance_entity(entity, player, &self.map, &mut self.rng) {
                failures.push(err);
            }
        }
        failures
    }

    /// First pirate sharing the ship's cell, by registration order.
    pub fn pirate_at_ship(&self) -> Option<usize> {
        let ship = self.ship.position();
        self.pirates.iter().position(|p| p.position() == ship)
    }

    /// First monster or group touching the ship's cell, by registration order.
    pub fn entity_at_ship(&self) -> Option<&OceanEntity> {
        let ship = self.ship.position();
        self.entities.iter().find(|e| e.collides_with(ship))
    }
}

// Custom Debug that doesn't expose RNG internals
impl fmt::Debug for Ocean {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Ocean")
            .field("ship", &self.ship.position())
            .field("treasure", &self.treasure.position())
            .field("pirates", &self.pirates.len())
            .field("monsters", &self.monster_count())
            .finish_non_exhaustive()
    }
}

//! Game state machine
//!
//! Runs one tick per player move: advance the monsters, resolve collisions,
//! adjust score and lives, and check for the treasure. The GameEngine owns the
//! Ocean and tracks whether the voyage is still being played.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::models::constants::{
    COLLISION_PENALTY, MONSTER_ACTIVATION_DISTANCE, RESPAWN_POSITION, SHIP_NAME, TICK_REWARD,
    TREASURE_REWARD,
};
use crate::models::difficulty::Difficulty;
use crate::models::errors::GameResult;
use crate::models::loadout::{ShipLoadout, ShipStats};
use crate::models::navigation_types::Direction;
use crate::models::ocean::{Ocean, OceanConfig};

/// Core game engine that manages score, lives and the win/lose state
#[derive(Debug)]
pub struct GameEngine {
    ocean: Ocean,
    difficulty: Difficulty,
    state: GameState,
    score: u32,
    lives: i32,
    monsters_active: bool,
    loadout: ShipLoadout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameState {
    Playing,
    Win,
    Lose,
    /// Reserved; the tick loop never enters it.
    Paused,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::Win | GameState::Lose)
    }

    pub fn description(&self) -> &'static str {
        match self {
            GameState::Playing => "Game is running - find the treasure!",
            GameState::Win => "Player won - found treasure!",
            GameState::Lose => "Player lost - caught by enemy!",
            GameState::Paused => "Game is paused",
        }
    }
}

impl GameEngine {
    /// Creates a new game engine with a freshly generated ocean
    ///
    /// # Arguments
    ///
    /// * `difficulty` - Sets lives, fleet sizes, island count and starting upgrades
    /// * `seed` - Random number generator seed for ocean generation and movement
    ///
    /// # Errors
    ///
    /// Propagates island placement failures from ocean generation
    pub fn new(difficulty: Difficulty, seed: u64) -> GameResult<Self> {
        let ocean = Ocean::generate(&OceanConfig::for_difficulty(difficulty), seed)?;
        Ok(Self::with_ocean(ocean, difficulty))
    }

    /// Wraps an existing ocean; lives and upgrades still come from `difficulty`.
    pub fn with_ocean(ocean: Ocean, difficulty: Difficulty) -> Self {
        let loadout = difficulty
            .starting_upgrades()
            .iter()
            .fold(ShipLoadout::new(SHIP_NAME), |ship, &upgrade| ship.with(upgrade));

        info!(
            difficulty = difficulty.name(),
            level = difficulty.level(),
            lives = difficulty.lives(),
            pirates = difficulty.pirate_count(),
            monsters = difficulty.monster_count(),
            "voyage started"
        );

        Self {
            ocean,
            difficulty,
            state: GameState::Playing,
            score: 0,
            lives: difficulty.lives(),
            monsters_active: false,
            loadout,
        }
    }

    // ========== Accessor Methods ==========

    pub fn ocean(&self) -> &Ocean {
        &self.ocean
    }

    pub fn ocean_mut(&mut self) -> &mut Ocean {
        &mut self.ocean
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn level(&self) -> u32 {
        self.difficulty.level()
    }

    /// Fleet size from the difficulty table.
    pub fn pirate_count(&self) -> usize {
        self.difficulty.pirate_count()
    }

    /// Monster count from the difficulty table.
    pub fn monster_count(&self) -> usize {
        self.difficulty.monster_count()
    }

    /// Informational only; monsters move every tick regardless.
    pub fn monsters_active(&self) -> bool {
        self.monsters_active
    }

    pub fn loadout(&self) -> &ShipLoadout {
        &self.loadout
    }

    pub fn ship_stats(&self) -> ShipStats {
        self.loadout.stats()
    }

    // ========== End Accessor Methods ==========

    /// Move the ship one cell and run a tick
    ///
    /// # Returns
    ///
    /// `true` if a tick ran (even when the ship was blocked), `false` once the
    /// game is over
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if self.state != GameState::Playing {
            return false;
        }

        if self.ocean.move_ship(direction).is_none() {
            debug!(%direction, "ship move blocked");
        }
        self.update();
        true
    }

    /// One tick: reward, advance monsters, resolve collisions, check the treasure
    pub fn update(&mut self) {
        if self.state != GameState::Playing {
            return;
        }

        self.score += TICK_REWARD;

        let ship = self.ocean.ship_position();
        let to_treasure = ship.distance_to(self.ocean.treasure().position());
        if to_treasure <= MONSTER_ACTIVATION_DISTANCE && !self.monsters_active {
            self.monsters_active = true;
            info!(distance = to_treasure, "sea monsters activated");
        }

        for failure in self.ocean.advance_entities() {
            warn!(error = %failure, "ocean entity failed to move");
        }

        self.check_collisions();

        if self.state == GameState::Playing {
            self.check_win_condition();
        }
    }

    /// Pirates first, then monsters in registration order; the first hit counts.
    fn check_collisions(&mut self) {
        if let Some(index) = self.ocean.pirate_at_ship() {
            info!(pirate = index, "pirate collision");
            self.handle_collision();
            return;
        }

        if let Some(entity) = self.ocean.entity_at_ship() {
            info!(kind = entity.kind(), name = entity.name(), "monster collision");
            self.handle_collision();
        }
    }

    /// Lose a life and 100 points (never below zero); respawn unless out of lives
    pub fn handle_collision(&mut self) {
        if self.state.is_terminal() {
            return;
        }

        self.lives -= 1;
        self.score = self.score.saturating_sub(COLLISION_PENALTY);
        info!(lives = self.lives, score = self.score, "lost a life");

        if self.lives <= 0 {
            self.state = GameState::Lose;
            info!(score = self.score, "game over");
            return;
        }

        self.monsters_active = false;
        self.ocean.respawn_ship(RESPAWN_POSITION);
    }

    /// Win when the ship sits on the treasure
    pub fn check_win_condition(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        if self.ocean.treasure().is_at(self.ocean.ship_position()) {
            self.state = GameState::Win;
            self.score += TREASURE_REWARD;
            info!(level = self.level(), score = self.score, "treasure found");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid_map::GridMap;
    use crate::models::monster::{OceanEntity, SeaMonster};
    use crate::models::pirate::PirateShip;
    use crate::models::position::Position;
    use crate::services::strategy::MovementStrategy;

    /// Helper: an open 20x20 ocean with the ship at (5,5) and the treasure far away.
    fn engine_with_layout(ship: Position, treasure: Position) -> GameEngine {
        let ocean = Ocean::with_layout(GridMap::new(20), ship, treasure, 0);
        GameEngine::with_ocean(ocean, Difficulty::Easy)
    }

    #[test]
    fn new_engine_starts_playing_with_table_values() {
        for difficulty in Difficulty::ALL {
            let engine = GameEngine::new(difficulty, 42).unwrap();
            assert_eq!(engine.state(), GameState::Playing);
            assert_eq!(engine.score(), 0);
            assert_eq!(engine.lives(), difficulty.lives());
            assert_eq!(engine.level(), difficulty.level());
            assert_eq!(engine.ocean().pirates().len(), engine.pirate_count());
            assert_eq!(engine.ocean().monster_count(), engine.monster_count());
        }
    }

    #[test]
    fn update_rewards_ten_points_per_tick() {
        let mut engine = engine_with_layout(Position::new(5, 5), Position::new(19, 19));
        engine.update();
        engine.update();
        assert_eq!(engine.score(), 20);
    }

    #[test]
    fn collision_penalty_is_floored_at_zero() {
        let mut engine = engine_with_layout(Position::new(5, 5), Position::new(19, 19));
        engine.update();
        engine.update();
        engine.update();
        engine.update();
        engine.update();
        assert_eq!(engine.score(), 50);

        engine.handle_collision();
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.lives(), 4);
        assert_eq!(engine.ocean().ship_position(), RESPAWN_POSITION);
    }

    #[test]
    fn collision_retargets_pirates_to_respawn() {
        let mut engine = engine_with_layout(Position::new(5, 5), Position::new(19, 19));
        engine
            .ocean_mut()
            .add_pirate(PirateShip::new(Position::new(10, 1), MovementStrategy::Chase));

        engine.handle_collision();
        let pirate = &engine.ocean().pirates()[0];
        assert_eq!(pirate.target(), RESPAWN_POSITION);
        assert_eq!(pirate.position(), Position::new(9, 1));
    }

    #[test]
    fn fifth_collision_loses_and_state_sticks() {
        let mut engine = engine_with_layout(Position::new(5, 5), Position::new(19, 19));
        for _ in 0..5 {
            engine.handle_collision();
        }
        assert_eq!(engine.state(), GameState::Lose);
        assert_eq!(engine.lives(), 0);

        engine.handle_collision();
        engine.update();
        assert_eq!(engine.lives(), 0);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.state(), GameState::Lose);
    }

    #[test]
    fn reaching_treasure_wins_once() {
        let mut engine = engine_with_layout(Position::new(5, 5), Position::new(6, 5));
        assert!(engine.apply_move(Direction::East));
        assert_eq!(engine.state(), GameState::Win);
        assert_eq!(engine.score(), TICK_REWARD + TREASURE_REWARD);

        engine.update();
        assert!(!engine.apply_move(Direction::West));
        assert_eq!(engine.score(), TICK_REWARD + TREASURE_REWARD);
        assert_eq!(engine.ocean().ship_position(), Position::new(6, 5));
    }

    #[test]
    fn blocked_move_still_ticks() {
        let mut engine = engine_with_layout(Position::new(0, 0), Position::new(19, 19));
        assert!(engine.apply_move(Direction::North));
        assert_eq!(engine.score(), TICK_REWARD);
        assert_eq!(engine.ocean().ship_position(), Position::new(0, 0));
    }

    #[test]
    fn moving_onto_monster_costs_a_life() {
        let mut engine = engine_with_layout(Position::new(5, 5), Position::new(19, 19));
        let mut monster = SeaMonster::new("Monster_1", Position::new(7, 5));
        monster.set_detection_range(1);
        engine.ocean_mut().add_entity(OceanEntity::Monster(monster));

        // Ship steps to (6,5); the monster, now adjacent, steps onto it.
        engine.apply_move(Direction::East);
        assert_eq!(engine.lives(), 4);
        assert_eq!(engine.ocean().ship_position(), RESPAWN_POSITION);
    }

    #[test]
    fn pirate_collision_is_checked_before_monsters() {
        let mut engine = engine_with_layout(Position::new(5, 5), Position::new(19, 19));
        engine
            .ocean_mut()
            .add_pirate(PirateShip::new(Position::new(5, 5), MovementStrategy::patrol()));
        engine
            .ocean_mut()
            .add_entity(OceanEntity::Monster(SeaMonster::new("Monster_1", Position::new(5, 5))));

        engine.update();
        // Only one life lost even though two enemies share the cell.
        assert_eq!(engine.lives(), 4);
    }

    #[test]
    fn monsters_activate_near_treasure_and_reset_on_collision() {
        let mut engine = engine_with_layout(Position::new(5, 5), Position::new(19, 19));
        engine.update();
        assert!(!engine.monsters_active());

        let mut engine = engine_with_layout(Position::new(12, 12), Position::new(19, 19));
        engine.update();
        assert!(engine.monsters_active());
        engine.handle_collision();
        assert!(!engine.monsters_active());
    }

    #[test]
    fn shield_only_on_easy_and_medium() {
        let easy = GameEngine::new(Difficulty::Easy, 1).unwrap();
        assert!(easy.ship_stats().shield);
        assert_eq!(easy.ship_stats().armor, 5);
        assert_eq!(easy.ship_stats().description, "Columbus + Shield");

        let hard = GameEngine::new(Difficulty::Hard, 1).unwrap();
        assert!(!hard.ship_stats().shield);
        assert_eq!(hard.ship_stats().protection, 0);
    }

    #[test]
    fn state_descriptions() {
        assert!(GameState::Win.is_terminal());
        assert!(GameState::Lose.is_terminal());
        assert!(!GameState::Paused.is_terminal());
        assert_eq!(GameState::Paused.description(), "Game is paused");
    }
}

//! Play sessions
//!
//! Each session owns a complete GameEngine (grid, ship, fleet, RNG), so
//! sessions never see each other's state. The manager hands out ids of the
//! form `session_<n>` and derives every session's seed from its own RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::game_engine::GameEngine;
use crate::models::difficulty::Difficulty;
use crate::models::errors::{GameError, GameResult};
use crate::models::navigation_types::Direction;
use crate::services::snapshot::{snapshot, Snapshot};

/// One player's game plus its move counter.
#[derive(Debug)]
pub struct GameSession {
    id: String,
    engine: GameEngine,
    moves: u32,
}

impl GameSession {
    pub fn new(id: impl Into<String>, engine: GameEngine) -> Self {
        GameSession {
            id: id.into(),
            engine,
            moves: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Apply a direction keyword. Unknown keywords change nothing.
    pub fn apply_move(&mut self, keyword: &str) {
        let direction = match keyword.parse::<Direction>() {
            Ok(direction) => direction,
            Err(err) => {
                debug!(session = %self.id, error = %err, "move ignored");
                return;
            }
        };
        if self.engine.apply_move(direction) {
            self.moves += 1;
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        snapshot(&self.id, &self.engine, self.moves)
    }
}

pub struct SessionManager {
    sessions: HashMap<String, GameSession>,
    counter: u64,
    rng: StdRng,
}

impl SessionManager {
    /// A manager whose sessions are reproducible from `seed`.
    pub fn new(seed: u64) -> Self {
        SessionManager {
            sessions: HashMap::new(),
            counter: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build a new isolated game and return its id.
    pub fn create_session(&mut self, difficulty: Difficulty) -> GameResult<String> {
        let seed: u64 = self.rng.gen();
        let engine = GameEngine::new(difficulty, seed)?;

        self.counter += 1;
        let id = format!("session_{}", self.counter);
        info!(session = %id, %difficulty, "session created");
        self.sessions
            .insert(id.clone(), GameSession::new(id.clone(), engine));
        Ok(id)
    }

    pub fn apply_move(&mut self, id: &str, direction: &str) -> GameResult<()> {
        self.session_mut(id)?.apply_move(direction);
        Ok(())
    }

    pub fn snapshot(&self, id: &str) -> GameResult<Snapshot> {
        Ok(self.session(id)?.snapshot())
    }

    pub fn session(&self, id: &str) -> GameResult<&GameSession> {
        self.sessions
            .get(id)
            .ok_or_else(|| GameError::SessionNotFound(id.to_string()))
    }

    fn session_mut(&mut self, id: &str) -> GameResult<&mut GameSession> {
        self.sessions
            .get_mut(id)
            .ok_or_else(|| GameError::SessionNotFound(id.to_string()))
    }

    pub fn remove_session(&mut self, id: &str) -> GameResult<GameSession> {
        let session = self
            .sessions
            .remove(id)
            .ok_or_else(|| GameError::SessionNotFound(id.to_string()))?;
        info!(session = %id, "session removed");
        Ok(session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

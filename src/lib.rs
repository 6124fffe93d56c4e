//! Columbus Voyage Game Engine
//!
//! A turn-based pursuit game on a 20x20 ocean grid.
//!
//! # Overview
//!
//! The player steers Columbus's ship across an ocean dotted with islands,
//! looking for a buried treasure. Pirate ships shadow the player using chase
//! or patrol strategies, and sea monsters hunt anything that sails within
//! their detection range. Every move is one tick: monsters advance,
//! collisions cost a life, and reaching the treasure wins the level.
//!
//! # Modules
//!
//! - [`game_engine`] - Tick loop, scoring, lives and win/lose state
//! - [`models`] - Domain models (GridMap, Ship, PirateShip, SeaMonster, etc.)
//! - [`services`] - Movement strategies, monster AI, sessions and snapshots
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Terminal presentation
//! - [`cli`] - Command line flags
//!
//! # Example
//!
//! ```rust
//! use columbus::services::session::SessionManager;
//! use columbus::models::difficulty::Difficulty;
//!
//! let mut sessions = SessionManager::new(42);
//! let id = sessions.create_session(Difficulty::Easy).unwrap();
//! sessions.apply_move(&id, "down").unwrap();
//! let snapshot = sessions.snapshot(&id).unwrap();
//! assert_eq!(snapshot.moves, 1);
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{GameEngine, GameState};
pub use models::difficulty::Difficulty;
pub use models::errors::{GameError, GameResult};

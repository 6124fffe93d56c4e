//! Game services
//!
//! This module contains the behaviour behind the models: pirate strategies,
//! sea monster AI, sessions, snapshots and the terminal game loop.

pub mod game;
pub mod monster_ai;
pub mod session;
pub mod snapshot;
pub mod strategy;

//! Domain models
//!
//! This module contains the domain models for the voyage: the grid, the
//! player's ship, pirates, monsters, the treasure and the per-session ocean.
//! Models are plain data with small helpers; behaviour lives in services.

pub mod constants;
pub mod difficulty;
pub mod errors;
pub mod grid_map;
pub mod loadout;
pub mod monster;
pub mod navigation_types;
pub mod ocean;
pub mod pirate;
pub mod position;
pub mod ship;
pub mod treasure;

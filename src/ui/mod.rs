//! User interface and presentation
//!
//! Presenters turn snapshots into terminal text, keeping formatting out of
//! the game logic.

pub mod presenters;

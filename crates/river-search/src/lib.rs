//! Uninformed search for the missionaries and cannibals river crossing.
//!
//! This crate finds a sequence of boat moves that brings every cannibal and
//! missionary from the left bank to the right bank without cannibals ever
//! outnumbering missionaries on either bank. Breadth-first search yields a
//! shortest solution; depth-first search yields some solution.

pub mod error;
pub mod moves;
pub mod search;
pub mod state;

// Re-export main types
pub use error::SearchError;
pub use moves::{expand, is_valid, move_between, Move};
pub use search::{Search, SearchConfig, SearchStatistics, SelectionMode};
pub use state::State;

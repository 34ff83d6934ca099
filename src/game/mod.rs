//! Game engine and session bookkeeping
//!
//! The [`GameEngine`] drives one game at a time through
//! `Start -> Playing -> Solved | GameOver -> Playing ...` and keeps
//! [`SessionStats`] across the games of a session.

mod engine;
mod outcome;
mod stats;

pub use engine::GameEngine;
pub use outcome::{EngineError, GameState, GuessError, Rating, Response, Submission};
pub use stats::{SessionStats, StatsSummary};

/// Guesses allowed per game
pub const MAX_TURNS: usize = 6;

//! Wordle Game
//!
//! A UI-agnostic Wordle engine: guess validation, duplicate-aware scoring,
//! per-letter tracking and session statistics.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_game::game::{GameEngine, GameState};
//!
//! let mut engine = GameEngine::embedded().unwrap();
//! engine.new_game(None).unwrap();
//!
//! let submission = engine.submit_guess("crane");
//! if let Some(scored) = &submission.scored {
//!     println!("{scored}");
//! }
//! if engine.state() != GameState::Playing {
//!     println!("{}", submission.response);
//! }
//! ```

// Core domain types
pub mod core;

// Game engine and statistics
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

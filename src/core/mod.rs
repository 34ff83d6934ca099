//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod score;
mod tracker;
mod word;

pub use score::{LetterScore, ScoredGuess, score_guess};
pub use tracker::{LetterTracker, QWERTY_ROWS};
pub use word::{WORD_LENGTH, Word, WordError};

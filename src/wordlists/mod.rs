//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, and loaders for
//! lists supplied at runtime.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, GUESSES, GUESSES_COUNT};
pub use loader::{WordListError, WordListSource};

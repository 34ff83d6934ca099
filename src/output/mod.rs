//! Terminal output formatting
//!
//! Plain-text rendering for the command-line driver. The engine never calls
//! into this module.

pub mod display;
pub mod formatters;

pub use display::{write_keyboard, write_scored_guess, write_stats};

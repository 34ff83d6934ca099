//! Values returned to the front end after each submission

use crate::core::{ScoredGuess, WordError};
use crate::wordlists::WordListError;
use std::fmt;

/// Top-level status of the engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    /// No game started yet
    #[default]
    Start,
    Playing,
    /// Answer found; waiting for a new game
    Solved,
    /// Turns exhausted; waiting for a new game
    GameOver,
}

/// Why a guess was rejected without consuming a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessError {
    /// Fewer letters than a word has
    TooShort,
    /// Right length (or longer) but not an accepted word
    NotInWordList,
    /// Submitted while no game is in progress
    NotPlaying,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "Not enough letters"),
            Self::NotInWordList => write!(f, "Not in word list"),
            Self::NotPlaying => write!(f, "No game in progress"),
        }
    }
}

/// End-of-game label for a win, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    Genius = 1,
    Magnificent = 2,
    Impressive = 3,
    Splendid = 4,
    Great = 5,
    Phew = 6,
}

impl Rating {
    /// Rating for a win on `turn` (1-based)
    ///
    /// Turns past the last one clamp to `Phew`; turn 0 is treated as turn 1.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Rating;
    ///
    /// assert_eq!(Rating::from_turn(1), Rating::Genius);
    /// assert_eq!(Rating::from_turn(6), Rating::Phew);
    /// ```
    #[must_use]
    pub const fn from_turn(turn: usize) -> Self {
        match turn {
            0 | 1 => Self::Genius,
            2 => Self::Magnificent,
            3 => Self::Impressive,
            4 => Self::Splendid,
            5 => Self::Great,
            _ => Self::Phew,
        }
    }

    /// The winning turn this rating stands for
    #[must_use]
    pub const fn turn(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Genius => "Genius",
            Self::Magnificent => "Magnificent",
            Self::Impressive => "Impressive",
            Self::Splendid => "Splendid",
            Self::Great => "Great",
            Self::Phew => "Phew",
        };
        write!(f, "{label}")
    }
}

/// What the front end should tell the player after a submission
///
/// `Display` yields the message text: empty for an ordinary turn, the error
/// message, the rating label, or the upper-cased answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Valid guess, game goes on
    Continue,
    /// Guess rejected, nothing changed
    Invalid(GuessError),
    /// Game won
    Solved(Rating),
    /// Game lost; carries the upper-cased answer
    GameOver(String),
}

impl Response {
    /// True for the two responses that end a game
    #[must_use]
    pub const fn is_game_end(&self) -> bool {
        matches!(self, Self::Solved(_) | Self::GameOver(_))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continue => Ok(()),
            Self::Invalid(err) => write!(f, "{err}"),
            Self::Solved(rating) => write!(f, "{rating}"),
            Self::GameOver(answer) => write!(f, "{answer}"),
        }
    }
}

/// Result of one `submit_guess` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The scored guess, absent when the guess was rejected
    pub scored: Option<ScoredGuess>,
    pub response: Response,
}

impl Submission {
    pub(crate) const fn rejected(error: GuessError) -> Self {
        Self {
            scored: None,
            response: Response::Invalid(error),
        }
    }
}

/// Failure to set up a game
#[derive(Debug)]
pub enum EngineError {
    /// A word list could not be loaded
    WordList(WordListError),
    /// The fixed answer passed to `new_game` is not a valid word
    InvalidAnswer(WordError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordList(err) => write!(f, "{err}"),
            Self::InvalidAnswer(err) => write!(f, "Invalid answer: {err}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WordList(err) => Some(err),
            Self::InvalidAnswer(err) => Some(err),
        }
    }
}

impl From<WordListError> for EngineError {
    fn from(err: WordListError) -> Self {
        Self::WordList(err)
    }
}

impl From<WordError> for EngineError {
    fn from(err: WordError) -> Self {
        Self::InvalidAnswer(err)
    }
}

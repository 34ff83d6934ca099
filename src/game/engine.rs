//! Game-state engine
//!
//! Owns the answer, the word lists, the guess history, the letter tracker and
//! the turn/state machine. The engine never does I/O beyond loading word
//! lists; front ends feed it raw strings and read back a [`Submission`].

use super::outcome::{EngineError, GameState, GuessError, Rating, Response, Submission};
use super::stats::{SessionStats, StatsSummary};
use super::MAX_TURNS;
use crate::core::{LetterTracker, ScoredGuess, WORD_LENGTH, Word, score_guess};
use crate::wordlists::{ANSWERS, GUESSES, WordListError, WordListSource};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

/// A single-player Wordle game, reusable across many games in one session
///
/// # Examples
/// ```
/// use wordle_game::game::{GameEngine, GameState, Rating, Response};
/// use wordle_game::wordlists::WordListSource;
///
/// let words = vec!["crate".to_string(), "react".to_string(), "trace".to_string()];
/// let mut engine = GameEngine::with_seed(
///     WordListSource::from(words.clone()),
///     WordListSource::from(words),
///     7,
/// )
/// .unwrap();
///
/// engine.new_game(Some("crate")).unwrap();
/// let first = engine.submit_guess("REACT");
/// assert_eq!(first.response, Response::Continue);
///
/// let second = engine.submit_guess("crate");
/// assert_eq!(second.response, Response::Solved(Rating::Magnificent));
/// assert_eq!(engine.state(), GameState::Solved);
/// ```
#[derive(Debug)]
pub struct GameEngine<R = StdRng> {
    answers_source: WordListSource,
    answers: Vec<Word>,
    guesses: FxHashSet<String>,
    answer: Option<Word>,
    history: Vec<ScoredGuess>,
    tracker: LetterTracker,
    state: GameState,
    stats: SessionStats,
    input: String,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Engine over the given lists, shuffling with OS-seeded randomness
    ///
    /// # Errors
    ///
    /// Returns `EngineError::WordList` if the guess list cannot be loaded.
    pub fn new(answers: WordListSource, guesses: WordListSource) -> Result<Self, EngineError> {
        Self::with_rng(answers, guesses, StdRng::from_os_rng())
    }

    /// Engine with a deterministic shuffle, for tests and reproducible runs
    ///
    /// # Errors
    ///
    /// Returns `EngineError::WordList` if the guess list cannot be loaded.
    pub fn with_seed(
        answers: WordListSource,
        guesses: WordListSource,
        seed: u64,
    ) -> Result<Self, EngineError> {
        Self::with_rng(answers, guesses, StdRng::seed_from_u64(seed))
    }

    /// Engine over the word lists compiled into the crate
    ///
    /// # Errors
    ///
    /// Only fails if the embedded guess list is empty.
    pub fn embedded() -> Result<Self, EngineError> {
        Self::new(
            WordListSource::Embedded(ANSWERS),
            WordListSource::Embedded(GUESSES),
        )
    }
}

impl<R: Rng> GameEngine<R> {
    /// Engine shuffling answers with `rng`
    ///
    /// The guess dictionary is loaded here, once. The answer pool is loaded
    /// lazily by the first [`GameEngine::new_game`].
    ///
    /// # Errors
    ///
    /// Returns `EngineError::WordList` if the guess list cannot be loaded.
    pub fn with_rng(
        answers: WordListSource,
        guesses: WordListSource,
        rng: R,
    ) -> Result<Self, EngineError> {
        let guesses: FxHashSet<String> = guesses
            .load()?
            .into_iter()
            .map(|w| w.text().to_string())
            .collect();
        log::debug!("Loaded {} accepted guesses", guesses.len());

        Ok(Self {
            answers_source: answers,
            answers: Vec::new(),
            guesses,
            answer: None,
            history: Vec::new(),
            tracker: LetterTracker::new(),
            state: GameState::Start,
            stats: SessionStats::new(),
            input: String::new(),
            rng,
        })
    }

    /// Carry over statistics from an earlier session
    #[must_use]
    pub fn with_session_stats(mut self, stats: SessionStats) -> Self {
        self.stats = stats;
        self
    }

    /// Start a new game, abandoning any game in progress
    ///
    /// With `fixed_answer` (non-empty) that word becomes the answer and the
    /// shuffled pool is left untouched. Otherwise the next word is popped
    /// from the pool, which is reloaded and reshuffled whenever it runs dry.
    ///
    /// # Errors
    ///
    /// - `EngineError::InvalidAnswer` if `fixed_answer` is not a 5-letter word
    /// - `EngineError::WordList` if the answer list cannot be (re)loaded. An
    ///   answer list with no valid words is only an error without a fixed answer
    ///
    /// The engine is left unchanged on error.
    pub fn new_game(&mut self, fixed_answer: Option<&str>) -> Result<(), EngineError> {
        let fixed = fixed_answer
            .filter(|text| !text.is_empty())
            .map(Word::new)
            .transpose()?;

        if self.answers.is_empty() {
            match self.refill_answers() {
                Ok(()) => {}
                // A fixed answer doesn't need the pool
                Err(WordListError::Empty(source)) if fixed.is_some() => {
                    log::info!("No valid answers in {source}; continuing with fixed answer");
                }
                Err(err) => return Err(err.into()),
            }
        }

        let answer = match fixed {
            Some(word) => word,
            None => self
                .answers
                .pop()
                .ok_or_else(|| WordListError::Empty(self.answers_source.describe()))?,
        };
        log::info!(
            "New game started ({} answers left in pool)",
            self.answers.len()
        );

        self.answer = Some(answer);
        self.tracker.reset();
        self.history.clear();
        self.input.clear();
        self.state = GameState::Playing;
        Ok(())
    }

    fn refill_answers(&mut self) -> Result<(), WordListError> {
        let mut pool = self.answers_source.load()?;
        pool.shuffle(&mut self.rng);
        log::debug!(
            "Shuffled {} answers from {}",
            pool.len(),
            self.answers_source.describe()
        );
        self.answers = pool;
        Ok(())
    }

    /// Validate, score and record a guess
    ///
    /// Input is lower-cased before validation. A rejected guess returns
    /// `scored: None` with `Response::Invalid` and changes nothing.
    pub fn submit_guess(&mut self, raw: &str) -> Submission {
        if self.state != GameState::Playing {
            return Submission::rejected(GuessError::NotPlaying);
        }

        let guess = raw.to_lowercase();
        if guess.chars().count() < WORD_LENGTH {
            return Submission::rejected(GuessError::TooShort);
        }
        if !self.guesses.contains(&guess) {
            return Submission::rejected(GuessError::NotInWordList);
        }
        let (Ok(word), Some(answer)) = (Word::new(guess), &self.answer) else {
            return Submission::rejected(GuessError::NotInWordList);
        };

        let scored = score_guess(&word, answer);
        self.finish_turn(scored)
    }

    fn finish_turn(&mut self, scored: ScoredGuess) -> Submission {
        let turn = self.turn();
        log::debug!("Turn {turn}: {scored}");

        let response = if scored.is_solved() {
            self.stats.record_win(turn);
            self.state = GameState::Solved;
            log::info!("Solved on turn {turn}");
            Response::Solved(Rating::from_turn(turn))
        } else if turn == MAX_TURNS {
            self.stats.record_loss();
            self.state = GameState::GameOver;
            let answer = self
                .answer
                .as_ref()
                .map(|w| w.text().to_uppercase())
                .unwrap_or_default();
            log::info!("Game over, answer was {answer}");
            Response::GameOver(answer)
        } else {
            Response::Continue
        };

        self.tracker.update(&scored);
        self.history.push(scored.clone());
        self.input.clear();

        Submission {
            scored: Some(scored),
            response,
        }
    }

    /// Append a letter to the guess being typed
    ///
    /// Only ASCII letters are accepted, and only while fewer than 5 are
    /// buffered. Returns whether the letter was taken.
    pub fn add_letter(&mut self, letter: char) -> bool {
        if letter.is_ascii_alphabetic() && self.input.len() < WORD_LENGTH {
            self.input.push(letter.to_ascii_lowercase());
            true
        } else {
            false
        }
    }

    /// Remove the last typed letter, if any
    pub fn delete_letter(&mut self) -> Option<char> {
        self.input.pop()
    }

    /// The guess being typed
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.input
    }

    /// Submit the typed guess; it is kept if rejected
    pub fn submit_current(&mut self) -> Submission {
        let guess = self.input.clone();
        self.submit_guess(&guess)
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Current turn number, 1-based and never above 6
    #[must_use]
    pub fn turn(&self) -> usize {
        (self.history.len() + 1).min(MAX_TURNS)
    }

    /// Scored guesses of the current game, oldest first
    #[must_use]
    pub fn history(&self) -> &[ScoredGuess] {
        &self.history
    }

    #[must_use]
    pub const fn tracker(&self) -> &LetterTracker {
        &self.tracker
    }

    /// Summary of finished games, `None` until one has finished
    #[must_use]
    pub fn stats(&self) -> Option<StatsSummary> {
        self.stats.summary()
    }

    #[must_use]
    pub const fn session_stats(&self) -> &SessionStats {
        &self.stats
    }

    /// The hidden answer. Meant for debugging and for front ends that show
    /// it after the game, not during play.
    #[must_use]
    pub const fn answer(&self) -> Option<&Word> {
        self.answer.as_ref()
    }

    /// Answers not yet drawn from the current shuffle
    #[must_use]
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }

    /// Whether `word` is in the guess dictionary (case-insensitive)
    #[must_use]
    pub fn is_accepted(&self, word: &str) -> bool {
        self.guesses.contains(&word.to_lowercase())
    }
}

//! Best-known score for every letter of the alphabet

use super::{LetterScore, ScoredGuess};

/// Keyboard rows used by [`LetterTracker::qwerty`]
pub const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Per-letter knowledge accumulated over the turns of one game
///
/// Scores only ever go up: a letter seen as `Correct` stays `Correct` even if
/// a later guess scores the same letter `Absent` or `Present` elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterTracker {
    scores: [LetterScore; 26],
}

impl LetterTracker {
    /// A tracker with every letter `Unguessed`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best score seen for `letter`
    ///
    /// Anything outside `a-z` (case-insensitive) is reported as `Unguessed`.
    #[must_use]
    pub fn get(&self, letter: char) -> LetterScore {
        index_of(letter).map_or(LetterScore::Unguessed, |i| self.scores[i])
    }

    /// Raise each letter of `guess` to the score it received, if higher
    pub fn update(&mut self, guess: &ScoredGuess) {
        for (letter, score) in guess.iter() {
            if let Some(i) = index_of(letter) {
                self.scores[i] = self.scores[i].max(score);
            }
        }
    }

    /// All letters back to `Unguessed`
    pub fn reset(&mut self) {
        self.scores = [LetterScore::Unguessed; 26];
    }

    /// `(letter, score)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterScore)> + '_ {
        (b'a'..=b'z').map(char::from).zip(self.scores)
    }

    /// Scores laid out as the three rows of a QWERTY keyboard
    #[must_use]
    pub fn qwerty(&self) -> Vec<Vec<(char, LetterScore)>> {
        QWERTY_ROWS
            .iter()
            .map(|row| row.chars().map(|ch| (ch, self.get(ch))).collect())
            .collect()
    }
}

fn index_of(letter: char) -> Option<usize> {
    let lower = letter.to_ascii_lowercase();
    lower
        .is_ascii_lowercase()
        .then(|| (lower as u8 - b'a') as usize)
}

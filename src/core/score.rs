//! Per-letter feedback for a guess
//!
//! Each letter of a guess is scored against the answer:
//! - Absent: letter not in the answer (or all its instances already used)
//! - Present: letter in the answer, wrong position
//! - Correct: letter in the correct position
//!
//! `Unguessed` is never produced by scoring; it only exists so the letter
//! tracker can start every letter below `Absent`.

use super::Word;
use super::word::WORD_LENGTH;
use std::fmt;

/// Knowledge about a single letter, ordered from least to most informative
///
/// The ordering is relied upon by the tracker, which only ever raises a
/// letter's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterScore {
    #[default]
    Unguessed = 0,
    Absent = 1,
    Present = 2,
    Correct = 3,
}

impl LetterScore {
    /// Numeric level (0-3), for front ends mapping scores to colours
    #[inline]
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }
}

/// A guess with one score per position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    word: Word,
    scores: [LetterScore; WORD_LENGTH],
}

impl ScoredGuess {
    /// The guessed word
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Scores in position order
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; WORD_LENGTH] {
        &self.scores
    }

    /// `(letter, score)` pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterScore)> + '_ {
        self.word
            .chars()
            .iter()
            .zip(self.scores)
            .map(|(&ch, score)| (char::from(ch), score))
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.scores.iter().all(|&s| s == LetterScore::Correct)
    }
}

impl fmt::Display for ScoredGuess {
    /// Compact text form: uppercase for correct, lowercase for present,
    /// `.` for absent. Mostly useful in logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, score) in self.iter() {
            let shown = match score {
                LetterScore::Correct => letter.to_ascii_uppercase(),
                LetterScore::Present => letter,
                LetterScore::Absent | LetterScore::Unguessed => '.',
            };
            write!(f, "{shown}")?;
        }
        Ok(())
    }
}

/// Score `guess` against `answer`
///
/// Implements Wordle's feedback rules including duplicate letters.
///
/// # Algorithm
/// 1. Every position starts as `Absent`; copy the answer's letters
/// 2. First pass: exact matches become `Correct` and their letter instance is
///    removed from the copy
/// 3. Second pass: any other position whose letter is still in the copy
///    becomes `Present`, removing one instance
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterScore, Word, score_guess};
///
/// let guess = Word::new("erase").unwrap();
/// let answer = Word::new("crate").unwrap();
/// let scored = score_guess(&guess, &answer);
///
/// // Only one 'e' in "crate": the final one lines up, the first is absent
/// assert_eq!(scored.scores()[0], LetterScore::Absent);
/// assert_eq!(scored.scores()[4], LetterScore::Correct);
/// ```
#[must_use]
pub fn score_guess(guess: &Word, answer: &Word) -> ScoredGuess {
    let mut scores = [LetterScore::Absent; WORD_LENGTH];
    let mut remaining: Vec<u8> = answer.chars().to_vec();

    // First pass: exact position matches
    for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
        if g == a {
            scores[i] = LetterScore::Correct;
            take_letter(&mut remaining, g);
        }
    }

    // Second pass: right letter, wrong position
    for (i, &g) in guess.chars().iter().enumerate() {
        if scores[i] != LetterScore::Correct && take_letter(&mut remaining, g) {
            scores[i] = LetterScore::Present;
        }
    }

    ScoredGuess {
        word: guess.clone(),
        scores,
    }
}

/// Remove one instance of `letter`, reporting whether there was one
fn take_letter(letters: &mut Vec<u8>, letter: u8) -> bool {
    match letters.iter().position(|&ch| ch == letter) {
        Some(pos) => {
            letters.swap_remove(pos);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterScore::{Absent, Correct, Present};

    fn score(guess: &str, answer: &str) -> ScoredGuess {
        score_guess(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn letter_score_ordering() {
        assert!(LetterScore::Unguessed < Absent);
        assert!(Absent < Present);
        assert!(Present < Correct);
        assert_eq!(Correct.level(), 3);
        assert_eq!(LetterScore::default(), LetterScore::Unguessed);
    }

    #[test]
    fn all_absent() {
        let scored = score("abcde", "fghij");
        assert_eq!(scored.scores(), &[Absent; 5]);
        assert!(!scored.is_solved());
    }

    #[test]
    fn all_correct() {
        let scored = score("crane", "crane");
        assert_eq!(scored.scores(), &[Correct; 5]);
        assert!(scored.is_solved());
    }

    #[test]
    fn anagram_keeps_shared_position_correct() {
        // Both words have 'a' in the middle; the rest is shuffled
        let scored = score("react", "crate");
        let pairs: Vec<_> = scored.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ('r', Present),
                ('e', Present),
                ('a', Correct),
                ('c', Present),
                ('t', Present),
            ]
        );
    }

    #[test]
    fn duplicate_letters_both_correct() {
        let scored = score("sheet", "sweet");
        let pairs: Vec<_> = scored.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ('s', Correct),
                ('h', Absent),
                ('e', Correct),
                ('e', Correct),
                ('t', Correct),
            ]
        );
    }

    #[test]
    fn duplicate_guess_letter_single_answer_letter() {
        // "crate" has one 'e', which the exact match at the end claims
        let scored = score("erase", "crate");
        assert_eq!(scored.scores(), &[Absent, Correct, Correct, Absent, Correct]);
    }

    #[test]
    fn duplicate_guess_letter_first_gets_present() {
        // "speed" vs "abide": only one 'e' to hand out, first e takes it
        let scored = score("speed", "abide");
        assert_eq!(scored.scores(), &[Absent, Absent, Present, Absent, Present]);
    }

    #[test]
    fn exact_match_claims_letter_before_present() {
        // ROBOT vs FLOOR: second O is green, first O yellow
        let scored = score("robot", "floor");
        assert_eq!(scored.scores(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn marks_never_exceed_shared_letter_counts() {
        let words = [
            "sweet", "sheet", "erase", "speed", "eerie", "geese", "robot", "floor", "crate",
            "react", "mamma", "llama", "puppy", "poppy",
        ];
        for g in words {
            for a in words {
                let guess = Word::new(g).unwrap();
                let answer = Word::new(a).unwrap();
                let scored = score_guess(&guess, &answer);

                for letter in b'a'..=b'z' {
                    let marked = scored
                        .iter()
                        .filter(|&(ch, s)| ch == char::from(letter) && s > Absent)
                        .count();
                    let limit = guess.count_of(letter).min(answer.count_of(letter));
                    assert!(marked <= limit, "{g} vs {a}: '{}' over-marked", letter as char);
                }
            }
        }
    }

    #[test]
    fn display_compact_form() {
        assert_eq!(score("sheet", "sweet").to_string(), "S.EET");
        assert_eq!(score("react", "crate").to_string(), "reAct");
    }

    #[test]
    fn anagram_without_fixed_points_is_all_present() {
        let scored = score("racet", "crate");
        assert_eq!(scored.scores(), &[Present; 5]);
    }
}

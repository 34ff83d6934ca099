//! Formatting utilities for terminal output

use crate::core::{LetterScore, LetterTracker, ScoredGuess};

/// Tile for a single letter score
#[must_use]
pub const fn score_tile(score: LetterScore) -> char {
    match score {
        LetterScore::Unguessed => '▫',
        LetterScore::Absent => '⬜',
        LetterScore::Present => '🟨',
        LetterScore::Correct => '🟩',
    }
}

/// Format a scored guess as an emoji string
#[must_use]
pub fn scored_guess_to_emoji(scored: &ScoredGuess) -> String {
    scored.scores().iter().map(|&s| score_tile(s)).collect()
}

/// Format the tracker as three keyboard rows
///
/// Letters known to be absent are hidden as `·`, present letters are
/// lowercase and correct letters uppercase. Unguessed letters stay lowercase.
#[must_use]
pub fn keyboard_rows(tracker: &LetterTracker) -> Vec<String> {
    tracker
        .qwerty()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(letter, score)| match score {
                    LetterScore::Absent => '·',
                    LetterScore::Correct => letter.to_ascii_uppercase(),
                    LetterScore::Unguessed | LetterScore::Present => letter,
                })
                .collect()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, score_guess};

    fn scored(guess: &str, answer: &str) -> ScoredGuess {
        score_guess(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn emoji_all_gray() {
        assert_eq!(scored_guess_to_emoji(&scored("abcde", "fghij")), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_all_green() {
        assert_eq!(scored_guess_to_emoji(&scored("crane", "crane")), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_mixed() {
        assert_eq!(scored_guess_to_emoji(&scored("sheet", "sweet")), "🟩⬜🟩🟩🟩");
        assert_eq!(scored_guess_to_emoji(&scored("react", "crate")), "🟨🟨🟩🟨🟨");
    }

    #[test]
    fn keyboard_reflects_tracker() {
        let mut tracker = LetterTracker::new();
        tracker.update(&scored("crane", "slate"));
        let rows = keyboard_rows(&tracker);

        assert_eq!(rows[0], "qwE·tyuiop");
        assert_eq!(rows[1], "Asdfghjkl");
        assert_eq!(rows[2], "zx·vb·m");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(0.0, 0.0, 4), "░░░░");
    }
}

//! Display functions for game results
//!
//! Everything writes to a caller-supplied writer so the play loop can be
//! driven from tests.

use super::formatters::{create_progress_bar, keyboard_rows, scored_guess_to_emoji};
use crate::core::{LetterTracker, ScoredGuess};
use crate::game::{MAX_TURNS, StatsSummary};
use std::io::{self, Write};

/// Write one scored guess: tiles followed by the word
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_scored_guess<W: Write>(
    out: &mut W,
    turn: usize,
    scored: &ScoredGuess,
) -> io::Result<()> {
    writeln!(
        out,
        "  {turn}. {} {}",
        scored_guess_to_emoji(scored),
        scored.word().text().to_uppercase()
    )
}

/// Write the keyboard hint rows
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_keyboard<W: Write>(out: &mut W, tracker: &LetterTracker) -> io::Result<()> {
    for (indent, row) in keyboard_rows(tracker).iter().enumerate() {
        writeln!(out, "  {}{row}", " ".repeat(indent))?;
    }
    Ok(())
}

/// Write session statistics with a guess distribution chart
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_stats<W: Write>(out: &mut W, stats: &StatsSummary) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40))?;
    writeln!(out, "Played:         {}", stats.played)?;
    writeln!(out, "Win %:          {}", stats.win_percent)?;
    writeln!(out, "Current streak: {}", stats.current_streak)?;
    writeln!(out, "Max streak:     {}", stats.max_streak)?;
    writeln!(out, "\nGuess distribution:")?;

    let most = stats.distribution.iter().copied().max().unwrap_or(0);
    for turn in 1..=MAX_TURNS {
        let wins = stats.wins_on(turn);
        let bar = create_progress_bar(wins as f64, most as f64, 20);
        writeln!(out, "  {turn} {bar} {wins}")?;
    }
    writeln!(out, "{}", "─".repeat(40))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, score_guess};
    use crate::game::SessionStats;

    fn rendered<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn scored_guess_line() {
        let scored = score_guess(&Word::new("sheet").unwrap(), &Word::new("sweet").unwrap());
        let text = rendered(|out| write_scored_guess(out, 2, &scored));
        assert_eq!(text, "  2. 🟩⬜🟩🟩🟩 SHEET\n");
    }

    #[test]
    fn keyboard_has_three_rows() {
        let text = rendered(|out| write_keyboard(out, &LetterTracker::new()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["  qwertyuiop", "   asdfghjkl", "    zxcvbnm"]);
    }

    #[test]
    fn stats_block() {
        let summary = SessionStats::from_records(vec![3, 3, 0, 4])
            .summary()
            .unwrap();
        let text = rendered(|out| write_stats(out, &summary));

        assert!(text.contains("Played:         4"));
        assert!(text.contains("Win %:          75"));
        assert!(text.contains("Current streak: 1"));
        assert!(text.contains("Max streak:     2"));
        assert!(text.contains(&format!("  3 {} 2", "█".repeat(20))));
        assert!(text.contains(&format!("  1 {} 0", "░".repeat(20))));
    }
}

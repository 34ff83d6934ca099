//! Session statistics
//!
//! One entry per finished game, in play order: the winning turn (1-6) or 0
//! for a loss. Everything else is derived from that list.

use super::MAX_TURNS;

/// Outcomes of the games finished in this session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    records: Vec<u8>,
}

/// Derived view over [`SessionStats`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSummary {
    pub played: usize,
    /// Share of games won, rounded half-to-even
    pub win_percent: u32,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Wins per turn; index 0 is turn 1
    pub distribution: [usize; MAX_TURNS],
}

impl StatsSummary {
    /// Number of wins on `turn` (1-based), 0 outside 1..=6
    #[must_use]
    pub fn wins_on(&self, turn: usize) -> usize {
        turn.checked_sub(1)
            .and_then(|i| self.distribution.get(i))
            .copied()
            .unwrap_or(0)
    }
}

impl SessionStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore from previously saved records (see [`SessionStats::records`])
    #[must_use]
    pub const fn from_records(records: Vec<u8>) -> Self {
        Self { records }
    }

    /// Raw outcomes, for a front end that wants to persist them
    #[must_use]
    pub fn records(&self) -> &[u8] {
        &self.records
    }

    pub(crate) fn record_win(&mut self, turn: usize) {
        self.records.push(turn as u8);
    }

    pub(crate) fn record_loss(&mut self) {
        self.records.push(0);
    }

    /// Number of finished games
    #[must_use]
    pub fn played(&self) -> usize {
        self.records.len()
    }

    /// Lengths of the alternating win/loss runs, loss runs counting as 0
    ///
    /// Keeping the zeros means the last entry is the current streak even
    /// when the latest game was lost.
    fn streaks(&self) -> Vec<usize> {
        self.records
            .chunk_by(|a, b| (*a > 0) == (*b > 0))
            .map(|run| if run[0] > 0 { run.len() } else { 0 })
            .collect()
    }

    /// Summary statistics, or `None` before any game has finished
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::SessionStats;
    ///
    /// let stats = SessionStats::from_records(vec![3, 4, 0, 2]);
    /// let summary = stats.summary().unwrap();
    /// assert_eq!(summary.played, 4);
    /// assert_eq!(summary.win_percent, 75);
    /// assert_eq!(summary.current_streak, 1);
    /// assert_eq!(summary.max_streak, 2);
    ///
    /// assert!(SessionStats::new().summary().is_none());
    /// ```
    #[must_use]
    pub fn summary(&self) -> Option<StatsSummary> {
        let played = self.played();
        if played == 0 {
            return None;
        }

        let wins = self.records.iter().filter(|&&r| r > 0).count();
        let win_percent = (wins as f64 / played as f64 * 100.0).round_ties_even() as u32;

        let streaks = self.streaks();
        let current_streak = streaks.last().copied().unwrap_or(0);
        let max_streak = streaks.iter().copied().max().unwrap_or(0);

        let mut distribution = [0; MAX_TURNS];
        for &turn in &self.records {
            if let Some(slot) = (turn as usize)
                .checked_sub(1)
                .and_then(|i| distribution.get_mut(i))
            {
                *slot += 1;
            }
        }

        Some(StatsSummary {
            played,
            win_percent,
            current_streak,
            max_streak,
            distribution,
        })
    }
}

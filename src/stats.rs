//! Cross-day player statistics
//!
//! One record per player, independent of any single session, updated
//! exactly once when a session completes. Streaks count consecutive
//! winning days in the reference timezone.

use crate::date::PuzzleDate;

/// Aggregate results across days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub last_played: Option<PuzzleDate>,
}

impl Statistics {
    /// Record a won session for `today`.
    ///
    /// The streak continues only if the previous completed game was
    /// yesterday; otherwise it restarts at 1.
    pub fn record_win(&mut self, today: PuzzleDate) {
        self.games_played += 1;
        self.games_won += 1;
        if self.last_played == Some(today.previous()) {
            self.current_streak += 1;
        } else {
            self.current_streak = 1;
        }
        self.max_streak = self.max_streak.max(self.current_streak);
        self.last_played = Some(today);
    }

    /// Record a lost session for `today`. Any streak is broken.
    pub fn record_loss(&mut self, today: PuzzleDate) {
        self.games_played += 1;
        self.current_streak = 0;
        self.last_played = Some(today);
    }

    /// Rounded win percentage, 0 when no games have been played.
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            0
        } else {
            (f64::from(self.games_won) / f64::from(self.games_played) * 100.0).round() as u32
        }
    }
}

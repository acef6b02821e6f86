//! Persisted wire records
//!
//! The external JSON shapes are fixed and camelCased; codes and dates are
//! strings so leading zeros survive. Conversions back into domain types are
//! total but fallible: any malformed field makes the whole record invalid,
//! and callers fall back to a fresh session or default statistics.

use crate::date::PuzzleDate;
use crate::session::{Session, MAX_GUESSES};
use crate::stats::Statistics;
use crate::types::Code;
use serde::{Deserialize, Serialize};

/// Snapshot of one day's session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub date: String,
    pub guesses: Vec<String>,
    pub current_row: u32,
    pub game_over: bool,
    pub target_number: String,
}

impl SessionRecord {
    pub fn from_session(session: &Session) -> Self {
        Self {
            date: session.date().to_string(),
            guesses: session.guesses().iter().map(Code::to_string).collect(),
            current_row: session.current_row() as u32,
            game_over: session.status().is_over(),
            target_number: session.secret().to_string(),
        }
    }

    /// Rebuild the session if the record is well-formed and belongs to
    /// `today`. A record from any other day is stale and yields `None`.
    pub fn restore_for(&self, today: PuzzleDate) -> Option<Session> {
        let date: PuzzleDate = self.date.parse().ok()?;
        if date != today {
            return None;
        }
        let secret = Code::parse(&self.target_number).ok()?;
        let mut guesses = Vec::with_capacity(self.guesses.len());
        for raw in &self.guesses {
            let guess = Code::parse(raw).ok()?;
            // A stored duplicate would violate the session invariants.
            if guesses.contains(&guess) {
                return None;
            }
            guesses.push(guess);
        }
        if guesses.len() > MAX_GUESSES {
            return None;
        }
        Some(Session::restore(
            date,
            secret,
            guesses,
            self.current_row as usize,
        ))
    }
}

/// Snapshot of the cross-day statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRecord {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub last_played_date: Option<String>,
}

impl StatsRecord {
    pub fn from_stats(stats: &Statistics) -> Self {
        Self {
            games_played: stats.games_played,
            games_won: stats.games_won,
            current_streak: stats.current_streak,
            max_streak: stats.max_streak,
            last_played_date: stats.last_played.map(|d| d.to_string()),
        }
    }

    pub fn restore(&self) -> Option<Statistics> {
        if self.games_won > self.games_played || self.current_streak > self.max_streak {
            return None;
        }
        let last_played = match &self.last_played_date {
            Some(raw) => Some(raw.parse().ok()?),
            None => None,
        };
        Some(Statistics {
            games_played: self.games_played,
            games_won: self.games_won,
            current_streak: self.current_streak,
            max_streak: self.max_streak,
            last_played,
        })
    }
}

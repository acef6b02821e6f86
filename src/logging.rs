//! Structured game logging
//!
//! Log entries are collected in memory and never touch the gameplay state,
//! so the engine stays deterministic and side-effect free from the
//! session's perspective. The embedding presentation layer decides what, if
//! anything, to do with them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Log level for game events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

/// One recorded game event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub timestamp: DateTime<Utc>,
    /// Board row the event concerns, if any.
    pub row: Option<usize>,
    /// Guess involved in the event, if any.
    pub guess: Option<String>,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, timestamp: DateTime<Utc>, message: String) -> Self {
        Self {
            level,
            timestamp,
            row: None,
            guess: None,
            message,
        }
    }

    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    pub fn with_guess(mut self, guess: String) -> Self {
        self.guess = Some(guess);
        self
    }
}

/// Collects game events above a minimum level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameLogger {
    entries: Vec<LogEntry>,
    min_level: LogLevel,
}

impl GameLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self {
            entries: Vec::new(),
            min_level,
        }
    }

    /// Logger that records everything.
    pub fn all() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn log(&mut self, entry: LogEntry) {
        if entry.level as u8 >= self.min_level as u8 {
            self.entries.push(entry);
        }
    }

    pub fn debug(&mut self, timestamp: DateTime<Utc>, message: String) {
        self.log(LogEntry::new(LogLevel::Debug, timestamp, message));
    }

    pub fn info(&mut self, timestamp: DateTime<Utc>, message: String) {
        self.log(LogEntry::new(LogLevel::Info, timestamp, message));
    }

    pub fn warn(&mut self, timestamp: DateTime<Utc>, message: String) {
        self.log(LogEntry::new(LogLevel::Warn, timestamp, message));
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn filter_by_level(&self, level: LogLevel) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| e.level == level).collect()
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

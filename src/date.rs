//! Puzzle dates, the fixed reference timezone, and rollover arithmetic
//!
//! Every "same day" decision in the engine — secret generation, snapshot
//! staleness, streak continuity, countdown — goes through one configurable
//! [`ReferenceZone`] so the puzzle rolls over at the same instant for every
//! player regardless of their local timezone.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Offset of the default reference timezone, UTC+5:30.
pub const DEFAULT_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// A calendar day in the reference timezone.
///
/// Two canonical textual forms exist: [`PuzzleDate::seed_key`] is the
/// unpadded `YYYY-M-D` string fed to the daily seed hash, while `Display`
/// and the persisted records use the zero-padded `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleDate(NaiveDate);

impl PuzzleDate {
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Unpadded date string driving the daily seed hash.
    pub fn seed_key(&self) -> String {
        format!("{}-{}-{}", self.0.year(), self.0.month(), self.0.day())
    }

    /// The previous calendar day, used for streak continuity.
    pub fn previous(&self) -> Self {
        // pred_opt is None only at NaiveDate::MIN.
        Self(self.0.pred_opt().unwrap_or(self.0))
    }

    pub fn next(&self) -> Self {
        Self(self.0.succ_opt().unwrap_or(self.0))
    }
}

impl fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for PuzzleDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Self)
    }
}

impl Serialize for PuzzleDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PuzzleDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// The fixed timezone governing daily rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceZone {
    offset: FixedOffset,
}

impl ReferenceZone {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self {
            offset: FixedOffset::east_opt(0).expect("zero offset is always valid"),
        }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Today's puzzle day for a given UTC instant.
    pub fn today(&self, now: DateTime<Utc>) -> PuzzleDate {
        PuzzleDate(now.with_timezone(&self.offset).date_naive())
    }

    /// The UTC instant of the next local midnight, when a fresh puzzle
    /// becomes available.
    pub fn next_rollover(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let local = now.with_timezone(&self.offset);
        let next_day = local.date_naive().succ_opt().unwrap_or(local.date_naive());
        let local_midnight = next_day.and_time(NaiveTime::MIN);
        let naive_utc = local_midnight - Duration::seconds(i64::from(self.offset.local_minus_utc()));
        DateTime::from_naive_utc_and_offset(naive_utc, Utc)
    }

    /// Time remaining until the next rollover. Always positive: exactly at
    /// midnight the result is a full day, since a new puzzle just started.
    pub fn time_until_rollover(&self, now: DateTime<Utc>) -> Duration {
        self.next_rollover(now) - now
    }

    /// Display-ready countdown to the next puzzle.
    pub fn countdown(&self, now: DateTime<Utc>) -> Countdown {
        Countdown::from_duration(self.time_until_rollover(now))
    }
}

impl Default for ReferenceZone {
    fn default() -> Self {
        Self {
            offset: FixedOffset::east_opt(DEFAULT_OFFSET_SECS)
                .expect("default offset is within +/-24h"),
        }
    }
}

/// Hours/minutes/seconds left until the next daily rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    pub fn from_duration(remaining: Duration) -> Self {
        let total = remaining.num_seconds().max(0);
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Source of the current instant, injected so the engine never reads the
/// wall clock directly.
pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Frozen clock for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    pub fn set(&mut self, instant: DateTime<Utc>) {
        self.0 = instant;
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

//! Game orchestrator
//!
//! Ties the session state machine to persistence, statistics, the
//! reference timezone, and an injected clock. Every accepted submission is
//! followed by a full session snapshot; a terminal transition additionally
//! applies exactly one statistics update and snapshots the statistics.

use crate::codec::SnapshotCodec;
use crate::date::{Clock, Countdown, PuzzleDate, ReferenceZone};
use crate::error::{GameError, RejectReason, StoreError};
use crate::logging::GameLogger;
use crate::session::{GameStatus, Session};
use crate::share;
use crate::stats::Statistics;
use crate::store::{Persistence, Store};
use crate::types::GuessResult;
use crate::view::{self, BoardView};
use chrono::{DateTime, Utc};

/// A running game: today's session plus everything around it.
pub struct Game<S: Store, C: SnapshotCodec, K: Clock> {
    persistence: Persistence<S, C>,
    session: Session,
    stats: Statistics,
    zone: ReferenceZone,
    clock: K,
    logger: GameLogger,
}

impl<S: Store, C: SnapshotCodec, K: Clock> Game<S, C, K> {
    /// Restore today's session from the store, or start a fresh one; load
    /// statistics, defaulting when absent. Stale or unreadable snapshots
    /// are silently replaced.
    pub fn resume_or_start(
        mut persistence: Persistence<S, C>,
        zone: ReferenceZone,
        clock: K,
    ) -> Result<Self, StoreError> {
        let now = clock.now_utc();
        let today = zone.today(now);
        let mut logger = GameLogger::default();
        let session = match persistence.load_session(today)? {
            Some(session) => {
                logger.info(
                    now,
                    format!("resumed session for {today} with {} guesses", session.guesses().len()),
                );
                session
            }
            None => {
                logger.info(now, format!("started fresh session for {today}"));
                Session::new(today)
            }
        };
        let stats = persistence.load_stats()?.unwrap_or_default();
        Ok(Self {
            persistence,
            session,
            stats,
            zone,
            clock,
            logger,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    pub fn logger(&self) -> &GameLogger {
        &self.logger
    }

    /// Board projection for rendering.
    pub fn board(&self) -> BoardView {
        view::board(&self.session)
    }

    /// Keypad digits that appear in a submitted guess.
    pub fn keypad_used(&self) -> [bool; 10] {
        self.session.keypad_used()
    }

    /// Clipboard-ready share text.
    pub fn share_text(&self) -> String {
        share::share_text(&self.session)
    }

    /// Countdown until the next puzzle becomes available.
    pub fn countdown(&self) -> Countdown {
        self.zone.countdown(self.clock.now_utc())
    }

    /// The UTC instant of the next daily rollover, for schedulers.
    pub fn next_rollover(&self) -> DateTime<Utc> {
        self.zone.next_rollover(self.clock.now_utc())
    }

    /// Type a digit into the current row.
    pub fn enter_digit(&mut self, digit: u8) -> Result<(), RejectReason> {
        match self.session.enter_digit(digit) {
            Ok(()) => Ok(()),
            Err(reason) => {
                self.logger
                    .warn(self.clock.now_utc(), format!("digit {digit} rejected: {reason}"));
                Err(reason)
            }
        }
    }

    /// Remove the last typed digit.
    pub fn backspace(&mut self) {
        self.session.backspace();
    }

    /// Submit the typed row as a guess.
    pub fn submit_pending(&mut self) -> Result<GuessResult, GameError> {
        match self.session.submit_pending() {
            Ok(result) => {
                self.after_accepted(result)?;
                Ok(result)
            }
            Err(reason) => Err(self.rejected(reason)),
        }
    }

    /// Submit a textual candidate guess.
    pub fn submit(&mut self, candidate: &str) -> Result<GuessResult, GameError> {
        match self.session.submit(candidate) {
            Ok(result) => {
                self.after_accepted(result)?;
                Ok(result)
            }
            Err(reason) => Err(self.rejected(reason)),
        }
    }

    fn rejected(&mut self, reason: RejectReason) -> GameError {
        self.logger
            .warn(self.clock.now_utc(), format!("guess rejected: {reason}"));
        reason.into()
    }

    fn after_accepted(&mut self, result: GuessResult) -> Result<(), StoreError> {
        let now = self.clock.now_utc();
        let row = self.session.guesses().len() - 1;
        self.logger.log(
            crate::logging::LogEntry::new(
                crate::logging::LogLevel::Info,
                now,
                format!("guess accepted: {result}"),
            )
            .with_row(row),
        );
        self.persistence.save_session(&self.session)?;

        match self.session.status() {
            GameStatus::Won => {
                self.stats.record_win(self.session.date());
                self.persistence.save_stats(&self.stats)?;
                self.logger.info(
                    now,
                    format!("puzzle solved in {} guesses", self.session.guesses().len()),
                );
            }
            GameStatus::Lost => {
                self.stats.record_loss(self.session.date());
                self.persistence.save_stats(&self.stats)?;
                self.logger.info(
                    now,
                    format!("out of guesses, the number was {}", self.session.secret()),
                );
            }
            GameStatus::InProgress => {}
        }
        Ok(())
    }

    /// The puzzle day this game is playing.
    pub fn today(&self) -> PuzzleDate {
        self.session.date()
    }
}

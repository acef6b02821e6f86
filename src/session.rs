//! Game session state machine
//!
//! A [`Session`] owns one day's puzzle: the secret, the submitted guesses,
//! the in-progress input buffer, and the terminal status. All transitions
//! are synchronous and validated; a rejected input leaves the session
//! untouched.

use crate::daily::secret_for;
use crate::date::PuzzleDate;
use crate::error::RejectReason;
use crate::evaluator::evaluate;
use crate::types::{Code, GuessResult, CODE_LENGTH};
use serde::{Deserialize, Serialize};

/// Maximum number of guesses per session.
pub const MAX_GUESSES: usize = 9;

/// Lifecycle of a session. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// One day's puzzle session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    date: PuzzleDate,
    secret: Code,
    guesses: Vec<Code>,
    current_row: usize,
    status: GameStatus,
    pending: Vec<u8>,
}

impl Session {
    /// Fresh session for a puzzle date, with the deterministic daily secret.
    pub fn new(date: PuzzleDate) -> Self {
        Self::with_secret(date, secret_for(&date))
    }

    /// Fresh session with an explicit secret (restores and tests).
    pub fn with_secret(date: PuzzleDate, secret: Code) -> Self {
        Self {
            date,
            secret,
            guesses: Vec::new(),
            current_row: 0,
            status: GameStatus::InProgress,
            pending: Vec::new(),
        }
    }

    /// Rebuild a session from persisted parts. The status is recomputed
    /// from the guesses rather than trusted from storage.
    pub(crate) fn restore(
        date: PuzzleDate,
        secret: Code,
        guesses: Vec<Code>,
        current_row: usize,
    ) -> Self {
        let status = match guesses.last() {
            Some(last) if *last == secret => GameStatus::Won,
            _ if guesses.len() >= MAX_GUESSES => GameStatus::Lost,
            _ => GameStatus::InProgress,
        };
        let current_row = if status.is_over() {
            current_row.min(MAX_GUESSES - 1)
        } else {
            guesses.len()
        };
        Self {
            date,
            secret,
            guesses,
            current_row,
            status,
            pending: Vec::new(),
        }
    }

    pub fn date(&self) -> PuzzleDate {
        self.date
    }

    pub fn secret(&self) -> Code {
        self.secret
    }

    pub fn guesses(&self) -> &[Code] {
        &self.guesses
    }

    /// Board row the next digit lands in. While in progress this equals the
    /// number of guesses made; after a terminal guess it stays on that row.
    pub fn current_row(&self) -> usize {
        self.current_row
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Digits typed into the not-yet-submitted row.
    pub fn pending_digits(&self) -> &[u8] {
        &self.pending
    }

    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES - self.guesses.len()
    }

    /// Scores of all submitted guesses, in submission order. Results are
    /// derived, never stored.
    pub fn results(&self) -> Vec<GuessResult> {
        self.guesses
            .iter()
            .map(|guess| evaluate(guess, &self.secret))
            .collect()
    }

    /// Which keypad digits appear in a submitted guess.
    pub fn keypad_used(&self) -> [bool; 10] {
        let mut used = [false; 10];
        for guess in &self.guesses {
            for digit in guess.digits() {
                used[usize::from(digit)] = true;
            }
        }
        used
    }

    /// Append a digit to the input buffer.
    ///
    /// A digit already in the buffer is rejected at entry time, before any
    /// submission. Input into a full buffer is ignored, as is anything the
    /// keypad cannot emit.
    pub fn enter_digit(&mut self, digit: u8) -> Result<(), RejectReason> {
        if self.status.is_over() {
            return Err(RejectReason::GameAlreadyOver);
        }
        if digit > 9 || self.pending.len() >= CODE_LENGTH {
            return Ok(());
        }
        if self.pending.contains(&digit) {
            return Err(RejectReason::DuplicateDigit { digit });
        }
        self.pending.push(digit);
        Ok(())
    }

    /// Remove the most recently entered digit, if any.
    pub fn backspace(&mut self) {
        if !self.status.is_over() {
            self.pending.pop();
        }
    }

    /// Submit the buffered digits as a guess.
    pub fn submit_pending(&mut self) -> Result<GuessResult, RejectReason> {
        if self.status.is_over() {
            return Err(RejectReason::GameAlreadyOver);
        }
        if self.pending.len() != CODE_LENGTH {
            return Err(RejectReason::WrongLength);
        }
        let mut digits = [0u8; CODE_LENGTH];
        digits.copy_from_slice(&self.pending);
        let code = Code::from_digits(digits)?;
        self.submit_code(code)
    }

    /// Submit a textual candidate guess.
    ///
    /// Preconditions are checked in order: the session must be in progress,
    /// the candidate must be exactly four digits, the digits must be
    /// pairwise unique, and the combination must not have been tried
    /// before in this session.
    pub fn submit(&mut self, candidate: &str) -> Result<GuessResult, RejectReason> {
        if self.status.is_over() {
            return Err(RejectReason::GameAlreadyOver);
        }
        let code = Code::parse(candidate)?;
        self.submit_code(code)
    }

    fn submit_code(&mut self, code: Code) -> Result<GuessResult, RejectReason> {
        if self.status.is_over() {
            return Err(RejectReason::GameAlreadyOver);
        }
        if self.guesses.contains(&code) {
            return Err(RejectReason::AlreadyTried {
                guess: code.to_string(),
            });
        }

        let result = evaluate(&code, &self.secret);
        self.guesses.push(code);
        self.pending.clear();

        if result.is_win() {
            self.status = GameStatus::Won;
        } else if self.guesses.len() == MAX_GUESSES {
            self.status = GameStatus::Lost;
        } else {
            self.current_row = self.guesses.len();
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_secret(secret: &str) -> Session {
        let date = PuzzleDate::new(2025, 8, 28).unwrap();
        Session::with_secret(date, Code::parse(secret).unwrap())
    }

    // Nine distinct wrong guesses against secret 1234.
    const WRONG_GUESSES: [&str; 9] = [
        "0567", "1567", "2567", "3567", "4567", "8567", "9567", "0657", "0675",
    ];

    #[test]
    fn test_new_session_uses_daily_secret() {
        let date = PuzzleDate::new(2025, 8, 28).unwrap();
        let session = Session::new(date);
        assert_eq!(session.secret().to_string(), "0416");
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.current_row(), 0);
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn test_winning_submission() {
        let mut session = session_with_secret("1234");
        let result = session.submit("1234").unwrap();
        assert!(result.is_win());
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.current_row(), 0, "terminal guess does not advance the row");
    }

    #[test]
    fn test_row_advances_while_in_progress() {
        let mut session = session_with_secret("1234");
        session.submit("5678").unwrap();
        assert_eq!(session.current_row(), 1);
        assert_eq!(session.current_row(), session.guesses().len());
        session.submit("5679").unwrap();
        assert_eq!(session.current_row(), 2);
    }

    #[test]
    fn test_ninth_miss_loses() {
        let mut session = session_with_secret("1234");
        for guess in &WRONG_GUESSES[..8] {
            session.submit(guess).unwrap();
            assert_eq!(session.status(), GameStatus::InProgress);
        }
        let result = session.submit(WRONG_GUESSES[8]).unwrap();
        assert!(!result.is_win());
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.guesses().len(), MAX_GUESSES);
        assert_eq!(session.remaining_guesses(), 0);
    }

    #[test]
    fn test_win_on_final_guess_beats_loss() {
        let mut session = session_with_secret("1234");
        for guess in &WRONG_GUESSES[..8] {
            session.submit(guess).unwrap();
        }
        let result = session.submit("1234").unwrap();
        assert!(result.is_win());
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn test_no_submission_after_terminal() {
        let mut session = session_with_secret("1234");
        session.submit("1234").unwrap();
        assert_eq!(
            session.submit("5678"),
            Err(RejectReason::GameAlreadyOver)
        );
        assert_eq!(session.guesses().len(), 1);
    }

    #[test]
    fn test_repeat_guess_rejected_and_count_unchanged() {
        let mut session = session_with_secret("1234");
        session.submit("5678").unwrap();
        let err = session.submit("5678").unwrap_err();
        assert_eq!(
            err,
            RejectReason::AlreadyTried {
                guess: "5678".to_string()
            }
        );
        assert_eq!(session.guesses().len(), 1);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_wrong_length_and_duplicate_rejected() {
        let mut session = session_with_secret("1234");
        assert_eq!(session.submit("123"), Err(RejectReason::WrongLength));
        assert_eq!(
            session.submit("1123"),
            Err(RejectReason::DuplicateDigit { digit: 1 })
        );
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn test_entry_time_duplicate_rejection() {
        let mut session = session_with_secret("1234");
        session.enter_digit(1).unwrap();
        let err = session.enter_digit(1).unwrap_err();
        assert_eq!(err, RejectReason::DuplicateDigit { digit: 1 });
        // The duplicate never reached the buffer, let alone a submission.
        assert_eq!(session.pending_digits(), &[1]);
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn test_buffer_ignores_overflow_and_backspace_edits() {
        let mut session = session_with_secret("1234");
        for d in [5, 6, 7, 8] {
            session.enter_digit(d).unwrap();
        }
        session.enter_digit(9).unwrap();
        assert_eq!(session.pending_digits(), &[5, 6, 7, 8]);
        session.backspace();
        assert_eq!(session.pending_digits(), &[5, 6, 7]);
        session.enter_digit(9).unwrap();
        assert_eq!(session.pending_digits(), &[5, 6, 7, 9]);
    }

    #[test]
    fn test_submit_pending_requires_full_buffer() {
        let mut session = session_with_secret("1234");
        session.enter_digit(1).unwrap();
        session.enter_digit(2).unwrap();
        assert_eq!(session.submit_pending(), Err(RejectReason::WrongLength));
        session.enter_digit(3).unwrap();
        session.enter_digit(4).unwrap();
        let result = session.submit_pending().unwrap();
        assert!(result.is_win());
        assert!(session.pending_digits().is_empty());
    }

    #[test]
    fn test_entry_rejected_after_terminal() {
        let mut session = session_with_secret("1234");
        session.submit("1234").unwrap();
        assert_eq!(session.enter_digit(5), Err(RejectReason::GameAlreadyOver));
    }

    #[test]
    fn test_results_are_recomputed_in_order() {
        let mut session = session_with_secret("1234");
        session.submit("1243").unwrap();
        session.submit("5678").unwrap();
        let results = session.results();
        assert_eq!(
            results[0],
            GuessResult {
                correct: 2,
                present: 2
            }
        );
        assert_eq!(
            results[1],
            GuessResult {
                correct: 0,
                present: 0
            }
        );
    }

    #[test]
    fn test_keypad_used_flags() {
        let mut session = session_with_secret("1234");
        session.submit("5678").unwrap();
        let used = session.keypad_used();
        for d in [5, 6, 7, 8] {
            assert!(used[d]);
        }
        for d in [0, 1, 2, 3, 4, 9] {
            assert!(!used[d]);
        }
    }

    #[test]
    fn test_restore_recomputes_status() {
        let date = PuzzleDate::new(2025, 8, 28).unwrap();
        let secret = Code::parse("1234").unwrap();
        let guesses = vec![Code::parse("5678").unwrap(), Code::parse("1234").unwrap()];
        let session = Session::restore(date, secret, guesses, 1);
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.current_row(), 1);

        let in_progress = Session::restore(
            date,
            secret,
            vec![Code::parse("5678").unwrap()],
            1,
        );
        assert_eq!(in_progress.status(), GameStatus::InProgress);
        assert_eq!(in_progress.current_row(), 1);
    }
}

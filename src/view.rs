//! Read-only projections for a presentation layer
//!
//! The presentation layer only ever observes these views and feeds back the
//! three input events (digit, backspace, submit); it never touches session
//! state directly.

use crate::evaluator::{evaluate, mark_positions};
use crate::session::{Session, MAX_GUESSES};
use crate::types::{DigitMark, GuessResult, CODE_LENGTH};

/// One board row: the digits typed into it and, once submitted, its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub digits: Vec<u8>,
    pub marks: Option<[DigitMark; CODE_LENGTH]>,
    pub result: Option<GuessResult>,
}

impl RowView {
    fn empty() -> Self {
        Self {
            digits: Vec::new(),
            marks: None,
            result: None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.result.is_some()
    }
}

/// The full board: always [`MAX_GUESSES`] rows, submitted rows first, then
/// the in-progress row (if the game continues), then empty rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub rows: Vec<RowView>,
}

/// Project the board from a session.
pub fn board(session: &Session) -> BoardView {
    let secret = session.secret();
    let mut rows = Vec::with_capacity(MAX_GUESSES);
    for guess in session.guesses() {
        rows.push(RowView {
            digits: guess.digits().to_vec(),
            marks: Some(mark_positions(guess, &secret)),
            result: Some(evaluate(guess, &secret)),
        });
    }
    if !session.status().is_over() && rows.len() < MAX_GUESSES {
        rows.push(RowView {
            digits: session.pending_digits().to_vec(),
            marks: None,
            result: None,
        });
    }
    while rows.len() < MAX_GUESSES {
        rows.push(RowView::empty());
    }
    BoardView { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::PuzzleDate;
    use crate::types::Code;

    fn session() -> Session {
        let date = PuzzleDate::new(2025, 8, 28).unwrap();
        Session::with_secret(date, Code::parse("1234").unwrap())
    }

    #[test]
    fn test_board_always_has_nine_rows() {
        let session = session();
        assert_eq!(board(&session).rows.len(), MAX_GUESSES);
    }

    #[test]
    fn test_submitted_row_carries_marks_and_score() {
        let mut session = session();
        session.submit("1243").unwrap();
        let view = board(&session);
        let row = &view.rows[0];
        assert!(row.is_submitted());
        assert_eq!(row.digits, vec![1, 2, 4, 3]);
        assert_eq!(
            row.result,
            Some(GuessResult {
                correct: 2,
                present: 2
            })
        );
        assert_eq!(
            row.marks,
            Some([
                DigitMark::Correct,
                DigitMark::Correct,
                DigitMark::Present,
                DigitMark::Present,
            ])
        );
    }

    #[test]
    fn test_pending_digits_show_in_current_row() {
        let mut session = session();
        session.submit("5678").unwrap();
        session.enter_digit(9).unwrap();
        session.enter_digit(0).unwrap();
        let view = board(&session);
        let row = &view.rows[1];
        assert!(!row.is_submitted());
        assert_eq!(row.digits, vec![9, 0]);
        assert!(view.rows[2].digits.is_empty());
    }

    #[test]
    fn test_terminal_board_has_no_pending_row() {
        let mut session = session();
        session.submit("1234").unwrap();
        let view = board(&session);
        assert!(view.rows[0].is_submitted());
        assert!(view.rows[1..].iter().all(|r| r.digits.is_empty() && !r.is_submitted()));
    }
}

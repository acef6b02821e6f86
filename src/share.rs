//! Exported share text
//!
//! The template is fixed: a header with the puzzle date, the attempt count
//! ("X" on a loss), a blank line, then one score line per guess in
//! submission order. Scores only — the digits themselves never leak, so a
//! shared result spoils nothing.

use crate::session::{GameStatus, Session, MAX_GUESSES};
use std::fmt::Write;

/// Render the clipboard-ready share text for a finished (or in-progress)
/// session.
pub fn share_text(session: &Session) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Hardnumber {}", session.date());
    if session.status() == GameStatus::Won {
        let _ = writeln!(text, "{}/{}", session.current_row() + 1, MAX_GUESSES);
    } else {
        let _ = writeln!(text, "X/{MAX_GUESSES}");
    }
    let _ = writeln!(text);
    for result in session.results() {
        let _ = writeln!(text, "{result}");
    }
    text
}

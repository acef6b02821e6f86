//! Pure guess scoring
//!
//! Digits are unique within both guess and secret, so every position maps
//! to exactly one of correct / present / absent and no duplicate-counting
//! rules (as in letter-based variants) are needed.

use crate::types::{Code, DigitMark, GuessResult, CODE_LENGTH};

/// Score a guess against the secret.
pub fn evaluate(guess: &Code, secret: &Code) -> GuessResult {
    let mut correct = 0;
    let mut present = 0;
    for i in 0..CODE_LENGTH {
        if guess.digit(i) == secret.digit(i) {
            correct += 1;
        } else if secret.contains(guess.digit(i)) {
            present += 1;
        }
    }
    GuessResult { correct, present }
}

/// Per-position classification for board rendering.
pub fn mark_positions(guess: &Code, secret: &Code) -> [DigitMark; CODE_LENGTH] {
    let mut marks = [DigitMark::Absent; CODE_LENGTH];
    for (i, mark) in marks.iter_mut().enumerate() {
        *mark = if guess.digit(i) == secret.digit(i) {
            DigitMark::Correct
        } else if secret.contains(guess.digit(i)) {
            DigitMark::Present
        } else {
            DigitMark::Absent
        };
    }
    marks
}

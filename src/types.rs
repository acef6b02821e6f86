//! Core value types shared by the generator, evaluator, and session

use crate::error::RejectReason;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a secret or guess.
pub const CODE_LENGTH: usize = 4;

/// An ordered sequence of exactly four pairwise-distinct decimal digits.
///
/// Both the daily secret and every submitted guess are `Code` values. Digit
/// zero is valid anywhere, including the leading position, so the canonical
/// textual form is always four characters ("0416", never "416"). A `Code`
/// cannot be constructed with a repeated or out-of-range digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([u8; CODE_LENGTH]);

impl Code {
    /// Build a code from raw digit values.
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Result<Self, RejectReason> {
        for (i, &d) in digits.iter().enumerate() {
            if d > 9 {
                return Err(RejectReason::WrongLength);
            }
            if digits[..i].contains(&d) {
                return Err(RejectReason::DuplicateDigit { digit: d });
            }
        }
        Ok(Self(digits))
    }

    /// Parse the four-character textual form.
    ///
    /// Anything that is not exactly four decimal digits is `WrongLength`;
    /// a repeated digit is `DuplicateDigit`.
    pub fn parse(s: &str) -> Result<Self, RejectReason> {
        let mut digits = [0u8; CODE_LENGTH];
        let mut len = 0;
        for ch in s.chars() {
            let d = ch.to_digit(10).ok_or(RejectReason::WrongLength)?;
            if len == CODE_LENGTH {
                return Err(RejectReason::WrongLength);
            }
            digits[len] = d as u8;
            len += 1;
        }
        if len != CODE_LENGTH {
            return Err(RejectReason::WrongLength);
        }
        Self::from_digits(digits)
    }

    pub fn digits(&self) -> [u8; CODE_LENGTH] {
        self.0
    }

    /// Digit at a board position (0-based, left to right).
    pub fn digit(&self, position: usize) -> u8 {
        self.0[position]
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = RejectReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Code::parse(&s).map_err(de::Error::custom)
    }
}

/// Score of one guess against the secret.
///
/// `correct` counts digits matching in both value and position; `present`
/// counts digits that occur in the secret but elsewhere. A position is never
/// counted in both categories, so `correct + present <= 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResult {
    pub correct: u8,
    pub present: u8,
}

impl GuessResult {
    pub fn is_win(&self) -> bool {
        usize::from(self.correct) == CODE_LENGTH
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{1f7e2}{} \u{1f7e1}{}", self.correct, self.present)
    }
}

/// Classification of a single guess position, used by board rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigitMark {
    /// Right digit in the right position.
    Correct,
    /// Digit occurs in the secret, but at another position.
    Present,
    /// Digit does not occur in the secret at all.
    Absent,
}

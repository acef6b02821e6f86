//! Deterministic daily secret generation
//!
//! The secret is a pure function of the puzzle date: the unpadded date
//! string is folded into a 32-bit signed accumulator with a polynomial
//! hash, which seeds a small linear-congruential generator. Digits are
//! drawn until four unique ones are collected, and their acceptance order
//! is their positional order. No other randomness source is consulted, so
//! every player sees the same puzzle on the same day.

use crate::date::PuzzleDate;
use crate::types::{Code, CODE_LENGTH};

const LCG_MULTIPLIER: i64 = 9301;
const LCG_INCREMENT: i64 = 49297;
const LCG_MODULUS: i64 = 233280;

/// Fold a date key into a 32-bit signed seed (`seed*31 + byte`, wrapping).
fn date_seed(key: &str) -> i32 {
    key.bytes()
        .fold(0i32, |seed, byte| seed.wrapping_mul(31).wrapping_add(i32::from(byte)))
}

/// Linear-congruential generator over `[0, 233280)`.
///
/// The state is reduced with a Euclidean remainder so a negative date hash
/// still yields draws in range.
#[derive(Debug, Clone)]
struct Lcg {
    seed: i64,
}

impl Lcg {
    fn new(seed: i32) -> Self {
        Self {
            seed: i64::from(seed),
        }
    }

    /// Advance the state and draw a value in `[0, max)`.
    fn draw(&mut self, max: i64) -> u8 {
        self.seed = (self.seed * LCG_MULTIPLIER + LCG_INCREMENT).rem_euclid(LCG_MODULUS);
        // Exact floor(seed / modulus * max); state and max are small enough
        // that the product cannot overflow.
        (self.seed * max / LCG_MODULUS) as u8
    }
}

/// The secret code for a puzzle date. Pure and deterministic.
pub fn secret_for(date: &PuzzleDate) -> Code {
    let mut lcg = Lcg::new(date_seed(&date.seed_key()));
    let mut digits = [0u8; CODE_LENGTH];
    let mut count = 0;
    while count < CODE_LENGTH {
        let digit = lcg.draw(10);
        if !digits[..count].contains(&digit) {
            digits[count] = digit;
            count += 1;
        }
    }
    // Digits are unique and in range by construction.
    Code::from_digits(digits).expect("drawn digits are unique and within 0..=9")
}

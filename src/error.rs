//! Error types for the daily puzzle engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("Rejected: {0}")]
    Reject(#[from] RejectReason),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// User-facing rejection of a gameplay input.
///
/// Every variant is recoverable: the session is left untouched and the
/// player can immediately try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("the puzzle is already finished for today")]
    GameAlreadyOver,

    #[error("a guess must be exactly 4 digits")]
    WrongLength,

    #[error("digit {digit} already used: all digits must be unique")]
    DuplicateDigit { digit: u8 },

    #[error("combination {guess} was already tried")]
    AlreadyTried { guess: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O failure on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot encoding failed: {reason}")]
    Encode { reason: String },

    #[error("snapshot decoding failed: {reason}")]
    Decode { reason: String },
}

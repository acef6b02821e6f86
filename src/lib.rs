//! Hardnumber — daily number-guessing puzzle engine
//!
//! One puzzle per calendar day, shared by everyone: a secret 4-digit code
//! with unique digits, derived deterministically from the date. The crate
//! provides the whole engine — daily secret generation, guess scoring, the
//! session state machine, persisted resumable state and cross-day
//! statistics — while rendering stays with the embedding application.

pub mod codec;
pub mod daily;
pub mod date;
pub mod error;
pub mod evaluator;
pub mod game;
pub mod integrity;
pub mod logging;
pub mod records;
pub mod session;
pub mod share;
pub mod stats;
pub mod store;
pub mod types;
pub mod view;

// Re-export the core API surface
pub use codec::{BincodeCodec, JsonCodec, SnapshotCodec};
pub use daily::secret_for;
pub use date::{
    Clock, Countdown, FixedClock, PuzzleDate, ReferenceZone, SystemClock, DEFAULT_OFFSET_SECS,
};
pub use error::{GameError, RejectReason, StoreError};
pub use evaluator::{evaluate, mark_positions};
pub use game::Game;
pub use integrity::{Checksum, SnapshotHasher};
pub use logging::{GameLogger, LogEntry, LogLevel};
pub use records::{SessionRecord, StatsRecord};
pub use session::{GameStatus, Session, MAX_GUESSES};
pub use share::share_text;
pub use stats::Statistics;
pub use store::{FileStore, MemoryStore, Persistence, Store, SESSION_KEY, STATS_KEY};
pub use types::{Code, DigitMark, GuessResult, CODE_LENGTH};
pub use view::{board, BoardView, RowView};

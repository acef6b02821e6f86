//! Snapshot storage backends and the typed persistence facade
//!
//! A [`Store`] is a small keyed byte store (the original kept these records
//! under two browser localStorage keys; the same key names survive here).
//! [`Persistence`] layers the codec, integrity checks, and staleness rules
//! on top, exposing the typed save/load contract the game uses. Read
//! failures of any kind degrade to "no prior state" and are never surfaced
//! to the player.

use crate::codec::{JsonCodec, SnapshotCodec};
use crate::date::PuzzleDate;
use crate::error::StoreError;
use crate::integrity::SnapshotHasher;
use crate::records::{SessionRecord, StatsRecord};
use crate::session::Session;
use crate::stats::Statistics;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Key under which the day's session snapshot is stored.
pub const SESSION_KEY: &str = "numberguess-state";
/// Key under which the cross-day statistics are stored.
pub const STATS_KEY: &str = "numberguess-stats";

/// Keyed byte storage for snapshots.
pub trait Store {
    fn put(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Read a snapshot. `Ok(None)` covers both "never written" and
    /// "unreadable" — the distinction never matters to callers.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store, primarily for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn put(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store: one snapshot file per key plus a hex Blake3 checksum
/// sidecar. A missing or mismatching sidecar makes the snapshot read as
/// absent.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    hasher: SnapshotHasher,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| io_error(&dir, e))?;
        Ok(Self {
            dir,
            hasher: SnapshotHasher::new(),
        })
    }

    fn snapshot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.snap"))
    }

    fn checksum_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.sum"))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

impl Store for FileStore {
    fn put(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let snapshot = self.snapshot_path(key);
        fs::write(&snapshot, bytes).map_err(|e| io_error(&snapshot, e))?;
        let sum = self.checksum_path(key);
        fs::write(&sum, self.hasher.checksum(bytes).to_string()).map_err(|e| io_error(&sum, e))?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let snapshot = self.snapshot_path(key);
        let bytes = match fs::read(&snapshot) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(&snapshot, e)),
        };
        let sum_path = self.checksum_path(key);
        let raw_sum = match fs::read_to_string(&sum_path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(&sum_path, e)),
        };
        let verified = crate::integrity::Checksum::from_hex(&raw_sum)
            .is_some_and(|expected| self.hasher.verify(&bytes, &expected));
        if verified {
            Ok(Some(bytes))
        } else {
            Ok(None)
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        for path in [self.snapshot_path(key), self.checksum_path(key)] {
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(io_error(&path, e)),
            }
        }
        Ok(())
    }
}

/// Typed persistence facade over a store and a codec.
#[derive(Debug)]
pub struct Persistence<S: Store, C: SnapshotCodec> {
    store: S,
    codec: C,
}

impl<S: Store> Persistence<S, JsonCodec> {
    /// Store with the default JSON encoding.
    pub fn json(store: S) -> Self {
        Self::new(store, JsonCodec::new())
    }
}

impl<S: Store, C: SnapshotCodec> Persistence<S, C> {
    pub fn new(store: S, codec: C) -> Self {
        Self { store, codec }
    }

    /// Snapshot the full session. Called after every accepted submission.
    pub fn save_session(&mut self, session: &Session) -> Result<(), StoreError> {
        let bytes = self.codec.encode(&SessionRecord::from_session(session))?;
        self.store.put(SESSION_KEY, &bytes)
    }

    /// Load the session for `today`, discarding any stale or unreadable
    /// snapshot. Old data is removed, never migrated.
    pub fn load_session(&mut self, today: PuzzleDate) -> Result<Option<Session>, StoreError> {
        let Some(bytes) = self.store.get(SESSION_KEY)? else {
            return Ok(None);
        };
        let restored = self
            .codec
            .decode::<SessionRecord>(&bytes)
            .ok()
            .and_then(|record| record.restore_for(today));
        if restored.is_none() {
            self.store.remove(SESSION_KEY)?;
        }
        Ok(restored)
    }

    pub fn save_stats(&mut self, stats: &Statistics) -> Result<(), StoreError> {
        let bytes = self.codec.encode(&StatsRecord::from_stats(stats))?;
        self.store.put(STATS_KEY, &bytes)
    }

    /// Load statistics; an unreadable record reads as never-played.
    pub fn load_stats(&mut self) -> Result<Option<Statistics>, StoreError> {
        let Some(bytes) = self.store.get(STATS_KEY)? else {
            return Ok(None);
        };
        Ok(self
            .codec
            .decode::<StatsRecord>(&bytes)
            .ok()
            .and_then(|record| record.restore()))
    }

    pub fn clear_session(&mut self) -> Result<(), StoreError> {
        self.store.remove(SESSION_KEY)
    }
}

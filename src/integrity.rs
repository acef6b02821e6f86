//! Snapshot integrity checksums using Blake3
//!
//! Each persisted snapshot carries a checksum of its encoded bytes. A
//! mismatch on read marks the snapshot as corrupt, and the persistence
//! layer treats it exactly like a missing record.

use blake3::Hasher as Blake3Hasher;
use std::fmt;

/// 32-byte Blake3 checksum of an encoded snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum([u8; 32]);

impl Checksum {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse the hex form written to checksum sidecars.
    pub fn from_hex(raw: &str) -> Option<Self> {
        let bytes = hex::decode(raw.trim()).ok()?;
        let bytes: [u8; 32] = bytes.try_into().ok()?;
        Some(Self(bytes))
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Computes and verifies snapshot checksums.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotHasher;

impl SnapshotHasher {
    pub fn new() -> Self {
        Self
    }

    pub fn checksum(&self, bytes: &[u8]) -> Checksum {
        let mut hasher = Blake3Hasher::new();
        hasher.update(bytes);
        Checksum(*hasher.finalize().as_bytes())
    }

    pub fn verify(&self, bytes: &[u8], expected: &Checksum) -> bool {
        self.checksum(bytes) == *expected
    }
}

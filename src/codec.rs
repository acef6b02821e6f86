//! Pluggable snapshot encoding
//!
//! Snapshots are JSON by default so stored state stays inspectable; a
//! bincode backend is available where compactness matters more.

use crate::error::StoreError;
use serde::{de::DeserializeOwned, Serialize};

/// Encoding backend for persisted records.
pub trait SnapshotCodec: Send + Sync {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, StoreError>;

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, StoreError>;

    /// Name of this encoding, for diagnostics.
    fn name(&self) -> &str;
}

/// JSON snapshot encoding.
#[derive(Debug, Clone)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn new_pretty() -> Self {
        Self { pretty: true }
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotCodec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, StoreError> {
        let result = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        };
        result.map_err(|e| StoreError::Encode {
            reason: format!("JSON encoding failed: {e}"),
        })
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, StoreError> {
        serde_json::from_slice(bytes).map_err(|e| StoreError::Decode {
            reason: format!("JSON decoding failed: {e}"),
        })
    }

    fn name(&self) -> &str {
        "json"
    }
}

/// Bincode snapshot encoding.
#[derive(Debug, Clone, Default)]
pub struct BincodeCodec;

impl BincodeCodec {
    pub fn new() -> Self {
        Self
    }
}

impl SnapshotCodec for BincodeCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, StoreError> {
        bincode::serialize(value).map_err(|e| StoreError::Encode {
            reason: format!("bincode encoding failed: {e}"),
        })
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, StoreError> {
        bincode::deserialize(bytes).map_err(|e| StoreError::Decode {
            reason: format!("bincode decoding failed: {e}"),
        })
    }

    fn name(&self) -> &str {
        "bincode"
    }
}

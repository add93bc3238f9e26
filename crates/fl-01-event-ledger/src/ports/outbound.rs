//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the Event Ledger service. These are the
//! interfaces the host application must provide; the `adapters` module
//! ships in-memory and file-backed implementations.

use crate::domain::errors::{KVStoreError, SerializationError};
use shared_types::{BlockNumber, LedgerEntry, Timestamp};

/// Abstract interface for key-value database operations.
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError>;

    /// Put a single key-value pair.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError>;

    /// Execute an atomic batch write.
    ///
    /// ## Atomicity Guarantee (Invariant 5)
    ///
    /// Either ALL operations in the batch succeed, or NONE are applied.
    /// The ledger relies on this to keep the digest set, entry log, and
    /// flight index mutually consistent.
    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError>;

    /// Iterate over keys with a prefix.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, KVStoreError>;
}

/// Batch operation for atomic writes.
#[derive(Debug, Clone)]
pub enum BatchOperation {
    /// Put a key-value pair.
    Put { key: Vec<u8>, value: Vec<u8> },
}

impl BatchOperation {
    /// Create a Put operation.
    pub fn put(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Put {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Get current timestamp in seconds since epoch.
    fn now(&self) -> Timestamp;
}

/// Abstract interface for the current block number.
///
/// The ledger stamps every entry with the block at which it was recorded;
/// in production this is the chain substrate's height, in tests a counter.
pub trait BlockSource: Send + Sync {
    /// Get the current block number.
    fn current_block(&self) -> BlockNumber;
}

/// Abstract interface for entry serialization.
pub trait EntrySerializer: Send + Sync {
    /// Serialize a LedgerEntry to bytes.
    fn serialize(&self, entry: &LedgerEntry) -> Result<Vec<u8>, SerializationError>;

    /// Deserialize bytes to a LedgerEntry.
    fn deserialize(&self, data: &[u8]) -> Result<LedgerEntry, SerializationError>;

    /// Serialize a flight's index list.
    fn serialize_indices(&self, indices: &[u64]) -> Result<Vec<u8>, SerializationError>;

    /// Deserialize a flight's index list.
    fn deserialize_indices(&self, data: &[u8]) -> Result<Vec<u64>, SerializationError>;
}

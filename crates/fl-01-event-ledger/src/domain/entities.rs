//! # Domain Entities
//!
//! In-memory structures the ledger service maintains alongside the backing
//! store: the per-flight index and the global metadata. The `LedgerEntry`
//! itself lives in `shared-types` because fl-02 consumes it verbatim.

use serde::{Deserialize, Serialize};
use shared_types::{BlockNumber, Digest};
use std::collections::HashMap;

/// Mapping from flight identifier to the ordered list of its entry indices.
///
/// Maintained incrementally at insertion time; this is the sole index
/// structure for per-flight lookup (Invariant 4). Indices are appended in
/// insertion order and never reordered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightIndex {
    /// flight_id -> indices in insertion order.
    entries: HashMap<String, Vec<u64>>,
}

impl FlightIndex {
    /// Create a new empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Append an entry index to a flight's list.
    pub fn append(&mut self, flight_id: &str, index: u64) {
        self.entries
            .entry(flight_id.to_string())
            .or_default()
            .push(index);
    }

    /// Get the ordered indices for a flight.
    ///
    /// Returns the empty slice for an unknown flight (not an error).
    #[must_use]
    pub fn indices_for(&self, flight_id: &str) -> &[u64] {
        self.entries
            .get(flight_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of entries recorded for a flight.
    #[must_use]
    pub fn count_for(&self, flight_id: &str) -> u64 {
        self.indices_for(flight_id).len() as u64
    }

    /// Number of distinct flights with at least one entry.
    #[must_use]
    pub fn flight_count(&self) -> usize {
        self.entries.len()
    }

    /// Restore a flight's full index list (used when rebuilding from storage).
    pub fn restore(&mut self, flight_id: String, indices: Vec<u64>) {
        self.entries.insert(flight_id, indices);
    }
}

/// Global ledger metadata.
///
/// Tracks the overall state of the ledger subsystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerMetadata {
    /// Total number of entries appended (equals the next index to assign).
    pub total_entries: u64,
    /// Block number of the most recent insertion.
    pub latest_block: BlockNumber,
    /// Storage format version for migrations.
    pub storage_version: u16,
}

impl LedgerMetadata {
    /// Update metadata after appending an entry.
    pub fn on_entry_appended(&mut self, block: BlockNumber) {
        self.total_entries += 1;
        if block > self.latest_block {
            self.latest_block = block;
        }
    }

    /// The index the next successful insertion will be assigned.
    #[must_use]
    pub fn next_index(&self) -> u64 {
        self.total_entries
    }
}

/// Key prefixes for the backing key-value store.
///
/// Layout:
/// - `e:{index}`  -> serialized `LedgerEntry`
/// - `d:{digest}` -> 8-byte big-endian index holding that digest
/// - `f:{flight}` -> serialized `Vec<u64>` of entry indices
/// - `m:ledger`   -> serialized `LedgerMetadata`
pub struct KeyPrefix;

impl KeyPrefix {
    pub const ENTRY: &'static [u8] = b"e:";
    pub const DIGEST: &'static [u8] = b"d:";
    pub const FLIGHT: &'static [u8] = b"f:";
    pub const METADATA: &'static [u8] = b"m:ledger";

    /// Key for the entry at `index`.
    #[must_use]
    pub fn entry_key(index: u64) -> Vec<u8> {
        let mut key = Self::ENTRY.to_vec();
        key.extend_from_slice(&index.to_be_bytes());
        key
    }

    /// Key for the digest-set membership record.
    #[must_use]
    pub fn digest_key(digest: &Digest) -> Vec<u8> {
        let mut key = Self::DIGEST.to_vec();
        key.extend_from_slice(digest);
        key
    }

    /// Key for a flight's index list.
    #[must_use]
    pub fn flight_key(flight_id: &str) -> Vec<u8> {
        let mut key = Self::FLIGHT.to_vec();
        key.extend_from_slice(flight_id.as_bytes());
        key
    }

    /// Key for the global metadata record.
    #[must_use]
    pub fn metadata_key() -> Vec<u8> {
        Self::METADATA.to_vec()
    }
}

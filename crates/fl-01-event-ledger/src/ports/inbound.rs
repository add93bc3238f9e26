//! # Inbound Ports (Driving Ports)
//!
//! The API the Event Ledger offers to callers.

use crate::domain::errors::LedgerError;
use shared_types::{Digest, LedgerEntry};

/// A pending insertion, used by the batch operation.
#[derive(Debug, Clone)]
pub struct InsertRequest {
    pub flight_id: String,
    pub event_type: String,
    pub timestamp: u64,
    pub actor: String,
    pub digest: Digest,
}

/// The Event Ledger API.
///
/// `insert` is the only mutation point; everything else is a read. There is
/// deliberately no caller-identity parameter anywhere: any holder of a valid
/// tuple may insert, and integrity rests entirely on digest dedup.
pub trait EventLedgerApi {
    /// Append a new entry.
    ///
    /// Exactly the five positional fields; the ledger assigns the index,
    /// block, and insertion time itself. Fails without partial effects on
    /// invalid input or a duplicate digest.
    fn insert(
        &mut self,
        flight_id: &str,
        event_type: &str,
        timestamp: u64,
        actor: &str,
        digest: Digest,
    ) -> Result<u64, LedgerError>;

    /// Append a batch of entries, best-effort per item.
    ///
    /// Items that fail validation or carry an already-anchored digest are
    /// reported in their slot; the remaining items are still recorded.
    fn insert_batch(&mut self, requests: Vec<InsertRequest>) -> Vec<Result<u64, LedgerError>>;

    /// Fetch the entry at `index`.
    fn get_by_index(&self, index: u64) -> Result<LedgerEntry, LedgerError>;

    /// Ordered entry indices for a flight; empty for an unknown flight.
    fn get_indices_for_flight(&self, flight_id: &str) -> Vec<u64>;

    /// Window of a flight's entries, in insertion order.
    ///
    /// `start` is a position within the flight's list (not a global index).
    /// Fails with `RangeOutOfBounds` when `start` is not less than the
    /// flight's entry count; `start + count` is clamped to the available
    /// length.
    fn get_range(&self, flight_id: &str, start: u64, count: u64)
        -> Result<Vec<LedgerEntry>, LedgerError>;

    /// Number of entries recorded for a flight.
    fn get_flight_event_count(&self, flight_id: &str) -> u64;

    /// Whether a digest is anchored anywhere in the ledger. Never fails.
    fn digest_exists(&self, digest: &Digest) -> bool;

    /// Total number of entries across all flights.
    fn total_events(&self) -> u64;
}

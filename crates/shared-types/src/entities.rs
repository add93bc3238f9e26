//! # Shared Entities
//!
//! Core entities shared across subsystems: the digest primitive and the
//! on-chain ledger entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 32-byte SHA-256 digest of an event's canonical payload.
///
/// The digest is the sole dedup/identity key in the ledger: no two ledger
/// entries may ever share one.
pub type Digest = [u8; 32];

/// The all-zero digest, rejected by the ledger on insertion.
pub const ZERO_DIGEST: Digest = [0u8; 32];

/// Unix timestamp in seconds since epoch.
pub type Timestamp = u64;

/// Block number on the anchoring chain.
pub type BlockNumber = u64;

/// Server-assigned identifier of an off-chain flight event.
pub type EventId = u64;

/// One append-only, immutable record in the Event Store.
///
/// The five caller-supplied fields are copied verbatim from the originating
/// off-chain event at submission time; `index`, `anchored_at_block` and
/// `anchored_at_time` are assigned by the ledger and cannot be set by the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Monotonically increasing position, assigned at insertion, never reused.
    pub index: u64,
    /// Logical grouping key (flight designator, e.g. "UA123").
    pub flight_id: String,
    /// Enumerated event category (open string enumeration).
    pub event_type: String,
    /// Event time (positive epoch seconds).
    pub timestamp: Timestamp,
    /// Free-text attribution of the responsible party.
    pub actor: String,
    /// Payload digest; globally unique across the ledger.
    pub digest: Digest,
    /// Block at which the entry was recorded (ledger-assigned).
    pub anchored_at_block: BlockNumber,
    /// Ledger-local time of insertion (ledger-assigned).
    pub anchored_at_time: Timestamp,
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} @ {} by {} (0x{}…)",
            self.index,
            self.flight_id,
            self.event_type,
            self.timestamp,
            self.actor,
            hex::encode(&self.digest[..4])
        )
    }
}

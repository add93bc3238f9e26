//! # Domain Errors
//!
//! Error types for the Event Ledger subsystem.
//!
//! ## Design Principles
//!
//! - Each error maps to a specific domain invariant violation
//! - Errors are descriptive and actionable
//! - No panics in domain logic (use Result instead)

use shared_types::Digest;
use std::fmt;

/// Errors that can occur during ledger operations.
///
/// Each variant corresponds to a specific invariant violation or failure mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Flight identifier was empty.
    EmptyFlightId,

    /// Event type was empty.
    EmptyEventType,

    /// Event timestamp was not a positive epoch value.
    InvalidTimestamp { timestamp: u64 },

    /// The zero digest is not a valid anchor.
    ZeroDigest,

    /// An entry with this digest already exists (Invariant 1).
    ///
    /// This is a benign outcome for the caller: the event is already
    /// durably anchored, just not by this attempt.
    DuplicateDigest { digest: Digest, existing_index: u64 },

    /// No entry exists at this index.
    EntryNotFound { index: u64 },

    /// Range start is past the end of a flight's entry list.
    RangeOutOfBounds {
        flight_id: String,
        start: u64,
        available: u64,
    },

    /// A field exceeded the configured maximum length.
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// Backing store I/O error.
    StorageFailure { message: String },

    /// Serialization/deserialization error.
    SerializationFailure { message: String },
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::EmptyFlightId => write!(f, "Flight identifier must be non-empty"),
            LedgerError::EmptyEventType => write!(f, "Event type must be non-empty"),
            LedgerError::InvalidTimestamp { timestamp } => {
                write!(f, "Timestamp must be positive, got {}", timestamp)
            }
            LedgerError::ZeroDigest => write!(f, "Zero digest rejected"),
            LedgerError::DuplicateDigest {
                digest,
                existing_index,
            } => {
                write!(
                    f,
                    "Digest 0x{}… already anchored at index {}",
                    hex::encode(&digest[..4]),
                    existing_index
                )
            }
            LedgerError::EntryNotFound { index } => {
                write!(f, "No entry at index {}", index)
            }
            LedgerError::RangeOutOfBounds {
                flight_id,
                start,
                available,
            } => {
                write!(
                    f,
                    "Range start {} out of bounds for flight {} ({} entries)",
                    start, flight_id, available
                )
            }
            LedgerError::FieldTooLong { field, len, max } => {
                write!(f, "Field {} too long: {} bytes, max {}", field, len, max)
            }
            LedgerError::StorageFailure { message } => {
                write!(f, "Storage failure: {}", message)
            }
            LedgerError::SerializationFailure { message } => {
                write!(f, "Serialization failure: {}", message)
            }
        }
    }
}

impl std::error::Error for LedgerError {}

impl LedgerError {
    /// Whether this error is the benign already-anchored outcome.
    ///
    /// A duplicate digest is evidence the event is durably anchored and must
    /// never be presented as a user-facing failure.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, LedgerError::DuplicateDigest { .. })
    }
}

/// Key-value store errors.
#[derive(Debug, Clone)]
pub enum KVStoreError {
    /// I/O error during read/write.
    IOError { message: String },
    /// Data corruption in the store.
    CorruptionError { message: String },
    /// Key not found.
    NotFound,
}

impl fmt::Display for KVStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KVStoreError::IOError { message } => write!(f, "KV store I/O error: {}", message),
            KVStoreError::CorruptionError { message } => {
                write!(f, "KV store corruption: {}", message)
            }
            KVStoreError::NotFound => write!(f, "Key not found in KV store"),
        }
    }
}

impl std::error::Error for KVStoreError {}

impl From<KVStoreError> for LedgerError {
    fn from(err: KVStoreError) -> Self {
        LedgerError::StorageFailure {
            message: err.to_string(),
        }
    }
}

/// Serialization errors.
#[derive(Debug, Clone)]
pub struct SerializationError {
    pub message: String,
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Serialization error: {}", self.message)
    }
}

impl std::error::Error for SerializationError {}

impl From<SerializationError> for LedgerError {
    fn from(err: SerializationError) -> Self {
        LedgerError::SerializationFailure {
            message: err.message,
        }
    }
}

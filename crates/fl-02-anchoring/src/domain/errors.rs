//! # Domain Errors
//!
//! Error types for the anchoring lifecycle.

use shared_types::EventId;
use thiserror::Error;

/// Anchoring error types.
///
/// `Unavailable` is the only variant eligible for caller-side retry; it is
/// always distinct from an empty read result. A duplicate digest observed
/// during submission is not represented here at all: that outcome is benign
/// and resolved through cross-reference confirmation, never surfaced as a
/// failure.
#[derive(Debug, Error)]
pub enum AnchorError {
    /// No event with this id in the persistence collaborator.
    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    /// Operation requested against an event whose state does not permit it.
    /// Always a caller bug; never retried.
    #[error("Invalid anchor transition for event {event_id}: {from} -> {to}")]
    InvalidState {
        /// Event the transition was attempted on.
        event_id: EventId,
        /// Current state.
        from: String,
        /// Attempted state.
        to: String,
    },

    /// Preparation requested for an event that is already confirmed.
    #[error("Event {0} is already anchored")]
    AlreadyAnchored(EventId),

    /// The ledger read path could not be reached within the bounded timeout.
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),

    /// The external signer declined or the submission otherwise failed.
    #[error("External submission failed: {0}")]
    SubmissionFailed(String),

    /// The persistence collaborator failed a load or save.
    #[error("Event persistence failed: {0}")]
    Persistence(String),

    /// A stored digest no longer matches the event's canonical payload.
    #[error("Stored digest does not match canonical payload for event {0}")]
    DigestMismatch(EventId),

    /// Cross-reference confirmation found no ledger entry for the digest.
    #[error("No ledger entry anchors event {0}")]
    NotAnchored(EventId),

    /// Malformed event input (empty identifiers, non-positive timestamp).
    #[error("Invalid event field: {0}")]
    Validation(String),
}

impl AnchorError {
    /// Whether the caller may retry this operation with backoff.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

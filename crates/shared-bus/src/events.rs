//! # Ledger Events
//!
//! Defines all event types that flow through the shared bus.

use serde::{Deserialize, Serialize};
use shared_types::{BlockNumber, Digest, EventId, Timestamp};

/// All events that can be published to the bus.
///
/// `EventRecorded` is the ledger's insertion notification; the remaining
/// variants mirror the off-chain anchoring lifecycle so that observers can
/// follow an event from preparation to confirmation without polling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LedgerEvent {
    // =========================================================================
    // SUBSYSTEM 1: EVENT LEDGER
    // =========================================================================
    /// A new entry was appended to the Event Store.
    ///
    /// Emitted on every successful insertion. This is the sole push-based
    /// mechanism for watching the ledger.
    EventRecorded {
        /// Position of the new entry.
        index: u64,
        /// Logical flight key.
        flight_id: String,
        /// Event category.
        event_type: String,
        /// Event time (epoch seconds).
        timestamp: Timestamp,
        /// Payload digest anchored by this entry.
        digest: Digest,
        /// Block at which the entry landed.
        block_number: BlockNumber,
    },

    // =========================================================================
    // SUBSYSTEM 2: ANCHORING
    // =========================================================================
    /// An unsigned descriptor was issued for an off-chain event.
    DescriptorIssued {
        /// Correlation ID linking later confirmation back to this preparation.
        correlation_id: String,
        /// The off-chain event.
        event_id: EventId,
        /// Gas limit carried by the descriptor.
        gas_limit: u64,
    },

    /// An off-chain event was confirmed against an external submission.
    EventConfirmed {
        /// The off-chain event.
        event_id: EventId,
        /// External transaction reference, if one was reported.
        tx_ref: Option<String>,
        /// Block at which the submission was observed.
        block_number: Option<BlockNumber>,
    },

    /// An external submission was rejected or abandoned.
    EventAnchorFailed {
        /// The off-chain event.
        event_id: EventId,
        /// Opaque diagnostic string from the submitter.
        reason: String,
    },
}

impl LedgerEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::EventRecorded { .. } => EventTopic::EventLedger,
            Self::DescriptorIssued { .. }
            | Self::EventConfirmed { .. }
            | Self::EventAnchorFailed { .. } => EventTopic::Anchoring,
        }
    }
}

/// Topics for event filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventTopic {
    /// On-chain insertion notifications (fl-01).
    EventLedger,
    /// Off-chain anchoring lifecycle (fl-02).
    Anchoring,
    /// Matches every topic.
    All,
}

/// Filter applied to a subscription.
#[derive(Debug, Clone)]
pub struct EventFilter {
    /// Topics to receive; `EventTopic::All` short-circuits.
    pub topics: Vec<EventTopic>,
}

impl EventFilter {
    /// Subscribe to everything.
    #[must_use]
    pub fn all() -> Self {
        Self {
            topics: vec![EventTopic::All],
        }
    }

    /// Subscribe to a specific set of topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self { topics }
    }

    /// Check whether an event passes this filter.
    #[must_use]
    pub fn matches(&self, event: &LedgerEvent) -> bool {
        self.topics.contains(&EventTopic::All) || self.topics.contains(&event.topic())
    }
}

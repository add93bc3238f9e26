//! # Outbound Ports
//!
//! Traits for the anchoring core's external collaborators: durable event
//! persistence, gas estimation, and the ledger read path. The core owns
//! none of these; it only defines the contracts they must honor.

use async_trait::async_trait;
use shared_types::{BlockNumber, Digest, EventId, LedgerEntry};

use crate::domain::entities::FlightEvent;
use crate::domain::errors::AnchorError;

/// Durable storage of off-chain event state - outbound port.
///
/// Read-your-writes consistency for a single event is assumed: a `save`
/// followed by a `load` of the same id must observe the saved record.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Load an event by id.
    async fn load(&self, id: EventId) -> Result<FlightEvent, AnchorError>;

    /// Persist an event record, replacing any previous version.
    async fn save(&self, event: FlightEvent) -> Result<(), AnchorError>;

    /// Allocate the next unique event id.
    async fn next_id(&self) -> EventId;

    /// All events for a flight, in creation order.
    async fn events_for_flight(&self, flight_id: &str) -> Result<Vec<FlightEvent>, AnchorError>;
}

/// Gas estimation - outbound port.
#[async_trait]
pub trait GasEstimator: Send + Sync {
    /// Estimate the gas cost of submitting `call_data` to `to`.
    async fn estimate(&self, to: &str, call_data: &[u8]) -> Result<u64, AnchorError>;
}

/// Ledger read path - outbound port.
///
/// Mirrors the Event Store's query surface. Implementations talk to a live
/// chain and may be slow or unreachable; callers bound every operation
/// with a timeout and report expiry as `Unavailable`, never as empty.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Ordered entry indices for a flight; empty for an unknown flight.
    async fn get_indices_for_flight(&self, flight_id: &str) -> Result<Vec<u64>, AnchorError>;

    /// Fetch the entry at a global index.
    async fn get_by_index(&self, index: u64) -> Result<LedgerEntry, AnchorError>;

    /// Whether a digest is anchored anywhere in the ledger.
    async fn digest_exists(&self, digest: &Digest) -> Result<bool, AnchorError>;

    /// Total number of entries across all flights.
    async fn total_events(&self) -> Result<u64, AnchorError>;

    /// Latest block the ledger has recorded an entry at.
    async fn latest_block(&self) -> Result<BlockNumber, AnchorError>;
}

// Ports are commonly shared across services; delegate through Arc
#[async_trait]
impl<T: EventRepository + ?Sized> EventRepository for std::sync::Arc<T> {
    async fn load(&self, id: EventId) -> Result<FlightEvent, AnchorError> {
        (**self).load(id).await
    }

    async fn save(&self, event: FlightEvent) -> Result<(), AnchorError> {
        (**self).save(event).await
    }

    async fn next_id(&self) -> EventId {
        (**self).next_id().await
    }

    async fn events_for_flight(&self, flight_id: &str) -> Result<Vec<FlightEvent>, AnchorError> {
        (**self).events_for_flight(flight_id).await
    }
}

#[async_trait]
impl<T: LedgerClient + ?Sized> LedgerClient for std::sync::Arc<T> {
    async fn get_indices_for_flight(&self, flight_id: &str) -> Result<Vec<u64>, AnchorError> {
        (**self).get_indices_for_flight(flight_id).await
    }

    async fn get_by_index(&self, index: u64) -> Result<LedgerEntry, AnchorError> {
        (**self).get_by_index(index).await
    }

    async fn digest_exists(&self, digest: &Digest) -> Result<bool, AnchorError> {
        (**self).digest_exists(digest).await
    }

    async fn total_events(&self) -> Result<u64, AnchorError> {
        (**self).total_events().await
    }

    async fn latest_block(&self) -> Result<BlockNumber, AnchorError> {
        (**self).latest_block().await
    }
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock ledger client backed by a fixed entry list.
#[derive(Clone, Default)]
pub struct MockLedgerClient {
    /// Entries served by index.
    pub entries: Vec<LedgerEntry>,
    /// Should every call fail as unreachable?
    pub should_fail: bool,
    /// Artificial latency applied to every call.
    pub delay: Option<std::time::Duration>,
}

impl MockLedgerClient {
    /// Client serving the given entries.
    pub fn with_entries(entries: Vec<LedgerEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    async fn gate(&self) -> Result<(), AnchorError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.should_fail {
            return Err(AnchorError::Unavailable("mock failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl LedgerClient for MockLedgerClient {
    async fn get_indices_for_flight(&self, flight_id: &str) -> Result<Vec<u64>, AnchorError> {
        self.gate().await?;
        Ok(self
            .entries
            .iter()
            .filter(|e| e.flight_id == flight_id)
            .map(|e| e.index)
            .collect())
    }

    async fn get_by_index(&self, index: u64) -> Result<LedgerEntry, AnchorError> {
        self.gate().await?;
        self.entries
            .iter()
            .find(|e| e.index == index)
            .cloned()
            .ok_or_else(|| AnchorError::Unavailable(format!("no entry at index {}", index)))
    }

    async fn digest_exists(&self, digest: &Digest) -> Result<bool, AnchorError> {
        self.gate().await?;
        Ok(self.entries.iter().any(|e| &e.digest == digest))
    }

    async fn total_events(&self) -> Result<u64, AnchorError> {
        self.gate().await?;
        Ok(self.entries.len() as u64)
    }

    async fn latest_block(&self) -> Result<BlockNumber, AnchorError> {
        self.gate().await?;
        Ok(self
            .entries
            .iter()
            .map(|e| e.anchored_at_block)
            .max()
            .unwrap_or(0))
    }
}

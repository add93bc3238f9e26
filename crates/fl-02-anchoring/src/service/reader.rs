//! # Chain Reader
//!
//! Bounded-time queries against the Event Store. Every call runs under the
//! configured timeout; expiry surfaces as `Unavailable`, which a caller may
//! retry with backoff. An empty result and a timeout are distinct signals
//! and are never conflated.

use std::future::Future;
use std::time::Duration;

use shared_types::{BlockNumber, Digest, LedgerEntry};

use crate::domain::config::AnchorConfig;
use crate::domain::entities::FlightEvent;
use crate::domain::errors::AnchorError;
use crate::ports::outbound::LedgerClient;

/// Point-in-time ledger figures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerStats {
    /// Total entries across all flights.
    pub total_events: u64,
    /// Latest block an entry was anchored at.
    pub latest_block: BlockNumber,
}

/// Read-side view of the Event Store.
pub struct ChainReader<L>
where
    L: LedgerClient,
{
    ledger: L,
    read_timeout: Duration,
}

impl<L> ChainReader<L>
where
    L: LedgerClient,
{
    /// Reader over the given ledger client, bounded by the configured timeout.
    pub fn new(ledger: L, config: &AnchorConfig) -> Self {
        Self {
            ledger,
            read_timeout: config.read_timeout,
        }
    }

    /// All ledger entries for a flight, in insertion order.
    ///
    /// Empty for a flight with no anchored events; that is a real answer,
    /// not an error.
    pub async fn read_events(&self, flight_id: &str) -> Result<Vec<LedgerEntry>, AnchorError> {
        self.bounded(async {
            let indices = self.ledger.get_indices_for_flight(flight_id).await?;
            let mut entries = Vec::with_capacity(indices.len());
            for index in indices {
                entries.push(self.ledger.get_by_index(index).await?);
            }
            Ok(entries)
        })
        .await
    }

    /// Whether the ledger actually backs this event's digest.
    ///
    /// Audits a `Confirmed` record independently of trusting its anchor
    /// ref; equally usable to short-circuit re-submission of an event that
    /// is already anchored.
    pub async fn verify_event(&self, event: &FlightEvent) -> Result<bool, AnchorError> {
        self.bounded(self.ledger.digest_exists(&event.digest)).await
    }

    /// Locate the entry anchoring `digest` under `flight_id`, if any.
    pub async fn find_entry_by_digest(
        &self,
        flight_id: &str,
        digest: &Digest,
    ) -> Result<Option<LedgerEntry>, AnchorError> {
        let entries = self.read_events(flight_id).await?;
        Ok(entries.into_iter().find(|e| &e.digest == digest))
    }

    /// Current ledger totals.
    pub async fn stats(&self) -> Result<LedgerStats, AnchorError> {
        self.bounded(async {
            Ok(LedgerStats {
                total_events: self.ledger.total_events().await?,
                latest_block: self.ledger.latest_block().await?,
            })
        })
        .await
    }

    async fn bounded<T>(
        &self,
        operation: impl Future<Output = Result<T, AnchorError>>,
    ) -> Result<T, AnchorError> {
        match tokio::time::timeout(self.read_timeout, operation).await {
            Ok(result) => result,
            Err(_) => Err(AnchorError::Unavailable(format!(
                "ledger read timed out after {:?}",
                self.read_timeout
            ))),
        }
    }
}

//! In-process `LedgerClient` backed by the real Event Store.
//!
//! Production deployments reach the ledger over a node RPC; integration
//! tests run both sides in one process, with the anchoring crate's read
//! path wired straight onto the fl-01 service behind a shared lock.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use fl_01_event_ledger::adapters::{
    BincodeEntrySerializer, InMemoryKVStore, SystemTimeSource, TickingBlockSource,
};
use fl_01_event_ledger::{EventLedgerApi, EventLedgerService, LedgerConfig};
use fl_02_anchoring::{AnchorError, LedgerClient};
use shared_types::{BlockNumber, Digest, LedgerEntry};

/// The in-memory ledger service used across integration scenarios.
pub type TestLedger =
    EventLedgerService<InMemoryKVStore, SystemTimeSource, TickingBlockSource, BincodeEntrySerializer>;

/// Shared handle: writers lock exclusively, the client reads.
pub type SharedLedger = Arc<RwLock<TestLedger>>;

/// Build a fresh shared in-memory ledger.
///
/// # Panics
///
/// A fresh in-memory store has no state to restore, so construction
/// cannot fail in practice.
pub fn shared_ledger() -> SharedLedger {
    let ledger =
        TestLedger::new_in_memory(LedgerConfig::default()).expect("fresh in-memory ledger");
    Arc::new(RwLock::new(ledger))
}

/// `LedgerClient` reading from an in-process Event Store.
#[derive(Clone)]
pub struct InProcessLedgerClient {
    ledger: SharedLedger,
}

impl InProcessLedgerClient {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }
}

#[async_trait]
impl LedgerClient for InProcessLedgerClient {
    async fn get_indices_for_flight(&self, flight_id: &str) -> Result<Vec<u64>, AnchorError> {
        Ok(self.ledger.read().await.get_indices_for_flight(flight_id))
    }

    async fn get_by_index(&self, index: u64) -> Result<LedgerEntry, AnchorError> {
        self.ledger
            .read()
            .await
            .get_by_index(index)
            .map_err(|e| AnchorError::Unavailable(e.to_string()))
    }

    async fn digest_exists(&self, digest: &Digest) -> Result<bool, AnchorError> {
        Ok(self.ledger.read().await.digest_exists(digest))
    }

    async fn total_events(&self) -> Result<u64, AnchorError> {
        Ok(self.ledger.read().await.total_events())
    }

    async fn latest_block(&self) -> Result<BlockNumber, AnchorError> {
        let ledger = self.ledger.read().await;
        let total = ledger.total_events();
        if total == 0 {
            return Ok(0);
        }
        ledger
            .get_by_index(total - 1)
            .map(|entry| entry.anchored_at_block)
            .map_err(|e| AnchorError::Unavailable(e.to_string()))
    }
}

//! # Event Ledger Bus Adapter
//!
//! Connects the Event Ledger to the shared event bus so downstream
//! consumers learn about newly anchored entries without polling.
//!
//! The adapter wraps an [`EventLedgerService`] and publishes a
//! [`LedgerEvent::EventRecorded`] after every successful insertion.
//! Publication is best-effort: a bus with no subscribers is not an
//! error, and read operations never touch the bus.

use std::sync::Arc;

use shared_bus::{EventPublisher, LedgerEvent};
use shared_types::Digest;

use crate::domain::errors::LedgerError;
use crate::ports::inbound::{EventLedgerApi, InsertRequest};
use crate::ports::outbound::{BlockSource, EntrySerializer, KeyValueStore, TimeSource};
use crate::service::EventLedgerService;

/// Bus-connected wrapper around the ledger service.
pub struct LedgerBusAdapter<KV, TS, BS, SER>
where
    KV: KeyValueStore,
    TS: TimeSource,
    BS: BlockSource,
    SER: EntrySerializer,
{
    service: EventLedgerService<KV, TS, BS, SER>,
    publisher: Arc<dyn EventPublisher>,
}

impl<KV, TS, BS, SER> LedgerBusAdapter<KV, TS, BS, SER>
where
    KV: KeyValueStore,
    TS: TimeSource,
    BS: BlockSource,
    SER: EntrySerializer,
{
    pub fn new(service: EventLedgerService<KV, TS, BS, SER>, publisher: Arc<dyn EventPublisher>) -> Self {
        Self { service, publisher }
    }

    /// Insert an entry and announce it on the bus.
    ///
    /// The notification carries the assigned index together with the
    /// stored entry's fields, so subscribers never need a follow-up read.
    pub async fn insert(
        &mut self,
        flight_id: &str,
        event_type: &str,
        timestamp: u64,
        actor: &str,
        digest: Digest,
    ) -> Result<u64, LedgerError> {
        let index = self
            .service
            .insert(flight_id, event_type, timestamp, actor, digest)?;

        let entry = self.service.get_by_index(index)?;
        let receivers = self
            .publisher
            .publish(LedgerEvent::EventRecorded {
                index,
                flight_id: entry.flight_id,
                event_type: entry.event_type,
                timestamp: entry.timestamp,
                digest: entry.digest,
                block_number: entry.anchored_at_block,
            })
            .await;
        tracing::debug!(
            "[fl-01] EventRecorded #{} delivered to {} subscriber(s)",
            index,
            receivers
        );

        Ok(index)
    }

    /// Insert a batch, announcing each successful item.
    pub async fn insert_batch(
        &mut self,
        requests: Vec<InsertRequest>,
    ) -> Vec<Result<u64, LedgerError>> {
        let mut results = Vec::with_capacity(requests.len());
        for request in requests {
            results.push(
                self.insert(
                    &request.flight_id,
                    &request.event_type,
                    request.timestamp,
                    &request.actor,
                    request.digest,
                )
                .await,
            );
        }
        results
    }

    /// Access the underlying service for queries.
    pub fn service(&self) -> &EventLedgerService<KV, TS, BS, SER> {
        &self.service
    }
}

//! # Transaction Preparer
//!
//! Builds unsigned call descriptors for pending events and moves them to
//! `Pending`. Never submits anything and never holds signing authority;
//! the descriptor goes to an external signer whose outcome arrives later
//! through the reconciler, if at all.

use std::sync::Arc;

use shared_bus::{EventPublisher, LedgerEvent};
use shared_types::EventId;
use uuid::Uuid;

use crate::domain::calldata;
use crate::domain::config::AnchorConfig;
use crate::domain::digest;
use crate::domain::entities::{AnchorStatus, FlightEvent, UnsignedDescriptor};
use crate::domain::errors::AnchorError;
use crate::ports::outbound::{EventRepository, GasEstimator};

/// Prepares unsigned anchoring transactions.
pub struct TransactionPreparer<R, G>
where
    R: EventRepository,
    G: GasEstimator,
{
    repository: R,
    estimator: G,
    config: AnchorConfig,
    publisher: Arc<dyn EventPublisher>,
}

impl<R, G> TransactionPreparer<R, G>
where
    R: EventRepository,
    G: GasEstimator,
{
    /// Preparer over the given persistence, estimation, and bus collaborators.
    pub fn new(
        repository: R,
        estimator: G,
        config: AnchorConfig,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            estimator,
            config,
            publisher,
        }
    }

    /// Prepare a single event for anchoring.
    ///
    /// Requires `Unanchored` or `Failed`. A `Confirmed` event yields
    /// `AlreadyAnchored`; a `Pending` one yields `InvalidState` while its
    /// previously issued descriptor stays fetchable via
    /// [`issued_descriptor`](Self::issued_descriptor).
    pub async fn prepare(&self, event_id: EventId) -> Result<UnsignedDescriptor, AnchorError> {
        let mut event = self.repository.load(event_id).await?;
        self.guard_preparable(&event)?;
        digest::verify_payload(&event)?;

        let call_data = calldata::record_event_call(
            &event.flight_id,
            &event.event_type,
            event.timestamp,
            &event.actor,
            &event.digest,
        );
        let descriptor = self.build_descriptor(call_data).await;

        event.mark_pending(descriptor.clone())?;
        self.repository.save(event).await?;

        self.announce(&[event_id], descriptor.gas_limit).await;
        Ok(descriptor)
    }

    /// Prepare a batch of events behind a single `recordEventBatch` call.
    ///
    /// Every event must individually pass the same state guard as
    /// [`prepare`](Self::prepare); the guard runs over the whole batch
    /// before any event transitions, so a mid-batch rejection has no
    /// partial effect.
    pub async fn prepare_batch(
        &self,
        event_ids: &[EventId],
    ) -> Result<UnsignedDescriptor, AnchorError> {
        let mut events = Vec::with_capacity(event_ids.len());
        for &id in event_ids {
            let event = self.repository.load(id).await?;
            self.guard_preparable(&event)?;
            digest::verify_payload(&event)?;
            events.push(event);
        }

        let call_data = calldata::record_event_batch_call(&events);
        let descriptor = self.build_descriptor(call_data).await;

        for mut event in events {
            event.mark_pending(descriptor.clone())?;
            self.repository.save(event).await?;
        }

        self.announce(event_ids, descriptor.gas_limit).await;
        Ok(descriptor)
    }

    /// Re-fetch the descriptor issued for a currently `Pending` event.
    pub async fn issued_descriptor(
        &self,
        event_id: EventId,
    ) -> Result<UnsignedDescriptor, AnchorError> {
        let event = self.repository.load(event_id).await?;
        match (event.anchor_status, event.issued_descriptor) {
            (AnchorStatus::Pending, Some(descriptor)) => Ok(descriptor),
            (status, _) => Err(AnchorError::InvalidState {
                event_id,
                from: status.to_string(),
                to: AnchorStatus::Pending.to_string(),
            }),
        }
    }

    fn guard_preparable(&self, event: &FlightEvent) -> Result<(), AnchorError> {
        match event.anchor_status {
            AnchorStatus::Confirmed => Err(AnchorError::AlreadyAnchored(event.id)),
            AnchorStatus::Pending => Err(AnchorError::InvalidState {
                event_id: event.id,
                from: event.anchor_status.to_string(),
                to: AnchorStatus::Pending.to_string(),
            }),
            AnchorStatus::Unanchored | AnchorStatus::Failed => Ok(()),
        }
    }

    async fn build_descriptor(&self, call_data: Vec<u8>) -> UnsignedDescriptor {
        let gas_limit = match self
            .estimator
            .estimate(&self.config.contract_address, &call_data)
            .await
        {
            Ok(raw) => self.config.buffered_gas(raw),
            Err(err) => {
                tracing::warn!(
                    "[fl-02] Gas estimation failed ({}), using default {}",
                    err,
                    self.config.default_gas_limit
                );
                self.config.default_gas_limit
            }
        };

        UnsignedDescriptor {
            to: self.config.contract_address.clone(),
            call_data,
            gas_limit,
            value: 0,
        }
    }

    async fn announce(&self, event_ids: &[EventId], gas_limit: u64) {
        let correlation_id = Uuid::new_v4().to_string();
        for &event_id in event_ids {
            self.publisher
                .publish(LedgerEvent::DescriptorIssued {
                    correlation_id: correlation_id.clone(),
                    event_id,
                    gas_limit,
                })
                .await;
        }
        tracing::info!(
            "[fl-02] Issued descriptor {} for {} event(s), gas limit {}",
            correlation_id,
            event_ids.len(),
            gas_limit
        );
    }
}

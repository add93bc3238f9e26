//! # Confirmation Reconciler
//!
//! Records the outcome of an external submission against the off-chain
//! event record. `confirm` records the caller's claim plus its reference;
//! it deliberately does not verify chain state, which stays a separate
//! audit step on the chain reader.

use std::sync::Arc;

use shared_bus::{EventPublisher, LedgerEvent};
use shared_types::{BlockNumber, EventId};

use crate::domain::entities::{AnchorRef, FlightEvent};
use crate::domain::errors::AnchorError;
use crate::ports::outbound::{EventRepository, LedgerClient};

/// Reconciles off-chain event state with submission outcomes.
pub struct ConfirmationReconciler<R, L>
where
    R: EventRepository,
    L: LedgerClient,
{
    repository: R,
    ledger: L,
    publisher: Arc<dyn EventPublisher>,
}

impl<R, L> ConfirmationReconciler<R, L>
where
    R: EventRepository,
    L: LedgerClient,
{
    /// Reconciler over the given persistence, ledger, and bus collaborators.
    pub fn new(repository: R, ledger: L, publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            repository,
            ledger,
            publisher,
        }
    }

    /// Record a claimed successful submission. Requires `Pending`.
    pub async fn confirm(
        &self,
        event_id: EventId,
        tx_ref: &str,
        observed_block: BlockNumber,
    ) -> Result<FlightEvent, AnchorError> {
        let mut event = self.repository.load(event_id).await?;
        event.confirm(AnchorRef {
            tx_ref: Some(tx_ref.to_string()),
            block_number: observed_block,
        })?;
        self.repository.save(event.clone()).await?;

        self.publisher
            .publish(LedgerEvent::EventConfirmed {
                event_id,
                tx_ref: Some(tx_ref.to_string()),
                block_number: Some(observed_block),
            })
            .await;
        tracing::info!(
            "[fl-02] ✓ Event {} confirmed at block {} via {}",
            event_id,
            observed_block,
            tx_ref
        );
        Ok(event)
    }

    /// Record a rejected submission. Requires `Pending`.
    pub async fn fail(&self, event_id: EventId, reason: &str) -> Result<FlightEvent, AnchorError> {
        let mut event = self.repository.load(event_id).await?;
        event.fail(reason)?;
        self.repository.save(event.clone()).await?;

        self.publisher
            .publish(LedgerEvent::EventAnchorFailed {
                event_id,
                reason: reason.to_string(),
            })
            .await;
        tracing::warn!("[fl-02] Event {} anchor failed: {}", event_id, reason);
        Ok(event)
    }

    /// Confirm against an anchor someone else already recorded.
    ///
    /// The benign-duplicate path: an external submission rejected because
    /// the digest is already on-chain means the event IS durably anchored,
    /// just not by this attempt. The ledger entry carrying the digest is
    /// located and its block recorded; the anchor ref carries no
    /// transaction reference since the anchoring transaction was not ours.
    ///
    /// Requires `Pending`, like any other confirmation. Fails with
    /// `NotAnchored` when no entry carries the digest.
    pub async fn confirm_by_cross_reference(
        &self,
        event_id: EventId,
    ) -> Result<FlightEvent, AnchorError> {
        let mut event = self.repository.load(event_id).await?;

        let indices = self.ledger.get_indices_for_flight(&event.flight_id).await?;
        let mut anchored_at = None;
        for index in indices {
            let entry = self.ledger.get_by_index(index).await?;
            if entry.digest == event.digest {
                anchored_at = Some(entry.anchored_at_block);
                break;
            }
        }
        let block_number = anchored_at.ok_or(AnchorError::NotAnchored(event_id))?;

        event.confirm(AnchorRef {
            tx_ref: None,
            block_number,
        })?;
        self.repository.save(event.clone()).await?;

        self.publisher
            .publish(LedgerEvent::EventConfirmed {
                event_id,
                tx_ref: None,
                block_number: Some(block_number),
            })
            .await;
        tracing::info!(
            "[fl-02] ✓ Event {} confirmed by cross-reference at block {}",
            event_id,
            block_number
        );
        Ok(event)
    }
}

//! # Event Assembler
//!
//! Entry point for off-chain event creation. Computes the canonical digest
//! exactly once, at creation; nothing downstream ever recomputes it.

use serde_json::Value;
use shared_types::Timestamp;

use crate::domain::digest::payload_digest;
use crate::domain::entities::{AnchorStatus, FlightEvent};
use crate::domain::errors::AnchorError;
use crate::ports::outbound::{EventRepository, LedgerClient};
use crate::service::reader::ChainReader;

/// Input for a new off-chain event.
#[derive(Clone, Debug)]
pub struct NewEvent {
    /// Logical grouping key, non-empty.
    pub flight_id: String,
    /// Open-enumeration event category, non-empty.
    pub event_type: String,
    /// Event time as positive epoch seconds.
    pub timestamp: Timestamp,
    /// Free-text attribution of the responsible party.
    pub actor: String,
    /// Arbitrary structured data; hashed, never stored on-chain.
    pub payload: Value,
}

/// An off-chain event joined with its on-chain verification result.
#[derive(Clone, Debug)]
pub struct VerifiedEvent {
    /// The off-chain record.
    pub event: FlightEvent,
    /// Whether the ledger backs the event's digest right now. `None` when
    /// the read path was unavailable; never silently reported as false.
    pub chain_verified: Option<bool>,
}

/// Creates and lists off-chain events.
pub struct EventAssembler<R>
where
    R: EventRepository,
{
    repository: R,
}

impl<R> EventAssembler<R>
where
    R: EventRepository,
{
    /// Assembler persisting through the given repository.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create an event record, unanchored, with its digest fixed for life.
    pub async fn create_event(&self, new_event: NewEvent) -> Result<FlightEvent, AnchorError> {
        validate(&new_event)?;

        let digest = payload_digest(
            &new_event.flight_id,
            &new_event.event_type,
            new_event.timestamp,
            &new_event.actor,
            &new_event.payload,
        );

        let event = FlightEvent {
            id: self.repository.next_id().await,
            flight_id: new_event.flight_id,
            event_type: new_event.event_type,
            timestamp: new_event.timestamp,
            actor: new_event.actor,
            payload: new_event.payload,
            digest,
            anchor_status: AnchorStatus::Unanchored,
            anchor_ref: None,
            issued_descriptor: None,
            failure_reason: None,
            created_at: new_event.timestamp,
        };
        self.repository.save(event.clone()).await?;
        tracing::debug!(
            "[fl-02] Created event {} for {} ({})",
            event.id,
            event.flight_id,
            event.event_type
        );
        Ok(event)
    }

    /// A flight's events joined with their current chain verification.
    ///
    /// An unreachable read path degrades each result to "unknown" rather
    /// than failing the listing or pretending the chain said no.
    pub async fn events_with_verification<L>(
        &self,
        flight_id: &str,
        reader: &ChainReader<L>,
    ) -> Result<Vec<VerifiedEvent>, AnchorError>
    where
        L: LedgerClient,
    {
        let events = self.repository.events_for_flight(flight_id).await?;
        let mut out = Vec::with_capacity(events.len());
        for event in events {
            let chain_verified = match reader.verify_event(&event).await {
                Ok(backed) => Some(backed),
                Err(err) if err.is_retryable() => None,
                Err(err) => return Err(err),
            };
            out.push(VerifiedEvent {
                event,
                chain_verified,
            });
        }
        Ok(out)
    }

    /// Load a single event.
    pub async fn event(&self, id: shared_types::EventId) -> Result<FlightEvent, AnchorError> {
        self.repository.load(id).await
    }
}

fn validate(new_event: &NewEvent) -> Result<(), AnchorError> {
    if new_event.flight_id.is_empty() {
        return Err(AnchorError::Validation("flight_id is empty".to_string()));
    }
    if new_event.event_type.is_empty() {
        return Err(AnchorError::Validation("event_type is empty".to_string()));
    }
    if new_event.timestamp == 0 {
        return Err(AnchorError::Validation(
            "timestamp must be positive".to_string(),
        ));
    }
    Ok(())
}

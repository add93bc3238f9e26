//! # Domain Entities
//!
//! Off-chain event records and their anchoring lifecycle.
//!
//! A [`FlightEvent`] is the mutable off-chain record; the immutable on-chain
//! counterpart is `shared_types::LedgerEntry`. The two are linked only by the
//! event's digest, which is computed exactly once at creation and never
//! recomputed or mutated afterwards.

use serde::{Deserialize, Serialize};
use shared_types::{BlockNumber, Digest, EventId, Timestamp};

use super::errors::AnchorError;

/// Anchoring lifecycle state of an off-chain event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorStatus {
    /// Never prepared; eligible for preparation.
    Unanchored,
    /// A descriptor has been issued; awaiting external submission.
    Pending,
    /// A submission was confirmed; terminal.
    Confirmed,
    /// The external submission was rejected; eligible for re-preparation.
    Failed,
}

impl AnchorStatus {
    /// Check if a transition to `new_state` is legal.
    ///
    /// Legality matrix:
    /// - `Unanchored -> Pending` (descriptor issued)
    /// - `Failed -> Pending` (fresh preparation cycle after rejection)
    /// - `Pending -> Confirmed` | `Pending -> Failed`
    ///
    /// Everything else is illegal, including self-transitions. `Confirmed`
    /// is terminal.
    pub fn can_transition_to(self, new_state: AnchorStatus) -> bool {
        matches!(
            (self, new_state),
            (AnchorStatus::Unanchored, AnchorStatus::Pending)
                | (AnchorStatus::Failed, AnchorStatus::Pending)
                | (AnchorStatus::Pending, AnchorStatus::Confirmed)
                | (AnchorStatus::Pending, AnchorStatus::Failed)
        )
    }
}

impl std::fmt::Display for AnchorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unanchored => "Unanchored",
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Failed => "Failed",
        };
        write!(f, "{}", s)
    }
}

/// Proof-of-anchoring reference recorded at confirmation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorRef {
    /// Opaque transaction reference reported by the external signer.
    /// `None` for cross-reference confirmations, where the anchoring
    /// transaction was someone else's.
    pub tx_ref: Option<String>,
    /// Block at which the anchor was observed.
    pub block_number: BlockNumber,
}

/// Unsigned, ready-to-sign call specification.
///
/// Holds everything an external signer needs to submit the anchoring
/// transaction. Never contains signing material.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedDescriptor {
    /// Target ledger contract address.
    pub to: String,
    /// ABI-encoded call data.
    pub call_data: Vec<u8>,
    /// Gas limit: raw estimate plus safety margin, or the fixed fallback.
    pub gas_limit: u64,
    /// Native value attached to the call; always zero for anchoring.
    pub value: u64,
}

/// Off-chain flight event record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightEvent {
    /// Server-assigned unique id.
    pub id: EventId,
    /// Logical grouping key, non-empty.
    pub flight_id: String,
    /// Open-enumeration event category, non-empty.
    pub event_type: String,
    /// Event time as positive epoch seconds.
    pub timestamp: Timestamp,
    /// Free-text attribution of the responsible party.
    pub actor: String,
    /// Arbitrary structured data; never stored on-chain.
    pub payload: serde_json::Value,
    /// Canonical-payload digest, computed once at creation.
    pub digest: Digest,
    /// Current anchoring lifecycle state.
    pub anchor_status: AnchorStatus,
    /// Populated only once `Confirmed`.
    pub anchor_ref: Option<AnchorRef>,
    /// Descriptor issued by the last preparation, retained while `Pending`
    /// so a caller asking again can fetch the same descriptor instead of
    /// racing a second preparation.
    pub issued_descriptor: Option<UnsignedDescriptor>,
    /// Opaque diagnostic recorded on failure.
    pub failure_reason: Option<String>,
    /// Record creation time, epoch seconds.
    pub created_at: Timestamp,
}

impl FlightEvent {
    fn transition_to(&mut self, new_state: AnchorStatus) -> Result<(), AnchorError> {
        if !self.anchor_status.can_transition_to(new_state) {
            return Err(AnchorError::InvalidState {
                event_id: self.id,
                from: self.anchor_status.to_string(),
                to: new_state.to_string(),
            });
        }
        self.anchor_status = new_state;
        Ok(())
    }

    /// Record an issued descriptor and move to `Pending`.
    pub fn mark_pending(&mut self, descriptor: UnsignedDescriptor) -> Result<(), AnchorError> {
        self.transition_to(AnchorStatus::Pending)?;
        self.issued_descriptor = Some(descriptor);
        self.failure_reason = None;
        Ok(())
    }

    /// Record the caller's proof of submission and move to `Confirmed`.
    pub fn confirm(&mut self, anchor_ref: AnchorRef) -> Result<(), AnchorError> {
        self.transition_to(AnchorStatus::Confirmed)?;
        self.anchor_ref = Some(anchor_ref);
        Ok(())
    }

    /// Record a rejected submission and move to `Failed`.
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), AnchorError> {
        self.transition_to(AnchorStatus::Failed)?;
        self.failure_reason = Some(reason.into());
        Ok(())
    }

    /// Whether this event is eligible for a (fresh) preparation cycle.
    pub fn can_prepare(&self) -> bool {
        matches!(
            self.anchor_status,
            AnchorStatus::Unanchored | AnchorStatus::Failed
        )
    }
}

//! # Digest Function
//!
//! Deterministic SHA-256 digest over an event's canonical payload.
//!
//! Canonicalization is fixed once and must never change, since any change
//! silently breaks dedup against previously anchored digests:
//!
//! - the hash input is the compact JSON encoding (no insignificant
//!   whitespace) of an object holding the five identifying fields,
//! - object keys are sorted lexicographically at every nesting level
//!   (`serde_json`'s default `BTreeMap`-backed maps),
//! - timestamps are integer epoch seconds, never formatted strings.

use serde_json::json;
use sha2::{Digest as _, Sha256};
use shared_types::{Digest, Timestamp};

use super::entities::FlightEvent;
use super::errors::AnchorError;

/// Compute the canonical digest of an event's identifying fields + payload.
pub fn payload_digest(
    flight_id: &str,
    event_type: &str,
    timestamp: Timestamp,
    actor: &str,
    payload: &serde_json::Value,
) -> Digest {
    let canonical = json!({
        "actor": actor,
        "event_type": event_type,
        "flight_id": flight_id,
        "payload": payload,
        "timestamp": timestamp,
    });

    let mut hasher = Sha256::new();
    // Value -> String cannot fail for a tree built from valid Values
    hasher.update(canonical.to_string().as_bytes());
    hasher.finalize().into()
}

/// Check that a stored event still digests to its recorded value.
///
/// The digest is computed exactly once at creation; this guards the
/// preparation path against a persistence layer that mutated the payload
/// out from under the record.
pub fn verify_payload(event: &FlightEvent) -> Result<(), AnchorError> {
    let recomputed = payload_digest(
        &event.flight_id,
        &event.event_type,
        event.timestamp,
        &event.actor,
        &event.payload,
    );
    if recomputed != event.digest {
        return Err(AnchorError::DigestMismatch(event.id));
    }
    Ok(())
}

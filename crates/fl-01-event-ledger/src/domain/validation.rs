//! # Insertion Validation
//!
//! Input checks applied before any state is touched. A rejected insertion
//! must have no partial effects, so validation runs first and is pure.

use crate::domain::config::LedgerConfig;
use crate::domain::errors::LedgerError;
use shared_types::{Digest, ZERO_DIGEST};

/// Validate the five caller-supplied insertion fields.
///
/// Rejects empty identifiers, non-positive timestamps, the zero digest, and
/// over-length fields. Digest *uniqueness* is checked separately by the
/// service, against the global digest set.
pub fn validate_insert(
    flight_id: &str,
    event_type: &str,
    timestamp: u64,
    actor: &str,
    digest: &Digest,
    config: &LedgerConfig,
) -> Result<(), LedgerError> {
    if flight_id.is_empty() {
        return Err(LedgerError::EmptyFlightId);
    }
    if event_type.is_empty() {
        return Err(LedgerError::EmptyEventType);
    }
    if timestamp == 0 {
        return Err(LedgerError::InvalidTimestamp { timestamp });
    }
    if *digest == ZERO_DIGEST {
        return Err(LedgerError::ZeroDigest);
    }
    if flight_id.len() > config.max_flight_id_len {
        return Err(LedgerError::FieldTooLong {
            field: "flight_id",
            len: flight_id.len(),
            max: config.max_flight_id_len,
        });
    }
    if event_type.len() > config.max_event_type_len {
        return Err(LedgerError::FieldTooLong {
            field: "event_type",
            len: event_type.len(),
            max: config.max_event_type_len,
        });
    }
    if actor.len() > config.max_actor_len {
        return Err(LedgerError::FieldTooLong {
            field: "actor",
            len: actor.len(),
            max: config.max_actor_len,
        });
    }
    Ok(())
}

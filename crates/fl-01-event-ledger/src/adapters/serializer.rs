//! Bincode-backed entry serializer.

use crate::domain::errors::SerializationError;
use crate::ports::outbound::EntrySerializer;
use shared_types::LedgerEntry;

/// Default entry serializer using bincode.
#[derive(Debug, Default)]
pub struct BincodeEntrySerializer;

impl EntrySerializer for BincodeEntrySerializer {
    fn serialize(&self, entry: &LedgerEntry) -> Result<Vec<u8>, SerializationError> {
        bincode::serialize(entry).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }

    fn deserialize(&self, data: &[u8]) -> Result<LedgerEntry, SerializationError> {
        bincode::deserialize(data).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }

    fn serialize_indices(&self, indices: &[u64]) -> Result<Vec<u8>, SerializationError> {
        bincode::serialize(indices).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }

    fn deserialize_indices(&self, data: &[u8]) -> Result<Vec<u64>, SerializationError> {
        bincode::deserialize(data).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }
}

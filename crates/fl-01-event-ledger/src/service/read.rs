//! # Read Path
//!
//! Entry and range reads against the backing store. Reads never mutate
//! state and may run concurrently with each other.

use super::EventLedgerService;
use crate::domain::entities::KeyPrefix;
use crate::domain::errors::LedgerError;
use crate::ports::outbound::{BlockSource, EntrySerializer, KeyValueStore, TimeSource};
use shared_types::LedgerEntry;

impl<KV, TS, BS, SER> EventLedgerService<KV, TS, BS, SER>
where
    KV: KeyValueStore,
    TS: TimeSource,
    BS: BlockSource,
    SER: EntrySerializer,
{
    pub(crate) fn read_entry(&self, index: u64) -> Result<LedgerEntry, LedgerError> {
        let data = self
            .kv_store
            .get(&KeyPrefix::entry_key(index))?
            .ok_or(LedgerError::EntryNotFound { index })?;

        let entry = self.serializer.deserialize(&data)?;
        Ok(entry)
    }

    pub(crate) fn read_range(
        &self,
        flight_id: &str,
        start: u64,
        count: u64,
    ) -> Result<Vec<LedgerEntry>, LedgerError> {
        let indices = self.flight_index.indices_for(flight_id);
        let available = indices.len() as u64;

        if start >= available {
            return Err(LedgerError::RangeOutOfBounds {
                flight_id: flight_id.to_string(),
                start,
                available,
            });
        }

        // Clamp to both the flight's length and the configured cap
        let count = count.min(self.config.max_range_limit);
        let end = (start + count).min(available);

        let mut entries = Vec::with_capacity((end - start) as usize);
        for &index in &indices[start as usize..end as usize] {
            entries.push(self.read_entry(index)?);
        }
        Ok(entries)
    }
}

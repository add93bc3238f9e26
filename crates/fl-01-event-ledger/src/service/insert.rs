//! # Insertion Path
//!
//! The ledger's single mutation point.

use super::EventLedgerService;
use crate::domain::entities::KeyPrefix;
use crate::domain::errors::LedgerError;
use crate::domain::validation::validate_insert;
use crate::ports::inbound::{EventLedgerApi, InsertRequest};
use crate::ports::outbound::{BatchOperation, BlockSource, EntrySerializer, KeyValueStore, TimeSource};
use shared_types::{Digest, LedgerEntry};

impl<KV, TS, BS, SER> EventLedgerService<KV, TS, BS, SER>
where
    KV: KeyValueStore,
    TS: TimeSource,
    BS: BlockSource,
    SER: EntrySerializer,
{
    /// Validate and append one entry; shared by `insert` and `insert_batch`.
    fn insert_one(
        &mut self,
        flight_id: &str,
        event_type: &str,
        timestamp: u64,
        actor: &str,
        digest: Digest,
    ) -> Result<u64, LedgerError> {
        validate_insert(flight_id, event_type, timestamp, actor, &digest, &self.config)?;

        // Invariant 1: global digest uniqueness — first insertion wins
        if let Some(&existing_index) = self.digest_index.get(&digest) {
            return Err(LedgerError::DuplicateDigest {
                digest,
                existing_index,
            });
        }

        let index = self.metadata.next_index();
        let block = self.block_source.current_block();
        let now = self.time_source.now();

        let entry = LedgerEntry {
            index,
            flight_id: flight_id.to_string(),
            event_type: event_type.to_string(),
            timestamp,
            actor: actor.to_string(),
            digest,
            anchored_at_block: block,
            anchored_at_time: now,
        };

        let entry_bytes = self.serializer.serialize(&entry)?;

        // Build the updated flight index list without mutating state yet
        let mut indices = self.flight_index.indices_for(flight_id).to_vec();
        indices.push(index);
        let indices_bytes = self.serializer.serialize_indices(&indices)?;

        let mut metadata = self.metadata.clone();
        metadata.on_entry_appended(block);
        let metadata_bytes =
            bincode::serialize(&metadata).map_err(|e| LedgerError::SerializationFailure {
                message: e.to_string(),
            })?;

        // Invariant 5: digest marker, entry, flight index, and metadata
        // land together or not at all
        let operations = vec![
            BatchOperation::put(KeyPrefix::entry_key(index), entry_bytes),
            BatchOperation::put(KeyPrefix::digest_key(&digest), index.to_be_bytes().to_vec()),
            BatchOperation::put(KeyPrefix::flight_key(flight_id), indices_bytes),
            BatchOperation::put(KeyPrefix::metadata_key(), metadata_bytes),
        ];
        self.kv_store.atomic_batch_write(operations)?;

        // Mirror into in-memory state only after the batch committed
        self.flight_index.append(flight_id, index);
        self.digest_index.insert(digest, index);
        self.metadata = metadata;

        tracing::info!(
            "[fl-01] ✓ Entry #{} recorded: {} {} @ block {} (0x{}…)",
            index,
            flight_id,
            event_type,
            block,
            hex::encode(&digest[..4])
        );

        Ok(index)
    }
}

impl<KV, TS, BS, SER> EventLedgerApi for EventLedgerService<KV, TS, BS, SER>
where
    KV: KeyValueStore,
    TS: TimeSource,
    BS: BlockSource,
    SER: EntrySerializer,
{
    fn insert(
        &mut self,
        flight_id: &str,
        event_type: &str,
        timestamp: u64,
        actor: &str,
        digest: Digest,
    ) -> Result<u64, LedgerError> {
        self.insert_one(flight_id, event_type, timestamp, actor, digest)
    }

    fn insert_batch(&mut self, requests: Vec<InsertRequest>) -> Vec<Result<u64, LedgerError>> {
        // Best-effort per item: a duplicate digest is reported in its slot
        // and the remaining items are still recorded.
        let mut results = Vec::with_capacity(requests.len());
        for request in requests {
            let result = self.insert_one(
                &request.flight_id,
                &request.event_type,
                request.timestamp,
                &request.actor,
                request.digest,
            );
            if let Err(ref e) = result {
                tracing::debug!("[fl-01] Batch item skipped: {}", e);
            }
            results.push(result);
        }
        results
    }

    fn get_by_index(&self, index: u64) -> Result<LedgerEntry, LedgerError> {
        self.read_entry(index)
    }

    fn get_indices_for_flight(&self, flight_id: &str) -> Vec<u64> {
        self.flight_index.indices_for(flight_id).to_vec()
    }

    fn get_range(
        &self,
        flight_id: &str,
        start: u64,
        count: u64,
    ) -> Result<Vec<LedgerEntry>, LedgerError> {
        self.read_range(flight_id, start, count)
    }

    fn get_flight_event_count(&self, flight_id: &str) -> u64 {
        self.flight_index.count_for(flight_id)
    }

    fn digest_exists(&self, digest: &Digest) -> bool {
        self.digest_index.contains_key(digest)
    }

    fn total_events(&self) -> u64 {
        self.metadata.total_entries
    }
}

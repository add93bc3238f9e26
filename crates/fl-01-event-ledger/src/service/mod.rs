//! # Event Ledger Service
//!
//! The main service implementing the Event Ledger API.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `EventLedgerApi` for insert/read operations
//! 2. Enforces all 6 domain invariants
//! 3. Uses dependency injection for all external dependencies
//!
//! Insertion is the only mutation point (`&mut self`); the digest-set
//! check, entry append, and flight-index append go through a single atomic
//! batch write so duplicates can never partially apply (Invariant 5).

mod insert;
mod read;
#[cfg(test)]
mod tests;

use crate::adapters::{BincodeEntrySerializer, InMemoryKVStore, SystemTimeSource, TickingBlockSource};
use crate::domain::config::LedgerConfig;
use crate::domain::entities::{FlightIndex, KeyPrefix, LedgerMetadata};
use crate::domain::errors::LedgerError;
use crate::ports::outbound::{BlockSource, EntrySerializer, KeyValueStore, TimeSource};
use shared_types::Digest;
use std::collections::HashMap;

/// The Event Ledger Service.
///
/// Generic over its outbound ports so tests can inject controllable
/// adapters.
#[derive(Debug)]
pub struct EventLedgerService<KV, TS, BS, SER>
where
    KV: KeyValueStore,
    TS: TimeSource,
    BS: BlockSource,
    SER: EntrySerializer,
{
    /// Key-value store for persistence.
    pub(crate) kv_store: KV,
    /// Time source for insertion timestamps.
    pub(crate) time_source: TS,
    /// Source of the current block number.
    pub(crate) block_source: BS,
    /// Entry serializer for encoding/decoding.
    pub(crate) serializer: SER,
    /// Service configuration.
    pub(crate) config: LedgerConfig,
    /// In-memory per-flight index (Invariant 4).
    pub(crate) flight_index: FlightIndex,
    /// In-memory digest set: digest -> index holding it (Invariant 1).
    pub(crate) digest_index: HashMap<Digest, u64>,
    /// In-memory ledger metadata.
    pub(crate) metadata: LedgerMetadata,
}

/// Dependencies for EventLedgerService.
pub struct LedgerDependencies<KV, TS, BS, SER> {
    pub kv_store: KV,
    pub time_source: TS,
    pub block_source: BS,
    pub serializer: SER,
}

impl<KV, TS, BS, SER> EventLedgerService<KV, TS, BS, SER>
where
    KV: KeyValueStore,
    TS: TimeSource,
    BS: BlockSource,
    SER: EntrySerializer,
{
    /// Create a new Event Ledger Service with the given dependencies.
    ///
    /// On construction, the in-memory flight index, digest set, and
    /// metadata are rebuilt from the backing store, so a file-backed
    /// ledger picks up exactly where it left off. A store that exists but
    /// cannot be decoded is an error: starting fresh over corrupt state
    /// would re-issue index 0 and overwrite anchored entries.
    pub fn new(
        deps: LedgerDependencies<KV, TS, BS, SER>,
        config: LedgerConfig,
    ) -> Result<Self, LedgerError> {
        let mut service = Self {
            kv_store: deps.kv_store,
            time_source: deps.time_source,
            block_source: deps.block_source,
            serializer: deps.serializer,
            config,
            flight_index: FlightIndex::new(),
            digest_index: HashMap::new(),
            metadata: LedgerMetadata::default(),
        };

        // Rebuild indexes from persistent storage (empty store is fine)
        service.load_state_from_storage()?;

        Ok(service)
    }

    /// Rebuild in-memory state from the backing store.
    fn load_state_from_storage(&mut self) -> Result<(), LedgerError> {
        if let Some(bytes) = self.kv_store.get(&KeyPrefix::metadata_key())? {
            self.metadata = bincode::deserialize(&bytes).map_err(|e| {
                LedgerError::SerializationFailure {
                    message: e.to_string(),
                }
            })?;
        }

        for (key, value) in self.kv_store.prefix_scan(KeyPrefix::FLIGHT)? {
            let flight_id = String::from_utf8(key[KeyPrefix::FLIGHT.len()..].to_vec()).map_err(
                |_| LedgerError::SerializationFailure {
                    message: format!("non-UTF-8 flight key: {}", hex::encode(&key)),
                },
            )?;
            let indices = self.serializer.deserialize_indices(&value)?;
            self.flight_index.restore(flight_id, indices);
        }

        for (key, value) in self.kv_store.prefix_scan(KeyPrefix::DIGEST)? {
            let digest_bytes = &key[KeyPrefix::DIGEST.len()..];
            if digest_bytes.len() != 32 || value.len() != 8 {
                continue; // Unknown key shape from a future version
            }
            let mut digest: Digest = [0u8; 32];
            digest.copy_from_slice(digest_bytes);
            let mut index_bytes = [0u8; 8];
            index_bytes.copy_from_slice(&value);
            self.digest_index.insert(digest, u64::from_be_bytes(index_bytes));
        }

        if self.metadata.total_entries > 0 {
            tracing::info!(
                "[fl-01] 💾 Ledger restored: {} entries, {} flights",
                self.metadata.total_entries,
                self.flight_index.flight_count()
            );
        }

        Ok(())
    }
}

impl
    EventLedgerService<InMemoryKVStore, SystemTimeSource, TickingBlockSource, BincodeEntrySerializer>
{
    /// Create a service with in-memory adapters.
    ///
    /// Returns `Result` for signature parity with [`Self::new`]; a fresh
    /// in-memory store has nothing to restore, so this only fails if the
    /// restore path itself is broken.
    pub fn new_in_memory(config: LedgerConfig) -> Result<Self, LedgerError> {
        Self::new(
            LedgerDependencies {
                kv_store: InMemoryKVStore::new(),
                time_source: SystemTimeSource,
                block_source: TickingBlockSource::starting_at(1),
                serializer: BincodeEntrySerializer,
            },
            config,
        )
    }
}

//! # Event Ledger (fl-01)
//!
//! The Event Ledger is the append-only, content-addressed registry of
//! recorded flight events: the on-chain source of truth the off-chain
//! anchoring subsystem (fl-02) reconciles against.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Digest Uniqueness | No two entries ever share a digest; duplicates are rejected, not overwritten |
//! | 2 | Append-Only | Entries are never deleted or mutated after insertion |
//! | 3 | Index Monotonicity | The Nth successful insertion is assigned index N-1; indices are never reused |
//! | 4 | Per-Flight Ordering | `get_indices_for_flight` returns indices in insertion order |
//! | 5 | Atomic Insertion | Digest-set check, entry append, and flight-index append apply together or not at all |
//! | 6 | Open Write Path | There is no caller-identity gate; integrity rests entirely on digest dedup |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure domain logic (entities, errors, validation, config)
//! - `ports/` - Port traits (inbound API, outbound SPI)
//! - `adapters/` - In-memory and file-backed adapters for the outbound ports
//! - `service/` - Application service implementing the API
//! - `bus/` - Event bus adapter publishing insertion notifications
//!
//! ## Usage
//!
//! ```ignore
//! use fl_01_event_ledger::{EventLedgerService, LedgerConfig, LedgerDependencies};
//!
//! let mut ledger = EventLedgerService::new_in_memory(LedgerConfig::default())?;
//!
//! let index = ledger.insert("UA123", "DEPARTURE", 1_700_000_000, "ATC", digest)?;
//! let entry = ledger.get_by_index(index)?;
//! ```

pub mod adapters;
pub mod bus;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use domain::config::LedgerConfig;
pub use domain::entities::{FlightIndex, LedgerMetadata};
pub use domain::errors::{KVStoreError, LedgerError};
pub use ports::inbound::EventLedgerApi;
pub use ports::outbound::{BatchOperation, BlockSource, EntrySerializer, KeyValueStore, TimeSource};
pub use service::{EventLedgerService, LedgerDependencies};

//! # FL-02 Anchoring
//!
//! Off-chain side of the event ledger reconciliation protocol.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Take flight events produced off-chain and shepherd them through the
//! anchoring lifecycle against an append-only, content-addressed ledger:
//!
//! - Canonical SHA-256 digests as the sole dedup/identity key
//! - Unsigned transaction descriptors for an external signer; this crate
//!   never holds signing authority and never submits
//! - Confirmation reconciliation, including the benign-duplicate path
//!   where a digest already anchored by someone else confirms the event
//!   by cross-reference
//! - Bounded-time ledger reads where a timeout is "unknown", never "empty"
//!
//! ## Lifecycle
//!
//! ```text
//! Unanchored --prepare--> Pending --confirm--> Confirmed
//!      ^                     |
//!      |                   fail
//!      +---- prepare ---- Failed
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! fl-02-anchoring/
//! ├── domain/      # FlightEvent, AnchorStatus, digest, call-data, errors
//! ├── ports/       # EventRepository, GasEstimator, LedgerClient
//! ├── adapters/    # In-memory repository, fixed gas estimator
//! └── service/     # Assembler, Preparer, Reconciler, Reader
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{FixedGasEstimator, InMemoryEventRepository};
pub use domain::{
    AnchorConfig, AnchorError, AnchorRef, AnchorStatus, FlightEvent, UnsignedDescriptor,
};
pub use ports::{EventRepository, GasEstimator, LedgerClient, MockLedgerClient};
pub use service::{
    ChainReader, ConfirmationReconciler, EventAssembler, LedgerStats, NewEvent,
    TransactionPreparer, VerifiedEvent,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! # Domain Layer
//!
//! Pure domain logic for the Event Ledger: entities, errors, input
//! validation, and configuration. Nothing in this module performs I/O.

pub mod config;
pub mod entities;
pub mod errors;
pub mod validation;

pub use config::LedgerConfig;
pub use entities::{FlightIndex, KeyPrefix, LedgerMetadata};
pub use errors::{KVStoreError, LedgerError, SerializationError};

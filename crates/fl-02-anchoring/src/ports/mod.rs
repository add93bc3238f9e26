//! # Ports
//!
//! Outbound contracts to the anchoring core's external collaborators.

pub mod outbound;

pub use outbound::{EventRepository, GasEstimator, LedgerClient, MockLedgerClient};

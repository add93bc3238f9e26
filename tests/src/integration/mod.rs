//! Cross-crate integration scenarios.

pub mod ledger_client;

mod anchoring_flow;
mod bus_flow;

pub use ledger_client::InProcessLedgerClient;

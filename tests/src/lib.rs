//! # FlightLedger Test Suite
//!
//! Unified test crate for cross-crate scenarios:
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── ledger_client.rs   # In-process LedgerClient over the real store
//!     ├── anchoring_flow.rs  # create -> prepare -> insert -> confirm -> verify
//!     └── bus_flow.rs        # Notification choreography over shared-bus
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p fl-tests
//! cargo test -p fl-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;

//! # Anchoring Services
//!
//! The four collaborating services of the anchoring lifecycle:
//!
//! - [`EventAssembler`] creates events and joins them with chain state
//! - [`TransactionPreparer`] issues unsigned descriptors
//! - [`ConfirmationReconciler`] records submission outcomes
//! - [`ChainReader`] queries the ledger under a bounded timeout

pub mod assembler;
pub mod preparer;
pub mod reader;
pub mod reconciler;

pub use assembler::{EventAssembler, NewEvent, VerifiedEvent};
pub use preparer::TransactionPreparer;
pub use reader::{ChainReader, LedgerStats};
pub use reconciler::ConfirmationReconciler;

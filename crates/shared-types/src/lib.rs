//! # Shared Types Crate
//!
//! Domain entities shared between the Event Ledger (fl-01) and the
//! Anchoring subsystem (fl-02).
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Digest Identity**: A 32-byte payload digest is the sole identity used
//!   for on-chain dedup; everything else is descriptive metadata.

pub mod entities;
pub mod vocabulary;

pub use entities::*;
pub use vocabulary::{actors, event_types};

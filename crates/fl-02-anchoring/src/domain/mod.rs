//! # Anchoring Domain
//!
//! Entities, errors, and the two pure functions of the anchoring core:
//! the canonical digest and the ABI call-data encoding.

pub mod calldata;
pub mod config;
pub mod digest;
pub mod entities;
pub mod errors;

pub use config::AnchorConfig;
pub use entities::{AnchorRef, AnchorStatus, FlightEvent, UnsignedDescriptor};
pub use errors::AnchorError;

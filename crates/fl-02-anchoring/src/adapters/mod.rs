//! # Adapters
//!
//! Concrete implementations of the outbound ports.

mod gas;
mod repository;

pub use gas::FixedGasEstimator;
pub use repository::InMemoryEventRepository;

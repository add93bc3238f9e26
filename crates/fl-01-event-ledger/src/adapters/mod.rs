//! # Adapters
//!
//! Implementations of the outbound ports. The in-memory adapters back unit
//! tests; the file-backed store provides durability without a native
//! database dependency.

pub mod block;
pub mod file;
pub mod memory;
pub mod serializer;
pub mod time;

pub use block::{FixedBlockSource, TickingBlockSource};
pub use file::FileBackedKVStore;
pub use memory::InMemoryKVStore;
pub use serializer::BincodeEntrySerializer;
pub use time::SystemTimeSource;

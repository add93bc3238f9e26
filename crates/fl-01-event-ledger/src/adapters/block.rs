//! Block sources.
//!
//! The ledger stamps each entry with the block at which it was recorded.
//! Production embeds the chain substrate's height; tests use these.

use crate::ports::outbound::BlockSource;
use shared_types::BlockNumber;
use std::sync::atomic::{AtomicU64, Ordering};

/// Block source reporting a constant block number.
pub struct FixedBlockSource {
    block: BlockNumber,
}

impl FixedBlockSource {
    #[must_use]
    pub fn new(block: BlockNumber) -> Self {
        Self { block }
    }
}

impl BlockSource for FixedBlockSource {
    fn current_block(&self) -> BlockNumber {
        self.block
    }
}

/// Block source that advances by one on every observation.
///
/// Simulates a chain producing a block per insertion, which makes
/// block-stamp assertions deterministic in tests.
#[derive(Debug, Default)]
pub struct TickingBlockSource {
    next: AtomicU64,
}

impl TickingBlockSource {
    #[must_use]
    pub fn starting_at(block: BlockNumber) -> Self {
        Self {
            next: AtomicU64::new(block),
        }
    }
}

impl BlockSource for TickingBlockSource {
    fn current_block(&self) -> BlockNumber {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

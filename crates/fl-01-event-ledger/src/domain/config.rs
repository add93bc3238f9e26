//! # Ledger Configuration
//!
//! Immutable configuration for the Event Ledger service.

/// Configuration for the ledger service.
///
/// All values have sensible defaults for production use.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Maximum flight identifier length in bytes (default: 16).
    pub max_flight_id_len: usize,

    /// Maximum event type length in bytes (default: 64).
    pub max_event_type_len: usize,

    /// Maximum actor length in bytes (default: 128).
    pub max_actor_len: usize,

    /// Maximum number of entries a single `get_range` call may return
    /// (default: 100). Larger requests are clamped, not rejected.
    pub max_range_limit: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_flight_id_len: 16,
            max_event_type_len: 64,
            max_actor_len: 128,
            max_range_limit: 100,
        }
    }
}

impl LedgerConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum range limit.
    #[must_use]
    pub fn with_max_range_limit(mut self, limit: u64) -> Self {
        self.max_range_limit = limit;
        self
    }

    /// Set the maximum flight identifier length.
    #[must_use]
    pub fn with_max_flight_id_len(mut self, len: usize) -> Self {
        self.max_flight_id_len = len;
        self
    }
}

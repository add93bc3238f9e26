//! # Anchoring Configuration

use std::time::Duration;

/// Configuration for the anchoring services.
#[derive(Clone, Debug)]
pub struct AnchorConfig {
    /// Target ledger contract address, carried verbatim into descriptors.
    pub contract_address: String,
    /// Safety margin applied on top of the raw gas estimate, in percent.
    pub gas_buffer_percent: u64,
    /// Gas limit used when estimation itself fails.
    pub default_gas_limit: u64,
    /// Bound on every ledger read; expiry surfaces as `Unavailable`.
    pub read_timeout: Duration,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            contract_address: String::new(),
            gas_buffer_percent: 20,
            default_gas_limit: 300_000,
            read_timeout: Duration::from_secs(5),
        }
    }
}

impl AnchorConfig {
    /// Config targeting the given ledger contract.
    pub fn for_contract(address: impl Into<String>) -> Self {
        Self {
            contract_address: address.into(),
            ..Self::default()
        }
    }

    /// Set the gas safety margin in percent.
    pub fn with_gas_buffer_percent(mut self, percent: u64) -> Self {
        self.gas_buffer_percent = percent;
        self
    }

    /// Set the fallback gas limit.
    pub fn with_default_gas_limit(mut self, gas: u64) -> Self {
        self.default_gas_limit = gas;
        self
    }

    /// Set the read timeout.
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Apply the configured safety margin to a raw gas estimate.
    pub fn buffered_gas(&self, raw_estimate: u64) -> u64 {
        raw_estimate + raw_estimate * self.gas_buffer_percent / 100
    }
}

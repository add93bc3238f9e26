//! Fixed-value gas estimator.

use async_trait::async_trait;

use crate::domain::errors::AnchorError;
use crate::ports::outbound::GasEstimator;

/// Gas estimator returning a constant, or failing on demand.
///
/// Stands in for a node-backed estimator; also the test double for the
/// estimation-failure fallback path.
#[derive(Clone, Debug)]
pub struct FixedGasEstimator {
    estimate: u64,
    should_fail: bool,
}

impl FixedGasEstimator {
    /// Estimator always returning `estimate`.
    pub fn new(estimate: u64) -> Self {
        Self {
            estimate,
            should_fail: false,
        }
    }

    /// Estimator whose every call fails.
    pub fn failing() -> Self {
        Self {
            estimate: 0,
            should_fail: true,
        }
    }
}

#[async_trait]
impl GasEstimator for FixedGasEstimator {
    async fn estimate(&self, _to: &str, _call_data: &[u8]) -> Result<u64, AnchorError> {
        if self.should_fail {
            return Err(AnchorError::Unavailable(
                "gas estimation unavailable".to_string(),
            ));
        }
        Ok(self.estimate)
    }
}

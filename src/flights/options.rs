use crate::types::SAMPLE_INTERVAL;
use serde::{Deserialize, Serialize};

/// Handling of a turn in place (position unchanged, heading changed).
///
/// Every policy except `Abort` records the pair as a
/// [`TransitionAnomaly`](super::TransitionAnomaly).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnomalyPolicy {
    /// Advance past the pair without adding time or length.
    #[default]
    Skip,
    /// Close the current flight as if the pair were a pivot. The next flight
    /// starts with no time and no length.
    Pivot,
    /// Stop with `Error::AnomalousTransition`.
    Abort,
}

/// What happens to the segment still open when the samples run out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlushPolicy {
    /// Never emit the open segment. Existing segment files were produced this way.
    #[default]
    Discard,
    /// Emit the open segment if it contains at least one moving interval.
    Emit,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionOptions {
    /// Seconds between consecutive samples.
    pub sample_interval: f64,
    pub anomaly_policy: AnomalyPolicy,
    pub flush_policy: FlushPolicy,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            sample_interval: SAMPLE_INTERVAL,
            anomaly_policy: AnomalyPolicy::default(),
            flush_policy: FlushPolicy::default(),
        }
    }
}

impl ExtractionOptions {
    pub fn with_anomaly_policy(mut self, policy: AnomalyPolicy) -> Self {
        self.anomaly_policy = policy;
        self
    }

    pub fn with_flush_policy(mut self, policy: FlushPolicy) -> Self {
        self.flush_policy = policy;
        self
    }
}

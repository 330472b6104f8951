//! CPU snapshot type

use chrono::{DateTime, Local};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// CPU utilization sampled over a fixed window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CpuSnapshot {
    /// Moment the sample window closed
    pub timestamp: DateTime<Local>,
    /// Global CPU usage percentage (0-100)
    #[schemars(range(min = 0, max = 100))]
    pub cpu_percent: f64,
    /// Number of logical CPU cores (including hyperthreading)
    #[schemars(extend("exclusiveMinimum" = 0))]
    pub cpu_count: usize,
    /// Current CPU frequency in MHz, 0 when the host does not expose it
    #[serde(rename = "cpu_freq")]
    #[schemars(range(min = 0))]
    pub cpu_freq_mhz: f64,
}

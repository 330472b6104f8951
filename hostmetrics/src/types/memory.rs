//! Memory snapshot type

use chrono::{DateTime, Local};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Virtual memory usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MemorySnapshot {
    pub timestamp: DateTime<Local>,
    /// Memory usage percentage (0-100)
    #[schemars(range(min = 0, max = 100))]
    pub memory_percent: f64,
    /// Memory available to new processes in MB, never above the total
    #[schemars(range(min = 0))]
    pub memory_available_mb: f64,
    /// Total physical memory in MB (strictly positive)
    #[schemars(extend("exclusiveMinimum" = 0))]
    pub memory_total_mb: f64,
}

//! Disk snapshot type

use chrono::{DateTime, Local};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Usage of the single configured filesystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DiskSnapshot {
    pub timestamp: DateTime<Local>,
    /// Disk usage percentage (0-100)
    #[schemars(range(min = 0, max = 100))]
    pub disk_percent: f64,
    /// Space available to unprivileged users in GB
    #[schemars(range(min = 0))]
    pub disk_free_gb: f64,
    /// Filesystem size in GB (strictly positive)
    #[schemars(extend("exclusiveMinimum" = 0))]
    pub disk_total_gb: f64,
}

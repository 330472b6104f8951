//! Network snapshot type

use chrono::{DateTime, Local};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Host-wide network counters, cumulative since boot
///
/// The values only grow until the host (or its counters) reset. Clients that
/// want a rate sample twice and take the difference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NetworkSnapshot {
    pub timestamp: DateTime<Local>,
    /// Total bytes sent, in MB
    #[schemars(range(min = 0))]
    pub bytes_sent_mb: f64,
    /// Total bytes received, in MB
    #[schemars(range(min = 0))]
    pub bytes_recv_mb: f64,
    /// Total packets sent
    pub packets_sent: u64,
    /// Total packets received
    pub packets_recv: u64,
}

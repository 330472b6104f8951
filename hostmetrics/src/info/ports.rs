//! Per-port traffic probe
//!
//! Reads the document the `network_monitor` kernel module publishes:
//!
//! ```text
//! {
//!   "tcp": { "443": {"packets": 10, "bytes": 4000} },
//!   "udp": { "53": {"packets": 2, "bytes": 180} },
//!   "total": { "packets": 12, "bytes": 4180 }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Local;
use serde::Deserialize;

use crate::error::{MetricsResult, ProbeError};
use crate::source::HostSource;
use crate::types::{PortTrafficSnapshot, TrafficCounters};
use crate::validation::Validate;

#[derive(Deserialize)]
struct TrafficDocument {
    tcp: BTreeMap<u16, TrafficCounters>,
    udp: BTreeMap<u16, TrafficCounters>,
    total: TrafficCounters,
}

/// Read cumulative per-port TCP/UDP counters from `path`
pub fn get_port_traffic_snapshot(
    source: &dyn HostSource,
    path: &Path,
) -> MetricsResult<PortTrafficSnapshot> {
    let text = source.port_traffic(path)?;
    let document: TrafficDocument =
        serde_json::from_str(&text).map_err(|e| ProbeError::Invalid {
            counter: "port traffic",
            reason: format!("malformed {}: {}", path.display(), e),
        })?;

    let snapshot = PortTrafficSnapshot {
        timestamp: Local::now(),
        tcp: document.tcp,
        udp: document.udp,
        total: document.total,
    };
    snapshot.validate()?;

    tracing::debug!(
        tcp_ports = snapshot.tcp.len(),
        udp_ports = snapshot.udp.len(),
        total_packets = snapshot.total.packets,
        "port traffic read"
    );
    Ok(snapshot)
}

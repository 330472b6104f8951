//! Per-port traffic snapshot type

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Packet and byte counters for one port, or for all traffic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TrafficCounters {
    pub packets: u64,
    pub bytes: u64,
}

/// Cumulative IPv4 TCP/UDP traffic per port, as counted by the
/// `network_monitor` kernel module
///
/// A packet is counted on both its source and destination port, so the
/// per-port counters do not add up to `total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PortTrafficSnapshot {
    pub timestamp: DateTime<Local>,
    pub tcp: BTreeMap<u16, TrafficCounters>,
    pub udp: BTreeMap<u16, TrafficCounters>,
    pub total: TrafficCounters,
}

//! Network probe

use chrono::Local;

use crate::error::MetricsResult;
use crate::source::HostSource;
use crate::types::NetworkSnapshot;
use crate::units::bytes_to_mb;
use crate::validation::Validate;

/// Read host-wide cumulative network counters
pub fn get_network_snapshot(source: &dyn HostSource) -> MetricsResult<NetworkSnapshot> {
    let raw = source.network()?;

    let snapshot = NetworkSnapshot {
        timestamp: Local::now(),
        bytes_sent_mb: bytes_to_mb(raw.bytes_sent),
        bytes_recv_mb: bytes_to_mb(raw.bytes_recv),
        packets_sent: raw.packets_sent,
        packets_recv: raw.packets_recv,
    };
    snapshot.validate()?;
    Ok(snapshot)
}

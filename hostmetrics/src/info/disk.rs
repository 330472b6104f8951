//! Disk probe

use std::path::Path;

use chrono::Local;

use crate::error::MetricsResult;
use crate::source::HostSource;
use crate::types::DiskSnapshot;
use crate::units::{bytes_to_gb, percent_of};
use crate::validation::Validate;

/// Read usage of the filesystem containing `path`
///
/// The percentage is `used / (used + free)`, so space reserved for root does
/// not count as either.
pub fn get_disk_snapshot(source: &dyn HostSource, path: &Path) -> MetricsResult<DiskSnapshot> {
    let raw = source.disk(path)?;

    let snapshot = DiskSnapshot {
        timestamp: Local::now(),
        disk_percent: percent_of(raw.used_bytes, raw.used_bytes.saturating_add(raw.free_bytes))
            .unwrap_or(0.0),
        disk_free_gb: bytes_to_gb(raw.free_bytes),
        disk_total_gb: bytes_to_gb(raw.total_bytes),
    };
    snapshot.validate()?;

    tracing::debug!(path = %path.display(), disk_percent = snapshot.disk_percent, "disk read");
    Ok(snapshot)
}

//! Memory probe

use chrono::Local;

use crate::error::{MetricsResult, ProbeError};
use crate::source::HostSource;
use crate::types::MemorySnapshot;
use crate::units::{bytes_to_mb, percent_of};
use crate::validation::Validate;

/// Read virtual memory usage
pub fn get_memory_snapshot(source: &dyn HostSource) -> MetricsResult<MemorySnapshot> {
    let raw = source.memory()?;

    // available > total is left for validation to reject
    let used = raw.total_bytes.saturating_sub(raw.available_bytes);
    let memory_percent = percent_of(used, raw.total_bytes).ok_or_else(|| ProbeError::Invalid {
        counter: "virtual memory",
        reason: "total memory reported as 0 bytes".to_string(),
    })?;

    let snapshot = MemorySnapshot {
        timestamp: Local::now(),
        memory_percent,
        memory_available_mb: bytes_to_mb(raw.available_bytes),
        memory_total_mb: bytes_to_mb(raw.total_bytes),
    };
    snapshot.validate()?;
    Ok(snapshot)
}

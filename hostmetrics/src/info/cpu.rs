//! CPU probe

use std::time::Duration;

use chrono::Local;

use crate::error::MetricsResult;
use crate::source::HostSource;
use crate::types::CpuSnapshot;
use crate::validation::Validate;

/// Shortest window a CPU sample may cover
pub const MIN_CPU_WINDOW: Duration = Duration::from_secs(1);

/// Sample CPU utilization over `window` (blocking)
///
/// Windows shorter than [`MIN_CPU_WINDOW`] are raised to it. The timestamp is
/// taken when the window closes. A host without a frequency reading reports
/// 0 MHz; nothing else has a fallback.
pub fn get_cpu_snapshot(source: &dyn HostSource, window: Duration) -> MetricsResult<CpuSnapshot> {
    let window = window.max(MIN_CPU_WINDOW);
    let raw = source.sample_cpu(window)?;

    let snapshot = CpuSnapshot {
        timestamp: Local::now(),
        cpu_percent: f64::from(raw.usage_percent),
        cpu_count: raw.logical_cores,
        cpu_freq_mhz: raw.frequency_mhz.map(|mhz| mhz as f64).unwrap_or(0.0),
    };
    snapshot.validate()?;

    tracing::debug!(
        window_ms = window.as_millis() as u64,
        cpu_percent = snapshot.cpu_percent,
        cpu_count = snapshot.cpu_count,
        "cpu sample complete"
    );
    Ok(snapshot)
}

//! Raw host readings
//!
//! [`HostSource`] is the seam between the probes and the operating system.
//! Readings come back in OS units (bytes, raw percent, MHz); conversion and
//! validation happen in [`crate::info`].

use std::path::Path;
use std::time::Duration;

use sysinfo::{CpuRefreshKind, MemoryRefreshKind, Networks, RefreshKind, System};

use crate::error::ProbeError;

/// CPU state after a sampling window
#[derive(Debug, Clone, PartialEq)]
pub struct RawCpu {
    /// Global usage over the window, as reported by the OS
    pub usage_percent: f32,
    pub logical_cores: usize,
    /// `None` when the host does not expose a frequency
    pub frequency_mhz: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawMemory {
    pub total_bytes: u64,
    pub available_bytes: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawDisk {
    pub total_bytes: u64,
    /// Space available to unprivileged users
    pub free_bytes: u64,
    pub used_bytes: u64,
}

/// Host-wide cumulative network counters
#[derive(Debug, Clone, PartialEq)]
pub struct RawNetwork {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
}

/// Source of raw OS readings
///
/// All methods may block. `sample_cpu` blocks for at least `window`.
pub trait HostSource: Send + Sync {
    fn sample_cpu(&self, window: Duration) -> Result<RawCpu, ProbeError>;
    fn memory(&self) -> Result<RawMemory, ProbeError>;
    fn disk(&self, path: &Path) -> Result<RawDisk, ProbeError>;
    fn network(&self) -> Result<RawNetwork, ProbeError>;
    /// The per-port traffic document at `path`, unparsed
    fn port_traffic(&self, path: &Path) -> Result<String, ProbeError>;
}

/// [`HostSource`] backed by the `sysinfo` crate (and `statvfs` on unix)
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoSource;

impl SysinfoSource {
    pub fn new() -> Self {
        Self
    }
}

impl HostSource for SysinfoSource {
    fn sample_cpu(&self, window: Duration) -> Result<RawCpu, ProbeError> {
        let window = window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);

        // A System owned by this call holds both ends of the window, so
        // concurrent samples never share a "last refresh" cursor.
        let mut sys = System::new_with_specifics(
            RefreshKind::new().with_cpu(CpuRefreshKind::everything()),
        );
        std::thread::sleep(window);
        sys.refresh_cpu_usage();

        let cpus = sys.cpus();
        if cpus.is_empty() {
            return Err(ProbeError::Unavailable {
                counter: "cpu times",
                reason: "no logical CPUs reported".to_string(),
            });
        }

        Ok(RawCpu {
            usage_percent: sys.global_cpu_usage(),
            logical_cores: cpus.len(),
            frequency_mhz: cpus.first().map(|c| c.frequency()).filter(|&f| f > 0),
        })
    }

    fn memory(&self) -> Result<RawMemory, ProbeError> {
        let sys = System::new_with_specifics(
            RefreshKind::new().with_memory(MemoryRefreshKind::new().with_ram()),
        );
        Ok(RawMemory {
            total_bytes: sys.total_memory(),
            available_bytes: sys.available_memory(),
        })
    }

    fn disk(&self, path: &Path) -> Result<RawDisk, ProbeError> {
        filesystem_usage(path)
    }

    fn network(&self) -> Result<RawNetwork, ProbeError> {
        let networks = Networks::new_with_refreshed_list();
        if networks.is_empty() {
            return Err(ProbeError::Unavailable {
                counter: "network counters",
                reason: "no network interfaces reported".to_string(),
            });
        }

        Ok(networks.iter().fold(
            RawNetwork {
                bytes_sent: 0,
                bytes_recv: 0,
                packets_sent: 0,
                packets_recv: 0,
            },
            |acc, (_, data)| RawNetwork {
                bytes_sent: acc.bytes_sent.saturating_add(data.total_transmitted()),
                bytes_recv: acc.bytes_recv.saturating_add(data.total_received()),
                packets_sent: acc
                    .packets_sent
                    .saturating_add(data.total_packets_transmitted()),
                packets_recv: acc
                    .packets_recv
                    .saturating_add(data.total_packets_received()),
            },
        ))
    }

    fn port_traffic(&self, path: &Path) -> Result<String, ProbeError> {
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ProbeError::Unavailable {
                counter: "port traffic",
                reason: format!(
                    "{} does not exist (is the network_monitor module loaded?)",
                    path.display()
                ),
            },
            _ => ProbeError::Os {
                counter: "port traffic",
                source: e,
            },
        })
    }
}

/// Filesystem usage for the filesystem containing `path`
#[cfg(unix)]
#[allow(clippy::unnecessary_cast)]
fn filesystem_usage(path: &Path) -> Result<RawDisk, ProbeError> {
    let stat = nix::sys::statvfs::statvfs(path).map_err(|errno| ProbeError::Os {
        counter: "filesystem usage",
        source: errno.into(),
    })?;

    let fragment = stat.fragment_size() as u64;
    let blocks = stat.blocks() as u64;
    Ok(RawDisk {
        total_bytes: blocks.saturating_mul(fragment),
        free_bytes: (stat.blocks_available() as u64).saturating_mul(fragment),
        used_bytes: blocks
            .saturating_sub(stat.blocks_free() as u64)
            .saturating_mul(fragment),
    })
}

/// Filesystem usage from the disk whose mount point is the longest prefix of `path`
#[cfg(not(unix))]
fn filesystem_usage(path: &Path) -> Result<RawDisk, ProbeError> {
    let disks = sysinfo::Disks::new_with_refreshed_list();
    let disk = disks
        .iter()
        .filter(|d| path.starts_with(d.mount_point()))
        .max_by_key(|d| d.mount_point().as_os_str().len())
        .ok_or_else(|| ProbeError::Unavailable {
            counter: "filesystem usage",
            reason: format!("no mounted filesystem contains {}", path.display()),
        })?;

    let total = disk.total_space();
    let available = disk.available_space();
    Ok(RawDisk {
        total_bytes: total,
        free_bytes: available,
        used_bytes: total.saturating_sub(available),
    })
}

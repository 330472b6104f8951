//! Metric probes
//!
//! Each probe reads raw values from a [`HostSource`], converts them to API
//! units and validates the resulting snapshot. [`Prober`] runs them on the
//! blocking thread pool so a one-second CPU sample never stalls the async
//! runtime.

pub mod cpu;
pub mod disk;
pub mod memory;
pub mod network;
pub mod ports;

use std::sync::Arc;

use crate::config::ProbesConfig;
use crate::error::MetricsResult;
use crate::source::{HostSource, SysinfoSource};
use crate::types::{
    CpuSnapshot, DiskSnapshot, MemorySnapshot, NetworkSnapshot, PortTrafficSnapshot,
};

/// The metric families
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ProbeKind {
    Cpu,
    Memory,
    Disk,
    Network,
    /// Per-port counters from the `network_monitor` kernel module
    Ports,
}

/// Async entry point to the probes
#[derive(Clone)]
pub struct Prober {
    source: Arc<dyn HostSource>,
    settings: ProbesConfig,
}

impl Prober {
    pub fn new(source: Arc<dyn HostSource>, settings: ProbesConfig) -> Self {
        Self { source, settings }
    }

    /// Prober reading the real host
    pub fn system(settings: ProbesConfig) -> Self {
        Self::new(Arc::new(SysinfoSource::new()), settings)
    }

    pub fn settings(&self) -> &ProbesConfig {
        &self.settings
    }

    /// Run a probe on the blocking pool
    async fn run<T, F>(&self, probe: F) -> MetricsResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn HostSource, &ProbesConfig) -> MetricsResult<T> + Send + 'static,
    {
        let source = Arc::clone(&self.source);
        let settings = self.settings.clone();
        tokio::task::spawn_blocking(move || probe(&*source, &settings)).await?
    }

    /// Blocks for the configured sampling window
    pub async fn cpu(&self) -> MetricsResult<CpuSnapshot> {
        self.run(|source, settings| cpu::get_cpu_snapshot(source, settings.cpu_window()))
            .await
    }

    pub async fn memory(&self) -> MetricsResult<MemorySnapshot> {
        self.run(|source, _| memory::get_memory_snapshot(source))
            .await
    }

    pub async fn disk(&self) -> MetricsResult<DiskSnapshot> {
        self.run(|source, settings| disk::get_disk_snapshot(source, &settings.disk_path))
            .await
    }

    pub async fn network(&self) -> MetricsResult<NetworkSnapshot> {
        self.run(|source, _| network::get_network_snapshot(source))
            .await
    }

    pub async fn ports(&self) -> MetricsResult<PortTrafficSnapshot> {
        self.run(|source, settings| {
            ports::get_port_traffic_snapshot(source, &settings.traffic_stats_path)
        })
        .await
    }
}

//! Configuration loading
//!
//! Values come from `.hostmetrics.toml` (if found), then CLI flags / env
//! variables override individual fields.

use anyhow::{bail, Context, Result};
use api_common::LogFormat;
use serde::Deserialize;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::info::cpu::MIN_CPU_WINDOW;

/// Name of the project-local config file
pub const CONFIG_FILE_NAME: &str = ".hostmetrics.toml";

/// Find a config file by walking up the directory tree, then checking global config.
///
/// Search order:
/// 1. `start` and its parent directories (walking up to root)
/// 2. Global config at `<config_dir>/hostmetrics/config.toml`
fn find_config_file(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    dirs::config_dir()
        .map(|dir| dir.join("hostmetrics").join("config.toml"))
        .filter(|path| path.is_file())
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub probes: ProbesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allow any origin (the dashboard is served separately)
    #[serde(default = "default_cors")]
    pub cors: bool,
}

/// Probe section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbesConfig {
    /// Path whose filesystem the disk probe reports
    #[serde(default = "default_disk_path")]
    pub disk_path: PathBuf,
    /// CPU sampling window in milliseconds
    #[serde(default = "default_cpu_sample_ms")]
    pub cpu_sample_ms: u64,
    /// JSON counters published by the `network_monitor` kernel module
    #[serde(default = "default_traffic_stats_path")]
    pub traffic_stats_path: PathBuf,
}

/// Logging section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

// Default value functions
fn default_bind() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8000
}

fn default_cors() -> bool {
    true
}

fn default_disk_path() -> PathBuf {
    PathBuf::from("/")
}

fn default_cpu_sample_ms() -> u64 {
    1000
}

fn default_traffic_stats_path() -> PathBuf {
    PathBuf::from("/proc/net/traffic_stats")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            cors: default_cors(),
        }
    }
}

impl Default for ProbesConfig {
    fn default() -> Self {
        Self {
            disk_path: default_disk_path(),
            cpu_sample_ms: default_cpu_sample_ms(),
            traffic_stats_path: default_traffic_stats_path(),
        }
    }
}

impl ProbesConfig {
    /// The CPU sampling window
    pub fn cpu_window(&self) -> Duration {
        Duration::from_millis(self.cpu_sample_ms)
    }
}

/// Per-field overrides from CLI flags or environment variables
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind: Option<IpAddr>,
    pub port: Option<u16>,
    pub disk_path: Option<PathBuf>,
    pub cpu_sample_ms: Option<u64>,
}

impl Config {
    /// Resolve which config file applies
    ///
    /// An explicit path is returned as is (loading it fails if it is missing).
    /// Without one, the directory tree is searched from the current directory.
    pub fn locate(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            return Ok(Some(path.to_path_buf()));
        }
        let cwd = std::env::current_dir().context("cannot determine current directory")?;
        Ok(find_config_file(&cwd))
    }

    /// Load `path`, or the defaults when no file applies
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Apply overrides on top of the loaded values
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(bind) = overrides.bind {
            self.server.bind = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(path) = overrides.disk_path {
            self.probes.disk_path = path;
        }
        if let Some(ms) = overrides.cpu_sample_ms {
            self.probes.cpu_sample_ms = ms;
        }
        self
    }

    /// Reject values no probe can work with
    pub fn validate(&self) -> Result<()> {
        if self.probes.cpu_window() < MIN_CPU_WINDOW {
            bail!(
                "probes.cpu_sample_ms must be at least {} (got {})",
                MIN_CPU_WINDOW.as_millis(),
                self.probes.cpu_sample_ms
            );
        }
        if self.probes.disk_path.as_os_str().is_empty() {
            bail!("probes.disk_path must not be empty");
        }
        Ok(())
    }

    /// Checks that only matter when binding a listener
    pub fn validate_for_serve(&self) -> Result<()> {
        self.validate()?;
        if self.server.port == 0 {
            bail!("server.port must be greater than 0");
        }
        Ok(())
    }
}

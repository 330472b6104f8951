//! Host Metrics Library
//!
//! Samples CPU, memory, disk and network counters from the host, converts
//! them to stable units and serves them over a read-only HTTP API.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use hostmetrics::{config::ProbesConfig, Prober};
//!
//! let prober = Prober::system(ProbesConfig::default());
//! let memory = prober.memory().await?;
//! println!("{} MB available", memory.memory_available_mb);
//! ```
//!
//! # Usage as Binary
//!
//! Run `hostmetrics serve`, then `curl localhost:8000/api/metrics/cpu`.

pub mod config;
pub mod error;
pub mod info;
pub mod source;
pub mod types;
pub mod units;
pub mod validation;
pub mod web;

// Re-export the main entry points
pub use error::{MetricsError, MetricsResult, ProbeError, ValidationError};
pub use info::{ProbeKind, Prober};
pub use source::{HostSource, SysinfoSource};

//! Range validation for snapshots
//!
//! Every snapshot is checked against its documented ranges before it leaves a
//! probe. Out-of-range readings are rejected, never clamped: a percent of
//! 100.2 from the OS is an instrumentation bug and is reported as such.

use crate::error::ValidationError;
use crate::types::{
    CpuSnapshot, DiskSnapshot, MemorySnapshot, NetworkSnapshot, PortTrafficSnapshot,
};

/// Range checks for a snapshot type
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Builds [`ValidationError`]s tagged with a snapshot name
struct Checker {
    snapshot: &'static str,
}

impl Checker {
    fn fail(&self, field: &'static str, value: f64, constraint: impl Into<String>) -> ValidationError {
        ValidationError {
            snapshot: self.snapshot,
            field,
            value,
            constraint: constraint.into(),
        }
    }

    fn finite(&self, field: &'static str, value: f64) -> Result<(), ValidationError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(self.fail(field, value, "finite"))
        }
    }

    fn percent(&self, field: &'static str, value: f64) -> Result<(), ValidationError> {
        self.finite(field, value)?;
        if (0.0..=100.0).contains(&value) {
            Ok(())
        } else {
            Err(self.fail(field, value, "range [0, 100]"))
        }
    }

    fn non_negative(&self, field: &'static str, value: f64) -> Result<(), ValidationError> {
        self.finite(field, value)?;
        if value >= 0.0 {
            Ok(())
        } else {
            Err(self.fail(field, value, ">= 0"))
        }
    }

    fn positive(&self, field: &'static str, value: f64) -> Result<(), ValidationError> {
        self.finite(field, value)?;
        if value > 0.0 {
            Ok(())
        } else {
            Err(self.fail(field, value, "> 0"))
        }
    }

    fn at_most(
        &self,
        field: &'static str,
        value: f64,
        other_field: &'static str,
        other: f64,
    ) -> Result<(), ValidationError> {
        if value <= other {
            Ok(())
        } else {
            Err(self.fail(field, value, format!("<= {} ({})", other_field, other)))
        }
    }
}

impl Validate for CpuSnapshot {
    fn validate(&self) -> Result<(), ValidationError> {
        let c = Checker { snapshot: "cpu" };
        c.percent("cpu_percent", self.cpu_percent)?;
        c.positive("cpu_count", self.cpu_count as f64)?;
        c.non_negative("cpu_freq", self.cpu_freq_mhz)
    }
}

impl Validate for MemorySnapshot {
    fn validate(&self) -> Result<(), ValidationError> {
        let c = Checker { snapshot: "memory" };
        c.percent("memory_percent", self.memory_percent)?;
        c.non_negative("memory_available_mb", self.memory_available_mb)?;
        c.positive("memory_total_mb", self.memory_total_mb)?;
        c.at_most(
            "memory_available_mb",
            self.memory_available_mb,
            "memory_total_mb",
            self.memory_total_mb,
        )
    }
}

impl Validate for DiskSnapshot {
    fn validate(&self) -> Result<(), ValidationError> {
        let c = Checker { snapshot: "disk" };
        c.percent("disk_percent", self.disk_percent)?;
        c.non_negative("disk_free_gb", self.disk_free_gb)?;
        c.positive("disk_total_gb", self.disk_total_gb)?;
        c.at_most(
            "disk_free_gb",
            self.disk_free_gb,
            "disk_total_gb",
            self.disk_total_gb,
        )
    }
}

impl Validate for NetworkSnapshot {
    fn validate(&self) -> Result<(), ValidationError> {
        // packet counters are unsigned
        let c = Checker { snapshot: "network" };
        c.non_negative("bytes_sent_mb", self.bytes_sent_mb)?;
        c.non_negative("bytes_recv_mb", self.bytes_recv_mb)
    }
}

impl Validate for PortTrafficSnapshot {
    fn validate(&self) -> Result<(), ValidationError> {
        // Every per-port count is also in the totals, which the module
        // increments first and we read last.
        let c = Checker { snapshot: "ports" };
        for (field, ports) in [("tcp", &self.tcp), ("udp", &self.udp)] {
            for (port, counters) in ports {
                if counters.packets > self.total.packets {
                    return Err(c.fail(
                        field,
                        counters.packets as f64,
                        format!("port {} packets <= total.packets ({})", port, self.total.packets),
                    ));
                }
                if counters.bytes > self.total.bytes {
                    return Err(c.fail(
                        field,
                        counters.bytes as f64,
                        format!("port {} bytes <= total.bytes ({})", port, self.total.bytes),
                    ));
                }
            }
        }
        Ok(())
    }
}

//! Failure paths with a scripted host

use std::path::Path;
use std::time::Duration;

use api_common::ErrorBody;
use hostmetrics::source::{RawCpu, RawDisk, RawMemory, RawNetwork};
use hostmetrics::{HostSource, ProbeError};

use crate::support::spawn_source_app;

/// Host with one broken counter per probe
struct BrokenHost;

impl HostSource for BrokenHost {
    fn sample_cpu(&self, _window: Duration) -> Result<RawCpu, ProbeError> {
        // a sampling artifact just over the limit
        Ok(RawCpu {
            usage_percent: 100.5,
            logical_cores: 4,
            frequency_mhz: None,
        })
    }

    fn memory(&self) -> Result<RawMemory, ProbeError> {
        Err(ProbeError::Os {
            counter: "virtual memory",
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        })
    }

    fn disk(&self, _path: &Path) -> Result<RawDisk, ProbeError> {
        Ok(RawDisk {
            total_bytes: 1_073_741_824,
            free_bytes: 2 * 1_073_741_824,
            used_bytes: 0,
        })
    }

    fn network(&self) -> Result<RawNetwork, ProbeError> {
        Err(ProbeError::Unavailable {
            counter: "network counters",
            reason: "no network interfaces reported".to_string(),
        })
    }

    fn port_traffic(&self, _path: &Path) -> Result<String, ProbeError> {
        // truncated read
        Ok(r#"{"tcp": {"443": {"packets": 1"#.to_string())
    }
}

async fn get_error(base: &str, path: &str) -> ErrorBody {
    let response = reqwest::get(format!("{}{}", base, path)).await.unwrap();
    assert_eq!(response.status(), 500, "GET {}", path);
    response.json::<ErrorBody>().await.unwrap()
}

#[tokio::test]
async fn test_out_of_range_cpu_is_500_not_clamped() {
    let base = spawn_source_app(BrokenHost).await;
    let body = get_error(&base, "/api/metrics/cpu").await;

    assert_eq!(body.error, "validation_failure");
    assert!(body.detail.contains("cpu.cpu_percent"), "{}", body.detail);
    assert!(body.detail.contains("100.5"), "{}", body.detail);
}

#[tokio::test]
async fn test_os_read_failure_is_500() {
    let base = spawn_source_app(BrokenHost).await;
    let body = get_error(&base, "/api/metrics/memory").await;

    assert_eq!(body.error, "os_read_failure");
    assert!(body.detail.contains("virtual memory"), "{}", body.detail);
    assert!(body.detail.contains("denied"), "{}", body.detail);
}

#[tokio::test]
async fn test_free_above_total_is_500() {
    let base = spawn_source_app(BrokenHost).await;
    let body = get_error(&base, "/api/metrics/disk").await;

    assert_eq!(body.error, "validation_failure");
    assert!(body.detail.contains("disk_free_gb"), "{}", body.detail);
}

#[tokio::test]
async fn test_missing_network_counters_are_500() {
    let base = spawn_source_app(BrokenHost).await;
    let body = get_error(&base, "/api/metrics/network").await;

    assert_eq!(body.error, "os_read_failure");
    assert!(body.detail.contains("no network interfaces"), "{}", body.detail);
}

#[tokio::test]
async fn test_malformed_port_traffic_is_500() {
    let base = spawn_source_app(BrokenHost).await;
    let body = get_error(&base, "/api/metrics/network/ports").await;

    assert_eq!(body.error, "os_read_failure");
    assert!(body.detail.contains("port traffic"), "{}", body.detail);
    assert!(body.detail.contains("malformed"), "{}", body.detail);
}

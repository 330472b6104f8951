//! Every endpoint against the real host

use std::time::{Duration, Instant};

use api_common::ErrorBody;
use hostmetrics::config::ProbesConfig;
use hostmetrics::types::{
    CpuSnapshot, DiskSnapshot, MemorySnapshot, NetworkSnapshot, PortTrafficSnapshot,
    TrafficCounters,
};
use hostmetrics::Prober;
use serde_json::Value;

use crate::support::{get_ok, spawn_app, spawn_host_app};

#[tokio::test]
async fn test_cpu_endpoint() {
    let base = spawn_host_app().await;

    let start = Instant::now();
    let (cpu, before, after): (CpuSnapshot, _, _) = get_ok(&base, "/api/metrics/cpu").await;
    let elapsed = start.elapsed();

    assert!(
        elapsed >= Duration::from_secs(1),
        "cpu sample returned after {:?}, window was skipped",
        elapsed
    );
    assert!((0.0..=100.0).contains(&cpu.cpu_percent));
    assert!(cpu.cpu_count > 0);
    assert!(cpu.cpu_freq_mhz >= 0.0);
    assert!(before <= cpu.timestamp && cpu.timestamp <= after);
}

#[tokio::test]
async fn test_cpu_wire_field_names() {
    let base = spawn_host_app().await;
    let (body, _, _): (Value, _, _) = get_ok(&base, "/api/metrics/cpu").await;

    let object = body.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["cpu_count", "cpu_freq", "cpu_percent", "timestamp"]);
}

#[tokio::test]
async fn test_memory_endpoint() {
    let base = spawn_host_app().await;
    let (memory, before, after): (MemorySnapshot, _, _) =
        get_ok(&base, "/api/metrics/memory").await;

    assert!(memory.memory_total_mb > 0.0);
    assert!(memory.memory_available_mb <= memory.memory_total_mb);
    assert!((0.0..=100.0).contains(&memory.memory_percent));
    assert!(before <= memory.timestamp && memory.timestamp <= after);
}

#[tokio::test]
async fn test_disk_endpoint() {
    let base = spawn_host_app().await;
    let (disk, before, after): (DiskSnapshot, _, _) = get_ok(&base, "/api/metrics/disk").await;

    assert!(disk.disk_total_gb > 0.0);
    assert!(disk.disk_free_gb <= disk.disk_total_gb);
    assert!((0.0..=100.0).contains(&disk.disk_percent));
    assert!(before <= disk.timestamp && disk.timestamp <= after);
}

#[tokio::test]
async fn test_network_endpoint_is_monotonic() {
    let base = spawn_host_app().await;
    let (first, before, after): (NetworkSnapshot, _, _) =
        get_ok(&base, "/api/metrics/network").await;

    assert!(first.bytes_sent_mb >= 0.0);
    assert!(first.bytes_recv_mb >= 0.0);
    assert!(before <= first.timestamp && first.timestamp <= after);

    let (second, _, _): (NetworkSnapshot, _, _) = get_ok(&base, "/api/metrics/network").await;
    assert!(second.bytes_sent_mb >= first.bytes_sent_mb);
    assert!(second.bytes_recv_mb >= first.bytes_recv_mb);
    assert!(second.packets_sent >= first.packets_sent);
    assert!(second.packets_recv >= first.packets_recv);
}

#[tokio::test]
async fn test_port_traffic_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("traffic_stats");
    std::fs::write(
        &path,
        r#"{
  "tcp": {
    "8080": {"packets": 7, "bytes": 2100}
  },
  "udp": {
    "53": {"packets": 2, "bytes": 180}
  },
  "total": {
    "packets": 9,
    "bytes": 2280
  }
}
"#,
    )
    .unwrap();
    let base = spawn_app(Prober::system(ProbesConfig {
        traffic_stats_path: path,
        ..ProbesConfig::default()
    }))
    .await;

    let (ports, before, after): (PortTrafficSnapshot, _, _) =
        get_ok(&base, "/api/metrics/network/ports").await;
    assert_eq!(
        ports.tcp.get(&8080),
        Some(&TrafficCounters { packets: 7, bytes: 2100 })
    );
    assert_eq!(ports.udp.get(&53).map(|c| c.packets), Some(2));
    assert_eq!(ports.total, TrafficCounters { packets: 9, bytes: 2280 });
    assert!(before <= ports.timestamp && ports.timestamp <= after);
}

#[tokio::test]
async fn test_port_traffic_without_module_is_500() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_app(Prober::system(ProbesConfig {
        traffic_stats_path: dir.path().join("traffic_stats"),
        ..ProbesConfig::default()
    }))
    .await;

    let response = reqwest::get(format!("{}/api/metrics/network/ports", base))
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error, "os_read_failure");
    assert!(body.detail.contains("network_monitor"), "{}", body.detail);
}

#[tokio::test]
async fn test_health_endpoint() {
    let base = spawn_host_app().await;
    let (health, _, _): (Value, _, _) = get_ok(&base, "/api/health").await;

    assert_eq!(health["status"], "ok");
    assert_eq!(health["disk_path"], "/");
    assert_eq!(health["cpu_sample_ms"], 1000);
}

#[tokio::test]
async fn test_schema_endpoint() {
    let base = spawn_host_app().await;
    let (schemas, _, _): (Value, _, _) = get_ok(&base, "/api/metrics/schema").await;

    assert!(schemas["memory"]["properties"]["memory_total_mb"].is_object());
    assert!(schemas["network"]["properties"]["packets_recv"].is_object());
    assert!(schemas["ports"]["properties"]["total"].is_object());
    assert_eq!(
        schemas["memory"]["properties"]["memory_total_mb"]["exclusiveMinimum"].as_f64(),
        Some(0.0)
    );
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let base = spawn_host_app().await;
    let response = reqwest::get(format!("{}/api/metrics/gpu", base)).await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_post_is_rejected() {
    let base = spawn_host_app().await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/metrics/memory", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 405);
}

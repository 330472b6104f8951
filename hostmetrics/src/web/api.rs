//! REST API handlers

use api_common::{json_success, ApiResult, ResultExt};
use axum::{extract::State, Json};
use schemars::{schema_for, Schema};
use serde::Serialize;
use serde_json::Value;

use super::state::AppState;
use crate::types::{
    CpuSnapshot, DiskSnapshot, MemorySnapshot, NetworkSnapshot, PortTrafficSnapshot,
};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub disk_path: String,
    pub cpu_sample_ms: u64,
    pub supported_system: bool,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let settings = state.prober.settings();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        disk_path: settings.disk_path.display().to_string(),
        cpu_sample_ms: settings.cpu_sample_ms,
        supported_system: sysinfo::IS_SUPPORTED_SYSTEM,
    })
}

/// CPU usage over the sampling window (takes about a second)
pub async fn cpu_metrics(State(state): State<AppState>) -> ApiResult<Json<CpuSnapshot>> {
    state.prober.cpu().await.to_api_err().map(Json)
}

pub async fn memory_metrics(State(state): State<AppState>) -> ApiResult<Json<MemorySnapshot>> {
    state.prober.memory().await.to_api_err().map(Json)
}

pub async fn disk_metrics(State(state): State<AppState>) -> ApiResult<Json<DiskSnapshot>> {
    state.prober.disk().await.to_api_err().map(Json)
}

pub async fn network_metrics(State(state): State<AppState>) -> ApiResult<Json<NetworkSnapshot>> {
    state.prober.network().await.to_api_err().map(Json)
}

/// Per-port counters; 500 `os_read_failure` when the kernel module is not loaded
pub async fn port_traffic_metrics(
    State(state): State<AppState>,
) -> ApiResult<Json<PortTrafficSnapshot>> {
    state.prober.ports().await.to_api_err().map(Json)
}

/// JSON Schemas of all snapshot types
#[derive(Debug, Serialize)]
pub struct MetricSchemas {
    pub cpu: Schema,
    pub memory: Schema,
    pub disk: Schema,
    pub network: Schema,
    pub ports: Schema,
}

impl MetricSchemas {
    pub fn generate() -> Self {
        Self {
            cpu: schema_for!(CpuSnapshot),
            memory: schema_for!(MemorySnapshot),
            disk: schema_for!(DiskSnapshot),
            network: schema_for!(NetworkSnapshot),
            ports: schema_for!(PortTrafficSnapshot),
        }
    }
}

/// Response schemas, with the ranges each field is validated against
pub async fn metric_schemas() -> ApiResult<Json<Value>> {
    json_success(&MetricSchemas::generate())
}

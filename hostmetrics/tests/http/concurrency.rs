//! Concurrent access to the CPU endpoint

use std::time::{Duration, Instant};

use hostmetrics::types::{CpuSnapshot, MemorySnapshot};

use crate::support::{get_ok, spawn_host_app};

const PARALLEL_REQUESTS: usize = 4;

#[tokio::test]
async fn test_parallel_cpu_requests_are_independent() {
    let base = spawn_host_app().await;

    let handles: Vec<_> = (0..PARALLEL_REQUESTS)
        .map(|_| {
            let base = base.clone();
            tokio::spawn(async move {
                let (cpu, _, _): (CpuSnapshot, _, _) = get_ok(&base, "/api/metrics/cpu").await;
                cpu
            })
        })
        .collect();

    for handle in handles {
        let cpu = tokio::time::timeout(Duration::from_secs(30), handle)
            .await
            .expect("cpu request deadlocked")
            .expect("cpu request panicked");
        assert!((0.0..=100.0).contains(&cpu.cpu_percent));
        assert!(cpu.cpu_count > 0);
    }
}

#[tokio::test]
async fn test_other_endpoints_respond_during_cpu_sample() {
    let base = spawn_host_app().await;

    let cpu = tokio::spawn({
        let base = base.clone();
        async move {
            let (cpu, _, _): (CpuSnapshot, _, _) = get_ok(&base, "/api/metrics/cpu").await;
            cpu
        }
    });

    // let the cpu request enter its sampling window
    tokio::time::sleep(Duration::from_millis(100)).await;

    let start = Instant::now();
    let (memory, _, _): (MemorySnapshot, _, _) = get_ok(&base, "/api/metrics/memory").await;
    assert!(
        start.elapsed() < Duration::from_millis(800),
        "memory request waited {:?} behind the cpu sample",
        start.elapsed()
    );
    assert!(memory.memory_total_mb > 0.0);

    let cpu = cpu.await.expect("cpu request panicked");
    assert!((0.0..=100.0).contains(&cpu.cpu_percent));
}

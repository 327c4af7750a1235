//! Performance benchmarks for the LPA scheduling engine.
//!
//! This benchmark suite verifies that schedule generation meets performance targets:
//! - Plant-sized run (12 auditors, 6 sections): < 1ms mean
//! - Large site run (24 auditors, 8 sections): < 5ms mean
//! - A year of accumulated pairing history must not dominate run time
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use lpa_engine::api::{AppState, create_router};
use lpa_engine::config::SchedulerConfig;
use lpa_engine::models::{Auditor, PairingHistory, PairingRecord, Period, ShiftCode};
use lpa_engine::scheduling::{ScheduleInput, Scheduler};

use axum::{body::Body, http::Request};
use tower::ServiceExt;
use uuid::Uuid;

/// Creates a test state with the shipped scheduling policy.
fn create_test_state() -> AppState {
    let config = SchedulerConfig::load("./config/scheduler.yaml")
        .expect("Failed to load config")
        .with_seed(42);
    AppState::new(config)
}

/// Builds a roster cycling through shifts and roles.
fn build_roster(size: usize) -> Vec<Auditor> {
    let roles = ["Quality", "Production", "Maintenance", "Logistics"];
    (0..size)
        .map(|i| Auditor {
            id: Uuid::from_u128(i as u128 + 1),
            first_name: format!("Auditor{:02}", i + 1),
            last_name: "Bench".to_string(),
            role: roles[i % roles.len()].to_string(),
            shift: ShiftCode::ALL[i % 3],
            active: true,
        })
        .collect()
}

/// Builds a run input covering all three shifts for the given scale.
fn build_input(roster_size: usize, section_count: usize) -> ScheduleInput {
    ScheduleInput {
        auditors: build_roster(roster_size),
        sections: (0..section_count).map(|i| format!("{}", 300 + i * 10)).collect(),
        shifts: ShiftCode::ALL.to_vec(),
        period: Period::new(3, 2026).unwrap(),
    }
}

/// Builds an accumulated history of past pairings over the roster.
fn build_history(record_count: usize, roster_size: usize) -> PairingHistory {
    let records = (0..record_count)
        .map(|i| {
            PairingRecord::new(
                Uuid::from_u128((i % roster_size) as u128 + 1),
                Uuid::from_u128(((i + 1) % roster_size) as u128 + 1),
                Period::new((i % 12) as u32 + 1, 2024 + ((i / 12) % 2) as i32).unwrap(),
            )
        })
        .collect();
    PairingHistory::from_records(records)
}

/// Benchmark: one schedule run at typical plant scale.
///
/// Target: < 1ms mean
fn bench_plant_sized_run(c: &mut Criterion) {
    let scheduler = Scheduler::with_config(SchedulerConfig::default().with_seed(42));
    let input = build_input(12, 6);

    c.bench_function("plant_sized_run", |b| {
        b.iter(|| {
            let mut history = PairingHistory::new();
            black_box(scheduler.run(&input, &mut history))
        })
    });
}

/// Benchmark: a run against a year of accumulated pairing history.
fn bench_run_with_deep_history(c: &mut Criterion) {
    let scheduler = Scheduler::with_config(SchedulerConfig::default().with_seed(42));
    let input = build_input(12, 6);
    let baseline = build_history(1_000, 12);

    c.bench_function("run_with_deep_history", |b| {
        b.iter(|| {
            let mut history = baseline.clone();
            black_box(scheduler.run(&input, &mut history))
        })
    });
}

/// Benchmark: roster sizes to understand pair-enumeration scaling.
fn bench_roster_scaling(c: &mut Criterion) {
    let scheduler = Scheduler::with_config(SchedulerConfig::default().with_seed(42));

    let mut group = c.benchmark_group("roster_scaling");

    for roster_size in [6, 12, 24].iter() {
        let input = build_input(*roster_size, 6);

        group.throughput(Throughput::Elements(*roster_size as u64));
        group.bench_with_input(
            BenchmarkId::new("auditors", roster_size),
            roster_size,
            |b, _| {
                b.iter(|| {
                    let mut history = PairingHistory::new();
                    black_box(scheduler.run(&input, &mut history))
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: section counts to understand slot-universe scaling.
fn bench_section_scaling(c: &mut Criterion) {
    let scheduler = Scheduler::with_config(SchedulerConfig::default().with_seed(42));

    let mut group = c.benchmark_group("section_scaling");

    for section_count in [4, 8, 16].iter() {
        let input = build_input(12, *section_count);

        group.throughput(Throughput::Elements(*section_count as u64));
        group.bench_with_input(
            BenchmarkId::new("sections", section_count),
            section_count,
            |b, _| {
                b.iter(|| {
                    let mut history = PairingHistory::new();
                    black_box(scheduler.run(&input, &mut history))
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: the full HTTP path through the /schedule endpoint.
fn bench_schedule_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);

    let auditors: Vec<serde_json::Value> = build_roster(12)
        .iter()
        .map(|a| {
            serde_json::json!({
                "id": a.id,
                "first_name": a.first_name,
                "last_name": a.last_name,
                "role": a.role,
                "shift": u8::from(a.shift)
            })
        })
        .collect();
    let body = serde_json::json!({
        "auditors": auditors,
        "sections": ["311", "341", "361", "371", "391", "411"],
        "period": { "month": 3, "year": 2026 }
    })
    .to_string();

    c.bench_function("schedule_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/schedule")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_plant_sized_run,
    bench_run_with_deep_history,
    bench_roster_scaling,
    bench_section_scaling,
    bench_schedule_endpoint,
);
criterion_main!(benches);

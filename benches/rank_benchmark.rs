use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use wildcord::models::{CheckInInput, UserStats};
use wildcord::services::calculate_rank;
use wildcord::services::check_in;

fn benchmark_calculate_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_rank");

    group.bench_function("lowest_tier", |b| {
        b.iter(|| calculate_rank(black_box(3.5)))
    });

    group.bench_function("top_tier_synthetic_next", |b| {
        b.iter(|| calculate_rank(black_box(812.0)))
    });

    // Sweep the whole table, including boundaries
    let miles: Vec<f64> = (0..2000).map(|i| i as f64 * 0.5).collect();
    group.bench_function("sweep_0_to_1000", |b| {
        b.iter(|| {
            for m in &miles {
                black_box(calculate_rank(black_box(*m)));
            }
        })
    });

    group.finish();
}

fn benchmark_accumulate(c: &mut Criterion) {
    let stats = UserStats {
        total_miles: 148.0,
        total_sessions: 40,
        streak_days: 6,
        last_check_in_date: 1_700_000_000_000,
        ..UserStats::default()
    };
    let input = CheckInInput {
        notes: "Ridge ruck".to_string(),
        miles: 4.5,
        sessions: 2,
    };
    let now = chrono::Utc::now();

    c.bench_function("accumulate_and_snapshot", |b| {
        b.iter(|| {
            let next = check_in::accumulate(black_box(&stats), black_box(&input), now);
            check_in::snapshot(&input, &next)
        })
    });
}

criterion_group!(benches, benchmark_calculate_rank, benchmark_accumulate);
criterion_main!(benches);

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lotclock_core::{breakdown_at, format_remaining, resolve};
use lotclock_domain::{CountdownFormat, RawDeadline, ResolvedInstant};

const NOW: ResolvedInstant = ResolvedInstant::from_millis(1_700_000_000_000);

fn sample_inputs() -> Vec<(&'static str, RawDeadline)> {
    vec![
        ("epoch_millis", RawDeadline::Number(1_893_456_000_000.0)),
        ("epoch_seconds", RawDeadline::Number(1_893_456_000.0)),
        ("relative", RawDeadline::Number(3_600.0)),
        ("numeric_text", RawDeadline::from(" 1893456000 ")),
        ("rfc3339", RawDeadline::from("2030-01-01T00:00:00Z")),
        ("naive_datetime", RawDeadline::from("2030-01-01 00:00:00")),
        ("unparseable", RawDeadline::from("next tuesday")),
    ]
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for (name, raw) in sample_inputs() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &raw, |b, raw| {
            b.iter(|| resolve(black_box(raw), black_box(NOW)));
        });
    }
    group.finish();
}

fn bench_tick_render(c: &mut Criterion) {
    let instant = ResolvedInstant::from_millis(1_700_000_000_000 + 200_000_000);

    c.bench_function("tick_render/clock", |b| {
        b.iter(|| {
            let breakdown = breakdown_at(black_box(instant), black_box(NOW));
            format_remaining(&breakdown, CountdownFormat::Clock)
        });
    });
}

criterion_group!(benches, bench_resolve, bench_tick_render);
criterion_main!(benches);

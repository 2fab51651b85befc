// Time formatting and path splitting benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use repobrowse::util::{subpaths, time_since};
use std::hint::black_box;

fn bench_time_since(c: &mut Criterion) {
    let now = 1_700_000_000;
    let deltas = [0, 59, 3_600 * 7 + 120, 86_400 * 3 + 3_600, 86_400 * 45, 86_400 * 800];
    c.bench_function("time_since", |b| {
        b.iter(|| {
            for delta in deltas {
                black_box(time_since(black_box(now - delta), now));
            }
        });
    });
}

fn bench_subpaths(c: &mut Criterion) {
    let path = "src/very/deeply/nested/module/tree/with/many/levels/file.rs";
    c.bench_function("subpaths", |b| {
        b.iter(|| subpaths(black_box(path)).into_iter().count());
    });
}

criterion_group!(benches, bench_time_since, bench_subpaths);
criterion_main!(benches);

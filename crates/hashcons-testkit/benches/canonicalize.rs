//! Canonicalization throughput over N×N grid workloads.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hashcons_core::NaturalProvider;
use hashcons_store::CanonicalStore;
use hashcons_testkit::fixtures::{interval4_grid, interval_grid, label_grid};
use hashcons_testkit::{Interval, Interval4};

const SIDES: [i32; 3] = [10, 100, 300];

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");
    for n in SIDES {
        group.bench_with_input(BenchmarkId::new("interval", n), &n, |b, &n| {
            b.iter(|| {
                let mut store: CanonicalStore<Interval> = CanonicalStore::new();
                for v in interval_grid(n) {
                    black_box(store.canonicalize(v));
                }
                store
            })
        });
        group.bench_with_input(BenchmarkId::new("interval4", n), &n, |b, &n| {
            b.iter(|| {
                let mut store: CanonicalStore<Interval4> = CanonicalStore::new();
                for v in interval4_grid(n) {
                    black_box(store.canonicalize(v));
                }
                store
            })
        });
        group.bench_with_input(BenchmarkId::new("string", n), &n, |b, &n| {
            let labels: Vec<String> = label_grid(n).collect();
            b.iter(|| {
                let mut store = CanonicalStore::with_provider(NaturalProvider::new());
                for s in &labels {
                    black_box(store.canonicalize_ref(s));
                }
                store
            })
        });
    }
    group.finish();
}

fn bench_retrieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("retrieve");
    for n in SIDES {
        let mut store: CanonicalStore<Interval> = CanonicalStore::new();
        for v in interval_grid(n) {
            store.canonicalize(v);
        }
        group.bench_with_input(BenchmarkId::new("interval", n), &n, |b, &n| {
            b.iter(|| {
                for v in interval_grid(n) {
                    black_box(store.canonicalize(v));
                }
            })
        });

        let report = store.report();
        println!("interval {}x{}: {}", n, n, report);
    }
    group.finish();
}

criterion_group!(benches, bench_create, bench_retrieve);
criterion_main!(benches);

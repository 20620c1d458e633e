//! Benchmarks for staffdb store and export operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use staffdb::{Config, Exporter, RecordStore};

fn populated_store(ids: i64, versions: i64) -> RecordStore {
    let mut store = RecordStore::new();
    for id in 0..ids {
        for v in 0..versions {
            store.insert(id, format!("employee-{}", id), 30 + v, 1000 * v);
        }
    }
    store
}

fn store_benchmarks(c: &mut Criterion) {
    c.bench_function("insert_10k", |b| {
        b.iter(|| populated_store(black_box(10_000), 1))
    });

    let store = populated_store(10_000, 1);
    c.bench_function("get_hit", |b| {
        b.iter(|| store.get(black_box(5_000)).is_ok())
    });
    c.bench_function("get_miss", |b| {
        b.iter(|| store.get(black_box(-1)).is_err())
    });
}

fn export_benchmarks(c: &mut Criterion) {
    let exporter = Exporter::new(&Config::default());
    let store = populated_store(1_000, 5);

    c.bench_function("render_1k_ids_5_versions", |b| {
        b.iter(|| exporter.render(black_box(store.history())))
    });
}

criterion_group!(benches, store_benchmarks, export_benchmarks);
criterion_main!(benches);

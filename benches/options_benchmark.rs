//! Benchmarks for converting Redis options to and from JSON.
//!
//! Run benchmarks:
//! ```bash
//! cargo bench --bench options_benchmark
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use muxis_options::{ClientType, RedisOptions};

/// Builds cluster options with `nodes` endpoints.
fn cluster_options(nodes: usize) -> RedisOptions {
    let mut options = RedisOptions::new();
    options
        .set_client_type(ClientType::Cluster)
        .set_endpoints((0..nodes).map(|i| format!("redis://10.0.0.{}:7000", i)))
        .set_max_pool_size(nodes as i32);
    options
}

/// Benchmark: encode options with a growing endpoint list.
fn bench_to_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_json");

    for nodes in [1, 6, 64].iter() {
        let options = cluster_options(*nodes);
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &options, |b, options| {
            b.iter(|| black_box(options).to_json());
        });
    }

    group.finish();
}

/// Benchmark: decode options from JSON text.
fn bench_from_json_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_json_str");

    for nodes in [1, 6, 64].iter() {
        let text = cluster_options(*nodes).to_json_string();
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &text, |b, text| {
            b.iter(|| RedisOptions::from_json_str(black_box(text)).expect("decode failed"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_to_json, bench_from_json_str);
criterion_main!(benches);

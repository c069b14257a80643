// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Recursion-heavy kernel benchmarks.
//!
//! Binary tree build/count and naive Fibonacci at the depths used by the
//! cross-runtime comparison.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kernbench_core::kernels::{bintree, nfib};
use std::time::Duration;

/// Tree depths to benchmark.
const TREE_DEPTHS: &[u32] = &[12, 16, 18];

/// Fibonacci arguments to benchmark.
const FIB_ARGS: &[u32] = &[20, 24, 27];

/// Benchmark building and counting a perfect binary tree.
fn bench_bintree(c: &mut Criterion) {
    let mut group = c.benchmark_group("bintree");
    group.measurement_time(Duration::from_secs(5));

    for &depth in TREE_DEPTHS {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| bintree::build_and_count(black_box(depth)));
        });
    }

    group.finish();
}

/// Benchmark a single naive Fibonacci call.
fn bench_nfib(c: &mut Criterion) {
    let mut group = c.benchmark_group("nfib");
    group.sample_size(20);

    for &n in FIB_ARGS {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| nfib::nfib(black_box(n)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bintree, bench_nfib);
criterion_main!(benches);

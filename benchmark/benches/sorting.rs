// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! String sort benchmarks.
//!
//! All four variants sort the same generated list. Input cloning happens in
//! the setup closure and is not measured.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use kernbench_core::kernels::sort;
use std::time::Duration;

/// List lengths to benchmark.
const LIST_SIZES: &[usize] = &[1_000, 10_000, 100_000];

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    group.measurement_time(Duration::from_secs(5));

    for &n in LIST_SIZES {
        let input = sort::genlist(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("quicksort", n), &input, |b, input| {
            b.iter_batched(|| input.clone(), sort::quicksort, BatchSize::LargeInput);
        });

        group.bench_with_input(BenchmarkId::new("quicksort_inplace", n), &input, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |list| sort::quicksort_inplace(list),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("mergesort", n), &input, |b, input| {
            b.iter_batched(|| input.clone(), sort::merge_sort, BatchSize::LargeInput);
        });

        group.bench_with_input(BenchmarkId::new("mergesort_inplace", n), &input, |b, input| {
            // One scratch buffer for the whole benchmark, as the kernel intends.
            let mut aux = vec![String::new(); input.len()];
            b.iter_batched_ref(
                || input.clone(),
                |list| sort::merge_sort_inplace(list, &mut aux).expect("scratch sized to input"),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sorts);
criterion_main!(benches);

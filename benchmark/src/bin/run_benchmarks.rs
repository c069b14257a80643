// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CLI tool to time the kernel suite and generate a JSON report.

use clap::Parser;
use kernbench_benchmark::{BenchmarkReport, BenchmarkResult, JsonReporter, KernelHarness, LatencyMetrics};
use kernbench_core::{run, ConfigLoader, KernelKind, RunOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "run_benchmarks")]
#[command(about = "Time kernbench kernels and write a JSON report")]
struct Args {
    /// Output directory for benchmark data
    #[arg(short, long, default_value = "data")]
    output: PathBuf,

    /// Suite configuration (built-in defaults when absent)
    #[arg(short, long, default_value = "kernbench.yaml")]
    config: PathBuf,

    /// Number of measured iterations per kernel and size
    #[arg(short, long, default_value_t = 20)]
    iterations: u64,

    /// Kernels to run (all configured kernels if not specified)
    #[arg(short, long)]
    kernel: Option<Vec<KernelKind>>,

    /// Run in quick mode (fewer iterations)
    #[arg(long)]
    quick: bool,

    /// Write one report per kernel category
    #[arg(long)]
    split: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let iterations = if args.quick { 3 } else { args.iterations };

    println!("kernbench Benchmark Suite");
    println!("=========================");
    println!("Output directory: {:?}", args.output);
    println!("Iterations: {}", iterations);
    println!();

    let config = ConfigLoader::load_or_default(&args.config)?;
    let options = RunOptions {
        mandelbrot: config.mandelbrot,
        ..RunOptions::default()
    };
    let harness = KernelHarness::new()
        .warmup((iterations / 10).max(1))
        .iterations(iterations);

    let selected = args.kernel.unwrap_or_default();
    let should_run = |kind: KernelKind| selected.is_empty() || selected.contains(&kind);

    let reporter = JsonReporter::new(&args.output)?;
    let mut report = BenchmarkReport::new();

    for entry in config.effective_suite() {
        if !should_run(entry.kernel) {
            continue;
        }
        for size in entry.sizes {
            // Fingerprint the output once; timed runs skip rendering.
            let checksum = run(size, &options)?.checksum;
            let samples = harness.run_kernel(size, &options)?;

            let result = BenchmarkResult::latency(size, checksum, samples, harness.should_keep_samples())
                .with_metadata("size_label", entry.kernel.size_label());
            println!("  ✓ {} (crc32 {:#010x})", result.name(), checksum);
            report.add_result(result);
        }
    }

    println!();
    if args.split {
        for path in reporter.save_by_category(&report)? {
            println!("Benchmark report saved to: {:?}", path);
        }
    } else {
        let path = reporter.save(&report)?;
        println!("Benchmark report saved to: {:?}", path);
    }
    println!();

    print_summary(&report);

    Ok(())
}

fn print_summary(report: &BenchmarkReport) {
    println!("Summary");
    println!("-------");
    println!();

    for result in &report.results {
        println!(
            "{}: median={}, p99={}",
            result.name(),
            LatencyMetrics::format_latency(result.latency.median_ns),
            LatencyMetrics::format_latency(result.latency.p99_ns)
        );
    }
}

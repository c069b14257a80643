// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! kernbench Benchmarking Framework
//!
//! Timing harness and report generation for the kernbench kernels, used to
//! compare this implementation against the same kernels on other runtimes.
//!
//! # Benchmark Categories
//!
//! - **Recursion**: binary tree build/count and naive Fibonacci
//! - **Numeric**: Mandelbrot escape-time and dense matrix multiply
//! - **Sorting**: the four string sort variants
//! - **Sieve**: classic and odd-only prime sieves
//!
//! # Data Output
//!
//! Reports are written as JSON with standardized latency metrics and the
//! CRC32 of each kernel's output, so a timing is always tied to a verified
//! result.

pub mod harness;
pub mod metrics;
pub mod reporter;

pub use harness::KernelHarness;
pub use metrics::{BenchmarkReport, BenchmarkResult, KernelCategory, LatencyMetrics, SystemInfo};
pub use reporter::JsonReporter;

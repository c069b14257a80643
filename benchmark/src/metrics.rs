// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Standardized metrics types for benchmark results.
//!
//! This module defines the data structures used to capture and serialize
//! kernel timings together with the system they were taken on.

use chrono::{DateTime, Utc};
use kernbench_core::{KernelKind, ProblemSize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use sysinfo::System;

/// Groups of kernels that stress similar parts of a runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelCategory {
    /// Deep call stacks and small allocations
    Recursion,
    /// Floating-point and integer arithmetic loops
    Numeric,
    /// String comparison and list manipulation
    Sorting,
    /// Sequential flag arrays
    Sieve,
}

impl KernelCategory {
    /// Category a kernel belongs to.
    pub fn of(kind: KernelKind) -> Self {
        match kind {
            KernelKind::Bintree | KernelKind::Nfib => Self::Recursion,
            KernelKind::Mandelbrot | KernelKind::Matmult => Self::Numeric,
            KernelKind::Quicksort
            | KernelKind::QuicksortInplace
            | KernelKind::Mergesort
            | KernelKind::MergesortInplace => Self::Sorting,
            KernelKind::Nsieve | KernelKind::NsieveOdd => Self::Sieve,
        }
    }
}

impl std::fmt::Display for KernelCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelCategory::Recursion => write!(f, "recursion"),
            KernelCategory::Numeric => write!(f, "numeric"),
            KernelCategory::Sorting => write!(f, "sorting"),
            KernelCategory::Sieve => write!(f, "sieve"),
        }
    }
}

/// Latency metrics with percentile distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyMetrics {
    /// Minimum observed latency in nanoseconds
    pub min_ns: u64,
    /// Maximum observed latency in nanoseconds
    pub max_ns: u64,
    /// Arithmetic mean latency in nanoseconds
    pub mean_ns: f64,
    /// Median (p50) latency in nanoseconds
    pub median_ns: u64,
    /// 95th percentile latency in nanoseconds
    pub p95_ns: u64,
    /// 99th percentile latency in nanoseconds
    pub p99_ns: u64,
    /// Standard deviation in nanoseconds
    pub std_dev_ns: f64,
    /// Raw sample data (optional, downsampled above 10k samples)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<u64>>,
}

impl LatencyMetrics {
    /// Calculate metrics from latency samples in nanoseconds.
    pub fn from_samples(mut samples: Vec<u64>, keep_raw: bool) -> Self {
        if samples.is_empty() {
            return Self {
                min_ns: 0,
                max_ns: 0,
                mean_ns: 0.0,
                median_ns: 0,
                p95_ns: 0,
                p99_ns: 0,
                std_dev_ns: 0.0,
                samples: None,
            };
        }

        samples.sort_unstable();
        let len = samples.len();
        let percentile = |p: f64| samples[((len as f64 * p) as usize).min(len - 1)];

        let mean_ns = samples.iter().sum::<u64>() as f64 / len as f64;
        let variance = samples
            .iter()
            .map(|&x| (x as f64 - mean_ns).powi(2))
            .sum::<f64>()
            / len as f64;

        let min_ns = samples[0];
        let max_ns = samples[len - 1];
        let median_ns = samples[len / 2];
        let p95_ns = percentile(0.95);
        let p99_ns = percentile(0.99);

        let raw_samples = match (keep_raw, len > 10_000) {
            (false, _) => None,
            (true, true) => Some(samples.iter().step_by(len / 1000).copied().collect()),
            (true, false) => Some(samples),
        };

        Self {
            min_ns,
            max_ns,
            mean_ns,
            median_ns,
            p95_ns,
            p99_ns,
            std_dev_ns: variance.sqrt(),
            samples: raw_samples,
        }
    }

    /// Format latency in human-readable form (auto-selects ns/μs/ms/s).
    pub fn format_latency(ns: u64) -> String {
        if ns < 1_000 {
            format!("{}ns", ns)
        } else if ns < 1_000_000 {
            format!("{:.2}μs", ns as f64 / 1_000.0)
        } else if ns < 1_000_000_000 {
            format!("{:.2}ms", ns as f64 / 1_000_000.0)
        } else {
            format!("{:.2}s", ns as f64 / 1_000_000_000.0)
        }
    }
}

/// System information captured at benchmark time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system name
    pub os: String,
    /// OS version
    pub os_version: String,
    /// Kernel version (Linux)
    pub kernel_version: Option<String>,
    /// CPU model name
    pub cpu_model: String,
    /// Number of CPU cores
    pub cpu_cores: usize,
    /// Total system memory in bytes
    pub memory_bytes: u64,
    /// Hostname
    pub hostname: String,
}

impl SystemInfo {
    /// Collect current system information.
    pub fn collect() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        let unknown = || "Unknown".to_string();
        Self {
            os: System::name().unwrap_or_else(unknown),
            os_version: System::os_version().unwrap_or_else(unknown),
            kernel_version: System::kernel_version(),
            cpu_model: sys
                .cpus()
                .first()
                .map(|cpu| cpu.brand().to_string())
                .unwrap_or_else(unknown),
            cpu_cores: sys.cpus().len(),
            memory_bytes: sys.total_memory(),
            hostname: System::host_name().unwrap_or_else(unknown),
        }
    }
}

/// Timing of one kernel at one size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Kernel program name
    pub kernel: String,
    /// Category of the kernel
    pub category: KernelCategory,
    /// Problem size the kernel ran at
    pub size: u64,
    /// CRC32 of the kernel's rendered output
    pub checksum: u32,
    /// Latency metrics
    pub latency: LatencyMetrics,
    /// Number of measured iterations
    pub iterations: u64,
    /// Additional metadata specific to this run
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl BenchmarkResult {
    /// Create a result from latency samples.
    pub fn latency(size: ProblemSize, checksum: u32, samples: Vec<u64>, keep_raw: bool) -> Self {
        let kind = size.kind();
        Self {
            kernel: kind.name().to_string(),
            category: KernelCategory::of(kind),
            size: size.value(),
            checksum,
            iterations: samples.len() as u64,
            latency: LatencyMetrics::from_samples(samples, keep_raw),
            metadata: HashMap::new(),
        }
    }

    /// Display name, `kernel/size`.
    pub fn name(&self) -> String {
        format!("{}/{}", self.kernel, self.size)
    }

    /// Add metadata to the result.
    ///
    /// Values that fail to serialize are recorded as `null`.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
        self.metadata.insert(key.into(), value);
        self
    }
}

/// Complete benchmark suite report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Suite identifier
    pub benchmark_suite: String,
    /// Framework version
    pub version: String,
    /// Timestamp when benchmarks were run
    pub timestamp: DateTime<Utc>,
    /// System information
    pub system_info: SystemInfo,
    /// Individual benchmark results
    pub results: Vec<BenchmarkResult>,
}

impl BenchmarkReport {
    /// Create a new benchmark report.
    pub fn new() -> Self {
        Self {
            benchmark_suite: "kernbench".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            system_info: SystemInfo::collect(),
            results: Vec::new(),
        }
    }

    /// Add a result to the report.
    pub fn add_result(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }
}

impl Default for BenchmarkReport {
    fn default() -> Self {
        Self::new()
    }
}

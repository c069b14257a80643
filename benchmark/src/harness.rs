// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark harness for timing kernel invocations.
//!
//! Each sample times one complete kernel call, input generation included,
//! because that is what a single reference program run measures.

use std::hint::black_box;
use std::time::{Duration, Instant};

use kernbench_core::{execute, KernelResult, ProblemSize, RunOptions};

/// A benchmark harness for measuring kernel latency.
pub struct KernelHarness {
    /// Number of warmup iterations before measurement
    warmup_iterations: u64,
    /// Number of measurement iterations
    measurement_iterations: u64,
    /// Whether to keep raw sample data
    keep_raw_samples: bool,
}

impl KernelHarness {
    /// Create a new harness with default settings.
    pub fn new() -> Self {
        Self {
            warmup_iterations: 3,
            measurement_iterations: 20,
            keep_raw_samples: true,
        }
    }

    /// Set the number of warmup iterations.
    pub fn warmup(mut self, iterations: u64) -> Self {
        self.warmup_iterations = iterations;
        self
    }

    /// Set the number of measurement iterations.
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.measurement_iterations = iterations;
        self
    }

    /// Set whether to keep raw sample data.
    pub fn keep_samples(mut self, keep: bool) -> Self {
        self.keep_raw_samples = keep;
        self
    }

    /// Check if raw samples should be kept.
    pub fn should_keep_samples(&self) -> bool {
        self.keep_raw_samples
    }

    /// Time `operation` and return one nanosecond sample per measured call.
    ///
    /// Results are passed through `black_box` so the work is not optimized away.
    pub fn run<F, T>(&self, mut operation: F) -> Vec<u64>
    where
        F: FnMut() -> T,
    {
        for _ in 0..self.warmup_iterations {
            black_box(operation());
        }

        let mut samples = Vec::with_capacity(self.measurement_iterations as usize);
        for _ in 0..self.measurement_iterations {
            let start = Instant::now();
            black_box(operation());
            samples.push(start.elapsed().as_nanos() as u64);
        }
        samples
    }

    /// Time one kernel at one size.
    ///
    /// The kernel is executed once up front so a failing kernel is reported
    /// before any timing starts.
    pub fn run_kernel(&self, size: ProblemSize, options: &RunOptions) -> KernelResult<Vec<u64>> {
        execute(size, options)?;
        Ok(self.run(|| execute(size, options)))
    }
}

impl Default for KernelHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Measure the execution time of a closure.
pub fn measure<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernbench_core::KernelKind;
    use std::thread;

    #[test]
    fn test_harness_sample_count() {
        let harness = KernelHarness::new().warmup(2).iterations(15);
        let mut calls = 0;
        let samples = harness.run(|| calls += 1);

        assert_eq!(samples.len(), 15);
        assert_eq!(calls, 17);
    }

    #[test]
    fn test_harness_measures_time() {
        let harness = KernelHarness::new().warmup(0).iterations(5);
        let samples = harness.run(|| thread::sleep(Duration::from_micros(100)));
        for sample in &samples {
            assert!(*sample >= 100_000, "Sample {} < 100μs", sample);
        }
    }

    #[test]
    fn test_run_kernel() {
        let harness = KernelHarness::new().warmup(1).iterations(3);
        let size = ProblemSize::new(KernelKind::Nsieve, 1000).unwrap();
        let samples = harness.run_kernel(size, &RunOptions::default()).unwrap();
        assert_eq!(samples.len(), 3);
    }

    #[test]
    fn test_measure() {
        let (result, duration) = measure(|| {
            thread::sleep(Duration::from_millis(5));
            42
        });

        assert_eq!(result, 42);
        assert!(duration >= Duration::from_millis(5));
    }
}

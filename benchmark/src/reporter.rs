// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! JSON report generation for benchmark results.
//!
//! Saves reports to timestamped JSON files for later comparison.

use crate::metrics::{BenchmarkReport, KernelCategory};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReporterError {
    #[error("Report I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// JSON reporter for benchmark results.
pub struct JsonReporter {
    /// Output directory for benchmark data
    output_dir: PathBuf,
}

impl JsonReporter {
    /// Create a new JSON reporter, creating the output directory if needed.
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self, ReporterError> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Save a report as `<label>_<timestamp>.json` and return its path.
    ///
    /// The label is the category shared by every result, or `mixed`.
    pub fn save(&self, report: &BenchmarkReport) -> Result<PathBuf, ReporterError> {
        let label = shared_category(report)
            .map(|category| category.to_string())
            .unwrap_or_else(|| "mixed".to_string());
        self.write(report, &label)
    }

    /// Save one report per kernel category.
    pub fn save_by_category(
        &self,
        report: &BenchmarkReport,
    ) -> Result<Vec<PathBuf>, ReporterError> {
        let mut by_category: HashMap<KernelCategory, Vec<_>> = HashMap::new();
        for result in &report.results {
            by_category
                .entry(result.category)
                .or_default()
                .push(result.clone());
        }

        let mut paths = Vec::with_capacity(by_category.len());
        for (category, results) in by_category {
            let category_report = BenchmarkReport {
                results,
                ..report.clone()
            };
            paths.push(self.write(&category_report, &category.to_string())?);
        }
        paths.sort();
        Ok(paths)
    }

    /// List all existing report files in the output directory.
    pub fn list_reports(&self) -> Result<Vec<PathBuf>, ReporterError> {
        let mut reports = Vec::new();
        for entry in fs::read_dir(&self.output_dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "json") {
                reports.push(path);
            }
        }
        reports.sort();
        Ok(reports)
    }

    /// Load an existing report from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<BenchmarkReport, ReporterError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    fn write(&self, report: &BenchmarkReport, label: &str) -> Result<PathBuf, ReporterError> {
        let timestamp = report.timestamp.format("%Y-%m-%dT%H-%M-%SZ");
        let filepath = self.output_dir.join(format!("{}_{}.json", label, timestamp));

        let writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(writer, report)?;
        Ok(filepath)
    }
}

fn shared_category(report: &BenchmarkReport) -> Option<KernelCategory> {
    let first = report.results.first()?.category;
    report
        .results
        .iter()
        .all(|r| r.category == first)
        .then_some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::BenchmarkResult;
    use kernbench_core::{KernelKind, ProblemSize};
    use tempfile::TempDir;

    fn result(kind: KernelKind, value: u64) -> BenchmarkResult {
        let size = ProblemSize::new(kind, value).unwrap();
        BenchmarkResult::latency(size, 0, vec![100, 200, 300], false)
    }

    #[test]
    fn test_reporter_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = JsonReporter::new(temp_dir.path()).unwrap();

        let mut report = BenchmarkReport::new();
        report.add_result(result(KernelKind::Nsieve, 1000));

        let path = reporter.save(&report).unwrap();
        assert!(path.exists());
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("sieve_"));

        let loaded = JsonReporter::load(&path).unwrap();
        assert_eq!(loaded.results.len(), 1);
        assert_eq!(loaded.results[0].kernel, "nsieve");
        assert_eq!(loaded.results[0].size, 1000);
    }

    #[test]
    fn test_mixed_report_label() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = JsonReporter::new(temp_dir.path()).unwrap();

        let mut report = BenchmarkReport::new();
        report.add_result(result(KernelKind::Nfib, 10));
        report.add_result(result(KernelKind::Quicksort, 100));

        let path = reporter.save(&report).unwrap();
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("mixed_"));
    }

    #[test]
    fn test_save_by_category_and_list() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = JsonReporter::new(temp_dir.path()).unwrap();

        let mut report = BenchmarkReport::new();
        report.add_result(result(KernelKind::Nfib, 10));
        report.add_result(result(KernelKind::Bintree, 4));
        report.add_result(result(KernelKind::Mergesort, 100));

        let paths = reporter.save_by_category(&report).unwrap();
        assert_eq!(paths.len(), 2);

        let listed = reporter.list_reports().unwrap();
        assert_eq!(listed, paths);
    }
}

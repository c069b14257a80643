// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `kbench suite` command - Run the configured suite.
//!
//! Runs every entry once per listed size and prints a checksum line per run,
//! so results from different runtimes can be diffed.

use std::io::Write;
use std::time::Instant;

use kernbench_core::{runner, ConfigLoader, RunOptions};

use super::format_elapsed;
use crate::CliError;

pub fn execute(config_path: &str, show_output: bool) -> Result<(), CliError> {
    let config = ConfigLoader::load_or_default(config_path)?;
    let options = RunOptions {
        mandelbrot: config.mandelbrot,
        ..RunOptions::default()
    };

    let suite = config.effective_suite();
    tracing::info!(entries = suite.len(), "Running suite");

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{:<18} {:>12} {:>12} {:>12}", "KERNEL", "SIZE", "CRC32", "ELAPSED")?;

    let mut runs = 0usize;
    for entry in &suite {
        for &size in &entry.sizes {
            let start = Instant::now();
            let output = runner::run(size, &options)?;
            let elapsed = start.elapsed();

            if show_output {
                stdout.write_all(output.text.as_bytes())?;
            }
            writeln!(
                stdout,
                "{:<18} {:>12} {:>#12x} {:>12}",
                entry.kernel.name(),
                size.value(),
                output.checksum,
                format_elapsed(elapsed)
            )?;
            runs += 1;
        }
    }

    stdout.flush()?;
    tracing::info!(runs, "Suite complete");
    Ok(())
}

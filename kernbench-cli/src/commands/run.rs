// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `kbench run` command - Run a single kernel.
//!
//! Behaves like the reference benchmark drivers: one optional size, kernel
//! output on stdout, nothing else.

use std::io::Write;

use kernbench_core::{runner, ConfigLoader, KernelKind, ProblemSize, RunOptions, XBound};

use crate::CliError;

/// Output switches for a single run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flags {
    pub print: bool,
    pub half_open: bool,
    pub stats: bool,
    pub checksum: bool,
}

pub fn execute(
    config_path: &str,
    kernel: KernelKind,
    size: Option<u64>,
    flags: Flags,
) -> Result<(), CliError> {
    let config = ConfigLoader::load_or_default(config_path)?;
    let problem = ProblemSize::resolve(kernel, size, config.defaults.size_for(kernel))?;

    let mut options = RunOptions {
        // The reference matmult drivers print the matrices only when run without a size.
        print_matrices: flags.print || size.is_none(),
        mandelbrot_stats: flags.stats,
        mandelbrot: config.mandelbrot,
    };
    if flags.half_open {
        options = options.with_x_bound(XBound::HalfOpen);
    }

    tracing::debug!(kernel = %kernel, size = problem.value(), "Running kernel");
    let output = runner::run(problem, &options)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.text.as_bytes())?;
    stdout.flush()?;

    if flags.checksum {
        eprintln!("crc32 = {:#010x}", output.checksum);
    }
    Ok(())
}

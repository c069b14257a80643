// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! kernbench CLI
//!
//! Command-line driver for the kernbench kernels. Kernel output goes to
//! stdout; logs and diagnostics go to stderr.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use kernbench_core::KernelKind;

mod commands;
mod error;

pub use error::CliError;

/// kernbench - CPU micro-benchmark kernels
#[derive(Parser)]
#[command(name = "kbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (optional for `run` and `list`)
    #[arg(short, long, default_value = "kernbench.yaml")]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one kernel and print its output
    Run {
        /// Kernel name (see `kbench list`)
        kernel: KernelKind,

        /// Problem size; defaults per kernel, required for nfib
        size: Option<u64>,

        /// Print matrix operands and product (always on when size is omitted)
        #[arg(long)]
        print: bool,

        /// Exclude the upper x bound from the Mandelbrot grid
        #[arg(long)]
        half_open: bool,

        /// Print the average Mandelbrot escape count after the grid
        #[arg(long)]
        stats: bool,

        /// Report the CRC32 of the output on stderr
        #[arg(long)]
        checksum: bool,
    },

    /// List available kernels and their default sizes
    List,

    /// Validate a configuration file
    Validate {
        /// Path to the configuration file
        file: String,
    },

    /// Run every configured suite entry and report checksums and timings
    Suite {
        /// Also print each kernel's output
        #[arg(long)]
        output: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    // Dispatch to command handlers
    let result = match cli.command {
        Commands::Run {
            kernel,
            size,
            print,
            half_open,
            stats,
            checksum,
        } => commands::run::execute(
            &cli.config,
            kernel,
            size,
            commands::run::Flags {
                print,
                half_open,
                stats,
                checksum,
            },
        ),
        Commands::List => commands::list::execute(&cli.config),
        Commands::Validate { file } => commands::validate::execute(&file),
        Commands::Suite { output } => commands::suite::execute(&cli.config, output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

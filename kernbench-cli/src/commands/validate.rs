// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `kbench validate` command - Validate configuration file.

use kernbench_core::{ConfigLoader, KernelKind};

use crate::CliError;

pub fn execute(file: &str) -> Result<(), CliError> {
    tracing::info!(file = %file, "Validating configuration");

    let config = match ConfigLoader::load_file(file) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ Configuration validation failed:");
            return Err(e.into());
        }
    };

    println!("✓ Configuration is valid");
    println!();
    println!("Default Sizes:");
    for kind in KernelKind::ALL {
        if config.defaults.is_overridden(kind) {
            println!(
                "  {:<18} {} (built-in: {})",
                kind.name(),
                config.defaults.size_for(kind),
                kind.default_size()
            );
        }
    }
    println!();
    println!("Mandelbrot Settings:");
    println!("  Max Iterations: {}", config.mandelbrot.max_iterations);
    println!(
        "  Viewport:       x [{}, {}], y [{}, {})",
        config.mandelbrot.min_x, config.mandelbrot.max_x, config.mandelbrot.min_y, config.mandelbrot.max_y
    );
    println!("  X Bound:        {:?}", config.mandelbrot.x_bound);
    println!();
    println!("Suite ({} entries):", config.suite.len());
    for entry in &config.suite {
        let sizes: Vec<String> = entry.sizes.iter().map(ToString::to_string).collect();
        println!("  - {} [{}]", entry.kernel, sizes.join(", "));
    }
    Ok(())
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `kbench list` command - List kernels.
//!
//! Shows every kernel with the meaning of its size parameter and the
//! default size in effect (config overrides marked with `*`).

use kernbench_core::{ConfigLoader, KernelKind};

use crate::CliError;

pub fn execute(config_path: &str) -> Result<(), CliError> {
    let config = ConfigLoader::load_or_default(config_path)?;

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                         AVAILABLE KERNELS                        ║");
    println!("╠═══════════════════╦═══════════════╦══════════════╦═══════════════╣");
    println!("║ Kernel            ║ Size          ║ Default      ║ Range         ║");
    println!("╠═══════════════════╬═══════════════╬══════════════╬═══════════════╣");

    for kind in KernelKind::ALL {
        let default = if kind.requires_size() {
            "required".to_string()
        } else if config.defaults.is_overridden(kind) {
            format!("{}*", config.defaults.size_for(kind))
        } else {
            config.defaults.size_for(kind).to_string()
        };
        let (min, max) = kind.size_bounds();

        println!(
            "║ {:<17} ║ {:<13} ║ {:<12} ║ {:<13} ║",
            kind.name(),
            kind.size_label(),
            default,
            format!("{}..={}", min, max)
        );
    }

    println!("╚═══════════════════╩═══════════════╩══════════════╩═══════════════╝");
    println!();
    println!("Total: {} kernel(s)", KernelKind::ALL.len());

    Ok(())
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CLI error type.

use kernbench_core::KernelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Kernel(#[from] KernelError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl From<kernbench_core::ValidationError> for CliError {
    fn from(err: kernbench_core::ValidationError) -> Self {
        Self::Kernel(err.into())
    }
}

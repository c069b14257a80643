// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Custom error types for kernbench.
//!
//! Explicit enum error types only. No `Box<dyn Error>` and no `anyhow::Result`
//! inside the library: every failure a kernel or driver can hit is a variant.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the kernel library.
#[derive(Debug, Error)]
pub enum KernelError {
    // =========================================================================
    // Input Validation - Fail-Fast on Bad Sizes or Config
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown kernel: {name}")]
    UnknownKernel { name: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    // =========================================================================
    // Kernel Contract Violations
    // =========================================================================
    #[error("Matrix dimension mismatch: left has {left_cols} columns, right has {right_rows} rows")]
    DimensionMismatch { left_cols: usize, right_rows: usize },

    // =========================================================================
    // System Errors
    // =========================================================================
    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Validation errors stop a run before any kernel executes.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {field} in {context}")]
    MissingRequiredField {
        field: &'static str,
        context: String,
    },

    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Size out of bounds for {kernel}: {size} (min: {min}, max: {max})")]
    SizeOutOfBounds {
        kernel: &'static str,
        size: u64,
        min: u64,
        max: u64,
    },
}

/// Result type alias using KernelError.
pub type KernelResult<T> = Result<T, KernelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = ValidationError::MissingRequiredField {
            field: "size",
            context: "kernel 'nfib'".to_string(),
        };
        assert!(err.to_string().contains("size"));
        assert!(err.to_string().contains("nfib"));
    }

    #[test]
    fn test_error_chain() {
        let validation_err = ValidationError::SizeOutOfBounds {
            kernel: "nfib",
            size: 120,
            min: 0,
            max: 90,
        };
        let err: KernelError = validation_err.into();
        assert!(matches!(err, KernelError::Validation(_)));
        assert!(err.to_string().contains("120"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = KernelError::DimensionMismatch {
            left_cols: 3,
            right_rows: 2,
        };
        assert_eq!(
            err.to_string(),
            "Matrix dimension mismatch: left has 3 columns, right has 2 rows"
        );
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! The benchmark kernels.
//!
//! Each module is a leaf with no dependency on the others. Kernels are pure
//! and deterministic; argument handling and printing live in
//! [`crate::runner`] and the CLI.

pub mod bintree;
pub mod mandelbrot;
pub mod matrix;
pub mod nfib;
pub mod sieve;
pub mod sort;

//! kernbench Core Library
//!
//! Kernel library for the kernbench CPU micro-benchmark suite.
//! Provides the seven reference kernels (binary trees, naive Fibonacci,
//! Mandelbrot, matrix multiply, quicksort, mergesort, prime sieve), the
//! kernel catalogue, validated problem sizes, output rendering and YAML
//! suite configuration.

pub mod config;
pub mod error;
pub mod kernels;
pub mod runner;
pub mod types;

// Re-export commonly used types
pub use config::{Config, ConfigLoader, KernelDefaults, MandelbrotSettings, SuiteEntry};
pub use error::{KernelError, KernelResult, ValidationError};
pub use kernels::mandelbrot::XBound;
pub use runner::{execute, run, KernelOutput, Outcome, RunOptions};
pub use types::{KernelKind, ProblemSize};

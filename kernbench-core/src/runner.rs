// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Kernel dispatch and output rendering.
//!
//! [`execute`] runs one kernel and returns its raw [`Outcome`]; this is the
//! part the benchmark harness times. [`run`] additionally renders the
//! outcome to the exact text the reference drivers print and fingerprints
//! it with CRC32 so runs on different runtimes can be compared.

use std::fmt::Write as _;

use crate::config::MandelbrotSettings;
use crate::error::KernelResult;
use crate::kernels::mandelbrot::{self, Rendering, XBound};
use crate::kernels::matrix::{self, Matrix};
use crate::kernels::{bintree, nfib, sieve, sort};
use crate::types::{KernelKind, ProblemSize};

/// Seed of the left matrix operand.
const LEFT_SEED: i64 = 1;
/// Seed of the right matrix operand.
const RIGHT_SEED: i64 = 2;

/// Driver options that change what a kernel computes or prints.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Print both matrix operands and the product before the sum.
    pub print_matrices: bool,
    /// Append the average escape count after the Mandelbrot grid.
    pub mandelbrot_stats: bool,
    pub mandelbrot: MandelbrotSettings,
}

impl RunOptions {
    /// Override the Mandelbrot x-bound inclusivity.
    pub fn with_x_bound(mut self, bound: XBound) -> Self {
        self.mandelbrot.x_bound = bound;
        self
    }
}

/// Raw result of one kernel invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Node count of the built tree.
    Nodes(u64),
    /// `(i, nfib(i))` pairs.
    Fibonacci(Vec<(u32, u64)>),
    Mandelbrot(Rendering),
    Matrices {
        left: Matrix,
        right: Matrix,
        product: Matrix,
        sum: i64,
    },
    Sorted(Vec<String>),
    Primes { bound: usize, count: usize },
}

impl Outcome {
    /// Render the outcome as the reference driver prints it.
    pub fn render(&self, options: &RunOptions) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.render_into(&mut out, options);
        out
    }

    fn render_into(&self, out: &mut String, options: &RunOptions) -> std::fmt::Result {
        match self {
            Self::Nodes(nodes) => writeln!(out, "{}", nodes),
            Self::Fibonacci(values) => {
                for (i, value) in values {
                    writeln!(out, "nfib({}) = {}", i, value)?;
                }
                Ok(())
            }
            Self::Mandelbrot(rendering) => {
                out.push_str(&rendering.text);
                if options.mandelbrot_stats {
                    writeln!(out, "average = {}", rendering.average_iterations())?;
                }
                Ok(())
            }
            Self::Matrices {
                left,
                right,
                product,
                sum,
            } => {
                if options.print_matrices {
                    write!(out, "{}", left)?;
                    writeln!(out, "--")?;
                    write!(out, "{}", right)?;
                    writeln!(out, "--")?;
                    write!(out, "{}", product)?;
                    writeln!(out)?;
                }
                writeln!(out, "sum = {}", sum)
            }
            Self::Sorted(list) => {
                for item in list {
                    writeln!(out, "{}", item)?;
                }
                Ok(())
            }
            Self::Primes { bound, count } => writeln!(out, "Primes up to {}: {}", bound, count),
        }
    }
}

/// A rendered kernel run.
#[derive(Debug, Clone)]
pub struct KernelOutput {
    pub size: ProblemSize,
    pub text: String,
    /// CRC32 of `text`.
    pub checksum: u32,
}

impl KernelOutput {
    pub fn kind(&self) -> KernelKind {
        self.size.kind()
    }
}

/// Run the kernel `size` was validated for and return its raw outcome.
pub fn execute(size: ProblemSize, options: &RunOptions) -> KernelResult<Outcome> {
    let n = size.as_usize();
    tracing::debug!(kernel = %size.kind(), size = n, "Executing kernel");

    let outcome = match size.kind() {
        KernelKind::Bintree => Outcome::Nodes(bintree::build_and_count(n as u32)),
        KernelKind::Nfib => Outcome::Fibonacci(nfib::sequence(n as u32).collect()),
        KernelKind::Mandelbrot => {
            let settings = &options.mandelbrot;
            Outcome::Mandelbrot(mandelbrot::render(
                &settings.viewport(size.value())?,
                settings.x_bound,
                settings.max_iterations,
            ))
        }
        KernelKind::Matmult => {
            let left = matrix::build(n, n, LEFT_SEED);
            let right = matrix::build(n, n, RIGHT_SEED);
            let product = matrix::multiply(&left, &right)?;
            let sum = matrix::sum(&product);
            Outcome::Matrices {
                left,
                right,
                product,
                sum,
            }
        }
        KernelKind::Quicksort => Outcome::Sorted(sort::quicksort(sort::genlist(n))),
        KernelKind::QuicksortInplace => {
            let mut list = sort::genlist(n);
            sort::quicksort_inplace(&mut list);
            Outcome::Sorted(list)
        }
        KernelKind::Mergesort => Outcome::Sorted(sort::merge_sort(sort::genlist(n))),
        KernelKind::MergesortInplace => {
            let mut list = sort::genlist(n);
            let mut aux = vec![String::new(); list.len()];
            sort::merge_sort_inplace(&mut list, &mut aux)?;
            Outcome::Sorted(list)
        }
        KernelKind::Nsieve => Outcome::Primes {
            bound: n,
            count: sieve::count_primes(n),
        },
        KernelKind::NsieveOdd => Outcome::Primes {
            bound: n,
            count: sieve::count_primes_odd(n),
        },
    };
    Ok(outcome)
}

/// Run a kernel and render its output.
pub fn run(size: ProblemSize, options: &RunOptions) -> KernelResult<KernelOutput> {
    let outcome = execute(size, options)?;
    let text = outcome.render(options);
    let checksum = crc32fast::hash(text.as_bytes());
    tracing::debug!(
        kernel = %size.kind(),
        size = size.value(),
        bytes = text.len(),
        checksum = %format!("{:#010x}", checksum),
        "Kernel output rendered"
    );
    Ok(KernelOutput {
        size,
        text,
        checksum,
    })
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Newtype wrappers for validated inputs.
//!
//! Following the "Newtype" pattern in Rust to ensure valid state by construction.
//! A `ProblemSize` is always within the bounds of the kernel it was built for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{KernelError, ValidationError};

/// The benchmark kernels shipped with the suite.
///
/// Names match the benchmark program names used by the other runtimes so that
/// results line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KernelKind {
    /// Perfect binary tree build + node count.
    Bintree,
    /// Naive doubly-recursive Fibonacci.
    Nfib,
    /// Escape-time Mandelbrot rendered as ASCII.
    Mandelbrot,
    /// Dense integer matrix multiply.
    Matmult,
    /// List-partitioning quicksort.
    Quicksort,
    /// Lomuto in-place quicksort.
    QuicksortInplace,
    /// Functional split/merge mergesort.
    Mergesort,
    /// Top-down mergesort over a shared scratch buffer.
    MergesortInplace,
    /// Classic Sieve of Eratosthenes.
    Nsieve,
    /// Odd-only sieve over a half-size bit array.
    NsieveOdd,
}

impl KernelKind {
    /// Every kernel, in catalogue order.
    pub const ALL: [KernelKind; 10] = [
        Self::Bintree,
        Self::Nfib,
        Self::Mandelbrot,
        Self::Matmult,
        Self::Quicksort,
        Self::QuicksortInplace,
        Self::Mergesort,
        Self::MergesortInplace,
        Self::Nsieve,
        Self::NsieveOdd,
    ];

    /// Program name used on the command line and in config files.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bintree => "bintree",
            Self::Nfib => "nfib",
            Self::Mandelbrot => "mandelbrot",
            Self::Matmult => "matmult",
            Self::Quicksort => "quicksort",
            Self::QuicksortInplace => "quicksort_inplace",
            Self::Mergesort => "mergesort",
            Self::MergesortInplace => "mergesort_inplace",
            Self::Nsieve => "nsieve",
            Self::NsieveOdd => "nsieve_odd",
        }
    }

    /// What the size parameter means for this kernel.
    pub const fn size_label(&self) -> &'static str {
        match self {
            Self::Bintree => "depth",
            Self::Nfib => "max n",
            Self::Mandelbrot => "resolution",
            Self::Matmult => "dimension",
            Self::Quicksort
            | Self::QuicksortInplace
            | Self::Mergesort
            | Self::MergesortInplace => "list length",
            Self::Nsieve | Self::NsieveOdd => "upper bound",
        }
    }

    /// Size used when the caller supplies none.
    pub const fn default_size(&self) -> u64 {
        match self {
            Self::Bintree => 16,
            Self::Nfib => 24,
            Self::Mandelbrot => 32,
            Self::Matmult => 10,
            Self::Quicksort
            | Self::QuicksortInplace
            | Self::Mergesort
            | Self::MergesortInplace => 1000,
            Self::Nsieve | Self::NsieveOdd => 10000,
        }
    }

    /// Whether the driver must be given an explicit size.
    pub const fn requires_size(&self) -> bool {
        matches!(self, Self::Nfib)
    }

    /// Inclusive `(min, max)` accepted sizes.
    ///
    /// `nfib(91)` is the largest value that fits in a `u64`. A depth-24 tree
    /// holds `2^25 - 1` boxed nodes, roughly 512 MiB of node storage.
    pub const fn size_bounds(&self) -> (u64, u64) {
        match self {
            Self::Bintree => (0, 24),
            Self::Nfib => (0, 90),
            Self::Mandelbrot => (1, 10_000),
            Self::Matmult => (0, 10_000),
            Self::Quicksort
            | Self::QuicksortInplace
            | Self::Mergesort
            | Self::MergesortInplace => (0, 50_000_000),
            Self::Nsieve | Self::NsieveOdd => (0, 1_000_000_000),
        }
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelKind {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| KernelError::UnknownKernel {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for KernelKind {
    type Error = KernelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<KernelKind> for String {
    fn from(kind: KernelKind) -> Self {
        kind.name().to_string()
    }
}

/// Validated problem size for one kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProblemSize {
    kind: KernelKind,
    value: u64,
}

impl ProblemSize {
    /// Create a new ProblemSize with bounds validation.
    pub fn new(kind: KernelKind, value: u64) -> Result<Self, ValidationError> {
        let (min, max) = kind.size_bounds();
        if !(min..=max).contains(&value) {
            return Err(ValidationError::SizeOutOfBounds {
                kernel: kind.name(),
                size: value,
                min,
                max,
            });
        }
        Ok(Self { kind, value })
    }

    /// The kernel's built-in default size.
    pub fn default_for(kind: KernelKind) -> Self {
        Self {
            kind,
            value: kind.default_size(),
        }
    }

    /// Resolve an optional caller-supplied size against a fallback default.
    ///
    /// Kernels that require a size reject `None` regardless of the fallback.
    pub fn resolve(
        kind: KernelKind,
        supplied: Option<u64>,
        fallback: u64,
    ) -> Result<Self, ValidationError> {
        match supplied {
            Some(value) => Self::new(kind, value),
            None if kind.requires_size() => Err(ValidationError::MissingRequiredField {
                field: "size",
                context: format!("kernel '{}'", kind),
            }),
            None => Self::new(kind, fallback),
        }
    }

    /// Kernel this size was validated for.
    pub fn kind(&self) -> KernelKind {
        self.kind
    }

    /// Get the inner size value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Size as an index/length. Bounds keep this lossless on 64-bit hosts.
    pub fn as_usize(&self) -> usize {
        self.value as usize
    }
}

impl fmt::Display for ProblemSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<ProblemSize> for u64 {
    fn from(size: ProblemSize) -> Self {
        size.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_kind_parse() {
        assert_eq!("bintree".parse::<KernelKind>().unwrap(), KernelKind::Bintree);
        assert_eq!(
            "QUICKSORT_INPLACE".parse::<KernelKind>().unwrap(),
            KernelKind::QuicksortInplace
        );
        assert!("bubblesort".parse::<KernelKind>().is_err());
    }

    #[test]
    fn test_kernel_kind_names_unique() {
        for (i, a) in KernelKind::ALL.iter().enumerate() {
            for b in &KernelKind::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
            assert_eq!(a.name().parse::<KernelKind>().unwrap(), *a);
        }
    }

    #[test]
    fn test_default_sizes() {
        assert_eq!(KernelKind::Bintree.default_size(), 16);
        assert_eq!(KernelKind::Nfib.default_size(), 24);
        assert_eq!(KernelKind::Mandelbrot.default_size(), 32);
        assert_eq!(KernelKind::Matmult.default_size(), 10);
        assert_eq!(KernelKind::Mergesort.default_size(), 1000);
        assert_eq!(KernelKind::Nsieve.default_size(), 10000);
    }

    #[test]
    fn test_defaults_within_bounds() {
        for kind in KernelKind::ALL {
            assert!(ProblemSize::new(kind, kind.default_size()).is_ok(), "{kind}");
        }
    }

    #[test]
    fn test_problem_size_invalid() {
        assert!(ProblemSize::new(KernelKind::Nfib, 91).is_err());
        assert!(ProblemSize::new(KernelKind::Mandelbrot, 0).is_err());
        assert!(ProblemSize::new(KernelKind::Bintree, 25).is_err());
        assert!(ProblemSize::new(KernelKind::Bintree, 24).is_ok());
    }

    #[test]
    fn test_resolve_required_size() {
        let err = ProblemSize::resolve(KernelKind::Nfib, None, 24).unwrap_err();
        assert!(matches!(err, ValidationError::MissingRequiredField { .. }));

        let size = ProblemSize::resolve(KernelKind::Nfib, Some(10), 24).unwrap();
        assert_eq!(size.value(), 10);
    }

    #[test]
    fn test_resolve_fallback() {
        let size = ProblemSize::resolve(KernelKind::Bintree, None, 12).unwrap();
        assert_eq!(size.value(), 12);
        assert_eq!(size.kind(), KernelKind::Bintree);
    }

    #[test]
    fn test_kernel_kind_serde_name() {
        let yaml = serde_yaml::to_string(&KernelKind::NsieveOdd).unwrap();
        assert_eq!(yaml.trim(), "nsieve_odd");
        let kind: KernelKind = serde_yaml::from_str("mergesort_inplace").unwrap();
        assert_eq!(kind, KernelKind::MergesortInplace);
    }
}

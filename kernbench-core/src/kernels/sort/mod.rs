// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! String sorting kernels.
//!
//! All four variants sort the same input, produced by [`genlist`], with
//! plain lexicographic `String` ordering:
//!
//! - [`quicksort`]: first-element pivot, partitions into new lists
//! - [`quicksort_inplace`]: Lomuto partition over a slice
//! - [`merge_sort`]: split at `len / 2`, merge into new lists
//! - [`merge_sort_inplace`]: top-down merge through one shared scratch buffer

pub mod mergesort;
pub mod quicksort;

pub use mergesort::{merge, merge_by, merge_sort, merge_sort_inplace};
pub use quicksort::{quicksort, quicksort_inplace};

/// `n` strings, the i-th being the decimal digits of `7 * i` reversed.
///
/// Reversal is per character, so trailing zeros become leading zeros
/// (`70` becomes `"07"`).
pub fn genlist(n: usize) -> Vec<String> {
    (0..n as u64)
        .map(|i| (7 * i).to_string().chars().rev().collect())
        .collect()
}

/// Whether every adjacent pair is in order.
pub fn is_non_decreasing(list: &[String]) -> bool {
    list.windows(2).all(|pair| pair[0] <= pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genlist_reverses_digits() {
        let list = genlist(16);
        assert_eq!(list[0], "0");
        assert_eq!(list[1], "7");
        assert_eq!(list[2], "41");
        assert_eq!(list[10], "07");
        assert_eq!(list[15], "501");
    }

    #[test]
    fn test_genlist_empty() {
        assert!(genlist(0).is_empty());
    }

    #[test]
    fn test_is_non_decreasing() {
        let sorted = vec!["0".to_string(), "07".to_string(), "7".to_string()];
        assert!(is_non_decreasing(&sorted));
        let unsorted = vec!["7".to_string(), "07".to_string()];
        assert!(!is_non_decreasing(&unsorted));
        assert!(is_non_decreasing(&[]));
    }
}

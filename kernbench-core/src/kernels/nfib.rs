// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Naive doubly-recursive Fibonacci.
//!
//! Exponential time is the workload. Do not memoize.

/// `1` for `n <= 1`, otherwise `nfib(n - 2) + nfib(n - 1)`.
pub fn nfib(n: u32) -> u64 {
    if n <= 1 {
        1
    } else {
        nfib(n - 2) + nfib(n - 1)
    }
}

/// `(i, nfib(i))` for every `i` in `0..=max`, computed lazily.
pub fn sequence(max: u32) -> impl Iterator<Item = (u32, u64)> {
    (0..=max).map(|i| (i, nfib(i)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(nfib(0), 1);
        assert_eq!(nfib(1), 1);
        assert_eq!(nfib(2), 2);
        assert_eq!(nfib(10), 89);
    }

    #[test]
    fn test_sequence_is_inclusive() {
        let values: Vec<_> = sequence(5).collect();
        assert_eq!(values, vec![(0, 1), (1, 1), (2, 2), (3, 3), (4, 5), (5, 8)]);
    }
}

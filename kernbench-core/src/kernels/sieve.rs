// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Sieve of Eratosthenes, plain and odd-only.

/// Primality flags for `0..=m`, marking multiples from `2i` upward.
pub fn classic_flags(m: usize) -> Vec<bool> {
    let mut flags = vec![true; m + 1];
    flags[0] = false;
    if m >= 1 {
        flags[1] = false;
    }

    let mut i = 2;
    while i * i <= m {
        if flags[i] {
            let mut k = i + i;
            while k <= m {
                flags[k] = false;
                k += i;
            }
        }
        i += 1;
    }
    flags
}

/// Number of primes `<= m`.
pub fn count_primes(m: usize) -> usize {
    let count = classic_flags(m).iter().filter(|&&prime| prime).count();
    tracing::debug!(bound = m, count, "Classic sieve finished");
    count
}

/// Packed bit array where bit `k` stands for the odd value `2k + 1`.
#[derive(Debug, Clone)]
pub struct OddBits {
    words: Vec<u64>,
    len: usize,
}

impl OddBits {
    /// All odd candidates `<= m` set.
    fn for_bound(m: usize) -> Self {
        let len = (m + 1) / 2;
        let mut words = vec![u64::MAX; len.div_ceil(64)];
        if len % 64 != 0 {
            if let Some(last) = words.last_mut() {
                *last = (1u64 << (len % 64)) - 1;
            }
        }
        Self { words, len }
    }

    fn get(&self, k: usize) -> bool {
        self.words[k / 64] & (1u64 << (k % 64)) != 0
    }

    fn clear(&mut self, k: usize) {
        self.words[k / 64] &= !(1u64 << (k % 64));
    }

    /// Number of odd values represented.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

/// Odd-only sieve over `1..=m`; bit `k` is set iff `2k + 1` is prime.
pub fn odd_bits(m: usize) -> OddBits {
    let mut bits = OddBits::for_bound(m);
    if bits.is_empty() {
        return bits;
    }
    bits.clear(0);

    let mut k = 1;
    loop {
        let p = 2 * k + 1;
        if p * p > m {
            break;
        }
        if bits.get(k) {
            // Even multiples are never stored, so step by 2p.
            let mut j = p * p;
            while j <= m {
                bits.clear(j / 2);
                j += 2 * p;
            }
        }
        k += 1;
    }
    bits
}

/// Number of primes `<= m` using the odd-only sieve.
pub fn count_primes_odd(m: usize) -> usize {
    if m < 2 {
        return 0;
    }
    let count = odd_bits(m).count_ones() + 1;
    tracing::debug!(bound = m, count, "Odd-only sieve finished");
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_prime(n: usize) -> bool {
        n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn test_known_counts() {
        assert_eq!(count_primes(10), 4);
        assert_eq!(count_primes(30), 10);
        assert_eq!(count_primes_odd(10), 4);
        assert_eq!(count_primes_odd(30), 10);
        assert_eq!(count_primes(10000), 1229);
    }

    #[test]
    fn test_tiny_bounds() {
        for (m, expected) in [(0, 0), (1, 0), (2, 1), (3, 2), (4, 2)] {
            assert_eq!(count_primes(m), expected, "classic m={m}");
            assert_eq!(count_primes_odd(m), expected, "odd m={m}");
        }
    }

    #[test]
    fn test_flags_match_trial_division() {
        let flags = classic_flags(500);
        for (n, &flag) in flags.iter().enumerate() {
            assert_eq!(flag, is_prime(n), "n={n}");
        }
    }

    #[test]
    fn test_odd_bits_match_trial_division() {
        let bits = odd_bits(501);
        assert_eq!(bits.len(), 251);
        for k in 0..bits.len() {
            assert_eq!(bits.get(k), is_prime(2 * k + 1), "value={}", 2 * k + 1);
        }
    }

    #[test]
    fn test_variants_agree() {
        for m in (0..2000).chain([9_973, 65_536, 100_003]) {
            assert_eq!(count_primes(m), count_primes_odd(m), "m={m}");
        }
    }
}

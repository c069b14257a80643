// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Mergesort kernels.
//!
//! Both variants are stable: when the two fronts compare equal the element
//! from the left half is emitted first.

use std::mem;

use crate::error::{KernelResult, ValidationError};

/// Merge two ordered lists, taking from `right` only when it is strictly less.
pub fn merge_by<T, F>(left: Vec<T>, right: Vec<T>, mut less: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut xs = left.into_iter().peekable();
    let mut ys = right.into_iter().peekable();

    loop {
        let take_right = match (xs.peek(), ys.peek()) {
            (Some(x), Some(y)) => less(y, x),
            _ => break,
        };
        let next = if take_right { ys.next() } else { xs.next() };
        merged.extend(next);
    }
    merged.extend(xs);
    merged.extend(ys);
    merged
}

/// Lexicographic [`merge_by`] for the string kernels.
pub fn merge(left: Vec<String>, right: Vec<String>) -> Vec<String> {
    merge_by(left, right, |a, b| a < b)
}

/// Split at `len / 2`, sort both halves, merge into a new list.
pub fn merge_sort(mut list: Vec<String>) -> Vec<String> {
    if list.len() <= 1 {
        return list;
    }
    let right = list.split_off(list.len() / 2);
    merge(merge_sort(list), merge_sort(right))
}

/// Sort `arr` in place, staging merges through `aux`.
///
/// `aux` must be at least as long as `arr`. Its contents are scratch and
/// are left as empty strings on return; nothing is allocated per merge.
pub fn merge_sort_inplace(arr: &mut [String], aux: &mut [String]) -> KernelResult<()> {
    if aux.len() < arr.len() {
        return Err(ValidationError::InvalidFieldValue {
            field: "aux",
            value: aux.len().to_string(),
            reason: format!("scratch buffer must hold at least {} elements", arr.len()),
        }
        .into());
    }
    if arr.len() > 1 {
        sort_range(arr, aux, 0, arr.len() - 1);
    }
    Ok(())
}

fn sort_range(arr: &mut [String], aux: &mut [String], lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }

    let mid = lo + (hi + 1 - lo) / 2;
    sort_range(arr, aux, lo, mid - 1);
    sort_range(arr, aux, mid, hi);

    let mut pos = 0;
    let mut x = lo;
    let mut y = mid;
    while x < mid && y <= hi {
        if arr[y] < arr[x] {
            aux[pos] = mem::take(&mut arr[y]);
            y += 1;
        } else {
            aux[pos] = mem::take(&mut arr[x]);
            x += 1;
        }
        pos += 1;
    }
    for i in (x..mid).chain(y..=hi) {
        aux[pos] = mem::take(&mut arr[i]);
        pos += 1;
    }

    for (offset, slot) in aux[..pos].iter_mut().enumerate() {
        arr[lo + offset] = mem::take(slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::sort::{genlist, is_non_decreasing};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_merge_takes_smaller_front() {
        let merged = merge(strings(&["a", "c", "e"]), strings(&["b", "d"]));
        assert_eq!(merged, strings(&["a", "b", "c", "d", "e"]));
    }

    #[test]
    fn test_merge_is_stable() {
        let left = vec![(1, "left-a"), (2, "left-b")];
        let right = vec![(1, "right-a"), (2, "right-b")];
        let merged = merge_by(left, right, |a, b| a.0 < b.0);
        assert_eq!(
            merged,
            vec![(1, "left-a"), (1, "right-a"), (2, "left-b"), (2, "right-b")]
        );
    }

    #[test]
    fn test_merge_sort_small() {
        assert_eq!(
            merge_sort(strings(&["b", "c", "a", "b"])),
            strings(&["a", "b", "b", "c"])
        );
        assert!(merge_sort(Vec::new()).is_empty());
    }

    #[test]
    fn test_inplace_odd_length() {
        let mut arr = strings(&["e", "a", "d", "b", "c"]);
        let mut aux = vec![String::new(); arr.len()];
        merge_sort_inplace(&mut arr, &mut aux).unwrap();
        assert_eq!(arr, strings(&["a", "b", "c", "d", "e"]));
        assert!(aux.iter().all(String::is_empty));
    }

    #[test]
    fn test_inplace_rejects_short_scratch() {
        let mut arr = strings(&["b", "a"]);
        let mut aux = vec![String::new(); 1];
        assert!(merge_sort_inplace(&mut arr, &mut aux).is_err());
        assert_eq!(arr, strings(&["b", "a"]));
    }

    #[test]
    fn test_inplace_accepts_oversized_scratch() {
        let mut arr = strings(&["b", "a", "c"]);
        let mut aux = vec![String::new(); 10];
        merge_sort_inplace(&mut arr, &mut aux).unwrap();
        assert_eq!(arr, strings(&["a", "b", "c"]));
    }

    #[test]
    fn test_variants_agree_on_genlist() {
        let input = genlist(1000);
        let functional = merge_sort(input.clone());
        let mut inplace = input;
        let mut aux = vec![String::new(); inplace.len()];
        merge_sort_inplace(&mut inplace, &mut aux).unwrap();

        assert!(is_non_decreasing(&functional));
        assert_eq!(functional, inplace);
    }
}

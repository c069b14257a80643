// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Quicksort kernels. Neither variant guards against quadratic inputs.

/// Sort by partitioning around the first element into fresh lists.
///
/// Elements equal to the pivot go to the upper partition.
pub fn quicksort(list: Vec<String>) -> Vec<String> {
    let total = list.len();
    let mut rest = list.into_iter();
    let Some(pivot) = rest.next() else {
        return Vec::new();
    };

    let (before, after): (Vec<String>, Vec<String>) = rest.partition(|cur| *cur < pivot);

    let mut sorted = Vec::with_capacity(total);
    if !before.is_empty() {
        sorted.extend(quicksort(before));
    }
    sorted.push(pivot);
    if !after.is_empty() {
        sorted.extend(quicksort(after));
    }
    sorted
}

/// Sort in place with a Lomuto partition around the rightmost element.
pub fn quicksort_inplace(arr: &mut [String]) {
    if arr.len() > 1 {
        lomuto(arr, 0, arr.len() - 1);
    }
}

fn lomuto(arr: &mut [String], left: usize, right: usize) {
    // arr[right] is the pivot; store never passes i, so it stays put until the final swap.
    let mut store = left;
    for i in left..right {
        if arr[i] < arr[right] {
            arr.swap(store, i);
            store += 1;
        }
    }
    arr.swap(right, store);

    if store > left + 1 {
        lomuto(arr, left, store - 1);
    }
    if right > store + 1 {
        lomuto(arr, store + 1, right);
    }
}

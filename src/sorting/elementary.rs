//! Quadratic in-place sorts: bubble, selection and insertion.
//!
//! All three sort ascending, allocate nothing and run in O(n²) time in the
//! worst and average case. They are the baseline the faster sorts are
//! measured against.

/// Bubble sort with early exit.
///
/// Every pass carries the largest unplaced element to the end of the
/// unsorted prefix, so pass `i` can stop `i` elements short of the end. A
/// pass that performs no swap proves the slice is sorted.
///
/// # Test Cases
/// - bubble_sort([5, 2, 8, 1, 9]) = [1, 2, 5, 8, 9]
/// - bubble_sort([]) = []
pub fn bubble_sort(arr: &mut [i64]) {
    let len = arr.len();
    if len < 2 {
        return;
    }

    for pass in 0..len - 1 {
        let mut swapped = false;
        for j in 0..len - 1 - pass {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Selection sort.
///
/// Repeatedly finds the minimum of the unsorted suffix and swaps it to the
/// front of that suffix. Not stable.
pub fn selection_sort(arr: &mut [i64]) {
    let len = arr.len();
    for i in 0..len.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..len {
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            arr.swap(i, min_idx);
        }
    }
}

/// Insertion sort (stable, efficient for small arrays).
///
/// Grows a sorted prefix one element at a time, shifting larger elements
/// right to open a slot for the next key.
///
/// # Test Cases
/// - insertion_sort([5, 2, 8, 1, 9, 3]) = [1, 2, 3, 5, 8, 9]
pub fn insertion_sort(arr: &mut [i64]) {
    insertion_sort_by_key(arr, |&v| v);
}

/// Stable insertion sort ordering elements by `key`.
///
/// Elements are only shifted past strictly greater keys, so equal keys
/// never change their relative order.
pub fn insertion_sort_by_key<T, K, F>(arr: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && key(&arr[j - 1]) > key(&arr[j]) {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

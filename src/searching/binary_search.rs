//! Binary search.
//!
//! [`binary_search`] expects its input already sorted and never reorders it.
//! Callers holding unsorted data use [`sorted_binary_search`], which works on
//! a private sorted copy.

/// Index returned when the target is absent.
pub const NOT_FOUND: isize = -1;

/// Binary search in a sorted slice.
///
/// Returns the index of an element equal to `target`, or [`NOT_FOUND`].
/// When `target` occurs more than once any matching index may be returned;
/// use [`lower_bound`] for the leftmost one.
///
/// # Test Cases
/// - binary_search([1, 3, 5, 7, 9], 7) = 3
/// - binary_search([1, 3, 5, 7, 9], 4) = -1
pub fn binary_search(arr: &[i64], target: i64) -> isize {
    let mut low = 0usize;
    let mut high = arr.len();

    // Half-open window [low, high).
    while low < high {
        let mid = low + (high - low) / 2;
        match arr[mid].cmp(&target) {
            std::cmp::Ordering::Equal => return mid as isize,
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }

    NOT_FOUND
}

/// Sort a copy of `arr`, then binary search it.
///
/// The returned index refers to the sorted copy, not to `arr`.
pub fn sorted_binary_search(arr: &[i64], target: i64) -> isize {
    let mut sorted = arr.to_vec();
    sorted.sort_unstable();
    binary_search(&sorted, target)
}

/// Index of the first element not less than `target` in a sorted slice.
///
/// Equals `arr.len()` when every element is smaller.
pub fn lower_bound(arr: &[i64], target: i64) -> usize {
    let mut left = 0usize;
    let mut right = arr.len();

    while left < right {
        let mid = left + (right - left) / 2;
        if arr[mid] < target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    left
}

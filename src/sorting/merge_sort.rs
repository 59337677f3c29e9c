//! Top-down merge sort in two flavors.
//!
//! [`merge_sort`] merges front to back, [`sort_array`] merges back to front.
//! Both are stable and allocate a single scratch buffer of `n` elements
//! that is reused at every level of the recursion.

/// Stable merge sort, forward merge.
///
/// # Test Cases
/// - merge_sort([38, 27, 43, 3, 9, 82, 10]) = [3, 9, 10, 27, 38, 43, 82]
pub fn merge_sort(arr: &mut [i64]) {
    merge_sort_by_key(arr, |&v| v);
}

/// Stable merge sort, merging from the back of each run pair.
pub fn sort_array(arr: &mut [i64]) {
    sort_array_by_key(arr, |&v| v);
}

/// Forward-merging merge sort ordering elements by `key`.
pub fn merge_sort_by_key<T, K, F>(arr: &mut [T], mut key: F)
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    if arr.len() < 2 {
        return;
    }
    let mut buf = arr.to_vec();
    split_and_merge(arr, &mut buf, &mut key, Direction::Forward);
}

/// Backward-merging merge sort ordering elements by `key`.
pub fn sort_array_by_key<T, K, F>(arr: &mut [T], mut key: F)
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    if arr.len() < 2 {
        return;
    }
    let mut buf = arr.to_vec();
    split_and_merge(arr, &mut buf, &mut key, Direction::Backward);
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

fn split_and_merge<T, K, F>(arr: &mut [T], buf: &mut [T], key: &mut F, direction: Direction)
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let len = arr.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    split_and_merge(&mut arr[..mid], &mut buf[..mid], key, direction);
    split_and_merge(&mut arr[mid..], &mut buf[mid..], key, direction);

    buf[..len].clone_from_slice(arr);
    match direction {
        Direction::Forward => merge_forward(arr, &buf[..len], mid, key),
        Direction::Backward => merge_backward(arr, &buf[..len], mid, key),
    }
}

/// Merge `src[..mid]` and `src[mid..]` into `dst` from the front.
///
/// On equal keys the left run wins.
fn merge_forward<T, K, F>(dst: &mut [T], src: &[T], mid: usize, key: &mut F)
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let len = src.len();
    let (mut left, mut right, mut out) = (0, mid, 0);

    while left < mid && right < len {
        if key(&src[left]) <= key(&src[right]) {
            dst[out] = src[left].clone();
            left += 1;
        } else {
            dst[out] = src[right].clone();
            right += 1;
        }
        out += 1;
    }

    // Copy remaining elements
    while left < mid {
        dst[out] = src[left].clone();
        left += 1;
        out += 1;
    }
    while right < len {
        dst[out] = src[right].clone();
        right += 1;
        out += 1;
    }
}

/// Merge `src[..mid]` and `src[mid..]` into `dst` filling the highest slot
/// first.
///
/// On equal keys the right run wins the back slot, which keeps the left
/// element ahead of it.
fn merge_backward<T, K, F>(dst: &mut [T], src: &[T], mid: usize, key: &mut F)
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let (mut left, mut right, mut out) = (mid, src.len(), src.len());

    while left > 0 && right > mid {
        if key(&src[left - 1]) > key(&src[right - 1]) {
            dst[out - 1] = src[left - 1].clone();
            left -= 1;
        } else {
            dst[out - 1] = src[right - 1].clone();
            right -= 1;
        }
        out -= 1;
    }

    while left > 0 {
        dst[out - 1] = src[left - 1].clone();
        left -= 1;
        out -= 1;
    }
    while right > mid {
        dst[out - 1] = src[right - 1].clone();
        right -= 1;
        out -= 1;
    }
}

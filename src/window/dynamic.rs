use crate::error::{AlgoError, AlgoResult};

/// Length of the shortest contiguous window whose sum is at least `target`.
///
/// Two pointers walk forward only: `right` grows the window one element at
/// a time, and whenever the sum reaches `target` the length is recorded and
/// `left` shrinks the window until the sum drops below `target` again.
///
/// Returns `Ok(None)` when no window qualifies.
///
/// # Errors
/// [`AlgoError::InvalidArgument`] if any element is negative; the shrink
/// step relies on sums growing monotonically with the window.
///
/// # Test Cases
/// - min_length_at_least([2, 3, 1, 2, 4, 3], 7) = Some(2)
/// - min_length_at_least([1, 1, 1], 10) = None
pub fn min_length_at_least(arr: &[i64], target: i64) -> AlgoResult<Option<usize>> {
    if let Some(pos) = arr.iter().position(|&v| v < 0) {
        return Err(AlgoError::invalid(
            "sequence",
            format!("negative element {} at index {}", arr[pos], pos),
        ));
    }

    let target = target as i128;
    let mut best: Option<usize> = None;
    let mut sum: i128 = 0;
    let mut left = 0usize;

    for (right, &value) in arr.iter().enumerate() {
        sum += value as i128;

        while left <= right && sum >= target {
            let len = right - left + 1;
            best = Some(best.map_or(len, |b| b.min(len)));
            sum -= arr[left] as i128;
            left += 1;
        }
    }

    Ok(best)
}

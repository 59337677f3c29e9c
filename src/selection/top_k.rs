//! Top-k most frequent values via bucket sort on counts.

use std::collections::HashMap;

use crate::error::{AlgoError, AlgoResult};

/// The `k` most frequent distinct values of `arr`.
///
/// Counts go into a map, then each distinct value is dropped into the
/// bucket indexed by its count (a value can occur at most `n` times, so
/// `n + 1` buckets suffice). Buckets are walked from the highest count down
/// and the walk stops once `k` values are collected.
///
/// The result is ordered by descending frequency; values sharing a
/// frequency come out in ascending order.
///
/// # Errors
/// [`AlgoError::InvalidArgument`] when `k` is zero or exceeds the number of
/// distinct values.
///
/// # Test Cases
/// - top_k_frequent([1, 1, 1, 2, 2, 3], 2) = [1, 2]
pub fn top_k_frequent(arr: &[i64], k: usize) -> AlgoResult<Vec<i64>> {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for &value in arr {
        *counts.entry(value).or_insert(0) += 1;
    }

    if k == 0 {
        return Err(AlgoError::invalid("k", "must be at least 1"));
    }
    if k > counts.len() {
        return Err(AlgoError::invalid(
            "k",
            format!("{} exceeds the {} distinct values", k, counts.len()),
        ));
    }

    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); arr.len() + 1];
    for (value, count) in counts {
        buckets[count].push(value);
    }

    let mut result = Vec::with_capacity(k);
    for bucket in buckets.iter_mut().rev() {
        if bucket.is_empty() {
            continue;
        }
        bucket.sort_unstable();
        let take = (k - result.len()).min(bucket.len());
        result.extend_from_slice(&bucket[..take]);
        if result.len() == k {
            break;
        }
    }

    Ok(result)
}

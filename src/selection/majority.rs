//! Boyer-Moore majority vote.

/// Single-pass majority candidate.
///
/// Keeps one candidate and a counter: a zero counter adopts the current
/// element, a match increments, a mismatch decrements. The result is the
/// majority element **only if** one exists (more than `n / 2`
/// occurrences); nothing is verified here. `None` for empty input.
///
/// # Test Cases
/// - majority_candidate([2, 2, 1, 1, 1, 2, 2]) = Some(2)
pub fn majority_candidate(arr: &[i64]) -> Option<i64> {
    let mut candidate = None;
    let mut count: usize = 0;

    for &value in arr {
        if count == 0 {
            candidate = Some(value);
            count = 1;
        } else if candidate == Some(value) {
            count += 1;
        } else {
            count -= 1;
        }
    }

    candidate
}

/// Majority element with verification.
///
/// Runs [`majority_candidate`] and confirms with a counting pass that the
/// candidate fills more than half of the positions.
pub fn majority_element(arr: &[i64]) -> Option<i64> {
    let candidate = majority_candidate(arr)?;
    let occurrences = arr.iter().filter(|&&v| v == candidate).count();
    (occurrences > arr.len() / 2).then_some(candidate)
}

use crate::error::{AlgoError, AlgoResult};

/// Maximum sum over every contiguous window of exactly `window` elements.
///
/// The first window is summed directly; each later window adds the
/// entering element and subtracts the one that falls out, so the scan is
/// O(n) regardless of `window`.
///
/// # Errors
/// [`AlgoError::InvalidArgument`] when `window` is zero or longer than `arr`,
/// [`AlgoError::Overflow`] when the best sum does not fit in an `i64`.
///
/// # Test Cases
/// - max_window_sum([2, 1, 5, 1, 3, 2], 3) = 9
pub fn max_window_sum(arr: &[i64], window: usize) -> AlgoResult<i64> {
    if window == 0 {
        return Err(AlgoError::invalid("window", "must be at least 1"));
    }
    if window > arr.len() {
        return Err(AlgoError::invalid(
            "window",
            format!("{} exceeds sequence length {}", window, arr.len()),
        ));
    }

    let mut sum: i128 = arr[..window].iter().map(|&v| v as i128).sum();
    let mut best = sum;

    for right in window..arr.len() {
        sum += arr[right] as i128 - arr[right - window] as i128;
        best = best.max(sum);
    }

    i64::try_from(best).map_err(|_| AlgoError::Overflow {
        operation: "window sum",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_window_sum() {
        assert_eq!(max_window_sum(&[2, 1, 5, 1, 3, 2], 3), Ok(9));
        assert_eq!(max_window_sum(&[2, 3, 4, 1, 5], 2), Ok(7));
    }

    #[test]
    fn test_whole_sequence_window() {
        assert_eq!(max_window_sum(&[1, -2, 3], 3), Ok(2));
    }

    #[test]
    fn test_all_negative() {
        assert_eq!(max_window_sum(&[-5, -1, -3, -4], 1), Ok(-1));
        assert_eq!(max_window_sum(&[-5, -1, -3, -4], 2), Ok(-4));
    }

    #[test]
    fn test_invalid_window() {
        assert!(matches!(
            max_window_sum(&[1, 2, 3], 0),
            Err(AlgoError::InvalidArgument { name: "window", .. })
        ));
        assert!(matches!(
            max_window_sum(&[1, 2, 3], 4),
            Err(AlgoError::InvalidArgument { name: "window", .. })
        ));
        assert!(max_window_sum(&[], 1).is_err());
    }

    #[test]
    fn test_overflowing_sum() {
        assert_eq!(
            max_window_sum(&[i64::MAX, i64::MAX], 2),
            Err(AlgoError::Overflow {
                operation: "window sum"
            })
        );
        // A window below i64::MIN does not matter when it is not the best.
        assert_eq!(max_window_sum(&[i64::MIN, -1, 5], 2), Ok(4));
    }
}

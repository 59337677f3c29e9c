//! Sorting Tests
//!
//! Randomized and adversarial inputs run through every sort routine.
//! Generators are seeded so failures reproduce.

use array_algorithms::sorting::elementary::insertion_sort_by_key;
use array_algorithms::sorting::merge_sort::{merge_sort_by_key, sort_array_by_key};
use array_algorithms::{is_sorted, quick_sort, quick_sort_with_rng, QuickSort, SortAlgorithm};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random vector with values drawn from `-range..=range`.
fn random_vec(rng: &mut ChaCha8Rng, len: usize, range: i64) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(-range..=range)).collect()
}

/// floor(log2 n) + 1 for n >= 1.
fn depth_bound(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

fn run(algorithm: SortAlgorithm, arr: &mut [i64], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    algorithm.run(arr, QuickSort::default(), &mut rng);
}

// ============================================================================
// Correctness
// ============================================================================

#[test]
fn test_all_sorts_match_reference() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for len in [0usize, 1, 2, 3, 15, 16, 17, 33, 100, 257] {
        for range in [1i64, 10, 1_000_000] {
            let input = random_vec(&mut rng, len, range);
            let mut expected = input.clone();
            expected.sort();

            for algorithm in SortAlgorithm::ALL {
                let mut arr = input.clone();
                run(algorithm, &mut arr, len as u64);
                assert_eq!(arr, expected, "{algorithm} len={len} range={range}");
            }
        }
    }
}

#[test]
fn test_extreme_values() {
    let input = vec![i64::MAX, i64::MIN, 0, -1, 1, i64::MAX, i64::MIN];
    let mut expected = input.clone();
    expected.sort();
    for algorithm in SortAlgorithm::ALL {
        let mut arr = input.clone();
        run(algorithm, &mut arr, 3);
        assert_eq!(arr, expected, "{algorithm}");
    }
}

#[test]
fn test_sorting_sorted_input_is_identity() {
    let sorted: Vec<i64> = (-50..50).map(|i| i / 3).collect();
    assert!(is_sorted(&sorted));
    for algorithm in SortAlgorithm::ALL {
        let mut arr = sorted.clone();
        run(algorithm, &mut arr, 8);
        assert_eq!(arr, sorted, "{algorithm}");
        run(algorithm, &mut arr, 9);
        assert_eq!(arr, sorted, "{algorithm} second pass");
    }
}

// ============================================================================
// Stability
// ============================================================================

#[test]
fn test_stable_sorts_keep_tag_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let keys = random_vec(&mut rng, 300, 5);
    // (key, original index)
    let tagged: Vec<(i64, usize)> = keys.iter().copied().zip(0..).collect();

    let mut expected = tagged.clone();
    expected.sort_by_key(|&(k, _)| k); // std sort_by_key is stable

    let mut insertion = tagged.clone();
    insertion_sort_by_key(&mut insertion, |&(k, _)| k);
    assert_eq!(insertion, expected);

    let mut merged = tagged.clone();
    merge_sort_by_key(&mut merged, |&(k, _)| k);
    assert_eq!(merged, expected);

    let mut back_merged = tagged;
    sort_array_by_key(&mut back_merged, |&(k, _)| k);
    assert_eq!(back_merged, expected);
}

// ============================================================================
// Quicksort depth bound
// ============================================================================

fn assert_depth_bounded(mut arr: Vec<i64>, label: &str) {
    let n = arr.len();
    let mut expected = arr.clone();
    expected.sort();

    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    let stats = QuickSort::with_cutoff(1).sort(&mut arr, &mut rng);

    assert_eq!(arr, expected, "{label}");
    assert!(
        stats.max_depth <= depth_bound(n),
        "{label}: depth {} exceeds bound {} for n={}",
        stats.max_depth,
        depth_bound(n),
        n
    );
}

#[test]
fn test_depth_sorted() {
    assert_depth_bounded((0..10_000).collect(), "sorted");
}

#[test]
fn test_depth_reverse_sorted() {
    assert_depth_bounded((0..10_000).rev().collect(), "reverse");
}

#[test]
fn test_depth_all_equal() {
    let n = 10_000;
    let mut arr = vec![42i64; n];
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let stats = quick_sort_with_rng(&mut arr, &mut rng);
    assert_eq!(stats.max_depth, 1);
    assert_eq!(stats.partitions, 1);
}

#[test]
fn test_depth_many_duplicates() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    assert_depth_bounded(random_vec(&mut rng, 10_000, 3), "few distinct");
}

#[test]
fn test_depth_organ_pipe() {
    let arr: Vec<i64> = (0..5_000).chain((0..5_000).rev()).collect();
    assert_depth_bounded(arr, "organ pipe");
}

#[test]
fn test_depth_with_default_cutoff() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let mut arr = random_vec(&mut rng, 50_000, 1_000_000);
    let stats = quick_sort_with_rng(&mut arr, &mut rng);
    assert!(is_sorted(&arr));
    assert!(stats.max_depth <= depth_bound(50_000));
    assert!(stats.insertion_runs > 0);
}

#[test]
fn test_thread_local_rng_sorts() {
    let handles: Vec<_> = (0..4)
        .map(|t| {
            std::thread::spawn(move || {
                let mut arr: Vec<i64> = (0..2_000).map(|i| (i * 37 + t) % 101).collect();
                quick_sort(&mut arr);
                is_sorted(&arr)
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

//! Randomized hybrid quicksort.
//!
//! Three ideas are combined:
//!
//! - **Random pivot**: the pivot index is drawn uniformly from the segment,
//!   so no fixed input ordering can force quadratic behavior.
//! - **3-way partition** (Dutch National Flag): elements equal to the pivot
//!   are gathered in the middle and excluded from further work, which makes
//!   duplicate-heavy inputs linear.
//! - **Bounded stack**: only the smaller side is sorted recursively, the
//!   larger side is handled by the enclosing loop. Every recursive call sees
//!   at most half of its parent's segment, so the depth is O(log n).
//!
//! Segments of `cutoff` elements or fewer are finished with insertion sort.
//!
//! ```rust
//! use array_algorithms::sorting::quick_sort::{QuickSort, quick_sort_with_rng};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let mut values = vec![9, -3, 5, 5, 0, 12, -3];
//! quick_sort_with_rng(&mut values, &mut rng);
//! assert_eq!(values, vec![-3, -3, 0, 5, 5, 9, 12]);
//!
//! let stats = QuickSort::with_cutoff(1).sort(&mut values, &mut rng);
//! assert!(stats.max_depth >= 1);
//! ```

use rand::Rng;
use serde::Serialize;
use std::cmp::Ordering;

/// Segment length at or below which insertion sort takes over.
pub const INSERTION_CUTOFF: usize = 16;

/// Counters collected while sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    /// Deepest level of explicit recursion; the top-level call is depth 1.
    pub max_depth: usize,
    /// Number of 3-way partition passes.
    pub partitions: usize,
    /// Number of segments finished by insertion sort.
    pub insertion_runs: usize,
}

/// Hybrid quicksort with a configurable insertion-sort cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickSort {
    cutoff: usize,
}

impl Default for QuickSort {
    fn default() -> Self {
        Self {
            cutoff: INSERTION_CUTOFF,
        }
    }
}

impl QuickSort {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cutoff of 0 or 1 disables the insertion-sort finish.
    pub fn with_cutoff(cutoff: usize) -> Self {
        Self { cutoff }
    }

    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    /// Sort `arr` ascending in place, drawing pivots from `rng`.
    pub fn sort<R: Rng + ?Sized>(&self, arr: &mut [i64], rng: &mut R) -> SortStats {
        let mut stats = SortStats::default();
        if arr.len() > 1 {
            let hi = arr.len() - 1;
            self.sort_range(arr, 0, hi, rng, 1, &mut stats);
        }
        tracing::trace!(
            len = arr.len(),
            cutoff = self.cutoff,
            max_depth = stats.max_depth,
            partitions = stats.partitions,
            "quicksort finished"
        );
        stats
    }

    /// Sort the inclusive range `[lo, hi]`.
    fn sort_range<R: Rng + ?Sized>(
        &self,
        arr: &mut [i64],
        mut lo: usize,
        mut hi: usize,
        rng: &mut R,
        depth: usize,
        stats: &mut SortStats,
    ) {
        stats.max_depth = stats.max_depth.max(depth);

        while lo < hi {
            if hi - lo + 1 <= self.cutoff {
                insertion_sort_segment(&mut arr[lo..=hi]);
                stats.insertion_runs += 1;
                return;
            }

            let pivot_idx = rng.gen_range(lo..=hi);
            arr.swap(lo, pivot_idx);
            let (lt, gt) = partition3(arr, lo, hi);
            stats.partitions += 1;

            // Left side is [lo, lt - 1], right side is [gt + 1, hi].
            let left_len = lt - lo;
            let right_len = hi - gt;

            if left_len < right_len {
                if left_len > 1 {
                    self.sort_range(arr, lo, lt - 1, rng, depth + 1, stats);
                }
                lo = gt + 1;
            } else {
                if right_len > 1 {
                    self.sort_range(arr, gt + 1, hi, rng, depth + 1, stats);
                }
                if lt == lo {
                    return;
                }
                hi = lt - 1;
            }
        }
    }
}

/// Partition `[lo, hi]` around `arr[lo]`.
///
/// Returns `(lt, gt)` such that `arr[lo..lt] < pivot`,
/// `arr[lt..=gt] == pivot` and `arr[gt + 1..=hi] > pivot`.
fn partition3(arr: &mut [i64], lo: usize, hi: usize) -> (usize, usize) {
    let pivot = arr[lo];
    let mut lt = lo;
    let mut i = lo + 1;
    let mut gt = hi;

    while i <= gt {
        match arr[i].cmp(&pivot) {
            Ordering::Less => {
                arr.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                // The element swapped in from `gt` is unexamined, so `i` stays.
                arr.swap(i, gt);
                gt -= 1;
            }
            Ordering::Equal => i += 1,
        }
    }

    (lt, gt)
}

fn insertion_sort_segment(seg: &mut [i64]) {
    for i in 1..seg.len() {
        let key = seg[i];
        let mut j = i;
        while j > 0 && seg[j - 1] > key {
            seg[j] = seg[j - 1];
            j -= 1;
        }
        seg[j] = key;
    }
}

/// Sort ascending in place using the thread-local generator for pivots.
pub fn quick_sort(arr: &mut [i64]) {
    QuickSort::default().sort(arr, &mut rand::thread_rng());
}

/// Sort ascending in place with an injected generator.
pub fn quick_sort_with_rng<R: Rng + ?Sized>(arr: &mut [i64], rng: &mut R) -> SortStats {
    QuickSort::default().sort(arr, rng)
}

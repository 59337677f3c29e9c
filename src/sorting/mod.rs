//! In-place ascending sorts over `i64` slices.

pub mod elementary;
pub mod merge_sort;
pub mod quick_sort;

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use quick_sort::{QuickSort, SortStats};

/// The sort routines in the catalog, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    #[default]
    Quick,
    Merge,
    SortArray,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Quick,
        SortAlgorithm::Merge,
        SortAlgorithm::SortArray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::SortArray => "sort-array",
        }
    }

    /// Whether equal elements keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            SortAlgorithm::Insertion | SortAlgorithm::Merge | SortAlgorithm::SortArray
        )
    }

    /// Sort `arr` with this algorithm.
    ///
    /// `quick` and `rng` are only consulted by [`SortAlgorithm::Quick`],
    /// which is also the only variant that reports statistics.
    pub fn run<R: Rng + ?Sized>(
        self,
        arr: &mut [i64],
        quick: QuickSort,
        rng: &mut R,
    ) -> Option<SortStats> {
        tracing::debug!(algorithm = self.name(), len = arr.len(), "sorting");
        match self {
            SortAlgorithm::Bubble => elementary::bubble_sort(arr),
            SortAlgorithm::Selection => elementary::selection_sort(arr),
            SortAlgorithm::Insertion => elementary::insertion_sort(arr),
            SortAlgorithm::Quick => return Some(quick.sort(arr, rng)),
            SortAlgorithm::Merge => merge_sort::merge_sort(arr),
            SortAlgorithm::SortArray => merge_sort::sort_array(arr),
        }
        None
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// True when `arr` is in non-decreasing order.
pub fn is_sorted(arr: &[i64]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

//! Array Algorithms - classic routines over integer slices
//!
//! A catalog of self-contained array algorithms. Every routine is a plain
//! function over `&[i64]` or `&mut [i64]`: no shared state, no I/O, and no
//! routine calls another one from the catalog.
//!
//! # Catalog
//!
//! - **Sorting** (in place, ascending): [`bubble_sort`], [`selection_sort`],
//!   [`insertion_sort`], [`quick_sort`] (randomized, 3-way partition,
//!   insertion cutoff, O(log n) stack), [`merge_sort`] and [`sort_array`]
//!   (stable, forward and backward merge)
//! - **Searching**: [`binary_search`] over a sorted slice, returning
//!   [`NOT_FOUND`] on a miss, and [`sorted_binary_search`] for unsorted data
//! - **Windows**: [`max_window_sum`] (fixed size) and
//!   [`min_length_at_least`] (dynamic size)
//! - **Selection**: [`majority_candidate`] (Boyer-Moore vote),
//!   [`majority_element`] (verified) and [`top_k_frequent`] (bucket sort)
//!
//! # Example
//!
//! ```rust
//! use array_algorithms::{binary_search, max_window_sum, quick_sort, top_k_frequent};
//!
//! let mut values = vec![9, 1, 7, 3, 5];
//! quick_sort(&mut values);
//! assert_eq!(values, vec![1, 3, 5, 7, 9]);
//! assert_eq!(binary_search(&values, 7), 3);
//!
//! assert_eq!(max_window_sum(&[2, 1, 5, 1, 3, 2], 3)?, 9);
//! assert_eq!(top_k_frequent(&[1, 1, 1, 2, 2, 3], 2)?, vec![1, 2]);
//! # Ok::<(), array_algorithms::AlgoError>(())
//! ```
//!
//! # Randomness
//!
//! Quicksort draws pivots from any [`rand::Rng`]. [`quick_sort`] uses the
//! thread-local generator; [`quick_sort_with_rng`] takes one explicitly so
//! runs can be reproduced from a seed.

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod searching;
pub mod selection;
pub mod sorting;
pub mod window;

// Re-export commonly used types
pub use config::{AlgoConfig, ConfigError, ConfigResult};
pub use error::{AlgoError, AlgoResult};
pub use searching::{binary_search, lower_bound, sorted_binary_search, NOT_FOUND};
pub use selection::{majority_candidate, majority_element, top_k_frequent};
pub use sorting::elementary::{bubble_sort, insertion_sort, selection_sort};
pub use sorting::merge_sort::{merge_sort, sort_array};
pub use sorting::quick_sort::{quick_sort, quick_sort_with_rng, QuickSort, SortStats};
pub use sorting::{is_sorted, SortAlgorithm};
pub use window::{max_window_sum, min_length_at_least};

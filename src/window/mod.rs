//! Sliding-window scans over contiguous subarrays.
//!
//! Window sums are accumulated in `i128`, so no intermediate step can
//! overflow for any slice that fits in memory.

pub mod dynamic;
pub mod fixed;

pub use dynamic::min_length_at_least;
pub use fixed::max_window_sum;

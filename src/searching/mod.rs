//! Lookup over sorted slices.

pub mod binary_search;

pub use binary_search::{binary_search, lower_bound, sorted_binary_search, NOT_FOUND};

//! Value selection by frequency: majority vote and top-k.

pub mod majority;
pub mod top_k;

pub use majority::{majority_candidate, majority_element};
pub use top_k::top_k_frequent;

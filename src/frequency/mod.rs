//! Frequency counting and top-K selection

mod top_k;

pub use top_k::{Frequency, top_k_frequent, top_k_with_counts};

//! Deterministic linear-time selection.
//!
//! [`select`] finds the k-th smallest element of an unordered slice with the
//! median-of-medians (BFPRT) algorithm, and [`median`] builds odd and even
//! medians on top of it.

pub mod cs;
pub mod error;

pub use cs::sort;
pub use cs::sort::{
    insertion_sort, median, median_value, median_with_config, select, select_with_config,
    Median, SelectConfig,
};
pub use error::{Result, SelectError};

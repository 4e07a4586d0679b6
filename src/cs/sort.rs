pub mod insertion_sort;
pub mod median;
pub mod median_of_medians;

pub use insertion_sort::insertion_sort;
pub use median::{median, median_value, median_with_config, Median};
pub use median_of_medians::{select, select_with_config, SelectConfig};

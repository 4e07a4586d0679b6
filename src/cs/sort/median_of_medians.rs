use log::{debug, trace};

use crate::cs::sort::insertion_sort;
use crate::error::{Result, SelectError};

/// Number of elements per group when computing the medians of medians.
pub const DEFAULT_GROUP_SIZE: usize = 5;

/// Sequences at or below this length are sorted directly.
pub const DEFAULT_BASE_CASE_THRESHOLD: usize = 5;

/// Tuning knobs for the median-of-medians selector.
///
/// The defaults (groups of 5, base case at 5 elements) keep the worst-case
/// linear bound. Smaller groups discard a smaller fraction of the input per
/// pass and can degrade to superlinear time; larger groups cost more to sort.
/// Every valid configuration returns the same answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectConfig {
    /// Length of the groups whose medians feed the pivot selection
    pub group_size: usize,
    /// Largest sequence length handled by insertion sort alone
    pub base_case_threshold: usize,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
            base_case_threshold: DEFAULT_BASE_CASE_THRESHOLD,
        }
    }
}

impl SelectConfig {
    /// Creates a validated configuration.
    pub fn new(group_size: usize, base_case_threshold: usize) -> Result<Self> {
        let config = Self {
            group_size,
            base_case_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that selection with this configuration terminates.
    pub fn validate(&self) -> Result<()> {
        // A group of one is its own median, so the medians never shrink
        if self.group_size < 2 {
            return Err(SelectError::invalid_config(format!(
                "group_size must be at least 2, got {}",
                self.group_size
            )));
        }
        if self.base_case_threshold < 2 {
            return Err(SelectError::invalid_config(format!(
                "base_case_threshold must be at least 2, got {}",
                self.base_case_threshold
            )));
        }
        Ok(())
    }
}

/// Returns the element of rank `k` (zero-based) in the sorted order of `data`,
/// using the deterministic median-of-medians (BFPRT) algorithm.
///
/// `data` is left untouched: the selector works on its own copy, so repeated
/// calls on the same slice (as for the two middle ranks of an even-length
/// median) always see the original sequence.
///
/// # Arguments
/// * `data` - The sequence to select from
/// * `k` - Zero-based rank, `0` is the minimum and `data.len() - 1` the maximum
///
/// # Returns
/// * `Ok(value)` - The value that would sit at index `k` after sorting
/// * `Err(SelectError::EmptyInput)` - If `data` is empty
/// * `Err(SelectError::InvalidRank)` - If `k >= data.len()`
/// * `Err(SelectError::NonComparable)` - If an element cannot be ordered (NaN)
///
/// # Examples
/// ```
/// use momselect::cs::sort::median_of_medians::select;
///
/// let data = [12, 3, 5, 7, 19, 26, 1, 8];
/// assert_eq!(select(&data, 0).unwrap(), 1);
/// assert_eq!(select(&data, 3).unwrap(), 7);
/// assert_eq!(select(&data, 7).unwrap(), 26);
/// assert!(select(&data, 8).is_err());
/// ```
///
/// # Complexity
/// * Time: O(n) worst case
/// * Space: O(n)
pub fn select<T>(data: &[T], k: usize) -> Result<T>
where
    T: PartialOrd + Clone,
{
    select_with_config(data, k, &SelectConfig::default())
}

/// Same as [`select`] with explicit group size and base-case threshold.
///
/// The configuration is validated before the input is looked at.
pub fn select_with_config<T>(data: &[T], k: usize, config: &SelectConfig) -> Result<T>
where
    T: PartialOrd + Clone,
{
    config.validate()?;
    validate_input(data, k)?;

    debug!(
        "Selecting rank {} of {} elements (group size {}, base case {})",
        k,
        data.len(),
        config.group_size,
        config.base_case_threshold
    );

    Ok(select_owned(data.to_vec(), k, config))
}

/// Rejects inputs that have no element at rank `k`, or that contain an
/// element which is not comparable with itself.
fn validate_input<T: PartialOrd>(data: &[T], k: usize) -> Result<()> {
    if data.is_empty() {
        return Err(SelectError::EmptyInput);
    }
    if k >= data.len() {
        return Err(SelectError::InvalidRank {
            rank: k,
            len: data.len(),
        });
    }
    if let Some(index) = data.iter().position(|x| x.partial_cmp(x).is_none()) {
        return Err(SelectError::NonComparable { index });
    }
    Ok(())
}

/// Core selection over an owned sequence. Requires `k < seq.len()`.
///
/// Descending into the lows or highs is a tail call, so it runs as a loop
/// over the working vector; only the pivot search recurses, and its depth is
/// logarithmic in the input length.
fn select_owned<T>(mut seq: Vec<T>, mut k: usize, config: &SelectConfig) -> T
where
    T: PartialOrd + Clone,
{
    loop {
        if seq.len() <= config.base_case_threshold {
            insertion_sort(&mut seq);
            return seq.swap_remove(k);
        }

        let pivot = median_of_medians(&mut seq, config);
        let len = seq.len();
        let (lows, equals, highs) = partition(seq, &pivot);
        debug_assert_eq!(lows.len() + equals.len() + highs.len(), len);

        trace!(
            "Partitioned {} elements: {} low, {} equal, {} high",
            len,
            lows.len(),
            equals.len(),
            highs.len()
        );

        if k < lows.len() {
            seq = lows;
        } else if k < lows.len() + equals.len() {
            return pivot;
        } else {
            k -= lows.len() + equals.len();
            seq = highs;
        }
    }
}

/// Sorts each group of `seq` in place and selects the median of the group
/// medians. A group's median is its element at index `len / 2`.
fn median_of_medians<T>(seq: &mut [T], config: &SelectConfig) -> T
where
    T: PartialOrd + Clone,
{
    let medians: Vec<T> = seq
        .chunks_mut(config.group_size)
        .map(|group| {
            insertion_sort(group);
            group[group.len() / 2].clone()
        })
        .collect();

    let mid = medians.len() / 2;
    select_owned(medians, mid, config)
}

/// Splits `seq` into the elements strictly below, equal to, and strictly
/// above `pivot`. Every element lands in exactly one of the three.
fn partition<T: PartialOrd>(seq: Vec<T>, pivot: &T) -> (Vec<T>, Vec<T>, Vec<T>) {
    let mut lows = Vec::new();
    let mut equals = Vec::new();
    let mut highs = Vec::new();

    for x in seq {
        if x < *pivot {
            lows.push(x);
        } else if x > *pivot {
            highs.push(x);
        } else {
            equals.push(x);
        }
    }

    (lows, equals, highs)
}

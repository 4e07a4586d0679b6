use log::debug;
use num_traits::ToPrimitive;

use crate::cs::sort::median_of_medians::{select_with_config, SelectConfig};
use crate::error::{Result, SelectError};

/// The median of a sequence.
///
/// Odd-length sequences have a single middle value. Even-length sequences
/// have two, at ranks `n/2 - 1` and `n/2`, whose arithmetic mean is the
/// median.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Median<T> {
    Single(T),
    Pair(T, T),
}

impl<T> Median<T> {
    /// The lower middle value (the only one for odd lengths).
    pub fn lower(&self) -> &T {
        match self {
            Median::Single(v) | Median::Pair(v, _) => v,
        }
    }

    /// The upper middle value (the only one for odd lengths).
    pub fn upper(&self) -> &T {
        match self {
            Median::Single(v) | Median::Pair(_, v) => v,
        }
    }
}

impl<T: ToPrimitive> Median<T> {
    /// Numeric value of the median: the middle value, or the mean of the two
    /// middle values. `None` if a value cannot be represented as `f64`.
    pub fn mean(&self) -> Option<f64> {
        match self {
            Median::Single(v) => v.to_f64(),
            Median::Pair(lo, hi) => Some((lo.to_f64()? + hi.to_f64()?) / 2.0),
        }
    }
}

/// Computes the median of `data` with the median-of-medians selector.
///
/// One selection is made for odd lengths and two for even lengths. Each
/// selection runs on its own copy of `data`, so the second never sees the
/// first one's partitioning.
///
/// # Examples
/// ```
/// use momselect::cs::sort::median::{median, Median};
///
/// assert_eq!(median(&[3, 1, 2]).unwrap(), Median::Single(2));
///
/// let even = median(&[7, 2, 9, 4]).unwrap();
/// assert_eq!(even, Median::Pair(4, 7));
/// assert_eq!(even.mean(), Some(5.5));
/// ```
pub fn median<T>(data: &[T]) -> Result<Median<T>>
where
    T: PartialOrd + Clone,
{
    median_with_config(data, &SelectConfig::default())
}

/// Same as [`median`] with an explicit selector configuration.
pub fn median_with_config<T>(data: &[T], config: &SelectConfig) -> Result<Median<T>>
where
    T: PartialOrd + Clone,
{
    let n = data.len();
    if n == 0 {
        return Err(SelectError::EmptyInput);
    }
    debug!("Computing median of {} elements", n);

    if n % 2 == 1 {
        Ok(Median::Single(select_with_config(data, n / 2, config)?))
    } else {
        let lower = select_with_config(data, n / 2 - 1, config)?;
        let upper = select_with_config(data, n / 2, config)?;
        Ok(Median::Pair(lower, upper))
    }
}

/// Computes the numeric median of `data`: the middle value for odd lengths,
/// the mean of the two middle values for even lengths.
///
/// # Examples
/// ```
/// use momselect::cs::sort::median::median_value;
///
/// let data = [12, 3, 5, 7, 19, 26, 1, 8];
/// assert_eq!(median_value(&data).unwrap(), 7.5);
/// ```
pub fn median_value<T>(data: &[T]) -> Result<f64>
where
    T: PartialOrd + Clone + ToPrimitive,
{
    median(data)?.mean().ok_or(SelectError::NotRepresentable)
}

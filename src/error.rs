use thiserror::Error;

/// Errors returned by the selection and median routines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The input sequence has no elements, so no rank is valid.
    #[error("cannot select from an empty sequence")]
    EmptyInput,

    /// The requested rank is outside `0..len`.
    #[error("rank {rank} is out of bounds for a sequence of length {len}")]
    InvalidRank { rank: usize, len: usize },

    /// An element cannot be ordered, not even against itself (e.g. NaN).
    #[error("element at index {index} is not comparable")]
    NonComparable { index: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A median value could not be converted to `f64`.
    #[error("median value has no f64 representation")]
    NotRepresentable,
}

impl SelectError {
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SelectError::InvalidConfig(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SelectError>;

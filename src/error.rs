//! Error type shared by the checked operations of [`RankVec`](crate::RankVec).

use thiserror::Error;

use crate::Rank;

/// Errors raised by rank-checked operations.
///
/// Range operations (`remove_range`, the sorts, `find_in`, ...) never fail: an
/// empty or inverted range is a no-op and `hi` is clamped to the length.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The rank falls outside the interval the operation accepts.
    #[error("rank {rank} out of range for vector of length {len}")]
    OutOfRange { rank: Rank, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

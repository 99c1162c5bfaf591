mod dedup;
mod rank_vec;
mod search;
pub mod sort;

pub use rank_vec::{DEFAULT_CAPACITY, Rank, RankVec};
pub use sort::SortAlgorithm;

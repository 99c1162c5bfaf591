//! Linear and binary search over a [`RankVec`].

use super::rank_vec::{Rank, RankVec};

impl<T: PartialEq> RankVec<T> {
    /// Unordered search over the whole vector. See [`find_in`](Self::find_in).
    pub fn find(&self, e: &T) -> Option<Rank> {
        self.find_in(e, 0, self.len())
    }

    /// Scans `[lo, hi)` from the high end down and returns the rank of the last element
    /// equal to `e`, or `None` if there is none.
    pub fn find_in(&self, e: &T, lo: Rank, hi: Rank) -> Option<Rank> {
        let range = self.clamp_range(lo, hi);
        let start = range.start;
        self.as_slice()[range]
            .iter()
            .rposition(|x| x == e)
            .map(|i| start + i)
    }
}

impl<T: PartialOrd> RankVec<T> {
    /// Predecessor search over the whole vector. See [`search_in`](Self::search_in).
    pub fn search(&self, e: &T) -> Option<Rank> {
        self.search_in(e, 0, self.len())
    }

    /// Binary predecessor search over the ascending range `[lo, hi)`.
    ///
    /// Returns the largest rank `k` in the range with `self[k] <= e`, or `None` when every
    /// element of the range exceeds `e`. Within a run of equal elements the last one is
    /// returned, so membership is `self[k] == *e`.
    ///
    /// The result is unspecified if the range is not sorted.
    pub fn search_in(&self, e: &T, lo: Rank, hi: Rank) -> Option<Rank> {
        let range = self.clamp_range(lo, hi);
        let elements = self.as_slice();
        let (mut lo, mut hi) = (range.start, range.end);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if *e < elements[mid] {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        // `lo` is the first rank whose element exceeds `e`.
        if lo == range.start { None } else { Some(lo - 1) }
    }

    /// Counts adjacent pairs that are out of ascending order. Zero means sorted.
    pub fn disordered(&self) -> usize {
        self.as_slice().windows(2).filter(|w| w[0] > w[1]).count()
    }
}

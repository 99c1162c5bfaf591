//! In-place sorting algorithms.
//!
//! Each algorithm is available both as a free function over `&mut [T]` and as a
//! [`RankVec`] method taking a half-open rank range `[lo, hi)`. The range is clamped to
//! the vector's length, and an empty or inverted range is a no-op.
//!
//! All of them only compare elements through `PartialOrd` (`<`, `<=`, `>`, `>=`).
//!
//! | Algorithm | Time | Stable | Order |
//! |-----------|------|--------|-------|
//! | [`bubble_sort`] | O(n²), O(n) if sorted | yes | ascending |
//! | [`selection_sort`] | O(n²) | no | **descending** |
//! | [`merge_sort`] | O(n log n) | yes | ascending |
//! | [`quick_sort`] | O(n log n) expected | no | ascending |
//! | [`heap_sort`] | O(n log n) | no | ascending |

use core::fmt;
use core::mem;
use core::ptr;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

use super::rank_vec::{Rank, RankVec};

/// Selects one of the sorting algorithms at runtime.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Merge,
    #[default]
    Quick,
    Heap,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Heap => "heap",
        }
    }

    /// Sorts `v` with this algorithm. `rng` is only drawn from by [`SortAlgorithm::Quick`].
    pub fn sort_slice<T: PartialOrd, R: Rng + ?Sized>(self, v: &mut [T], rng: &mut R) {
        match self {
            SortAlgorithm::Bubble => bubble_sort(v),
            SortAlgorithm::Selection => selection_sort(v),
            SortAlgorithm::Merge => merge_sort(v),
            SortAlgorithm::Quick => quick_sort(v, rng),
            SortAlgorithm::Heap => heap_sort(v),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// --- Bubble ---

/// One pass of adjacent swaps. Returns `true` if nothing had to move.
fn bubble<T: PartialOrd>(v: &mut [T]) -> bool {
    let mut sorted = true;
    for i in 1..v.len() {
        if v[i - 1] > v[i] {
            v.swap(i - 1, i);
            sorted = false;
        }
    }
    sorted
}

/// Repeated adjacent-swap passes. Each pass settles the largest remaining element at
/// the end of the unsorted part; the first pass without a swap ends the sort.
pub fn bubble_sort<T: PartialOrd>(v: &mut [T]) {
    let mut hi = v.len();
    while hi > 1 && !bubble(&mut v[..hi]) {
        hi -= 1;
    }
}

// --- Selection ---

/// Rank of the first maximum of `v`, which must be non-empty.
fn max_rank<T: PartialOrd>(v: &[T]) -> usize {
    let mut max = 0;
    for i in 1..v.len() {
        if v[max] < v[i] {
            max = i;
        }
    }
    max
}

/// Swaps the maximum of the remaining suffix into the current leading slot, advancing
/// the slot one step at a time.
///
/// Unlike the other algorithms here this leaves `v` in **non-increasing** order.
pub fn selection_sort<T: PartialOrd>(v: &mut [T]) {
    for i in 0..v.len() {
        let m = i + max_rank(&v[i..]);
        if m != i {
            v.swap(i, m);
        }
    }
}

// --- Merge ---

/// Top-down merge sort. Ties keep their original order.
pub fn merge_sort<T: PartialOrd>(v: &mut [T]) {
    if v.len() < 2 {
        return;
    }
    let mid = v.len() / 2;
    merge_sort(&mut v[..mid]);
    merge_sort(&mut v[mid..]);
    merge(v, mid);
}

/// Left-run elements still parked in the scratch buffer, and the gap they belong in.
///
/// Dropping the hole moves them into place, so `v` holds every element exactly once
/// even if a comparison panics halfway through the merge.
struct MergeHole<T> {
    src: *const T,
    start: usize,
    end: usize,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::copy_nonoverlapping(self.src.add(self.start), self.dest, self.end - self.start);
        }
    }
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]`.
///
/// The left run is moved into a scratch buffer; the right run is read in place, which is
/// safe because the write cursor never overtakes the right read cursor.
fn merge<T: PartialOrd>(v: &mut [T], mid: usize) {
    let len = v.len();
    let base = v.as_mut_ptr();
    let mut left: Vec<T> = Vec::with_capacity(mid);
    unsafe {
        ptr::copy_nonoverlapping(base, left.as_mut_ptr(), mid);
        let mut hole = MergeHole {
            src: left.as_ptr(),
            start: 0,
            end: mid,
            dest: base,
        };
        let mut right = mid;
        while hole.start < hole.end && right < len {
            let take_left = *hole.src.add(hole.start) <= *base.add(right);
            let from = if take_left {
                hole.src.add(hole.start)
            } else {
                base.add(right)
            };
            ptr::copy_nonoverlapping(from, hole.dest, 1);
            if take_left {
                hole.start += 1;
            } else {
                right += 1;
            }
            hole.dest = hole.dest.add(1);
        }
    }
}

// --- Quick ---

/// Partitions `v` (len >= 2) around a uniformly chosen pivot and returns its final rank.
///
/// The pivot is swapped to the front and then rides in the "hole", which alternates
/// between the two cursors: the right cursor skips elements `>= pivot`, the left cursor
/// skips elements `<= pivot`, and each stray element is swapped across the pivot.
fn partition<T: PartialOrd, R: Rng + ?Sized>(v: &mut [T], rng: &mut R) -> usize {
    let (mut lo, mut hi) = (0, v.len());
    let pivot = rng.gen_range(0..hi);
    v.swap(0, pivot);
    while lo < hi {
        // pivot at `lo`
        while lo < hi {
            hi -= 1;
            if v[hi] < v[lo] {
                break;
            }
        }
        if lo < hi {
            v.swap(lo, hi);
        }
        // pivot at `hi`
        while lo < hi {
            lo += 1;
            if v[lo] > v[hi] {
                break;
            }
        }
        if lo < hi {
            v.swap(lo, hi);
        }
    }
    lo
}

/// Quick sort with a random pivot drawn from `rng`.
///
/// Recurses into the shorter side and loops on the longer one, so the stack depth stays
/// logarithmic whatever pivots are drawn.
pub fn quick_sort<T: PartialOrd, R: Rng + ?Sized>(v: &mut [T], rng: &mut R) {
    let mut v = v;
    while v.len() >= 2 {
        let mid = partition(v, rng);
        let (left, right) = mem::take(&mut v).split_at_mut(mid);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left, rng);
            v = right;
        } else {
            quick_sort(right, rng);
            v = left;
        }
    }
}

// --- Heap ---

fn sift_down<T: PartialOrd>(v: &mut [T], mut node: usize, end: usize) {
    loop {
        let mut child = 2 * node + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && v[child] < v[child + 1] {
            child += 1;
        }
        if v[node] >= v[child] {
            break;
        }
        v.swap(node, child);
        node = child;
    }
}

/// Builds a max-heap over `v`, then repeatedly swaps the root into the shrinking tail.
pub fn heap_sort<T: PartialOrd>(v: &mut [T]) {
    let len = v.len();
    for node in (0..len / 2).rev() {
        sift_down(v, node, len);
    }
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(v, 0, end);
    }
}

// --- RankVec surface ---

impl<T: PartialOrd> RankVec<T> {
    pub fn bubble_sort(&mut self, lo: Rank, hi: Rank) {
        let range = self.clamp_range(lo, hi);
        bubble_sort(&mut self.as_mut_slice()[range]);
    }

    /// Selection sort over `[lo, hi)`. Leaves the range in **non-increasing** order.
    pub fn selection_sort(&mut self, lo: Rank, hi: Rank) {
        let range = self.clamp_range(lo, hi);
        selection_sort(&mut self.as_mut_slice()[range]);
    }

    pub fn merge_sort(&mut self, lo: Rank, hi: Rank) {
        let range = self.clamp_range(lo, hi);
        merge_sort(&mut self.as_mut_slice()[range]);
    }

    /// Quick sort over `[lo, hi)` with pivots drawn from the thread-local RNG.
    pub fn quick_sort(&mut self, lo: Rank, hi: Rank) {
        self.quick_sort_with(lo, hi, &mut rand::thread_rng());
    }

    /// Quick sort over `[lo, hi)` with pivots drawn from `rng`.
    pub fn quick_sort_with<R: Rng + ?Sized>(&mut self, lo: Rank, hi: Rank, rng: &mut R) {
        let range = self.clamp_range(lo, hi);
        quick_sort(&mut self.as_mut_slice()[range], rng);
    }

    pub fn heap_sort(&mut self, lo: Rank, hi: Rank) {
        let range = self.clamp_range(lo, hi);
        heap_sort(&mut self.as_mut_slice()[range]);
    }

    /// Sorts the whole vector ascending with the default algorithm (quick sort).
    pub fn sort(&mut self) {
        self.sort_range(0, self.len());
    }

    /// Sorts `[lo, hi)` ascending with the default algorithm (quick sort).
    pub fn sort_range(&mut self, lo: Rank, hi: Rank) {
        self.quick_sort(lo, hi);
    }

    pub fn sort_by_algorithm(&mut self, algorithm: SortAlgorithm, lo: Rank, hi: Rank) {
        self.sort_by_algorithm_with(algorithm, lo, hi, &mut rand::thread_rng());
    }

    pub fn sort_by_algorithm_with<R: Rng + ?Sized>(
        &mut self,
        algorithm: SortAlgorithm,
        lo: Rank,
        hi: Rank,
        rng: &mut R,
    ) {
        let range = self.clamp_range(lo, hi);
        trace!(%algorithm, lo = range.start, hi = range.end, "sort");
        algorithm.sort_slice(&mut self.as_mut_slice()[range], rng);
    }
}

impl<T> RankVec<T> {
    /// Uniformly permutes the whole vector.
    pub fn shuffle(&mut self) {
        self.shuffle_range(0, self.len());
    }

    /// Uniformly permutes `[lo, hi)` using the thread-local RNG.
    pub fn shuffle_range(&mut self, lo: Rank, hi: Rank) {
        self.shuffle_range_with(lo, hi, &mut rand::thread_rng());
    }

    /// Uniformly permutes `[lo, hi)` using `rng`.
    pub fn shuffle_range_with<R: Rng + ?Sized>(&mut self, lo: Rank, hi: Rank, rng: &mut R) {
        let range = self.clamp_range(lo, hi);
        self.as_mut_slice()[range].shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::Cell;

    fn is_non_decreasing<T: PartialOrd>(v: &[T]) -> bool {
        v.windows(2).all(|w| w[0] <= w[1])
    }

    fn is_non_increasing<T: PartialOrd>(v: &[T]) -> bool {
        v.windows(2).all(|w| w[0] >= w[1])
    }

    fn sorted_copy(v: &[i32]) -> Vec<i32> {
        let mut copy = v.to_vec();
        copy.sort();
        copy
    }

    fn random_inputs(rng: &mut StdRng) -> Vec<Vec<i32>> {
        let mut inputs = vec![
            vec![],
            vec![1],
            vec![2, 1],
            vec![5, 3, 8, 3, 1],
            vec![7; 9],
            (0..50).collect(),
            (0..50).rev().collect(),
        ];
        for _ in 0..40 {
            let len = rng.gen_range(0..120);
            let spread = rng.gen_range(1..60);
            inputs.push((0..len).map(|_| rng.gen_range(0..spread)).collect());
        }
        inputs
    }

    #[test]
    fn test_sort_all_algorithms_ascending_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for input in random_inputs(&mut rng) {
            for algorithm in SortAlgorithm::ALL {
                let mut v = input.clone();
                algorithm.sort_slice(&mut v, &mut rng);
                let mut expected = sorted_copy(&input);
                if algorithm == SortAlgorithm::Selection {
                    assert!(is_non_increasing(&v), "{algorithm}: {v:?}");
                    expected.reverse();
                } else {
                    assert!(is_non_decreasing(&v), "{algorithm}: {v:?}");
                }
                assert_eq!(v, expected, "{algorithm} on {input:?}");
            }
        }
    }

    #[test]
    fn test_selection_sort_is_descending() {
        let mut v = RankVec::from_slice(&[5, 3, 8, 3, 1]);
        v.selection_sort(0, 5);
        assert_eq!(v.as_slice(), &[8, 5, 3, 3, 1]);
    }

    #[test]
    fn test_merge_sort_example() {
        let mut v = RankVec::from_slice(&[5, 3, 8, 3, 1]);
        v.merge_sort(0, v.len());
        assert_eq!(v.as_slice(), &[1, 3, 3, 5, 8]);
    }

    #[test]
    fn test_merge_sort_is_stable() {
        #[derive(Debug, Clone, Copy)]
        struct Keyed(u8, usize);
        impl PartialEq for Keyed {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let mut rng = StdRng::seed_from_u64(7);
        let mut v: Vec<Keyed> = (0..200).map(|i| Keyed(rng.gen_range(0..8), i)).collect();
        merge_sort(&mut v);
        for w in v.windows(2) {
            assert!(w[0].0 < w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1));
        }

        let mut v: Vec<Keyed> = (0..200).map(|i| Keyed(rng.gen_range(0..8), i)).collect();
        bubble_sort(&mut v);
        for w in v.windows(2) {
            assert!(w[0].0 < w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1));
        }
    }

    #[test]
    fn test_sort_subrange_leaves_outside_untouched() {
        let mut rng = StdRng::seed_from_u64(3);
        for algorithm in SortAlgorithm::ALL {
            let mut v = RankVec::from_slice(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
            v.sort_by_algorithm_with(algorithm, 2, 7, &mut rng);
            assert_eq!(&v[..2], &[9, 8]);
            assert_eq!(&v[7..], &[2, 1, 0]);
            if algorithm == SortAlgorithm::Selection {
                assert_eq!(&v[2..7], &[7, 6, 5, 4, 3]);
            } else {
                assert_eq!(&v[2..7], &[3, 4, 5, 6, 7]);
            }
        }
    }

    #[test]
    fn test_sort_range_clamps() {
        let mut v = RankVec::from_slice(&[3, 1, 2]);
        v.heap_sort(2, 1);
        assert_eq!(v.as_slice(), &[3, 1, 2]);
        v.bubble_sort(1, 100);
        assert_eq!(v.as_slice(), &[3, 1, 2]);
        v.sort_range(0, 100);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_sort_default_is_quick_sort() {
        assert_eq!(SortAlgorithm::default(), SortAlgorithm::Quick);
        let mut v: RankVec<i32> = (0..500).rev().collect();
        v.sort();
        assert_eq!(v.disordered(), 0);
        assert_eq!(v.len(), 500);
    }

    #[test]
    fn test_quick_sort_is_deterministic_with_seeded_rng() {
        let input: Vec<i32> = (0..64).map(|i| (i * 37) % 64).collect();
        let mut a = RankVec::from_slice(&input);
        let mut b = RankVec::from_slice(&input);
        a.quick_sort_with(0, 64, &mut StdRng::seed_from_u64(1));
        b.quick_sort_with(0, 64, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
        assert_eq!(a.as_slice(), sorted_copy(&input).as_slice());
    }

    #[test]
    fn test_bubble_sort_sorted_input_single_pass() {
        #[derive(PartialEq)]
        struct Counted<'a>(i32, &'a Cell<usize>);
        impl PartialOrd for Counted<'_> {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.1.set(self.1.get() + 1);
                self.0.partial_cmp(&other.0)
            }
        }

        let comparisons = Cell::new(0);
        let mut v: Vec<Counted<'_>> = (0..100).map(|i| Counted(i, &comparisons)).collect();
        bubble_sort(&mut v);
        assert_eq!(comparisons.get(), 99);
    }

    #[test]
    fn test_merge_survives_panicking_comparison() {
        use std::panic::{AssertUnwindSafe, catch_unwind};
        use std::rc::Rc;

        #[derive(Debug)]
        struct Fragile(i32, Rc<Cell<usize>>);
        impl PartialEq for Fragile {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl PartialOrd for Fragile {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                if self.0 == 13 || other.0 == 13 {
                    panic!("unlucky");
                }
                self.0.partial_cmp(&other.0)
            }
        }

        let drops = Rc::new(Cell::new(0));
        impl Drop for Fragile {
            fn drop(&mut self) {
                self.1.set(self.1.get() + 1);
            }
        }

        let mut v: Vec<Fragile> = [20, 5, 13, 2, 8, 1, 30, 4]
            .into_iter()
            .map(|x| Fragile(x, drops.clone()))
            .collect();
        let result = catch_unwind(AssertUnwindSafe(|| merge_sort(&mut v)));
        assert!(result.is_err());
        let mut values: Vec<i32> = v.iter().map(|f| f.0).collect();
        values.sort();
        assert_eq!(values, vec![1, 2, 4, 5, 8, 13, 20, 30]);
        drop(v);
        assert_eq!(drops.get(), 8);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut v: RankVec<i32> = (0..100).collect();
        v.shuffle_range_with(10, 90, &mut rng);
        assert_eq!(&v[..10], (0..10).collect::<Vec<_>>().as_slice());
        assert_eq!(&v[90..], (90..100).collect::<Vec<_>>().as_slice());
        assert!(v.disordered() > 0);
        let mut values = v.clone().into_vec();
        values.sort();
        assert_eq!(values, (0..100).collect::<Vec<_>>());

        v.shuffle();
        v.sort();
        assert_eq!(v.disordered(), 0);
    }

    #[test]
    fn test_sort_algorithm_display() {
        let names: Vec<String> = SortAlgorithm::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(names, ["bubble", "selection", "merge", "quick", "heap"]);
    }
}

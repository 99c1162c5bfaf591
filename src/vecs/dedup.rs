//! Deduplication and visitor traversal.

use tracing::debug;

use super::rank_vec::RankVec;

impl<T: PartialEq> RankVec<T> {
    /// Removes every element that has an equal element earlier in the vector, keeping
    /// first occurrences in their original order. Returns the number removed.
    ///
    /// Works on unordered data at O(n²) cost; each removal may shrink the buffer.
    pub fn deduplicate(&mut self) -> usize {
        let old_len = self.len();
        let mut i = 1;
        while i < self.len() {
            if self.find_in(&self[i], 0, i).is_some() {
                self.remove_at(i);
            } else {
                i += 1;
            }
        }
        let removed = old_len - self.len();
        debug!(removed, "deduplicate");
        removed
    }

    /// Collapses each run of equal adjacent elements to its first element in a single
    /// pass. On a sorted vector this leaves only distinct values. Returns the number
    /// removed.
    pub fn uniquify(&mut self) -> usize {
        let len = self.len();
        if len < 2 {
            return 0;
        }
        let elements = self.as_mut_slice();
        let mut i = 0;
        for j in 1..len {
            if elements[i] != elements[j] {
                i += 1;
                elements.swap(i, j);
            }
        }
        self.truncate(i + 1);
        self.shrink();
        let removed = len - i - 1;
        debug!(removed, "uniquify");
        removed
    }
}

impl<T> RankVec<T> {
    /// Calls `visit` on every element in ascending rank order.
    pub fn traverse(&mut self, visit: fn(&mut T)) {
        for element in self.as_mut_slice() {
            visit(element);
        }
    }

    /// Calls `visit` on every element in ascending rank order. The closure may carry
    /// state across the whole traversal.
    pub fn traverse_with<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut T),
    {
        for element in self.as_mut_slice() {
            visit(element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_deduplicate_keeps_first_occurrences() {
        let mut v = RankVec::from_slice(&[5, 3, 8, 3, 1, 5, 5]);
        assert_eq!(v.deduplicate(), 3);
        assert_eq!(v.as_slice(), &[5, 3, 8, 1]);
    }

    #[test]
    fn test_deduplicate_small_and_distinct() {
        let mut empty: RankVec<i32> = RankVec::new();
        assert_eq!(empty.deduplicate(), 0);
        let mut v = RankVec::from_slice(&[1, 2, 3]);
        assert_eq!(v.deduplicate(), 0);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_deduplicate_shrinks_buffer() {
        let mut v = RankVec::from_elem(64, 64, 'z');
        assert_eq!(v.deduplicate(), 63);
        assert_eq!(v.as_slice(), &['z']);
        assert!(v.capacity() <= 6);
    }

    #[test]
    fn test_uniquify_example() {
        let mut v = RankVec::from_slice(&[5, 3, 8, 3, 1]);
        v.merge_sort(0, v.len());
        assert_eq!(v.as_slice(), &[1, 3, 3, 5, 8]);
        assert_eq!(v.uniquify(), 1);
        assert_eq!(v.as_slice(), &[1, 3, 5, 8]);
    }

    #[test]
    fn test_uniquify_removes_len_minus_distinct() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..100 {
            let len = rng.gen_range(0..80);
            let mut values: Vec<u8> = (0..len).map(|_| rng.gen_range(0..12)).collect();
            values.sort();
            let distinct = values.iter().collect::<HashSet<_>>().len();

            let mut v = RankVec::from_slice(&values);
            assert_eq!(v.uniquify(), values.len() - distinct);
            assert_eq!(v.len(), distinct);
            assert!(v.windows(2).all(|w| w[0] != w[1]));
            assert!(v.len() <= v.capacity());

            values.dedup();
            assert_eq!(v.as_slice(), values.as_slice());
        }
    }

    #[test]
    fn test_uniquify_drops_removed_elements() {
        let mut v = RankVec::from_slice(&["a", "a", "b", "b", "b", "c"].map(String::from));
        assert_eq!(v.uniquify(), 3);
        assert_eq!(v.as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn test_traverse_with_function() {
        fn double(x: &mut i32) {
            *x *= 2;
        }
        let mut v = RankVec::from_slice(&[1, 2, 3]);
        v.traverse(double);
        assert_eq!(v.as_slice(), &[2, 4, 6]);
    }

    #[test]
    fn test_traverse_with_stateful_closure() {
        let mut v = RankVec::from_slice(&[4, 1, 3]);
        let mut seen = Vec::new();
        let mut total = 0;
        v.traverse_with(|x| {
            seen.push(*x);
            total += *x;
            *x = total;
        });
        assert_eq!(seen, vec![4, 1, 3]);
        assert_eq!(total, 8);
        assert_eq!(v.as_slice(), &[4, 5, 8]);
    }
}

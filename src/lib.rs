//! # Ranked Vec
//!
//! A rank-addressed vector, [`RankVec`], that manages its own backing buffer and carries
//! a toolkit of classic in-place algorithms over it.
//!
//! ## Key Features
//!
//! * **Explicit capacity policy:** the buffer doubles when an insert finds it full and
//!   halves once a removal leaves it at most a quarter full (never below
//!   [`DEFAULT_CAPACITY`]).
//! * **Checked ranks:** [`RankVec::at`], [`RankVec::insert`] and [`RankVec::remove`]
//!   report [`Error::OutOfRange`] instead of panicking. Range operations clamp instead.
//! * **Search:** last-match linear search ([`RankVec::find`]) and binary predecessor
//!   search over sorted data ([`RankVec::search`]).
//! * **Five sorts:** bubble, selection, merge, quick (random pivot) and heap, over any
//!   `[lo, hi)` range; see [`sort`] for their trade-offs.
//! * **Dedup and traversal:** [`RankVec::deduplicate`], [`RankVec::uniquify`],
//!   [`RankVec::traverse`] and [`RankVec::traverse_with`].
//!
//! Elements only need `PartialOrd` (and therefore `PartialEq`); copying operations also
//! need `Clone`.
//!
//! ## Examples
//!
//! ### Sorting and uniquifying
//!
//! ```rust
//! use ranked_vec::RankVec;
//!
//! let mut v = RankVec::from_slice(&[5, 3, 8, 3, 1]);
//! assert_eq!(v.find(&3), Some(3));
//!
//! v.merge_sort(0, v.len());
//! assert_eq!(v.as_slice(), &[1, 3, 3, 5, 8]);
//!
//! assert_eq!(v.uniquify(), 1);
//! assert_eq!(v.as_slice(), &[1, 3, 5, 8]);
//! ```
//!
//! ### Insert and remove
//!
//! ```rust
//! use ranked_vec::{Error, RankVec};
//!
//! let mut v = RankVec::from_slice(&[1, 3, 5, 8]);
//! v.insert(2, 99)?;
//! assert_eq!(v.as_slice(), &[1, 3, 99, 5, 8]);
//!
//! assert_eq!(v.remove_range(1, 3), 2);
//! assert_eq!(v.as_slice(), &[1, 5, 8]);
//!
//! assert_eq!(v.remove(3), Err(Error::OutOfRange { rank: 3, len: 3 }));
//! # Ok::<(), Error>(())
//! ```
//!
//! ### Predecessor search
//!
//! ```rust
//! use ranked_vec::RankVec;
//!
//! let v = RankVec::from_slice(&[10, 20, 20, 30]);
//! assert_eq!(v.search(&25), Some(2));
//! assert_eq!(v.search(&20), Some(2));
//! assert_eq!(v.search(&5), None);
//! ```
//!
//! ### Deterministic quick sort
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use ranked_vec::RankVec;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut v: RankVec<i32> = (0..100).rev().collect();
//! v.shuffle_range_with(0, 100, &mut rng);
//! v.quick_sort_with(0, 100, &mut rng);
//! assert_eq!(v.disordered(), 0);
//! ```

// --- Module Declarations ---

#[cfg(feature = "complex")]
pub mod complex;
mod error;
pub mod vecs;

// --- Re-exports ---

#[cfg(feature = "complex")]
pub use complex::Complex;
pub use error::{Error, Result};
pub use vecs::sort;
pub use vecs::{DEFAULT_CAPACITY, Rank, RankVec, SortAlgorithm};

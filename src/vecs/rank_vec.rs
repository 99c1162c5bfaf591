//! Rank-addressed vector that manages its own backing buffer.
//!
//! Provides [`RankVec`], which stores its elements in a `Box<[MaybeUninit<T>]>` whose length is
//! the capacity, and resizes that buffer by hand: it doubles when an insert finds it full
//! and halves after a removal leaves it at most a quarter full. Because it `Deref`s to
//! `[T]`, the read-only slice methods are available without conversion.
//!
//! The search, sort and dedup toolkits live in sibling modules as further `impl` blocks.

use core::fmt;
use core::mem::{ManuallyDrop, MaybeUninit};
use core::ops::{Deref, Index, IndexMut, Range};
use core::ptr;
use core::slice;
use core::slice::SliceIndex;

use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Zero-based position of an element.
pub type Rank = usize;

/// Capacity of a freshly created vector, and the floor below which it never shrinks.
pub const DEFAULT_CAPACITY: usize = 3;

#[inline]
fn alloc_buffer<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    Box::new_uninit_slice(capacity)
}

/// A growable sequence with an explicit capacity policy.
///
/// # Capacity policy
/// * **Growth:** an insert into a full buffer first reallocates it at twice the size
///   (an empty, zero-slot buffer grows to [`DEFAULT_CAPACITY`]).
/// * **Shrink:** after every removal, a buffer of at least `2 * DEFAULT_CAPACITY` slots
///   that is at most 25% full is reallocated at half the size.
/// * **Copies:** range copies and clones get exactly twice the copied length.
///
/// The capacity itself is not part of the public API.
///
/// # Safety Invariants
/// * `len <= buf.len()`.
/// * Slots `[0, len)` are initialised; slots `[len, buf.len())` are not.
pub struct RankVec<T> {
    len: usize,
    buf: Box<[MaybeUninit<T>]>,
}

impl<T> RankVec<T> {
    /// Creates an empty vector with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            len: 0,
            buf: alloc_buffer(DEFAULT_CAPACITY),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        self.buf.as_ptr() as *const T
    }

    #[inline(always)]
    fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr() as *mut T
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline(always)]
    pub fn get(&self, rank: Rank) -> Option<&T> {
        self.as_slice().get(rank)
    }

    #[inline(always)]
    pub fn get_mut(&mut self, rank: Rank) -> Option<&mut T> {
        self.as_mut_slice().get_mut(rank)
    }

    /// Checked read access: `Error::OutOfRange` unless `rank < len`.
    pub fn at(&self, rank: Rank) -> Result<&T> {
        let len = self.len;
        self.get(rank).ok_or(Error::OutOfRange { rank, len })
    }

    /// Checked write access: `Error::OutOfRange` unless `rank < len`.
    pub fn at_mut(&mut self, rank: Rank) -> Result<&mut T> {
        let len = self.len;
        self.get_mut(rank).ok_or(Error::OutOfRange { rank, len })
    }

    /// Clamps `[lo, hi)` to the live elements. An inverted range comes back empty.
    #[inline]
    pub(crate) fn clamp_range(&self, lo: Rank, hi: Rank) -> Range<Rank> {
        let hi = hi.min(self.len);
        lo.min(hi)..hi
    }

    /// Inserts `element` at `rank`, shifting `[rank, len)` one slot to the right.
    ///
    /// Valid for `rank <= len`; inserting at `len` appends. Returns `rank`.
    pub fn insert(&mut self, rank: Rank, element: T) -> Result<Rank> {
        if rank > self.len {
            return Err(Error::OutOfRange {
                rank,
                len: self.len,
            });
        }
        self.expand();
        unsafe {
            let ptr = self.as_mut_ptr().add(rank);
            ptr::copy(ptr, ptr.add(1), self.len - rank);
            ptr::write(ptr, element);
        }
        self.len += 1;
        Ok(rank)
    }

    /// Appends `element` and returns its rank.
    pub fn push(&mut self, element: T) -> Rank {
        let rank = self.len;
        self.expand();
        unsafe {
            ptr::write(self.as_mut_ptr().add(rank), element);
        }
        self.len += 1;
        rank
    }

    /// Removes and returns the element at `rank`, shifting the tail left.
    pub fn remove(&mut self, rank: Rank) -> Result<T> {
        if rank >= self.len {
            return Err(Error::OutOfRange {
                rank,
                len: self.len,
            });
        }
        Ok(self.remove_at(rank))
    }

    pub(crate) fn remove_at(&mut self, rank: Rank) -> T {
        debug_assert!(rank < self.len);
        let value = unsafe {
            let ptr = self.as_mut_ptr().add(rank);
            let value = ptr::read(ptr);
            ptr::copy(ptr.add(1), ptr, self.len - rank - 1);
            value
        };
        self.len -= 1;
        self.shrink();
        value
    }

    /// Removes the elements in `[lo, hi)` and returns how many were removed.
    ///
    /// `hi` is clamped to `len`; an empty or inverted range removes nothing and returns 0.
    pub fn remove_range(&mut self, lo: Rank, hi: Rank) -> usize {
        let Range { start: lo, end: hi } = self.clamp_range(lo, hi);
        if lo == hi {
            return 0;
        }
        let removed = hi - lo;
        let tail = self.len - hi;
        unsafe {
            let base = self.as_mut_ptr();
            // A panicking destructor leaks the tail instead of exposing dropped slots.
            self.len = lo;
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(lo), removed));
            ptr::copy(base.add(hi), base.add(lo), tail);
        }
        self.len = lo + tail;
        debug!(lo, hi, removed, "removed range");
        self.shrink();
        removed
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        if len < self.len {
            let dropped = self.len - len;
            self.len = len;
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                    self.as_mut_ptr().add(len),
                    dropped,
                ));
            }
        }
    }

    /// Moves the elements into a `std::vec::Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut this = ManuallyDrop::new(self);
        let len = this.len;
        let mut vec = Vec::with_capacity(len);
        unsafe {
            ptr::copy_nonoverlapping(this.as_ptr(), vec.as_mut_ptr(), len);
            vec.set_len(len);
            // Frees the buffer; `MaybeUninit` slots carry no drop glue.
            ptr::drop_in_place(&mut this.buf);
        }
        vec
    }

    /// Doubles the buffer when it is full.
    fn expand(&mut self) {
        if self.len < self.capacity() {
            return;
        }
        let capacity = match self.capacity() {
            0 => DEFAULT_CAPACITY,
            c => c << 1,
        };
        trace!(from = self.capacity(), to = capacity, "expand");
        self.reallocate(capacity);
    }

    /// Halves the buffer when the load factor has dropped to 25% or less.
    pub(crate) fn shrink(&mut self) {
        if self.capacity() < DEFAULT_CAPACITY << 1 {
            return;
        }
        if self.len << 2 > self.capacity() {
            return;
        }
        let capacity = self.capacity() >> 1;
        trace!(from = self.capacity(), to = capacity, "shrink");
        self.reallocate(capacity);
    }

    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        let mut buf = alloc_buffer::<T>(capacity);
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr(), buf.as_mut_ptr() as *mut T, self.len);
        }
        self.buf = buf;
    }
}

impl<T: Clone> RankVec<T> {
    /// Creates a vector holding `len` clones of `value` in `max(capacity, len)` slots.
    pub fn from_elem(capacity: usize, len: usize, value: T) -> Self {
        let mut vec = Self {
            len: 0,
            buf: alloc_buffer(capacity.max(len)),
        };
        for _ in 0..len {
            unsafe {
                ptr::write(vec.as_mut_ptr().add(vec.len), value.clone());
            }
            vec.len += 1;
        }
        vec
    }

    /// Creates a vector holding a copy of `source`, with `2 * source.len()` slots.
    pub fn from_slice(source: &[T]) -> Self {
        Self::copy_from(source)
    }

    /// Copies `[lo, hi)` of this vector into a new one. The range is clamped like
    /// [`remove_range`](Self::remove_range).
    pub fn copy_range(&self, lo: Rank, hi: Rank) -> Self {
        Self::copy_from(&self.as_slice()[self.clamp_range(lo, hi)])
    }

    fn copy_from(source: &[T]) -> Self {
        let mut vec = Self {
            len: 0,
            buf: alloc_buffer(source.len() * 2),
        };
        for item in source {
            // `len` tracks the written prefix so a panicking `clone` drops only those.
            unsafe {
                ptr::write(vec.as_mut_ptr().add(vec.len), item.clone());
            }
            vec.len += 1;
        }
        trace!(len = vec.len, capacity = vec.capacity(), "copy");
        vec
    }
}

impl<T> Drop for RankVec<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), self.len));
        }
    }
}

impl<T: Clone> Clone for RankVec<T> {
    fn clone(&self) -> Self {
        Self::copy_from(self.as_slice())
    }

    /// Assignment: the old buffer is released and replaced by a fresh copy of `source`.
    fn clone_from(&mut self, source: &Self) {
        *self = Self::copy_from(source.as_slice());
    }
}

impl<T> Default for RankVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RankVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T: PartialEq> PartialEq for RankVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for RankVec<T> {}

impl<T> Deref for RankVec<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for RankVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for RankVec<T> {
    type Output = I::Output;
    #[inline(always)]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for RankVec<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> Extend<T> for RankVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for RankVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = RankVec::new();
        vec.extend(iter);
        vec
    }
}

impl<T> From<Vec<T>> for RankVec<T> {
    /// Moves the elements out of `vec` into a buffer of `2 * vec.len()` slots.
    fn from(mut vec: Vec<T>) -> Self {
        let len = vec.len();
        let mut buf = alloc_buffer::<T>(len * 2);
        unsafe {
            ptr::copy_nonoverlapping(vec.as_ptr(), buf.as_mut_ptr() as *mut T, len);
            vec.set_len(0);
        }
        Self { len, buf }
    }
}

impl<T: Clone> From<&[T]> for RankVec<T> {
    fn from(source: &[T]) -> Self {
        Self::copy_from(source)
    }
}

impl<T> IntoIterator for RankVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a RankVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use alloc::boxed::Box;
use core::mem;
use core::ops::{Index, IndexMut};
use core::sync::atomic::{AtomicU64, Ordering};

use crate::cursor::{Access, ConstCursor, Cursor, MutCursor};
use crate::error::DynVecError;
use crate::iter::{DynVecIter, DynVecIterMut};

/// Capacity of a freshly constructed `DynVec`.
pub const MIN_START_CAPACITY: usize = 5;

/// A growable array that owns a contiguous buffer of `capacity` slots,
/// of which the first `len` are live.
///
/// Slots in `[len, capacity)` hold default-constructed or retired values and
/// are never exposed.
pub struct DynVec<T> {
    buffer: Box<[T]>,
    len: usize,
    generation: u64,
}

// Each vector starts its generations at its own base, so cursors from another
// vector (or from the contents an assignment replaced) are seen as stale.
const GENERATION_STRIDE: u64 = 1 << 32;
static NEXT_GENERATION_BASE: AtomicU64 = AtomicU64::new(0);

fn fresh_generation() -> u64 {
    NEXT_GENERATION_BASE.fetch_add(GENERATION_STRIDE, Ordering::Relaxed)
}

fn allocate<T: Default>(capacity: usize) -> Box<[T]> {
    core::iter::repeat_with(T::default).take(capacity).collect()
}

impl<T> DynVec<T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forgets all live elements. The buffer is kept for reuse.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn check_bounds(&self, index: usize) -> Result<(), DynVecError> {
        if index >= self.len {
            Err(DynVecError::IndexOutOfRange {
                index,
                length: self.len,
            })
        } else {
            Ok(())
        }
    }

    fn check_cursor<A: Access>(&self, pos: &Cursor<A>) -> Result<(), DynVecError> {
        if pos.generation() == self.generation {
            Ok(())
        } else {
            Err(DynVecError::StaleCursor {
                cursor_generation: pos.generation(),
                current_generation: self.generation,
            })
        }
    }

    /// Retires the last element and returns a reference to it.
    ///
    /// The retired value stays in its slot until a later write overwrites it.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::Empty` if the vector has no live elements. The
    /// vector is left unchanged.
    pub fn pop_back(&mut self) -> Result<&T, DynVecError> {
        if self.len == 0 {
            return Err(DynVecError::Empty);
        }
        self.len -= 1;
        Ok(&self.buffer[self.len])
    }

    /// Gets the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, DynVecError> {
        self.check_bounds(index)?;
        Ok(&self.buffer[index])
    }

    /// Gets a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::IndexOutOfRange` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, DynVecError> {
        self.check_bounds(index)?;
        Ok(&mut self.buffer[index])
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer[..self.len]
    }

    /// Returns an iterator over the live elements.
    #[must_use]
    pub fn iter(&self) -> DynVecIter<'_, T> {
        DynVecIter::new(self.as_slice())
    }

    /// Returns an iterator that allows modifying each live element.
    pub fn iter_mut(&mut self) -> DynVecIterMut<'_, T> {
        DynVecIterMut::new(self.as_mut_slice())
    }

    /// Read-only cursor at the first element.
    #[must_use]
    pub fn begin(&self) -> ConstCursor {
        Cursor::new(0, self.generation)
    }

    /// Read-only cursor one past the last live element.
    #[must_use]
    pub fn end(&self) -> ConstCursor {
        Cursor::new(self.len, self.generation)
    }

    pub fn begin_mut(&mut self) -> MutCursor {
        Cursor::new(0, self.generation)
    }

    pub fn end_mut(&mut self) -> MutCursor {
        Cursor::new(self.len, self.generation)
    }

    /// Dereferences a cursor of either kind.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::StaleCursor` if the buffer was reallocated or
    /// shifted after the cursor was taken, and `DynVecError::IndexOutOfRange`
    /// if the cursor is at or past `end()`.
    pub fn at<A: Access>(&self, pos: Cursor<A>) -> Result<&T, DynVecError> {
        self.check_cursor(&pos)?;
        self.get(pos.offset())
    }

    /// Dereferences a mutable cursor.
    ///
    /// # Errors
    ///
    /// Same as [`DynVec::at`].
    pub fn at_mut(&mut self, pos: MutCursor) -> Result<&mut T, DynVecError> {
        self.check_cursor(&pos)?;
        self.get_mut(pos.offset())
    }

    /// Removes the element at `pos`, shifting the tail one slot to the left.
    ///
    /// Returns a cursor to the element that now occupies the erased position,
    /// which equals `end()` when the last element was erased. All earlier
    /// cursors become stale.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::StaleCursor` for a cursor from an older generation
    /// and `DynVecError::CursorOutOfRange` unless `begin() <= pos < end()`.
    /// Nothing is shifted on error.
    pub fn erase<A: Access>(&mut self, pos: Cursor<A>) -> Result<MutCursor, DynVecError> {
        self.check_cursor(&pos)?;
        let offset = pos - self.begin();
        let current = match usize::try_from(offset) {
            Ok(current) if current < self.len => current,
            _ => {
                return Err(DynVecError::CursorOutOfRange {
                    offset,
                    length: self.len,
                })
            }
        };

        // The erased value rotates into the retired slot at the old `len - 1`
        self.buffer[current..self.len].rotate_left(1);
        self.len -= 1;
        self.bump_generation();

        Ok(Cursor::new(current, self.generation))
    }
}

impl<T: Default> DynVec<T> {
    /// Creates an empty vector with `MIN_START_CAPACITY` slots.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: allocate(MIN_START_CAPACITY),
            len: 0,
            generation: fresh_generation(),
        }
    }

    /// Creates an empty vector able to hold at least `capacity` elements.
    ///
    /// The capacity is never below `MIN_START_CAPACITY`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut vec = Self::new();
        vec.reserve(capacity);
        vec
    }

    /// Grows the buffer to exactly `n` slots if `n` exceeds the current
    /// capacity. Never shrinks.
    ///
    /// The new buffer is fully built before the old one is released, so a
    /// panic in `T::default()` leaves the vector untouched.
    pub fn reserve(&mut self, n: usize) {
        if n == 0 || n <= self.capacity() {
            return;
        }
        tracing::trace!(from = self.capacity(), to = n, "growing buffer");
        self.relocate(n);
    }

    fn relocate(&mut self, capacity: usize) {
        let mut next = allocate::<T>(capacity);
        for (dst, src) in next.iter_mut().zip(self.buffer.iter_mut().take(self.len)) {
            mem::swap(dst, src);
        }
        self.buffer = next;
        self.bump_generation();
    }

    /// Reduces capacity to `len()`. An empty vector releases its buffer
    /// entirely and ends up with capacity 0.
    pub fn shrink_to_fit(&mut self) {
        if self.len == 0 {
            if self.capacity() > 0 {
                tracing::trace!(from = self.capacity(), to = 0, "releasing buffer");
                self.buffer = Box::default();
                self.bump_generation();
            }
            return;
        }
        if self.capacity() == self.len {
            return;
        }
        tracing::trace!(from = self.capacity(), to = self.len, "shrinking buffer");
        self.relocate(self.len);
    }

    /// Appends `value`, doubling the buffer (`2 * len + 1`) when it is full.
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() {
            self.reserve(self.len.saturating_mul(2).saturating_add(1));
        }
        self.buffer[self.len] = value;
        self.len += 1;
    }

    /// Inserts `value` before `pos`, shifting the tail one slot to the right.
    /// Inserting at `end()` appends.
    ///
    /// Returns a cursor to the inserted element. All earlier cursors become
    /// stale.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::StaleCursor` for a cursor from an older generation
    /// and `DynVecError::CursorOutOfRange` unless `begin() <= pos <= end()`.
    /// Nothing is shifted or reallocated on error.
    pub fn insert<A: Access>(
        &mut self,
        pos: Cursor<A>,
        value: T,
    ) -> Result<MutCursor, DynVecError> {
        self.check_cursor(&pos)?;
        let offset = pos - self.begin();
        let current = match usize::try_from(offset) {
            Ok(current) if current <= self.len => current,
            _ => {
                return Err(DynVecError::CursorOutOfRange {
                    offset,
                    length: self.len,
                })
            }
        };

        if self.len == self.capacity() {
            // A released buffer has capacity 0 and must still gain a slot
            self.reserve(self.capacity().saturating_mul(2).max(1));
        }

        self.buffer[self.len] = value;
        self.buffer[current..=self.len].rotate_right(1);
        self.len += 1;
        self.bump_generation();

        Ok(Cursor::new(current, self.generation))
    }
}

impl<T: Default + Clone> DynVec<T> {
    /// Builds a vector holding a copy of `items`, in order.
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        let mut vec = Self::with_capacity(items.len());
        for item in items {
            vec.push_back(item.clone());
        }
        vec
    }
}

impl<T: Default> Default for DynVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default + Clone> Clone for DynVec<T> {
    /// Deep copy with the same capacity as `self`.
    fn clone(&self) -> Self {
        let mut buffer = allocate::<T>(self.capacity());
        for (dst, src) in buffer.iter_mut().zip(self.iter()) {
            dst.clone_from(src);
        }
        Self {
            buffer,
            len: self.len,
            generation: fresh_generation(),
        }
    }

    /// Copy-and-swap: the full copy is built before `self` is touched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        let generation = self.generation.wrapping_add(1);
        mem::swap(self, &mut copy);
        self.generation = generation;
    }
}

impl<T: Default, const N: usize> From<[T; N]> for DynVec<T> {
    fn from(items: [T; N]) -> Self {
        let mut vec = Self::with_capacity(N);
        for item in items {
            vec.push_back(item);
        }
        vec
    }
}

impl<T: Default> FromIterator<T> for DynVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut vec = Self::with_capacity(iter.size_hint().0);
        vec.extend(iter);
        vec
    }
}

impl<T: Default> Extend<T> for DynVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T: PartialEq> PartialEq for DynVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynVec<T> {}

impl<T> Index<usize> for DynVec<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`. Use [`DynVec::get`] for a fallible lookup.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

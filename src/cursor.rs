//! Position handles into a `DynVec`.
//!
//! A cursor records an offset into the buffer together with the generation of
//! the vector at the time it was taken. It does not borrow the vector, so it can
//! be handed back to `insert`, `erase`, `at` and `at_mut`. Any operation that
//! reallocates or shifts the buffer bumps the generation, and the vector
//! refuses cursors from an older generation with `DynVecError::StaleCursor`.
//!
//! Every vector, including every clone, starts its generations at a base of its
//! own, spaced 2^32 generations apart. A cursor taken from one vector is rejected
//! as stale by any other vector, and assigning a clone over a vector
//! (`target = source.clone()`) retires the cursors taken from the old contents
//! just like `clone_from` does.

use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Mutable {}
    impl Sealed for super::ReadOnly {}
}

/// Access capability carried by a [`Cursor`].
pub trait Access: sealed::Sealed + Copy + core::fmt::Debug {}

/// Marker for cursors that may be used to modify the element they point at.
#[derive(Debug, Clone, Copy)]
pub struct Mutable;

/// Marker for cursors that only permit reading.
#[derive(Debug, Clone, Copy)]
pub struct ReadOnly;

impl Access for Mutable {}
impl Access for ReadOnly {}

/// A forward-only position in a `DynVec`.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<A: Access> {
    offset: usize,
    generation: u64,
    _access: PhantomData<A>,
}

/// Cursor obtained from a mutable borrow; dereferences with `at_mut`.
pub type MutCursor = Cursor<Mutable>;

/// Read-only cursor; dereferences with `at`.
pub type ConstCursor = Cursor<ReadOnly>;

impl<A: Access> Cursor<A> {
    pub(crate) fn new(offset: usize, generation: u64) -> Self {
        Self {
            offset,
            generation,
            _access: PhantomData,
        }
    }

    /// Offset of the slot this cursor points at, counted from `begin()`.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Moves the cursor one slot forward.
    ///
    /// No bounds check is done; moving past `end()` is only caught when the
    /// cursor is used.
    pub fn advance(&mut self) -> &mut Self {
        self.offset += 1;
        self
    }
}

impl From<MutCursor> for ConstCursor {
    fn from(cursor: MutCursor) -> Self {
        Self::new(cursor.offset, cursor.generation)
    }
}

impl<A: Access, B: Access> PartialEq<Cursor<B>> for Cursor<A> {
    fn eq(&self, other: &Cursor<B>) -> bool {
        self.offset == other.offset
    }
}

impl<A: Access> Eq for Cursor<A> {}

impl<A: Access> Add<usize> for Cursor<A> {
    type Output = Self;

    fn add(self, rhs: usize) -> Self {
        Self::new(self.offset + rhs, self.generation)
    }
}

impl<A: Access> AddAssign<usize> for Cursor<A> {
    fn add_assign(&mut self, rhs: usize) {
        self.offset += rhs;
    }
}

impl<A: Access, B: Access> Sub<Cursor<B>> for Cursor<A> {
    type Output = isize;

    // Offsets are bounded by the allocation size, which never exceeds isize::MAX
    #[allow(clippy::cast_possible_wrap)]
    fn sub(self, rhs: Cursor<B>) -> isize {
        self.offset as isize - rhs.offset as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widening_keeps_position() {
        let cursor = MutCursor::new(3, 7);
        let read_only: ConstCursor = cursor.into();
        assert_eq!(read_only.offset(), 3);
        assert_eq!(read_only.generation(), 7);
        assert!(read_only == cursor);
        assert!(cursor == read_only);
    }

    #[test]
    fn test_difference_across_kinds() {
        let begin = ConstCursor::new(0, 0);
        let later = MutCursor::new(4, 0);
        assert_eq!(later - begin, 4);
        assert_eq!(begin - later, -4);
    }

    #[test]
    fn test_advance_and_add() {
        let mut cursor = MutCursor::new(0, 0);
        cursor.advance().advance();
        assert_eq!(cursor.offset(), 2);
        cursor += 3;
        assert_eq!((cursor + 1).offset(), 6);
        assert_eq!(cursor.generation(), 0);
    }
}

#![no_std]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

//! `DynVec`: a growable, bounds-checked dynamic array.
//!
//! `DynVec<T>` owns a contiguous buffer of `capacity` slots, of which the first
//! `len` are live. It grows by doubling, keeps its buffer on `clear()`, and
//! only gives it back on `shrink_to_fit()`.
//!
//! This crate is `no_std` and needs only `alloc`.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push_back()`: amortized O(1), O(n) on a growth step
//! - `pop_back()`, `get()`, `clear()`: O(1)
//! - `insert()`, `erase()`: O(n) - the tail is shifted by one slot
//! - `reserve()`, `shrink_to_fit()`: O(n) when they reallocate
//!
//! ## Growth Policy
//! - A new vector starts with [`MIN_START_CAPACITY`] (5) slots
//! - `push_back()` on a full vector grows to `2 * len + 1`
//! - `insert()` on a full vector grows to `2 * capacity`, or 1 slot if the
//!   buffer was released
//! - `reserve(n)` grows to exactly `n` and never shrinks
//!
//! Unused slots hold `T::default()` or retired values, which is why most
//! constructors require `T: Default`.
//!
//! ## `no_std` Compatibility
//!
//! Enable the optional `std` feature to render into `std::io::Write` sinks:
//! ```toml
//! [dependencies]
//! dynvec = { version = "0.1", features = ["std"] }
//! ```
//!
//! # Basic Usage
//!
//! ```
//! use dynvec::{dyn_vec, DynVec};
//!
//! let mut vec = DynVec::new();
//! vec.push_back(1);
//! vec.push_back(2);
//! vec.push_back(3);
//! assert_eq!(vec.len(), 3);
//! assert_eq!(vec.to_string(), "[1, 2, 3]");
//!
//! // Bounds-checked access
//! assert_eq!(vec.get(1), Ok(&2));
//! assert!(vec.get(3).is_err());
//! vec[0] = 10;
//!
//! // Popping an empty vector is an error, not a panic
//! let mut empty: DynVec<i32> = dyn_vec![];
//! assert!(empty.pop_back().is_err());
//! ```
//!
//! # Cursors
//!
//! `begin()`/`end()` return positions that can be advanced, compared and
//! subtracted, and then handed to `insert()` and `erase()`:
//!
//! ```
//! use dynvec::dyn_vec;
//!
//! let mut vec = dyn_vec![1, 2, 3];
//!
//! let pos = vec.insert(vec.begin() + 1, 9).unwrap();
//! assert_eq!(vec.at(pos), Ok(&9));
//! assert_eq!(vec.as_slice(), &[1, 9, 2, 3]);
//!
//! vec.erase(vec.begin()).unwrap();
//! assert_eq!(vec.as_slice(), &[9, 2, 3]);
//! assert_eq!(vec.end() - vec.begin(), 3);
//! ```
//!
//! Mutable cursors come from `begin_mut()`/`end_mut()` and widen into
//! read-only ones. Both kinds compare and subtract against each other:
//!
//! ```
//! use dynvec::{dyn_vec, ConstCursor};
//!
//! let mut vec = dyn_vec![1, 2, 3];
//! let mut pos = vec.begin_mut();
//! pos.advance();
//! *vec.at_mut(pos).unwrap() = 20;
//!
//! let read_only: ConstCursor = pos.into();
//! assert!(read_only == pos);
//! assert_eq!(pos - vec.begin(), 1);
//! assert_eq!(vec.as_slice(), &[1, 20, 3]);
//! ```
//!
//! A cursor is only valid until the next operation that reallocates or shifts
//! the buffer (`insert`, `erase`, a growing `reserve`/`push_back`, a
//! `shrink_to_fit` that does work, `clone_from`). Using it afterwards is
//! reported as [`DynVecError::StaleCursor`]:
//!
//! ```
//! use dynvec::{dyn_vec, DynVecError};
//!
//! let mut vec = dyn_vec![1, 2, 3];
//! let first = vec.begin();
//! vec.erase(vec.begin()).unwrap();
//! assert!(matches!(vec.at(first), Err(DynVecError::StaleCursor { .. })));
//! ```
//!
//! # Iterator Support
//!
//! ```
//! use dynvec::dyn_vec;
//!
//! let mut vec = dyn_vec![1, 2, 3];
//! for item in &mut vec {
//!     *item *= 2;
//! }
//! let collected: Vec<_> = vec.iter().copied().collect();
//! assert_eq!(collected, vec![2, 4, 6]);
//! ```

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod core;
mod cursor;
mod display;
mod error;
mod iter;

// Re-export public types and traits
pub use crate::core::{DynVec, MIN_START_CAPACITY};
pub use cursor::{Access, ConstCursor, Cursor, MutCursor, Mutable, ReadOnly};
pub use error::DynVecError;
pub use iter::{DynVecIter, DynVecIterMut};

/// Creates a [`DynVec`] holding the given elements, in order.
///
/// ```
/// use dynvec::dyn_vec;
///
/// let vec = dyn_vec![5, 6, 7];
/// assert_eq!(vec.len(), 3);
/// assert_eq!(vec.to_string(), "[5, 6, 7]");
/// ```
#[macro_export]
macro_rules! dyn_vec {
    () => {
        $crate::DynVec::new()
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::DynVec::from([$($elem),+])
    };
}

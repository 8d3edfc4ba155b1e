use thiserror::Error;

/// Error types for `DynVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynVecError {
    /// `pop_back` was called on a vector with no live elements
    #[error("No elements in vector")]
    Empty,
    /// Index is beyond the current vector length
    #[error("Index out of range: index {index} is beyond vector length {length}")]
    IndexOutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Cursor passed to `insert` or `erase` does not point into the permitted range
    #[error("Cursor out of range: offset {offset} is not valid for vector length {length}")]
    CursorOutOfRange {
        /// Offset of the cursor relative to `begin()`
        offset: isize,
        /// Current length of the vector
        length: usize,
    },
    /// Cursor was taken before the last reallocation or shift of the buffer
    #[error("Stale cursor: taken at generation {cursor_generation}, vector is at generation {current_generation}")]
    StaleCursor {
        /// Generation recorded in the cursor
        cursor_generation: u64,
        /// Current generation of the vector
        current_generation: u64,
    },
}

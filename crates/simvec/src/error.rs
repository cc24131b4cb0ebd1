//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations.
///
/// Only two conditions are recoverable. Everything else (unchecked index
/// past the end, `pop_back` on an empty array, an insert or erase position
/// outside the live range) is a contract violation and panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A checked access named an index outside `[0, len)`.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Logical length of the array at the time of the access.
        len: usize,
    },
    /// Storage for a new buffer could not be obtained.
    ///
    /// Also reported when the capacity arithmetic itself overflows. The
    /// array is left exactly as it was before the call.
    AllocationFailed {
        /// Number of elements the failed buffer would have held.
        requested: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for array of length {len}")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: could not reserve {requested} elements")
            }
        }
    }
}

impl Error for ArrayError {}

//! A growable contiguous array with explicit storage ownership.
//!
//! [`DynamicArray`] keeps its elements in a single [`RawStorage`] block and
//! replaces that block wholesale whenever it needs more room. Every growth
//! path prepares the new block completely before touching the array, so
//! allocation failures are reported as [`ArrayError`] values and leave the
//! array as it was.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T>
//! ├── RawStorage<T>   (one owned block, fixed capacity, swapped on growth)
//! ├── len             (live prefix of the block)
//! └── GrowthPolicy    (new capacity = max(required, min_capacity, capacity * factor))
//! ```
//!
//! # Errors and contract violations
//!
//! - [`ArrayError::OutOfRange`]: checked access via [`DynamicArray::at`].
//! - [`ArrayError::AllocationFailed`]: any growth path.
//!
//! Indexing past the live range, `pop_back` on an empty array, and insert
//! or erase positions outside the live range panic.
//!
//! # Example
//!
//! ```
//! use simvec::simvec;
//!
//! let mut array = simvec![1, 2, 3];
//! array.erase(1);
//! array.insert(1, 5).unwrap();
//! assert_eq!(array, [1, 5, 3]);
//! assert!(array < simvec![1, 5, 4]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
mod cmp;
pub mod config;
pub mod error;
pub mod iter;
pub mod reserve;
pub mod storage;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use config::GrowthPolicy;
pub use error::ArrayError;
pub use iter::IntoIter;
pub use reserve::{reserve, Reservation};
pub use storage::RawStorage;

/// Build a [`DynamicArray`] from a literal list, with capacity exactly
/// the number of values.
///
/// ```
/// let array = simvec::simvec!["a", "b"];
/// assert_eq!(array.len(), 2);
/// assert_eq!(array.capacity(), 2);
/// ```
#[macro_export]
macro_rules! simvec {
    () => {
        $crate::DynamicArray::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($value),+])
    };
}

//! Fixed-capacity owned buffers.
//!
//! A [`RawStorage`] is the single heap block behind a
//! [`DynamicArray`](crate::DynamicArray). It is allocated to its full
//! capacity at creation, every slot constructed, and never resized. Growth
//! happens one level up: the array builds a fresh storage, moves elements
//! across, and swaps the new block in.

use std::ops::{Index, IndexMut};

use tracing::debug;

use crate::error::ArrayError;

/// An owned buffer of exactly `capacity` constructed slots.
///
/// The storage does not know which slots are logically live; that is the
/// owning array's business. It cannot be cloned. Ownership moves with Rust
/// moves, [`swap`](RawStorage::swap) and [`take`](RawStorage::take).
pub struct RawStorage<T> {
    /// Backing block. Its length is the capacity; empty blocks own no heap memory.
    slots: Box<[T]>,
}

impl<T> RawStorage<T> {
    /// Create an empty storage. Does not allocate.
    pub fn new() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    /// Allocate exactly `capacity` slots, each set to `T::default()`.
    ///
    /// Returns [`ArrayError::AllocationFailed`] if the memory cannot be
    /// obtained or its byte size overflows.
    pub fn create(capacity: usize) -> Result<Self, ArrayError>
    where
        T: Default,
    {
        Self::from_exact_iter((0..capacity).map(|_| T::default()))
    }

    /// Allocate a block sized to `iter.len()` and fill it from `iter`.
    ///
    /// The allocation is attempted before any item is pulled, so a failure
    /// leaves the iterator untouched.
    pub fn from_exact_iter<I>(iter: I) -> Result<Self, ArrayError>
    where
        I: ExactSizeIterator<Item = T>,
    {
        let capacity = iter.len();
        if capacity == 0 {
            return Ok(Self::new());
        }
        let mut slots = Vec::new();
        if slots.try_reserve_exact(capacity).is_err() {
            debug!(requested = capacity, "storage allocation failed");
            return Err(ArrayError::AllocationFailed {
                requested: capacity,
            });
        }
        slots.extend(iter);
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Adopt an already built block. Its length becomes the capacity.
    pub fn from_boxed(slots: Box<[T]>) -> Self {
        Self { slots }
    }

    /// Number of slots in the block.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Unowned pointer to slot 0.
    ///
    /// For an empty storage this is a well-aligned dangling sentinel that
    /// must never be dereferenced.
    pub fn as_ptr(&self) -> *const T {
        self.slots.as_ptr()
    }

    /// All slots, live or not.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// All slots, live or not, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Exchange blocks with `other` in O(1). No element is touched.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.slots, &mut other.slots);
    }

    /// Move the block out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        let mut taken = Self::new();
        self.swap(&mut taken);
        taken
    }

    /// Release ownership of the block.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.slots
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for RawStorage<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for RawStorage<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}

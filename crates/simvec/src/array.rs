//! The growable array.
//!
//! [`DynamicArray`] owns one [`RawStorage`] and a logical length. Every
//! operation that needs more room builds a complete replacement block
//! first and swaps it in last, so a failed allocation (or a panicking
//! `Clone`/`Default`) leaves the array exactly as it was.

use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::{self, SliceIndex};

use tracing::trace;

use crate::config::GrowthPolicy;
use crate::error::ArrayError;
use crate::reserve::Reservation;
use crate::storage::RawStorage;

/// A contiguous, growable sequence.
///
/// Slots `[0, len)` are live. Slots `[len, capacity)` hold constructed
/// values that are never observable; anything that brings them back into
/// the live range resets them to `T::default()` first.
///
/// `T: Default` is needed only by operations that may create slots, and
/// `T: Clone` only by the copy flavours (`*_cloned`, `extend_from_slice`,
/// `try_clone`, `assign_from`).
pub struct DynamicArray<T> {
    storage: RawStorage<T>,
    len: usize,
    policy: GrowthPolicy,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with the default doubling policy. Does not allocate.
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::DOUBLING)
    }

    /// Create an empty array that grows according to `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            storage: RawStorage::new(),
            len: 0,
            policy,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of elements the current storage holds without reallocating.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Whether the array has no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The growth policy applied on reallocation.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// The live elements.
    pub fn as_slice(&self) -> &[T] {
        &self.storage.as_slice()[..self.len]
    }

    /// The live elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.storage.as_mut_slice()[..len]
    }

    /// Pointer to the first slot of the storage.
    ///
    /// Stable until the next reallocation or [`swap`](Self::swap). Never
    /// dereference it for an array with zero capacity.
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Iterate over the live elements in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the live elements in index order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Checked access to the element at `index`.
    ///
    /// Returns [`ArrayError::OutOfRange`] when `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Checked mutable access to the element at `index`.
    ///
    /// Returns [`ArrayError::OutOfRange`] when `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Drop the last element from the live range.
    ///
    /// The value stays in its slot until it is overwritten, reset, or the
    /// storage is dropped.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn pop_back(&mut self) {
        assert!(self.len != 0, "pop_back called on an empty array");
        self.len -= 1;
    }

    /// Remove the element at `pos`, shifting the tail one slot left.
    ///
    /// Never reallocates. Returns `pos`, which now holds the element that
    /// followed the removed one (or equals `len` if it was the last).
    ///
    /// The removed value is parked in the first dead slot and keeps its
    /// resources until that slot is overwritten, reset, or the storage is
    /// dropped. Use [`remove`](Self::remove) to release it immediately.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len`.
    pub fn erase(&mut self, pos: usize) -> usize {
        assert!(
            pos < self.len,
            "erase position {pos} out of range for array of length {}",
            self.len
        );
        let len = self.len;
        self.storage.as_mut_slice()[pos..len].rotate_left(1);
        self.len -= 1;
        pos
    }

    /// Shrink the live range to zero. Capacity is kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Exchange contents, length and policy with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        self.storage.swap(&mut other.storage);
        std::mem::swap(&mut self.len, &mut other.len);
        std::mem::swap(&mut self.policy, &mut other.policy);
    }

    /// Steal this array's storage, leaving `self` empty with zero capacity.
    ///
    /// The returned array keeps the spare capacity and the policy.
    pub fn take(&mut self) -> Self {
        let mut taken = Self::with_policy(self.policy);
        self.swap(&mut taken);
        taken
    }

    /// Replace `self` with the contents of `rhs`, leaving `rhs` empty.
    ///
    /// The old contents of `self` are dropped. `rhs`'s spare capacity
    /// carries over.
    pub fn move_assign(&mut self, rhs: &mut Self) {
        let mut incoming = rhs.take();
        self.swap(&mut incoming);
    }

    /// Split into the storage and the live length.
    pub(crate) fn into_parts(self) -> (RawStorage<T>, usize) {
        (self.storage, self.len)
    }

    /// Create an array of `len` clones of `value`, with capacity exactly `len`.
    pub fn with_len_and_value(len: usize, value: &T) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        Self::sized_with(len, |_| value.clone())
    }

    /// Create an array holding clones of `values`, with capacity exactly
    /// `values.len()`.
    pub fn from_slice(values: &[T]) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        Self::sized_with(values.len(), |i| values[i].clone())
    }

    /// Shared factory behind the sized constructors.
    fn sized_with(len: usize, fill: impl FnMut(usize) -> T) -> Result<Self, ArrayError> {
        let storage = RawStorage::from_exact_iter((0..len).map(fill))?;
        Ok(Self {
            storage,
            len,
            policy: GrowthPolicy::DOUBLING,
        })
    }

    /// Capacity for a reallocation that must fit `required` elements.
    fn next_capacity(&self, required: usize) -> Result<usize, ArrayError> {
        self.policy
            .grow(self.capacity(), required)
            .ok_or(ArrayError::AllocationFailed {
                requested: required,
            })
    }

    /// Install `fresh` as the storage. The old block is dropped.
    fn install(&mut self, mut fresh: RawStorage<T>) {
        trace!(
            from = self.capacity(),
            to = fresh.capacity(),
            len = self.len,
            "reallocated storage"
        );
        self.storage.swap(&mut fresh);
    }
}

impl<T: Default> DynamicArray<T> {
    /// Create an array of `len` default values, with capacity exactly `len`.
    pub fn with_len(len: usize) -> Result<Self, ArrayError> {
        Self::sized_with(len, |_| T::default())
    }

    /// Create an empty array with room for exactly `reservation.capacity()`
    /// elements.
    pub fn with_reservation(reservation: Reservation) -> Result<Self, ArrayError> {
        let mut array = Self::new();
        array.reserve(reservation.capacity())?;
        Ok(array)
    }

    /// Build a block of `capacity` slots holding the live elements moved
    /// out of the current storage, followed by defaults.
    ///
    /// The current storage keeps the leftovers (defaults) in the live range
    /// until the caller installs the result, so the caller must not return
    /// between this and [`install`](Self::install).
    fn relocated(&mut self, capacity: usize) -> Result<RawStorage<T>, ArrayError> {
        let mut fresh = RawStorage::create(capacity)?;
        let len = self.len;
        fresh.as_mut_slice()[..len].swap_with_slice(&mut self.storage.as_mut_slice()[..len]);
        Ok(fresh)
    }

    /// Change the live length to `new_len`.
    ///
    /// Shrinking only moves the end marker. Growing exposes slots reset to
    /// `T::default()`, reallocating per the growth policy when `new_len`
    /// exceeds the capacity.
    pub fn resize(&mut self, new_len: usize) -> Result<(), ArrayError> {
        if new_len <= self.len {
            self.len = new_len;
            return Ok(());
        }
        if new_len <= self.capacity() {
            let len = self.len;
            self.storage.as_mut_slice()[len..new_len].fill_with(T::default);
            self.len = new_len;
            return Ok(());
        }
        let capacity = self.next_capacity(new_len)?;
        let fresh = self.relocated(capacity)?;
        self.install(fresh);
        self.len = new_len;
        Ok(())
    }

    /// Ensure room for at least `new_capacity` elements.
    ///
    /// Does nothing if the capacity already suffices; otherwise reallocates
    /// to exactly `new_capacity`. The length is unchanged.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let fresh = self.relocated(new_capacity)?;
        self.install(fresh);
        Ok(())
    }

    /// Append `value`, growing per the growth policy when full.
    ///
    /// Amortized O(1). On failure `value` is dropped and the array is
    /// unchanged.
    pub fn push_back(&mut self, value: T) -> Result<(), ArrayError> {
        if self.len < self.capacity() {
            self.storage[self.len] = value;
            self.len += 1;
            return Ok(());
        }
        let capacity = self.next_capacity(self.len + 1)?;
        let mut fresh = self.relocated(capacity)?;
        fresh[self.len] = value;
        self.install(fresh);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `pos`, shifting the tail one slot
    /// left.
    ///
    /// Unlike [`erase`](Self::erase), the vacated slot is reset to
    /// `T::default()`, so no trace of the value stays in the storage.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len`.
    pub fn remove(&mut self, pos: usize) -> T {
        self.erase(pos);
        let len = self.len;
        std::mem::take(&mut self.storage[len])
    }

    /// Append a clone of `value`.
    pub fn push_back_cloned(&mut self, value: &T) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        self.push_back(value.clone())
    }

    /// Insert `value` at `pos`, shifting `[pos, len)` one slot right.
    ///
    /// Returns `pos`, the offset of the inserted element. When the array is
    /// full the prefix, the new value and the suffix are laid out directly
    /// in a fresh block.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<usize, ArrayError> {
        assert!(
            pos <= self.len,
            "insert position {pos} out of range for array of length {}",
            self.len
        );
        let len = self.len;
        if len < self.capacity() {
            let slots = self.storage.as_mut_slice();
            slots[len] = value;
            slots[pos..=len].rotate_right(1);
            self.len += 1;
            return Ok(pos);
        }
        let capacity = self.next_capacity(len + 1)?;
        let mut fresh = RawStorage::create(capacity)?;
        {
            let dst = fresh.as_mut_slice();
            let src = self.storage.as_mut_slice();
            dst[..pos].swap_with_slice(&mut src[..pos]);
            dst[pos] = value;
            dst[pos + 1..=len].swap_with_slice(&mut src[pos..len]);
        }
        self.install(fresh);
        self.len += 1;
        Ok(pos)
    }

    /// Insert a clone of `value` at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    pub fn insert_cloned(&mut self, pos: usize, value: &T) -> Result<usize, ArrayError>
    where
        T: Clone,
    {
        self.insert(pos, value.clone())
    }

    /// Append clones of every element of `values`.
    ///
    /// All clones are made before the live range changes, so a panicking
    /// `Clone` leaves the array as it was.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        let len = self.len;
        let new_len = len
            .checked_add(values.len())
            .ok_or(ArrayError::AllocationFailed {
                requested: usize::MAX,
            })?;
        if new_len <= self.capacity() {
            self.storage.as_mut_slice()[len..new_len].clone_from_slice(values);
            self.len = new_len;
            return Ok(());
        }
        let capacity = self.next_capacity(new_len)?;
        let mut fresh = RawStorage::create(capacity)?;
        fresh.as_mut_slice()[len..new_len].clone_from_slice(values);
        fresh.as_mut_slice()[..len].swap_with_slice(&mut self.storage.as_mut_slice()[..len]);
        self.install(fresh);
        self.len = new_len;
        Ok(())
    }

    /// Deep copy into fresh storage of the same capacity.
    ///
    /// The copy keeps the policy. Dead slots in the copy are defaults.
    pub fn try_clone(&self) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        let live = self.as_slice();
        let storage = RawStorage::from_exact_iter((0..self.capacity()).map(|i| {
            if i < live.len() {
                live[i].clone()
            } else {
                T::default()
            }
        }))?;
        Ok(Self {
            storage,
            len: self.len,
            policy: self.policy,
        })
    }

    /// Copy-assign from `rhs`: build an independent copy, then swap it in.
    ///
    /// On failure `self` is untouched.
    pub fn assign_from(&mut self, rhs: &Self) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        let mut copy = rhs.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for DynamicArray<T> {
    /// # Panics
    ///
    /// Panics if the copy's storage cannot be allocated. Use
    /// [`try_clone`](DynamicArray::try_clone) to handle that case.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(err) => panic!("cloning DynamicArray failed: {err}"),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.assign_from(source) {
            panic!("cloning DynamicArray failed: {err}");
        }
    }
}

impl<T> From<Reservation> for DynamicArray<T>
where
    T: Default,
{
    /// # Panics
    ///
    /// Panics if the reserved storage cannot be allocated. Use
    /// [`DynamicArray::with_reservation`] to handle that case.
    fn from(reservation: Reservation) -> Self {
        match Self::with_reservation(reservation) {
            Ok(array) => array,
            Err(err) => panic!("reserving DynamicArray storage failed: {err}"),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    /// Adopt the values with capacity exactly `N`.
    fn from(values: [T; N]) -> Self {
        let slots: Box<[T]> = Box::new(values);
        Self {
            storage: RawStorage::from_boxed(slots),
            len: N,
            policy: GrowthPolicy::DOUBLING,
        }
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Unchecked indexing over the live range.
///
/// Out-of-range indices are a contract violation and panic; they never
/// reach the dead slots.
impl<T, I: SliceIndex<[T]>> Index<I> for DynamicArray<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &I::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynamicArray<T> {
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.as_mut_slice()[index]
    }
}

//! Capacity reservation tokens.

/// A capacity hint consumed by [`DynamicArray::with_reservation`].
///
/// Carries nothing but the desired capacity. Build one with [`reserve`].
///
/// [`DynamicArray::with_reservation`]: crate::DynamicArray::with_reservation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reservation(pub usize);

impl Reservation {
    /// The capacity this token asks for.
    pub fn capacity(self) -> usize {
        self.0
    }
}

/// Build a [`Reservation`] for `capacity` elements.
///
/// ```
/// use simvec::{reserve, DynamicArray};
///
/// let array: DynamicArray<u32> = DynamicArray::with_reservation(reserve(10)).unwrap();
/// assert_eq!(array.len(), 0);
/// assert_eq!(array.capacity(), 10);
/// ```
pub fn reserve(capacity: usize) -> Reservation {
    Reservation(capacity)
}

//! Growth policy configuration.

/// Rule used to pick a new capacity whenever an array must reallocate.
///
/// The default doubles the current capacity with a floor of one slot.
/// Values are clamped at construction so that every growth step makes
/// progress; all fields are immutable afterwards in practice since arrays
/// copy the policy by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    /// Multiplier applied to the current capacity on growth.
    ///
    /// Default: 2. Must be at least 2.
    pub factor: usize,

    /// Smallest capacity ever allocated by a growth step.
    ///
    /// Default: 1. Must be at least 1, so growing an empty array always
    /// yields room for at least one element.
    pub min_capacity: usize,
}

impl GrowthPolicy {
    /// Default growth multiplier.
    pub const DEFAULT_FACTOR: usize = 2;

    /// Default capacity floor.
    pub const DEFAULT_MIN_CAPACITY: usize = 1;

    /// The doubling policy used by arrays that were not given one.
    pub const DOUBLING: Self = Self {
        factor: Self::DEFAULT_FACTOR,
        min_capacity: Self::DEFAULT_MIN_CAPACITY,
    };

    /// Create a policy, clamping `factor` to at least 2 and
    /// `min_capacity` to at least 1.
    pub fn new(factor: usize, min_capacity: usize) -> Self {
        Self {
            factor: factor.max(Self::DEFAULT_FACTOR),
            min_capacity: min_capacity.max(Self::DEFAULT_MIN_CAPACITY),
        }
    }

    /// Capacity to allocate when `current` slots are not enough to hold
    /// `required` elements.
    ///
    /// Returns `max(required, min_capacity, current * factor)`, or `None`
    /// if `current * factor` overflows `usize`.
    pub fn grow(&self, current: usize, required: usize) -> Option<usize> {
        let scaled = current.checked_mul(self.factor)?;
        Some(scaled.max(self.min_capacity).max(required))
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DOUBLING
    }
}

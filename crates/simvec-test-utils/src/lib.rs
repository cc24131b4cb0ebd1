//! Test utilities for simvec development.
//!
//! Provides [`Tracked`], an element type that reports how often it is
//! cloned and dropped through a shared [`Probe`], and can be told to panic
//! on a later clone. Use it to tell moves from copies and to check that a
//! failed copy leaves the container untouched.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::rc::Rc;

/// Shared counters observed by every [`Tracked`] value attached to it.
#[derive(Default, Debug)]
pub struct Probe {
    clones: Cell<usize>,
    drops: Cell<usize>,
    /// Clones left before the next one panics. `None` means unlimited.
    clone_budget: Cell<Option<usize>>,
}

impl Probe {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Number of clones made so far.
    pub fn clones(&self) -> usize {
        self.clones.get()
    }

    /// Number of attached values dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }

    /// Allow `budget` more clones, then panic on the next one.
    pub fn fail_clone_after(&self, budget: usize) {
        self.clone_budget.set(Some(budget));
    }

    /// Lift any clone budget.
    pub fn allow_all_clones(&self) {
        self.clone_budget.set(None);
    }

    fn record_clone(&self) {
        if let Some(budget) = self.clone_budget.get() {
            if budget == 0 {
                panic!("Tracked clone budget exhausted");
            }
            self.clone_budget.set(Some(budget - 1));
        }
        self.clones.set(self.clones.get() + 1);
    }
}

/// An integer payload with optional clone/drop instrumentation.
///
/// `Tracked::default()` carries no probe, so default-filled storage slots
/// are invisible to the counters. Equality and ordering use the payload only.
#[derive(Default, Debug)]
pub struct Tracked {
    pub value: i32,
    probe: Option<Rc<Probe>>,
}

impl Tracked {
    pub fn new(value: i32, probe: &Rc<Probe>) -> Self {
        Self {
            value,
            probe: Some(Rc::clone(probe)),
        }
    }

    /// Build one tracked value per payload, all attached to `probe`.
    pub fn many(values: &[i32], probe: &Rc<Probe>) -> Vec<Self> {
        values.iter().map(|&v| Self::new(v, probe)).collect()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Some(probe) = &self.probe {
            probe.record_clone();
        }
        Self {
            value: self.value,
            probe: self.probe.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(probe) = &self.probe {
            probe.drops.set(probe.drops.get() + 1);
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

/// Payloads of a slice of tracked values, for compact assertions.
pub fn payloads<'a>(values: impl IntoIterator<Item = &'a Tracked>) -> Vec<i32> {
    values.into_iter().map(|t| t.value).collect()
}

//! Sparse keyed store of rational values.
//!
//! [`SparseVec`] maps an integer index to an exact rational, with O(1)
//! average lookup. It is the building block for both the row stores and the
//! above-diagonal column mirrors of a [`crate::system::LinearSystem`].
//!
//! Every value is owned by exactly one store; [`SparseVec::take`] and
//! [`SparseVec::pop`] move values out rather than exposing shared mutable
//! references. Iteration and [`SparseVec::pop`] order are unspecified, and
//! the elimination algorithm is required not to depend on them.

use std::collections::hash_map::{Entry, HashMap};

use crate::Ratio;

/// Keyed sparse vector of rationals. At most one entry per key.
#[derive(Clone, Debug, Default)]
pub struct SparseVec {
    entries: HashMap<usize, Ratio>,
}

impl SparseVec {
    pub fn new() -> Self {
        SparseVec {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a value without removing it.
    pub fn get(&self, key: usize) -> Option<&Ratio> {
        self.entries.get(&key)
    }

    /// Insert a value, overwriting any existing value at this key.
    pub fn set(&mut self, key: usize, value: Ratio) {
        self.entries.insert(key, value);
    }

    /// Add `delta` to the value at `key`, inserting `delta` if absent.
    pub fn accumulate(&mut self, key: usize, delta: Ratio) {
        match self.entries.entry(key) {
            Entry::Occupied(mut entry) => *entry.get_mut() += delta,
            Entry::Vacant(entry) => {
                entry.insert(delta);
            }
        }
    }

    /// Remove and drop the entry at `key`. Returns whether it existed.
    pub fn remove(&mut self, key: usize) -> bool {
        self.entries.remove(&key).is_some()
    }

    /// Remove the entry at `key` and return ownership of its value.
    pub fn take(&mut self, key: usize) -> Option<Ratio> {
        self.entries.remove(&key)
    }

    /// Remove and return an arbitrary entry, or `None` when empty. Calling
    /// this repeatedly drains the store, visiting every entry exactly once.
    pub fn pop(&mut self) -> Option<(usize, Ratio)> {
        let key = *self.entries.keys().next()?;
        self.entries.remove_entry(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&usize, &Ratio)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &usize> {
        self.entries.keys()
    }
}

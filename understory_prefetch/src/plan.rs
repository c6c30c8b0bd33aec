// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered prefetch plans.

use alloc::vec;
use alloc::vec::Vec;
use core::slice;

/// One item of an [`OrderedPlan`], paired with its position in the input sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrefetchEntry<T> {
    /// The item handle (typically an image identifier).
    pub item: T,
    /// Position of `item` in the sequence the plan was built from.
    pub index: usize,
}

/// A visiting order over a sequence of items.
///
/// Plans produced by this crate are permutations of the input: every item
/// appears exactly once, and the first entry is the highest-priority item
/// (for focal strategies, the focal item itself).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderedPlan<T> {
    entries: Vec<PrefetchEntry<T>>,
}

impl<T> Default for OrderedPlan<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Clone> OrderedPlan<T> {
    /// Builds a plan by visiting `items` in `order`.
    ///
    /// Indices in `order` must be in `0..items.len()`.
    pub(crate) fn from_order(items: &[T], order: impl IntoIterator<Item = usize>) -> Self {
        let entries = order
            .into_iter()
            .map(|index| PrefetchEntry {
                item: items[index].clone(),
                index,
            })
            .collect();
        Self { entries }
    }
}

impl<T> OrderedPlan<T> {
    /// Number of entries in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the plan has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first entry to visit, if any.
    #[must_use]
    pub fn first(&self) -> Option<&PrefetchEntry<T>> {
        self.entries.first()
    }

    /// All entries in visiting order.
    #[must_use]
    pub fn entries(&self) -> &[PrefetchEntry<T>] {
        &self.entries
    }

    /// Iterates over entries in visiting order.
    pub fn iter(&self) -> slice::Iter<'_, PrefetchEntry<T>> {
        self.entries.iter()
    }

    /// Iterates over the original indices in visiting order.
    pub fn indices(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.entries.iter().map(|e| e.index)
    }

    /// Iterates over the items in visiting order.
    pub fn items(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.entries.iter().map(|e| &e.item)
    }

    /// Consumes the plan, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<PrefetchEntry<T>> {
        self.entries
    }

    /// Returns `true` if the original indices form a permutation of `0..len`.
    ///
    /// This holds for every plan built by this crate. Plans that hosts
    /// assemble or filter themselves and wrap with `From<Vec<PrefetchEntry<T>>>`
    /// can be checked with it.
    #[must_use]
    pub fn is_permutation(&self, len: usize) -> bool {
        if self.entries.len() != len {
            return false;
        }
        let mut seen = vec![false; len];
        for index in self.indices() {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

impl<T> From<Vec<PrefetchEntry<T>>> for OrderedPlan<T> {
    /// Wraps entries assembled by the host, in visiting order.
    ///
    /// No validation is done; see [`OrderedPlan::is_permutation`].
    fn from(entries: Vec<PrefetchEntry<T>>) -> Self {
        Self { entries }
    }
}

impl<T> IntoIterator for OrderedPlan<T> {
    type Item = PrefetchEntry<T>;
    type IntoIter = alloc::vec::IntoIter<PrefetchEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedPlan<T> {
    type Item = &'a PrefetchEntry<T>;
    type IntoIter = slice::Iter<'a, PrefetchEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breadth-first merge of several ordered lists.
//!
//! Round `k` emits the `k`-th element of every list that still has one, in
//! the order the lists were given, before any list contributes its
//! `(k + 1)`-th element. Lists of different lengths drop out as they run
//! dry, so shorter lists are never starved by longer ones.
//!
//! Cursors are kept in a queue: each step pops the front cursor, takes one
//! element and pushes the cursor to the back, while an exhausted cursor is
//! simply not pushed back. Every element and every list is therefore
//! touched a constant number of times, and dropping a list never skips an
//! element of the list behind it.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::iter::FusedIterator;

/// Lazy round-robin interleave over several iterators.
#[derive(Clone, Debug)]
pub struct RoundRobin<I> {
    cursors: VecDeque<I>,
}

impl<I: Iterator> RoundRobin<I> {
    /// Creates an interleave over `lists`, visited in the given order each round.
    pub fn new<L>(lists: L) -> Self
    where
        L: IntoIterator,
        L::Item: IntoIterator<IntoIter = I>,
    {
        Self {
            cursors: lists.into_iter().map(IntoIterator::into_iter).collect(),
        }
    }
}

impl<I: Iterator> Iterator for RoundRobin<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while let Some(mut cursor) = self.cursors.pop_front() {
            if let Some(item) = cursor.next() {
                self.cursors.push_back(cursor);
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursors
            .iter()
            .map(Iterator::size_hint)
            .fold((0, Some(0)), |(lo, hi), (l, h)| {
                (
                    lo.saturating_add(l),
                    hi.zip(h).and_then(|(a, b)| a.checked_add(b)),
                )
            })
    }
}

impl<I: Iterator> FusedIterator for RoundRobin<I> {}

/// Merges `lists` breadth-first.
///
/// An empty input yields an empty output and a single list is returned as
/// is, without copying.
///
/// ```rust
/// use understory_prefetch::round_robin;
///
/// let merged = round_robin(vec![vec!['a', 'b', 'c'], vec!['x', 'y']]);
/// assert_eq!(merged, ['a', 'x', 'b', 'y', 'c']);
/// ```
#[must_use]
pub fn round_robin<T>(mut lists: Vec<Vec<T>>) -> Vec<T> {
    if lists.len() <= 1 {
        return lists.pop().unwrap_or_default();
    }
    let total: usize = lists.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(total);
    out.extend(RoundRobin::new(lists));
    tracing::trace!(total, "merged lists round-robin");
    out
}

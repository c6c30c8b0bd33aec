// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bidirectional expansion from a focal index.
//!
//! Starting at the focal index, indices are emitted alternately one step
//! below and one step above, until both ends of `0..len` are reached. Within
//! a step the lower neighbor always comes first. When one side runs out the
//! other keeps expanding alone, so `expand_order(5, 0)` is `[0, 1, 2, 3, 4]`.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::PrefetchError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Focal,
    Below,
    Above,
}

/// Lazy iterator over the indices of a bidirectional expansion.
///
/// Produced by [`Expansion::new`]; see [`expand_order`] for the collected form.
#[derive(Clone, Debug)]
pub struct Expansion {
    lower: usize,
    upper: usize,
    last: usize,
    remaining: usize,
    step: Step,
}

impl Expansion {
    /// Creates an expansion over `0..len` centered on `focal`.
    ///
    /// An empty range yields nothing whatever the focal index.
    ///
    /// # Errors
    ///
    /// Returns [`PrefetchError::FocalOutOfBounds`] if `len > 0` and
    /// `focal >= len`.
    pub fn new(len: usize, focal: usize) -> Result<Self, PrefetchError> {
        if len > 0 && focal >= len {
            tracing::debug!(len, focal, "rejected out-of-bounds focal index");
            return Err(PrefetchError::FocalOutOfBounds { focal, len });
        }
        Ok(Self {
            lower: focal,
            upper: focal,
            last: len.saturating_sub(1),
            remaining: len,
            step: Step::Focal,
        })
    }
}

impl Iterator for Expansion {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        // While anything remains at least one side can still move, so this
        // loop runs at most twice.
        loop {
            match self.step {
                Step::Focal => {
                    self.step = Step::Below;
                    self.remaining -= 1;
                    return Some(self.lower);
                }
                Step::Below => {
                    self.step = Step::Above;
                    if self.lower > 0 {
                        self.lower -= 1;
                        self.remaining -= 1;
                        return Some(self.lower);
                    }
                }
                Step::Above => {
                    self.step = Step::Below;
                    if self.upper < self.last {
                        self.upper += 1;
                        self.remaining -= 1;
                        return Some(self.upper);
                    }
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Expansion {}

impl FusedIterator for Expansion {}

/// Returns the bidirectional expansion order of `0..len` around `focal`.
///
/// The result is a permutation of `0..len` whose first element is `focal`.
///
/// ```rust
/// use understory_prefetch::expand_order;
///
/// assert_eq!(expand_order(7, 3).unwrap(), [3, 2, 4, 1, 5, 0, 6]);
/// assert_eq!(expand_order(5, 4).unwrap(), [4, 3, 2, 1, 0]);
/// ```
///
/// # Errors
///
/// Returns [`PrefetchError::FocalOutOfBounds`] if `len > 0` and
/// `focal >= len`. Clamping is deliberately not performed.
pub fn expand_order(len: usize, focal: usize) -> Result<Vec<usize>, PrefetchError> {
    let order: Vec<usize> = Expansion::new(len, focal)?.collect();
    tracing::trace!(len, focal, "computed expansion order");
    Ok(order)
}

/// Returns the expansion order of `0..len` around its middle index (`len / 2`).
///
/// This is the usual order for loading a freshly opened stack, before the
/// user has picked a slice.
#[must_use]
pub fn center_order(len: usize) -> Vec<usize> {
    Expansion {
        lower: len / 2,
        upper: len / 2,
        last: len.saturating_sub(1),
        remaining: len,
        step: Step::Focal,
    }
    .collect()
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by prefetch ordering.

use thiserror::Error;

/// Error returned when a prefetch order cannot be computed for the given input.
///
/// Every variant is a deterministic function of the arguments; retrying with
/// the same input yields the same error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PrefetchError {
    /// The focal index does not address an item of a non-empty sequence.
    #[error("focal index {focal} is out of bounds for a sequence of {len} items")]
    FocalOutOfBounds {
        /// The requested focal index.
        focal: usize,
        /// The length of the sequence being ordered.
        len: usize,
    },
}

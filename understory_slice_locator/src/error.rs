// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while locating slices.

use thiserror::Error;

/// Error returned when slice metadata cannot be used for matching.
///
/// A malformed frame aborts the whole call: skipping it could silently
/// resolve a point to the wrong slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LocateError {
    /// The frame's orientation does not have exactly six direction cosines.
    #[error("slice {slice} has {len} orientation cosines, expected 6")]
    MalformedOrientation {
        /// Index of the offending frame.
        slice: usize,
        /// Number of cosines it carries.
        len: usize,
    },
    /// The frame's orientation or position contains NaN or infinite values.
    #[error("slice {slice} has non-finite orientation or position")]
    NonFiniteGeometry {
        /// Index of the offending frame.
        slice: usize,
    },
}

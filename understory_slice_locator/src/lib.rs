// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slice_locator --heading-base-level=0

//! Understory Slice Locator: map 3D points onto slices of an image stack.
//!
//! Given a set of reference points (for example the anchor of a measurement)
//! and the spatial metadata of every slice in a stack, this crate finds the
//! index of the slice whose plane contains the point, within a tolerance.
//!
//! - [`ImageOrientation`] splits six direction cosines into row and column
//!   directions; [`ImageOrientation::normal`] and [`slice_normal`] give the
//!   slice normal `row × column`.
//! - [`SpatialFrame`] is the per-slice metadata: a caller-chosen key, the
//!   frame-of-reference UID, the cosines and the slice position.
//! - [`ReferencePoint`] is a point tagged with its frame-of-reference UID.
//! - [`SliceLocator`] performs the matching, configured by [`LocateParams`]
//!   and a [`MatchPolicy`], and reports [`SliceMatch`] cross-reference
//!   records.
//!
//! Frames from another frame of reference are never compared geometrically,
//! however close they are. Not finding a slice is a normal outcome
//! (`Ok(None)`); malformed metadata is a [`LocateError`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_slice_locator::{ReferencePoint, SliceLocator, SpatialFrame};
//!
//! let axial = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
//! let frames = [
//!     SpatialFrame::new("slice-0", "1.2.840.1", &axial, [0.0, 0.0, 0.0]),
//!     SpatialFrame::new("slice-1", "1.2.840.1", &axial, [0.0, 0.0, 3.0]),
//!     SpatialFrame::new("slice-2", "1.2.840.1", &axial, [0.0, 0.0, 6.0]),
//! ];
//!
//! let anchor = ReferencePoint::new([10.0, 20.0, 4.0], "1.2.840.1");
//! let found = SliceLocator::default()
//!     .locate(&[anchor], &frames)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(found.slice, 1);
//! assert_eq!(found.key, "slice-1");
//! ```
//!
//! Diagnostics are emitted through [`tracing`]; no subscriber is installed
//! by this crate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod frame;
mod locator;
mod orientation;

pub use error::LocateError;
pub use frame::{ReferencePoint, SliceMatch, SpatialFrame};
pub use locator::{LocateParams, MatchPolicy, SliceLocator};
pub use orientation::{ImageOrientation, slice_normal};

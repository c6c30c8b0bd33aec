// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-slice spatial metadata, reference points and match records.

use alloc::string::String;

use glam::DVec3;
use smallvec::SmallVec;

/// Spatial metadata of one slice of a stack.
///
/// `K` is the caller's identity for the slice (for example an image
/// identifier, or an image identifier plus frame number for multi-frame
/// objects). It is handed back in [`SliceMatch::key`].
#[derive(Clone, Debug, PartialEq)]
pub struct SpatialFrame<K> {
    /// Caller-chosen identity of the slice.
    pub key: K,
    /// Identifier of the coordinate space the slice lives in.
    pub frame_of_reference_uid: String,
    /// Row direction cosines followed by column direction cosines.
    ///
    /// Well-formed metadata has exactly six components; anything else is
    /// rejected when the frame is scanned.
    pub orientation: SmallVec<[f64; 6]>,
    /// Origin of the slice in patient space.
    pub position: DVec3,
}

impl<K> SpatialFrame<K> {
    /// Creates a frame, copying `orientation` as given.
    pub fn new(
        key: K,
        frame_of_reference_uid: impl Into<String>,
        orientation: &[f64],
        position: impl Into<DVec3>,
    ) -> Self {
        Self {
            key,
            frame_of_reference_uid: frame_of_reference_uid.into(),
            orientation: SmallVec::from_slice(orientation),
            position: position.into(),
        }
    }
}

/// A 3D point captured against a frame of reference, such as a measurement anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferencePoint {
    /// The point in patient space.
    pub position: DVec3,
    /// Identifier of the coordinate space `position` is expressed in.
    pub frame_of_reference_uid: String,
}

impl ReferencePoint {
    /// Creates a reference point.
    pub fn new(position: impl Into<DVec3>, frame_of_reference_uid: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            frame_of_reference_uid: frame_of_reference_uid.into(),
        }
    }

    /// The coordinate compared against a slice's distance along its normal.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.position.z
    }
}

/// Cross-reference from a reference point to the slice it was matched to.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceMatch<K> {
    /// Index of the reference point in the input.
    pub point: usize,
    /// Index of the matched slice in the input.
    pub slice: usize,
    /// Identity of the matched slice, copied from [`SpatialFrame::key`].
    pub key: K,
    /// Signed deviation: the slice's distance along its normal minus the point's `z`.
    pub deviation: f64,
}

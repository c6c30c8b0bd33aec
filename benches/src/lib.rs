// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the Understory prefetch and slice-locator benchmarks.

use understory_slice_locator::{ReferencePoint, SpatialFrame};

/// Frame-of-reference UID used by every fixture.
pub const FRAME_OF_REFERENCE: &str = "1.2.826.0.1.3680043.8.498.1";

/// Direction cosines of an axial slice.
pub const AXIAL: [f64; 6] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0];

/// Image identifiers for a stack of `len` slices.
pub fn image_ids(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("wadors:/series/1/instances/{i}/frames/1")).collect()
}

/// An axial stack of `len` slices spaced `spacing` apart along +Z.
pub fn axial_stack(len: usize, spacing: f64) -> Vec<SpatialFrame<usize>> {
    (0..len)
        .map(|i| {
            SpatialFrame::new(
                i,
                FRAME_OF_REFERENCE,
                &AXIAL,
                [-200.0, -200.0, spacing * i as f64],
            )
        })
        .collect()
}

/// A measurement-style anchor of `points` points located on slice `slice`.
pub fn anchor_on_slice(slice: usize, spacing: f64, points: usize) -> Vec<ReferencePoint> {
    let z = spacing * slice as f64;
    (0..points)
        .map(|i| ReferencePoint::new([i as f64, 2.0 * i as f64, z], FRAME_OF_REFERENCE))
        .collect()
}

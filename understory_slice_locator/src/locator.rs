// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Matching reference points against slice planes.

use alloc::vec::Vec;

use crate::{ImageOrientation, LocateError, ReferencePoint, SliceMatch, SpatialFrame};

/// Parameters for slice matching.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocateParams {
    /// Largest accepted `|distance along normal - z|`, inclusive.
    ///
    /// Expressed in the units of the slice positions (typically millimeters).
    pub tolerance: f64,
}

impl Default for LocateParams {
    fn default() -> Self {
        Self { tolerance: 2.0 }
    }
}

/// Which match [`SliceLocator::locate`] reports when several points match.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MatchPolicy {
    /// Every point is scanned and the last point that matched wins.
    #[default]
    LastMatch,
    /// Scanning stops at the first point that matches.
    FirstMatch,
}

/// Resolves reference points to the index of the slice containing them.
///
/// For each point, frames are scanned in order. Frames whose
/// frame-of-reference UID differs from the point's are skipped without any
/// geometric test. For the others the slice normal `row × column` is
/// computed, and the frame matches when its position projected onto that
/// normal lies within [`LocateParams::tolerance`] of the point's `z`. The
/// first matching frame ends the scan for that point.
///
/// Frames are validated as they are scanned: a candidate frame with
/// malformed cosines or non-finite geometry aborts the call with a
/// [`LocateError`].
///
/// ```rust
/// use understory_slice_locator::{ReferencePoint, SliceLocator, SpatialFrame};
///
/// const AXIAL: [f64; 6] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
/// let frames: Vec<_> = (0..10_u32)
///     .map(|i| SpatialFrame::new(i, "1.2.3", &AXIAL, [0.0, 0.0, 5.0 * f64::from(i)]))
///     .collect();
///
/// let point = ReferencePoint::new([12.0, -3.0, 21.0], "1.2.3");
/// let found = SliceLocator::default().locate(&[point], &frames).unwrap();
/// assert_eq!(found.map(|m| m.slice), Some(4));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliceLocator {
    params: LocateParams,
    policy: MatchPolicy,
}

impl SliceLocator {
    /// Creates a locator with the given parameters and the default policy.
    #[must_use]
    pub fn new(params: LocateParams) -> Self {
        Self {
            params,
            policy: MatchPolicy::default(),
        }
    }

    /// Sets the policy used by [`locate`](Self::locate).
    #[must_use]
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The matching parameters.
    #[must_use]
    pub fn params(&self) -> &LocateParams {
        &self.params
    }

    /// The policy used by [`locate`](Self::locate).
    #[must_use]
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Finds the first frame in `frames` matching `point`.
    ///
    /// `point_index` is only recorded in the returned [`SliceMatch`].
    ///
    /// # Errors
    ///
    /// Returns a [`LocateError`] for the first candidate frame (same
    /// frame of reference, scanned before any match) that is malformed.
    pub fn match_point<K: Clone>(
        &self,
        point_index: usize,
        point: &ReferencePoint,
        frames: &[SpatialFrame<K>],
    ) -> Result<Option<SliceMatch<K>>, LocateError> {
        let z = point.z();
        for (slice, frame) in frames.iter().enumerate() {
            if frame.frame_of_reference_uid != point.frame_of_reference_uid {
                continue;
            }
            let Some(orientation) = ImageOrientation::from_cosines(&frame.orientation) else {
                tracing::debug!(
                    slice,
                    len = frame.orientation.len(),
                    "rejected malformed orientation"
                );
                return Err(LocateError::MalformedOrientation {
                    slice,
                    len: frame.orientation.len(),
                });
            };
            if !orientation.is_finite() || !frame.position.is_finite() {
                tracing::debug!(slice, "rejected non-finite slice geometry");
                return Err(LocateError::NonFiniteGeometry { slice });
            }
            let deviation = orientation.distance_along_normal(frame.position) - z;
            if (-self.params.tolerance..=self.params.tolerance).contains(&deviation) {
                tracing::trace!(point = point_index, slice, deviation, "matched slice");
                return Ok(Some(SliceMatch {
                    point: point_index,
                    slice,
                    key: frame.key.clone(),
                    deviation,
                }));
            }
        }
        Ok(None)
    }

    /// Resolves `points` to a single slice according to the [`MatchPolicy`].
    ///
    /// With [`MatchPolicy::LastMatch`] a later matching point overrides an
    /// earlier one; points without a match leave the result untouched.
    /// Returns `Ok(None)` when no point matches, which is not an error.
    ///
    /// # Errors
    ///
    /// See [`match_point`](Self::match_point).
    pub fn locate<K: Clone>(
        &self,
        points: &[ReferencePoint],
        frames: &[SpatialFrame<K>],
    ) -> Result<Option<SliceMatch<K>>, LocateError> {
        let mut found = None;
        for (index, point) in points.iter().enumerate() {
            if let Some(m) = self.match_point(index, point, frames)? {
                found = Some(m);
                if self.policy == MatchPolicy::FirstMatch {
                    break;
                }
            }
        }
        if found.is_none() {
            tracing::trace!(points = points.len(), frames = frames.len(), "no slice matched");
        }
        Ok(found)
    }

    /// Resolves every point independently, returning one entry per point.
    ///
    /// # Errors
    ///
    /// See [`match_point`](Self::match_point).
    pub fn locate_all<K: Clone>(
        &self,
        points: &[ReferencePoint],
        frames: &[SpatialFrame<K>],
    ) -> Result<Vec<Option<SliceMatch<K>>>, LocateError> {
        points
            .iter()
            .enumerate()
            .map(|(index, point)| self.match_point(index, point, frames))
            .collect()
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image orientation and slice normals.

use glam::DVec3;

/// Row and column direction cosines of an image plane.
///
/// The cosines are taken as given; they are neither normalized nor checked
/// for orthogonality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageOrientation {
    /// Direction of increasing column index along a row.
    pub row: DVec3,
    /// Direction of increasing row index along a column.
    pub column: DVec3,
}

impl ImageOrientation {
    /// Number of direction cosines in a well-formed orientation.
    pub const COSINES: usize = 6;

    /// Creates an orientation from its row and column directions.
    #[must_use]
    pub const fn new(row: DVec3, column: DVec3) -> Self {
        Self { row, column }
    }

    /// Splits six direction cosines into row (`[0..3]`) and column (`[3..6]`) directions.
    ///
    /// Returns `None` unless `cosines` has exactly six components.
    #[must_use]
    pub fn from_cosines(cosines: &[f64]) -> Option<Self> {
        match *cosines {
            [rx, ry, rz, cx, cy, cz] => Some(Self {
                row: DVec3::new(rx, ry, rz),
                column: DVec3::new(cx, cy, cz),
            }),
            _ => None,
        }
    }

    /// The slice normal, `row × column`.
    ///
    /// Its length is the product of the direction lengths times the sine of
    /// the angle between them, so it is only a unit vector for orthonormal
    /// cosines.
    #[must_use]
    pub fn normal(&self) -> DVec3 {
        self.row.cross(self.column)
    }

    /// Projects `position` onto the slice normal.
    #[must_use]
    pub fn distance_along_normal(&self, position: DVec3) -> f64 {
        self.normal().dot(position)
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.row.is_finite() && self.column.is_finite()
    }
}

/// Computes the slice normal directly from six direction cosines.
///
/// Returns `None` unless `cosines` has exactly six components.
///
/// ```rust
/// use glam::DVec3;
/// use understory_slice_locator::slice_normal;
///
/// // Axial slice: rows along +X, columns along +Y.
/// let n = slice_normal(&[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]).unwrap();
/// assert_eq!(n, DVec3::Z);
/// ```
#[must_use]
pub fn slice_normal(cosines: &[f64]) -> Option<DVec3> {
    ImageOrientation::from_cosines(cosines).map(|o| o.normal())
}

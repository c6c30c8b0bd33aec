// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Banded subsampling of a whole stack.
//!
//! Indices `0..len` are partitioned into five priority bands:
//!
//! 1. the first [`head`](BandLayout::head) indices, the last
//!    [`tail`](BandLayout::tail) indices, and the indices strictly inside a
//!    window of [`center_width`](BandLayout::center_width) starting at
//!    `len / 2 - center_width / 2`;
//! 2. remaining indices with `i % stride == stride_offsets[0]`;
//! 3. remaining indices with `i % stride == stride_offsets[1]`;
//! 4. remaining even indices;
//! 5. remaining odd indices.
//!
//! The first matching rule wins, so the bands are disjoint and cover
//! `0..len`. Concatenating them gives dense coverage of the edges and center
//! first, then progressively thinner coverage of the rest, which suits
//! quick-look rendering of a long stack before a full decode.

use alloc::vec::Vec;

/// Parameters for [`Bands::compute`].
///
/// The [`Default`] layout is the one used by [`banded_order`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandLayout {
    /// Number of leading indices placed in the first band.
    pub head: usize,
    /// Number of trailing indices placed in the first band.
    pub tail: usize,
    /// Width of the center window.
    ///
    /// The window starts at `len / 2 - center_width / 2` and only indices
    /// strictly after its start and strictly before its end are included.
    pub center_width: usize,
    /// Stride of the second and third bands. A stride of zero disables both.
    pub stride: usize,
    /// Residues selecting the second and third bands.
    pub stride_offsets: [usize; 2],
}

impl Default for BandLayout {
    fn default() -> Self {
        Self {
            head: 2,
            tail: 3,
            center_width: 6,
            stride: 7,
            stride_offsets: [2, 5],
        }
    }
}

impl BandLayout {
    /// Returns the band (`0..Bands::COUNT`) that `index` falls in for a stack of `len`.
    #[must_use]
    pub fn band_of(&self, index: usize, len: usize) -> usize {
        if self.is_edge_or_center(index, len) {
            0
        } else if index.checked_rem(self.stride) == Some(self.stride_offsets[0]) {
            1
        } else if index.checked_rem(self.stride) == Some(self.stride_offsets[1]) {
            2
        } else {
            3 + index % 2
        }
    }

    fn is_edge_or_center(&self, index: usize, len: usize) -> bool {
        if index < self.head || index.saturating_add(self.tail) >= len {
            return true;
        }
        // `index > mid - half && index < mid - half + width`, kept unsigned.
        let mid = len / 2;
        let shifted = index.saturating_add(self.center_width / 2);
        shifted > mid && shifted < mid.saturating_add(self.center_width)
    }
}

/// The five priority bands of a stack, each in ascending index order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bands {
    bands: [Vec<usize>; Self::COUNT],
}

impl Bands {
    /// Number of bands.
    pub const COUNT: usize = 5;

    /// Partitions `0..len` according to `layout`.
    #[must_use]
    pub fn compute(len: usize, layout: &BandLayout) -> Self {
        let mut bands: [Vec<usize>; Self::COUNT] = core::array::from_fn(|_| Vec::new());
        for index in 0..len {
            bands[layout.band_of(index, len)].push(index);
        }
        tracing::trace!(
            len,
            edges_and_center = bands[0].len(),
            first_stride = bands[1].len(),
            second_stride = bands[2].len(),
            "partitioned stack into bands"
        );
        Self { bands }
    }

    /// Indices of band `tier`, or an empty slice if `tier >= Bands::COUNT`.
    #[must_use]
    pub fn band(&self, tier: usize) -> &[usize] {
        self.bands.get(tier).map(Vec::as_slice).unwrap_or_default()
    }

    /// All bands in priority order.
    #[must_use]
    pub fn as_slices(&self) -> [&[usize]; Self::COUNT] {
        self.bands.each_ref().map(Vec::as_slice)
    }

    /// Total number of indices across all bands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bands.iter().map(Vec::len).sum()
    }

    /// Returns `true` if every band is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bands.iter().all(Vec::is_empty)
    }

    /// Consumes the bands, returning them as separate lists.
    ///
    /// Useful together with [`round_robin`](crate::round_robin) when bands
    /// should be interleaved rather than visited one after another.
    #[must_use]
    pub fn into_lists(self) -> [Vec<usize>; Self::COUNT] {
        self.bands
    }

    /// Concatenates the bands in priority order.
    #[must_use]
    pub fn concat(self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.len());
        for band in self.bands {
            out.extend(band);
        }
        out
    }
}

/// Returns the banded subsampling order of `0..len` with the default layout.
///
/// ```rust
/// use understory_prefetch::banded_order;
///
/// let order = banded_order(20);
/// // Edges and the center window come first.
/// assert_eq!(&order[..8], &[0, 1, 8, 9, 10, 11, 12, 17]);
/// assert_eq!(order.len(), 20);
/// ```
#[must_use]
pub fn banded_order(len: usize) -> Vec<usize> {
    Bands::compute(len, &BandLayout::default()).concat()
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strategy selection and plan construction.

use alloc::vec::Vec;

use crate::{
    BandLayout, Bands, Expansion, OrderedPlan, PrefetchEntry, PrefetchError, RoundRobin,
    center_order,
};

/// How a single series is ordered for prefetching.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrefetchStrategy {
    /// Expand outward from `focal`, lower neighbor first.
    Expand {
        /// The index currently being viewed.
        focal: usize,
    },
    /// Expand outward from the middle of the series.
    #[default]
    Center,
    /// Visit the bands of a [`BandLayout`] one after another.
    Banded,
    /// Visit from the last index down to the first.
    TopToBottom,
    /// Visit from the first index up to the last.
    BottomToTop,
}

impl PrefetchStrategy {
    /// Short, stable name suitable for logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Expand { .. } => "expand",
            Self::Center => "center",
            Self::Banded => "banded",
            Self::TopToBottom => "top-to-bottom",
            Self::BottomToTop => "bottom-to-top",
        }
    }
}

/// An entry of a multi-series plan built by [`PrefetchScheduler::plan_series`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeriesEntry<T> {
    /// Position of the series in the input slice.
    pub series: usize,
    /// The item and its index within that series.
    pub entry: PrefetchEntry<T>,
}

/// Computes prefetch plans for one or more ordered series.
///
/// A scheduler is a small value: hosts typically keep one per viewport, call
/// [`focus`](Self::focus) when the user jumps to a slice and then ask for a
/// fresh [`plan`](Self::plan). Nothing is cached between calls.
///
/// ```rust
/// use understory_prefetch::{PrefetchScheduler, PrefetchStrategy};
///
/// let ids = ["img-0", "img-1", "img-2", "img-3", "img-4"];
/// let mut scheduler = PrefetchScheduler::new(PrefetchStrategy::Center);
/// scheduler.focus(1);
///
/// let plan = scheduler.plan(&ids).unwrap();
/// assert_eq!(plan.indices().collect::<Vec<_>>(), [1, 0, 2, 3, 4]);
/// assert_eq!(plan.first().unwrap().item, "img-1");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefetchScheduler {
    strategy: PrefetchStrategy,
    layout: BandLayout,
}

impl PrefetchScheduler {
    /// Creates a scheduler using `strategy` and the default [`BandLayout`].
    #[must_use]
    pub fn new(strategy: PrefetchStrategy) -> Self {
        Self {
            strategy,
            layout: BandLayout::default(),
        }
    }

    /// Replaces the band layout used by [`PrefetchStrategy::Banded`].
    #[must_use]
    pub fn with_layout(mut self, layout: BandLayout) -> Self {
        self.layout = layout;
        self
    }

    /// The active strategy.
    #[must_use]
    pub fn strategy(&self) -> PrefetchStrategy {
        self.strategy
    }

    /// Sets the active strategy.
    pub fn set_strategy(&mut self, strategy: PrefetchStrategy) {
        self.strategy = strategy;
    }

    /// The band layout.
    #[must_use]
    pub fn layout(&self) -> &BandLayout {
        &self.layout
    }

    /// Switches to [`PrefetchStrategy::Expand`] around `focal`.
    ///
    /// The focal index is validated when a plan is requested, against the
    /// length of the series being planned.
    pub fn focus(&mut self, focal: usize) {
        self.strategy = PrefetchStrategy::Expand { focal };
    }

    /// Returns the visiting order of `0..len` under the active strategy.
    ///
    /// # Errors
    ///
    /// Returns [`PrefetchError::FocalOutOfBounds`] for an
    /// [`Expand`](PrefetchStrategy::Expand) strategy whose focal index is not
    /// in `0..len` (an empty series is never an error).
    pub fn order(&self, len: usize) -> Result<Vec<usize>, PrefetchError> {
        let order: Vec<usize> = match self.strategy {
            PrefetchStrategy::Expand { focal } => Expansion::new(len, focal)?.collect(),
            PrefetchStrategy::Center => center_order(len),
            PrefetchStrategy::Banded => Bands::compute(len, &self.layout).concat(),
            PrefetchStrategy::TopToBottom => (0..len).rev().collect(),
            PrefetchStrategy::BottomToTop => (0..len).collect(),
        };
        tracing::trace!(len, strategy = self.strategy.name(), "computed prefetch order");
        Ok(order)
    }

    /// Builds the prefetch plan for `items`.
    ///
    /// # Errors
    ///
    /// See [`order`](Self::order).
    pub fn plan<T: Clone>(&self, items: &[T]) -> Result<OrderedPlan<T>, PrefetchError> {
        let order = self.order(items.len())?;
        Ok(OrderedPlan::from_order(items, order))
    }

    /// Builds one plan per series and merges them round-robin.
    ///
    /// This suits viewports that show several series at once (for example a
    /// fused pair of volumes): the `k`-th most important slice of every
    /// series is fetched before the `(k + 1)`-th of any. Empty series
    /// contribute nothing.
    ///
    /// # Errors
    ///
    /// Fails if the strategy is invalid for any non-empty series; see
    /// [`order`](Self::order).
    pub fn plan_series<T: Clone>(
        &self,
        series: &[&[T]],
    ) -> Result<Vec<SeriesEntry<T>>, PrefetchError> {
        let plans = series
            .iter()
            .enumerate()
            .map(|(series_index, items)| {
                self.plan(items).map(|plan| {
                    plan.into_iter().map(move |entry| SeriesEntry {
                        series: series_index,
                        entry,
                    })
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let total: usize = series.iter().map(|items| items.len()).sum();
        let mut out = Vec::with_capacity(total);
        out.extend(RoundRobin::new(plans));
        tracing::trace!(
            series = series.len(),
            total,
            strategy = self.strategy.name(),
            "computed multi-series prefetch plan"
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::{PrefetchScheduler, PrefetchStrategy};
    use crate::{BandLayout, PrefetchError};
    use alloc::vec::Vec;

    #[test]
    fn linear_strategies() {
        let top = PrefetchScheduler::new(PrefetchStrategy::TopToBottom);
        assert_eq!(top.order(4).unwrap(), [3, 2, 1, 0]);
        let bottom = PrefetchScheduler::new(PrefetchStrategy::BottomToTop);
        assert_eq!(bottom.order(4).unwrap(), [0, 1, 2, 3]);
    }

    #[test]
    fn focus_switches_to_expansion() {
        let mut scheduler = PrefetchScheduler::default();
        assert_eq!(scheduler.strategy(), PrefetchStrategy::Center);
        scheduler.focus(0);
        assert_eq!(scheduler.strategy(), PrefetchStrategy::Expand { focal: 0 });
        assert_eq!(scheduler.order(3).unwrap(), [0, 1, 2]);
    }

    #[test]
    fn focal_is_checked_per_series() {
        let mut scheduler = PrefetchScheduler::default();
        scheduler.focus(2);
        let long: &[u8] = &[0; 4];
        let short: &[u8] = &[0; 2];
        let empty: &[u8] = &[];
        assert_eq!(
            scheduler.plan_series(&[long, short]),
            Err(PrefetchError::FocalOutOfBounds { focal: 2, len: 2 })
        );
        // Empty series are skipped rather than rejected.
        assert_eq!(scheduler.plan_series(&[long, empty]).unwrap().len(), 4);
    }

    #[test]
    fn custom_layout_is_used_for_banded() {
        let layout = BandLayout {
            head: 0,
            tail: 0,
            center_width: 0,
            stride: 0,
            stride_offsets: [0, 0],
        };
        let scheduler = PrefetchScheduler::new(PrefetchStrategy::Banded).with_layout(layout);
        // Only the parity bands remain.
        assert_eq!(scheduler.order(6).unwrap(), [0, 2, 4, 1, 3, 5]);
        assert_eq!(scheduler.layout(), &layout);
    }

    #[test]
    fn plan_maps_back_to_items() {
        let scheduler = PrefetchScheduler::new(PrefetchStrategy::Expand { focal: 1 });
        let plan = scheduler.plan(&['a', 'b', 'c']).unwrap();
        let pairs: Vec<_> = plan.iter().map(|e| (e.item, e.index)).collect();
        assert_eq!(pairs, [('b', 1), ('a', 0), ('c', 2)]);
    }
}

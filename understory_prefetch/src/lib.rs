// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_prefetch --heading-base-level=0

//! Understory Prefetch: visiting orders for large ordered image stacks.
//!
//! Given a stack of `len` items (typically the image identifiers of a
//! volumetric series), this crate decides in which order the items should be
//! fetched, decoded, or rendered. It never fetches anything itself.
//!
//! The building blocks are:
//!
//! - [`expand_order`] / [`Expansion`]: expand outward from a focal index,
//!   alternating below and above, so slices near the current view arrive
//!   first while scrubbing.
//! - [`banded_order`] / [`Bands`]: partition a whole stack into five priority
//!   bands (edges and center, two stride bands, two parity bands) for
//!   quick-look coverage before a full decode. [`BandLayout`] holds the band
//!   parameters.
//! - [`round_robin`] / [`RoundRobin`]: merge several ordered lists
//!   breadth-first, so every list gets its `k`-th item in before any list gets
//!   its `(k + 1)`-th.
//! - [`PrefetchScheduler`]: selects a [`PrefetchStrategy`] and turns orders
//!   into [`OrderedPlan`]s of `(item, index)` [`PrefetchEntry`] pairs, for one
//!   series or, round-robin merged, for several.
//!
//! All functions are pure: they allocate local working storage only, keep no
//! state between calls and are safe to call from many threads at once.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_prefetch::{PrefetchScheduler, PrefetchStrategy, expand_order};
//!
//! // Index-level: 7 slices, viewing slice 3.
//! assert_eq!(expand_order(7, 3).unwrap(), [3, 2, 4, 1, 5, 0, 6]);
//!
//! // Item-level: map the order back onto image identifiers.
//! let ids = ["a", "b", "c", "d"];
//! let scheduler = PrefetchScheduler::new(PrefetchStrategy::Expand { focal: 2 });
//! let plan = scheduler.plan(&ids).unwrap();
//! let visited: Vec<_> = plan.items().copied().collect();
//! assert_eq!(visited, ["c", "b", "d", "a"]);
//! ```
//!
//! An out-of-range focal index is reported as
//! [`PrefetchError::FocalOutOfBounds`] rather than clamped. Empty stacks are
//! not an error and produce empty plans.
//!
//! Diagnostics are emitted through [`tracing`] at `trace` and `debug` level;
//! no subscriber is installed by this crate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod banded;
mod error;
mod expand;
mod merge;
mod plan;
mod scheduler;

pub use banded::{BandLayout, Bands, banded_order};
pub use error::PrefetchError;
pub use expand::{Expansion, center_order, expand_order};
pub use merge::{RoundRobin, round_robin};
pub use plan::{OrderedPlan, PrefetchEntry};
pub use scheduler::{PrefetchScheduler, PrefetchStrategy, SeriesEntry};

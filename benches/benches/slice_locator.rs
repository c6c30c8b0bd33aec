// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_benches::{anchor_on_slice, axial_stack};
use understory_slice_locator::{MatchPolicy, SliceLocator};

const SPACING: f64 = 1.25;

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice_locator/locate");

    // The anchor sits on the last slice so every frame is scanned.
    for len in [128usize, 512, 2_048] {
        let frames = axial_stack(len, SPACING);
        let anchor = anchor_on_slice(len - 1, SPACING, 4);
        group.throughput(Throughput::Elements(len as u64));

        let last = SliceLocator::default();
        group.bench_with_input(BenchmarkId::new("last_match", len), &frames, |b, frames| {
            b.iter(|| black_box(last.locate(&anchor, frames)));
        });

        let first = SliceLocator::default().with_policy(MatchPolicy::FirstMatch);
        group.bench_with_input(BenchmarkId::new("first_match", len), &frames, |b, frames| {
            b.iter(|| black_box(first.locate(&anchor, frames)));
        });

        group.bench_with_input(BenchmarkId::new("locate_all", len), &frames, |b, frames| {
            b.iter(|| black_box(last.locate_all(&anchor, frames)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_locate);
criterion_main!(benches);

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_benches::image_ids;
use understory_prefetch::{
    PrefetchScheduler, PrefetchStrategy, banded_order, expand_order, round_robin,
};

const STACK_SIZES: [usize; 4] = [128, 512, 2_048, 8_192];

fn bench_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefetch/order");

    for len in STACK_SIZES {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("expand", len), &len, |b, &len| {
            b.iter(|| black_box(expand_order(len, len / 3)));
        });

        group.bench_with_input(BenchmarkId::new("banded", len), &len, |b, &len| {
            b.iter(|| black_box(banded_order(len)));
        });
    }

    group.finish();
}

fn bench_round_robin(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefetch/round_robin");

    // Equal-length lists are the common case (one list per band or series);
    // many short lists stress removal of exhausted lists.
    for (lists, len) in [(2usize, 4_096usize), (5, 1_024), (1_024, 4), (4_096, 1)] {
        let input: Vec<Vec<usize>> = (0..lists)
            .map(|j| (0..len).map(|i| j * len + i).collect())
            .collect();
        group.throughput(Throughput::Elements((lists * len) as u64));

        group.bench_with_input(
            BenchmarkId::new(format!("{lists}x"), len),
            &input,
            |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |lists| black_box(round_robin(lists)),
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_plans(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefetch/plan");

    for len in STACK_SIZES {
        let ids = image_ids(len);
        let other = image_ids(len / 2);
        group.throughput(Throughput::Elements(len as u64));

        let mut scheduler = PrefetchScheduler::default();
        scheduler.focus(len / 2);
        group.bench_with_input(BenchmarkId::new("single", len), &ids, |b, ids| {
            b.iter(|| black_box(scheduler.plan(ids)));
        });

        let center = PrefetchScheduler::new(PrefetchStrategy::Center);
        group.bench_with_input(
            BenchmarkId::new("two_series", len),
            &(ids.as_slice(), other.as_slice()),
            |b, &(ids, other)| {
                b.iter(|| black_box(center.plan_series(&[ids, other])));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_orders, bench_round_robin, bench_plans);
criterion_main!(benches);

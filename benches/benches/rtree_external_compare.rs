// Copyright 2025 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rectree::{Rect, Space};

use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{AABB, RTree};

type Entry = GeomWithData<Rectangle<[i32; 2]>, u32>;

fn gen_grid_rects(n: i32, cell: i32) -> Vec<Rect> {
    let mut out = Vec::with_capacity((n * n) as usize);
    for y in 0..n {
        for x in 0..n {
            out.push(Rect::new(x * cell, y * cell, cell, cell));
        }
    }
    out
}

fn to_rstar(r: Rect) -> Rectangle<[i32; 2]> {
    Rectangle::from_corners([r.x, r.y], [r.max_x(), r.max_y()])
}

fn to_rstar_entries(v: &[Rect]) -> Vec<Entry> {
    v.iter()
        .enumerate()
        .map(|(i, r)| GeomWithData::new(to_rstar(*r), i as u32))
        .collect()
}

fn bench_rtree_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare");
    for &n in &[64, 128] {
        let rects = gen_grid_rects(n, 10);
        let window = Rect::new(100, 100, 400, 400);
        let envelope = AABB::from_corners([window.x, window.y], [window.max_x(), window.max_y()]);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("rectree_insert_query_n{}", n), |b| {
            b.iter_batched(
                rectree::RTree::<u32>::default,
                |mut tree| {
                    for (i, r) in rects.iter().copied().enumerate() {
                        tree.add(i as u32, r);
                    }
                    let hits: usize = tree.filter_rect(window).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_insert_query_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_entries(&rects),
                |entries| {
                    let mut tree = RTree::new();
                    for e in entries {
                        tree.insert(e);
                    }
                    let hits: usize = tree.locate_in_envelope_intersecting(&envelope).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_bulk_query_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_entries(&rects),
                |entries| {
                    let tree = RTree::bulk_load(entries);
                    let hits: usize = tree.locate_in_envelope_intersecting(&envelope).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare);
criterion_main!(benches);

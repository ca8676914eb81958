// Copyright 2025 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rectree::{FlatList, RTree, Rect, Space};

fn gen_grid_rects(n: i32, cell: i32) -> Vec<Rect> {
    let mut out = Vec::with_capacity((n * n) as usize);
    for y in 0..n {
        for x in 0..n {
            out.push(Rect::new(x * cell, y * cell, cell, cell));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, bound: i32) -> i32 {
        (self.next_u64() % bound as u64) as i32
    }
}

fn gen_random_rects(count: usize, extent: i32, size: i32) -> Vec<Rect> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Rect::new(rng.below(extent - size), rng.below(extent - size), size, size))
        .collect()
}

fn gen_clustered_rects(n_clusters: usize, per_cluster: usize, spread: i32) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let centers: Vec<_> = (0..n_clusters)
        .map(|_| (rng.below(2000), rng.below(2000)))
        .collect();
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = rng.below(spread) - spread / 2;
            let dy = rng.below(spread) - spread / 2;
            out.push(Rect::new(cx + dx, cy + dy, 12, 12));
        }
    }
    out
}

fn fill<S: Space<u32>>(space: &mut S, rects: &[Rect]) {
    for (i, r) in rects.iter().copied().enumerate() {
        space.add(i as u32, r);
    }
}

fn bench_flatlist(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatlist");
    for &n in &[32, 64] {
        let rects = gen_grid_rects(n, 10);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("insert_query_n{}", n), |b| {
            b.iter_batched(
                FlatList::<u32>::new,
                |mut list| {
                    fill(&mut list, &rects);
                    let hits: usize = list.filter_rect(Rect::new(100, 100, 400, 400)).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_rtree(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree");
    for &n in &[32, 64, 128] {
        let rects = gen_grid_rects(n, 10);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("insert_query_n{}", n), |b| {
            b.iter_batched(
                RTree::<u32>::default,
                |mut tree| {
                    fill(&mut tree, &rects);
                    let hits: usize = tree.filter_rect(Rect::new(100, 100, 400, 400)).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    let rects = gen_random_rects(4096, 2000, 12);
    group.bench_function("insert_query_random", |b| {
        b.iter_batched(
            RTree::<u32>::default,
            |mut tree| {
                fill(&mut tree, &rects);
                let hits: usize = tree.filter_rect(Rect::new(800, 800, 400, 400)).count();
                black_box(hits);
            },
            BatchSize::SmallInput,
        )
    });
    let rects = gen_clustered_rects(16, 256, 200);
    group.bench_function("insert_query_clustered", |b| {
        b.iter_batched(
            RTree::<u32>::default,
            |mut tree| {
                fill(&mut tree, &rects);
                let hits: usize = tree.filter_rect(Rect::new(800, 800, 400, 400)).count();
                black_box(hits);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_rtree_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_fanout");
    let rects = gen_random_rects(4096, 2000, 12);
    for &fanout in &[4usize, 8, 16, 32] {
        group.bench_function(format!("insert_query_b{}", fanout), |b| {
            b.iter_batched(
                || RTree::<u32>::with_fanout(fanout),
                |mut tree| {
                    fill(&mut tree, &rects);
                    let hits: usize = tree.filter_rect(Rect::new(800, 800, 400, 400)).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_update_heavy_rtree(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_update_heavy");
    let rects = gen_grid_rects(64, 10);
    group.bench_function("set_small_moves", |b| {
        b.iter_batched(
            || {
                let mut tree = RTree::<u32>::default();
                fill(&mut tree, &rects);
                tree
            },
            |mut tree| {
                for (j, r) in rects.iter().copied().enumerate() {
                    let dx = (j as i32 % 5) - 2;
                    let dy = ((j * 7) as i32 % 5) - 2;
                    let moved = Rect::new(r.x + dx, r.y + dy, r.width, r.height);
                    black_box(tree.set(&(j as u32), r, moved));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("remove_all", |b| {
        b.iter_batched(
            || {
                let mut tree = RTree::<u32>::default();
                fill(&mut tree, &rects);
                tree
            },
            |mut tree| {
                for (j, r) in rects.iter().copied().enumerate() {
                    black_box(tree.remove(&(j as u32), r));
                }
                assert!(tree.is_empty());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_query_heavy_rtree(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_query_heavy");
    let rects = gen_grid_rects(128, 8);
    let mut tree = RTree::<u32>::default();
    fill(&mut tree, &rects);
    group.bench_function("many_window_queries", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for q in 0..256 {
                let x = (q % 64) * 8;
                let y = (q / 64) * 8;
                total += tree.filter_rect(Rect::new(x, y, 64, 64)).count();
            }
            black_box(total);
        })
    });
    group.bench_function("many_point_queries", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for q in 0..256 {
                let p = rectree::Point::new((q % 64) * 16 + 3, (q / 64) * 16 + 3);
                total += tree.filter_point(p).count();
            }
            black_box(total);
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_flatlist,
    bench_rtree,
    bench_rtree_fanout,
    bench_update_heavy_rtree,
    bench_query_heavy_rtree
);
criterion_main!(benches);

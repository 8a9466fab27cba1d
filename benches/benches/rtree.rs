// Copyright 2026 the Spacefill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use spacefill_rtree::{Bounding, Options, OverlapKeeper, Tree};

fn grid_boxes(n: usize, cell: f64) -> Vec<Bounding> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Bounding::new(&[x0, y0], &[x0 + cell, y0 + cell]));
        }
    }
    out
}

fn build_tree(boxes: &[Bounding], fill_level: usize) -> Tree<Bounding> {
    let mut tree = Tree::with_options(Options {
        fill_level,
        pivot: None,
    });
    for b in boxes {
        tree.insert(b.clone()).unwrap();
    }
    tree
}

fn bench_build_and_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_build_query");
    for &n in &[32usize, 64] {
        let mut boxes = grid_boxes(n, 10.0);
        let mut rng = rand::rngs::StdRng::seed_from_u64(95756739);
        boxes.shuffle(&mut rng);
        let query = Bounding::new(&[100.0, 100.0], &[500.0, 500.0]);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("build_n{n}"), |b| {
            b.iter_batched(
                || boxes.clone(),
                |boxes| black_box(build_tree(&boxes, 4)),
                BatchSize::SmallInput,
            )
        });

        let tree = build_tree(&boxes, 4);
        group.bench_function(format!("query_n{n}"), |b| {
            b.iter(|| {
                let mut keeper = OverlapKeeper::new(query.clone());
                tree.search(&mut keeper);
                black_box(keeper.items.len())
            })
        });
    }
    group.finish();
}

fn bench_fill_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_fill_level");
    let mut boxes = grid_boxes(48, 10.0);
    let mut rng = rand::rngs::StdRng::seed_from_u64(95756739);
    boxes.shuffle(&mut rng);
    let query = Bounding::new(&[100.0, 100.0], &[250.0, 250.0]);

    for &fill_level in &[2usize, 4, 8] {
        let tree = build_tree(&boxes, fill_level);
        group.bench_function(format!("query_fill{fill_level}"), |b| {
            b.iter(|| {
                let mut keeper = OverlapKeeper::new(query.clone());
                tree.search(&mut keeper);
                black_box(keeper.items.len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_and_query, bench_fill_levels);
criterion_main!(benches);

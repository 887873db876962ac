// Copyright 2025 the Poissonate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental indexes against rebuilding a packed R-tree after every acceptance.

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use poisson_disc::{Sampler, SamplerConfig};
use poisson_index::Index;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};

use rstar::RTree;

fn unit(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64
}

/// Same loop as the sampler, but the index is bulk-loaded from scratch after each acceptance.
fn sample_with_rebuild(config: SamplerConfig, seed: u64) -> usize {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let first = Point::new(config.width * unit(&mut rng), config.height * unit(&mut rng));
    let mut samples = vec![first];
    let mut queue = vec![first];
    let mut tree = RTree::bulk_load(vec![[first.x, first.y]]);
    let r2 = config.radius * config.radius;

    while !queue.is_empty() {
        let pick = (rng.next_u64() % queue.len() as u64) as usize;
        let parent = queue.swap_remove(pick);
        for _ in 0..config.num_samples {
            let angle = std::f64::consts::TAU * unit(&mut rng);
            let distance = config.radius * (unit(&mut rng) + 1.0);
            let c = parent + distance * Vec2::from_angle(angle);
            if !(0.0..config.width).contains(&c.x) || !(0.0..config.height).contains(&c.y) {
                continue;
            }
            if tree.locate_within_distance([c.x, c.y], r2).next().is_some() {
                continue;
            }
            samples.push(c);
            queue.push(c);
            tree = RTree::bulk_load(samples.iter().map(|p| [p.x, p.y]).collect());
        }
    }
    samples.len()
}

fn bench_rebuild_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild_compare");
    group.sample_size(10);
    for &radius in &[8.0f64, 4.0] {
        let config = SamplerConfig::new(200.0, 200.0, radius).with_num_samples(10);

        group.bench_function(format!("rstar_rebuild_r{}", radius), |b| {
            b.iter(|| black_box(sample_with_rebuild(config, 3)))
        });

        group.bench_function(format!("rstar_incremental_r{}", radius), |b| {
            b.iter_batched(
                || {
                    Sampler::with_index(config, ChaCha8Rng::seed_from_u64(3), Index::with_rtree())
                        .unwrap()
                },
                |mut s| black_box(s.generate_samples().len()),
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("grid_incremental_r{}", radius), |b| {
            b.iter_batched(
                || Sampler::seeded(config, 3).unwrap(),
                |mut s| black_box(s.generate_samples().len()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rebuild_compare);
criterion_main!(benches);

// Copyright 2025 the Poissonate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use poisson_disc::{Sampler, SamplerConfig};
use poisson_index::{Index, IndexGeneric};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

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
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize, size: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * size, rng.next_f64() * size))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let (cx, cy) = (
            spread + rng.next_f64() * (1000.0 - 2.0 * spread),
            spread + rng.next_f64() * (1000.0 - 2.0 * spread),
        );
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn queries(count: usize, size: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * size, rng.next_f64() * size))
        .collect()
}

fn insert_commit_query<B: poisson_index::Backend>(
    mut idx: IndexGeneric<B>,
    points: &[Point],
    probes: &[Point],
    radius: f64,
) -> usize {
    for &p in points {
        let _ = idx.insert(p);
    }
    let _ = idx.commit();
    probes.iter().filter(|&&q| idx.any_within(q, radius)).count()
}

fn bench_flatvec(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatvec");
    let probes = queries(256, 1000.0);
    for &n in &[256usize, 1024, 4096] {
        let points = gen_random_points(n, 1000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("insert_commit_query_n{}", n), |b| {
            b.iter_batched(
                Index::new,
                |idx| black_box(insert_commit_query(idx, &points, &probes, 8.0)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    let probes = queries(256, 1000.0);
    for &n in &[256usize, 1024, 4096] {
        let points = gen_random_points(n, 1000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("insert_commit_query_n{}", n), |b| {
            b.iter_batched(
                || Index::with_uniform_grid(8.0, 125, 125),
                |idx| black_box(insert_commit_query(idx, &points, &probes, 8.0)),
                BatchSize::SmallInput,
            )
        });
    }
    let points = gen_clustered_points(16, 256, 64.0);
    group.bench_function("insert_commit_query_clustered", |b| {
        b.iter_batched(
            || Index::with_uniform_grid(8.0, 125, 125),
            |idx| black_box(insert_commit_query(idx, &points, &probes, 8.0)),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampler");
    for &radius in &[4.0f64, 2.0] {
        let config = SamplerConfig::new(200.0, 200.0, radius).with_num_samples(10);
        group.bench_function(format!("grid_r{}", radius), |b| {
            b.iter_batched(
                || Sampler::seeded(config, 1).unwrap(),
                |mut s| black_box(s.generate_samples().len()),
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("flatvec_r{}", radius), |b| {
            b.iter_batched(
                || Sampler::with_index(config, ChaCha8Rng::seed_from_u64(1), Index::new()).unwrap(),
                |mut s| black_box(s.generate_samples().len()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flatvec, bench_grid, bench_sampler);
criterion_main!(benches);

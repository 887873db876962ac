// Copyright 2025 the Poissonate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend comparison.
//!
//! Run the same seeded sampler over the flat and grid index backends, check
//! that they accept the same points, and print how long each took.
//!
//! Run:
//! - `cargo run -p poisson_demos --example backend_compare`

use std::time::Instant;

use poisson_disc::{Sampler, SamplerConfig};
use poisson_index::Index;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    env_logger::init();

    let config = SamplerConfig::new(120.0, 80.0, 2.0).with_num_samples(12);

    let start = Instant::now();
    let grid = Sampler::seeded(config, 7)
        .expect("config is valid")
        .generate_samples();
    let grid_time = start.elapsed();

    let start = Instant::now();
    let flat = Sampler::with_index(config, ChaCha8Rng::seed_from_u64(7), Index::new())
        .expect("config is valid")
        .generate_samples();
    let flat_time = start.elapsed();

    println!("grid: {} samples in {grid_time:?}", grid.len());
    println!("flat: {} samples in {flat_time:?}", flat.len());
    assert_eq!(grid, flat, "backends should accept the same candidates");
}

// Copyright 2025 the Poissonate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sampling basics.
//!
//! Seed a sampler, generate a point set, and report spacing and counters.
//! Set `RUST_LOG=debug` to see the sampler's own summary.
//!
//! Run:
//! - `cargo run -p poisson_demos --example sampling_basics`

use poisson_disc::{Sampler, SamplerConfig};

fn main() {
    env_logger::init();

    let config = SamplerConfig::new(100.0, 100.0, 5.0).with_num_samples(10);
    let mut sampler = Sampler::seeded(config, 42).expect("config is valid");
    let points = sampler.generate_samples();

    let mut closest = f64::INFINITY;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            closest = closest.min((*a - *b).hypot());
        }
    }

    println!("samples: {}", points.len());
    println!("closest pair: {closest:.3} (radius {})", config.radius);
    println!("stats: {:?}", sampler.stats());
    println!("first five: {:?}", &points[..points.len().min(5)]);
    assert!(closest > config.radius, "minimum distance violated");
}

// Copyright 2025 the Poissonate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=poisson_disc --heading-base-level=0

//! Poisson Disc: Bridson-style blue-noise sampling over a rectangle.
//!
//! The sampler fills `[0, width) × [0, height)` with points such that no two
//! points are within `radius` of each other, packing them as densely as that
//! rule allows.
//!
//! - Seeds one uniformly random point, then grows from an active queue.
//! - Each active point, picked uniformly at random, spawns `num_samples`
//!   candidates in the annulus `[radius, 2 * radius)` around it.
//! - A candidate is kept when it lies in the domain and no existing sample is
//!   within `radius`; the check runs against a [`poisson_index`] spatial index.
//!
//! Randomness comes from a generator the sampler owns, so runs are reproducible
//! from a seed and independent samplers share no state.
//!
//! # Example
//!
//! ```rust
//! use poisson_disc::{Sampler, SamplerConfig};
//!
//! let config = SamplerConfig::new(100.0, 100.0, 5.0).with_num_samples(10);
//! let mut sampler = Sampler::seeded(config, 42).unwrap();
//! let points = sampler.generate_samples();
//!
//! assert!(!points.is_empty());
//! for (i, a) in points.iter().enumerate() {
//!     for b in &points[i + 1..] {
//!         assert!((*a - *b).hypot() > 5.0);
//!     }
//! }
//! ```
//!
//! Any [`rand::Rng`] works as the random source:
//!
//! ```rust
//! use poisson_disc::{SamplerConfig, generate};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let points = generate(SamplerConfig::new(10.0, 10.0, 1.0), ChaCha8Rng::seed_from_u64(7)).unwrap();
//! assert!(points.len() > 1);
//! ```
//!
//! ## Choosing an index backend
//!
//! [`Sampler::new`] uses the grid backend sized to the background grid, which keeps
//! each acceptance test local. [`Sampler::with_index`] accepts any
//! [`poisson_index::IndexGeneric`]; every backend answers the same closed-disc
//! query, so the same random stream yields the same points whatever the backend.
//!
//! ## Errors
//!
//! Non-positive or non-finite extents and radii, a zero candidate budget, and
//! grids too large to address are rejected up front with [`SamplerError`].
//! A radius larger than the domain is not an error; it yields the seed alone.
//!
//! ## Logging
//!
//! Construction and run summaries are emitted at `debug` level through the
//! [`log`] facade, each acceptance at `trace`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod grid;
pub mod sampler;

pub use config::{DEFAULT_NUM_SAMPLES, SamplerConfig};
pub use error::SamplerError;
pub use grid::{BackgroundGrid, GridLayout};
pub use kurbo::Point;
pub use sampler::{RunStats, Sampler};

use alloc::vec::Vec;

/// Run a grid-backed sampler once with the given generator.
pub fn generate<R: rand::Rng>(
    config: SamplerConfig,
    rng: R,
) -> Result<Vec<Point>, SamplerError> {
    Ok(Sampler::new(config, rng)?.generate_samples())
}

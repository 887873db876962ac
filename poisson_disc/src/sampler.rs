// Copyright 2025 the Poissonate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sampler: active queue, annulus candidates, and the acceptance test.

use alloc::vec::Vec;
use core::f64::consts::TAU;

use kurbo::{Point, Vec2};
use poisson_index::{Backend, GridF64, Index, IndexGeneric};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::SamplerConfig;
use crate::error::SamplerError;
use crate::grid::BackgroundGrid;

/// Counters from the most recent [`Sampler::generate_samples`] run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Points accepted, seed included.
    pub accepted: usize,
    /// Candidates generated around active points.
    pub candidates: usize,
    /// Candidates rejected for leaving the domain.
    pub out_of_bounds: usize,
    /// Candidates rejected for crowding an existing sample.
    pub too_close: usize,
}

/// Poisson-disc sampler over `[0, width) × [0, height)`.
///
/// The sampler owns its random number generator, so two samplers built with
/// generators in the same state produce the same points. The spatial index
/// backend defaults to a uniform grid whose cells match the background grid.
#[derive(Debug)]
pub struct Sampler<R, B: Backend = GridF64> {
    config: SamplerConfig,
    grid: BackgroundGrid,
    index: IndexGeneric<B>,
    samples: Vec<Point>,
    queue: Vec<Point>,
    stats: RunStats,
    rng: R,
}

impl<R: Rng> Sampler<R> {
    /// Build a sampler with the grid-backed spatial index.
    pub fn new(config: SamplerConfig, rng: R) -> Result<Self, SamplerError> {
        let layout = config.layout()?;
        let index = Index::with_uniform_grid(layout.cell_size, layout.cols, layout.rows);
        Self::with_index(config, rng, index)
    }
}

impl Sampler<ChaCha8Rng> {
    /// Build a grid-backed sampler driven by a ChaCha8 generator seeded with `seed`.
    pub fn seeded(config: SamplerConfig, seed: u64) -> Result<Self, SamplerError> {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng, B: Backend> Sampler<R, B> {
    /// Build a sampler over a caller-supplied index.
    ///
    /// The index is cleared; any points it held are discarded.
    pub fn with_index(
        config: SamplerConfig,
        rng: R,
        mut index: IndexGeneric<B>,
    ) -> Result<Self, SamplerError> {
        let layout = config.layout()?;
        index.clear();
        log::debug!(
            "sampler over {}x{} domain, radius {}, {} attempts, {}x{} cells of {}",
            config.width,
            config.height,
            config.radius,
            config.num_samples,
            layout.cols,
            layout.rows,
            layout.cell_size,
        );
        Ok(Self {
            config,
            grid: BackgroundGrid::new(layout),
            index,
            samples: Vec::new(),
            queue: Vec::new(),
            stats: RunStats::default(),
            rng,
        })
    }

    /// Configuration this sampler was built with.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Side of a background grid cell, `radius / sqrt(2)`.
    pub fn cell_size(&self) -> f64 {
        self.grid.layout().cell_size
    }

    /// Background occupancy grid as left by the most recent run.
    pub fn grid(&self) -> &BackgroundGrid {
        &self.grid
    }

    /// Spatial index as left by the most recent run.
    pub fn index(&self) -> &IndexGeneric<B> {
        &self.index
    }

    /// Samples from the most recent run, in acceptance order.
    pub fn samples(&self) -> &[Point] {
        &self.samples
    }

    /// Counters from the most recent run.
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Borrow the random number generator.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Background grid cell of `point`: `floor(coordinate / cell_size)` per axis.
    ///
    /// A valid grid index only for points inside the domain.
    pub fn grid_coords(&self, point: Point) -> (i64, i64) {
        self.grid.coords(point)
    }

    /// Draw a candidate in the annulus `[radius, 2 * radius)` around `point`.
    ///
    /// The candidate may fall outside the domain.
    pub fn generate_point_around(&mut self, point: Point) -> Point {
        let angle = TAU * self.rng.random::<f64>();
        let distance = self.config.radius * (self.rng.random::<f64>() + 1.0);
        point + distance * Vec2::from_angle(angle)
    }

    /// Run the sampler to completion and return the samples in acceptance order.
    ///
    /// Each call starts from an empty domain and draws fresh randomness, so
    /// repeated calls on one sampler give different point sets.
    pub fn generate_samples(&mut self) -> Vec<Point> {
        self.samples.clear();
        self.queue.clear();
        self.index.clear();
        self.grid.clear();
        self.stats = RunStats::default();

        let seed = Point::new(
            self.config.width * self.rng.random::<f64>(),
            self.config.height * self.rng.random::<f64>(),
        );
        self.accept(seed);

        while !self.queue.is_empty() {
            let pick = self.rng.random_range(0..self.queue.len());
            let parent = self.queue.swap_remove(pick);
            for _ in 0..self.config.num_samples {
                let candidate = self.generate_point_around(parent);
                self.stats.candidates += 1;
                if !self.in_domain(candidate) {
                    self.stats.out_of_bounds += 1;
                    continue;
                }
                if self.index.any_within(candidate, self.config.radius) {
                    self.stats.too_close += 1;
                    continue;
                }
                self.accept(candidate);
            }
        }

        log::debug!(
            "placed {} samples from {} candidates ({} out of bounds, {} too close)",
            self.stats.accepted,
            self.stats.candidates,
            self.stats.out_of_bounds,
            self.stats.too_close,
        );
        self.samples.clone()
    }

    fn in_domain(&self, p: Point) -> bool {
        (0.0..self.config.width).contains(&p.x) && (0.0..self.config.height).contains(&p.y)
    }

    fn accept(&mut self, point: Point) {
        log::trace!("accept #{} at ({}, {})", self.samples.len(), point.x, point.y);
        self.samples.push(point);
        self.queue.push(point);
        self.index.insert(point);
        let _ = self.index.commit();
        if let Some(prev) = self.grid.record(point) {
            log::warn!("cell of ({}, {}) already held {:?}", point.x, point.y, prev);
        }
        self.stats.accepted += 1;
    }
}

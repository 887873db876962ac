// Copyright 2025 the Poissonate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sampler configuration.

use core::f64::consts::SQRT_2;
use core::mem::size_of;

use kurbo::Point;
use poisson_index::GridF64;

use crate::error::SamplerError;
use crate::grid::{GridLayout, ceil_to_u64};

/// Candidates tried per active point when not configured otherwise.
pub const DEFAULT_NUM_SAMPLES: u32 = 5;

/// Largest per-cell footprint of the background grid and the grid index.
const BYTES_PER_CELL: usize = {
    let background = size_of::<Option<Point>>();
    if background > GridF64::BYTES_PER_CELL {
        background
    } else {
        GridF64::BYTES_PER_CELL
    }
};

/// Domain, spacing and effort settings for a [`Sampler`](crate::Sampler).
///
/// The domain is the half-open rectangle `[0, width) × [0, height)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SamplerConfig {
    /// Domain extent along x.
    pub width: f64,
    /// Domain extent along y.
    pub height: f64,
    /// Minimum distance between any two samples.
    pub radius: f64,
    /// Candidates tried around each active point before it is retired.
    ///
    /// Higher values pack denser at proportionally higher cost.
    pub num_samples: u32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::new(100.0, 100.0, 5.0)
    }
}

impl SamplerConfig {
    /// Create a config with [`DEFAULT_NUM_SAMPLES`] candidates per point.
    pub const fn new(width: f64, height: f64, radius: f64) -> Self {
        Self {
            width,
            height,
            radius,
            num_samples: DEFAULT_NUM_SAMPLES,
        }
    }

    /// Replace the candidate budget.
    #[must_use]
    pub const fn with_num_samples(mut self, num_samples: u32) -> Self {
        self.num_samples = num_samples;
        self
    }

    /// Side of a background cell, `radius / sqrt(2)`.
    ///
    /// A cell's diagonal equals the radius, so a valid sample set holds at most
    /// one point per cell.
    pub fn cell_size(&self) -> f64 {
        self.radius / SQRT_2
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), SamplerError> {
        self.layout().map(|_| ())
    }

    /// Check the configuration and derive the background grid layout.
    ///
    /// The grid is rejected with [`SamplerError::GridTooLarge`] when its cell
    /// count or its cell table in bytes does not fit an allocation.
    pub fn layout(&self) -> Result<GridLayout, SamplerError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.width) || !positive(self.height) {
            return Err(SamplerError::InvalidExtent {
                width: self.width,
                height: self.height,
            });
        }
        if !positive(self.radius) {
            return Err(SamplerError::InvalidRadius(self.radius));
        }
        if self.num_samples == 0 {
            return Err(SamplerError::NoAttempts);
        }

        let cell_size = self.cell_size();
        let cols = ceil_to_u64(self.width / cell_size);
        let rows = ceil_to_u64(self.height / cell_size);
        let too_large = SamplerError::GridTooLarge { cols, rows };
        let cols_usize = usize::try_from(cols).map_err(|_| too_large)?;
        let rows_usize = usize::try_from(rows).map_err(|_| too_large)?;
        let bytes = cols_usize
            .checked_mul(rows_usize)
            .and_then(|cells| cells.checked_mul(BYTES_PER_CELL));
        if cols > i64::MAX as u64
            || rows > i64::MAX as u64
            || bytes.is_none_or(|b| b > isize::MAX as usize)
        {
            return Err(too_large);
        }
        Ok(GridLayout {
            cell_size,
            cols: cols_usize,
            rows: rows_usize,
        })
    }
}

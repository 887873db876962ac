// Copyright 2025 the Poissonate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors reported when building a [`Sampler`](crate::Sampler).

use thiserror::Error;

/// Reasons a [`SamplerConfig`](crate::SamplerConfig) is rejected.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum SamplerError {
    /// Width or height is zero, negative, or not finite.
    #[error("domain extent must be finite and positive, got {width} x {height}")]
    InvalidExtent {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },

    /// Minimum radius is zero, negative, or not finite.
    #[error("radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    /// The candidate budget per active point is zero.
    #[error("num_samples must be at least 1")]
    NoAttempts,

    /// The background grid for this extent and radius cannot be addressed.
    #[error("background grid of {cols} x {rows} cells is too large")]
    GridTooLarge {
        /// Columns, saturated at `u64::MAX`.
        cols: u64,
        /// Rows, saturated at `u64::MAX`.
        rows: u64,
    },
}

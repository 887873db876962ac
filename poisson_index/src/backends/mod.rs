// Copyright 2025 the Poissonate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different spatial strategies.
//!
//! - `flatvec`: flat vector with linear scans (small, simple, exhaustive).
//! - `grid`: uniform grid of buckets over a fixed extent; near-constant queries
//!   when the cell size matches the query radius.
//! - `rtree`: R-tree from the `rstar` crate (feature `rstar`); no fixed extent.

pub mod flatvec;
pub mod grid;
#[cfg(feature = "rstar")]
pub mod rtree;

pub use grid::GridF64;

// Copyright 2025 the Poissonate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=poisson_index --heading-base-level=0

//! Poisson Index: an incremental 2D point index with radius queries.
//!
//! Poisson Index answers the one question a minimum-distance sampler keeps asking:
//! "is any stored point within distance `r` of this query point?"
//!
//! - Insert points in order; each gets a slot equal to its insertion index.
//! - Stage inserts and publish them with [`IndexGeneric::commit`].
//! - Query by closed disc ([`IndexGeneric::query_radius`], [`IndexGeneric::any_within`]).
//!
//! Backends are pluggable via a simple trait so you can swap the spatial strategy without API churn.
//! The default backend is a flat vector (linear scan).
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use poisson_index::Index;
//!
//! let mut idx = Index::new();
//! idx.insert(Point::new(0.0, 0.0));
//! idx.insert(Point::new(3.0, 4.0));
//!
//! // Nothing is visible until the batch is committed.
//! assert!(!idx.any_within(Point::new(0.0, 0.0), 1.0));
//! assert_eq!(idx.commit(), 0..2);
//!
//! let hits: Vec<_> = idx.query_radius(Point::new(0.0, 0.0), 5.0).collect();
//! assert_eq!(hits.len(), 2);
//! ```
//!
//! Use the grid backend when points live in a known non-negative extent and the
//! query radius is close to the cell size:
//!
//! ```rust
//! use kurbo::Point;
//! use poisson_index::Index;
//!
//! // 20×20 cells of side 0.5 cover [0, 10) × [0, 10).
//! let mut idx = Index::with_uniform_grid(0.5, 20, 20);
//! idx.insert(Point::new(4.0, 4.0));
//! let _ = idx.commit();
//! assert!(idx.any_within(Point::new(4.5, 4.5), 1.0));
//! ```
//!
//! ## Choosing a backend
//!
//! - `FlatVec` (default): simplest, linear scans. Good for tiny sets and as a reference.
//! - `GridF64`: uniform grid of buckets. Pick a cell size near the query radius so
//!   each query touches a handful of cells.
//! - `RTreeF64` (feature `rstar`): no fixed extent; good when the domain is unbounded
//!   or the point density varies a lot.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for coordinates. Debug builds may assert.

#![no_std]

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod index;

pub use backend::Backend;
pub use backends::flatvec::FlatVec;
pub use backends::grid::{GridF64, floor_to_i64};
#[cfg(feature = "rstar")]
pub use backends::rtree::RTreeF64;
pub use index::{Index, IndexGeneric};

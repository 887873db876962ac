// Copyright 2025 the Poissonate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `Index` API and generic implementation over a pluggable backend.

use alloc::vec::Vec;
use core::ops::Range;

use kurbo::Point;

use crate::backend::Backend;
use crate::backends::flatvec::FlatVec;
use crate::backends::grid::GridF64;

/// A point index parameterized by a spatial backend.
///
/// Slots are assigned in insertion order. Inserted points are staged until
/// [`commit`](Self::commit); queries only ever see committed points.
#[derive(Debug)]
pub struct IndexGeneric<B: Backend> {
    points: Vec<Point>,
    committed: usize,
    backend: B,
}

impl<B: Backend + Default> IndexGeneric<B> {
    /// Create an empty index using the backend's default constructor.
    pub fn new() -> Self {
        Self::with_backend(B::default())
    }
}

impl<B: Backend> IndexGeneric<B> {
    /// Create an empty index over an explicit backend.
    ///
    /// The backend is cleared so slots line up with this index.
    pub fn with_backend(mut backend: B) -> Self {
        backend.clear();
        Self {
            points: Vec::new(),
            committed: 0,
            backend,
        }
    }

    /// Reserve space for at least `n` more points.
    pub fn reserve(&mut self, n: usize) {
        self.points.reserve(n);
    }

    /// Stage a point. Returns its slot.
    pub fn insert(&mut self, point: Point) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Make all staged points visible to queries.
    ///
    /// Returns the range of slots that became visible.
    pub fn commit(&mut self) -> Range<usize> {
        let start = self.committed;
        for (slot, &p) in self.points.iter().enumerate().skip(start) {
            self.backend.insert(slot, p);
        }
        self.committed = self.points.len();
        start..self.committed
    }

    /// Drop every point, staged or committed.
    pub fn clear(&mut self) {
        self.points.clear();
        self.committed = 0;
        self.backend.clear();
    }

    /// Number of points, including staged ones.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the index holds no points at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of staged points not yet visible to queries.
    pub fn pending(&self) -> usize {
        self.points.len() - self.committed
    }

    /// Committed points in slot order.
    pub fn points(&self) -> &[Point] {
        &self.points[..self.committed]
    }

    /// Point stored under `slot`, staged or committed.
    pub fn get(&self, slot: usize) -> Option<Point> {
        self.points.get(slot).copied()
    }

    /// Borrow the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Query committed points within `radius` of `center`, in slot order.
    pub fn query_radius(
        &self,
        center: Point,
        radius: f64,
    ) -> impl Iterator<Item = (usize, Point)> + '_ {
        self.backend
            .query_radius(center, radius)
            .map(|slot| (slot, self.points[slot]))
    }

    /// Whether any committed point lies within `radius` of `center`.
    pub fn any_within(&self, center: Point, radius: f64) -> bool {
        self.backend.any_within(center, radius)
    }
}

/// Default index using a flat vector backend.
pub type Index = IndexGeneric<FlatVec>;

impl Default for Index {
    fn default() -> Self {
        Self::new()
    }
}

impl Index {
    /// Create a grid-backed index covering `cols × rows` square cells of `cell_size`,
    /// anchored at the origin.
    pub fn with_uniform_grid(cell_size: f64, cols: usize, rows: usize) -> IndexGeneric<GridF64> {
        IndexGeneric::with_backend(GridF64::new(cell_size, cols, rows))
    }

    /// Create an R-tree-backed index.
    #[cfg(feature = "rstar")]
    pub fn with_rtree() -> IndexGeneric<crate::backends::rtree::RTreeF64> {
        IndexGeneric::new()
    }
}

#[cfg(feature = "rstar")]
impl IndexGeneric<crate::backends::rtree::RTreeF64> {
    /// Build an R-tree-backed index in bulk; every point is committed.
    pub fn with_rtree_bulk(points: &[Point]) -> Self {
        let pairs: Vec<(usize, Point)> = points.iter().copied().enumerate().collect();
        Self {
            points: points.to_vec(),
            committed: points.len(),
            backend: crate::backends::rtree::RTreeF64::bulk_build(&pairs),
        }
    }
}

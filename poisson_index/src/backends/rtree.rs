// Copyright 2025 the Poissonate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! R-tree backend on top of [`rstar`].
//!
//! Points are inserted incrementally; radius queries use
//! [`RTree::locate_within_distance`], which is closed at the boundary like
//! the other backends.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;
use rstar::RTree;
use rstar::primitives::GeomWithData;

use crate::backend::Backend;

type Entry = GeomWithData<[f64; 2], usize>;

/// R-tree backend for f64 points.
pub struct RTreeF64 {
    tree: RTree<Entry>,
}

impl Default for RTreeF64 {
    fn default() -> Self {
        Self { tree: RTree::new() }
    }
}

impl RTreeF64 {
    /// Bulk-load a tree from `(slot, point)` pairs.
    ///
    /// This packs the tree in one pass and is much faster than repeated inserts
    /// when the whole set is known up front.
    pub fn bulk_build(pairs: &[(usize, Point)]) -> Self {
        let entries: Vec<Entry> = pairs
            .iter()
            .map(|&(slot, p)| GeomWithData::new([p.x, p.y], slot))
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }
}

impl Backend for RTreeF64 {
    fn insert(&mut self, slot: usize, point: Point) {
        self.tree.insert(GeomWithData::new([point.x, point.y], slot));
    }
    fn clear(&mut self) {
        self.tree = RTree::new();
    }
    fn query_radius<'a>(
        &'a self,
        center: Point,
        radius: f64,
    ) -> Box<dyn Iterator<Item = usize> + 'a> {
        let mut out: Vec<usize> = self
            .tree
            .locate_within_distance([center.x, center.y], radius * radius)
            .map(|e| e.data)
            .collect();
        out.sort_unstable();
        Box::new(out.into_iter())
    }
    fn any_within(&self, center: Point, radius: f64) -> bool {
        self.tree
            .locate_within_distance([center.x, center.y], radius * radius)
            .next()
            .is_some()
    }
}

impl Debug for RTreeF64 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RTreeF64")
            .field("len", &self.tree.size())
            .finish_non_exhaustive()
    }
}

// Copyright 2025 the Poissonate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid backend. Buckets points by cell for local radius queries.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::mem::size_of;
use core::ops::RangeInclusive;

use kurbo::Point;

use crate::backend::{Backend, within};

/// Uniform grid backend over a fixed `cols × rows` extent anchored at the origin.
///
/// Each cell owns a bucket of `(slot, point)` pairs, so any number of points may share a cell.
/// Points outside the extent are clamped into the border cells; they are never
/// dropped, only bucketed less precisely.
pub struct GridF64 {
    cell_size: f64,
    cols: usize,
    rows: usize,
    cells: Vec<Vec<(usize, Point)>>,
}

/// Floor without `std` float intrinsics; saturates outside the `i64` range.
#[inline]
pub fn floor_to_i64(v: f64) -> i64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Saturating float to int casts are intended here."
    )]
    let i = v as i64;
    if (i as f64) > v { i.saturating_sub(1) } else { i }
}

impl GridF64 {
    /// Bytes taken by one cell of the bucket table, before any point is inserted.
    pub const BYTES_PER_CELL: usize = size_of::<Vec<(usize, Point)>>();

    /// Create a grid backend with square cells of `cell_size` and the given extent.
    ///
    /// Zero dimensions are bumped to one cell.
    ///
    /// # Panics
    ///
    /// Panics if `cols * rows` overflows `usize`.
    pub fn new(cell_size: f64, cols: usize, rows: usize) -> Self {
        debug_assert!(cell_size > 0.0, "cell size must be positive");
        let cols = cols.max(1);
        let rows = rows.max(1);
        let Some(len) = cols.checked_mul(rows) else {
            panic!("grid of {cols}x{rows} cells overflows usize");
        };
        Self {
            cell_size,
            cols,
            rows,
            cells: vec![Vec::new(); len],
        }
    }

    /// Side length of a cell.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of columns and rows.
    pub fn dims(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "The clamped value lies in 0..len, which fits usize."
    )]
    fn clamp_axis(v: i64, len: usize) -> usize {
        let max = i64::try_from(len - 1).unwrap_or(i64::MAX);
        v.clamp(0, max) as usize
    }

    fn key_for(&self, x: f64, y: f64) -> (usize, usize) {
        let cx = floor_to_i64(x / self.cell_size);
        let cy = floor_to_i64(y / self.cell_size);
        (
            Self::clamp_axis(cx, self.cols),
            Self::clamp_axis(cy, self.rows),
        )
    }

    fn cells_for_disc(
        &self,
        center: Point,
        radius: f64,
    ) -> (RangeInclusive<usize>, RangeInclusive<usize>) {
        let (minx, miny) = self.key_for(center.x - radius, center.y - radius);
        let (maxx, maxy) = self.key_for(center.x + radius, center.y + radius);
        (minx..=maxx, miny..=maxy)
    }

    fn candidates(&self, center: Point, radius: f64) -> impl Iterator<Item = usize> + '_ {
        let (xs, ys) = self.cells_for_disc(center, radius);
        ys.flat_map(move |y| {
            let row = y * self.cols;
            self.cells[row + xs.start()..=row + xs.end()].iter().flatten()
        })
        .filter(move |&&(_, p)| within(center, p, radius))
        .map(|&(slot, _)| slot)
    }
}

impl Backend for GridF64 {
    fn insert(&mut self, slot: usize, point: Point) {
        let (x, y) = self.key_for(point.x, point.y);
        self.cells[y * self.cols + x].push((slot, point));
    }
    fn clear(&mut self) {
        for bucket in &mut self.cells {
            bucket.clear();
        }
    }
    fn query_radius<'a>(
        &'a self,
        center: Point,
        radius: f64,
    ) -> Box<dyn Iterator<Item = usize> + 'a> {
        let mut out: Vec<usize> = self.candidates(center, radius).collect();
        out.sort_unstable();
        Box::new(out.into_iter())
    }
    fn any_within(&self, center: Point, radius: f64) -> bool {
        self.candidates(center, radius).next().is_some()
    }
}

impl Debug for GridF64 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total: usize = self.cells.iter().map(Vec::len).sum();
        let occupied = self.cells.iter().filter(|c| !c.is_empty()).count();
        f.debug_struct("GridF64")
            .field("cell_size", &self.cell_size)
            .field("cols", &self.cols)
            .field("rows", &self.rows)
            .field("points", &total)
            .field("occupied_cells", &occupied)
            .finish_non_exhaustive()
    }
}

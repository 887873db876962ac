// Copyright 2025 the Poissonate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background occupancy grid.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Point;
use poisson_index::floor_to_i64;

/// Cell size and dimensions of the background grid for one configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridLayout {
    /// Side of a square cell.
    pub cell_size: f64,
    /// Cells along x, `ceil(width / cell_size)`.
    pub cols: usize,
    /// Cells along y, `ceil(height / cell_size)`.
    pub rows: usize,
}

/// Dense `cols × rows` map from cell to the most recently placed sample in it.
///
/// Recording a point overwrites the previous occupant of its cell. Cell sides
/// are `radius / sqrt(2)`, so a valid sample set never has two points in one
/// cell and nothing is lost in practice.
#[derive(Clone, Debug)]
pub struct BackgroundGrid {
    layout: GridLayout,
    cells: Vec<Option<Point>>,
}

impl BackgroundGrid {
    /// Create an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if `cols * rows` overflows `usize` or the cell table exceeds
    /// `isize::MAX` bytes. Layouts from
    /// [`SamplerConfig::layout`](crate::SamplerConfig::layout) are rejected before either.
    pub fn new(layout: GridLayout) -> Self {
        let Some(len) = layout.cols.checked_mul(layout.rows) else {
            panic!("grid of {}x{} cells overflows usize", layout.cols, layout.rows);
        };
        Self {
            layout,
            cells: vec![None; len],
        }
    }

    /// Layout this grid was built with.
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Cell coordinates `(floor(x / cell_size), floor(y / cell_size))`.
    ///
    /// Only meaningful as a grid index when the point lies inside the domain.
    pub fn coords(&self, point: Point) -> (i64, i64) {
        (
            floor_to_i64(point.x / self.layout.cell_size),
            floor_to_i64(point.y / self.layout.cell_size),
        )
    }

    fn offset(&self, gx: i64, gy: i64) -> Option<usize> {
        let x = usize::try_from(gx).ok().filter(|&x| x < self.layout.cols)?;
        let y = usize::try_from(gy).ok().filter(|&y| y < self.layout.rows)?;
        Some(y * self.layout.cols + x)
    }

    /// Sample recorded at cell `(gx, gy)`, if any.
    pub fn get(&self, gx: i64, gy: i64) -> Option<Point> {
        self.cells[self.offset(gx, gy)?]
    }

    /// Record `point` in its cell and return the previous occupant.
    ///
    /// Points outside the grid are ignored.
    pub fn record(&mut self, point: Point) -> Option<Point> {
        let (gx, gy) = self.coords(point);
        let offset = self.offset(gx, gy)?;
        self.cells[offset].replace(point)
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

/// Ceiling of a non-negative value without `std` float intrinsics; saturates at `u64::MAX`.
#[inline]
pub(crate) fn ceil_to_u64(v: f64) -> u64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Saturating float to int casts are intended here."
    )]
    let i = v as u64;
    if (i as f64) < v { i.saturating_add(1) } else { i }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> BackgroundGrid {
        BackgroundGrid::new(GridLayout {
            cell_size: 2.0,
            cols: 3,
            rows: 2,
        })
    }

    #[test]
    fn coords_floor_per_axis() {
        let g = grid();
        assert_eq!(g.coords(Point::new(0.0, 0.0)), (0, 0));
        assert_eq!(g.coords(Point::new(3.9, 2.0)), (1, 1));
        assert_eq!(g.coords(Point::new(5.99, 3.99)), (2, 1));
        assert_eq!(g.coords(Point::new(-0.5, 0.5)), (-1, 0));
    }

    #[test]
    fn record_overwrites_and_reports_previous() {
        let mut g = grid();
        let a = Point::new(1.0, 1.0);
        let b = Point::new(1.5, 0.5);
        assert_eq!(g.record(a), None);
        assert_eq!(g.record(b), Some(a));
        assert_eq!(g.get(0, 0), Some(b));
        assert_eq!(g.occupied(), 1);
    }

    #[test]
    fn out_of_range_cells_are_empty() {
        let mut g = grid();
        assert_eq!(g.record(Point::new(7.0, 1.0)), None);
        assert_eq!(g.occupied(), 0);
        assert_eq!(g.get(-1, 0), None);
        assert_eq!(g.get(0, 2), None);
        g.record(Point::new(5.0, 3.0));
        assert_eq!(g.get(2, 1), Some(Point::new(5.0, 3.0)));
        g.clear();
        assert_eq!(g.occupied(), 0);
    }

    #[test]
    fn ceil_rounds_up_and_saturates() {
        for (v, ceil) in [
            (0.0, 0),
            (0.25, 1),
            (1.0, 1),
            (2.5, 3),
            (1e6 + 0.5, 1_000_001),
        ] {
            assert_eq!(ceil_to_u64(v), ceil, "{v}");
        }
        assert_eq!(ceil_to_u64(f64::INFINITY), u64::MAX);
    }
}

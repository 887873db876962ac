// Copyright 2025 the Poissonate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for spatial indexing implementations.

use alloc::boxed::Box;
use core::fmt::Debug;

use kurbo::Point;

/// Spatial backend abstraction used by `IndexGeneric`.
///
/// Radius queries are closed: a stored point at exactly `radius` from the
/// center is reported.
pub trait Backend: Debug {
    /// Insert a point under the given slot.
    fn insert(&mut self, slot: usize, point: Point);

    /// Clear all spatial structures.
    fn clear(&mut self);

    /// Query slots whose point lies within `radius` of `center`.
    fn query_radius<'a>(
        &'a self,
        center: Point,
        radius: f64,
    ) -> Box<dyn Iterator<Item = usize> + 'a>;

    /// Whether any stored point lies within `radius` of `center`.
    fn any_within(&self, center: Point, radius: f64) -> bool {
        self.query_radius(center, radius).next().is_some()
    }
}

/// Closed-disc membership test shared by the backends.
#[inline]
pub(crate) fn within(center: Point, point: Point, radius: f64) -> bool {
    (point - center).hypot2() <= radius * radius
}

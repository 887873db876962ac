// Copyright 2025 the Poissonate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans. Small and simple; good for tiny sets.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;

use crate::backend::{Backend, within};

/// Flat vector backend with linear scans.
///
/// Every query visits every stored point, which makes this the exhaustive
/// reference the other backends are checked against.
#[derive(Default)]
pub struct FlatVec {
    entries: Vec<(usize, Point)>,
}

impl Debug for FlatVec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatVec")
            .field("points", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Backend for FlatVec {
    fn insert(&mut self, slot: usize, point: Point) {
        self.entries.push((slot, point));
    }
    fn clear(&mut self) {
        self.entries.clear();
    }
    fn query_radius<'a>(
        &'a self,
        center: Point,
        radius: f64,
    ) -> Box<dyn Iterator<Item = usize> + 'a> {
        Box::new(
            self.entries
                .iter()
                .filter(move |&&(_, p)| within(center, p, radius))
                .map(|&(slot, _)| slot),
        )
    }
    fn any_within(&self, center: Point, radius: f64) -> bool {
        self.entries
            .iter()
            .any(|&(_, p)| within(center, p, radius))
    }
}

// Copyright 2025 the Poissonate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Poisson Index: stage points, commit, and run radius queries.

use kurbo::Point;
use poisson_index::Index;

fn main() {
    let mut idx = Index::with_uniform_grid(2.0, 16, 16);
    idx.insert(Point::new(4.0, 4.0));
    idx.insert(Point::new(5.0, 6.0));
    idx.insert(Point::new(20.0, 20.0));

    // Staged points do not answer queries yet.
    println!("pending before commit: {}", idx.pending());
    let published = idx.commit();
    println!("published slots: {:?}", published);

    let hits: Vec<_> = idx.query_radius(Point::new(4.5, 5.0), 2.0).collect();
    println!("hits near (4.5, 5): {:?}", hits);
    println!(
        "anything within 1 of (12, 12)? {}",
        idx.any_within(Point::new(12.0, 12.0), 1.0)
    );
}

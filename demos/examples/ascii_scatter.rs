// Copyright 2025 the Poissonate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ASCII scatter.
//!
//! Render a blue-noise set and a white-noise set of the same size side by side
//! as character maps, so the even spacing is visible in a terminal.
//!
//! Run:
//! - `cargo run -p poisson_demos --example ascii_scatter`

use kurbo::Point;
use poisson_disc::{SamplerConfig, generate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const COLS: usize = 60;
const ROWS: usize = 20;

fn render(points: &[Point], width: f64, height: f64) -> Vec<String> {
    let mut canvas = vec![vec![' '; COLS]; ROWS];
    for p in points {
        let cx = ((p.x / width) * COLS as f64) as usize;
        let cy = ((p.y / height) * ROWS as f64) as usize;
        canvas[cy.min(ROWS - 1)][cx.min(COLS - 1)] = '*';
    }
    canvas.into_iter().map(String::from_iter).collect()
}

fn main() {
    env_logger::init();

    let (width, height) = (60.0, 40.0);
    let blue = generate(
        SamplerConfig::new(width, height, 2.2).with_num_samples(30),
        ChaCha8Rng::seed_from_u64(1),
    )
    .expect("config is valid");

    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let white: Vec<Point> = (0..blue.len())
        .map(|_| Point::new(rng.random::<f64>() * width, rng.random::<f64>() * height))
        .collect();

    println!("{} points each: blue noise | white noise", blue.len());
    for (l, r) in render(&blue, width, height)
        .iter()
        .zip(render(&white, width, height))
    {
        println!("|{l}| |{r}|");
    }
}

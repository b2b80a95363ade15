#![allow(dead_code)]

use fortune_voronoi::Point;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generate random points uniformly distributed in `[0, extent)^2`.
pub fn random_points(n: usize, extent: f64, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen_range(0.0..extent), rng.gen_range(0.0..extent)))
        .collect()
}

/// Generate a `cols x rows` grid with per-point jitter.
///
/// Exact grids are massively cocircular; the jitter keeps the points in
/// general position while preserving the overall distribution.
pub fn jittered_grid_points(cols: usize, rows: usize, jitter: f64, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let dx = rng.gen_range(-jitter..jitter);
            let dy = rng.gen_range(-jitter..jitter);
            points.push(Point::new(col as f64 + dx, row as f64 + dy));
        }
    }
    points
}

/// Generate `n` points on a horizontal line.
pub fn collinear_points(n: usize, spacing: f64) -> Vec<Point> {
    (0..n).map(|i| Point::new(i as f64 * spacing, 0.0)).collect()
}

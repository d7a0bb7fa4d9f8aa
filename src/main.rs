//!
//! # Quantized point demo
//!
//! Walks through the library: generates random points in a few dimensions, measures a
//! closed path with both reduction strategies, compares points under the quantized
//! ordering and deduplicates a large random cloud through a `PointSet`.
//!

use quant_points::*;

use log::{debug, info};

use std::cmp::Ordering;

const PACKAGE_NAME: &str    = env!("CARGO_PKG_NAME");
const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of random 2D points shown by the point-vector demo
const DEMO_POINT_COUNT: usize = 4;

/// Number of random 4D points fed to the deduplication demo
const DEDUP_POINT_COUNT: usize = 10_000;

fn main() {
    pretty_env_logger::init();

    println!("{} v{}", PACKAGE_NAME, PACKAGE_VERSION);

    let mut rng = rand::thread_rng();

    // A single random point in three dimensions
    let point: Coord3 = random_point(&mut rng);
    println!("a random point: {}", point);

    // A short vector of random 2D points, one per line
    let points: Vec<Coord2> = random_points(&mut rng, DEMO_POINT_COUNT);
    println!("a vector of random points:");
    for point in points.iter() {
        println!("  {}", point);
    }

    // The perimeter of the unit right triangle, measured both ways
    let triangle = vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(0.0, 1.0)];
    println!("triangle perimeter: {} {}", path_length(&triangle), path_length_fold(&triangle));

    // How the quantized ordering sees some hand-picked pairs
    let pairs = [
        (Coord2(0.15, 0.72), Coord2(0.43, 0.09)),
        (Coord2(0.27, 0.57), Coord2(0.21, 0.63)),
        (Coord2(0.34, 0.72), Coord2(0.36, 0.73)),
        (Coord2(0.43, 0.09), Coord2(0.15, 0.72))
    ];

    for (p1, p2) in pairs.iter() {
        let relation = if quantized_cmp(p1, p2) == Ordering::Less { "<" } else { ">=" };
        println!("{} {} {}", p1, relation, p2);
    }

    // Deduplicate a large random cloud by quantization cell
    info!("generating {} random 4D points", DEDUP_POINT_COUNT);
    let cloud: Vec<Coord4> = random_points(&mut rng, DEDUP_POINT_COUNT);

    if let Some(first) = cloud.first() {
        let min_corner = cloud.iter().fold(*first, |corner, point| Coord4::from_smallest_components(corner, *point));
        let max_corner = cloud.iter().fold(*first, |corner, point| Coord4::from_biggest_components(corner, *point));

        debug!("cloud extends from {} to {}", min_corner, max_corner);
    }

    let distinct: PointSet<Coord4> = cloud.iter().copied().collect();
    info!("{} points fell into an occupied cell", DEDUP_POINT_COUNT - distinct.len());

    println!("distinct quantized points: {}", distinct.len());
}

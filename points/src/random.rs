use super::coordinate::*;

use rand::Rng;

///
/// Generates a point with every component uniformly distributed in the range [0, 1)
///
pub fn random_point<Point: Coordinate, Rand: Rng>(rng: &mut Rand) -> Point {
    let components = (0..Point::len())
        .map(|_| rng.gen::<f64>())
        .collect::<Vec<_>>();

    Point::from_components(&components)
}

///
/// Generates the requested number of points, each with components uniformly distributed
/// in the range [0, 1)
///
pub fn random_points<Point: Coordinate, Rand: Rng>(rng: &mut Rand, count: usize) -> Vec<Point> {
    (0..count)
        .map(|_| random_point(rng))
        .collect()
}

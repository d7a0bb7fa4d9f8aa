use super::coordinate::*;

use itertools::*;

///
/// Computes the length of the closed path described by a sequence of points
///
/// The path is treated as a cycle: the predecessor of the first point is the last point,
/// so the edge closing the loop is always included. An empty sequence has length 0, as
/// does a single point (its only edge is degenerate).
///
pub fn path_length<Point: Coordinate>(points: &[Point]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }

    let mut total       = 0.0;
    let mut previous    = points[points.len()-1];

    for point in points.iter() {
        total       += previous.distance_to(point);
        previous    = *point;
    }

    total
}

///
/// Computes the length of the closed path described by a sequence of points, expressed
/// as a single fold over the edge list
///
/// Equivalent to `path_length`: the edges are visited in the same order, so the two
/// functions return identical results for every input.
///
pub fn path_length_fold<Point: Coordinate>(points: &[Point]) -> f64 {
    // The last point leads the sequence so that the closing edge is the first one visited
    points.last().into_iter()
        .chain(points.iter())
        .tuple_windows()
        .fold(0.0, |total, (start, end)| total + start.distance_to(end))
}

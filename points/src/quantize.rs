use super::consts::*;
use super::coordinate::*;

use std::cmp::Ordering;

///
/// Returns the point with every component truncated (towards zero) to the quantization grid
///
/// Quantization keeps one decimal digit of each component, so `(0.15, 0.72)` becomes
/// `(0.1, 0.7)`. Points whose components all land in the same grid cell are considered
/// equal by `quantized_cmp` and by the point sets built on top of it.
///
pub fn quantize<Point: Coordinate>(point: &Point) -> Point {
    let components = (0..Point::len())
        .map(|index| (point.get(index) * QUANTIZE_CELLS_PER_UNIT).trunc() / QUANTIZE_CELLS_PER_UNIT)
        .collect::<Vec<_>>();

    Point::from_components(&components)
}

///
/// Orders two points by comparing their quantized components lexicographically
///
/// The first strictly-ordered pair of quantized components decides the ordering; points
/// that quantize to the same grid cell compare equal. A NaN component is never strictly
/// ordered against anything, so it counts as equal and comparison moves to the next
/// component: the ordering is total for points with no NaN components.
///
pub fn quantized_cmp<Point: Coordinate>(p1: &Point, p2: &Point) -> Ordering {
    let q1 = quantize(p1);
    let q2 = quantize(p2);

    for index in 0..Point::len() {
        let c1 = q1.get(index);
        let c2 = q2.get(index);

        if c1 < c2 {
            return Ordering::Less;
        }
        if c1 > c2 {
            return Ordering::Greater;
        }
    }

    Ordering::Equal
}

///
/// Adapter that orders the point it wraps by `quantized_cmp`
///
/// This gives any ordered collection a key type whose equality is 'lands in the same
/// quantization cell', which is how `PointSet` deduplicates near-equal points.
///
#[derive(Copy, Clone, Debug)]
pub struct Quantized<Point: Coordinate>(pub Point);

impl<Point: Coordinate> PartialEq for Quantized<Point> {
    #[inline]
    fn eq(&self, other: &Quantized<Point>) -> bool {
        quantized_cmp(&self.0, &other.0) == Ordering::Equal
    }
}

impl<Point: Coordinate> Eq for Quantized<Point> {}

impl<Point: Coordinate> PartialOrd for Quantized<Point> {
    #[inline]
    fn partial_cmp(&self, other: &Quantized<Point>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Point: Coordinate> Ord for Quantized<Point> {
    #[inline]
    fn cmp(&self, other: &Quantized<Point>) -> Ordering {
        quantized_cmp(&self.0, &other.0)
    }
}

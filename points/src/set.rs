use super::coordinate::*;
use super::quantize::*;

use std::collections::BTreeSet;
use std::fmt;
use std::iter::FromIterator;

///
/// Set of points that treats two points as the same point when they quantize to the same
/// grid cell
///
/// The set keeps the first point inserted for any cell: inserting a second point that
/// quantizes to an occupied cell leaves the stored representative unchanged. Iteration
/// visits the representatives in quantized lexicographic order.
///
#[derive(Clone)]
pub struct PointSet<Point: Coordinate> {
    points: BTreeSet<Quantized<Point>>
}

impl<Point: Coordinate> PointSet<Point> {
    ///
    /// Creates an empty point set
    ///
    pub fn new() -> PointSet<Point> {
        PointSet { points: BTreeSet::new() }
    }

    ///
    /// The number of distinct quantization cells occupied by this set
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    ///
    /// True if this set contains no points
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    ///
    /// Adds a point to the set
    ///
    /// Returns false, and keeps the existing representative, if the set already contains
    /// a point in the same quantization cell.
    ///
    pub fn insert(&mut self, point: Point) -> bool {
        self.points.insert(Quantized(point))
    }

    ///
    /// True if the set contains a point in the same quantization cell as the specified point
    ///
    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(&Quantized(*point))
    }

    ///
    /// Visits the stored representatives in quantized lexicographic order
    ///
    pub fn iter(&self) -> impl Iterator<Item=&Point> {
        self.points.iter().map(|quantized| &quantized.0)
    }
}

impl<Point: Coordinate> Default for PointSet<Point> {
    fn default() -> PointSet<Point> {
        PointSet::new()
    }
}

impl<Point: Coordinate> Extend<Point> for PointSet<Point> {
    fn extend<PointIter: IntoIterator<Item=Point>>(&mut self, points: PointIter) {
        self.points.extend(points.into_iter().map(Quantized))
    }
}

impl<Point: Coordinate> FromIterator<Point> for PointSet<Point> {
    fn from_iter<PointIter: IntoIterator<Item=Point>>(points: PointIter) -> PointSet<Point> {
        let mut set = PointSet::new();
        set.extend(points);
        set
    }
}

impl<Point: Coordinate+fmt::Debug> fmt::Debug for PointSet<Point> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

use std::error::Error;
use std::fmt;
use std::ops::*;
use std::str::FromStr;

///
/// Represents a value that can be used as a point in a fixed number of dimensions
///
pub trait Coordinate : Sized+Copy+Add<Self, Output=Self>+Mul<f64, Output=Self>+Sub<Self, Output=Self> {
    ///
    /// Creates a new coordinate from the specified set of components
    ///
    fn from_components(components: &[f64]) -> Self;

    ///
    /// Returns the origin coordinate
    ///
    fn origin() -> Self;

    ///
    /// The number of components in this coordinate
    ///
    fn len() -> usize;

    ///
    /// Retrieves the component at the specified index
    ///
    fn get(&self, index: usize) -> f64;

    ///
    /// Returns a point made up of the biggest components of the two points
    ///
    fn from_biggest_components(p1: Self, p2: Self) -> Self;

    ///
    /// Returns a point made up of the smallest components of the two points
    ///
    fn from_smallest_components(p1: Self, p2: Self) -> Self;

    ///
    /// Computes the distance between this coordinate and another of the same type
    ///
    #[inline]
    fn distance_to(&self, target: &Self) -> f64 {
        let offset              = *self - *target;
        let squared_distance    = offset.dot(&offset);

        f64::sqrt(squared_distance)
    }

    ///
    /// Computes the dot product for this vector along with another vector
    ///
    #[inline]
    fn dot(&self, target: &Self) -> f64 {
        let mut dot_product = 0.0;

        for component_index in 0..Self::len() {
            dot_product += self.get(component_index) * target.get(component_index);
        }

        dot_product
    }

    ///
    /// Computes the magnitude of this vector
    ///
    #[inline]
    fn magnitude(&self) -> f64 {
        f64::sqrt(self.dot(self))
    }

    ///
    /// Treating this as a vector, returns a unit vector in the same direction
    ///
    #[inline]
    fn to_unit_vector(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            Self::origin()
        } else {
            *self * (1.0/magnitude)
        }
    }

    ///
    /// True if any component of this coordinate is not a number
    ///
    #[inline]
    fn is_nan(&self) -> bool {
        for component in 0..Self::len() {
            if self.get(component).is_nan() {
                return true;
            }
        }

        return false;
    }
}

///
/// Represents a coordinate with a 2D position
///
pub trait Coordinate2D {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

///
/// Represents a coordinate with a 3D position
///
pub trait Coordinate3D {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
}

impl Coordinate for f64 {
    fn from_components(components: &[f64]) -> f64 {
        components[0]
    }

    #[inline] fn origin() -> f64 { 0.0 }
    #[inline] fn len() -> usize { 1 }
    #[inline] fn get(&self, _index: usize) -> f64 { *self }

    #[inline]
    fn from_biggest_components(p1: f64, p2: f64) -> f64 {
        if p1 > p2 {
            p1
        } else {
            p2
        }
    }

    #[inline]
    fn from_smallest_components(p1: f64, p2: f64) -> f64 {
        if p1 < p2 {
            p1
        } else {
            p2
        }
    }

    #[inline]
    fn distance_to(&self, target: &f64) -> f64 {
        f64::abs(self-target)
    }

    fn dot(&self, target: &f64) -> f64 {
        self * target
    }
}

/// Represents a 2D point
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Coord2(pub f64, pub f64);

/// Represents a 3D point
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Coord3(pub f64, pub f64, pub f64);

/// Represents a 4D point
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Coord4(pub f64, pub f64, pub f64, pub f64);

impl Coordinate2D for Coord2 {
    ///
    /// X component of this coordinate
    ///
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    ///
    /// Y component of this coordinate
    ///
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate3D for Coord3 {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1
    }

    #[inline]
    fn z(&self) -> f64 {
        self.2
    }
}

impl Add<Coord2> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Coord2> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}

impl Coordinate for Coord2 {
    #[inline]
    fn from_components(components: &[f64]) -> Coord2 {
        Coord2(components[0], components[1])
    }

    #[inline]
    fn origin() -> Coord2 {
        Coord2(0.0, 0.0)
    }

    #[inline]
    fn len() -> usize { 2 }

    #[inline]
    fn get(&self, index: usize) -> f64 {
        match index {
            0 => self.0,
            1 => self.1,
            _ => panic!("Coord2 only has two components")
        }
    }

    fn from_biggest_components(p1: Coord2, p2: Coord2) -> Coord2 {
        Coord2(f64::from_biggest_components(p1.0, p2.0), f64::from_biggest_components(p1.1, p2.1))
    }

    fn from_smallest_components(p1: Coord2, p2: Coord2) -> Coord2 {
        Coord2(f64::from_smallest_components(p1.0, p2.0), f64::from_smallest_components(p1.1, p2.1))
    }

    #[inline]
    fn distance_to(&self, target: &Coord2) -> f64 {
        let dist_x = target.0-self.0;
        let dist_y = target.1-self.1;

        f64::sqrt(dist_x*dist_x + dist_y*dist_y)
    }

    #[inline]
    fn dot(&self, target: &Self) -> f64 {
        self.0*target.0 + self.1*target.1
    }
}

impl Add<Coord3> for Coord3 {
    type Output=Coord3;

    #[inline]
    fn add(self, rhs: Coord3) -> Coord3 {
        Coord3(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl Sub<Coord3> for Coord3 {
    type Output=Coord3;

    #[inline]
    fn sub(self, rhs: Coord3) -> Coord3 {
        Coord3(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }
}

impl Mul<f64> for Coord3 {
    type Output=Coord3;

    #[inline]
    fn mul(self, rhs: f64) -> Coord3 {
        Coord3(self.0 * rhs, self.1 * rhs, self.2 * rhs)
    }
}

impl Coordinate for Coord3 {
    #[inline]
    fn from_components(components: &[f64]) -> Coord3 {
        Coord3(components[0], components[1], components[2])
    }

    #[inline]
    fn origin() -> Coord3 {
        Coord3(0.0, 0.0, 0.0)
    }

    #[inline]
    fn len() -> usize { 3 }

    #[inline]
    fn get(&self, index: usize) -> f64 {
        match index {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            _ => panic!("Coord3 only has three components")
        }
    }

    fn from_biggest_components(p1: Coord3, p2: Coord3) -> Coord3 {
        Coord3(
            f64::from_biggest_components(p1.0, p2.0),
            f64::from_biggest_components(p1.1, p2.1),
            f64::from_biggest_components(p1.2, p2.2))
    }

    fn from_smallest_components(p1: Coord3, p2: Coord3) -> Coord3 {
        Coord3(
            f64::from_smallest_components(p1.0, p2.0),
            f64::from_smallest_components(p1.1, p2.1),
            f64::from_smallest_components(p1.2, p2.2))
    }

    #[inline]
    fn dot(&self, target: &Self) -> f64 {
        self.0*target.0 + self.1*target.1 + self.2*target.2
    }
}

impl Add<Coord4> for Coord4 {
    type Output=Coord4;

    #[inline]
    fn add(self, rhs: Coord4) -> Coord4 {
        Coord4(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2, self.3 + rhs.3)
    }
}

impl Sub<Coord4> for Coord4 {
    type Output=Coord4;

    #[inline]
    fn sub(self, rhs: Coord4) -> Coord4 {
        Coord4(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2, self.3 - rhs.3)
    }
}

impl Mul<f64> for Coord4 {
    type Output=Coord4;

    #[inline]
    fn mul(self, rhs: f64) -> Coord4 {
        Coord4(self.0 * rhs, self.1 * rhs, self.2 * rhs, self.3 * rhs)
    }
}

impl Coordinate for Coord4 {
    #[inline]
    fn from_components(components: &[f64]) -> Coord4 {
        Coord4(components[0], components[1], components[2], components[3])
    }

    #[inline]
    fn origin() -> Coord4 {
        Coord4(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    fn len() -> usize { 4 }

    #[inline]
    fn get(&self, index: usize) -> f64 {
        match index {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            3 => self.3,
            _ => panic!("Coord4 only has four components")
        }
    }

    fn from_biggest_components(p1: Coord4, p2: Coord4) -> Coord4 {
        Coord4(
            f64::from_biggest_components(p1.0, p2.0),
            f64::from_biggest_components(p1.1, p2.1),
            f64::from_biggest_components(p1.2, p2.2),
            f64::from_biggest_components(p1.3, p2.3))
    }

    fn from_smallest_components(p1: Coord4, p2: Coord4) -> Coord4 {
        Coord4(
            f64::from_smallest_components(p1.0, p2.0),
            f64::from_smallest_components(p1.1, p2.1),
            f64::from_smallest_components(p1.2, p2.2),
            f64::from_smallest_components(p1.3, p2.3))
    }

    #[inline]
    fn dot(&self, target: &Self) -> f64 {
        self.0*target.0 + self.1*target.1 + self.2*target.2 + self.3*target.3
    }
}

///
/// Formats a coordinate as `(x, y, ...)`
///
fn fmt_components<Point: Coordinate>(point: &Point, formatter: &mut fmt::Formatter) -> fmt::Result {
    write!(formatter, "(")?;
    for index in 0..Point::len() {
        if index > 0 {
            write!(formatter, ", ")?;
        }
        write!(formatter, "{}", point.get(index))?;
    }
    write!(formatter, ")")
}

impl fmt::Display for Coord2 {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt_components(self, formatter)
    }
}

impl fmt::Display for Coord3 {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt_components(self, formatter)
    }
}

impl fmt::Display for Coord4 {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt_components(self, formatter)
    }
}

///
/// Error indicating that a string did not describe a valid coordinate
///
#[derive(Clone, PartialEq, Debug)]
pub struct ParseCoordError {
    message: String
}

impl fmt::Display for ParseCoordError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "invalid coordinate: {}", self.message)
    }
}

impl Error for ParseCoordError {}

///
/// Parses the `(x, y, ...)` format written by the `Display` implementations
///
fn parse_components(text: &str, expected: usize) -> Result<Vec<f64>, ParseCoordError> {
    let trimmed = text.trim();
    let inner   = trimmed.strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ParseCoordError { message: format!("'{}' is not parenthesised", trimmed) })?;

    let components = inner.split(',')
        .map(|component| {
            component.trim().parse::<f64>()
                .map_err(|_| ParseCoordError { message: format!("'{}' is not a number", component.trim()) })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if components.len() != expected {
        return Err(ParseCoordError { message: format!("expected {} components, found {}", expected, components.len()) });
    }

    Ok(components)
}

impl FromStr for Coord2 {
    type Err = ParseCoordError;

    fn from_str(text: &str) -> Result<Coord2, ParseCoordError> {
        let components = parse_components(text, 2)?;
        Ok(Coord2(components[0], components[1]))
    }
}

impl FromStr for Coord3 {
    type Err = ParseCoordError;

    fn from_str(text: &str) -> Result<Coord3, ParseCoordError> {
        let components = parse_components(text, 3)?;
        Ok(Coord3(components[0], components[1], components[2]))
    }
}

impl FromStr for Coord4 {
    type Err = ParseCoordError;

    fn from_str(text: &str) -> Result<Coord4, ParseCoordError> {
        let components = parse_components(text, 4)?;
        Ok(Coord4(components[0], components[1], components[2], components[3]))
    }
}

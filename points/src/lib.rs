//!
//! # Quantized point containers
//!
//! This library provides a dimension-generic `Coordinate` trait along with routines for
//! generating random points, measuring closed paths and collecting points into sets that
//! treat near-equal points as the same point.
//!
//! Set membership is decided by quantizing every coordinate to a fixed grid and ordering
//! points lexicographically on the result, so two points closer together than one grid
//! cell usually count as a single point.
//!

#![warn(bare_trait_objects)]

pub mod consts;

pub mod coordinate;
pub use self::coordinate::*;

pub mod random;
pub use self::random::*;

pub mod path;
pub use self::path::*;

pub mod quantize;
pub use self::quantize::*;

pub mod set;
pub use self::set::*;

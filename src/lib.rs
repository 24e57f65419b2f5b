// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Triangulation of simple polygons with holes by ear clipping.
//!
//! Holes are first merged into the outer contour through pairs of bridge
//! edges, turning the polygon into a single (weakly) simple boundary. That
//! boundary is then clipped ear by ear into a flat triangle index buffer.
//!
//! ```rust
//! # use earclip::data::{Point, Polygon};
//! # use earclip::Winding;
//! let square = Polygon::new(vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([1.0, 0.0]),
//!   Point::new([1.0, 1.0]),
//!   Point::new([0.0, 1.0]),
//! ]);
//! let triangulation = earclip::triangulate(&square, Winding::CounterClockWise).unwrap();
//! assert_eq!(triangulation.len(), 2);
//! ```
use num_traits::Float;
use std::fmt::Debug;
use std::iter::Sum;

pub mod algorithms;
pub mod data;
mod intersection;
mod orientation;

pub use algorithms::triangulation::{triangulate, Triangulate, Triangulation};
pub use intersection::Intersects;
pub use orientation::{Orientation, Winding};

use data::HoleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The contour has fewer than three points.
  InsufficientVertices,
  /// A hole table points outside of the point storage.
  InvalidHoleRange,
  /// No boundary edge was visible from the hole's anchor vertex.
  UnbridgeableHole(HoleId),
  /// Ear clipping stalled. Counts are in indices, not triangles.
  IncompleteTriangulation { emitted: usize, expected: usize },
  /// A triangle refers to a missing vertex or repeats a vertex.
  InvalidTriangle,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::InvalidHoleRange => write!(f, "Hole range outside of point storage"),
      Error::UnbridgeableHole(hole) => write!(f, "Hole {} cannot be bridged", hole.usize()),
      Error::IncompleteTriangulation { emitted, expected } => write!(
        f,
        "Triangulation stalled after {} of {} indices",
        emitted, expected
      ),
      Error::InvalidTriangle => write!(f, "Invalid triangle"),
    }
  }
}

impl std::error::Error for Error {}

/// Coordinate type of points and polygons.
///
/// Every predicate compares against [`PolygonScalar::tolerance`] instead of
/// zero, there is no exact arithmetic.
pub trait PolygonScalar: Float + Debug + Sum + Send + Sync + 'static {
  fn from_constant(val: i8) -> Self;

  /// Lossy conversion, used when sampling random polygons.
  fn from_f64(val: f64) -> Self;

  fn as_f64(self) -> f64;

  /// Machine epsilon of the scalar type.
  fn tolerance() -> Self {
    Self::epsilon()
  }
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl PolygonScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty>::from(val)
        }

        fn from_f64(val: f64) -> Self {
          val as $ty
        }

        fn as_f64(self) -> f64 {
          f64::from(self)
        }
      }
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;

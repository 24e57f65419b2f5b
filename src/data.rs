mod boundary;
mod line_segment;
pub(crate) mod point;
pub mod polygon;
mod triangle;
mod vector;

pub use boundary::*;
pub use line_segment::*;
pub use triangle::*;

#[doc(inline)]
pub use crate::data::polygon::{FlatPolygon, Hole, HoleId, PointId, Polygon};
pub use point::Point;
pub use vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}

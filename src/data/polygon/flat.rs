use std::convert::TryFrom;

use super::Polygon;
use crate::data::Point;
use crate::Error;

/// Exchange form of a [`Polygon`]: flattened points plus the offset at which
/// each hole starts. A hole runs until the next offset or the end of
/// `points`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatPolygon<T = f32> {
  pub points: Vec<Point<T>>,
  #[cfg_attr(feature = "serde", serde(default))]
  pub hole_indices: Vec<usize>,
}

impl<T> TryFrom<FlatPolygon<T>> for Polygon<T> {
  type Error = Error;

  fn try_from(flat: FlatPolygon<T>) -> Result<Polygon<T>, Error> {
    Polygon::from_hole_indices(flat.points, &flat.hole_indices)
  }
}

impl<T> From<Polygon<T>> for FlatPolygon<T> {
  fn from(polygon: Polygon<T>) -> FlatPolygon<T> {
    let hole_indices = polygon.holes.iter().map(|hole| hole.start).collect();
    FlatPolygon {
      points: polygon.points,
      hole_indices,
    }
  }
}

use claims::debug_assert_ok;
use log::{debug, warn};

use crate::data::{Boundary, PointId, Polygon};
use crate::{Error, PolygonScalar, Winding};

pub mod bridge;
pub mod earclip;

/// Flat triangle index buffer produced by [`triangulate`].
///
/// Indices refer to the flattened point storage of the polygon, three per
/// triangle. Triangles are oriented like the input contour.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Triangulation {
  indices: Vec<PointId>,
  expected: usize,
}

impl Triangulation {
  pub(crate) fn with_expected(expected_len: usize) -> Triangulation {
    Triangulation {
      indices: Vec::with_capacity(expected_len * 3),
      expected: expected_len,
    }
  }

  pub(crate) fn push(&mut self, triangle: [PointId; 3]) {
    self.indices.extend_from_slice(&triangle);
  }

  pub fn indices(&self) -> &[PointId] {
    &self.indices
  }

  pub fn triangles(&self) -> impl Iterator<Item = [PointId; 3]> + '_ {
    self
      .indices
      .chunks_exact(3)
      .map(|tri| [tri[0], tri[1], tri[2]])
  }

  /// Number of triangles.
  pub fn len(&self) -> usize {
    self.indices.len() / 3
  }

  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }

  /// Number of triangles a complete triangulation has: boundary length minus
  /// two.
  pub fn expected_len(&self) -> usize {
    self.expected
  }

  pub fn is_complete(&self) -> bool {
    self.len() == self.expected
  }

  pub fn index_buffer(&self) -> Vec<usize> {
    self.indices.iter().map(|pid| pid.usize()).collect()
  }

  pub fn into_indices(self) -> Vec<PointId> {
    self.indices
  }

  /// Swap the first and last index of every triangle, reversing their
  /// orientation.
  #[must_use]
  pub fn flip_winding(mut self) -> Triangulation {
    for tri in self.indices.chunks_exact_mut(3) {
      tri.swap(0, 2);
    }
    self
  }

  /// Every index must be below `vertex_count` and no triangle may repeat an
  /// index.
  pub fn validate(&self, vertex_count: usize) -> Result<(), Error> {
    for [a, b, c] in self.triangles() {
      if a == b || b == c || a == c {
        return Err(Error::InvalidTriangle);
      }
      if [a, b, c].iter().any(|pid| pid.usize() >= vertex_count) {
        return Err(Error::InvalidTriangle);
      }
    }
    Ok(())
  }
}

/// Triangulate a polygon with holes.
///
/// Holes are bridged into the contour first, then the combined boundary is
/// clipped. `winding` must describe the contour; holes are expected to run
/// the opposite way. A polygon that cannot be fully clipped yields
/// [`Error::IncompleteTriangulation`].
///
/// ```rust
/// # use earclip::data::{Point, Polygon};
/// # use earclip::{triangulate, Winding};
/// let contour = vec![
///   Point::new([-2.0, -2.0]),
///   Point::new([2.0, -2.0]),
///   Point::new([2.0, 2.0]),
///   Point::new([-2.0, 2.0]),
/// ];
/// let hole = vec![
///   Point::new([-0.5, 0.0]),
///   Point::new([-0.5, 0.5]),
///   Point::new([0.0, 0.0]),
/// ];
/// let polygon = Polygon::with_holes(contour, vec![hole]);
/// let triangulation = triangulate(&polygon, Winding::CounterClockWise).unwrap();
/// assert_eq!(triangulation.len(), 7);
/// ```
pub fn triangulate<T>(polygon: &Polygon<T>, winding: Winding) -> Result<Triangulation, Error>
where
  T: PolygonScalar,
{
  polygon.validate_weakly()?;
  let boundary = if polygon.hole_count() == 0 {
    Boundary::from_ids(polygon.contour_ids())
  } else {
    bridge::bridge_holes(polygon, winding)?
  };
  debug!(
    "triangulating {} vertices with {} holes, boundary length {}",
    polygon.vertex_count(),
    polygon.hole_count(),
    boundary.len()
  );
  let triangulation = earclip::earclip(polygon, boundary, winding);
  if !triangulation.is_complete() {
    warn!(
      "triangulation incomplete: {} of {} triangles",
      triangulation.len(),
      triangulation.expected_len()
    );
    return Err(Error::IncompleteTriangulation {
      emitted: triangulation.indices().len(),
      expected: triangulation.expected_len() * 3,
    });
  }
  debug_assert_ok!(triangulation.validate(polygon.vertex_count()));
  Ok(triangulation)
}

pub trait Triangulate {
  fn triangulate(self, winding: Winding) -> Result<Triangulation, Error>;
}

impl<'a, T: PolygonScalar> Triangulate for &'a Polygon<T> {
  fn triangulate(self, winding: Winding) -> Result<Triangulation, Error> {
    triangulate(self, winding)
  }
}

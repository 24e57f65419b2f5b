use super::{Point, PointLocation};
use crate::{Error, Orientation, PolygonScalar};
use claims::debug_assert_ok;

#[derive(Debug, Clone, Copy)]
pub struct TriangleView<'a, T>([&'a Point<T>; 3]);

impl<'a, T> TriangleView<'a, T>
where
  T: PolygonScalar,
{
  // O(1)
  pub fn new(pts: [&'a Point<T>; 3]) -> TriangleView<'a, T> {
    let triangle = TriangleView(pts);
    debug_assert_ok!(triangle.validate());
    triangle
  }

  pub fn new_unchecked(pts: [&'a Point<T>; 3]) -> TriangleView<'a, T> {
    TriangleView(pts)
  }

  // O(1)
  pub fn validate(&self) -> Result<(), Error> {
    if self.orientation().is_colinear() {
      Err(Error::InvalidTriangle)
    } else {
      Ok(())
    }
  }

  pub fn orientation(&self) -> Orientation {
    let [a, b, c] = self.0;
    Orientation::new(a, b, c)
  }

  /// Unsigned area.
  pub fn area(&self) -> T {
    self.signed_area().abs()
  }

  /// Positive for counter-clockwise triangles.
  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / T::from_constant(2)
  }

  pub fn signed_area_2x(&self) -> T {
    let [a, b, c] = self.0;
    (b - a).cross(&(c - a))
  }

  /// Point-in-triangle test. Points on the boundary count as inside.
  ///
  /// Uses barycentric coordinates with [`PolygonScalar::tolerance`] of slack
  /// on every side, so it works for both orientations. Triangles without
  /// area contain nothing.
  // O(1)
  pub fn contains(&self, pt: &Point<T>) -> bool {
    if self.area() <= T::tolerance() {
      return false;
    }
    let [a, b, c] = self.0;
    let eps = T::tolerance();
    let det = self.signed_area_2x();
    let ap = pt - a;
    let s = ap.cross(&(c - a)) / det;
    let t = (b - a).cross(&ap) / det;
    s >= -eps && t >= -eps && s + t <= T::one() + eps
  }

  // O(1)
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    if !self.contains(pt) {
      return PointLocation::Outside;
    }
    let [a, b, c] = self.0;
    let on_edge = |src: &Point<T>, dst: &Point<T>| Orientation::new(src, dst, pt).is_colinear();
    if on_edge(a, b) || on_edge(b, c) || on_edge(c, a) {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }
}

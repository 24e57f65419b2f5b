use std::ops::Range;

use super::Point;
use crate::{Intersects, PolygonScalar};

///////////////////////////////////////////////////////////////////////////////
// LineSegment

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment<T = f32> {
  pub min: Point<T>,
  pub max: Point<T>,
}

impl<T: PolygonScalar> LineSegment<T> {
  pub fn new(min: Point<T>, max: Point<T>) -> LineSegment<T> {
    LineSegment { min, max }
  }

  pub fn as_ref(&self) -> LineSegmentView<'_, T> {
    LineSegmentView {
      min: &self.min,
      max: &self.max,
    }
  }
}

impl<T> From<Range<Point<T>>> for LineSegment<T> {
  fn from(range: Range<Point<T>>) -> LineSegment<T> {
    LineSegment {
      min: range.start,
      max: range.end,
    }
  }
}

impl<T> From<Range<(T, T)>> for LineSegment<T> {
  fn from(range: Range<(T, T)>) -> LineSegment<T> {
    LineSegment {
      min: range.start.into(),
      max: range.end.into(),
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// LineSegmentView

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegmentView<'a, T> {
  pub min: &'a Point<T>,
  pub max: &'a Point<T>,
}

impl<'a, T> LineSegmentView<'a, T> {
  pub fn new(min: &'a Point<T>, max: &'a Point<T>) -> LineSegmentView<'a, T> {
    LineSegmentView { min, max }
  }
}

impl<'a, T> From<&'a Range<Point<T>>> for LineSegmentView<'a, T> {
  fn from(range: &'a Range<Point<T>>) -> LineSegmentView<'a, T> {
    LineSegmentView {
      min: &range.start,
      max: &range.end,
    }
  }
}

// Parametric intersection: a0 + t*r == b0 + u*s with t,u in [0,1].
// Parallel segments never intersect, not even when they overlap.
impl<'a, T> Intersects for LineSegmentView<'a, T>
where
  T: PolygonScalar,
{
  type Result = Point<T>;
  fn intersect(self, other: LineSegmentView<'a, T>) -> Option<Point<T>> {
    let eps = T::tolerance();
    let r = self.max - self.min;
    let s = other.max - other.min;
    let r_cross_s = r.cross(&s);
    if r_cross_s.abs() < eps {
      return None;
    }
    let q_minus_p = other.min - self.min;
    let t = q_minus_p.cross(&s) / r_cross_s;
    let u = q_minus_p.cross(&r) / r_cross_s;
    let unit = -eps..=T::one() + eps;
    if unit.contains(&t) && unit.contains(&u) {
      Some(self.min + &(r * t))
    } else {
      None
    }
  }
}

impl<'a, T> Intersects for &'a LineSegment<T>
where
  T: PolygonScalar,
{
  type Result = Point<T>;
  fn intersect(self, other: &'a LineSegment<T>) -> Option<Point<T>> {
    self.as_ref().intersect(other.as_ref())
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;
  use claims::{assert_none, assert_some};
  use test_strategy::proptest;

  fn seg(a: (f32, f32), b: (f32, f32)) -> LineSegment<f32> {
    LineSegment::from(a..b)
  }

  #[test]
  fn crossing() {
    let hit = assert_some!(seg((0., 0.), (2., 2.)).intersect(&seg((0., 2.), (2., 0.))));
    assert_abs_diff_eq!(hit.x_coord(), 1.0);
    assert_abs_diff_eq!(hit.y_coord(), 1.0);
  }

  #[test]
  fn not_crossing() {
    assert_none!(seg((0., 0.), (1., 0.)).intersect(&seg((2., -1.), (2., 1.))));
  }

  #[test]
  fn shared_endpoint() {
    let hit = assert_some!(seg((0., 0.), (1., 1.)).intersect(&seg((1., 1.), (2., 0.))));
    assert!(hit.same_point(&Point::new([1., 1.]), f32::EPSILON));
  }

  #[test]
  fn parallel() {
    assert_none!(seg((0., 0.), (1., 0.)).intersect(&seg((0., 1.), (1., 1.))));
  }

  // Overlapping collinear segments are reported as not intersecting.
  #[test]
  fn colinear_overlap() {
    assert_none!(seg((0., 0.), (2., 0.)).intersect(&seg((1., 0.), (3., 0.))));
  }

  #[test]
  fn horizontal_ray_through_vertical_edge() {
    let ray = seg((0., 0.5), (10., 0.5));
    let hit = assert_some!(ray.intersect(&seg((3., -1.), (3., 1.))));
    assert_abs_diff_eq!(hit.x_coord(), 3.0);
    assert_abs_diff_eq!(hit.y_coord(), 0.5);
  }

  #[proptest]
  fn flip_intersects_prop(pts: [i8; 8]) {
    let [a, b, c, d, e, f, g, h] = pts.map(f32::from);
    let l1 = seg((a, b), (c, d));
    let l2 = seg((e, f), (g, h));
    let (x, y) = (l1.intersect(&l2), l2.intersect(&l1));
    assert_eq!(x.is_some(), y.is_some());
    if let (Some(x), Some(y)) = (x, y) {
      assert!(x.distance(&y) < 1e-3);
    }
  }
}

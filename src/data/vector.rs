use std::ops::Index;
use std::ops::Neg;

use crate::data::Point;
use crate::PolygonScalar;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Vector<T = f32>(pub [T; 2]);

impl<T: PolygonScalar> Vector<T> {
  /// Z component of the 3D cross product. Positive if `other` is
  /// counter-clockwise from `self`.
  pub fn cross(&self, other: &Vector<T>) -> T {
    self.0[0] * other.0[1] - self.0[1] * other.0[0]
  }

  pub fn dot(&self, other: &Vector<T>) -> T {
    self.0[0] * other.0[0] + self.0[1] * other.0[1]
  }

  pub fn squared_magnitude(&self) -> T {
    self.dot(self)
  }

  /// Angle to the positive x-axis in radians, in `[-pi, pi]`.
  pub fn angle(&self) -> T {
    self.0[1].atan2(self.0[0])
  }
}

impl<T> Index<usize> for Vector<T> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T: Neg<Output = T> + Copy> Neg for Vector<T> {
  type Output = Vector<T>;
  fn neg(self) -> Vector<T> {
    Vector([-self.0[0], -self.0[1]])
  }
}

impl<T> From<Point<T>> for Vector<T> {
  fn from(point: Point<T>) -> Vector<T> {
    Vector(point.array)
  }
}

impl<'a, T> From<&'a Point<T>> for &'a Vector<T> {
  fn from(point: &Point<T>) -> &Vector<T> {
    // Both types are repr(transparent) wrappers around [T; 2].
    unsafe { &*(point as *const Point<T> as *const Vector<T>) }
  }
}

mod mul;

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;

  #[test]
  fn cross_sign() {
    let x = Vector([1.0_f32, 0.0]);
    let y = Vector([0.0_f32, 1.0]);
    assert_abs_diff_eq!(x.cross(&y), 1.0);
    assert_abs_diff_eq!(y.cross(&x), -1.0);
    assert_abs_diff_eq!(x.cross(&x), 0.0);
  }

  #[test]
  fn angles() {
    assert_abs_diff_eq!(Vector([1.0_f64, 0.0]).angle(), 0.0);
    assert_abs_diff_eq!(Vector([0.0_f64, 1.0]).angle(), std::f64::consts::FRAC_PI_2);
    assert_abs_diff_eq!((-Vector([0.0_f64, 1.0])).angle(), -std::f64::consts::FRAC_PI_2);
  }

  #[test]
  fn view_of_point() {
    let p = Point::new([2.0_f32, -3.0]);
    assert_eq!(p.as_vec(), &Vector([2.0, -3.0]));
    assert_abs_diff_eq!(p.as_vec().squared_magnitude(), 13.0);
  }
}

use std::ops::Index;

use super::Vector;
use crate::PolygonScalar;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Point<T = f32> {
  pub array: [T; 2],
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn as_vec(&self) -> &Vector<T> {
    self.into()
  }
}

impl<T: PolygonScalar> Point<T> {
  pub fn x_coord(&self) -> T {
    self.array[0]
  }

  pub fn y_coord(&self) -> T {
    self.array[1]
  }

  pub fn squared_distance(&self, rhs: &Point<T>) -> T {
    (rhs - self).squared_magnitude()
  }

  pub fn distance(&self, rhs: &Point<T>) -> T {
    self.squared_distance(rhs).sqrt()
  }

  /// Points closer than `eps` are considered the same point.
  pub fn same_point(&self, rhs: &Point<T>, eps: T) -> bool {
    self.distance(rhs) <= eps
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl<T> From<Vector<T>> for Point<T> {
  fn from(vector: Vector<T>) -> Point<T> {
    Point { array: vector.0 }
  }
}

mod add;
mod sub;

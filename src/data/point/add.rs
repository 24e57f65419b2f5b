use array_init::array_init;
use std::ops::Add;

use super::Point;
use super::Vector;

// &point + &vector = point
impl<'a, 'b, T> Add<&'a Vector<T>> for &'b Point<T>
where
  T: Add<T, Output = T> + Copy,
{
  type Output = Point<T>;

  fn add(self: &'b Point<T>, other: &'a Vector<T>) -> Self::Output {
    Point {
      array: array_init(|i| self.array[i] + other.0[i]),
    }
  }
}

// point + vector = point
impl<T> Add<Vector<T>> for Point<T>
where
  T: Add<T, Output = T> + Copy,
{
  type Output = Point<T>;

  fn add(self: Point<T>, other: Vector<T>) -> Self::Output {
    Add::add(&self, &other)
  }
}

use crate::data::Point;
use crate::PolygonScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// Turns whose cross product is within [`PolygonScalar::tolerance`] of
  /// zero are reported as [`Orientation::CoLinear`].
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use earclip::data::Point;
  /// # use earclip::Orientation;
  /// let p1 = Point::new([ 0.0, 0.0 ]);
  /// let p2 = Point::new([ 0.0, 1.0 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0.0, 2.0 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1.0, 2.0 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1.0, 2.0 ])).is_cw());
  /// ```
  pub fn new<T>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Orientation
  where
    T: PolygonScalar,
  {
    Orientation::from_turn((p2 - p1).cross(&(p3 - p2)))
  }

  fn from_turn<T: PolygonScalar>(turn: T) -> Orientation {
    if turn > T::tolerance() {
      Orientation::CounterClockWise
    } else if turn < -T::tolerance() {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

/// Traversal direction of a contour, supplied by the caller.
///
/// The winding is never inferred from the points. It selects the sign that
/// every convexity and side-of-edge test compares against.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Winding {
  CounterClockWise,
  ClockWise,
}

impl Winding {
  pub fn orientation(self) -> Orientation {
    match self {
      Winding::CounterClockWise => Orientation::CounterClockWise,
      Winding::ClockWise => Orientation::ClockWise,
    }
  }

  #[must_use]
  pub fn reverse(self) -> Winding {
    match self {
      Winding::CounterClockWise => Winding::ClockWise,
      Winding::ClockWise => Winding::CounterClockWise,
    }
  }

  /// `cur` is convex if walking `prev -> cur -> next` turns strictly in the
  /// winding direction.
  pub fn is_convex<T>(self, prev: &Point<T>, cur: &Point<T>, next: &Point<T>) -> bool
  where
    T: PolygonScalar,
  {
    Orientation::new(prev, cur, next) == self.orientation()
  }

  /// Complement of [`Winding::is_convex`]. Collinear corners are reflex.
  pub fn is_reflex<T>(self, prev: &Point<T>, cur: &Point<T>, next: &Point<T>) -> bool
  where
    T: PolygonScalar,
  {
    !self.is_convex(prev, cur, next)
  }

  /// True if `pt` lies strictly on the interior side of the directed edge
  /// `src -> dst` of a boundary with this winding.
  pub fn is_inside_of<T>(self, src: &Point<T>, dst: &Point<T>, pt: &Point<T>) -> bool
  where
    T: PolygonScalar,
  {
    Orientation::new(src, dst, pt) == self.orientation()
  }
}

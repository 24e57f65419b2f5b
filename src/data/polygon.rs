use std::ops::Range;

use crate::data::{Point, TriangleView};
use crate::Error;
use crate::PolygonScalar;

mod flat;
pub use flat::*;

mod random;

/// Index into the flattened point storage of a [`Polygon`].
///
/// Contour points come first, followed by each hole in the order the holes
/// were added. Ids are never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PointId(pub(crate) usize);

impl PointId {
  pub fn new(idx: usize) -> PointId {
    PointId(idx)
  }

  pub fn usize(self) -> usize {
    self.0
  }
}

impl From<PointId> for usize {
  fn from(pid: PointId) -> usize {
    pid.0
  }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HoleId(pub(crate) usize);

impl HoleId {
  pub fn usize(self) -> usize {
    self.0
  }
}

/// Run of hole points inside the flattened storage.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Hole {
  pub start: usize,
  pub len: usize,
}

impl Hole {
  pub fn range(&self) -> Range<usize> {
    self.start..self.start + self.len
  }
}

/// Point storage for one polygon: a contour and zero or more holes.
///
/// Nothing about the geometry is validated. The contour is expected to be
/// simple with at least three points, every hole simple, inside the contour,
/// disjoint from the other holes, and wound opposite to the contour.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T = f32> {
  pub(crate) points: Vec<Point<T>>,
  pub(crate) contour_len: usize,
  pub(crate) holes: Vec<Hole>,
}

impl<T> Polygon<T> {
  pub fn new(contour: Vec<Point<T>>) -> Polygon<T> {
    Polygon {
      contour_len: contour.len(),
      points: contour,
      holes: vec![],
    }
  }

  pub fn with_holes<H>(contour: Vec<Point<T>>, holes: H) -> Polygon<T>
  where
    H: IntoIterator,
    H::Item: IntoIterator<Item = Point<T>>,
  {
    let mut polygon = Polygon::new(contour);
    for hole in holes {
      polygon.add_hole(hole);
    }
    polygon
  }

  /// Build from flattened storage plus a table of hole start offsets and
  /// per-hole counts. The contour is everything before the first hole.
  pub fn from_flat(
    points: Vec<Point<T>>,
    hole_starts: &[usize],
    hole_counts: &[usize],
  ) -> Result<Polygon<T>, Error> {
    if hole_starts.len() != hole_counts.len() {
      return Err(Error::InvalidHoleRange);
    }
    let holes: Vec<Hole> = hole_starts
      .iter()
      .zip(hole_counts)
      .map(|(&start, &len)| Hole { start, len })
      .collect();
    let contour_len = holes
      .iter()
      .map(|hole| hole.start)
      .min()
      .unwrap_or(points.len());
    let polygon = Polygon {
      points,
      contour_len,
      holes,
    };
    polygon.validate_ranges()?;
    Ok(polygon)
  }

  /// Build from flattened storage where each hole runs from its start offset
  /// to the next hole's start offset (or the end of the storage).
  pub fn from_hole_indices(
    points: Vec<Point<T>>,
    hole_indices: &[usize],
  ) -> Result<Polygon<T>, Error> {
    let ends = hole_indices
      .iter()
      .skip(1)
      .copied()
      .chain(std::iter::once(points.len()));
    let mut counts = Vec::with_capacity(hole_indices.len());
    for (&start, end) in hole_indices.iter().zip(ends) {
      counts.push(end.checked_sub(start).ok_or(Error::InvalidHoleRange)?);
    }
    Polygon::from_flat(points, hole_indices, &counts)
  }

  /// Append a hole after the existing points. The hole is not validated.
  pub fn add_hole<I>(&mut self, hole: I) -> HoleId
  where
    I: IntoIterator<Item = Point<T>>,
  {
    let start = self.points.len();
    self.points.extend(hole);
    self.holes.push(Hole {
      start,
      len: self.points.len() - start,
    });
    HoleId(self.holes.len() - 1)
  }

  pub fn point(&self, idx: PointId) -> &Point<T> {
    &self.points[idx.0]
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.points
  }

  pub fn contour(&self) -> &[Point<T>] {
    &self.points[0..self.contour_len]
  }

  pub fn contour_ids(&self) -> impl Iterator<Item = PointId> {
    (0..self.contour_len).map(PointId)
  }

  pub fn hole(&self, hole: HoleId) -> &[Point<T>] {
    &self.points[self.holes[hole.0].range()]
  }

  pub fn hole_range(&self, hole: HoleId) -> Hole {
    self.holes[hole.0]
  }

  pub fn hole_ids(&self, hole: HoleId) -> impl Iterator<Item = PointId> {
    self.holes[hole.0].range().map(PointId)
  }

  pub fn holes(&self) -> impl Iterator<Item = HoleId> {
    (0..self.holes.len()).map(HoleId)
  }

  /// Contour and hole points combined.
  pub fn vertex_count(&self) -> usize {
    self.points.len()
  }

  pub fn hole_count(&self) -> usize {
    self.holes.len()
  }

  /// Drop all points and holes. The allocation is kept for reuse.
  pub fn clear(&mut self) {
    self.points.clear();
    self.holes.clear();
    self.contour_len = 0;
  }

  /// Consume the buffer and hand back the flattened points, which is the
  /// vertex buffer matching a [`Triangulation`](crate::Triangulation).
  pub fn release(self) -> Vec<Point<T>> {
    self.points
  }

  /// Structural checks only: enough contour points and hole ranges that fit
  /// the storage. The geometry is not inspected.
  pub fn validate_weakly(&self) -> Result<(), Error> {
    if self.contour_len < 3 {
      return Err(Error::InsufficientVertices);
    }
    self.validate_ranges()
  }

  fn validate_ranges(&self) -> Result<(), Error> {
    let fits = |hole: &Hole| {
      hole.start >= self.contour_len
        && hole
          .start
          .checked_add(hole.len)
          .map_or(false, |end| end <= self.points.len())
    };
    if self.contour_len <= self.points.len() && self.holes.iter().all(fits) {
      Ok(())
    } else {
      Err(Error::InvalidHoleRange)
    }
  }
}

impl<T: PolygonScalar> Polygon<T> {
  /// Shoelace area of the contour with the hole areas taken out. The sign is
  /// the contour's: positive for counter-clockwise contours.
  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / T::from_constant(2)
  }

  pub fn signed_area_2x(&self) -> T {
    let contour = ring_area_2x(self.contour());
    let holes: T = self
      .holes()
      .map(|hole| ring_area_2x(self.hole(hole)).abs())
      .sum();
    if contour < T::zero() {
      contour + holes
    } else {
      contour - holes
    }
  }

  /// Sum of the unsigned areas of the given triangles.
  pub fn triangles_area<I>(&self, triangles: I) -> T
  where
    I: IntoIterator<Item = [PointId; 3]>,
  {
    triangles
      .into_iter()
      .map(|[a, b, c]| TriangleView::new_unchecked([self.point(a), self.point(b), self.point(c)]).area())
      .sum()
  }

  /// Smallest and largest x coordinate of the contour.
  pub fn contour_x_extent(&self) -> (T, T) {
    self.contour().iter().fold(
      (T::infinity(), T::neg_infinity()),
      |(min, max), pt| (min.min(pt.x_coord()), max.max(pt.x_coord())),
    )
  }
}

fn ring_area_2x<T: PolygonScalar>(ring: &[Point<T>]) -> T {
  ring
    .iter()
    .zip(ring.iter().cycle().skip(1))
    .map(|(p, q)| p.x_coord() * q.y_coord() - q.x_coord() * p.y_coord())
    .sum()
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;
  use claims::{assert_err_eq, assert_ok};

  fn pts(raw: &[(f32, f32)]) -> Vec<Point<f32>> {
    raw.iter().map(|&p| Point::from(p)).collect()
  }

  fn square() -> Vec<Point<f32>> {
    pts(&[(-2., -2.), (2., -2.), (2., 2.), (-2., 2.)])
  }

  fn hole() -> Vec<Point<f32>> {
    pts(&[(-0.5, 0.), (-0.5, 0.5), (0., 0.)])
  }

  #[test]
  fn layout_is_contour_then_holes() {
    let p = Polygon::with_holes(square(), vec![hole(), hole()]);
    assert_eq!(p.vertex_count(), 10);
    assert_eq!(p.hole_count(), 2);
    assert_eq!(p.contour().len(), 4);
    assert_eq!(p.hole_range(HoleId(0)), Hole { start: 4, len: 3 });
    assert_eq!(p.hole_range(HoleId(1)), Hole { start: 7, len: 3 });
    assert_eq!(p.hole(HoleId(1)), &hole()[..]);
    assert_eq!(
      p.hole_ids(HoleId(1)).collect::<Vec<_>>(),
      vec![PointId(7), PointId(8), PointId(9)]
    );
    assert_eq!(p.point(PointId(4)), &Point::new([-0.5, 0.]));
  }

  #[test]
  fn add_hole_after_construction() {
    let mut p = Polygon::new(square());
    let id = p.add_hole(hole());
    assert_eq!(id, HoleId(0));
    assert_eq!(p.hole(id).len(), 3);
    let empty = p.add_hole(Vec::new());
    assert_eq!(p.hole(empty).len(), 0);
    assert_ok!(p.validate_weakly());
  }

  #[test]
  fn flat_forms_agree() {
    let mut all = square();
    all.extend(hole());
    all.extend(hole());
    let nested = Polygon::with_holes(square(), vec![hole(), hole()]);
    let flat = Polygon::from_flat(all.clone(), &[4, 7], &[3, 3]).unwrap();
    let indexed = Polygon::from_hole_indices(all, &[4, 7]).unwrap();
    assert_eq!(nested, flat);
    assert_eq!(nested, indexed);
  }

  #[test]
  fn flat_rejects_bad_tables() {
    let mut all = square();
    all.extend(hole());
    assert_err_eq!(
      Polygon::from_flat(all.clone(), &[4], &[4]),
      Error::InvalidHoleRange
    );
    assert_err_eq!(
      Polygon::from_flat(all.clone(), &[4, 5], &[3]),
      Error::InvalidHoleRange
    );
    assert_err_eq!(
      Polygon::from_hole_indices(all, &[6, 4]),
      Error::InvalidHoleRange
    );
  }

  #[test]
  fn too_few_contour_points() {
    let p = Polygon::new(pts(&[(0., 0.), (1., 0.)]));
    assert_err_eq!(p.validate_weakly(), Error::InsufficientVertices);
  }

  #[test]
  fn area_subtracts_holes() {
    let p = Polygon::with_holes(square(), vec![hole()]);
    assert_abs_diff_eq!(p.signed_area(), 16.0 - 0.125);
    // Hole winding does not matter, only its magnitude is removed.
    let mut reversed = hole();
    reversed.reverse();
    let q = Polygon::with_holes(square(), vec![reversed]);
    assert_abs_diff_eq!(q.signed_area(), 16.0 - 0.125);
  }

  #[test]
  fn clockwise_area_is_negative() {
    let mut contour = square();
    contour.reverse();
    let p = Polygon::with_holes(contour, vec![hole()]);
    assert_abs_diff_eq!(p.signed_area(), -(16.0 - 0.125));
  }

  #[test]
  fn x_extent() {
    let p = Polygon::with_holes(square(), vec![hole()]);
    assert_eq!(p.contour_x_extent(), (-2.0, 2.0));
  }

  #[test]
  fn release_hands_back_points() {
    let mut p = Polygon::with_holes(square(), vec![hole()]);
    p.clear();
    assert_eq!(p.vertex_count(), 0);
    assert_eq!(p.hole_count(), 0);
    p.add_hole(hole());
    let points = p.release();
    assert_eq!(points, hole());
  }
}

// Helpers shared by the unit tests:
//  * literal rings
//  * random polygons with holes as a proptest strategy
//  * counting crossing boundary edges
use crate::data::{Boundary, Point, Polygon};
use crate::{PolygonScalar, Winding};

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub fn ring<T: PolygonScalar>(raw: &[(f64, f64)]) -> Vec<Point<T>> {
  raw
    .iter()
    .map(|&(x, y)| Point::new([T::from_f64(x), T::from_f64(y)]))
    .collect()
}

/// Random polygons with up to `max_holes` holes. Shrinks towards fewer
/// contour points and fewer holes.
pub fn polygons<T: PolygonScalar>(
  max_contour: usize,
  max_holes: usize,
  winding: Winding,
) -> impl Strategy<Value = Polygon<T>> {
  (any::<u64>(), 3..max_contour.max(4), 0..=max_holes).prop_map(move |(seed, n, k)| {
    let mut rng = SmallRng::seed_from_u64(seed);
    Polygon::random(n, k, winding, &mut rng)
  })
}

/// Number of boundary edge pairs that cross each other in their interiors.
/// Edges that only touch or overlap are not counted.
pub fn proper_crossings<T: PolygonScalar>(polygon: &Polygon<T>, boundary: &Boundary) -> usize {
  let edges: Vec<_> = boundary
    .edges()
    .map(|(a, b)| (polygon.point(a), polygon.point(b)))
    .collect();
  let mut count = 0;
  for (i, &(p1, p2)) in edges.iter().enumerate() {
    for &(p3, p4) in &edges[i + 1..] {
      if straddles(p3, p4, p1, p2) && straddles(p1, p2, p3, p4) {
        count += 1;
      }
    }
  }
  count
}

// `p` and `q` lie strictly on opposite sides of the line through `a` and `b`.
fn straddles<T: PolygonScalar>(a: &Point<T>, b: &Point<T>, p: &Point<T>, q: &Point<T>) -> bool {
  let d1 = (b - a).cross(&(p - a));
  let d2 = (b - a).cross(&(q - a));
  (d1 > T::zero() && d2 < T::zero()) || (d1 < T::zero() && d2 > T::zero())
}

use claims::debug_assert_ok;
use log::{trace, warn};

use super::Triangulation;
use crate::data::{Boundary, PointId, Polygon, TriangleView};
use crate::{PolygonScalar, Winding};

/// Clip a boundary into triangles.
///
/// Returns whatever was emitted; check [`Triangulation::is_complete`] to see
/// whether clipping stalled. Each triangle is `[prev, ear, next]` and has the
/// orientation given by `winding`.
pub fn earclip<T>(polygon: &Polygon<T>, mut boundary: Boundary, winding: Winding) -> Triangulation
where
  T: PolygonScalar,
{
  let mut out = Triangulation::with_expected(boundary.len().saturating_sub(2));
  let mut cursor = match boundary.head() {
    Some(head) => head,
    None => return out,
  };
  let mut misses = 0;
  while boundary.len() > 2 {
    if misses >= boundary.len() {
      warn!(
        "no ear among {} remaining vertices after {} triangles",
        boundary.len(),
        out.len()
      );
      break;
    }
    let prev = boundary.prev(cursor);
    let next = boundary.next(cursor);
    let triangle = [
      boundary.point_id(prev),
      boundary.point_id(cursor),
      boundary.point_id(next),
    ];
    if is_ear(polygon, winding, triangle) {
      trace!(
        "ear {} ({}, {})",
        triangle[1].usize(),
        triangle[0].usize(),
        triangle[2].usize()
      );
      out.push(triangle);
      boundary.remove(cursor);
      cursor = next;
      misses = 0;
    } else {
      cursor = next;
      misses += 1;
    }
  }
  debug_assert_ok!(out.validate(polygon.vertex_count()));
  out
}

// Convex corner with no polygon vertex inside or on the candidate triangle.
// Every point of the polygon is tested, including points already clipped
// away and points of other holes.
fn is_ear<T>(polygon: &Polygon<T>, winding: Winding, [a, b, c]: [PointId; 3]) -> bool
where
  T: PolygonScalar,
{
  let (pa, pb, pc) = (polygon.point(a), polygon.point(b), polygon.point(c));
  if !winding.is_convex(pa, pb, pc) {
    return false;
  }
  let trig = TriangleView::new_unchecked([pa, pb, pc]);
  polygon
    .points()
    .iter()
    .enumerate()
    .filter(|&(idx, _)| idx != a.usize() && idx != b.usize() && idx != c.usize())
    .all(|(_, pt)| !trig.contains(pt))
}

use log::{debug, warn};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

use crate::data::{Boundary, HoleId, LineSegmentView, NodeId, Point, PointId, Polygon, TriangleView};
use crate::{Error, Intersects, PolygonScalar, Winding};

// Hole together with its right-most vertex.
#[derive(Debug, Clone, Copy)]
struct HoleAnchor<T> {
  hole: HoleId,
  anchor: PointId,
  anchor_x: T,
}

/// Merge every hole into the contour, producing a single boundary.
///
/// Holes are processed by descending x of their right-most vertex. Each one is
/// connected to a vertex visible from that anchor through two coincident
/// bridge edges, so the boundary becomes `…, B, M, …hole…, M, B, …`.
/// Holes must be wound opposite to the contour.
///
/// Fails with [`Error::UnbridgeableHole`] when the horizontal ray from an
/// anchor hits no boundary edge, which only happens for holes that are not
/// inside the contour.
pub fn bridge_holes<T>(polygon: &Polygon<T>, winding: Winding) -> Result<Boundary, Error>
where
  T: PolygonScalar,
{
  let mut anchors = hole_anchors(polygon);
  anchors.sort_by_key(|anchor| Reverse(OrderedFloat(anchor.anchor_x.as_f64())));
  merge(polygon, winding, anchors)
}

/// Like [`bridge_holes`] but merges holes in the given order. Any other order
/// than right to left may produce crossing bridges.
#[cfg(test)]
pub(crate) fn bridge_holes_ordered<T>(
  polygon: &Polygon<T>,
  winding: Winding,
  order: &[HoleId],
) -> Result<Boundary, Error>
where
  T: PolygonScalar,
{
  let anchors = hole_anchors(polygon);
  let ordered = order
    .iter()
    .filter_map(|hole| anchors.iter().find(|anchor| anchor.hole == *hole).copied())
    .collect();
  merge(polygon, winding, ordered)
}

// Right-most vertex of every non-empty hole. First occurrence wins ties.
fn hole_anchors<T: PolygonScalar>(polygon: &Polygon<T>) -> Vec<HoleAnchor<T>> {
  polygon
    .holes()
    .filter_map(|hole| {
      let mut ids = polygon.hole_ids(hole);
      let first = ids.next()?;
      let anchor = ids.fold(first, |best, pid| {
        if polygon.point(pid).x_coord() > polygon.point(best).x_coord() {
          pid
        } else {
          best
        }
      });
      Some(HoleAnchor {
        hole,
        anchor,
        anchor_x: polygon.point(anchor).x_coord(),
      })
    })
    .collect()
}

fn merge<T>(
  polygon: &Polygon<T>,
  winding: Winding,
  anchors: Vec<HoleAnchor<T>>,
) -> Result<Boundary, Error>
where
  T: PolygonScalar,
{
  let extra: usize = anchors
    .iter()
    .map(|anchor| polygon.hole_range(anchor.hole).len + 2)
    .sum();
  let mut boundary = Boundary::with_capacity(polygon.contour().len() + extra);
  for pid in polygon.contour_ids() {
    boundary.push_back(pid);
  }
  let (min_x, max_x) = polygon.contour_x_extent();
  let width = max_x - min_x;

  for anchor in anchors {
    let bridge = match find_bridge(polygon, &boundary, winding, anchor.anchor, width) {
      Some(bridge) => bridge,
      None => {
        warn!(
          "hole {} cannot be bridged from vertex {}",
          anchor.hole.usize(),
          anchor.anchor.usize()
        );
        return Err(Error::UnbridgeableHole(anchor.hole));
      }
    };
    debug!(
      "bridging hole {} from vertex {} to vertex {}",
      anchor.hole.usize(),
      anchor.anchor.usize(),
      boundary.point_id(bridge).usize()
    );
    splice(polygon, &mut boundary, bridge, anchor);
  }
  Ok(boundary)
}

// Insert `M, M+1, …, M-1, M, B` after the bridge node `B`.
fn splice<T>(polygon: &Polygon<T>, boundary: &mut Boundary, bridge: NodeId, anchor: HoleAnchor<T>) {
  let hole = polygon.hole_range(anchor.hole);
  let offset = anchor.anchor.usize() - hole.start;
  let walk = (0..hole.len).map(|k| PointId(hole.start + (offset + k) % hole.len));
  let bridge_pid = boundary.point_id(bridge);
  let mut cursor = bridge;
  for pid in walk.chain([anchor.anchor, bridge_pid]) {
    cursor = boundary.insert_after(cursor, pid);
  }
}

// Boundary node that the anchor can be connected to without crossing any edge.
fn find_bridge<T>(
  polygon: &Polygon<T>,
  boundary: &Boundary,
  winding: Winding,
  anchor: PointId,
  width: T,
) -> Option<NodeId>
where
  T: PolygonScalar,
{
  let m = polygon.point(anchor);
  let ray_end = Point::new([m.x_coord() + width, m.y_coord()]);
  let ray = LineSegmentView::new(m, &ray_end);

  // Closest edge hit by the ray, considering only edges that face the anchor.
  let mut hit: Option<(Point<T>, NodeId, NodeId)> = None;
  for src in boundary.nodes() {
    let dst = boundary.next(src);
    let (a, b) = (point_at(polygon, boundary, src), point_at(polygon, boundary, dst));
    if !winding.is_inside_of(a, b, m) {
      continue;
    }
    if let Some(i) = ray.intersect(LineSegmentView::new(a, b)) {
      if hit.map_or(true, |(best, _, _)| i.x_coord() < best.x_coord()) {
        hit = Some((i, src, dst));
      }
    }
  }
  let (i, src, dst) = hit?;

  let eps = T::tolerance();
  let (a, b) = (point_at(polygon, boundary, src), point_at(polygon, boundary, dst));
  if i.same_point(a, eps) {
    return Some(src);
  }
  if i.same_point(b, eps) {
    return Some(dst);
  }

  let p_node = if a.x_coord() > b.x_coord() { src } else { dst };
  let p_id = boundary.point_id(p_node);
  let p = polygon.point(p_id);
  let search = TriangleView::new_unchecked([m, &i, p]);

  // Reflex vertices inside (M, I, P) would block the view to P. The one with
  // the smallest angle to the ray is visible.
  let mut best: Option<(T, T, NodeId)> = None;
  for node in boundary.nodes() {
    if boundary.point_id(node) == p_id {
      continue;
    }
    let cur = point_at(polygon, boundary, node);
    let prev = point_at(polygon, boundary, boundary.prev(node));
    let next = point_at(polygon, boundary, boundary.next(node));
    if winding.is_convex(prev, cur, next) || !search.contains(cur) {
      continue;
    }
    let delta = cur - m;
    let angle = delta.angle().abs();
    let dist = delta.squared_magnitude();
    let better = match best {
      None => true,
      Some((best_angle, best_dist, _)) => {
        angle < best_angle - eps || ((angle - best_angle).abs() <= eps && dist < best_dist)
      }
    };
    if better {
      best = Some((angle, dist, node));
    }
  }
  Some(best.map_or(p_node, |(_, _, node)| node))
}

fn point_at<'a, T>(polygon: &'a Polygon<T>, boundary: &Boundary, node: NodeId) -> &'a Point<T> {
  polygon.point(boundary.point_id(node))
}

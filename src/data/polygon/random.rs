use rand::Rng;
use std::f64::consts::PI;

use super::Polygon;
use crate::data::Point;
use crate::{PolygonScalar, Winding};

impl<T: PolygonScalar> Polygon<T> {
  /// Random star-shaped contour around the origin with up to `hole_count`
  /// holes that are guaranteed to fit inside it without touching each other.
  ///
  /// The contour is wound according to `winding` and every hole the opposite
  /// way, which is the input [`triangulate`](crate::triangulate) expects.
  /// Contours get at least three points and holes between three and six.
  pub fn random<R>(contour_len: usize, hole_count: usize, winding: Winding, rng: &mut R) -> Polygon<T>
  where
    R: Rng + ?Sized,
  {
    let n = contour_len.max(3);
    let contour: Vec<[f64; 2]> = jittered_angles(n, rng)
      .into_iter()
      .map(|angle| polar(angle, rng.gen_range(8.0..10.0), [0.0, 0.0]))
      .collect();
    let inner = inner_radius(&contour);

    let mut holes = Vec::with_capacity(hole_count);
    let span = 2.0 * PI / hole_count.max(1) as f64;
    for j in 0..hole_count {
      let r = inner * rng.gen_range(0.4..0.6);
      let center = polar(span * (j as f64 + 0.5), r, [0.0, 0.0]);
      let size = (r * (span / 2.0).min(PI / 2.0).sin() * 0.6).min(inner * 0.3);
      let m = rng.gen_range(3..=6);
      let mut hole: Vec<[f64; 2]> = jittered_angles(m, rng)
        .into_iter()
        .map(|angle| polar(angle, size * rng.gen_range(0.5..1.0), center))
        .collect();
      hole.reverse();
      holes.push(hole);
    }

    let mut polygon = Polygon::with_holes(
      contour.into_iter().map(to_point).collect(),
      holes
        .into_iter()
        .map(|hole| hole.into_iter().map(to_point).collect::<Vec<_>>()),
    );
    if winding == Winding::ClockWise {
      polygon.reverse_rings();
    }
    polygon
  }

  // Reverse the contour and every hole in place.
  fn reverse_rings(&mut self) {
    self.points[0..self.contour_len].reverse();
    for hole in &self.holes {
      self.points[hole.range()].reverse();
    }
  }
}

// Sorted angles, one per sector, each kept away from the sector edges so that
// consecutive angles are always less than half a turn apart.
fn jittered_angles<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f64> {
  let sector = 2.0 * PI / n as f64;
  (0..n)
    .map(|i| (i as f64 + rng.gen_range(0.3..0.7)) * sector)
    .collect()
}

fn polar(angle: f64, radius: f64, [cx, cy]: [f64; 2]) -> [f64; 2] {
  [cx + angle.cos() * radius, cy + angle.sin() * radius]
}

// Distance from the origin to the closest contour edge.
fn inner_radius(contour: &[[f64; 2]]) -> f64 {
  contour
    .iter()
    .zip(contour.iter().cycle().skip(1))
    .map(|(a, b)| {
      let (dx, dy) = (b[0] - a[0], b[1] - a[1]);
      (a[0] * b[1] - a[1] * b[0]).abs() / (dx * dx + dy * dy).sqrt()
    })
    .fold(f64::INFINITY, f64::min)
}

fn to_point<T: PolygonScalar>([x, y]: [f64; 2]) -> Point<T> {
  Point::new([T::from_f64(x), T::from_f64(y)])
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::HoleId;
  use claims::assert_ok;
  use rand::rngs::SmallRng;
  use rand::SeedableRng;
  use test_strategy::proptest;

  #[test]
  fn sizes() {
    let mut rng = SmallRng::seed_from_u64(7);
    let p: Polygon<f64> = Polygon::random(1, 4, Winding::CounterClockWise, &mut rng);
    assert_eq!(p.contour().len(), 3);
    assert_eq!(p.hole_count(), 4);
    for hole in p.holes() {
      assert!((3..=6).contains(&p.hole(hole).len()));
    }
    assert_ok!(p.validate_weakly());
  }

  #[proptest]
  fn windings(seed: u64, #[strategy(3usize..40)] n: usize, #[strategy(0usize..8)] k: usize) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let ccw: Polygon<f64> = Polygon::random(n, k, Winding::CounterClockWise, &mut rng);
    let mut rng = SmallRng::seed_from_u64(seed);
    let cw: Polygon<f64> = Polygon::random(n, k, Winding::ClockWise, &mut rng);
    assert!(ccw.signed_area() > 0.0);
    assert!(cw.signed_area() < 0.0);
    assert!((ccw.signed_area() + cw.signed_area()).abs() < 1e-9);
    for h in 0..k {
      let hole = Polygon::new(ccw.hole(HoleId(h)).to_vec());
      assert!(hole.signed_area() < 0.0);
    }
  }
}

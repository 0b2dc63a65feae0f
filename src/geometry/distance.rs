//! Signed distance from query points to boundaries and shapes.
//!
//! Sign convention: negative inside the region, positive outside, further
//! modulated by each boundary's hole/winding flags. The endpoint and interior
//! cases of the segment distance are asymmetric: the endpoint case ignores
//! the orientation sign and flips only with the hole flag. Downstream sign
//! handling depends on that asymmetry.

use super::orientation;
use crate::domain::{Boundary, Point, Shape};

/// Signed distance from `p` to the segment `l1`->`l2`.
///
/// The point projects onto the infinite line at parameter
/// `t = dot(p - l1, l2 - l1) / dot(l2 - l1, l2 - l1)`. Outside `[0, 1]` the
/// nearest point is the corresponding endpoint and the distance is flipped
/// only by `reverse` (a hole boundary's flag); inside, the perpendicular
/// distance is multiplied by the orientation sign of `(l1, l2, p)`.
pub fn distance_to_segment(p: &Point, l1: &Point, l2: &Point, reverse: bool) -> f64 {
    let sign = orientation(l1, l2, p);

    let vx = p.x - l1.x;
    let vy = p.y - l1.y;
    let ex = l2.x - l1.x;
    let ey = l2.y - l1.y;

    let t = (vx * ex + vy * ey) / (ex * ex + ey * ey);

    if t < 0.0 {
        return p.distance(l1) * if reverse { -1.0 } else { 1.0 };
    } else if t > 1.0 {
        return p.distance(l2) * if reverse { -1.0 } else { 1.0 };
    }

    let nearest = Point::new(l1.x + t * ex, l1.y + t * ey);
    p.distance(&nearest) * sign
}

/// Signed distance from `p` to the nearest edge of `boundary`.
///
/// Edges are evaluated closing edge first (last vertex back to the first),
/// then in forward order; the smallest absolute distance wins and ties keep
/// the first candidate. The result is negated for CCW boundaries. The
/// boundary must hold at least one point.
pub fn distance_to_boundary(p: &Point, boundary: &Boundary) -> f64 {
    let points = &boundary.points;
    let n = points.len();

    let mut min_dist = distance_to_segment(p, &points[n - 1], &points[0], boundary.is_hole);
    for i in 0..n - 1 {
        let dist = distance_to_segment(p, &points[i], &points[i + 1], boundary.is_hole);
        if dist.abs() < min_dist.abs() {
            min_dist = dist;
        }
    }

    min_dist * if boundary.is_ccw { -1.0 } else { 1.0 }
}

/// Signed distance from `p` to `shape`: the boundary distance with the
/// smallest absolute value, boundaries visited in file order with ties
/// keeping the first. An empty shape yields the untouched +inf accumulator;
/// loaders reject empty shapes so samplers never observe it.
pub fn distance_to_shape(p: &Point, shape: &Shape) -> f64 {
    let mut min_dist = f64::INFINITY;

    for boundary in &shape.boundaries {
        let dist = distance_to_boundary(p, boundary);
        if dist.abs() < min_dist.abs() {
            min_dist = dist;
        }
    }

    min_dist
}

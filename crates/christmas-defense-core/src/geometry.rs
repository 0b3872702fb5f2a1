//! Planar geometry helpers used by placement validation and targeting.

use crate::types::Position;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: &Position, b: &Position) -> f64 {
    a.distance_to(b)
}

/// Shortest distance from `p` to the segment `a`–`b`.
///
/// A degenerate segment (`a == b`) is treated as a point.
pub fn point_segment_distance(p: &Position, a: &Position, b: &Position) -> f64 {
    let ab = b.as_vec() - a.as_vec();
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return distance(p, a);
    }
    let t = ((p.as_vec() - a.as_vec()).dot(ab) / len_sq).clamp(0.0, 1.0);
    let projection = a.as_vec() + ab * t;
    p.as_vec().distance(projection)
}

/// Shortest distance from `p` to any segment of the polyline.
/// Returns `f64::INFINITY` for polylines with fewer than two points.
pub fn point_polyline_distance(p: &Position, points: &[Position]) -> f64 {
    points
        .windows(2)
        .map(|w| point_segment_distance(p, &w[0], &w[1]))
        .fold(f64::INFINITY, f64::min)
}

/// Whether `p` lies within `radius` of `center` (inclusive).
#[inline]
pub fn within_radius(p: &Position, center: &Position, radius: f64) -> bool {
    distance(p, center) <= radius
}

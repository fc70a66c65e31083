use super::Point2d;
use cgmath::prelude::*;

/// Computes the Euclidean distance between the points `(x1, y1)` and `(x2, y2)`.
///
/// NaN coordinates propagate to the result.
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    Point2d::new(x1, y1).distance(Point2d::new(x2, y2))
}

/// Computes the Euclidean distance between two points.
pub fn point_distance(p1: Point2d, p2: Point2d) -> f64 {
    distance(p1.x, p1.y, p2.x, p2.y)
}

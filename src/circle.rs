//! Circles.

use crate::point::{is_colinear_3, Point};
use thiserror::Error;

/// Errors arising from constructing geometric primitives.
#[derive(Debug, Error, PartialEq, Clone, Copy)]
pub enum GeometryError {
    /// The three points supplied to a circle constructor were (near-)colinear.
    #[error("three points are colinear; no circle passes through them")]
    ColinearPoints,
    /// A non-positive radius was supplied where one must be positive.
    #[error("radius must be positive")]
    NonPositiveRadius,
}

/// A circle: center and radius. Radius is always > 0.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle2 {
    /// The center of the circle.
    pub center: Point,
    /// The radius of the circle. Always positive.
    pub radius: f64,
}

impl Circle2 {
    /// Constructs a circle directly. Fails if `radius` is not positive.
    pub fn new(center: Point, radius: f64) -> Result<Circle2, GeometryError> {
        if radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius);
        }
        Ok(Circle2 { center, radius })
    }

    /// Constructs the unique circle through three points. Fails when the
    /// points are (near-)colinear.
    pub fn from_three_points(a: Point, b: Point, c: Point) -> Result<Circle2, GeometryError> {
        if is_colinear_3(a, b, c) {
            return Err(GeometryError::ColinearPoints);
        }
        // Circumcenter via the perpendicular-bisector intersection, computed
        // directly from the linear system:
        //   2*(b-a)*center = |b|^2 - |a|^2
        //   2*(c-a)*center = |c|^2 - |a|^2
        let ax = a.x.0;
        let ay = a.y.0;
        let bx = b.x.0;
        let by = b.y.0;
        let cx = c.x.0;
        let cy = c.y.0;

        let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));
        let ux = ((ax * ax + ay * ay) * (by - cy)
            + (bx * bx + by * by) * (cy - ay)
            + (cx * cx + cy * cy) * (ay - by))
            / d;
        let uy = ((ax * ax + ay * ay) * (cx - bx)
            + (bx * bx + by * by) * (ax - cx)
            + (cx * cx + cy * cy) * (bx - ax))
            / d;

        let center = crate::point::Pt(ux, uy);
        let radius = center.dist(&a);
        Circle2::new(center, radius)
    }

    /// Intersection points of this circle with another. Returns 0, 1
    /// (tangent), or 2 points. Returns an empty vec for coincident circles.
    pub fn intersect_circle(&self, other: &Circle2) -> Vec<Point> {
        let d = self.center.dist(&other.center);
        if d <= crate::tol::DIST_EPSILON {
            // Coincident or concentric; infinitely many or zero intersections,
            // neither of which is a finite point set.
            return vec![];
        }
        if d > self.radius + other.radius + crate::tol::DIST_EPSILON {
            return vec![];
        }
        if d < (self.radius - other.radius).abs() - crate::tol::DIST_EPSILON {
            return vec![];
        }

        let r0 = self.radius;
        let r1 = other.radius;
        let a = (r0 * r0 - r1 * r1 + d * d) / (2.0 * d);
        let h_sq = r0 * r0 - a * a;
        let h = if h_sq.abs() < crate::tol::DIST_EPSILON {
            0.0
        } else {
            h_sq.sqrt()
        };

        let dir = (other.center - self.center) / d;
        let mid = self.center + dir * a;
        let perp = dir.left_normal();

        if h <= crate::tol::DIST_EPSILON {
            vec![mid]
        } else {
            vec![mid + perp * h, mid - perp * h]
        }
    }

    /// The angle from this circle's center to `p`, in `(-pi, pi]`.
    pub fn angle_to(&self, p: &Point) -> f64 {
        (*p - self.center).angle()
    }

    /// The point on this circle at angle `theta`.
    pub fn point_at_angle(&self, theta: f64) -> Point {
        self.center + crate::point::PolarVec(self.radius, theta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Pt;
    use float_eq::assert_float_eq;

    #[test]
    fn test_from_three_points() {
        let c = Circle2::from_three_points(Pt(1.0, 0.0), Pt(0.0, 1.0), Pt(-1.0, 0.0)).unwrap();
        assert_float_eq!(c.center.x.0, 0.0, abs <= 1e-9);
        assert_float_eq!(c.center.y.0, 0.0, abs <= 1e-9);
        assert_float_eq!(c.radius, 1.0, abs <= 1e-9);
    }

    #[test]
    fn test_from_three_points_colinear_fails() {
        assert_eq!(
            Circle2::from_three_points(Pt(0.0, 0.0), Pt(1.0, 0.0), Pt(2.0, 0.0)),
            Err(GeometryError::ColinearPoints)
        );
    }

    #[test]
    fn test_intersect_circle_two_points() {
        let a = Circle2::new(Pt(0.0, 0.0), 1.0).unwrap();
        let b = Circle2::new(Pt(1.0, 0.0), 1.0).unwrap();
        let pts = a.intersect_circle(&b);
        assert_eq!(pts.len(), 2);
        for p in pts {
            assert_float_eq!(p.dist(&a.center), 1.0, abs <= 1e-9);
            assert_float_eq!(p.dist(&b.center), 1.0, abs <= 1e-9);
        }
    }

    #[test]
    fn test_intersect_circle_tangent() {
        let a = Circle2::new(Pt(0.0, 0.0), 1.0).unwrap();
        let b = Circle2::new(Pt(2.0, 0.0), 1.0).unwrap();
        let pts = a.intersect_circle(&b);
        assert_eq!(pts.len(), 1);
        assert_float_eq!(pts[0].x.0, 1.0, abs <= 1e-9);
    }

    #[test]
    fn test_intersect_circle_disjoint() {
        let a = Circle2::new(Pt(0.0, 0.0), 1.0).unwrap();
        let b = Circle2::new(Pt(5.0, 0.0), 1.0).unwrap();
        assert_eq!(a.intersect_circle(&b), vec![]);
    }
}

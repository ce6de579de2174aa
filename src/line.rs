//! Directed lines and rays.

use crate::point::{Point, Vector};
use crate::tol::{is_numeric_zero, NUMERIC_ZERO};

/// A directed, infinite line: an origin point and a unit direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line2 {
    /// A point the line passes through.
    pub origin: Point,
    /// The unit direction of the line.
    pub dir: Vector,
}

impl Line2 {
    /// Constructs a line through `origin` in direction `dir`. Panics if `dir`
    /// is (near-)zero; constructing a direction-less line is a programmer
    /// error.
    pub fn new(origin: Point, dir: Vector) -> Line2 {
        let dir = dir
            .normalized()
            .expect("Line2::new requires a nonzero direction");
        Line2 { origin, dir }
    }

    /// Constructs the line through two distinct points.
    pub fn through(a: Point, b: Point) -> Line2 {
        Line2::new(a, b - a)
    }

    /// The left-hand normal of this line's direction (unit length).
    pub fn normal(&self) -> Vector {
        self.dir.left_normal()
    }

    /// The signed perpendicular distance from `p` to this line. Positive on
    /// the side the left-hand normal points toward.
    pub fn signed_distance(&self, p: &Point) -> f64 {
        (*p - self.origin).dot(&self.normal())
    }

    /// Returns true if `p` lies on this line within the distance epsilon.
    pub fn contains_point(&self, p: &Point) -> bool {
        self.signed_distance(p).abs() <= crate::tol::DIST_EPSILON
    }

    /// Returns true if this line is parallel to `other`, within the
    /// numeric-zero threshold on the direction cross product.
    pub fn is_parallel_to(&self, other: &Line2) -> bool {
        is_numeric_zero(self.dir.cross(&other.dir))
    }

    /// Returns true if this line is collinear with `other`: parallel, and
    /// `other.origin` lies on this line.
    pub fn is_collinear_with(&self, other: &Line2) -> bool {
        self.is_parallel_to(other) && self.contains_point(&other.origin)
    }

    /// Solves for the two-line intersection parameters `(s, t)` such that
    /// `self.origin + self.dir * s == other.origin + other.dir * t`.
    ///
    /// Returns `None` ("parallel") when the determinant of the two
    /// directions is below the numeric-zero threshold.
    pub fn intersect_params(&self, other: &Line2) -> Option<(f64, f64)> {
        let det = self.dir.cross(&other.dir);
        if is_numeric_zero(det) {
            return None;
        }
        let diff = other.origin - self.origin;
        let s = diff.cross(&other.dir) / det;
        let t = diff.cross(&self.dir) / det;
        Some((s, t))
    }

    /// The point at parameter `s` along this line.
    pub fn at(&self, s: f64) -> Point {
        self.origin + self.dir * s
    }

    /// A new line with the same direction, offset by `d` along the normal.
    pub fn offset(&self, d: f64) -> Line2 {
        Line2 {
            origin: self.origin + self.normal() * d,
            dir: self.dir,
        }
    }

    /// This line reversed: same locus, opposite direction.
    pub fn reversed(&self) -> Line2 {
        Line2 {
            origin: self.origin,
            dir: -self.dir,
        }
    }
}

/// A line restricted to nonnegative parameters: `{ origin + dir * t : t >= 0 }`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray2 {
    /// The underlying (unrestricted) line.
    pub line: Line2,
}

impl Ray2 {
    /// Constructs a ray from `origin` pointing in direction `dir`.
    pub fn new(origin: Point, dir: Vector) -> Ray2 {
        Ray2 {
            line: Line2::new(origin, dir),
        }
    }

    /// Solves for the ray/line intersection parameter along `self`, or
    /// `None` if parallel or if the intersection lies at a negative
    /// parameter along the ray (outside tolerance).
    pub fn intersect_line(&self, other: &Line2) -> Option<f64> {
        let (s, _t) = self.line.intersect_params(other)?;
        if s >= -NUMERIC_ZERO {
            Some(s.max(0.0))
        } else {
            None
        }
    }

    /// The point at parameter `s` along this ray.
    pub fn at(&self, s: f64) -> Point {
        self.line.at(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{Pt, Vec2};
    use float_eq::assert_float_eq;

    #[test]
    fn test_signed_distance() {
        let l = Line2::new(Pt(0.0, 0.0), Vec2(1.0, 0.0));
        assert_float_eq!(l.signed_distance(&Pt(0.0, 1.0)), 1.0, abs <= 1e-9);
        assert_float_eq!(l.signed_distance(&Pt(0.0, -1.0)), -1.0, abs <= 1e-9);
    }

    #[test]
    fn test_intersect_params() {
        let a = Line2::new(Pt(0.0, 0.0), Vec2(1.0, 0.0));
        let b = Line2::new(Pt(1.0, -1.0), Vec2(0.0, 1.0));
        let (s, t) = a.intersect_params(&b).unwrap();
        assert_float_eq!(s, 1.0, abs <= 1e-9);
        assert_float_eq!(t, 1.0, abs <= 1e-9);
    }

    #[test]
    fn test_parallel_returns_none() {
        let a = Line2::new(Pt(0.0, 0.0), Vec2(1.0, 0.0));
        let b = Line2::new(Pt(0.0, 1.0), Vec2(2.0, 0.0));
        assert_eq!(a.intersect_params(&b), None);
    }

    #[test]
    fn test_collinear() {
        let a = Line2::new(Pt(0.0, 0.0), Vec2(1.0, 0.0));
        let b = Line2::new(Pt(5.0, 0.0), Vec2(-1.0, 0.0));
        assert!(a.is_collinear_with(&b));
        let c = Line2::new(Pt(5.0, 1.0), Vec2(-1.0, 0.0));
        assert!(!a.is_collinear_with(&c));
    }

    #[test]
    fn test_ray_intersect_line() {
        let r = Ray2::new(Pt(0.0, 0.0), Vec2(1.0, 0.0));
        let l = Line2::new(Pt(5.0, -1.0), Vec2(0.0, 1.0));
        assert_float_eq!(r.intersect_line(&l).unwrap(), 5.0, abs <= 1e-9);

        let behind = Line2::new(Pt(-5.0, -1.0), Vec2(0.0, 1.0));
        assert_eq!(r.intersect_line(&behind), None);
    }
}

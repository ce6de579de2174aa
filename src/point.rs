//! 2D points and vectors.

use float_ord::FloatOrd;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A point in 2D space.
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: FloatOrd<f64>,
    /// The y-coordinate of the point.
    pub y: FloatOrd<f64>,
}

/// A free vector in 2D space (a displacement, not anchored to the origin).
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct Vector {
    /// The x-component of the vector.
    pub x: FloatOrd<f64>,
    /// The y-component of the vector.
    pub y: FloatOrd<f64>,
}

/// An alternate constructor for points.
#[allow(non_snake_case)]
pub fn Pt(x: f64, y: f64) -> Point {
    Point {
        x: FloatOrd(x),
        y: FloatOrd(y),
    }
}

/// An alternate constructor for vectors.
#[allow(non_snake_case)]
pub fn Vec2(x: f64, y: f64) -> Vector {
    Vector {
        x: FloatOrd(x),
        y: FloatOrd(y),
    }
}

/// An alternate constructor for points which accepts an angle in radians.
#[allow(non_snake_case)]
pub fn PolarPt(r: f64, theta: f64) -> Point {
    Pt(r * theta.cos(), r * theta.sin())
}

/// An alternate constructor for vectors which accepts an angle in radians.
#[allow(non_snake_case)]
pub fn PolarVec(r: f64, theta: f64) -> Vector {
    Vec2(r * theta.cos(), r * theta.sin())
}

impl Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pt({:.10},{:.10})", self.x.0, self.y.0)
    }
}
impl Debug for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vec2({:.10},{:.10})", self.x.0, self.y.0)
    }
}

impl Sub<Point> for Point {
    type Output = Vector;
    fn sub(self, rhs: Point) -> Vector {
        Vec2(self.x.0 - rhs.x.0, self.y.0 - rhs.y.0)
    }
}
impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, rhs: Vector) -> Point {
        Pt(self.x.0 + rhs.x.0, self.y.0 + rhs.y.0)
    }
}
impl Sub<Vector> for Point {
    type Output = Point;
    fn sub(self, rhs: Vector) -> Point {
        Pt(self.x.0 - rhs.x.0, self.y.0 - rhs.y.0)
    }
}
impl Add<Vector> for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vec2(self.x.0 + rhs.x.0, self.y.0 + rhs.y.0)
    }
}
impl Sub<Vector> for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Vec2(self.x.0 - rhs.x.0, self.y.0 - rhs.y.0)
    }
}
impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        Vec2(self.x.0 * rhs, self.y.0 * rhs)
    }
}
impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, rhs: f64) -> Vector {
        Vec2(self.x.0 / rhs, self.y.0 / rhs)
    }
}
impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vec2(-self.x.0, -self.y.0)
    }
}

impl Point {
    /// Distance between two points.
    pub fn dist(&self, other: &Point) -> f64 {
        (*other - *self).norm()
    }

    /// Average of two points (their midpoint).
    pub fn avg(&self, other: &Point) -> Point {
        Pt((self.x.0 + other.x.0) / 2.0, (self.y.0 + other.y.0) / 2.0)
    }

    /// Rotate this point about `about` by `by` radians, counter-clockwise.
    #[must_use]
    pub fn rotate(&self, about: &Point, by: f64) -> Point {
        let v = *self - *about;
        *about + v.rotate(by)
    }

    /// x/y as a plain tuple.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.x.0, self.y.0)
    }
}

impl Vector {
    /// The Euclidean norm (length) of this vector.
    pub fn norm(&self) -> f64 {
        (self.x.0 * self.x.0 + self.y.0 * self.y.0).sqrt()
    }

    /// A unit vector in the same direction, or `None` if this vector is
    /// (near-)zero.
    pub fn normalized(&self) -> Option<Vector> {
        let n = self.norm();
        if n <= crate::tol::DIST_EPSILON {
            None
        } else {
            Some(*self / n)
        }
    }

    /// Dot product.
    pub fn dot(&self, other: &Vector) -> f64 {
        self.x.0 * other.x.0 + self.y.0 * other.y.0
    }

    /// 2D "cross product" (z-component of the 3D cross product of the two
    /// vectors embedded in the xy-plane).
    pub fn cross(&self, other: &Vector) -> f64 {
        self.x.0 * other.y.0 - self.y.0 * other.x.0
    }

    /// The left-hand perpendicular of this vector: rotate 90 degrees
    /// counter-clockwise.
    pub fn left_normal(&self) -> Vector {
        Vec2(-self.y.0, self.x.0)
    }

    /// This vector rotated by `by` radians, counter-clockwise.
    #[must_use]
    pub fn rotate(&self, by: f64) -> Vector {
        Vec2(
            by.cos() * self.x.0 - by.sin() * self.y.0,
            by.sin() * self.x.0 + by.cos() * self.y.0,
        )
    }

    /// The angle this vector makes with the positive x-axis, in `(-pi, pi]`.
    pub fn angle(&self) -> f64 {
        self.y.0.atan2(self.x.0)
    }
}

/// Returns true if all the points are colinear.
pub fn is_colinear_n(pts: &[Point]) -> bool {
    if pts.len() <= 2 {
        return false;
    }
    pts[2..].iter().all(|p| is_colinear_3(pts[0], pts[1], *p))
}

/// Returns true if three points are colinear, within the numeric-zero
/// threshold on the cross product of the two edge vectors.
pub fn is_colinear_3(p1: Point, p2: Point, p3: Point) -> bool {
    let a = p2 - p1;
    let b = p3 - p1;
    crate::tol::is_numeric_zero(a.cross(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_dist() {
        assert_eq!(Pt(0.0, 0.0).dist(&Pt(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_rotate_point() {
        use float_eq::assert_float_eq;
        use std::f64::consts::PI;
        let origin = Pt(0.0, 0.0);
        let p = Pt(1.0, 0.0).rotate(&origin, PI / 2.0);
        assert_float_eq!(p.x.0, 0.0, abs <= 1e-9);
        assert_float_eq!(p.y.0, 1.0, abs <= 1e-9);
    }

    #[test]
    fn test_left_normal() {
        assert_eq!(Vec2(1.0, 0.0).left_normal(), Vec2(0.0, 1.0));
        assert_eq!(Vec2(0.0, 1.0).left_normal(), Vec2(-1.0, 0.0));
    }

    #[test]
    fn test_cross_dot() {
        assert_eq!(Vec2(1.0, 0.0).cross(&Vec2(0.0, 1.0)), 1.0);
        assert_eq!(Vec2(1.0, 0.0).dot(&Vec2(1.0, 0.0)), 1.0);
    }

    #[test_case(Pt(0.0,0.0), Pt(1.0,1.0), Pt(2.0,2.0), true; "colinear diagonal")]
    #[test_case(Pt(0.0,0.0), Pt(1.0,0.0), Pt(2.0,0.0), true; "colinear horizontal")]
    #[test_case(Pt(0.0,0.0), Pt(0.0,1.0), Pt(2.0,2.0), false; "not colinear")]
    fn test_is_colinear_3(a: Point, b: Point, c: Point, expect: bool) {
        assert_eq!(is_colinear_3(a, b, c), expect);
    }

    #[test]
    fn test_is_colinear_n() {
        assert!(!is_colinear_n(&[]));
        assert!(!is_colinear_n(&[Pt(0.0, 0.0)]));
        assert!(is_colinear_n(&[Pt(0.0, 0.0), Pt(0.0, 1.0), Pt(0.0, 2.0)]));
        assert!(!is_colinear_n(&[Pt(0.0, 0.0), Pt(0.0, 1.0), Pt(1.0, 2.0)]));
    }

    #[test]
    fn test_normalized() {
        assert_eq!(Vec2(3.0, 4.0).normalized(), Some(Vec2(0.6, 0.8)));
        assert_eq!(Vec2(0.0, 0.0).normalized(), None);
    }
}

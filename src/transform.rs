//! 2D affine transforms, used by [`crate::boundary::BoundaryLoop`]'s
//! transform/translate/mirror family.

use crate::line::Line2;
use crate::point::{Point, Pt, Vec2, Vector};

/// An affine map `(x, y) -> (a*x + b*y + e, c*x + d*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine2 {
    /// The identity transform.
    pub fn identity() -> Affine2 {
        Affine2 {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// A pure translation.
    pub fn translation(dx: f64, dy: f64) -> Affine2 {
        Affine2 {
            e: dx,
            f: dy,
            ..Affine2::identity()
        }
    }

    /// A counter-clockwise rotation about the origin by `theta` radians.
    pub fn rotation(theta: f64) -> Affine2 {
        Affine2 {
            a: theta.cos(),
            b: -theta.sin(),
            c: theta.sin(),
            d: theta.cos(),
            e: 0.0,
            f: 0.0,
        }
    }

    /// Reflection across the x-axis (negates y).
    pub fn mirror_x() -> Affine2 {
        Affine2 {
            d: -1.0,
            ..Affine2::identity()
        }
    }

    /// Reflection across the y-axis (negates x).
    pub fn mirror_y() -> Affine2 {
        Affine2 {
            a: -1.0,
            ..Affine2::identity()
        }
    }

    /// Reflection across an arbitrary line.
    pub fn mirror_across_line(line: &Line2) -> Affine2 {
        let dx = line.dir.x.0;
        let dy = line.dir.y.0;
        let a = 2.0 * dx * dx - 1.0;
        let b = 2.0 * dx * dy;
        let c = 2.0 * dx * dy;
        let d = 2.0 * dy * dy - 1.0;
        let o = line.origin;
        // point' = o + R*(point - o) = R*point + (o - R*o)
        let rox = a * o.x.0 + b * o.y.0;
        let roy = c * o.x.0 + d * o.y.0;
        Affine2 {
            a,
            b,
            c,
            d,
            e: o.x.0 - rox,
            f: o.y.0 - roy,
        }
    }

    /// This transform's determinant. Negative for orientation-reversing
    /// (mirroring) transforms.
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Applies this transform to a point.
    pub fn apply_point(&self, p: &Point) -> Point {
        Pt(
            self.a * p.x.0 + self.b * p.y.0 + self.e,
            self.c * p.x.0 + self.d * p.y.0 + self.f,
        )
    }

    /// Applies this transform's linear part to a free vector (no
    /// translation).
    pub fn apply_vector(&self, v: &Vector) -> Vector {
        Vec2(self.a * v.x.0 + self.b * v.y.0, self.c * v.x.0 + self.d * v.y.0)
    }

    /// Composes `self` then `other`: `other.apply(self.apply(p))`.
    pub fn then(&self, other: &Affine2) -> Affine2 {
        Affine2 {
            a: other.a * self.a + other.b * self.c,
            b: other.a * self.b + other.b * self.d,
            c: other.c * self.a + other.d * self.c,
            d: other.c * self.b + other.d * self.d,
            e: other.a * self.e + other.b * self.f + other.e,
            f: other.c * self.e + other.d * self.f + other.f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_translation() {
        let t = Affine2::translation(1.0, 2.0);
        let p = t.apply_point(&Pt(3.0, 4.0));
        assert_eq!(p, Pt(4.0, 6.0));
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let t = Affine2::rotation(PI / 2.0);
        let p = t.apply_point(&Pt(1.0, 0.0));
        assert_float_eq!(p.x.0, 0.0, abs <= 1e-9);
        assert_float_eq!(p.y.0, 1.0, abs <= 1e-9);
        assert_float_eq!(t.determinant(), 1.0, abs <= 1e-9);
    }

    #[test]
    fn test_mirror_x_determinant_negative() {
        let t = Affine2::mirror_x();
        assert_eq!(t.apply_point(&Pt(2.0, 3.0)), Pt(2.0, -3.0));
        assert_float_eq!(t.determinant(), -1.0, abs <= 1e-9);
    }

    #[test]
    fn test_mirror_across_line_through_origin() {
        let line = Line2::new(Pt(0.0, 0.0), Vec2(1.0, 0.0));
        let t = Affine2::mirror_across_line(&line);
        let p = t.apply_point(&Pt(0.0, 5.0));
        assert_float_eq!(p.x.0, 0.0, abs <= 1e-9);
        assert_float_eq!(p.y.0, -5.0, abs <= 1e-9);
    }
}

//! Circular-arc curve elements.

use super::{Curve, CurveElement, Position, SurfacePoint};
use crate::aabb::Aabb2;
use crate::circle::{Circle2, GeometryError};
use crate::line::Line2;
use crate::point::Point;
use crate::tol::DIST_EPSILON;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// A circular-arc element: a piece of the circle centered at `center` with
/// radius `radius`, starting at angle `theta0` and sweeping by the signed
/// angle `sweep`. Positive `sweep` is counter-clockwise.
///
/// `radius` is always positive. `sweep` may be any sign but magnitude greater
/// than `2*PI` is meaningless and not produced by any constructor here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point,
    radius: f64,
    theta0: f64,
    sweep: f64,
    index: i64,
}

impl Arc {
    /// Constructs an arc. Fails if `radius` is not positive.
    pub fn new(
        center: Point,
        radius: f64,
        theta0: f64,
        sweep: f64,
        index: i64,
    ) -> Result<Arc, GeometryError> {
        if radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius);
        }
        Ok(Arc {
            center,
            radius,
            theta0,
            sweep,
            index,
        })
    }

    /// The center of this arc's circle.
    pub fn center(&self) -> Point {
        self.center
    }

    /// The radius of this arc's circle.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The starting angle, in radians.
    pub fn theta0(&self) -> f64 {
        self.theta0
    }

    /// The signed sweep angle, in radians. Positive is counter-clockwise.
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Whether this arc sweeps counter-clockwise.
    pub fn is_ccw(&self) -> bool {
        self.sweep > 0.0
    }

    /// This arc's underlying circle.
    pub fn circle(&self) -> Circle2 {
        Circle2::new(self.center, self.radius).expect("Arc invariant: radius always positive")
    }

    fn signum(&self) -> f64 {
        if self.sweep >= 0.0 {
            1.0
        } else {
            -1.0
        }
    }

    /// The angular tolerance for membership tests, scaled by this arc's
    /// radius so it corresponds to a constant worldspace distance.
    fn angle_epsilon(&self) -> f64 {
        DIST_EPSILON / self.radius
    }

    /// Returns true if `theta` (any representative, mod `2*PI`) lies within
    /// this arc's swept range, within the radius-scaled angle tolerance.
    pub fn is_theta_on_arc(&self, theta: f64) -> bool {
        let eps = self.angle_epsilon();
        let (lo, hi) = if self.sweep >= 0.0 {
            (self.theta0, self.theta0 + self.sweep)
        } else {
            (self.theta0 + self.sweep, self.theta0)
        };
        for k in [-1, 0, 1] {
            let t = theta + (k as f64) * TAU;
            if t >= lo - eps && t <= hi + eps {
                return true;
            }
        }
        false
    }

    /// The arc-length position corresponding to angle `theta`, assuming
    /// `theta` (or a `2*PI`-shifted representative) lies on this arc.
    fn l_at_theta(&self, theta: f64) -> f64 {
        let eps = self.angle_epsilon();
        let (lo, hi) = if self.sweep >= 0.0 {
            (self.theta0, self.theta0 + self.sweep)
        } else {
            (self.theta0 + self.sweep, self.theta0)
        };
        let mut best = theta;
        for k in [-1, 0, 1] {
            let t = theta + (k as f64) * TAU;
            if t >= lo - eps && t <= hi + eps {
                best = t;
                break;
            }
        }
        (self.signum() * (best - self.theta0) * self.radius).max(0.0)
    }
}

impl Curve for Arc {
    fn start(&self) -> Point {
        self.circle().point_at_angle(self.theta0)
    }
    fn end(&self) -> Point {
        self.circle().point_at_angle(self.theta0 + self.sweep)
    }
    fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }
    fn bounds(&self) -> Aabb2 {
        let mut b = Aabb2::from_point(self.start());
        b = b.union(&Aabb2::from_point(self.end()));
        for theta in [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2] {
            if self.is_theta_on_arc(theta) {
                b = b.union(&Aabb2::from_point(self.circle().point_at_angle(theta)));
            }
        }
        b.inflated(DIST_EPSILON)
    }
    fn at_length(&self, l: f64) -> SurfacePoint {
        let theta = self.theta0 + self.signum() * l / self.radius;
        let point = self.circle().point_at_angle(theta);
        let radial = (point - self.center)
            .normalized()
            .unwrap_or_else(|| crate::point::Vec2(1.0, 0.0));
        let tangent = self.signum() * radial.left_normal();
        SurfacePoint {
            point,
            tangent,
            normal: tangent.left_normal(),
        }
    }
    fn closest(&self, p: &Point) -> Position {
        let theta = self.circle().angle_to(p);
        if self.is_theta_on_arc(theta) {
            let l = self.l_at_theta(theta).clamp(0.0, self.length());
            return Position::new(l, CurveElement::Arc(*self));
        }
        if p.dist(&self.start()) <= p.dist(&self.end()) {
            Position::new(0.0, CurveElement::Arc(*self))
        } else {
            Position::new(self.length(), CurveElement::Arc(*self))
        }
    }
    fn intersections_with_line(&self, line: &Line2) -> Vec<Position> {
        let to_origin = line.origin - self.center;
        let b = 2.0 * line.dir.dot(&to_origin);
        let c = to_origin.dot(&to_origin) - self.radius * self.radius;
        let disc = b * b - 4.0 * c;
        if disc < 0.0 {
            return vec![];
        }
        let sqrt_disc = disc.max(0.0).sqrt();
        let mut out = vec![];
        for t in [(-b - sqrt_disc) / 2.0, (-b + sqrt_disc) / 2.0] {
            let point = line.at(t);
            let theta = self.circle().angle_to(&point);
            if self.is_theta_on_arc(theta) {
                let l = self.l_at_theta(theta).clamp(0.0, self.length());
                out.push(Position::new(l, CurveElement::Arc(*self)));
            }
        }
        out.dedup_by(|a, b| (a.l - b.l).abs() <= DIST_EPSILON);
        out
    }
    fn intersections_with_circle(&self, circle: &Circle2) -> Vec<Position> {
        self.circle()
            .intersect_circle(circle)
            .into_iter()
            .filter_map(|pt| {
                let theta = self.circle().angle_to(&pt);
                if self.is_theta_on_arc(theta) {
                    let l = self.l_at_theta(theta).clamp(0.0, self.length());
                    Some(Position::new(l, CurveElement::Arc(*self)))
                } else {
                    None
                }
            })
            .collect()
    }
    fn cross_product_wedge(&self) -> f64 {
        let s = self.start();
        let e = self.end();
        let chord_wedge = s.x.0 * e.y.0 - e.x.0 * s.y.0;
        // Circular-segment correction so a full circle's elements sum to
        // +-2*PI*r^2 (i.e. area +-PI*r^2 once the caller halves the total).
        let correction = self.radius * self.radius * (self.sweep - self.sweep.sin());
        chord_wedge + correction
    }
    fn split_before(&self, l: f64) -> Option<CurveElement> {
        if l <= DIST_EPSILON {
            return None;
        }
        let new_sweep = self.signum() * l / self.radius;
        Some(CurveElement::Arc(
            Arc::new(self.center, self.radius, self.theta0, new_sweep, self.index)
                .expect("radius preserved from a valid arc"),
        ))
    }
    fn split_after(&self, l: f64) -> Option<CurveElement> {
        if self.length() - l <= DIST_EPSILON {
            return None;
        }
        let new_theta0 = self.theta0 + self.signum() * l / self.radius;
        let new_sweep = self.sweep - self.signum() * l / self.radius;
        Some(CurveElement::Arc(
            Arc::new(self.center, self.radius, new_theta0, new_sweep, self.index)
                .expect("radius preserved from a valid arc"),
        ))
    }
    fn offset_by(&self, d: f64) -> CurveElement {
        let signum = self.signum();
        let mut new_radius = self.radius - d * signum;
        let mut new_sweep = self.sweep;
        if new_radius < 0.0 {
            new_radius = -new_radius;
            new_sweep = -self.sweep;
        }
        new_radius = new_radius.max(DIST_EPSILON);
        CurveElement::Arc(
            Arc::new(self.center, new_radius, self.theta0, new_sweep, self.index)
                .expect("new_radius clamped positive above"),
        )
    }
    fn reversed(&self) -> CurveElement {
        CurveElement::Arc(
            Arc::new(
                self.center,
                self.radius,
                self.theta0 + self.sweep,
                -self.sweep,
                self.index,
            )
            .expect("radius preserved from a valid arc"),
        )
    }
    fn index(&self) -> i64 {
        self.index
    }
    fn set_index(&mut self, idx: i64) {
        self.index = idx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Pt;
    use float_eq::assert_float_eq;

    fn quarter_ccw() -> Arc {
        Arc::new(Pt(0.0, 0.0), 1.0, 0.0, FRAC_PI_2, 0).unwrap()
    }

    #[test]
    fn test_start_end() {
        let a = quarter_ccw();
        assert_float_eq!(a.start().x.0, 1.0, abs <= 1e-9);
        assert_float_eq!(a.start().y.0, 0.0, abs <= 1e-9);
        assert_float_eq!(a.end().x.0, 0.0, abs <= 1e-9);
        assert_float_eq!(a.end().y.0, 1.0, abs <= 1e-9);
    }

    #[test]
    fn test_length() {
        let a = quarter_ccw();
        assert_float_eq!(a.length(), FRAC_PI_2, abs <= 1e-9);
    }

    #[test]
    fn test_at_length_midpoint() {
        let a = quarter_ccw();
        let sp = a.at_length(a.length() / 2.0);
        assert_float_eq!(sp.point.x.0, FRAC_PI_4_COS, abs <= 1e-6);
        assert_float_eq!(sp.point.y.0, FRAC_PI_4_COS, abs <= 1e-6);
    }

    const FRAC_PI_4_COS: f64 = std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_is_theta_on_arc_wraps() {
        let a = quarter_ccw();
        assert!(a.is_theta_on_arc(0.0));
        assert!(a.is_theta_on_arc(FRAC_PI_2));
        assert!(a.is_theta_on_arc(FRAC_PI_2 / 2.0));
        assert!(!a.is_theta_on_arc(PI));
        assert!(a.is_theta_on_arc(TAU));
    }

    #[test]
    fn test_reversed() {
        let a = quarter_ccw();
        let r = a.reversed();
        assert_float_eq!(r.start().x.0, a.end().x.0, abs <= 1e-9);
        assert_float_eq!(r.end().x.0, a.start().x.0, abs <= 1e-9);
        assert_float_eq!(r.length(), a.length(), abs <= 1e-9);
    }

    #[test]
    fn test_cross_product_wedge_full_circle_area() {
        let ccw = Arc::new(Pt(0.0, 0.0), 2.0, 0.0, TAU, 0).unwrap();
        assert_float_eq!(ccw.cross_product_wedge() / 2.0, 4.0 * PI, abs <= 1e-6);
        let cw = Arc::new(Pt(0.0, 0.0), 2.0, 0.0, -TAU, 0).unwrap();
        assert_float_eq!(cw.cross_product_wedge() / 2.0, -4.0 * PI, abs <= 1e-6);
    }

    #[test]
    fn test_intersections_with_circle() {
        let a = Arc::new(Pt(0.0, 0.0), 1.0, 0.0, TAU, 0).unwrap();
        let other = Circle2::new(Pt(1.0, 0.0), 1.0).unwrap();
        let positions = a.intersections_with_circle(&other);
        assert_eq!(positions.len(), 2);
    }

    #[test]
    fn test_bounds_full_circle() {
        let a = Arc::new(Pt(0.0, 0.0), 1.0, 0.0, TAU, 0).unwrap();
        let b = a.bounds();
        assert!(b.contains_point(&Pt(1.0, 0.0)));
        assert!(b.contains_point(&Pt(-1.0, 0.0)));
        assert!(b.contains_point(&Pt(0.0, 1.0)));
        assert!(b.contains_point(&Pt(0.0, -1.0)));
    }
}

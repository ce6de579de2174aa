//! Straight curve elements.

use super::{Curve, CurveElement, SurfacePoint};
use crate::aabb::Aabb2;
use crate::circle::Circle2;
use crate::line::Line2;
use crate::point::Point;
use crate::tol::DIST_EPSILON;

/// A straight element from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
    index: i64,
}

impl Segment {
    /// Constructs a segment between two points, tagged with owning-node
    /// index `index`.
    pub fn new(start: Point, end: Point, index: i64) -> Segment {
        Segment { start, end, index }
    }

    /// The line this segment lies on.
    pub fn line(&self) -> Line2 {
        Line2::through(self.start, self.end)
    }

    /// Whether this segment has (near-)zero length.
    pub fn is_degenerate(&self) -> bool {
        self.start.dist(&self.end) <= DIST_EPSILON
    }
}

impl Curve for Segment {
    fn start(&self) -> Point {
        self.start
    }
    fn end(&self) -> Point {
        self.end
    }
    fn length(&self) -> f64 {
        self.start.dist(&self.end)
    }
    fn bounds(&self) -> Aabb2 {
        Aabb2::new(self.start, self.end).inflated(DIST_EPSILON)
    }
    fn at_length(&self, l: f64) -> SurfacePoint {
        let len = self.length();
        let t = if len <= DIST_EPSILON { 0.0 } else { l / len };
        let dir = (self.end - self.start)
            .normalized()
            .unwrap_or_else(|| crate::point::Vec2(1.0, 0.0));
        SurfacePoint {
            point: self.start + (self.end - self.start) * t,
            tangent: dir,
            normal: dir.left_normal(),
        }
    }
    fn closest(&self, p: &Point) -> super::Position {
        let len = self.length();
        if len <= DIST_EPSILON {
            return super::Position::new(0.0, CurveElement::Segment(*self));
        }
        let dir = (self.end - self.start) / len;
        let t = (*p - self.start).dot(&dir);
        let t = t.clamp(0.0, len);
        super::Position::new(t, CurveElement::Segment(*self))
    }
    fn intersections_with_line(&self, line: &Line2) -> Vec<super::Position> {
        let (s, _t) = match self.line().intersect_params(line) {
            Some(v) => v,
            None => return vec![],
        };
        let len = self.length();
        if s >= -DIST_EPSILON && s <= len + DIST_EPSILON {
            vec![super::Position::new(
                s.clamp(0.0, len),
                CurveElement::Segment(*self),
            )]
        } else {
            vec![]
        }
    }
    fn intersections_with_circle(&self, circle: &Circle2) -> Vec<super::Position> {
        let len = self.length();
        if len <= DIST_EPSILON {
            return vec![];
        }
        let dir = (self.end - self.start) / len;
        let to_center = self.start - circle.center;
        let a = 1.0; // dir is unit
        let b = 2.0 * dir.dot(&to_center);
        let c = to_center.dot(&to_center) - circle.radius * circle.radius;
        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return vec![];
        }
        let sqrt_disc = disc.max(0.0).sqrt();
        let mut out = vec![];
        for root in [(-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a)] {
            if root >= -DIST_EPSILON && root <= len + DIST_EPSILON {
                out.push(super::Position::new(
                    root.clamp(0.0, len),
                    CurveElement::Segment(*self),
                ));
            }
        }
        out.dedup_by(|a, b| (a.l - b.l).abs() <= DIST_EPSILON);
        out
    }
    fn cross_product_wedge(&self) -> f64 {
        self.start.x.0 * self.end.y.0 - self.end.x.0 * self.start.y.0
    }
    fn split_before(&self, l: f64) -> Option<CurveElement> {
        if l <= DIST_EPSILON {
            return None;
        }
        let sp = self.at_length(l);
        Some(CurveElement::Segment(Segment::new(
            self.start,
            sp.point,
            self.index,
        )))
    }
    fn split_after(&self, l: f64) -> Option<CurveElement> {
        if self.length() - l <= DIST_EPSILON {
            return None;
        }
        let sp = self.at_length(l);
        Some(CurveElement::Segment(Segment::new(
            sp.point,
            self.end,
            self.index,
        )))
    }
    fn offset_by(&self, d: f64) -> CurveElement {
        let n = self.line().normal();
        CurveElement::Segment(Segment::new(
            self.start + n * d,
            self.end + n * d,
            self.index,
        ))
    }
    fn reversed(&self) -> CurveElement {
        CurveElement::Segment(Segment::new(self.end, self.start, self.index))
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

    #[test]
    fn test_length() {
        let s = Segment::new(Pt(0.0, 0.0), Pt(3.0, 4.0), 0);
        assert_eq!(s.length(), 5.0);
    }

    #[test]
    fn test_at_length_midpoint() {
        let s = Segment::new(Pt(0.0, 0.0), Pt(4.0, 0.0), 0);
        let sp = s.at_length(2.0);
        assert_eq!(sp.point, Pt(2.0, 0.0));
        assert_eq!(sp.tangent, crate::point::Vec2(1.0, 0.0));
        assert_eq!(sp.normal, crate::point::Vec2(0.0, 1.0));
    }

    #[test]
    fn test_split() {
        let s = Segment::new(Pt(0.0, 0.0), Pt(10.0, 0.0), 7);
        let before = s.split_before(3.0).unwrap();
        assert_eq!(before.start(), Pt(0.0, 0.0));
        assert_eq!(before.end(), Pt(3.0, 0.0));
        assert_eq!(before.index(), 7);
        let after = s.split_after(3.0).unwrap();
        assert_eq!(after.start(), Pt(3.0, 0.0));
        assert_eq!(after.end(), Pt(10.0, 0.0));

        assert!(s.split_before(0.0).is_none());
        assert!(s.split_after(10.0).is_none());
    }

    #[test]
    fn test_reversed() {
        let s = Segment::new(Pt(0.0, 0.0), Pt(1.0, 1.0), 3);
        let r = s.reversed();
        assert_eq!(r.start(), Pt(1.0, 1.0));
        assert_eq!(r.end(), Pt(0.0, 0.0));
        assert_eq!(r.index(), 3);
    }

    #[test]
    fn test_intersections_with_circle() {
        let s = Segment::new(Pt(-2.0, 0.0), Pt(2.0, 0.0), 0);
        let c = Circle2::new(Pt(0.0, 0.0), 1.0).unwrap();
        let positions = s.intersections_with_circle(&c);
        assert_eq!(positions.len(), 2);
        let mut ls: Vec<f64> = positions.iter().map(|p| p.l).collect();
        ls.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_float_eq!(ls[0], 1.0, abs <= 1e-9);
        assert_float_eq!(ls[1], 3.0, abs <= 1e-9);
    }

    #[test]
    fn test_cross_product_wedge_shoelace() {
        // CCW unit square area via shoelace = sum(wedge)/2
        let pts = [
            Pt(0.0, 0.0),
            Pt(1.0, 0.0),
            Pt(1.0, 1.0),
            Pt(0.0, 1.0),
        ];
        let mut sum = 0.0;
        for i in 0..4 {
            let s = Segment::new(pts[i], pts[(i + 1) % 4], 0);
            sum += s.cross_product_wedge();
        }
        assert_float_eq!(sum / 2.0, 1.0, abs <= 1e-9);
    }
}

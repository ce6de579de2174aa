//! Pairwise curve-element intersections and their derived geometric
//! predicates.

use super::{CurveElement, Position};
use crate::point::Point;
use crate::tol::{is_numeric_zero, DIST_EPSILON};

/// A single coincidence point between two curve elements, recorded as a
/// position on each of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionPair {
    /// The position of this coincidence on the first element.
    pub first: Position,
    /// The position of this coincidence on the second element.
    pub second: Position,
}

impl IntersectionPair {
    /// The world-space point of this coincidence (computed from `first`;
    /// `second` agrees with it to within the distance epsilon).
    pub fn point(&self) -> Option<Point> {
        self.first.point()
    }

    /// True if, passing through this point, the first element's direction of
    /// travel points out of the second element's interior side (positive
    /// dot of the first's tangent with the second's normal), and the
    /// position isn't sitting at the very end of the first element.
    pub fn first_exits_second(&self) -> bool {
        self.crossing_sign() > 0.0 && self.not_at_first_end()
    }

    /// True if, passing through this point, the first element's direction of
    /// travel points into the second element's interior side.
    pub fn first_enters_second(&self) -> bool {
        self.crossing_sign() < 0.0 && self.not_at_first_end()
    }

    /// True if the second element exits the first at this point (the mirror
    /// of [`Self::first_exits_second`]).
    pub fn second_exits_first(&self) -> bool {
        self.mirror_crossing_sign() > 0.0 && self.not_at_second_end()
    }

    /// True if the second element enters the first at this point (the
    /// mirror of [`Self::first_enters_second`]).
    pub fn second_enters_first(&self) -> bool {
        self.mirror_crossing_sign() < 0.0 && self.not_at_second_end()
    }

    fn not_at_first_end(&self) -> bool {
        match self.first.element_length() {
            Some(len) => self.first.l < len - DIST_EPSILON,
            None => false,
        }
    }

    fn not_at_second_end(&self) -> bool {
        match self.second.element_length() {
            Some(len) => self.second.l < len - DIST_EPSILON,
            None => false,
        }
    }

    fn crossing_sign(&self) -> f64 {
        match (self.first.surface(), self.second.surface()) {
            (Some(a), Some(b)) => {
                let d = a.tangent.dot(&b.normal);
                if is_numeric_zero(d) {
                    0.0
                } else {
                    d
                }
            }
            _ => 0.0,
        }
    }

    fn mirror_crossing_sign(&self) -> f64 {
        match (self.first.surface(), self.second.surface()) {
            (Some(a), Some(b)) => {
                let d = b.tangent.dot(&a.normal);
                if is_numeric_zero(d) {
                    0.0
                } else {
                    d
                }
            }
            _ => 0.0,
        }
    }

    /// This pair with the two sides swapped.
    pub fn swapped(&self) -> IntersectionPair {
        IntersectionPair {
            first: self.second,
            second: self.first,
        }
    }

    /// True if `other` describes the same coincidence, possibly with the two
    /// sides swapped: same point, and the same pair of owning-node indices.
    pub fn is_equivalent_to(&self, other: &IntersectionPair) -> bool {
        let same_point = match (self.point(), other.point()) {
            (Some(a), Some(b)) => a.dist(&b) <= DIST_EPSILON,
            _ => false,
        };
        if !same_point {
            return false;
        }
        let idx = (self.first.index(), self.second.index());
        let other_idx = (other.first.index(), other.second.index());
        idx == other_idx || idx == (other_idx.1, other_idx.0)
    }
}

/// Pairs up candidate positions on two elements by world-point coincidence.
/// Each candidate on `on_a` is matched against the nearest unmatched
/// candidate on `on_b` within the distance epsilon.
pub fn match_intersections(on_a: &[Position], on_b: &[Position]) -> Vec<IntersectionPair> {
    let mut used = vec![false; on_b.len()];
    let mut out = vec![];
    for pa in on_a {
        let pa_pt = match pa.point() {
            Some(p) => p,
            None => continue,
        };
        let mut best: Option<(usize, f64)> = None;
        for (j, pb) in on_b.iter().enumerate() {
            if used[j] {
                continue;
            }
            if let Some(pb_pt) = pb.point() {
                let d = pa_pt.dist(&pb_pt);
                if d <= DIST_EPSILON && best.map_or(true, |(_, bd)| d < bd) {
                    best = Some((j, d));
                }
            }
        }
        if let Some((j, _)) = best {
            used[j] = true;
            out.push(IntersectionPair {
                first: *pa,
                second: on_b[j],
            });
        }
    }
    out
}

/// All analytically-computed intersections between two curve elements,
/// dispatched by variant combination.
///
/// Each branch reuses the element-local `intersections_with_line` /
/// `intersections_with_circle` queries (already filtered to that element's
/// own parametric interval) to produce candidate positions on each side,
/// then matches them by point coincidence.
pub fn pairwise_intersections(a: &CurveElement, b: &CurveElement) -> Vec<IntersectionPair> {
    use super::Curve;
    use CurveElement::{Arc, Segment};

    match (a, b) {
        (Segment(sa), Segment(sb)) => {
            let on_a = sa.intersections_with_line(&sb.line());
            let on_b = sb.intersections_with_line(&sa.line());
            match_intersections(&on_a, &on_b)
        }
        (Segment(sa), Arc(arb)) => {
            let on_a = sa.intersections_with_circle(&arb.circle());
            let on_b = arb.intersections_with_line(&sa.line());
            match_intersections(&on_a, &on_b)
        }
        (Arc(ara), Segment(sb)) => {
            let on_a = ara.intersections_with_line(&sb.line());
            let on_b = sb.intersections_with_circle(&ara.circle());
            match_intersections(&on_a, &on_b)
        }
        (Arc(ara), Arc(arb)) => {
            let on_a = ara.intersections_with_circle(&arb.circle());
            let on_b = arb.intersections_with_circle(&ara.circle());
            match_intersections(&on_a, &on_b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Arc, Curve, Segment};
    use crate::point::Pt;

    #[test]
    fn test_segment_segment_crossing() {
        let a = CurveElement::Segment(Segment::new(Pt(-1.0, 0.0), Pt(1.0, 0.0), 0));
        let b = CurveElement::Segment(Segment::new(Pt(0.0, -1.0), Pt(0.0, 1.0), 1));
        let pairs = pairwise_intersections(&a, &b);
        assert_eq!(pairs.len(), 1);
        let p = pairs[0].point().unwrap();
        assert!(p.dist(&Pt(0.0, 0.0)) <= DIST_EPSILON);
    }

    #[test]
    fn test_segment_arc_intersection() {
        let seg = CurveElement::Segment(Segment::new(Pt(-2.0, 0.0), Pt(2.0, 0.0), 0));
        let arc = CurveElement::Arc(
            Arc::new(Pt(0.0, 0.0), 1.0, 0.0, std::f64::consts::TAU, 1).unwrap(),
        );
        let pairs = pairwise_intersections(&seg, &arc);
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_is_equivalent_to_swapped() {
        let a = CurveElement::Segment(Segment::new(Pt(-1.0, 0.0), Pt(1.0, 0.0), 0));
        let b = CurveElement::Segment(Segment::new(Pt(0.0, -1.0), Pt(0.0, 1.0), 1));
        let pairs = pairwise_intersections(&a, &b);
        let p = pairs[0];
        assert!(p.is_equivalent_to(&p.swapped()));
    }
}

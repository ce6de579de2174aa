//! Boundary-loop cleanup passes: removing degenerate elements introduced by
//! offsetting or merging. Each pass rescans from scratch after every removal
//! rather than trying to patch indices in place; loops are small enough that
//! this is simpler than it is slow.

use super::{BoundaryLoop, BoundaryPoint};
use crate::curve::{Curve, CurveElement};
use crate::point::is_colinear_3;
use crate::tol::DIST_EPSILON;

/// Repeatedly removes nodes whose outgoing element has (near-)zero length,
/// until a full pass removes nothing.
pub(super) fn remove_zero_length_elements(loop_: &mut BoundaryLoop) {
    loop {
        if loop_.ring().len() <= 1 {
            return;
        }
        let elements = loop_.elements();
        let mut removed = false;
        for element in &elements {
            if element.length() <= DIST_EPSILON {
                let _ = loop_.ring_mut().remove(element.index());
                loop_.invalidate();
                removed = true;
                break;
            }
        }
        if !removed {
            return;
        }
    }
}

/// Repeatedly removes nodes that form a zero-width spike: the element ending
/// there and the element starting there run back along each other (tangents
/// near-antiparallel at the shared point).
pub(super) fn remove_thin_sections(loop_: &mut BoundaryLoop) {
    loop {
        let elements = loop_.elements();
        let n = elements.len();
        if n < 2 {
            return;
        }
        let mut removed = false;
        for i in 0..n {
            let prev = &elements[(i + n - 1) % n];
            let cur = &elements[i];
            let prev_end_tangent = prev.at_length(prev.length()).tangent;
            let cur_start_tangent = cur.at_length(0.0).tangent;
            let folds_back = prev_end_tangent.dot(&cur_start_tangent) <= -1.0 + DIST_EPSILON;
            if folds_back && same_manifold(prev, cur) {
                let _ = loop_.ring_mut().remove(cur.index());
                loop_.invalidate();
                removed = true;
                break;
            }
        }
        if !removed {
            return;
        }
    }
}

/// Repeatedly merges a node into its neighbors when it adds no geometric
/// information: three consecutive straight nodes that are collinear, or
/// three consecutive arc nodes sharing a center and sweep direction.
pub(super) fn remove_adjacent_redundancies(loop_: &mut BoundaryLoop) {
    loop {
        let ids = loop_.ring().iter_items(None);
        if ids.len() < 3 {
            return;
        }
        let mut removed = false;
        for &id in &ids {
            let prev_id = loop_.ring().prev_of(id).unwrap();
            let next_id = loop_.ring().next_of(id).unwrap();
            let prev_bp = *loop_.ring().get(prev_id).unwrap();
            let cur_bp = *loop_.ring().get(id).unwrap();
            let next_bp = *loop_.ring().get(next_id).unwrap();
            let redundant = is_redundant(&prev_bp, &cur_bp, &next_bp);
            if redundant {
                let _ = loop_.ring_mut().remove(id);
                loop_.invalidate();
                removed = true;
                break;
            }
        }
        if !removed {
            return;
        }
    }
}

/// True iff `prev` and `cur` trace the same underlying curve (a line, or the
/// same circle) — the precondition for an antiparallel tangent at their
/// shared node to mean "this retraces itself" rather than "two distinct
/// curves happen to touch tangentially here".
fn same_manifold(prev: &CurveElement, cur: &CurveElement) -> bool {
    match (prev, cur) {
        (CurveElement::Segment(_), CurveElement::Segment(_)) => true,
        (CurveElement::Arc(a), CurveElement::Arc(b)) => {
            a.center().dist(&b.center()) <= DIST_EPSILON && (a.radius() - b.radius()).abs() <= DIST_EPSILON
        }
        _ => false,
    }
}

fn is_redundant(prev_bp: &BoundaryPoint, cur_bp: &BoundaryPoint, next_bp: &BoundaryPoint) -> bool {
    match (prev_bp, cur_bp, next_bp) {
        (BoundaryPoint::LineStart(_), BoundaryPoint::LineStart(_), BoundaryPoint::LineStart(_)) => {
            is_colinear_3(prev_bp.point(), cur_bp.point(), next_bp.point())
        }
        (
            BoundaryPoint::ArcStart {
                center: c1,
                clockwise: cw1,
                ..
            },
            BoundaryPoint::ArcStart {
                center: c2,
                clockwise: cw2,
                ..
            },
            BoundaryPoint::ArcStart { .. },
        ) => c1.dist(c2) <= DIST_EPSILON && cw1 == cw2,
        _ => false,
    }
}

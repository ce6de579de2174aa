//! Merging a flat collection of bodies into their union, resolving
//! overlaps between whole bodies (as opposed to [`crate::region::Body::operate`],
//! which applies a single tool loop to a single body).

use crate::region::Body;
use crate::relation::{shape_relation, ShapeRelation};
use tracing::trace;

/// Merges `bodies` into the smallest set of non-overlapping bodies covering
/// the same area. Bodies are folded in from largest to smallest; a body
/// that can't be merged this round (a degenerate contact — single-point
/// touch, self-tangent cut) is retried on a later round, and emitted
/// unchanged if no round ever makes progress on it.
pub fn merge_bodies(bodies: Vec<Body>) -> Vec<Body> {
    let mut sorted = bodies;
    sorted.sort_by(|a, b| b.area().abs().partial_cmp(&a.area().abs()).unwrap_or(std::cmp::Ordering::Equal));

    let mut working: Vec<Body> = vec![];
    let mut pending: Vec<Body> = sorted;

    while !pending.is_empty() {
        let mut next_pending = vec![];
        let mut progressed = false;

        for body in pending {
            match fold_in(&working, body) {
                Ok(new_working) => {
                    working = new_working;
                    progressed = true;
                }
                Err(body) => next_pending.push(body),
            }
        }

        if !progressed {
            trace!(stuck = next_pending.len(), "no progress this round, emitting unchanged");
            working.extend(next_pending);
            break;
        }
        pending = next_pending;
    }

    working
}

/// Attempts to fold `body` into `working`, returning the updated working set
/// on success or `body` itself (unchanged) if the fold couldn't be resolved
/// this round.
fn fold_in(working: &[Body], body: Body) -> Result<Vec<Body>, Body> {
    if working.is_empty() {
        return Ok(vec![body]);
    }

    let mut result = working.to_vec();
    for i in 0..result.len() {
        let (relation, _) = shape_relation(result[i].outer(), body.outer());
        match relation {
            ShapeRelation::DisjointTo => continue,
            ShapeRelation::IsSubsetOf => {
                result[i] = body;
                return Ok(result);
            }
            ShapeRelation::IsSupersetOf | ShapeRelation::Intersects => {
                let mut target = result[i].clone();
                let outcomes = target.operate(body.outer());
                if outcomes.len() != 1 {
                    return Err(body);
                }
                let mut merged = outcomes.into_iter().next().unwrap();
                for hole in body.inners() {
                    let cut = merged.operate(hole);
                    if cut.len() != 1 {
                        return Err(body);
                    }
                    merged = cut.into_iter().next().unwrap();
                }
                result[i] = merged;
                return Ok(result);
            }
        }
    }

    result.push(body);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryLoop;
    use crate::point::Pt;

    #[test]
    fn test_merge_disjoint_bodies() {
        let a = Body::from_outer(BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(1.0, 1.0)));
        let b = Body::from_outer(BoundaryLoop::rectangle(Pt(5.0, 5.0), Pt(6.0, 6.0)));
        let merged = merge_bodies(vec![a, b]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_overlapping_bodies() {
        let a = Body::from_outer(BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(4.0, 4.0)));
        let b = Body::from_outer(BoundaryLoop::rectangle(Pt(2.0, 2.0), Pt(6.0, 6.0)));
        let merged = merge_bodies(vec![a, b]);
        assert_eq!(merged.len(), 1);
        assert!((merged[0].area() - 28.0).abs() <= 1e-6);
    }

    #[test]
    fn test_merge_nested_bodies() {
        let a = Body::from_outer(BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(10.0, 10.0)));
        let b = Body::from_outer(BoundaryLoop::rectangle(Pt(2.0, 2.0), Pt(4.0, 4.0)));
        let merged = merge_bodies(vec![a, b]);
        assert_eq!(merged.len(), 1);
        assert!((merged[0].area() - 100.0).abs() <= 1e-6);
    }
}

//! The Boolean merger: turns a pair of loops and their filtered intersection
//! pairs into the loop(s) that result from unioning or intersecting them.

use crate::boundary::BoundaryLoop;
use crate::curve::{Curve, CurveElement, IntersectionPair};
use crate::error::KernelError;
use crate::relation::{shape_relation, ShapeRelation};
use crate::tol::{DIST_EPSILON, MERGE_PAD_FACTOR};
use tracing::trace;

/// Which Boolean operation a merge performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpType {
    /// Keep everything covered by either loop.
    Union,
    /// Keep only what's covered by both loops.
    Intersection,
}

/// The coarse outcome of a [`union`]/[`intersection`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum CoarseResult {
    /// The operation consumed both loops entirely.
    Destroyed,
    /// `self` is returned unmodified.
    Unchanged,
    /// `other` is returned in place of `self`.
    Replaced,
    /// New loop(s) were produced by the merger.
    Merged,
    /// `self` is unmodified but its boundary topologically intersects
    /// `other`'s.
    UnchangedMerged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    First,
    Second,
}

/// The side this pair is valid as a read-cursor position for `op`, or `None`
/// if it's valid for neither.
fn read_side(op: OpType, pair: &IntersectionPair) -> Option<Side> {
    match op {
        OpType::Union => {
            if pair.first_exits_second() {
                Some(Side::First)
            } else if pair.second_exits_first() {
                Some(Side::Second)
            } else {
                None
            }
        }
        OpType::Intersection => {
            if pair.first_enters_second() {
                Some(Side::First)
            } else if pair.second_enters_first() {
                Some(Side::Second)
            } else {
                None
            }
        }
    }
}

fn position_on(side: Side, pair: &IntersectionPair) -> crate::curve::Position {
    match side {
        Side::First => pair.first,
        Side::Second => pair.second,
    }
}

/// Unions two loops.
pub fn union(loop0: &BoundaryLoop, loop1: &BoundaryLoop) -> Result<(CoarseResult, Vec<BoundaryLoop>), KernelError> {
    dispatch(loop0, loop1, OpType::Union)
}

/// Intersects two loops.
pub fn intersection(
    loop0: &BoundaryLoop,
    loop1: &BoundaryLoop,
) -> Result<(CoarseResult, Vec<BoundaryLoop>), KernelError> {
    dispatch(loop0, loop1, OpType::Intersection)
}

fn dispatch(
    loop0: &BoundaryLoop,
    loop1: &BoundaryLoop,
    op: OpType,
) -> Result<(CoarseResult, Vec<BoundaryLoop>), KernelError> {
    let (shape, filtered) = shape_relation(loop0, loop1);
    trace!(?op, ?shape, pairs = filtered.len(), "dispatching merge");
    match shape {
        ShapeRelation::DisjointTo => match op {
            OpType::Union => Ok((CoarseResult::Merged, vec![loop0.copy(), loop1.copy()])),
            OpType::Intersection => Ok((CoarseResult::Destroyed, vec![])),
        },
        ShapeRelation::IsSubsetOf => match op {
            OpType::Union => Ok((CoarseResult::Replaced, vec![loop1.copy()])),
            OpType::Intersection => Ok((CoarseResult::Unchanged, vec![loop0.copy()])),
        },
        ShapeRelation::IsSupersetOf => match op {
            OpType::Union => Ok((CoarseResult::Unchanged, vec![loop0.copy()])),
            OpType::Intersection => Ok((CoarseResult::Replaced, vec![loop1.copy()])),
        },
        ShapeRelation::Intersects if filtered.is_empty() => {
            // One loop is nested entirely inside the other with no shared
            // boundary point (e.g. a hole tool placed strictly inside an
            // outer) — genuinely an interaction, but there are no crossing
            // pairs for the extract-one-loop walk to run on. Report both
            // loops unchanged; the caller (a region's hole bookkeeping)
            // still needs to know they topologically overlap.
            Ok((CoarseResult::UnchangedMerged, vec![loop0.copy(), loop1.copy()]))
        }
        ShapeRelation::Intersects => {
            let results = run_merger(loop0, loop1, op, &filtered)?;
            if results.is_empty() {
                Ok((CoarseResult::Destroyed, vec![]))
            } else {
                Ok((CoarseResult::Merged, results))
            }
        }
    }
}

/// Runs the extract-one-loop algorithm until every valid pair has been
/// consumed, returning the resulting loop(s).
fn run_merger(
    loop0: &BoundaryLoop,
    loop1: &BoundaryLoop,
    op: OpType,
    filtered: &[IntersectionPair],
) -> Result<Vec<BoundaryLoop>, KernelError> {
    let mut remaining: Vec<IntersectionPair> =
        filtered.iter().copied().filter(|p| read_side(op, p).is_some()).collect();

    if remaining.is_empty() {
        return Err(KernelError::MergeHasNoEntryPoint {
            first_len: loop0.count(),
            second_len: loop1.count(),
        });
    }

    let elements0 = loop0.elements();
    let elements1 = loop1.elements();
    let cap = elements0.len() + elements1.len() + remaining.len();

    let mut outputs = vec![];

    while !remaining.is_empty() {
        trace!(remaining = remaining.len(), "starting a new output loop");
        let start_pair = remaining.remove(0);
        let start_side = read_side(op, &start_pair).expect("remaining is pre-filtered to valid pairs");

        let mut output = BoundaryLoop::empty();
        let mut cur_side = start_side;
        let start_pos = position_on(start_side, &start_pair);
        let mut cur_element = start_pos.element.expect("a real intersection always carries its element");
        let mut last_l = start_pos.l;
        output.push_back(BoundaryLoop::cut_point(&cur_element, last_l));

        let mut iterations = 0usize;
        loop {
            iterations += 1;
            if iterations > cap {
                return Err(KernelError::MergeDidNotConverge {
                    first_len: loop0.count(),
                    second_len: loop1.count(),
                    cap,
                });
            }

            let same_id = cur_element.index();
            let pad = DIST_EPSILON * MERGE_PAD_FACTOR;
            let mut best: Option<(usize, f64)> = None;
            for (i, p) in remaining.iter().enumerate() {
                let pos = position_on(cur_side, p);
                if pos.index() == Some(same_id) && pos.l > last_l + pad {
                    if best.map_or(true, |(_, bl)| pos.l < bl) {
                        best = Some((i, pos.l));
                    }
                }
            }

            match best {
                None => {
                    let elements = match cur_side {
                        Side::First => &elements0,
                        Side::Second => &elements1,
                    };
                    let cur_pos_idx = elements
                        .iter()
                        .position(|e| e.index() == same_id)
                        .expect("the read cursor always sits on its own loop's element list");
                    let next_element = elements[(cur_pos_idx + 1) % elements.len()];
                    output.push_back(BoundaryLoop::cut_point(&next_element, 0.0));
                    cur_element = next_element;
                    last_l = -1.0;
                }
                Some((idx, _)) => {
                    let pair = remaining.remove(idx);
                    if pair.is_equivalent_to(&start_pair) {
                        break;
                    }
                    let new_side = read_side(op, &pair).expect("valid pairs always have a read side for this op");
                    let new_pos = position_on(new_side, &pair);
                    let new_element = new_pos.element.expect("a real intersection always carries its element");
                    output.push_back(BoundaryLoop::cut_point(&new_element, new_pos.l));
                    cur_side = new_side;
                    cur_element = new_element;
                    last_l = new_pos.l;
                }
            }
        }

        output.remove_thin_sections();
        output.remove_adjacent_redundancies();
        if !output.is_null_set() {
            outputs.push(output);
        }
    }

    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Pt;
    use assert_matches::assert_matches;

    #[test]
    fn test_union_overlapping_rectangles() {
        let a = BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(4.0, 4.0));
        let b = BoundaryLoop::rectangle(Pt(2.0, 2.0), Pt(6.0, 6.0));
        let (result, loops) = union(&a, &b).unwrap();
        assert_eq!(result, CoarseResult::Merged);
        assert_eq!(loops.len(), 1);
        assert!((loops[0].area() - 28.0).abs() <= 1e-6);
    }

    #[test]
    fn test_intersection_overlapping_rectangles() {
        let a = BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(4.0, 4.0));
        let b = BoundaryLoop::rectangle(Pt(2.0, 2.0), Pt(6.0, 6.0));
        let (result, loops) = intersection(&a, &b).unwrap();
        assert_eq!(result, CoarseResult::Merged);
        assert_eq!(loops.len(), 1);
        assert!((loops[0].area() - 4.0).abs() <= 1e-6);
    }

    #[test]
    fn test_union_disjoint_rectangles() {
        let a = BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(1.0, 1.0));
        let b = BoundaryLoop::rectangle(Pt(5.0, 5.0), Pt(6.0, 6.0));
        let loops = assert_matches!(union(&a, &b), Ok((CoarseResult::Merged, loops)) => loops);
        assert_eq!(loops.len(), 2);
    }

    #[test]
    fn test_intersection_disjoint_rectangles() {
        let a = BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(1.0, 1.0));
        let b = BoundaryLoop::rectangle(Pt(5.0, 5.0), Pt(6.0, 6.0));
        let (result, loops) = intersection(&a, &b).unwrap();
        assert_eq!(result, CoarseResult::Destroyed);
        assert!(loops.is_empty());
    }

    #[test]
    fn test_union_subset_rectangle() {
        let a = BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(10.0, 10.0));
        let b = BoundaryLoop::rectangle(Pt(2.0, 2.0), Pt(4.0, 4.0));
        let (result, loops) = union(&a, &b).unwrap();
        assert_eq!(result, CoarseResult::Unchanged);
        assert!((loops[0].area() - 100.0).abs() <= 1e-6);
    }
}

//! Regions: a filled outer loop plus zero or more holes, and the Boolean
//! operations a laser-cutting CAD pipeline runs on them.

use crate::boundary::BoundaryLoop;
use crate::merge::CoarseResult;
use crate::point::Point;
use crate::transform::Affine2;
use tracing::trace;

/// A single connected planar region: a positive outer loop plus zero or more
/// negative inner loops (holes). The outer loop is always positive and every
/// inner loop is always negative; [`Body::operate`] maintains this
/// invariant.
#[derive(Debug, Clone)]
pub struct Body {
    outer: BoundaryLoop,
    inners: Vec<BoundaryLoop>,
}

impl Body {
    /// A body with no holes.
    pub fn from_outer(outer: BoundaryLoop) -> Body {
        Body { outer, inners: vec![] }
    }

    /// A body with the given outer loop and holes.
    pub fn new(outer: BoundaryLoop, inners: Vec<BoundaryLoop>) -> Body {
        Body { outer, inners }
    }

    /// The empty body (a null-set outer, no holes).
    pub fn empty() -> Body {
        Body {
            outer: BoundaryLoop::empty(),
            inners: vec![],
        }
    }

    /// This body's outer loop.
    pub fn outer(&self) -> &BoundaryLoop {
        &self.outer
    }

    /// This body's holes.
    pub fn inners(&self) -> &[BoundaryLoop] {
        &self.inners
    }

    /// The filled area: outer area plus the (negative) areas of every hole.
    pub fn area(&self) -> f64 {
        self.outer.area() + self.inners.iter().map(|i| i.area()).sum::<f64>()
    }

    /// True iff `p` is inside the outer loop and outside every hole.
    pub fn encloses(&self, p: &Point) -> bool {
        self.outer.encloses(p) && self.inners.iter().all(|hole| !hole.encloses(p))
    }

    /// A deep copy with fresh node ids throughout.
    pub fn copy(&self) -> Body {
        Body {
            outer: self.outer.copy(),
            inners: self.inners.iter().map(BoundaryLoop::copy).collect(),
        }
    }

    /// Translates every loop in this body.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.outer.translate(dx, dy);
        for inner in &mut self.inners {
            inner.translate(dx, dy);
        }
    }

    /// Mirrors every loop in this body across the y-axis.
    pub fn mirror_y(&mut self) {
        self.outer.mirror_y();
        for inner in &mut self.inners {
            inner.mirror_y();
        }
    }

    /// Rotates every loop in this body about `about` by `by` radians.
    pub fn rotate(&mut self, about: &Point, by: f64) {
        let t = Affine2::translation(-about.x.0, -about.y.0)
            .then(&Affine2::rotation(by))
            .then(&Affine2::translation(about.x.0, about.y.0));
        self.outer.transform(&t);
        for inner in &mut self.inners {
            inner.transform(&t);
        }
    }

    /// Flattens this body to a single loop by bridging each hole to its
    /// nearest point on the outer (or on a previously-bridged hole),
    /// producing one traversal with zero enclosed area cancellation.
    pub fn to_single_loop(&self) -> BoundaryLoop {
        let mut bps = self.outer.boundary_points();
        for hole in &self.inners {
            let hole_bps = hole.boundary_points();
            if hole_bps.is_empty() {
                continue;
            }
            let bridge_from = bps
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| {
                    let da = a.point().dist(&hole_bps[0].point());
                    let db = b.point().dist(&hole_bps[0].point());
                    da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
                })
                .map(|(i, _)| i)
                .unwrap_or(0);
            let bridge_point = bps[bridge_from];
            let mut spliced = Vec::with_capacity(bps.len() + hole_bps.len() + 2);
            spliced.extend_from_slice(&bps[..=bridge_from]);
            spliced.extend_from_slice(&hole_bps);
            spliced.push(bridge_point);
            spliced.extend_from_slice(&bps[(bridge_from + 1)..]);
            bps = spliced;
        }
        BoundaryLoop::from_points(bps)
    }

    /// Applies a tool loop to this body, via union (positive tool) or cut
    /// (negative tool). Returns the resulting body or bodies: a positive
    /// tool never splits a body, but a negative tool may split the outer
    /// into several disjoint pieces, each becoming its own output body.
    pub fn operate(&self, tool: &BoundaryLoop) -> Vec<Body> {
        if tool.is_positive() {
            trace!("applying positive tool");
            vec![self.operate_positive(tool)]
        } else {
            trace!("applying negative tool");
            self.operate_negative(tool)
        }
    }

    fn operate_positive(&self, tool: &BoundaryLoop) -> Body {
        let (result, mut new_inners) = match self.outer.union(tool) {
            Ok((CoarseResult::Unchanged, _)) => (self.outer.clone(), vec![]),
            Ok((CoarseResult::Replaced, loops)) => (loops[0].clone(), vec![]),
            Ok((CoarseResult::Merged, loops)) => {
                let positives: Vec<BoundaryLoop> = loops.iter().filter(|l| l.is_positive()).cloned().collect();
                let negatives: Vec<BoundaryLoop> = loops.into_iter().filter(|l| !l.is_positive()).collect();
                assert_eq!(
                    positives.len(),
                    1,
                    "union with a positive tool must yield exactly one positive outer"
                );
                (positives.into_iter().next().unwrap(), negatives)
            }
            Ok((CoarseResult::Destroyed, _)) => panic!("a positive outer can never be destroyed by union"),
            Ok((CoarseResult::UnchangedMerged, _)) => (self.outer.clone(), vec![]),
            Err(_) => (self.outer.clone(), vec![]),
        };

        let mut inners = vec![];
        for hole in &self.inners {
            match hole.union(tool) {
                Ok((CoarseResult::Unchanged, loops)) => inners.push(loops[0].clone()),
                Ok((CoarseResult::Merged, loops)) => {
                    inners.extend(loops.into_iter().filter(|l| !l.is_positive()));
                }
                // A hole nested entirely inside the tool's footprint is
                // filled back in by it, same as an ordinary Destroyed.
                Ok((CoarseResult::Replaced, _))
                | Ok((CoarseResult::Destroyed, _))
                | Ok((CoarseResult::UnchangedMerged, _)) => {}
                Err(_) => inners.push(hole.clone()),
            }
        }
        inners.append(&mut new_inners);

        Body { outer: result, inners }
    }

    fn operate_negative(&self, tool: &BoundaryLoop) -> Vec<Body> {
        let (outers, mut hole_candidates): (Vec<BoundaryLoop>, Vec<BoundaryLoop>) =
            match self.outer.intersection(tool) {
                Ok((CoarseResult::Destroyed, _)) => return vec![],
                Ok((CoarseResult::Unchanged, loops)) => (loops, vec![]),
                Ok((CoarseResult::Replaced, _)) => return vec![],
                Ok((CoarseResult::Merged, loops)) => {
                    let positives: Vec<BoundaryLoop> = loops.iter().filter(|l| l.is_positive()).cloned().collect();
                    let negatives: Vec<BoundaryLoop> = loops.into_iter().filter(|l| !l.is_positive()).collect();
                    (positives, negatives)
                }
                // The tool sits entirely inside the outer with no shared
                // boundary point: the outer is untouched and the tool itself
                // becomes a new hole.
                Ok((CoarseResult::UnchangedMerged, loops)) => (vec![self.outer.clone()], vec![loops[1].clone()]),
                Err(_) => (vec![self.outer.clone()], vec![]),
            };

        if outers.is_empty() {
            return vec![];
        }

        let mut bodies = vec![];
        for seed_outer in outers {
            let mut outer = seed_outer;
            let mut queue: Vec<BoundaryLoop> = self.inners.clone();
            queue.append(&mut hole_candidates.clone());
            let mut resolved: Vec<BoundaryLoop> = vec![];

            while let Some(hole) = queue.pop() {
                match outer.union(&hole) {
                    Ok((CoarseResult::Unchanged, _)) => resolved.push(hole),
                    Ok((CoarseResult::Replaced, loops)) => {
                        outer = loops[0].clone();
                        queue.extend(resolved.drain(..));
                    }
                    Ok((CoarseResult::Merged, loops)) => {
                        let positives: Vec<BoundaryLoop> =
                            loops.iter().filter(|l| l.is_positive()).cloned().collect();
                        if positives.len() == 1 {
                            outer = positives.into_iter().next().unwrap();
                            queue.extend(resolved.drain(..));
                        }
                    }
                    Ok((CoarseResult::Destroyed, _)) => {}
                    // The hole sits entirely inside the outer with no shared
                    // boundary point: it survives untouched, same as Unchanged.
                    Ok((CoarseResult::UnchangedMerged, _)) => resolved.push(hole),
                    Err(_) => resolved.push(hole),
                }
            }

            bodies.push(Body {
                outer,
                inners: merge_holes(resolved),
            });
        }
        bodies
    }
}

/// Merges a flat list of holes pairwise: overlapping holes union into one
/// larger hole, an enclosed hole is dropped, disjoint holes are both kept.
fn merge_holes(mut holes: Vec<BoundaryLoop>) -> Vec<BoundaryLoop> {
    let mut merged: Vec<BoundaryLoop> = vec![];
    'outer: while let Some(hole) = holes.pop() {
        for i in 0..merged.len() {
            match merged[i].union(&hole) {
                Ok((CoarseResult::Unchanged, _)) => continue,
                Ok((CoarseResult::Replaced, _)) => {
                    merged[i] = hole;
                    continue 'outer;
                }
                Ok((CoarseResult::Merged, loops)) => {
                    if let Some(combined) = loops.into_iter().find(|l| !l.is_positive()) {
                        merged.remove(i);
                        holes.push(combined);
                        continue 'outer;
                    }
                }
                _ => {}
            }
        }
        merged.push(hole);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Pt;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_positive_tool_grows_outer() {
        let outer = BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(7.0, 3.0));
        let body = Body::from_outer(outer);
        let tool = BoundaryLoop::rectangle(Pt(7.0, 1.0), Pt(8.0, 2.0));
        let results = body.operate(&tool);
        assert_eq!(results.len(), 1);
        assert!((results[0].area() - 22.0).abs() <= 1e-6);
    }

    #[test]
    fn test_negative_tool_creates_hole() {
        let outer = BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(3.0, 3.0));
        let body = Body::from_outer(outer);
        let tool = BoundaryLoop::rectangle(Pt(1.0, 1.0), Pt(2.0, 2.0)).reversed();
        let results = body.operate(&tool);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].inners().len(), 1);
        assert!((results[0].area() - 8.0).abs() <= 1e-6);
    }

    #[test]
    fn test_encloses_respects_holes() {
        let outer = BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(3.0, 3.0));
        let hole = BoundaryLoop::rectangle(Pt(1.0, 1.0), Pt(2.0, 2.0)).reversed();
        let body = Body::new(outer, vec![hole]);
        assert!(body.encloses(&Pt(0.5, 0.5)));
        assert!(!body.encloses(&Pt(1.5, 1.5)));
    }
}

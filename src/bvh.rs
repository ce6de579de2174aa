//! A bounding-volume hierarchy over curve elements, used to cut down the
//! quadratic cost of finding intersections between two boundary loops.

use crate::aabb::Aabb2;
use crate::curve::{Curve, CurveElement, IntersectionPair};

/// Leaves hold at most this many elements before splitting further.
const LEAF_CAPACITY: usize = 3;

#[derive(Debug, Clone)]
enum Node {
    Leaf(Vec<CurveElement>),
    Split {
        bounds: Aabb2,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// A static bounding-volume hierarchy over a fixed set of curve elements.
/// Built once per boundary loop and rebuilt whenever the loop's elements
/// change.
#[derive(Debug, Clone)]
pub struct Bvh {
    root: Node,
    bounds: Aabb2,
}

impl Bvh {
    /// Builds a tree over `elements` via recursive median-split on
    /// alternating x/y coordinates of each element's start point.
    pub fn build(elements: Vec<CurveElement>) -> Bvh {
        let bounds = elements
            .iter()
            .map(|e| e.bounds())
            .fold(Aabb2::EMPTY, |acc, b| acc.union(&b));
        let root = build_node(elements, 0);
        Bvh { root, bounds }
    }

    /// This tree's overall bounds.
    pub fn bounds(&self) -> Aabb2 {
        self.bounds
    }

    /// All elements in this tree whose bounds overlap `test`'s bounds.
    pub fn query(&self, test: &Aabb2) -> Vec<CurveElement> {
        let mut out = vec![];
        collect_overlapping(&self.root, test, &mut out);
        out
    }

    /// All analytically-computed intersections between this tree's elements
    /// and `other`'s, found by recursive descent: leaves are compared
    /// pairwise, and subtrees whose bounds don't overlap are skipped
    /// entirely.
    pub fn intersections(&self, other: &Bvh) -> Vec<IntersectionPair> {
        let mut out = vec![];
        intersect_nodes(&self.root, &other.root, &mut out);
        out
    }
}

fn build_node(mut elements: Vec<CurveElement>, depth: usize) -> Node {
    if elements.len() <= LEAF_CAPACITY {
        return Node::Leaf(elements);
    }
    if depth % 2 == 0 {
        elements.sort_by(|a, b| {
            a.start()
                .x
                .partial_cmp(&b.start().x)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    } else {
        elements.sort_by(|a, b| {
            a.start()
                .y
                .partial_cmp(&b.start().y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
    let mid = elements.len() / 2;
    let right_elems = elements.split_off(mid);
    let left = build_node(elements, depth + 1);
    let right = build_node(right_elems, depth + 1);
    let bounds = node_bounds(&left).union(&node_bounds(&right));
    Node::Split {
        bounds,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn node_bounds(node: &Node) -> Aabb2 {
    match node {
        Node::Leaf(elements) => elements
            .iter()
            .map(|e| e.bounds())
            .fold(Aabb2::EMPTY, |acc, b| acc.union(&b)),
        Node::Split { bounds, .. } => *bounds,
    }
}

fn collect_overlapping(node: &Node, test: &Aabb2, out: &mut Vec<CurveElement>) {
    match node {
        Node::Leaf(elements) => {
            for e in elements {
                if e.bounds().intersects(test) {
                    out.push(*e);
                }
            }
        }
        Node::Split { bounds, left, right } => {
            if !bounds.intersects(test) {
                return;
            }
            collect_overlapping(left, test, out);
            collect_overlapping(right, test, out);
        }
    }
}

fn intersect_nodes(a: &Node, b: &Node, out: &mut Vec<IntersectionPair>) {
    if !node_bounds(a).intersects(&node_bounds(b)) {
        return;
    }
    match (a, b) {
        (Node::Leaf(ea), Node::Leaf(eb)) => {
            for x in ea {
                for y in eb {
                    if !x.bounds().intersects(&y.bounds()) {
                        continue;
                    }
                    out.extend(x.pairwise_intersections(y));
                }
            }
        }
        (Node::Leaf(_), Node::Split { left, right, .. }) => {
            intersect_nodes(a, left, out);
            intersect_nodes(a, right, out);
        }
        (Node::Split { left, right, .. }, Node::Leaf(_)) => {
            intersect_nodes(left, b, out);
            intersect_nodes(right, b, out);
        }
        (
            Node::Split {
                left: al, right: ar, ..
            },
            Node::Split {
                left: bl, right: br, ..
            },
        ) => {
            intersect_nodes(al, bl, out);
            intersect_nodes(al, br, out);
            intersect_nodes(ar, bl, out);
            intersect_nodes(ar, br, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Segment;
    use crate::point::Pt;

    fn square_elements() -> Vec<CurveElement> {
        let pts = [Pt(0.0, 0.0), Pt(4.0, 0.0), Pt(4.0, 4.0), Pt(0.0, 4.0)];
        (0..4)
            .map(|i| CurveElement::Segment(Segment::new(pts[i], pts[(i + 1) % 4], i as i64)))
            .collect()
    }

    #[test]
    fn test_build_and_query() {
        let bvh = Bvh::build(square_elements());
        let hits = bvh.query(&Aabb2::new(Pt(-1.0, -1.0), Pt(1.0, 1.0)));
        assert!(!hits.is_empty());
    }

    #[test]
    fn test_intersections_between_two_loops() {
        let a = Bvh::build(square_elements());
        let pts = [Pt(2.0, 2.0), Pt(6.0, 2.0), Pt(6.0, 6.0), Pt(2.0, 6.0)];
        let other_elements: Vec<CurveElement> = (0..4)
            .map(|i| {
                CurveElement::Segment(Segment::new(
                    pts[i],
                    pts[(i + 1) % 4],
                    (10 + i) as i64,
                ))
            })
            .collect();
        let b = Bvh::build(other_elements);
        let pairs = a.intersections(&b);
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_many_elements_splits() {
        let elements: Vec<CurveElement> = (0..20)
            .map(|i| {
                let x = i as f64;
                CurveElement::Segment(Segment::new(Pt(x, 0.0), Pt(x, 1.0), i))
            })
            .collect();
        let bvh = Bvh::build(elements);
        assert!(matches!(bvh.root, Node::Split { .. }));
    }
}

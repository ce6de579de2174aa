//! Boundary loops: the circular curve manifold a region's outer edge and
//! holes are built from.

mod cleanup;
mod serde_text;

pub use serde_text::ParseError;

use crate::aabb::Aabb2;
use crate::bvh::Bvh;
use crate::circle::Circle2;
use crate::curve::{Arc, Curve, CurveElement, IntersectionPair, Position, Segment};
use crate::error::KernelError;
use crate::line::{Line2, Ray2};
use crate::merge::{self, CoarseResult};
use crate::point::{Point, Pt, Vec2};
use crate::relation::{self, BoundaryRelation, ShapeRelation};
use crate::ring::IdLoop;
use crate::tol::{is_numeric_zero, DIST_EPSILON};
use crate::transform::Affine2;
use std::cell::RefCell;
use std::collections::HashMap;

/// A node's declared curve-to-next-neighbor tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryPoint {
    /// The curve to the next node is a straight segment.
    LineStart(Point),
    /// The curve to the next node is a circular arc on the circle centered
    /// at `center`, traveling clockwise iff `clockwise`.
    ArcStart {
        point: Point,
        center: Point,
        clockwise: bool,
    },
}

impl BoundaryPoint {
    /// This node's own point, regardless of tag.
    pub fn point(&self) -> Point {
        match self {
            BoundaryPoint::LineStart(p) => *p,
            BoundaryPoint::ArcStart { point, .. } => *point,
        }
    }
}

#[derive(Debug, Default, Clone)]
struct Cache {
    elements: Option<Vec<CurveElement>>,
    bvh: Option<Bvh>,
    area: Option<f64>,
    bounds: Option<Aabb2>,
}

impl Cache {
    fn clear(&mut self) {
        *self = Cache::default();
    }
}

/// A circular doubly-linked sequence of boundary points describing a closed
/// planar curve. Straight and arc elements are interpolated lazily from
/// each node's tag and its successor's point.
#[derive(Debug, Clone)]
pub struct BoundaryLoop {
    ring: IdLoop<BoundaryPoint>,
    cache: RefCell<Cache>,
}

impl BoundaryLoop {
    /// The empty loop (0 nodes).
    pub fn empty() -> BoundaryLoop {
        BoundaryLoop {
            ring: IdLoop::new(),
            cache: RefCell::new(Cache::default()),
        }
    }

    /// Builds a loop from an ordered sequence of boundary points.
    pub fn from_points(points: Vec<BoundaryPoint>) -> BoundaryLoop {
        let mut loop_ = BoundaryLoop::empty();
        for bp in points {
            loop_.push_back(bp);
        }
        loop_
    }

    /// An axis-aligned rectangle, traversed counter-clockwise from `min`.
    pub fn rectangle(min: Point, max: Point) -> BoundaryLoop {
        BoundaryLoop::from_points(vec![
            BoundaryPoint::LineStart(Pt(min.x.0, min.y.0)),
            BoundaryPoint::LineStart(Pt(max.x.0, min.y.0)),
            BoundaryPoint::LineStart(Pt(max.x.0, max.y.0)),
            BoundaryPoint::LineStart(Pt(min.x.0, max.y.0)),
        ])
    }

    /// A rectangle of the given width/height, centered at `center`.
    pub fn centered_rectangle(center: Point, width: f64, height: f64) -> BoundaryLoop {
        let hw = width / 2.0;
        let hh = height / 2.0;
        BoundaryLoop::rectangle(
            Pt(center.x.0 - hw, center.y.0 - hh),
            Pt(center.x.0 + hw, center.y.0 + hh),
        )
    }

    /// A full circle, represented as a single self-referential `ArcStart`
    /// node.
    pub fn circle(center: Point, radius: f64) -> BoundaryLoop {
        BoundaryLoop::from_points(vec![BoundaryPoint::ArcStart {
            point: center + Vec2(radius, 0.0),
            center,
            clockwise: false,
        }])
    }

    /// A straight-edged polygon from an ordered point sequence.
    pub fn polygon(points: Vec<Point>) -> BoundaryLoop {
        BoundaryLoop::from_points(points.into_iter().map(BoundaryPoint::LineStart).collect())
    }

    /// A deep copy of this loop (fresh node ids, same shape).
    pub fn copy(&self) -> BoundaryLoop {
        BoundaryLoop::from_points(self.ring.iter_items(None).into_iter().map(|id| *self.ring.get(id).unwrap()).collect())
    }

    fn invalidate(&mut self) {
        self.cache.get_mut().clear();
    }

    pub(crate) fn push_back(&mut self, bp: BoundaryPoint) -> i64 {
        let id = if self.ring.is_empty() {
            self.ring.insert_between(bp, None, None).unwrap()
        } else {
            let head = self.ring.head().unwrap();
            let tail = self.ring.tail().unwrap();
            self.ring.insert_between(bp, Some(tail), Some(head)).unwrap()
        };
        self.invalidate();
        id
    }

    /// The number of nodes.
    pub fn count(&self) -> usize {
        self.ring.len()
    }

    /// True iff this loop has zero nodes, or exactly one `LineStart` node.
    pub fn is_null_set(&self) -> bool {
        match self.ring.len() {
            0 => true,
            1 => matches!(
                self.ring.get(self.ring.head().unwrap()).unwrap(),
                BoundaryPoint::LineStart(_)
            ),
            _ => false,
        }
    }

    /// The head node's id.
    pub fn head(&self) -> Option<i64> {
        self.ring.head()
    }

    /// The tail node's id.
    pub fn tail(&self) -> Option<i64> {
        self.ring.tail()
    }

    /// The raw boundary-point tags, in ring order starting at head.
    pub fn boundary_points(&self) -> Vec<BoundaryPoint> {
        self.ring
            .iter_items(None)
            .into_iter()
            .map(|id| *self.ring.get(id).unwrap())
            .collect()
    }

    fn element_for(&self, id: i64, bp: &BoundaryPoint, next_bp: &BoundaryPoint) -> CurveElement {
        match bp {
            BoundaryPoint::LineStart(p) => CurveElement::Segment(Segment::new(*p, next_bp.point(), id)),
            BoundaryPoint::ArcStart {
                point,
                center,
                clockwise,
            } => {
                let radius = center.dist(point);
                let next_pt = next_bp.point();
                let next_radius = center.dist(&next_pt);
                assert!(
                    (next_radius - radius).abs() <= DIST_EPSILON,
                    "ArcStart invariant violated: successor point is not on the declared circle"
                );
                let circle =
                    Circle2::new(*center, radius).expect("ArcStart invariant violated: zero-radius arc");
                let theta0 = circle.angle_to(point);
                let theta1 = circle.angle_to(&next_pt);
                let same_point = point.dist(&next_pt) <= DIST_EPSILON;
                let sweep = arc_sweep(theta0, theta1, *clockwise, same_point);
                CurveElement::Arc(
                    Arc::new(*center, radius, theta0, sweep, id)
                        .expect("radius validated positive above"),
                )
            }
        }
    }

    fn build_elements(&self) -> Vec<CurveElement> {
        let ids = self.ring.iter_items(None);
        ids.iter()
            .map(|&id| {
                let bp = *self.ring.get(id).unwrap();
                let next_id = self.ring.next_of(id).unwrap();
                let next_bp = *self.ring.get(next_id).unwrap();
                self.element_for(id, &bp, &next_bp)
            })
            .collect()
    }

    /// The materialised curve elements, in ring order, cached until the next
    /// mutation.
    pub fn elements(&self) -> Vec<CurveElement> {
        if let Some(e) = &self.cache.borrow().elements {
            return e.clone();
        }
        let built = self.build_elements();
        self.cache.borrow_mut().elements = Some(built.clone());
        built
    }

    /// This loop's bounding-volume hierarchy, cached until the next
    /// mutation.
    pub fn bvh(&self) -> Bvh {
        if let Some(b) = &self.cache.borrow().bvh {
            return b.clone();
        }
        let built = Bvh::build(self.elements());
        self.cache.borrow_mut().bvh = Some(built.clone());
        built
    }

    /// The signed area (shoelace sum over elements' `cross_product_wedge`,
    /// including each arc's circular-cap correction), cached until the next
    /// mutation.
    pub fn area(&self) -> f64 {
        if let Some(a) = self.cache.borrow().area {
            return a;
        }
        let a: f64 = self.elements().iter().map(|e| e.cross_product_wedge()).sum::<f64>() / 2.0;
        self.cache.borrow_mut().area = Some(a);
        a
    }

    /// True iff `area() > 0`.
    pub fn is_positive(&self) -> bool {
        self.area() > 0.0
    }

    /// This loop's axis-aligned bounds, cached until the next mutation.
    pub fn bounds(&self) -> Aabb2 {
        if let Some(b) = self.cache.borrow().bounds {
            return b;
        }
        let b = self
            .elements()
            .iter()
            .map(|e| e.bounds())
            .fold(Aabb2::EMPTY, |acc, x| acc.union(&x));
        self.cache.borrow_mut().bounds = Some(b);
        b
    }

    /// Casts a ray from `p` and applies the point-enclosure oracle: `p` is
    /// enclosed iff the ray crosses this loop's boundary an unequal number
    /// of times in the entering/exiting directions.
    pub fn encloses(&self, p: &Point) -> bool {
        let ray = Ray2::new(*p, Vec2(1.0, 0.0));
        let far_x = match self.bounds() {
            Aabb2::Empty => p.x.0,
            Aabb2::Box { max, .. } => max.x.0,
        };
        let strip = Aabb2::new(*p, Pt(far_x + 1.0, p.y.0));
        let mut positions = vec![];
        for e in self.bvh().query(&strip) {
            for pos in e.intersections_with_line(&ray.line) {
                if let Some(pt) = pos.point() {
                    if (pt - *p).dot(&ray.line.dir) >= -DIST_EPSILON {
                        positions.push(pos);
                    }
                }
            }
        }
        point_enclosure_oracle(&ray, &positions)
    }

    /// `encloses(p) == is_positive()`: true for points logically "inside"
    /// this loop's contribution to a region (a hole's `includes` is false
    /// for points it encloses).
    pub fn includes(&self, p: &Point) -> bool {
        self.encloses(p) == self.is_positive()
    }

    /// The polarity-independent boundary relation to `other`, plus the
    /// filtered intersection pairs backing it.
    pub fn loop_relation_to(&self, other: &BoundaryLoop) -> (BoundaryRelation, Vec<IntersectionPair>) {
        relation::boundary_relation(self, other)
    }

    /// The polarity-aware shape relation to `other`, plus the filtered
    /// intersection pairs backing it.
    pub fn shape_relation_to(&self, other: &BoundaryLoop) -> (ShapeRelation, Vec<IntersectionPair>) {
        relation::shape_relation(self, other)
    }

    /// Unions this loop with `other`.
    pub fn union(&self, other: &BoundaryLoop) -> Result<(CoarseResult, Vec<BoundaryLoop>), KernelError> {
        merge::union(self, other)
    }

    /// Intersects this loop with `other`.
    pub fn intersection(&self, other: &BoundaryLoop) -> Result<(CoarseResult, Vec<BoundaryLoop>), KernelError> {
        merge::intersection(self, other)
    }

    /// Applies a general affine transform. Orientation-reversing transforms
    /// (negative determinant, e.g. mirrors) flip every arc's recorded
    /// clockwise direction to match.
    pub fn transform(&mut self, t: &Affine2) {
        let flips = t.determinant() < 0.0;
        let ids = self.ring.iter_items(None);
        for id in ids {
            let bp = *self.ring.get(id).unwrap();
            let new_bp = match bp {
                BoundaryPoint::LineStart(p) => BoundaryPoint::LineStart(t.apply_point(&p)),
                BoundaryPoint::ArcStart {
                    point,
                    center,
                    clockwise,
                } => BoundaryPoint::ArcStart {
                    point: t.apply_point(&point),
                    center: t.apply_point(&center),
                    clockwise: if flips { !clockwise } else { clockwise },
                },
            };
            *self.ring.get_mut(id).unwrap() = new_bp;
        }
        self.invalidate();
    }

    /// Translates every node by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.transform(&Affine2::translation(dx, dy));
    }

    /// Reflects across an arbitrary line.
    pub fn mirror(&mut self, line: &Line2) {
        self.transform(&Affine2::mirror_across_line(line));
    }

    /// Reflects across the x-axis.
    pub fn mirror_x(&mut self) {
        self.transform(&Affine2::mirror_x());
    }

    /// Reflects across the y-axis.
    pub fn mirror_y(&mut self) {
        self.transform(&Affine2::mirror_y());
    }

    /// Reverses this loop's traversal direction: a new loop tracing the
    /// same geometric boundary the other way, with area negated.
    pub fn reversed(&self) -> BoundaryLoop {
        let mut copy = self.clone();
        copy.reverse_in_place();
        copy
    }

    fn reverse_in_place(&mut self) {
        // Each node's tag describes the curve from itself to its *next*
        // neighbor. After reversal a node's next is its old prev, so its new
        // tag must carry the old prev's curve metadata (reversed), while its
        // own point never moves.
        let ids = self.ring.iter_items(None);
        let mut updates = vec![];
        for &id in &ids {
            let prev_id = self.ring.prev_of(id).unwrap();
            let own_point = self.ring.get(id).unwrap().point();
            let prev_bp = *self.ring.get(prev_id).unwrap();
            let new_bp = match prev_bp {
                BoundaryPoint::LineStart(_) => BoundaryPoint::LineStart(own_point),
                BoundaryPoint::ArcStart {
                    center, clockwise, ..
                } => BoundaryPoint::ArcStart {
                    point: own_point,
                    center,
                    clockwise: !clockwise,
                },
            };
            updates.push((id, new_bp));
        }
        for (id, new_bp) in updates {
            *self.ring.get_mut(id).unwrap() = new_bp;
        }
        self.ring.reverse_links();
        self.invalidate();
    }

    /// Offsets every element along its normal by `d` and rebuilds node
    /// points from the offset elements. May self-intersect; see
    /// [`Self::offset_and_repaired`].
    pub fn offset(&self, d: f64) -> BoundaryLoop {
        let orig_bps = self.boundary_points();
        let elements = self.elements();
        let n = elements.len();
        if n == 0 {
            return BoundaryLoop::empty();
        }
        let offset_elements: Vec<CurveElement> = elements.iter().map(|e| e.offset_by(d)).collect();

        let mut new_points = Vec::with_capacity(n);
        for i in 0..n {
            let prev = &offset_elements[(i + n - 1) % n];
            let cur = &offset_elements[i];
            let point = match (prev, cur) {
                (CurveElement::Arc(_), _) | (_, CurveElement::Arc(_)) => {
                    if matches!(cur, CurveElement::Arc(_)) {
                        cur.start()
                    } else {
                        prev.end()
                    }
                }
                (CurveElement::Segment(sp), CurveElement::Segment(sc)) => {
                    let l1 = sp.line();
                    let l2 = sc.line();
                    if l1.is_collinear_with(&l2) {
                        prev.end().avg(&cur.start())
                    } else {
                        match l1.intersect_params(&l2) {
                            Some((s, _)) => l1.at(s),
                            None => prev.end().avg(&cur.start()),
                        }
                    }
                }
            };
            new_points.push(point);
        }

        let new_bps: Vec<BoundaryPoint> = (0..n)
            .map(|i| match orig_bps[i] {
                BoundaryPoint::LineStart(_) => BoundaryPoint::LineStart(new_points[i]),
                BoundaryPoint::ArcStart { clockwise, .. } => {
                    let (new_center, new_clockwise) = match &offset_elements[i] {
                        CurveElement::Arc(new_arc) => {
                            let orig_sweep = match &elements[i] {
                                CurveElement::Arc(a) => a.sweep(),
                                _ => unreachable!(),
                            };
                            let flipped = new_arc.sweep().signum() != orig_sweep.signum();
                            (new_arc.center(), if flipped { !clockwise } else { clockwise })
                        }
                        _ => unreachable!(),
                    };
                    BoundaryPoint::ArcStart {
                        point: new_points[i],
                        center: new_center,
                        clockwise: new_clockwise,
                    }
                }
            })
            .collect();

        BoundaryLoop::from_points(new_bps)
    }

    /// Offsets by `d`, then — if the result self-intersects — splits it and
    /// returns whichever piece's area is closest to this loop's own area.
    pub fn offset_and_repaired(&self, d: f64) -> BoundaryLoop {
        let raw = self.offset(d);
        let candidates = raw.non_self_intersecting_loops();
        let target = self.area();
        candidates
            .into_iter()
            .min_by(|a, b| {
                (a.area() - target)
                    .abs()
                    .partial_cmp(&(b.area() - target).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(raw)
    }

    /// All self-intersections of this loop's own elements, excluding the
    /// trivial coincidence every pair of consecutive elements shares at
    /// their common node.
    pub fn self_intersections(&self) -> Vec<IntersectionPair> {
        let elements = self.elements();
        let n = elements.len();
        let index_of: HashMap<i64, usize> =
            elements.iter().enumerate().map(|(idx, e)| (e.index(), idx)).collect();
        let bvh = self.bvh();
        let mut out = vec![];
        for (i, e) in elements.iter().enumerate() {
            for candidate in bvh.query(&e.bounds()) {
                let j = match index_of.get(&candidate.index()) {
                    Some(&j) => j,
                    None => continue,
                };
                // Bounds-overlap is necessary for a real intersection, so this
                // query only prunes pairs that couldn't have crossed; it never
                // drops a genuine one. `j > i` keeps each unordered pair once.
                if j <= i {
                    continue;
                }
                let adjacent = j == i + 1 || (i == 0 && j == n - 1);
                for p in e.pairwise_intersections(&candidate) {
                    if adjacent {
                        let shared_vertex = (p.first.at_end() && p.second.at_start())
                            || (p.first.at_start() && p.second.at_end());
                        if shared_vertex {
                            continue;
                        }
                    }
                    out.push(p);
                }
            }
        }
        out
    }

    /// Splits this loop repeatedly at self-intersections until every
    /// resulting piece is simple.
    pub fn non_self_intersecting_loops(&self) -> Vec<BoundaryLoop> {
        let mut queue = vec![self.copy()];
        let mut result = vec![];
        let cap = 64 + self.count() * 4;
        let mut iterations = 0usize;
        while let Some(candidate) = queue.pop() {
            iterations += 1;
            if iterations > cap {
                result.push(candidate);
                continue;
            }
            let pairs = candidate.self_intersections();
            match pairs.first() {
                None => result.push(candidate),
                Some(pair) => queue.extend(candidate.split_at_self_intersection(pair)),
            }
        }
        result
    }

    /// Splits this loop into two loops at the point where two of its own
    /// elements cross.
    pub fn split_at_self_intersection(&self, pair: &IntersectionPair) -> Vec<BoundaryLoop> {
        let ids = self.ring.iter_items(None);
        let idx_a = ids
            .iter()
            .position(|&id| Some(id) == pair.first.index())
            .expect("pair.first refers to one of this loop's own elements");
        let idx_b = ids
            .iter()
            .position(|&id| Some(id) == pair.second.index())
            .expect("pair.second refers to one of this loop's own elements");
        let (lo, hi, pos_lo, pos_hi) = if idx_a <= idx_b {
            (idx_a, idx_b, pair.first, pair.second)
        } else {
            (idx_b, idx_a, pair.second, pair.first)
        };

        let elements = self.elements();
        let cut_lo = BoundaryLoop::cut_point(&elements[lo], pos_lo.l);
        let cut_hi = BoundaryLoop::cut_point(&elements[hi], pos_hi.l);

        let mut piece_a = vec![cut_lo];
        for &id in &ids[(lo + 1)..=hi] {
            piece_a.push(*self.ring.get(id).unwrap());
        }

        let mut piece_b = vec![cut_hi];
        for &id in ids[(hi + 1)..].iter().chain(ids[..=lo].iter()) {
            piece_b.push(*self.ring.get(id).unwrap());
        }

        vec![
            BoundaryLoop::from_points(piece_a),
            BoundaryLoop::from_points(piece_b),
        ]
    }

    /// The boundary-point tag for the cut at length `l` along `element`,
    /// preserving its curve type (and, for an arc, its center and travel
    /// direction). Used both to split a loop at a self-intersection and to
    /// stitch the Boolean merger's output loops together.
    pub(crate) fn cut_point(element: &CurveElement, l: f64) -> BoundaryPoint {
        let sp = element.at_length(l);
        match element {
            CurveElement::Segment(_) => BoundaryPoint::LineStart(sp.point),
            CurveElement::Arc(a) => BoundaryPoint::ArcStart {
                point: sp.point,
                center: a.center(),
                clockwise: !a.is_ccw(),
            },
        }
    }

    /// Serialises this loop's nodes to the stable per-node text form.
    pub fn to_text(&self) -> String {
        serde_text::to_text(self)
    }

    /// Parses the stable per-node text form produced by [`Self::to_text`].
    pub fn from_text(s: &str) -> Result<BoundaryLoop, ParseError> {
        serde_text::from_text(s)
    }

    pub(crate) fn remove_zero_length_elements(&mut self) {
        cleanup::remove_zero_length_elements(self);
    }

    pub(crate) fn remove_thin_sections(&mut self) {
        cleanup::remove_thin_sections(self);
    }

    pub(crate) fn remove_adjacent_redundancies(&mut self) {
        cleanup::remove_adjacent_redundancies(self);
    }

    pub(crate) fn ring(&self) -> &IdLoop<BoundaryPoint> {
        &self.ring
    }

    pub(crate) fn ring_mut(&mut self) -> &mut IdLoop<BoundaryPoint> {
        &mut self.ring
    }
}

/// Computes the signed sweep that carries `theta0` to `theta1` in the
/// direction implied by `clockwise`, handling the degenerate
/// same-point/full-circle case.
fn arc_sweep(theta0: f64, theta1: f64, clockwise: bool, same_point: bool) -> f64 {
    use std::f64::consts::TAU;
    if same_point {
        return if clockwise { -TAU } else { TAU };
    }
    if clockwise {
        let raw = (theta0 - theta1).rem_euclid(TAU);
        let raw = if raw <= DIST_EPSILON { TAU } else { raw };
        -raw
    } else {
        let raw = (theta1 - theta0).rem_euclid(TAU);
        let raw = if raw <= DIST_EPSILON { TAU } else { raw };
        raw
    }
}

/// The point-enclosure oracle: classifies each candidate position by the
/// sign of `ray.direction . position.normal`, discards near-zero (grazing)
/// crossings, collapses same-point/same-sign duplicates, and returns true
/// iff the entrance and exit counts differ.
fn point_enclosure_oracle(ray: &Ray2, positions: &[Position]) -> bool {
    let mut classified: Vec<(Point, i8)> = vec![];
    for pos in positions {
        if let Some(sp) = pos.surface() {
            let d = ray.line.dir.dot(&sp.normal);
            if is_numeric_zero(d) {
                continue;
            }
            classified.push((sp.point, if d > 0.0 { 1 } else { -1 }));
        }
    }
    let mut reps: Vec<(Point, i8)> = vec![];
    'outer: for (pt, sign) in classified {
        for (rp, rsign) in reps.iter() {
            if rp.dist(&pt) <= DIST_EPSILON && *rsign == sign {
                continue 'outer;
            }
        }
        reps.push((pt, sign));
    }
    let entrances = reps.iter().filter(|(_, s)| *s == -1).count();
    let exits = reps.iter().filter(|(_, s)| *s == 1).count();
    entrances != exits
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn test_rectangle_area_and_positivity() {
        let r = BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(4.0, 3.0));
        assert_float_eq!(r.area(), 12.0, abs <= 1e-9);
        assert!(r.is_positive());
        assert_eq!(r.count(), 4);
    }

    #[test]
    fn test_reversed_negates_area() {
        let r = BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(4.0, 3.0));
        let rev = r.reversed();
        assert_float_eq!(rev.area(), -r.area(), abs <= 1e-9);
        assert_float_eq!(rev.reversed().area(), r.area(), abs <= 1e-9);
    }

    #[test]
    fn test_encloses_rectangle_interior() {
        let r = BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(4.0, 3.0));
        assert!(r.encloses(&Pt(2.0, 1.5)));
        assert!(!r.encloses(&Pt(10.0, 10.0)));
    }

    #[test]
    fn test_circle_area() {
        let c = BoundaryLoop::circle(Pt(0.0, 0.0), 2.0);
        assert_float_eq!(c.area(), std::f64::consts::PI * 4.0, abs <= 1e-6);
        assert!(c.encloses(&Pt(0.0, 0.0)));
        assert!(!c.encloses(&Pt(10.0, 10.0)));
    }

    #[test]
    fn test_clockwise_circle_is_negative() {
        let c = BoundaryLoop::from_points(vec![BoundaryPoint::ArcStart {
            point: Pt(1.0, 0.0),
            center: Pt(0.0, 0.0),
            clockwise: true,
        }]);
        assert_float_eq!(c.area(), -std::f64::consts::PI, abs <= 1e-6);
        assert!(!c.is_positive());
    }

    #[test]
    fn test_translate_moves_bounds() {
        let mut r = BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(1.0, 1.0));
        r.translate(5.0, 5.0);
        assert!(r.encloses(&Pt(5.5, 5.5)));
        assert!(!r.encloses(&Pt(0.5, 0.5)));
    }

    #[test]
    fn test_mirror_x_flips_orientation_sign() {
        let mut r = BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(4.0, 3.0));
        let before = r.area();
        r.mirror_x();
        assert_float_eq!(r.area(), -before, abs <= 1e-9);
    }

    #[test]
    fn test_text_round_trip() {
        let r = BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(4.0, 3.0));
        let text = r.to_text();
        let back = BoundaryLoop::from_text(&text).unwrap();
        assert_float_eq!(back.area(), r.area(), abs <= 1e-6);
        assert_eq!(back.count(), r.count());
    }

    #[test]
    fn test_offset_rectangle_grows() {
        let r = BoundaryLoop::rectangle(Pt(0.0, 0.0), Pt(4.0, 4.0));
        // Our normal convention points inward for a positive loop, so a
        // negative offset distance grows a CCW rectangle outward.
        let grown = r.offset(-1.0);
        assert_float_eq!(grown.area(), 36.0, abs <= 1e-6);
    }

    #[test]
    fn test_null_set() {
        assert!(BoundaryLoop::empty().is_null_set());
        let single = BoundaryLoop::from_points(vec![BoundaryPoint::LineStart(Pt(0.0, 0.0))]);
        assert!(single.is_null_set());
        let circle = BoundaryLoop::circle(Pt(0.0, 0.0), 1.0);
        assert!(!circle.is_null_set());
    }
}

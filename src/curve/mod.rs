//! Curve elements: the polymorphic segment/arc manifold that every boundary
//! loop is built from.

pub mod arc;
pub mod intersect;
pub mod segment;

pub use arc::Arc;
pub use intersect::IntersectionPair;
pub use segment::Segment;

use crate::aabb::Aabb2;
use crate::circle::Circle2;
use crate::line::Line2;
use crate::point::{Point, Vector};
use enum_dispatch::enum_dispatch;

/// A point on a curve's surface, with the local tangent and outward normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    /// The world-space point.
    pub point: Point,
    /// The unit tangent, in the direction of travel.
    pub tangent: Vector,
    /// The unit left-hand perpendicular of the tangent. Inward-facing if the
    /// containing loop has positive (counter-clockwise) area.
    pub normal: Vector,
}

/// A parametric position along a specific curve element: a length-along
/// value paired with the element it refers to. "Empty" (no element) is
/// represented as `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Length along the element, in `[0, element.length()]`.
    pub l: f64,
    /// The element this position refers to, or `None` for the empty position.
    pub element: Option<CurveElement>,
}

impl Position {
    /// The empty position.
    pub fn empty() -> Position {
        Position { l: 0.0, element: None }
    }

    /// Constructs a position on `element` at length `l`.
    pub fn new(l: f64, element: CurveElement) -> Position {
        Position {
            l,
            element: Some(element),
        }
    }

    /// Returns true if this is the empty position.
    pub fn is_empty(&self) -> bool {
        self.element.is_none()
    }

    /// The surface point (point/tangent/normal) at this position, or `None`
    /// if empty.
    pub fn surface(&self) -> Option<SurfacePoint> {
        self.element.as_ref().map(|e| e.at_length(self.l))
    }

    /// The world-space point at this position, or `None` if empty.
    pub fn point(&self) -> Option<Point> {
        self.surface().map(|s| s.point)
    }

    /// The owning node's stable index, or `None` if empty.
    pub fn index(&self) -> Option<i64> {
        self.element.as_ref().map(|e| e.index())
    }

    /// The length of the owning element, or `None` if empty.
    pub fn element_length(&self) -> Option<f64> {
        self.element.as_ref().map(|e| e.length())
    }

    /// Whether this position sits at the very start of its element (within
    /// the distance epsilon, expressed in parameter space via the element's
    /// own tolerance).
    pub fn at_start(&self) -> bool {
        self.l <= crate::tol::DIST_EPSILON
    }

    /// Whether this position sits at the very end of its element.
    pub fn at_end(&self) -> bool {
        match &self.element {
            None => false,
            Some(e) => (e.length() - self.l) <= crate::tol::DIST_EPSILON,
        }
    }
}

/// The shared behavioral contract implemented by every curve element variant.
/// Dispatch is by variant tag (via `enum_dispatch`); there is no runtime
/// class hierarchy.
#[enum_dispatch]
pub trait Curve {
    /// The starting point of this element.
    fn start(&self) -> Point;
    /// The ending point of this element.
    fn end(&self) -> Point;
    /// The arc length of this element (Euclidean for a segment, `r * |theta|`
    /// for an arc).
    fn length(&self) -> f64;
    /// This element's axis-aligned bounds, inflated by the distance epsilon.
    fn bounds(&self) -> Aabb2;
    /// The surface point at length `l` along this element. `l` must lie in
    /// `[0, length()]`.
    fn at_length(&self, l: f64) -> SurfacePoint;
    /// The position on this element closest to `p`.
    fn closest(&self, p: &Point) -> Position;
    /// Positions along this element where it crosses the infinite line `line`.
    fn intersections_with_line(&self, line: &Line2) -> Vec<Position>;
    /// Positions along this element where it crosses the circle `circle`.
    fn intersections_with_circle(&self, circle: &Circle2) -> Vec<Position>;
    /// `start x end` (the 2D cross product of the two endpoints as vectors
    /// from the origin); used directly in the loop's shoelace area sum.
    fn cross_product_wedge(&self) -> f64;
    /// The piece of this element from its start to length `l`, or `None` if
    /// that piece would have (near-)zero length.
    fn split_before(&self, l: f64) -> Option<CurveElement>;
    /// The piece of this element from length `l` to its end, or `None` if
    /// that piece would have (near-)zero length.
    fn split_after(&self, l: f64) -> Option<CurveElement>;
    /// A new element whose surface is offset by `d` along its normal
    /// direction at every point. An arc may flip orientation if `d` exceeds
    /// its radius.
    fn offset_by(&self, d: f64) -> CurveElement;
    /// This element traversed from end to start.
    fn reversed(&self) -> CurveElement;
    /// The stable integer tag of this element's owning node.
    fn index(&self) -> i64;
    /// Sets the stable integer tag. An element is recreated whenever its
    /// owning node is mutated, so this exists purely so loop materialization
    /// can stamp freshly-built elements with their node id.
    fn set_index(&mut self, idx: i64);
}

/// A curve element: a sealed sum of [`Segment`] and [`Arc`].
#[enum_dispatch(Curve)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveElement {
    /// A straight element.
    Segment(Segment),
    /// A circular-arc element.
    Arc(Arc),
}

impl CurveElement {
    /// All analytically-computed intersections between this element and
    /// `other`, already filtered to each element's own parametric interval
    /// (see [`Curve::intersections_with_line`]/[`Curve::intersections_with_circle`]
    /// and [`intersect::match_intersections`]).
    pub fn pairwise_intersections(&self, other: &CurveElement) -> Vec<IntersectionPair> {
        intersect::pairwise_intersections(self, other)
    }
}

//! Axis-aligned bounding boxes.

use crate::point::Point;
use crate::point::Pt;

/// An axis-aligned bounding box, or the empty sentinel.
///
/// The empty sentinel exists so that [`Aabb2::union`] behaves as an identity:
/// `Aabb2::EMPTY.union(b) == b` for any `b`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Aabb2 {
    /// No box at all.
    Empty,
    /// A real box with `min.x <= max.x` and `min.y <= max.y`.
    Box {
        /// The minimum (bottom-left) corner.
        min: Point,
        /// The maximum (top-right) corner.
        max: Point,
    },
}

impl Aabb2 {
    /// The empty sentinel.
    pub const EMPTY: Aabb2 = Aabb2::Empty;

    /// Constructs a box from two corner points, in any order.
    pub fn new(a: Point, b: Point) -> Aabb2 {
        Aabb2::Box {
            min: Pt(a.x.0.min(b.x.0), a.y.0.min(b.y.0)),
            max: Pt(a.x.0.max(b.x.0), a.y.0.max(b.y.0)),
        }
    }

    /// A box around a single point.
    pub fn from_point(p: Point) -> Aabb2 {
        Aabb2::Box { min: p, max: p }
    }

    /// This box inflated by `d` in all four directions.
    pub fn inflated(&self, d: f64) -> Aabb2 {
        match self {
            Aabb2::Empty => Aabb2::Empty,
            Aabb2::Box { min, max } => Aabb2::Box {
                min: Pt(min.x.0 - d, min.y.0 - d),
                max: Pt(max.x.0 + d, max.y.0 + d),
            },
        }
    }

    /// The union of this box with another. `Empty` is the identity.
    pub fn union(&self, other: &Aabb2) -> Aabb2 {
        match (self, other) {
            (Aabb2::Empty, b) => *b,
            (a, Aabb2::Empty) => *a,
            (
                Aabb2::Box {
                    min: min1,
                    max: max1,
                },
                Aabb2::Box {
                    min: min2,
                    max: max2,
                },
            ) => Aabb2::Box {
                min: Pt(min1.x.0.min(min2.x.0), min1.y.0.min(min2.y.0)),
                max: Pt(max1.x.0.max(max2.x.0), max1.y.0.max(max2.y.0)),
            },
        }
    }

    /// Whether this box and `other` overlap (touching counts as overlapping).
    pub fn intersects(&self, other: &Aabb2) -> bool {
        match (self, other) {
            (Aabb2::Empty, _) | (_, Aabb2::Empty) => false,
            (
                Aabb2::Box {
                    min: min1,
                    max: max1,
                },
                Aabb2::Box {
                    min: min2,
                    max: max2,
                },
            ) => {
                min1.x.0 <= max2.x.0
                    && min2.x.0 <= max1.x.0
                    && min1.y.0 <= max2.y.0
                    && min2.y.0 <= max1.y.0
            }
        }
    }

    /// Whether this box contains `p`.
    pub fn contains_point(&self, p: &Point) -> bool {
        match self {
            Aabb2::Empty => false,
            Aabb2::Box { min, max } => {
                p.x.0 >= min.x.0 && p.x.0 <= max.x.0 && p.y.0 >= min.y.0 && p.y.0 <= max.y.0
            }
        }
    }

    /// The closest distance from `p` to this box (zero if `p` is inside).
    pub fn closest_distance_to_point(&self, p: &Point) -> f64 {
        match self {
            Aabb2::Empty => f64::INFINITY,
            Aabb2::Box { min, max } => {
                let dx = (min.x.0 - p.x.0).max(0.0).max(p.x.0 - max.x.0);
                let dy = (min.y.0 - p.y.0).max(0.0).max(p.y.0 - max.y.0);
                (dx * dx + dy * dy).sqrt()
            }
        }
    }

    /// The farthest distance from `p` to any point of this box.
    pub fn farthest_distance_to_point(&self, p: &Point) -> f64 {
        match self {
            Aabb2::Empty => 0.0,
            Aabb2::Box { .. } => self
                .corners()
                .iter()
                .map(|c| p.dist(c))
                .fold(0.0_f64, f64::max),
        }
    }

    /// The closest distance between this box and `other`.
    pub fn closest_distance_to_box(&self, other: &Aabb2) -> f64 {
        match (self, other) {
            (Aabb2::Empty, _) | (_, Aabb2::Empty) => f64::INFINITY,
            (Aabb2::Box { min, max }, Aabb2::Box { .. }) => {
                let dx = (other.min_x() - max.x.0).max(0.0).max(min.x.0 - other.max_x());
                let dy = (other.min_y() - max.y.0).max(0.0).max(min.y.0 - other.max_y());
                (dx * dx + dy * dy).sqrt()
            }
        }
    }

    fn min_x(&self) -> f64 {
        match self {
            Aabb2::Empty => f64::INFINITY,
            Aabb2::Box { min, .. } => min.x.0,
        }
    }
    fn min_y(&self) -> f64 {
        match self {
            Aabb2::Empty => f64::INFINITY,
            Aabb2::Box { min, .. } => min.y.0,
        }
    }
    fn max_x(&self) -> f64 {
        match self {
            Aabb2::Empty => f64::NEG_INFINITY,
            Aabb2::Box { max, .. } => max.x.0,
        }
    }
    fn max_y(&self) -> f64 {
        match self {
            Aabb2::Empty => f64::NEG_INFINITY,
            Aabb2::Box { max, .. } => max.y.0,
        }
    }

    /// The four corners of this box, in counter-clockwise order starting at
    /// the minimum corner. Empty for the empty sentinel.
    pub fn corners(&self) -> Vec<Point> {
        match self {
            Aabb2::Empty => vec![],
            Aabb2::Box { min, max } => vec![
                *min,
                Pt(max.x.0, min.y.0),
                *max,
                Pt(min.x.0, max.y.0),
            ],
        }
    }

    /// Returns true if this is the empty sentinel.
    pub fn is_empty(&self) -> bool {
        matches!(self, Aabb2::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_identity() {
        let b = Aabb2::new(Pt(0.0, 0.0), Pt(1.0, 1.0));
        assert_eq!(Aabb2::EMPTY.union(&b), b);
        assert_eq!(b.union(&Aabb2::EMPTY), b);
    }

    #[test]
    fn test_union() {
        let a = Aabb2::new(Pt(0.0, 0.0), Pt(1.0, 1.0));
        let b = Aabb2::new(Pt(0.5, 0.5), Pt(2.0, 2.0));
        assert_eq!(a.union(&b), Aabb2::new(Pt(0.0, 0.0), Pt(2.0, 2.0)));
    }

    #[test]
    fn test_intersects() {
        let a = Aabb2::new(Pt(0.0, 0.0), Pt(1.0, 1.0));
        let b = Aabb2::new(Pt(1.0, 1.0), Pt(2.0, 2.0));
        let c = Aabb2::new(Pt(2.0, 2.0), Pt(3.0, 3.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(!a.intersects(&Aabb2::EMPTY));
    }

    #[test]
    fn test_closest_distance_to_point() {
        let a = Aabb2::new(Pt(0.0, 0.0), Pt(1.0, 1.0));
        assert_eq!(a.closest_distance_to_point(&Pt(0.5, 0.5)), 0.0);
        assert_eq!(a.closest_distance_to_point(&Pt(2.0, 0.5)), 1.0);
        assert_eq!(a.closest_distance_to_point(&Pt(2.0, 2.0)), 2.0_f64.sqrt());
    }

    #[test]
    fn test_corners() {
        let a = Aabb2::new(Pt(0.0, 0.0), Pt(1.0, 2.0));
        assert_eq!(
            a.corners(),
            vec![Pt(0.0, 0.0), Pt(1.0, 0.0), Pt(1.0, 2.0), Pt(0.0, 2.0)]
        );
    }
}

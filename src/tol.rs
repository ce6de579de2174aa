//! The complete tolerance model for the kernel: two fixed epsilons and one
//! radius-scaled angle tolerance derived from them. No other epsilons exist
//! anywhere in this crate.

use float_cmp::approx_eq;

/// Distance epsilon, in world units. Used for point coincidence, parameter
/// endpoint comparisons, and normal-dot sign tests.
pub const DIST_EPSILON: f64 = 1e-8;

/// "Numeric zero". Used for determinants, parallel tests, and collinearity.
pub const NUMERIC_ZERO: f64 = 1e-6;

/// The padding factor applied to the last-inserted parameter in the Boolean
/// merger before scanning for the next candidate pair, so the starting pair
/// is not immediately re-hit. Load-bearing; see [`crate::merge`].
pub const MERGE_PAD_FACTOR: f64 = 1.5;

/// A bundle of the kernel's tolerances, with the global constants as
/// defaults. Exists so tests (and advanced callers with unusual unit scales)
/// can override the tolerance model without threading bare `f64`s through
/// every call site.
#[derive(Debug, Clone, Copy, PartialEq, typed_builder::TypedBuilder)]
pub struct Tolerance {
    /// See [`DIST_EPSILON`].
    #[builder(default = DIST_EPSILON)]
    pub dist_epsilon: f64,
    /// See [`NUMERIC_ZERO`].
    #[builder(default = NUMERIC_ZERO)]
    pub numeric_zero: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            dist_epsilon: DIST_EPSILON,
            numeric_zero: NUMERIC_ZERO,
        }
    }
}

impl Tolerance {
    /// The angle tolerance for an arc of the given radius: `dist_epsilon / radius`.
    ///
    /// Panics on a non-positive radius; arcs with radius <= 0 violate the
    /// kernel's invariant before angle tolerance is ever asked for.
    pub fn angle_epsilon(&self, radius: f64) -> f64 {
        debug_assert!(radius > 0.0, "angle_epsilon requires a positive radius");
        self.dist_epsilon / radius
    }
}

/// Returns true if `a` and `b` are within the global distance epsilon.
pub fn approx_eq_dist(a: f64, b: f64) -> bool {
    approx_eq!(f64, a, b, epsilon = DIST_EPSILON)
}

/// Returns true if `v` is within the global numeric-zero threshold of 0.
pub fn is_numeric_zero(v: f64) -> bool {
    approx_eq!(f64, v, 0.0, epsilon = NUMERIC_ZERO)
}

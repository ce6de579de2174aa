//! The kernel's single public error type. Every fallible public operation
//! returns `Result<_, KernelError>`; internal invariant violations (a
//! malformed arc reaching a constructor, a non-existent node id reached
//! through a bug rather than user input) still panic, per the geometry and
//! ring modules' own conventions.

use crate::boundary::ParseError;
use crate::circle::GeometryError;
use crate::ring::LookupError;
use thiserror::Error;

/// The kernel's top-level error type.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum KernelError {
    /// A geometric primitive could not be constructed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// A boundary-loop node id did not exist.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The text boundary-loop format failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The Boolean merger did not converge within its iteration budget. This
    /// indicates the two loops being merged are numerically degenerate
    /// (e.g. overlapping along a positive-length shared edge) rather than a
    /// transient condition; retrying with the same inputs will not help.
    #[error("boolean merge of loops with {first_len} and {second_len} elements did not terminate within {cap} iterations")]
    MergeDidNotConverge {
        /// Element count of the first loop.
        first_len: usize,
        /// Element count of the second loop.
        second_len: usize,
        /// The iteration cap that was hit.
        cap: usize,
    },

    /// The shape relation reported a genuine crossing, but none of the
    /// crossing pairs are a valid entry or exit point for the requested
    /// operation. This is an internal invariant failure, not a budget
    /// exhaustion: no merger iteration ever ran.
    #[error("boolean merge of loops with {first_len} and {second_len} elements found crossing pairs but no valid entry point for the operation")]
    MergeHasNoEntryPoint {
        /// Element count of the first loop.
        first_len: usize,
        /// Element count of the second loop.
        second_len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_geometry_error() {
        let e: KernelError = GeometryError::NonPositiveRadius.into();
        assert!(matches!(e, KernelError::Geometry(_)));
    }

    #[test]
    fn test_from_lookup_error() {
        let e: KernelError = LookupError(5).into();
        assert!(matches!(e, KernelError::Lookup(_)));
    }
}

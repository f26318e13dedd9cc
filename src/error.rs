//! Error types for fixvec operations.
//!
//! Dimension and type misuse is rejected at compile time. The variants here
//! only cover the runtime-checked entry points (`try_from_slice`,
//! `try_swizzle`, batch operations) where the input is not known until the
//! program runs.

use std::fmt;

/// Errors returned by the runtime-checked vector operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixVecError {
    /// A slice or descriptor had the wrong number of elements.
    LengthMismatch {
        /// The length required by the target type.
        expected: usize,
        /// The length that was provided.
        actual: usize,
    },
    /// A swizzle descriptor contained a character other than `x`, `y`, `z`, `w`.
    InvalidComponent {
        /// The offending character.
        component: char,
        /// Its position in the descriptor.
        position: usize,
    },
    /// A swizzle descriptor referenced a component the source vector lacks.
    ComponentOutOfRange {
        /// The offending character.
        component: char,
        /// The index it resolves to.
        index: usize,
        /// The dimension of the source vector.
        dimension: usize,
    },
}

impl fmt::Display for FixVecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixVecError::LengthMismatch { expected, actual } => write!(
                f,
                "Length mismatch: expected {} elements, got {}",
                expected, actual
            ),
            FixVecError::InvalidComponent {
                component,
                position,
            } => write!(
                f,
                "Invalid swizzle component '{}' at position {} (expected one of x, y, z, w)",
                component, position
            ),
            FixVecError::ComponentOutOfRange {
                component,
                index,
                dimension,
            } => write!(
                f,
                "Swizzle component '{}' (index {}) is out of range for a {}-dimensional vector",
                component, index, dimension
            ),
        }
    }
}

impl std::error::Error for FixVecError {}

/// Result type alias for fixvec operations.
pub type Result<T> = std::result::Result<T, FixVecError>;

/// Creates a length mismatch error.
pub fn length_mismatch(expected: usize, actual: usize) -> FixVecError {
    FixVecError::LengthMismatch { expected, actual }
}

/// Creates an invalid component error.
pub fn invalid_component(component: char, position: usize) -> FixVecError {
    FixVecError::InvalidComponent {
        component,
        position,
    }
}

/// Creates an out-of-range component error.
pub fn component_out_of_range(component: char, index: usize, dimension: usize) -> FixVecError {
    FixVecError::ComponentOutOfRange {
        component,
        index,
        dimension,
    }
}

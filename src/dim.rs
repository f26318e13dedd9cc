//! Compile-time dimension guards.
//!
//! Each guard is a zero-sized type whose associated constant fails to
//! evaluate when the dimension requirement does not hold. Naming the constant
//! inside a generic function turns the requirement into a build error for
//! every instantiation that violates it, without any runtime check.

/// Requires `N >= MIN`.
pub(crate) struct AtLeast<const N: usize, const MIN: usize>;

impl<const N: usize, const MIN: usize> AtLeast<N, MIN> {
    pub(crate) const ACCESSOR: () = assert!(
        N >= MIN,
        "vector dimension is too small for this accessor"
    );

    pub(crate) const REDUCTION: () = assert!(
        N >= MIN,
        "reduction requires a vector with at least one component"
    );
}

/// Index of the named component `x`, `y`, `z` or `w`.
pub(crate) const fn component_index(component: u8) -> Option<usize> {
    match component {
        b'x' => Some(0),
        b'y' => Some(1),
        b'z' => Some(2),
        b'w' => Some(3),
        _ => None,
    }
}

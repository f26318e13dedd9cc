//! Component permutation ("swizzling").
//!
//! A swizzle builds a new vector by picking components of an existing one by
//! name, e.g. `"yzx"` on `(1, 2, 3)` gives `(2, 3, 1)`. Descriptor characters
//! map `x → 0`, `y → 1`, `z → 2`, `w → 3`; the output has one component per
//! character, in descriptor order.
//!
//! The descriptor is resolved while the program is built. [`encode`] packs a
//! descriptor string into a `u64` const parameter (three bits per component
//! index, the length in bits 48..56), and [`FixedVector::swizzle`] decodes it
//! against the source dimension in an associated constant. The
//! [`swizzle!`](crate::swizzle!) macro does both steps from a string literal:
//!
//! ```rust
//! use fixvec::{swizzle, FixedVector};
//!
//! let v = FixedVector::new([1, 2, 3]);
//! assert_eq!(swizzle!(v, "yzx"), FixedVector::new([2, 3, 1]));
//! assert_eq!(swizzle!(v, "zz"), FixedVector::new([3, 3]));
//! ```
//!
//! Referencing a component the source vector lacks fails to build:
//!
//! ```rust,compile_fail
//! use fixvec::{swizzle, FixedVector};
//!
//! let v = FixedVector::new([1, 2]);
//! let _ = swizzle!(v, "xz");
//! ```
//!
//! So does any character outside `x`, `y`, `z`, `w`:
//!
//! ```rust,compile_fail
//! use fixvec::{swizzle, FixedVector};
//!
//! let v = FixedVector::new([1, 2, 3, 4]);
//! let _ = swizzle!(v, "xq");
//! ```
//!
//! Descriptors only known at run time go through
//! [`FixedVector::try_swizzle`], which reports the same problems as
//! [`FixVecError`](crate::FixVecError) values.

use crate::dim::component_index;
use crate::error::{component_out_of_range, invalid_component, length_mismatch, Result};
use crate::vector::FixedVector;

/// Largest number of components a compile-time descriptor may select.
pub const MAX_COMPONENTS: usize = 16;

const INDEX_BITS: u32 = 3;
const INDEX_MASK: u64 = 0b111;
const LENGTH_SHIFT: u32 = 48;

/// Packs a swizzle descriptor into the `u64` taken by [`FixedVector::swizzle`].
///
/// # Panics
///
/// Panics (a build error when evaluated in a const context) if the
/// descriptor is empty, longer than [`MAX_COMPONENTS`], or contains a
/// character other than `x`, `y`, `z`, `w`.
pub const fn encode(descriptor: &str) -> u64 {
    let bytes = descriptor.as_bytes();
    assert!(!bytes.is_empty(), "swizzle descriptor must not be empty");
    assert!(
        bytes.len() <= MAX_COMPONENTS,
        "swizzle descriptor selects more than 16 components"
    );

    let mut packed = 0u64;
    let mut i = 0;
    while i < bytes.len() {
        let index = match component_index(bytes[i]) {
            Some(index) => index,
            None => panic!("swizzle descriptor may only contain x, y, z and w"),
        };
        packed |= (index as u64) << (i as u32 * INDEX_BITS);
        i += 1;
    }

    packed | ((bytes.len() as u64) << LENGTH_SHIFT)
}

/// Number of components selected by a packed descriptor.
pub const fn encoded_len(packed: u64) -> usize {
    (packed >> LENGTH_SHIFT) as usize
}

const fn decode<const N: usize, const M: usize>(packed: u64) -> [usize; M] {
    assert!(M >= 1, "swizzle must select at least one component");
    assert!(
        encoded_len(packed) == M,
        "swizzle output dimension does not match the descriptor length"
    );

    let mut indices = [0usize; M];
    let mut i = 0;
    while i < M {
        let index = ((packed >> (i as u32 * INDEX_BITS)) & INDEX_MASK) as usize;
        assert!(
            index < N,
            "swizzle descriptor references a component the vector does not have"
        );
        indices[i] = index;
        i += 1;
    }
    indices
}

/// Source indices for an `M`-component swizzle of an `N`-dimensional vector.
struct Resolved<const N: usize, const M: usize, const P: u64>;

impl<const N: usize, const M: usize, const P: u64> Resolved<N, M, P> {
    const INDICES: [usize; M] = decode::<N, M>(P);
}

/// Resolves a runtime descriptor to source indices for an `N`-dimensional
/// vector.
///
/// # Errors
///
/// - [`FixVecError::LengthMismatch`](crate::FixVecError::LengthMismatch) if
///   the descriptor does not have exactly `M` characters,
/// - [`FixVecError::InvalidComponent`](crate::FixVecError::InvalidComponent)
///   for a character outside `x`, `y`, `z`, `w`,
/// - [`FixVecError::ComponentOutOfRange`](crate::FixVecError::ComponentOutOfRange)
///   for a component index `>= dimension`.
pub fn descriptor_indices<const M: usize>(
    descriptor: &str,
    dimension: usize,
) -> Result<[usize; M]> {
    let count = descriptor.chars().count();
    if count != M {
        return Err(length_mismatch(M, count));
    }

    let mut indices = [0usize; M];
    for (position, (slot, component)) in indices
        .iter_mut()
        .zip(descriptor.chars())
        .enumerate()
    {
        let index = u8::try_from(component)
            .ok()
            .and_then(component_index)
            .ok_or_else(|| invalid_component(component, position))?;
        if index >= dimension {
            return Err(component_out_of_range(component, index, dimension));
        }
        *slot = index;
    }

    Ok(indices)
}

impl<const N: usize, T: Copy> FixedVector<N, T> {
    /// Builds an `M`-dimensional vector from the components named by the
    /// packed descriptor `P` (see [`encode`]).
    ///
    /// Usually reached through [`swizzle!`](crate::swizzle!), which supplies
    /// both const parameters from a string literal:
    ///
    /// ```rust
    /// use fixvec::{swizzle::encode, FixedVector};
    ///
    /// let v = FixedVector::new([1.0f32, 2.0, 3.0, 4.0]);
    /// let wx = v.swizzle::<{ encode("wx") }, 2>();
    /// assert_eq!(wx, FixedVector::new([4.0, 1.0]));
    /// ```
    ///
    /// An `M` that disagrees with the descriptor length fails to build:
    ///
    /// ```rust,compile_fail
    /// use fixvec::{swizzle::encode, FixedVector};
    ///
    /// let v = FixedVector::new([1, 2, 3]);
    /// let _ = v.swizzle::<{ encode("xy") }, 3>();
    /// ```
    #[inline(always)]
    pub fn swizzle<const P: u64, const M: usize>(&self) -> FixedVector<M, T> {
        let indices = Resolved::<N, M, P>::INDICES;
        FixedVector {
            values: indices.map(|index| self.values[index]),
        }
    }

    /// Runtime counterpart of [`swizzle`](Self::swizzle) for descriptors that
    /// are not known until the program runs.
    ///
    /// # Errors
    ///
    /// See [`descriptor_indices`].
    pub fn try_swizzle<const M: usize>(&self, descriptor: &str) -> Result<FixedVector<M, T>> {
        let indices = descriptor_indices::<M>(descriptor, N).inspect_err(|err| {
            log::debug!("rejected swizzle descriptor {:?}: {}", descriptor, err);
        })?;
        Ok(FixedVector {
            values: indices.map(|index| self.values[index]),
        })
    }
}

/// Swizzles a vector with a string-literal descriptor resolved at build time.
///
/// ```rust
/// use fixvec::{swizzle, FixedVector};
///
/// let v = FixedVector::new([1, 2]);
/// assert_eq!(swizzle!(v, "yx"), FixedVector::new([2, 1]));
/// assert_eq!(swizzle!(v, "xyxy"), FixedVector::new([1, 2, 1, 2]));
/// ```
#[macro_export]
macro_rules! swizzle {
    ($vector:expr, $descriptor:literal) => {
        $vector.swizzle::<
            { $crate::swizzle::encode($descriptor) },
            { $crate::swizzle::encoded_len($crate::swizzle::encode($descriptor)) },
        >()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixVecError;

    #[test]
    fn test_encode_packs_indices_and_length() {
        let packed = encode("yzx");
        assert_eq!(encoded_len(packed), 3);
        assert_eq!(packed & INDEX_MASK, 1);
        assert_eq!((packed >> INDEX_BITS) & INDEX_MASK, 2);
        assert_eq!((packed >> (2 * INDEX_BITS)) & INDEX_MASK, 0);
    }

    #[test]
    fn test_encode_accepts_max_components() {
        assert_eq!(encoded_len(encode("xyzwxyzwxyzwxyzw")), MAX_COMPONENTS);
    }

    #[test]
    #[should_panic(expected = "may only contain x, y, z and w")]
    fn test_encode_rejects_invalid_character_at_runtime() {
        let descriptor = String::from("xa");
        encode(&descriptor);
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_encode_rejects_empty_descriptor() {
        encode(String::new().as_str());
    }

    #[test]
    fn test_swizzle_method() {
        let v = FixedVector::new([10u8, 20, 30, 40]);
        assert_eq!(v.swizzle::<{ encode("wzyx") }, 4>(), FixedVector::new([40, 30, 20, 10]));
        assert_eq!(v.swizzle::<{ encode("y") }, 1>(), FixedVector::new([20]));
    }

    #[test]
    fn test_swizzle_macro_can_grow_the_vector() {
        let v = FixedVector::new([1.5f64, -2.0]);
        let grown = swizzle!(v, "xyyxx");
        assert_eq!(grown.dimension(), 5);
        assert_eq!(grown, FixedVector::new([1.5, -2.0, -2.0, 1.5, 1.5]));
    }

    #[test]
    fn test_swizzle_macro_on_expression() {
        let a = FixedVector::new([1, 2, 3]);
        let b = FixedVector::new([10, 20, 30]);
        assert_eq!(swizzle!(a + b, "zx"), FixedVector::new([33, 11]));
    }

    #[test]
    fn test_try_swizzle() {
        let v = FixedVector::new([1, 2, 3]);
        assert_eq!(v.try_swizzle::<3>("zyx"), Ok(FixedVector::new([3, 2, 1])));
    }

    #[test]
    fn test_try_swizzle_errors() {
        let v = FixedVector::new([1, 2, 3]);

        assert_eq!(
            v.try_swizzle::<2>("xyz"),
            Err(FixVecError::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(
            v.try_swizzle::<2>("xé"),
            Err(FixVecError::InvalidComponent {
                component: 'é',
                position: 1
            })
        );
        assert_eq!(
            v.try_swizzle::<3>("xyw"),
            Err(FixVecError::ComponentOutOfRange {
                component: 'w',
                index: 3,
                dimension: 3
            })
        );
    }

    #[test]
    fn test_descriptor_indices() {
        assert_eq!(descriptor_indices::<4>("wzyx", 4), Ok([3, 2, 1, 0]));
        assert_eq!(descriptor_indices::<0>("", 2), Ok([]));
    }
}

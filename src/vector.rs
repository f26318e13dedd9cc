//! The fixed-size vector type.
//!
//! `FixedVector<N, T>` wraps a `[T; N]` and exposes a uniform set of vector
//! operations for every dimension and element type. Operations that only make
//! sense for some dimensions are rejected when the program is built:
//!
//! - `x()`, `y()`, `z()`, `w()` need at least 1, 2, 3, 4 components,
//! - `cross()` only exists on 3-dimensional vectors,
//! - `angle()` and `lerp()` need a floating-point element type,
//! - `min()` and `max()` need at least one component.
//!
//! Element-wise operations are plain loops over the backing array; the
//! compiler vectorizes them for the common widths.
//!
//! # Examples
//!
//! ```rust
//! use fixvec::FixedVector;
//!
//! let a = FixedVector::new([1.0f32, 0.0, 0.0]);
//! let b = FixedVector::new([0.0f32, 1.0, 0.0]);
//!
//! assert_eq!(a.cross(b), FixedVector::new([0.0, 0.0, 1.0]));
//! assert_eq!(a.dot(b), 0.0);
//! assert_eq!(format!("{}", a + b), "(1, 1, 0)");
//! ```
//!
//! Requesting a component the vector does not have fails to build:
//!
//! ```rust,compile_fail
//! use fixvec::FixedVector;
//!
//! let v = FixedVector::new([1, 2]);
//! let _ = v.z();
//! ```
//!
//! ```rust,compile_fail
//! use fixvec::FixedVector;
//!
//! let a = FixedVector::new([1.0f32, 0.0]);
//! let _ = a.cross(a);
//! ```
//!
//! ```rust,compile_fail
//! use fixvec::FixedVector;
//!
//! let a = FixedVector::new([1, 0]);
//! let _ = a.angle(a);
//! ```
//!
//! ```rust,compile_fail
//! use fixvec::FixedVector;
//!
//! let v = FixedVector::new([1.0f64, 2.0, 3.0]);
//! let _ = v.w();
//! ```
//!
//! ```rust,compile_fail
//! use fixvec::FixedVector;
//!
//! let empty: FixedVector<0, u32> = FixedVector::new([]);
//! let _ = empty.max();
//! ```
//!
//! The dimension checks run while generic code is instantiated, so they are
//! reported by `cargo build` and `cargo test` but not always by `cargo check`.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign,
};

use num::Float;

use crate::dim::AtLeast;
use crate::error::{length_mismatch, Result};
use crate::scalar::Scalar;

/// An `N`-dimensional vector with components of type `T`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FixedVector<const N: usize, T> {
    /// The components, in axis order.
    pub values: [T; N],
}

/// Two-dimensional vector.
pub type Vec2<T> = FixedVector<2, T>;
/// Three-dimensional vector.
pub type Vec3<T> = FixedVector<3, T>;
/// Four-dimensional vector.
pub type Vec4<T> = FixedVector<4, T>;

/// `f32` 2-vector.
pub type Vec2f = Vec2<f32>;
/// `f32` 3-vector.
pub type Vec3f = Vec3<f32>;
/// `f32` 4-vector.
pub type Vec4f = Vec4<f32>;

/// `i32` 2-vector.
pub type Vec2i = Vec2<i32>;
/// `i32` 3-vector.
pub type Vec3i = Vec3<i32>;
/// `i32` 4-vector.
pub type Vec4i = Vec4<i32>;

impl<const N: usize, T> FixedVector<N, T> {
    /// Builds a vector from its components.
    #[inline(always)]
    pub const fn new(values: [T; N]) -> Self {
        Self { values }
    }

    /// Number of components.
    #[inline(always)]
    pub const fn dimension(&self) -> usize {
        N
    }

    #[inline(always)]
    pub const fn as_array(&self) -> &[T; N] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }
}

impl<const N: usize, T: Scalar> FixedVector<N, T> {
    /// A vector with every component set to `value`.
    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self { values: [value; N] }
    }

    /// The zero vector.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Builds a vector from a slice whose length is only known at run time.
    ///
    /// # Errors
    ///
    /// Returns [`FixVecError::LengthMismatch`](crate::FixVecError::LengthMismatch)
    /// if `slice.len() != N`.
    pub fn try_from_slice(slice: &[T]) -> Result<Self> {
        let values: [T; N] = slice.try_into().map_err(|_| {
            log::debug!(
                "rejected slice of length {} for a {}-dimensional vector",
                slice.len(),
                N
            );
            length_mismatch(N, slice.len())
        })?;
        Ok(Self { values })
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; N] {
        self.values
    }

    /// Applies `f` to every component.
    #[inline(always)]
    pub fn map<U, F>(self, mut f: F) -> FixedVector<N, U>
    where
        F: FnMut(T) -> U,
    {
        FixedVector {
            values: self.values.map(&mut f),
        }
    }

    /// Combines matching components of `self` and `other` with `f`.
    #[inline(always)]
    pub fn zip_map<F>(self, other: Self, mut f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        let mut values = self.values;
        for (value, rhs) in values.iter_mut().zip(other.values) {
            *value = f(*value, rhs);
        }
        Self { values }
    }

    // ------------------------------------------------------------------
    // Named components
    // ------------------------------------------------------------------

    /// First component. Requires `N >= 1`.
    #[inline(always)]
    pub fn x(&self) -> T {
        #[allow(clippy::let_unit_value)]
        let () = AtLeast::<N, 1>::ACCESSOR;
        self.values[0]
    }

    /// Second component. Requires `N >= 2`.
    #[inline(always)]
    pub fn y(&self) -> T {
        #[allow(clippy::let_unit_value)]
        let () = AtLeast::<N, 2>::ACCESSOR;
        self.values[1]
    }

    /// Third component. Requires `N >= 3`.
    #[inline(always)]
    pub fn z(&self) -> T {
        #[allow(clippy::let_unit_value)]
        let () = AtLeast::<N, 3>::ACCESSOR;
        self.values[2]
    }

    /// Fourth component. Requires `N >= 4`.
    #[inline(always)]
    pub fn w(&self) -> T {
        #[allow(clippy::let_unit_value)]
        let () = AtLeast::<N, 4>::ACCESSOR;
        self.values[3]
    }

    // ------------------------------------------------------------------
    // Reductions
    // ------------------------------------------------------------------

    /// Sum of all components. Zero for a zero-dimensional vector.
    ///
    /// Integer sums wrap on overflow, like [`magnitude`](Self::magnitude).
    #[inline(always)]
    pub fn sum(&self) -> T {
        T::wrapping_sum(&self.values)
    }

    /// Largest component. Requires `N >= 1`.
    ///
    /// Comparisons use `PartialOrd`; a NaN component is skipped unless it is
    /// the first one.
    #[inline(always)]
    pub fn max(&self) -> T {
        #[allow(clippy::let_unit_value)]
        let () = AtLeast::<N, 1>::REDUCTION;
        let mut result = self.values[0];
        for &v in &self.values[1..] {
            if v > result {
                result = v;
            }
        }
        result
    }

    /// Smallest component. Requires `N >= 1`.
    #[inline(always)]
    pub fn min(&self) -> T {
        #[allow(clippy::let_unit_value)]
        let () = AtLeast::<N, 1>::REDUCTION;
        let mut result = self.values[0];
        for &v in &self.values[1..] {
            if v < result {
                result = v;
            }
        }
        result
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    /// Euclidean length, computed in `T`.
    ///
    /// See [`Scalar::root_sum_of_squares`] for the integer rules: squares and
    /// their sum wrap, and for signed types the sum's bits are read as the
    /// unsigned type of the same width before the integer square root.
    #[inline(always)]
    pub fn magnitude(&self) -> T {
        T::root_sum_of_squares(&self.values)
    }

    /// Divides every component by [`magnitude`](Self::magnitude).
    ///
    /// For integer `T` this is truncating division, so the result is almost
    /// always a unit axis or the zero vector; prefer a float element type.
    /// A zero-length float vector yields NaN components and a zero-length
    /// integer vector panics on the division.
    #[inline(always)]
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    /// Sum of the products of matching components.
    #[inline(always)]
    pub fn dot(&self, other: Self) -> T {
        self.values
            .iter()
            .zip(other.values.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Length of `self - other`.
    #[inline(always)]
    pub fn distance(&self, other: Self) -> T {
        (*self - other).magnitude()
    }

    /// Mirrors `self` about the plane with the given normal:
    /// `self - normal * 2 * dot(self, normal)`.
    ///
    /// `normal` must already be normalized; it is used as given.
    #[inline(always)]
    pub fn reflect(&self, normal: Self) -> Self {
        let two = T::one() + T::one();
        *self - normal * two * self.dot(normal)
    }
}

impl<T: Scalar> FixedVector<3, T> {
    /// Cross product of two 3-dimensional vectors.
    #[inline(always)]
    pub fn cross(&self, other: Self) -> Self {
        let [ax, ay, az] = self.values;
        let [bx, by, bz] = other.values;
        Self {
            values: [ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx],
        }
    }
}

impl<const N: usize, T: Scalar + Float> FixedVector<N, T> {
    /// Angle between `self` and `other`, in radians.
    ///
    /// The cosine is clamped to `[-1, 1]` so rounding on (anti)parallel
    /// inputs returns `0` or `π` instead of NaN. A zero-length operand still
    /// yields NaN.
    #[inline(always)]
    pub fn angle(&self, other: Self) -> T {
        let cosine = self.dot(other) / (self.magnitude() * other.magnitude());
        num::clamp(cosine, -T::one(), T::one()).acos()
    }

    /// Linear interpolation: `self + (other - self) * t`.
    #[inline(always)]
    pub fn lerp(&self, other: Self, t: T) -> Self {
        *self + (other - *self) * t
    }

    /// True when every component differs from `other`'s by at most `epsilon`.
    pub fn approx_eq(&self, other: Self, epsilon: T) -> bool {
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(&a, &b)| (a - b).abs() <= epsilon)
    }
}

impl<const N: usize, T: Scalar> Default for FixedVector<N, T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize, T> From<[T; N]> for FixedVector<N, T> {
    fn from(values: [T; N]) -> Self {
        Self { values }
    }
}

impl<const N: usize, T> From<FixedVector<N, T>> for [T; N] {
    fn from(vector: FixedVector<N, T>) -> Self {
        vector.values
    }
}

impl<const N: usize, T: Scalar> TryFrom<&[T]> for FixedVector<N, T> {
    type Error = crate::error::FixVecError;

    fn try_from(slice: &[T]) -> Result<Self> {
        Self::try_from_slice(slice)
    }
}

impl<const N: usize, T> Index<usize> for FixedVector<N, T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<const N: usize, T> IntoIterator for FixedVector<N, T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, const N: usize, T> IntoIterator for &'a FixedVector<N, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Renders `(a, b, c)`. Width and precision flags apply to each component.
impl<const N: usize, T: fmt::Display> fmt::Display for FixedVector<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        f.write_str(")")
    }
}

// ----------------------------------------------------------------------
// Element-wise operators
// ----------------------------------------------------------------------

macro_rules! impl_elementwise_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<const N: usize, T: Scalar> $trait for FixedVector<N, T> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a, b| a $op b)
            }
        }

        impl<const N: usize, T: Scalar> $trait<T> for FixedVector<N, T> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: T) -> Self {
                self.map(|a| a $op rhs)
            }
        }

        impl<const N: usize, T: Scalar> $assign_trait for FixedVector<N, T> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }

        impl<const N: usize, T: Scalar> $assign_trait<T> for FixedVector<N, T> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_elementwise_op!(Add, add, AddAssign, add_assign, +);
impl_elementwise_op!(Sub, sub, SubAssign, sub_assign, -);
impl_elementwise_op!(Mul, mul, MulAssign, mul_assign, *);
impl_elementwise_op!(Div, div, DivAssign, div_assign, /);

impl<const N: usize, T: Scalar + Neg<Output = T>> Neg for FixedVector<N, T> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

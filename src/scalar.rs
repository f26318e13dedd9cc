//! Element types accepted by [`FixedVector`](crate::FixedVector).
//!
//! Everything a vector needs from its components comes from [`num`]'s
//! numeric traits, except the Euclidean length: floats take a real square
//! root while integers take an integer root of a wrapped sum of squares, so
//! each family gets its own implementation.

use std::fmt::{Debug, Display};

use num::integer::Roots;
use num::{Num, NumCast};

/// A numeric component type: a signed integer, unsigned integer or float.
pub trait Scalar:
    Copy + Debug + Display + PartialOrd + Num + NumCast + Send + Sync + 'static
{
    /// Square root of the sum of squares of `values`, in `Self`.
    ///
    /// Floats return `sqrt(Σ v²)`. Unsigned integers square and sum with
    /// wrapping arithmetic and return the integer square root. Signed
    /// integers do the same wrapping sum, then reinterpret the bits of the
    /// sum as the unsigned type of the same width before taking the root,
    /// and narrow the (always representable) root back to `Self`.
    fn root_sum_of_squares(values: &[Self]) -> Self;

    /// Sum of `values`; integer types wrap on overflow.
    fn wrapping_sum(values: &[Self]) -> Self;
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn root_sum_of_squares(values: &[Self]) -> Self {
                    values.iter().map(|v| v * v).sum::<$t>().sqrt()
                }

                #[inline(always)]
                fn wrapping_sum(values: &[Self]) -> Self {
                    values.iter().fold(0.0, |acc: $t, &v| acc + v)
                }
            }
        )*
    };
}

macro_rules! impl_scalar_unsigned {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn root_sum_of_squares(values: &[Self]) -> Self {
                    let sum = values
                        .iter()
                        .fold(0, |acc: $t, &v| acc.wrapping_add(v.wrapping_mul(v)));
                    Roots::sqrt(&sum)
                }

                #[inline(always)]
                fn wrapping_sum(values: &[Self]) -> Self {
                    values.iter().fold(0, |acc: $t, &v| acc.wrapping_add(v))
                }
            }
        )*
    };
}

macro_rules! impl_scalar_signed {
    ($($t:ty => $unsigned:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn root_sum_of_squares(values: &[Self]) -> Self {
                    let sum = values
                        .iter()
                        .fold(0, |acc: $t, &v| acc.wrapping_add(v.wrapping_mul(v)));
                    // Same width, so `as` keeps the bit pattern.
                    let bits = sum as $unsigned;
                    Roots::sqrt(&bits) as $t
                }

                #[inline(always)]
                fn wrapping_sum(values: &[Self]) -> Self {
                    values.iter().fold(0, |acc: $t, &v| acc.wrapping_add(v))
                }
            }
        )*
    };
}

impl_scalar_float!(f32, f64);
impl_scalar_unsigned!(u8, u16, u32, u64, u128, usize);
impl_scalar_signed!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize
);

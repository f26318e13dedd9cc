//! Generic fixed-size numeric vectors.
//!
//! [`FixedVector<N, T>`] stores `N` components of a numeric type `T` (any
//! primitive signed integer, unsigned integer or float) and provides
//! element-wise arithmetic, reductions, magnitude, normalization, dot and
//! cross products, distance, angle, reflection and swizzling.
//!
//! Operations that are undefined for a dimension are rejected when the
//! program is built rather than at run time: `z()` on a 2-vector, `cross()`
//! on anything but a 3-vector, or a swizzle naming a missing component.
//!
//! ```rust
//! use fixvec::{swizzle, Vec2f, Vec3};
//!
//! let v = Vec2f::new([1.0, 2.0]);
//! assert_eq!(v.sum(), 3.0);
//! assert_eq!(swizzle!(v, "yx"), Vec2f::new([2.0, 1.0]));
//!
//! let n = Vec3::new([0, 0, 1]);
//! assert_eq!(Vec3::new([1, 0, 0]).cross(Vec3::new([0, 1, 0])), n);
//! ```

mod dim;

pub mod batch;
pub mod error;
pub mod scalar;
pub mod swizzle;
pub mod vector;

pub use batch::{centroid, VectorBatch};
pub use error::{FixVecError, Result};
pub use scalar::Scalar;
pub use vector::{FixedVector, Vec2, Vec2f, Vec2i, Vec3, Vec3f, Vec3i, Vec4, Vec4f, Vec4i};

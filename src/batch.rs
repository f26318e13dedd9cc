//! Operations over many vectors at once.
//!
//! [`VectorBatch`] is implemented for slices of [`FixedVector`]. Each
//! operation comes as a sequential method and, with the `rayon` feature
//! (enabled by default), a `par_`-prefixed twin that spreads the work over the
//! rayon global thread pool.
//!
//! Integer results are identical between the two. Float sums may differ in the
//! last bits because the parallel reduction groups additions differently.
//!
//! # Examples
//!
//! ```rust
//! use fixvec::{FixedVector, VectorBatch};
//!
//! let points = vec![
//!     FixedVector::new([1, 2]),
//!     FixedVector::new([3, 4]),
//!     FixedVector::new([5, 6]),
//! ];
//! assert_eq!(points.sum_all(), FixedVector::new([9, 12]));
//! ```

use num::Float;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::error::{length_mismatch, Result};
use crate::scalar::Scalar;
use crate::vector::FixedVector;

pub trait VectorBatch<const N: usize, T> {
    /// Element-wise sum of every vector; the zero vector for an empty batch.
    fn sum_all(&self) -> FixedVector<N, T>;

    #[cfg(feature = "rayon")]
    fn par_sum_all(&self) -> FixedVector<N, T>;

    /// [`FixedVector::normalize`] applied to every vector.
    fn normalize_all(&self) -> Vec<FixedVector<N, T>>;

    #[cfg(feature = "rayon")]
    fn par_normalize_all(&self) -> Vec<FixedVector<N, T>>;

    /// Pairwise dot products with `other`.
    ///
    /// # Errors
    ///
    /// [`FixVecError::LengthMismatch`](crate::FixVecError::LengthMismatch) if
    /// the two batches differ in length.
    fn dots(&self, other: &[FixedVector<N, T>]) -> Result<Vec<T>>;

    #[cfg(feature = "rayon")]
    fn par_dots(&self, other: &[FixedVector<N, T>]) -> Result<Vec<T>>;
}

fn check_same_length(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        log::debug!(
            "batch length mismatch: {} vectors against {}",
            expected,
            actual
        );
        return Err(length_mismatch(expected, actual));
    }
    Ok(())
}

impl<const N: usize, T: Scalar> VectorBatch<N, T> for [FixedVector<N, T>] {
    fn sum_all(&self) -> FixedVector<N, T> {
        self.iter()
            .fold(FixedVector::zero(), |acc, &vector| acc + vector)
    }

    #[cfg(feature = "rayon")]
    fn par_sum_all(&self) -> FixedVector<N, T> {
        self.par_iter()
            .copied()
            .reduce(FixedVector::zero, |a, b| a + b)
    }

    fn normalize_all(&self) -> Vec<FixedVector<N, T>> {
        self.iter().map(FixedVector::normalize).collect()
    }

    #[cfg(feature = "rayon")]
    fn par_normalize_all(&self) -> Vec<FixedVector<N, T>> {
        self.par_iter().map(FixedVector::normalize).collect()
    }

    fn dots(&self, other: &[FixedVector<N, T>]) -> Result<Vec<T>> {
        check_same_length(self.len(), other.len())?;

        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(a, &b)| a.dot(b))
            .collect())
    }

    #[cfg(feature = "rayon")]
    fn par_dots(&self, other: &[FixedVector<N, T>]) -> Result<Vec<T>> {
        check_same_length(self.len(), other.len())?;

        Ok(self
            .par_iter()
            .zip(other.par_iter())
            .map(|(a, &b)| a.dot(b))
            .collect())
    }
}

/// Mean of a batch of float vectors, or `None` if the batch is empty.
pub fn centroid<const N: usize, T: Scalar + Float>(
    vectors: &[FixedVector<N, T>],
) -> Option<FixedVector<N, T>> {
    if vectors.is_empty() {
        return None;
    }
    let count: T = num::cast(vectors.len())?;
    Some(vectors.sum_all() / count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixVecError;

    fn sample() -> Vec<FixedVector<3, i64>> {
        (0..1000)
            .map(|i| FixedVector::new([i, -2 * i, i % 7]))
            .collect()
    }

    #[test]
    fn test_sum_all_empty_is_zero() {
        let empty: [FixedVector<2, f32>; 0] = [];
        assert_eq!(empty.sum_all(), FixedVector::zero());
    }

    #[test]
    fn test_sum_all() {
        let total = sample().sum_all();
        let expected_mod: i64 = (0..1000).map(|i| i % 7).sum();
        assert_eq!(total, FixedVector::new([499_500, -999_000, expected_mod]));
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_par_sum_all_matches_sequential() {
        let batch = sample();
        assert_eq!(batch.par_sum_all(), batch.sum_all());
    }

    #[test]
    fn test_normalize_all() {
        let batch = vec![
            FixedVector::new([3.0f64, 4.0]),
            FixedVector::new([0.0f64, -2.0]),
        ];
        let normalized = batch.normalize_all();
        assert_eq!(normalized[0], FixedVector::new([0.6, 0.8]));
        assert_eq!(normalized[1], FixedVector::new([0.0, -1.0]));
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_par_normalize_all_matches_sequential() {
        let batch: Vec<_> = (1..500)
            .map(|i| FixedVector::new([i as f32, 1.0, -(i as f32) * 0.5]))
            .collect();
        assert_eq!(batch.par_normalize_all(), batch.normalize_all());
    }

    #[test]
    fn test_dots() {
        let a = [FixedVector::new([1, 2]), FixedVector::new([3, 4])];
        let b = [FixedVector::new([5, 6]), FixedVector::new([-1, 1])];
        assert_eq!(a.dots(&b), Ok(vec![17, 1]));
    }

    #[test]
    fn test_dots_length_mismatch() {
        let a = [FixedVector::new([1u32, 2])];
        let b: [FixedVector<2, u32>; 0] = [];
        assert_eq!(
            a.dots(&b),
            Err(FixVecError::LengthMismatch {
                expected: 1,
                actual: 0
            })
        );
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_par_dots_matches_sequential() {
        let a = sample();
        let b: Vec<_> = a.iter().map(|v| -*v).collect();
        assert_eq!(a.par_dots(&b), a.dots(&b));
        assert!(a.par_dots(&b[1..]).is_err());
    }

    #[test]
    fn test_centroid() {
        let points = [
            FixedVector::new([0.0f64, 0.0]),
            FixedVector::new([4.0f64, 0.0]),
            FixedVector::new([4.0f64, 6.0]),
            FixedVector::new([0.0f64, 6.0]),
        ];
        assert_eq!(centroid(&points), Some(FixedVector::new([2.0, 3.0])));
        assert_eq!(centroid::<2, f64>(&[]), None);
    }
}

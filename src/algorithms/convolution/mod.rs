use std::cmp::min;

use crate::ring::*;

///
/// Trait for objects that can compute a convolution over some ring.
///
/// # Example
/// ```
/// # use poly_ring::ring::*;
/// # use poly_ring::primitive_int::*;
/// # use poly_ring::algorithms::convolution::*;
/// let lhs = [1, 2, 3];
/// let rhs = [4, 5, 6];
/// let mut dst = [0; 5];
/// STANDARD_CONVOLUTION.compute_convolution(&lhs, &rhs, &mut dst, &StaticRing::<i64>::RING);
/// assert_eq!([4, 13, 28, 27, 18], dst);
/// ```
///
pub trait ConvolutionAlgorithm<R: ?Sized + Ring> {

    ///
    /// Elementwise adds the convolution of `lhs` and `rhs` to `dst`.
    ///
    /// In other words, computes `dst[k] += sum_i lhs[i] * rhs[k - i]` for all `k`, where
    /// `i` runs through all indices for which `lhs[i]` and `rhs[k - i]` are defined.
    /// The terms are added to `dst[k]` one after another, in the order of increasing `i`.
    ///
    /// # Panic
    ///
    /// Panics if both operands are nonempty and `dst` is shorter than `lhs.len() + rhs.len() - 1`.
    ///
    fn compute_convolution(&self, lhs: &[R::Element], rhs: &[R::Element], dst: &mut [R::Element], ring: &R);
}

///
/// Computes convolutions by accumulating all pairwise products `lhs[i] * rhs[j]`
/// into `dst[i + j]`, i.e. with quadratic complexity.
///
#[derive(Clone, Copy, Debug)]
pub struct DirectConvolution;

pub const STANDARD_CONVOLUTION: DirectConvolution = DirectConvolution;

fn assert_dst_len<T>(lhs: &[T], rhs: &[T], dst: &[T]) {
    if lhs.len() > 0 && rhs.len() > 0 {
        assert!(dst.len() >= lhs.len() + rhs.len() - 1, "destination of length {} too short for convolution of lengths {} and {}", dst.len(), lhs.len(), rhs.len());
    }
}

impl<R: ?Sized + Ring> ConvolutionAlgorithm<R> for DirectConvolution {

    fn compute_convolution(&self, lhs: &[R::Element], rhs: &[R::Element], dst: &mut [R::Element], ring: &R) {
        assert_dst_len(lhs, rhs, dst);
        for i in 0..lhs.len() {
            for j in 0..rhs.len() {
                dst[i + j] = ring.sum(&dst[i + j], &ring.product(&lhs[i], &rhs[j]));
            }
        }
    }
}

///
/// Computes convolutions by computing every output entry on its own, distributed
/// over the rayon thread pool.
///
/// Every entry `dst[k]` receives exactly the same sequence of additions as with
/// [`DirectConvolution`], thus the result is the same, even if the addition of the
/// ring is only approximately associative (as for floating point numbers).
///
#[cfg(feature = "parallel")]
#[derive(Clone, Copy, Debug)]
pub struct ParallelConvolution;

#[cfg(feature = "parallel")]
impl<R: ?Sized + Ring + Sync> ConvolutionAlgorithm<R> for ParallelConvolution
    where R::Element: Send + Sync
{
    fn compute_convolution(&self, lhs: &[R::Element], rhs: &[R::Element], dst: &mut [R::Element], ring: &R) {
        use rayon::prelude::*;

        assert_dst_len(lhs, rhs, dst);
        if lhs.len() == 0 || rhs.len() == 0 {
            return;
        }
        let out_len = lhs.len() + rhs.len() - 1;
        dst[..out_len].par_iter_mut().enumerate().for_each(|(k, current)| {
            for i in contributing_range(lhs.len(), rhs.len(), k) {
                *current = ring.sum(current, &ring.product(&lhs[i], &rhs[k - i]));
            }
        });
    }
}

///
/// Returns the range of indices `i` such that `lhs[i] * rhs[k - i]` contributes
/// to the `k`-th entry of the convolution.
///
pub fn contributing_range(lhs_len: usize, rhs_len: usize, k: usize) -> std::ops::Range<usize> {
    let start = (k + 1).saturating_sub(rhs_len);
    let end = min(k + 1, lhs_len);
    return start..end.max(start);
}

#[cfg(test)]
use crate::primitive_int::StaticRing;
#[cfg(test)]
use crate::rings::float_real::Real64;

#[test]
fn test_direct_convolution() {
    let ZZ = StaticRing::<i64>::RING;
    let mut dst = [0; 7];
    STANDARD_CONVOLUTION.compute_convolution(&[1, 2, 3, 4, 5], &[4, 5, 6], &mut dst, &ZZ);
    assert_eq!([4, 13, 28, 43, 58, 49, 30], dst);

    let mut dst = [1, 1, 1, 1, 1, 1];
    STANDARD_CONVOLUTION.compute_convolution(&[1, -2, 3], &[-4, 5, -6], &mut dst, &ZZ);
    assert_eq!([-3, 14, -27, 28, -17, 1], dst);
}

#[test]
fn test_convolution_empty_operand() {
    let ZZ = StaticRing::<i64>::RING;
    let mut dst: [i64; 0] = [];
    STANDARD_CONVOLUTION.compute_convolution(&[], &[1, 2, 3], &mut dst, &ZZ);
    STANDARD_CONVOLUTION.compute_convolution(&[1, 2, 3], &[], &mut dst, &ZZ);
    STANDARD_CONVOLUTION.compute_convolution(&[], &[], &mut dst, &ZZ);
}

#[test]
#[should_panic]
fn test_convolution_dst_too_short() {
    let ZZ = StaticRing::<i64>::RING;
    let mut dst = [0; 4];
    STANDARD_CONVOLUTION.compute_convolution(&[1, 2, 3], &[4, 5, 6], &mut dst, &ZZ);
}

#[test]
fn test_contributing_range() {
    assert_eq!(0..1, contributing_range(3, 3, 0));
    assert_eq!(0..3, contributing_range(3, 3, 2));
    assert_eq!(2..3, contributing_range(3, 3, 4));
    assert_eq!(3..5, contributing_range(5, 3, 5));
    assert_eq!(0..0, contributing_range(0, 3, 1));
}

#[test]
fn test_float_convolution_accumulates_in_order() {
    let RR = Real64::RING;
    let lhs = [1e16, 1., -1e16];
    let rhs = [1., 1.];
    let mut dst = [0.; 4];
    STANDARD_CONVOLUTION.compute_convolution(&lhs, &rhs, &mut dst, &RR);
    assert_eq!([1e16, 1e16 + 1., 1. - 1e16, -1e16], dst);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_convolution_matches_direct() {
    let ZZ = StaticRing::<i64>::RING;
    let mut rng = oorandom::Rand64::new(1);
    for _ in 0..20 {
        let lhs = (0..(rng.rand_range(1..40))).map(|_| rng.rand_i64() % 1000).collect::<Vec<_>>();
        let rhs = (0..(rng.rand_range(1..40))).map(|_| rng.rand_i64() % 1000).collect::<Vec<_>>();
        let mut expected = vec![0; lhs.len() + rhs.len() - 1];
        let mut actual = vec![0; lhs.len() + rhs.len() - 1];
        STANDARD_CONVOLUTION.compute_convolution(&lhs, &rhs, &mut expected, &ZZ);
        ParallelConvolution.compute_convolution(&lhs, &rhs, &mut actual, &ZZ);
        assert_eq!(expected, actual);
    }
}

use std::marker::PhantomData;
use std::ops::{Add, Mul};

use crate::ring::*;

///
/// Trait for the primitive signed integer types `i8` to `i128`.
///
pub trait PrimitiveInt: Add<Output = Self> + Mul<Output = Self> + Eq + From<i8> + Copy + std::fmt::Debug + std::fmt::Display {}

impl PrimitiveInt for i8 {}
impl PrimitiveInt for i16 {}
impl PrimitiveInt for i32 {}
impl PrimitiveInt for i64 {}
impl PrimitiveInt for i128 {}

///
/// The ring of machine integers of type `T`. Arithmetic is performed using the
/// primitive operators, so overflow behaves as it does for `T` itself (panics in
/// debug builds, wraps in release builds).
///
/// For the arbitrary-precision integer ring, see [`crate::rings::bigint::BigIntRing`].
///
/// # Example
/// ```
/// # use poly_ring::ring::*;
/// # use poly_ring::primitive_int::*;
/// let ZZ = StaticRing::<i64>::RING;
/// assert_eq!(42, ZZ.product(&6, &7));
/// assert_eq!(13, ZZ.sum(&6, &7));
/// ```
///
pub struct StaticRing<T> {
    element: PhantomData<T>
}

impl<T: PrimitiveInt> StaticRing<T> {
    pub const RING: StaticRing<T> = StaticRing { element: PhantomData };
}

impl<T> Copy for StaticRing<T> {}

impl<T> Clone for StaticRing<T> {

    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for StaticRing<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T> std::fmt::Debug for StaticRing<T> {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StaticRing<{}>", std::any::type_name::<T>())
    }
}

impl<T: PrimitiveInt> Ring for StaticRing<T> {

    type Element = T;

    fn zero(&self) -> T {
        T::from(0)
    }

    fn identity(&self) -> T {
        T::from(1)
    }

    fn sum(&self, lhs: &T, rhs: &T) -> T {
        *lhs + *rhs
    }

    fn product(&self, lhs: &T, rhs: &T) -> T {
        *lhs * *rhs
    }
}

#[test]
fn test_ring_axioms() {
    crate::ring::generic_tests::test_ring_axioms(StaticRing::<i64>::RING, [-2, -1, 0, 1, 2, 3, 7].into_iter());
    crate::ring::generic_tests::test_ring_axioms(StaticRing::<i8>::RING, [-2, -1, 0, 1, 2, 3].into_iter());
    crate::ring::generic_tests::test_product_commutative(StaticRing::<i128>::RING, [-1, 0, 1, i64::MAX as i128].into_iter());
}

#[test]
fn test_identities() {
    assert_eq!(0, StaticRing::<i32>::RING.zero());
    assert_eq!(1, StaticRing::<i32>::RING.identity());
    assert_eq!(0i128, StaticRing::<i128>::RING.zero());
    assert_eq!(1i16, StaticRing::<i16>::RING.identity());
}

#[test]
#[should_panic]
#[cfg(debug_assertions)]
fn test_overflow_is_left_to_primitive_type() {
    let ZZ = StaticRing::<i8>::RING;
    ZZ.product(&64, &4);
}

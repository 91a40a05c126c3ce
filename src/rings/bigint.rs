use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::ring::*;

///
/// The ring of arbitrary-precision integers, using [`num_bigint::BigInt`]
/// as element type.
///
/// # Example
/// ```
/// # use num_bigint::BigInt;
/// # use poly_ring::ring::*;
/// # use poly_ring::rings::bigint::*;
/// let ZZ = BigIntRing::RING;
/// let big = ZZ.pow(&BigInt::from(2), 100);
/// assert_eq!("1267650600228229401496703205376", big.to_string());
/// ```
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BigIntRing;

impl BigIntRing {

    pub const RING: BigIntRing = BigIntRing;
}

impl Ring for BigIntRing {

    type Element = BigInt;

    fn zero(&self) -> BigInt {
        BigInt::zero()
    }

    fn identity(&self) -> BigInt {
        BigInt::one()
    }

    fn sum(&self, lhs: &BigInt, rhs: &BigInt) -> BigInt {
        lhs + rhs
    }

    fn product(&self, lhs: &BigInt, rhs: &BigInt) -> BigInt {
        lhs * rhs
    }
}

#[cfg(test)]
fn edge_case_elements() -> impl Iterator<Item = BigInt> {
    [
        BigInt::from(0),
        BigInt::from(1),
        BigInt::from(-1),
        BigInt::from(i64::MAX),
        BigInt::from(i64::MIN),
        BigInt::from(u128::MAX) * BigInt::from(3)
    ].into_iter()
}

#[test]
fn test_ring_axioms() {
    crate::ring::generic_tests::test_ring_axioms(BigIntRing::RING, edge_case_elements());
    crate::ring::generic_tests::test_product_commutative(BigIntRing::RING, edge_case_elements());
}

#[test]
fn test_no_overflow() {
    let ZZ = BigIntRing::RING;
    let a = BigInt::from(i64::MAX);
    let expected = BigInt::from(i64::MAX as i128 * i64::MAX as i128);
    assert_eq!(expected, ZZ.product(&a, &a));
    assert_eq!(BigInt::from(i64::MAX as i128 * 2), ZZ.sum(&a, &a));
}

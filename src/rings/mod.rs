///
/// This module contains [`poly::Polynomial`] and [`poly::PolynomialRing`], which implement
/// univariate polynomials over any base ring.
///
pub mod poly;

///
/// This module contains [`bigint::BigIntRing`], the ring of arbitrary-precision integers.
///
pub mod bigint;

///
/// An approximate implementation of the field of real numbers `R`, using 64-bit floating point
/// numbers.
///
pub mod float_real;

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::algorithms::convolution::*;
use crate::ring::*;

///
/// A univariate polynomial, stored as the dense sequence of its coefficients
/// `c0, c1, ..., cn`, where `ci` is the coefficient of `X^i`.
///
/// A polynomial does not know about the ring its coefficients live in. Instead,
/// [`Polynomial::plus()`] and [`Polynomial::times()`] take the ring as explicit
/// parameter. Use [`super::dense_poly::PolynomialRing`] to get a [`Ring`] whose
/// elements are polynomials.
///
/// Polynomials are immutable values. Trailing zero coefficients are never removed,
/// thus the length of the coefficient sequence is part of the value, and e.g.
/// `[1, 0]` and `[1]` are different polynomials w.r.t. `==`. The empty sequence
/// represents the zero polynomial.
///
/// # Example
/// ```
/// # use poly_ring::primitive_int::*;
/// # use poly_ring::rings::poly::*;
/// let ZZ = StaticRing::<i64>::RING;
/// let f = Polynomial::from(vec![1, 2, 3]);
/// let g = Polynomial::from(vec![4, 5, 6]);
/// assert_eq!(vec![4, 13, 28, 27, 18], f.times(&g, &ZZ).coefficients());
/// assert_eq!(vec![5, 7, 9], f.plus(&g, &ZZ).coefficients());
/// ```
///
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polynomial<T> {
    data: Box<[T]>
}

impl<T> Polynomial<T> {

    ///
    /// Returns a copy of the coefficients, in the order of increasing degree.
    /// Modifying the returned vector does not affect the polynomial.
    ///
    pub fn coefficients(&self) -> Vec<T>
        where T: Clone
    {
        self.data.to_vec()
    }

    pub fn into_coefficients(self) -> Vec<T> {
        self.data.into_vec()
    }

    ///
    /// Returns the coefficient of `X^i`, or `None` if `i` is not smaller than
    /// the length of the coefficient sequence.
    ///
    pub fn coefficient_at(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    ///
    /// The length of the coefficient sequence. Since trailing zeros are kept,
    /// this is in general larger than the degree plus one.
    ///
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter<'a>(&'a self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }

    ///
    /// Adds two polynomials over the given ring.
    ///
    /// The result has length `max(self.len(), other.len())`, where the missing
    /// coefficients of the shorter operand are taken to be `ring.zero()`. The
    /// coefficients are added as `ring.sum(self_coeff, other_coeff)`.
    ///
    pub fn plus<R>(&self, other: &Polynomial<T>, ring: &R) -> Polynomial<T>
        where R: ?Sized + Ring<Element = T>, T: Clone
    {
        let zero = ring.zero();
        let len = self.len().max(other.len());
        let result = (0..len).map(|i| ring.sum(
            self.data.get(i).unwrap_or(&zero),
            other.data.get(i).unwrap_or(&zero)
        )).collect::<Vec<_>>();
        return Polynomial::from(result);
    }

    ///
    /// Multiplies two polynomials over the given ring.
    ///
    /// If any operand is empty (i.e. the zero polynomial), the result is empty.
    /// Otherwise, it has length `self.len() + other.len() - 1` and its coefficients
    /// are computed by convolution: Starting from `ring.zero()` everywhere, every product
    /// `ring.product(self[i], other[j])` is added to the entry `i + j`, iterating
    /// over `i` in the outer and over `j` in the inner loop.
    ///
    pub fn times<R>(&self, other: &Polynomial<T>, ring: &R) -> Polynomial<T>
        where R: ?Sized + Ring<Element = T>, T: Clone
    {
        self.times_with(other, ring, STANDARD_CONVOLUTION)
    }

    ///
    /// Same as [`Polynomial::times()`], but computes the entries of the result in
    /// parallel. Since every entry receives the same sequence of additions, the
    /// result is equal to the one of [`Polynomial::times()`].
    ///
    #[cfg(feature = "parallel")]
    pub fn par_times<R>(&self, other: &Polynomial<T>, ring: &R) -> Polynomial<T>
        where R: ?Sized + Ring<Element = T> + Sync, T: Clone + Send + Sync
    {
        self.times_with(other, ring, ParallelConvolution)
    }

    fn times_with<R, C>(&self, other: &Polynomial<T>, ring: &R, convolution: C) -> Polynomial<T>
        where R: ?Sized + Ring<Element = T>,
            T: Clone,
            C: ConvolutionAlgorithm<R>
    {
        trace!(lhs_len = self.len(), rhs_len = other.len(), "multiplying polynomials");
        if self.is_empty() || other.is_empty() {
            return Polynomial::from(Vec::new());
        }
        let mut result = vec![ring.zero(); self.len() + other.len() - 1];
        convolution.compute_convolution(&self.data, &other.data, &mut result, ring);
        return Polynomial::from(result);
    }
}

impl<T> From<Vec<T>> for Polynomial<T> {

    fn from(coefficients: Vec<T>) -> Self {
        Polynomial { data: coefficients.into_boxed_slice() }
    }
}

impl<'a, T: Clone> From<&'a [T]> for Polynomial<T> {

    fn from(coefficients: &'a [T]) -> Self {
        Polynomial { data: coefficients.into() }
    }
}

impl<T, const N: usize> From<[T; N]> for Polynomial<T> {

    fn from(coefficients: [T; N]) -> Self {
        Polynomial::from(Vec::from(coefficients))
    }
}

impl<T> FromIterator<T> for Polynomial<T> {

    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Polynomial::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a Polynomial<T> {

    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

///
/// Displays the coefficient sequence, e.g. `[4, 13, 28]`. For a representation
/// in terms of an indeterminate, use [`super::dense_poly::PolynomialRing::format()`].
///
impl<T: Display> Display for Polynomial<T> {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        return write!(f, "]");
    }
}

///
/// Error when parsing a [`Polynomial`] from its textual representation.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolynomialError {
    #[error("invalid argument: no coefficient list given")]
    MissingCoefficients,
    #[error("invalid coefficient {token:?} at position {position}: {reason}")]
    InvalidCoefficient {
        position: usize,
        token: String,
        reason: String
    }
}

///
/// Parses a comma-separated list of coefficients, optionally enclosed in square brackets,
/// like `"[1, -2, 3]"` or `"1,-2,3"`. The list `"[]"` is the zero polynomial, while
/// blank input is rejected with [`PolynomialError::MissingCoefficients`].
///
impl<T: FromStr> FromStr for Polynomial<T>
    where T::Err: Display
{
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PolynomialError::MissingCoefficients);
        }
        let content = match trimmed.strip_prefix('[') {
            Some(rest) => rest.strip_suffix(']').ok_or_else(|| PolynomialError::InvalidCoefficient {
                position: 0,
                token: trimmed.to_owned(),
                reason: "missing closing bracket".to_owned()
            })?,
            None => trimmed
        }.trim();
        if content.is_empty() {
            return Ok(Polynomial::from(Vec::new()));
        }
        return content.split(',').enumerate().map(|(position, token)| {
            let token = token.trim();
            token.parse::<T>().map_err(|e| PolynomialError::InvalidCoefficient {
                position,
                token: token.to_owned(),
                reason: e.to_string()
            })
        }).collect::<Result<Polynomial<T>, _>>();
    }
}

#[cfg(test)]
use crate::primitive_int::StaticRing;
#[cfg(test)]
use crate::rings::bigint::BigIntRing;
#[cfg(test)]
use crate::rings::float_real::Real64;
#[cfg(test)]
use num_bigint::BigInt;

#[cfg(test)]
fn poly(coefficients: &[i64]) -> Polynomial<i64> {
    Polynomial::from(coefficients)
}

#[cfg(test)]
fn random_poly(rng: &mut oorandom::Rand64, max_len: u64) -> Polynomial<i64> {
    let len = rng.rand_range(0..(max_len + 1));
    (0..len).map(|_| rng.rand_i64() % 100).collect()
}

#[test]
fn test_plus() {
    let ZZ = StaticRing::<i64>::RING;
    assert!(poly(&[]).plus(&poly(&[]), &ZZ).is_empty());
    assert_eq!(vec![2], poly(&[1]).plus(&poly(&[1]), &ZZ).coefficients());
    assert_eq!(vec![5, 7, 9], poly(&[1, 2, 3]).plus(&poly(&[4, 5, 6]), &ZZ).coefficients());
    assert_eq!(vec![5, 7, 9, 4, 5], poly(&[1, 2, 3, 4, 5]).plus(&poly(&[4, 5, 6]), &ZZ).coefficients());
    assert_eq!(vec![5, 7, 9, 4, 5], poly(&[4, 5, 6]).plus(&poly(&[1, 2, 3, 4, 5]), &ZZ).coefficients());
    assert_eq!(vec![-3, 3, -3], poly(&[1, -2, 3]).plus(&poly(&[-4, 5, -6]), &ZZ).coefficients());
}

#[test]
fn test_plus_keeps_trailing_zeros() {
    let ZZ = StaticRing::<i64>::RING;
    assert_eq!(vec![0, 0], poly(&[1, 2]).plus(&poly(&[-1, -2]), &ZZ).coefficients());
    assert_eq!(vec![3, 0, 0], poly(&[3]).plus(&poly(&[0, 0, 0]), &ZZ).coefficients());
}

#[test]
fn test_times() {
    let ZZ = StaticRing::<i64>::RING;
    assert!(poly(&[]).times(&poly(&[]), &ZZ).is_empty());
    assert_eq!(vec![1], poly(&[1]).times(&poly(&[1]), &ZZ).coefficients());
    assert_eq!(vec![4, 13, 28, 27, 18], poly(&[1, 2, 3]).times(&poly(&[4, 5, 6]), &ZZ).coefficients());
    assert_eq!(vec![4, 13, 28, 43, 58, 49, 30], poly(&[1, 2, 3, 4, 5]).times(&poly(&[4, 5, 6]), &ZZ).coefficients());
    assert_eq!(vec![4, 13, 28, 43, 58, 49, 30], poly(&[4, 5, 6]).times(&poly(&[1, 2, 3, 4, 5]), &ZZ).coefficients());
    assert_eq!(vec![4, 0, 18, 0, 18], poly(&[1, 0, 3]).times(&poly(&[4, 0, 6]), &ZZ).coefficients());
    assert_eq!(vec![1, 2, 3], poly(&[1, 2, 3]).times(&poly(&[1]), &ZZ).coefficients());
    assert_eq!(vec![-4, 13, -28, 27, -18], poly(&[1, -2, 3]).times(&poly(&[-4, 5, -6]), &ZZ).coefficients());
}

#[test]
fn test_times_empty_operand() {
    let ZZ = StaticRing::<i64>::RING;
    assert!(poly(&[]).times(&poly(&[1, 2, 3]), &ZZ).is_empty());
    assert!(poly(&[1, 2, 3]).times(&poly(&[]), &ZZ).is_empty());
    assert!(poly(&[]).times(&poly(&[0]), &ZZ).is_empty());
}

#[test]
fn test_length_laws() {
    let ZZ = StaticRing::<i64>::RING;
    let mut rng = oorandom::Rand64::new(0);
    for _ in 0..200 {
        let f = random_poly(&mut rng, 8);
        let g = random_poly(&mut rng, 8);
        assert_eq!(f.len().max(g.len()), f.plus(&g, &ZZ).len());
        if f.is_empty() || g.is_empty() {
            assert!(f.times(&g, &ZZ).is_empty());
        } else {
            assert_eq!(f.len() + g.len() - 1, f.times(&g, &ZZ).len());
        }
    }
}

#[test]
fn test_commutativity() {
    let ZZ = StaticRing::<i64>::RING;
    let mut rng = oorandom::Rand64::new(1);
    for _ in 0..200 {
        let f = random_poly(&mut rng, 8);
        let g = random_poly(&mut rng, 8);
        assert_eq!(f.plus(&g, &ZZ), g.plus(&f, &ZZ));
        assert_eq!(f.times(&g, &ZZ), g.times(&f, &ZZ));
    }
}

#[test]
fn test_additive_identity() {
    let ZZ = StaticRing::<i64>::RING;
    let zero = poly(&[]);
    let mut rng = oorandom::Rand64::new(2);
    for _ in 0..50 {
        let f = random_poly(&mut rng, 10);
        assert_eq!(f, f.plus(&zero, &ZZ));
        assert_eq!(f, zero.plus(&f, &ZZ));
    }
}

#[test]
fn test_plus_operand_order() {
    // a non-commutative "sum", so that the order of the operands becomes visible
    struct LeftBiased;

    impl Ring for LeftBiased {
        type Element = i64;

        fn zero(&self) -> i64 { 0 }
        fn identity(&self) -> i64 { 1 }
        fn sum(&self, lhs: &i64, rhs: &i64) -> i64 { 2 * lhs + rhs }
        fn product(&self, lhs: &i64, rhs: &i64) -> i64 { lhs * rhs }
    }

    assert_eq!(vec![2 * 1 + 10, 2 * 2 + 20, 2 * 3], poly(&[1, 2, 3]).plus(&poly(&[10, 20]), &LeftBiased).coefficients());
    assert_eq!(vec![2 * 10 + 1, 2 * 20 + 2, 3], poly(&[10, 20]).plus(&poly(&[1, 2, 3]), &LeftBiased).coefficients());
}

#[test]
fn test_coefficients_are_copied() {
    let ZZ = StaticRing::<i64>::RING;
    let mut input = vec![1, 2, 3];
    let f = Polynomial::from(&input[..]);
    input[0] = 100;
    assert_eq!(vec![1, 2, 3], f.coefficients());

    let mut output = f.coefficients();
    output[1] = 100;
    output.push(7);
    assert_eq!(vec![1, 2, 3], f.coefficients());
    assert_eq!(vec![4, 13, 28, 27, 18], f.times(&poly(&[4, 5, 6]), &ZZ).coefficients());
}

#[test]
fn test_accessors() {
    let f = poly(&[1, 0, 3, 0]);
    assert_eq!(4, f.len());
    assert!(!f.is_empty());
    assert_eq!(Some(&3), f.coefficient_at(2));
    assert_eq!(Some(&0), f.coefficient_at(3));
    assert_eq!(None, f.coefficient_at(4));
    assert_eq!(vec![1, 0, 3, 0], f.iter().copied().collect::<Vec<_>>());
    assert_eq!(4, (&f).into_iter().count());
    assert_eq!(vec![1, 0, 3, 0], f.into_coefficients());
    assert!(Polynomial::<i64>::from(Vec::new()).is_empty());
    assert_eq!(poly(&[1, 2]), Polynomial::from([1, 2]));
    assert_eq!(poly(&[1, 2]), [1, 2].into_iter().collect::<Polynomial<_>>());
}

#[test]
fn test_bigint_coefficients() {
    let ZZ = BigIntRing::RING;
    let big = BigInt::from(u64::MAX);
    let f = Polynomial::from(vec![big.clone(), BigInt::from(1)]);
    let g = Polynomial::from(vec![big.clone(), BigInt::from(-1)]);
    let expected = vec![&big * &big, BigInt::from(0), BigInt::from(-1)];
    assert_eq!(expected, f.times(&g, &ZZ).coefficients());
    assert_eq!(vec![&big + &big, BigInt::from(0)], f.plus(&g, &ZZ).coefficients());
}

#[test]
fn test_float_coefficients() {
    let RR = Real64::RING;
    let f = Polynomial::from(vec![0.5, 1.5]);
    let g = Polynomial::from(vec![2., -1., 0.25]);
    let actual = f.times(&g, &RR).coefficients();
    let expected = [1., 2.5, -1.375, 0.375];
    assert_eq!(expected.len(), actual.len());
    for (e, a) in expected.iter().zip(actual.iter()) {
        assert!(RR.is_approx_eq(*e, *a, 10));
    }
}

#[test]
fn test_display() {
    assert_eq!("[]", format!("{}", poly(&[])));
    assert_eq!("[4, 13, 28, 27, 18]", format!("{}", poly(&[4, 13, 28, 27, 18])));
    assert_eq!("[[1, 2], []]", format!("{}", Polynomial::from(vec![poly(&[1, 2]), poly(&[])])));
}

#[test]
fn test_parse() {
    assert_eq!(Ok(poly(&[1, -2, 3])), "[1, -2, 3]".parse());
    assert_eq!(Ok(poly(&[1, -2, 3])), " 1,-2 , 3 ".parse());
    assert_eq!(Ok(poly(&[])), "[]".parse());
    assert_eq!(Ok(poly(&[])), "[  ]".parse());
    assert_eq!(Err(PolynomialError::MissingCoefficients), "".parse::<Polynomial<i64>>());
    assert_eq!(Err(PolynomialError::MissingCoefficients), "   ".parse::<Polynomial<i64>>());
    assert!(matches!(
        "[1, x, 3]".parse::<Polynomial<i64>>(),
        Err(PolynomialError::InvalidCoefficient { position: 1, .. })
    ));
    assert!(matches!(
        "[1, 2".parse::<Polynomial<i64>>(),
        Err(PolynomialError::InvalidCoefficient { position: 0, .. })
    ));
    assert!(matches!(
        "1,,2".parse::<Polynomial<i64>>(),
        Err(PolynomialError::InvalidCoefficient { position: 1, .. })
    ));
    assert_eq!(
        Ok(Polynomial::from(vec![BigInt::from(u128::MAX), BigInt::from(0)])),
        format!("[{}, 0]", u128::MAX).parse()
    );
}

#[test]
fn test_serialize() {
    let f = poly(&[1, -2, 3, 0]);
    let json = serde_json::to_string(&f).unwrap();
    assert_eq!("[1,-2,3,0]", json);
    assert_eq!(f, serde_json::from_str::<Polynomial<i64>>(&json).unwrap());
    assert_eq!(poly(&[]), serde_json::from_str::<Polynomial<i64>>("[]").unwrap());

    let nested = Polynomial::from(vec![poly(&[1]), poly(&[])]);
    let json = serde_json::to_string(&nested).unwrap();
    assert_eq!("[[1],[]]", json);
    assert_eq!(nested, serde_json::from_str::<Polynomial<Polynomial<i64>>>(&json).unwrap());
}

#[test]
fn test_serialization() {
    super::generic_tests::test_serialization([poly(&[]), poly(&[5, -7]), poly(&[0, 0, 1])].into_iter());
    super::generic_tests::test_serialization([Polynomial::from(vec![BigInt::from(u128::MAX) * 7, BigInt::from(-1)])].into_iter());
}

#[cfg(feature = "parallel")]
#[test]
fn test_par_times() {
    let ZZ = StaticRing::<i64>::RING;
    let mut rng = oorandom::Rand64::new(3);
    for _ in 0..50 {
        let f = random_poly(&mut rng, 30);
        let g = random_poly(&mut rng, 30);
        assert_eq!(f.times(&g, &ZZ), f.par_times(&g, &ZZ));
    }
    assert_eq!(vec![4, 13, 28, 27, 18], poly(&[1, 2, 3]).par_times(&poly(&[4, 5, 6]), &ZZ).coefficients());
}

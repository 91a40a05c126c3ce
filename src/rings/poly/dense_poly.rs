use std::fmt::Display;

use tracing::trace_span;

use crate::ring::*;
use super::polynomial::Polynomial;

///
/// The univariate polynomial ring `R[X]` over a base ring `R`, with elements
/// being [`Polynomial`]s.
///
/// This is a thin adapter around [`Polynomial::plus()`] and [`Polynomial::times()`]
/// that exposes them as [`Ring`], always passing the stored base ring. In particular,
/// this allows building polynomial rings over polynomial rings, and running generic
/// ring algorithms (like [`Ring::pow()`]) on polynomials.
///
/// The base ring can be stored by value, by reference, or via a shared pointer,
/// since all of those implement [`Ring`].
///
/// # Example
/// ```
/// # use poly_ring::ring::*;
/// # use poly_ring::primitive_int::*;
/// # use poly_ring::rings::poly::*;
/// let ZZ = StaticRing::<i64>::RING;
/// let P = PolynomialRing::instance(ZZ);
/// let x_plus_1 = P.sum(&P.indeterminate(), &P.identity());
/// let binomial_coefficients = P.pow(&x_plus_1, 4);
/// assert_eq!(vec![1, 4, 6, 4, 1], binomial_coefficients.coefficients());
/// assert_eq!("1 + 4X + 6X^2 + 4X^3 + 1X^4", format!("{}", P.format(&binomial_coefficients)));
/// ```
/// Polynomials over polynomials work the same way.
/// ```
/// # use poly_ring::ring::*;
/// # use poly_ring::primitive_int::*;
/// # use poly_ring::rings::poly::*;
/// let ZZ = StaticRing::<i64>::RING;
/// let P = PolynomialRing::new(ZZ, "X");
/// let PP = PolynomialRing::new(&P, "Y");
/// let y = PP.indeterminate();
/// let x = PP.from_base(P.indeterminate());
/// let x_times_y = PP.product(&x, &y);
/// assert_eq!("[] + [0, 1]Y", format!("{}", PP.format(&x_times_y)));
/// ```
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolynomialRing<R: Ring> {
    base_ring: R,
    unknown_name: &'static str
}

impl<R: Ring> PolynomialRing<R> {

    ///
    /// Creates the polynomial ring over the given ring, with the indeterminate being
    /// displayed as `X`.
    ///
    pub fn instance(base_ring: R) -> Self {
        Self::new(base_ring, "X")
    }

    pub fn new(base_ring: R, unknown_name: &'static str) -> Self {
        PolynomialRing { base_ring, unknown_name }
    }

    pub fn base_ring<'a>(&'a self) -> &'a R {
        &self.base_ring
    }

    pub fn unknown_name(&self) -> &'static str {
        self.unknown_name
    }

    ///
    /// Returns the polynomial `X`, i.e. `[0, 1]`.
    ///
    pub fn indeterminate(&self) -> Polynomial<R::Element> {
        Polynomial::from(vec![self.base_ring.zero(), self.base_ring.identity()])
    }

    ///
    /// Returns the constant polynomial `[c]`.
    ///
    pub fn from_base(&self, c: R::Element) -> Polynomial<R::Element> {
        Polynomial::from(vec![c])
    }

    ///
    /// Evaluates the polynomial at the given value of the base ring, using Horner's rule.
    /// The empty polynomial evaluates to `zero()`.
    ///
    pub fn evaluate(&self, f: &Polynomial<R::Element>, value: &R::Element) -> R::Element {
        let mut coefficients = f.iter().rev();
        let mut current = match coefficients.next() {
            Some(lc) => lc.clone(),
            None => return self.base_ring.zero()
        };
        for c in coefficients {
            current = self.base_ring.sum(&self.base_ring.product(&current, value), c);
        }
        return current;
    }

    ///
    /// Returns an object that displays the given polynomial in the form `c0 + c1X + c2X^2`,
    /// using the name of the indeterminate of this ring. All coefficients are printed,
    /// including zero ones. The empty polynomial is printed as `0`.
    ///
    pub fn format<'a>(&'a self, f: &'a Polynomial<R::Element>) -> PolynomialDisplayWrapper<'a, R::Element> {
        PolynomialDisplayWrapper { poly: f, unknown_name: self.unknown_name }
    }
}

impl<R: Ring> Ring for PolynomialRing<R> {

    type Element = Polynomial<R::Element>;

    fn zero(&self) -> Self::Element {
        Polynomial::from(Vec::new())
    }

    fn identity(&self) -> Self::Element {
        Polynomial::from(vec![self.base_ring.identity()])
    }

    fn sum(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let _span = trace_span!("dense_poly_sum", unknown = self.unknown_name).entered();
        lhs.plus(rhs, &self.base_ring)
    }

    fn product(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let _span = trace_span!("dense_poly_product", unknown = self.unknown_name).entered();
        lhs.times(rhs, &self.base_ring)
    }
}

pub struct PolynomialDisplayWrapper<'a, T> {
    poly: &'a Polynomial<T>,
    unknown_name: &'a str
}

impl<'a, T: Display> Display for PolynomialDisplayWrapper<'a, T> {

    fn fmt(&self, out: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.poly.is_empty() {
            return write!(out, "0");
        }
        for (i, c) in self.poly.iter().enumerate() {
            if i > 0 {
                write!(out, " + ")?;
            }
            write!(out, "{}", c)?;
            if i == 1 {
                write!(out, "{}", self.unknown_name)?;
            } else if i > 1 {
                write!(out, "{}^{}", self.unknown_name, i)?;
            }
        }
        return Ok(());
    }
}

#[cfg(test)]
use std::rc::Rc;
#[cfg(test)]
use crate::primitive_int::StaticRing;
#[cfg(test)]
use crate::rings::bigint::BigIntRing;
#[cfg(test)]
use num_bigint::BigInt;

#[cfg(test)]
fn edge_case_elements() -> impl Iterator<Item = Polynomial<i64>> {
    [
        vec![],
        vec![0],
        vec![1],
        vec![-1],
        vec![0, 1],
        vec![1, 1],
        vec![-1, 1],
        vec![1, -1],
        vec![2, 0, -3]
    ].into_iter().map(Polynomial::from)
}

#[test]
fn test_ring_axioms() {
    let P = PolynomialRing::instance(StaticRing::<i64>::RING);
    crate::ring::generic_tests::test_ring_axioms(&P, edge_case_elements());
    crate::ring::generic_tests::test_product_commutative(&P, edge_case_elements());
}

#[test]
fn test_poly_ring_axioms() {
    super::generic_tests::test_poly_ring_axioms(PolynomialRing::instance(StaticRing::<i64>::RING), [-2, -1, 0, 1, 3].into_iter());
}

#[test]
fn test_zero_and_identity() {
    let P = PolynomialRing::instance(StaticRing::<i64>::RING);
    assert!(P.zero().is_empty());
    assert_eq!(vec![1], P.identity().coefficients());
    assert_eq!(vec![0, 1], P.indeterminate().coefficients());
    assert_eq!(vec![7], P.from_base(7).coefficients());
}

#[test]
fn test_forwarding() {
    let ZZ = StaticRing::<i64>::RING;
    let P = PolynomialRing::instance(ZZ);
    for f in edge_case_elements() {
        for g in edge_case_elements() {
            assert_eq!(f.plus(&g, &ZZ), P.sum(&f, &g));
            assert_eq!(f.times(&g, &ZZ), P.product(&f, &g));
        }
    }
    let f = Polynomial::from(vec![1, 2, 3]);
    let g = Polynomial::from(vec![4, 5, 6]);
    assert_eq!(vec![4, 13, 28, 27, 18], P.product(&f, &g).coefficients());
    assert_eq!(vec![5, 7, 9], P.sum(&f, &g).coefficients());
}

#[test]
fn test_shared_base_ring() {
    let ZZ = Rc::new(StaticRing::<i64>::RING);
    let P1 = PolynomialRing::instance(ZZ.clone());
    let P2 = PolynomialRing::instance(&*ZZ);
    let f = Polynomial::from(vec![1, -2, 3]);
    let g = Polynomial::from(vec![-4, 5, -6]);
    assert_eq!(vec![-4, 13, -28, 27, -18], P1.product(&f, &g).coefficients());
    assert_eq!(P1.product(&f, &g), P2.product(&f, &g));
}

#[test]
fn test_nested_poly_ring() {
    let ZZ = StaticRing::<i64>::RING;
    let P = PolynomialRing::new(ZZ, "X");
    let PP = PolynomialRing::new(P, "Y");

    let f = Polynomial::from(vec![Polynomial::from(vec![1, 1]), Polynomial::from(vec![2])]);
    let g = Polynomial::from(vec![Polynomial::from(vec![1]), Polynomial::from(vec![0, 1])]);
    let expected = Polynomial::from(vec![
        Polynomial::from(vec![1, 1]),
        Polynomial::from(vec![2, 1, 1]),
        Polynomial::from(vec![0, 2])
    ]);
    assert_eq!(expected, PP.product(&f, &g));
    assert_eq!(expected, PP.product(&g, &f));
    assert_eq!(Polynomial::from(vec![Polynomial::from(vec![2, 1]), Polynomial::from(vec![2, 1])]), PP.sum(&f, &g));

    assert!(PP.zero().is_empty());
    assert_eq!(Polynomial::from(vec![Polynomial::from(vec![1])]), PP.identity());
    assert_eq!(f, PP.product(&f, &PP.identity()));
    assert_eq!(f, PP.sum(&f, &PP.zero()));
}

#[test]
fn test_nested_ring_axioms() {
    let PP = PolynomialRing::new(PolynomialRing::new(StaticRing::<i64>::RING, "X"), "Y");
    let elements = [
        vec![],
        vec![vec![]],
        vec![vec![1]],
        vec![vec![0, 1], vec![-1]],
        vec![vec![], vec![2, 1]]
    ];
    let elements = || elements.clone().into_iter().map(|f| f.into_iter().map(Polynomial::from).collect::<Polynomial<_>>());
    crate::ring::generic_tests::test_ring_axioms(&PP, elements());
    crate::ring::generic_tests::test_product_commutative(&PP, elements());
}

#[test]
fn test_bigint_poly_ring() {
    let P = PolynomialRing::instance(BigIntRing::RING);
    let x_plus_1 = P.sum(&P.indeterminate(), &P.identity());
    let f = P.pow(&x_plus_1, 100);
    assert_eq!(101, f.len());
    assert_eq!(&BigInt::from(1), f.coefficient_at(0).unwrap());
    assert_eq!(&BigInt::from(100891344545564193334812497256u128), f.coefficient_at(50).unwrap());
    assert_eq!(BigInt::from(2).pow(100), P.evaluate(&f, &BigInt::from(1)));
}

#[test]
fn test_evaluate() {
    let P = PolynomialRing::instance(StaticRing::<i64>::RING);
    assert_eq!(0, P.evaluate(&P.zero(), &5));
    assert_eq!(7, P.evaluate(&P.from_base(7), &5));
    assert_eq!(1 + 2 * 5 + 3 * 25, P.evaluate(&Polynomial::from(vec![1, 2, 3]), &5));
    assert_eq!(-4 - 5 * 2 - 6 * 4, P.evaluate(&Polynomial::from(vec![-4, -5, -6, 0]), &2));
}

#[test]
fn test_format() {
    let P = PolynomialRing::instance(StaticRing::<i64>::RING);
    assert_eq!("0", format!("{}", P.format(&P.zero())));
    assert_eq!("1", format!("{}", P.format(&P.identity())));
    assert_eq!("4 + 13X + 28X^2 + 27X^3 + 18X^4", format!("{}", P.format(&Polynomial::from(vec![4, 13, 28, 27, 18]))));
    assert_eq!("0 + 1X + 0X^2", format!("{}", P.format(&Polynomial::from(vec![0, 1, 0]))));
    let Q = PolynomialRing::new(StaticRing::<i64>::RING, "T");
    assert_eq!("-1 + 2T", format!("{}", Q.format(&Polynomial::from(vec![-1, 2]))));
}

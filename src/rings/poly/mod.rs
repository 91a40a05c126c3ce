///
/// Contains [`polynomial::Polynomial`], the value type representing a polynomial
/// by the dense sequence of its coefficients.
///
pub mod polynomial;
///
/// Contains [`dense_poly::PolynomialRing`], which turns a ring `R` into the ring `R[X]`.
///
pub mod dense_poly;

pub use polynomial::{Polynomial, PolynomialError};
pub use dense_poly::{PolynomialRing, PolynomialDisplayWrapper};

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use crate::ring::*;
    use super::*;

    ///
    /// Checks that the given polynomial ring behaves like `R[X]` on polynomials of
    /// degree at most one, built from the given base ring elements.
    ///
    #[stability::unstable(feature = "enable")]
    pub fn test_poly_ring_axioms<R: Ring, I: Iterator<Item = R::Element>>(ring: PolynomialRing<R>, interesting_base_ring_elements: I)
        where R::Element: PartialEq + std::fmt::Debug
    {
        let base_ring = ring.base_ring();
        let x = ring.indeterminate();
        let elements = interesting_base_ring_elements.collect::<Vec<_>>();

        // a + bX has coefficients [a, b]
        for a in &elements {
            for b in &elements {
                let a_bx = ring.sum(&ring.from_base(a.clone()), &ring.product(&ring.from_base(b.clone()), &x));
                assert_eq!(vec![a.clone(), b.clone()], a_bx.coefficients());
            }
        }

        // convoluted multiplication
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    for d in &elements {
                        let a_bx = Polynomial::from(vec![a.clone(), b.clone()]);
                        let c_dx = Polynomial::from(vec![c.clone(), d.clone()]);
                        let expected = vec![
                            base_ring.product(a, c),
                            base_ring.sum(&base_ring.product(a, d), &base_ring.product(b, c)),
                            base_ring.product(b, d)
                        ];
                        assert_eq!(expected, ring.product(&a_bx, &c_dx).coefficients());
                    }
                }
            }
        }

        // evaluation is a ring homomorphism
        for a in &elements {
            for b in &elements {
                let f = Polynomial::from(vec![a.clone(), b.clone()]);
                let g = Polynomial::from(vec![b.clone(), a.clone(), b.clone()]);
                for v in &elements {
                    assert_eq!(
                        base_ring.product(&ring.evaluate(&f, v), &ring.evaluate(&g, v)),
                        ring.evaluate(&ring.product(&f, &g), v)
                    );
                    assert_eq!(
                        base_ring.sum(&ring.evaluate(&f, v), &ring.evaluate(&g, v)),
                        ring.evaluate(&ring.sum(&f, &g), v)
                    );
                }
            }
        }

        // the zero polynomial is absorbing
        for a in &elements {
            let f = Polynomial::from(vec![a.clone(), a.clone()]);
            assert!(ring.product(&f, &ring.zero()).is_empty());
            assert!(ring.product(&ring.zero(), &f).is_empty());
        }
    }

    ///
    /// Checks that serializing and deserializing the given polynomials yields the
    /// same polynomials, both in human-readable and in binary formats.
    ///
    #[stability::unstable(feature = "enable")]
    pub fn test_serialization<T, I: Iterator<Item = Polynomial<T>>>(edge_case_elements: I)
        where T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug
    {
        use serde::{Deserialize, Serialize};

        let edge_case_elements = edge_case_elements.collect::<Vec<_>>();
        for human_readable in [true, false] {
            for f in &edge_case_elements {
                let serializer = serde_assert::Serializer::builder().is_human_readable(human_readable).build();
                let tokens = f.serialize(&serializer).unwrap();
                let mut deserializer = serde_assert::Deserializer::builder(tokens).is_human_readable(human_readable).build();
                let result = Polynomial::<T>::deserialize(&mut deserializer).unwrap();
                assert_eq!(f, &result);
            }
        }
    }
}

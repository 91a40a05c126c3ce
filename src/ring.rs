use std::rc::Rc;
use std::sync::Arc;

///
/// Basic trait for objects that have a ring structure.
///
/// A ring is an object on its own, and its elements are values of the
/// associated type [`Ring::Element`]. This allows rings to carry parameters
/// (e.g. a polynomial ring stores its base ring), while elements stay plain
/// values. Implementors only have to provide the four basic operations;
/// everything else is derived from them.
///
/// The ring axioms are assumed, but never checked, i.e. it is the responsibility
/// of the implementor that
///  - `(Element, sum, zero)` is a commutative group
///  - `product` is associative with neutral element `identity`
///  - `product` distributes over `sum`
///
/// Overflow behavior and similar concerns are completely up to the implementation.
///
/// # Example
/// ```
/// # use poly_ring::ring::*;
/// struct Mod7;
///
/// impl Ring for Mod7 {
///     type Element = u8;
///
///     fn zero(&self) -> u8 { 0 }
///     fn identity(&self) -> u8 { 1 }
///     fn sum(&self, lhs: &u8, rhs: &u8) -> u8 { (lhs + rhs) % 7 }
///     fn product(&self, lhs: &u8, rhs: &u8) -> u8 { (lhs * rhs) % 7 }
/// }
///
/// assert_eq!(1, Mod7.pow(&3, 6));
/// assert_eq!(3, Mod7.sum_all([4, 5, 1].iter()));
/// ```
///
pub trait Ring {

    type Element: Clone;

    ///
    /// Returns the additive identity of this ring.
    ///
    fn zero(&self) -> Self::Element;

    ///
    /// Returns the multiplicative identity of this ring.
    ///
    fn identity(&self) -> Self::Element;

    fn sum(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element;

    fn product(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element;

    ///
    /// Computes the sum of all given elements, from left to right.
    /// The empty sum is `zero()`.
    ///
    fn sum_all<'a, I>(&self, els: I) -> Self::Element
        where I: Iterator<Item = &'a Self::Element>,
            Self::Element: 'a,
            Self: Sized
    {
        els.fold(self.zero(), |current, x| self.sum(&current, x))
    }

    ///
    /// Computes `x^power` using square-and-multiply. The zero-th power is
    /// `identity()`, also for `x = zero()`.
    ///
    fn pow(&self, x: &Self::Element, power: usize) -> Self::Element {
        if power == 0 {
            return self.identity();
        }
        let mut result = self.identity();
        for i in (0..(usize::BITS - power.leading_zeros())).rev() {
            result = self.product(&result, &result);
            if (power >> i) & 1 == 1 {
                result = self.product(&result, x);
            }
        }
        return result;
    }
}

macro_rules! impl_ring_for_pointer {
    ($($ptr:ty),*) => {
        $(
            impl<R: Ring + ?Sized> Ring for $ptr {

                type Element = R::Element;

                fn zero(&self) -> Self::Element {
                    (**self).zero()
                }

                fn identity(&self) -> Self::Element {
                    (**self).identity()
                }

                fn sum(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
                    (**self).sum(lhs, rhs)
                }

                fn product(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
                    (**self).product(lhs, rhs)
                }
            }
        )*
    };
}

impl<'a, R: Ring + ?Sized> Ring for &'a R {

    type Element = R::Element;

    fn zero(&self) -> Self::Element {
        (**self).zero()
    }

    fn identity(&self) -> Self::Element {
        (**self).identity()
    }

    fn sum(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        (**self).sum(lhs, rhs)
    }

    fn product(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        (**self).product(lhs, rhs)
    }
}

impl_ring_for_pointer!{ Box<R>, Rc<R>, Arc<R> }

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    ///
    /// Checks the ring axioms on all combinations of the given elements.
    /// Equality is structural, i.e. uses `PartialEq` of the elements.
    ///
    #[stability::unstable(feature = "enable")]
    pub fn test_ring_axioms<R: Ring, I: Iterator<Item = R::Element>>(ring: R, edge_case_elements: I)
        where R::Element: PartialEq + std::fmt::Debug
    {
        let elements = edge_case_elements.collect::<Vec<_>>();
        let zero = ring.zero();
        let one = ring.identity();

        // check identity elements
        for a in &elements {
            assert_eq!(a, &ring.sum(a, &zero));
            assert_eq!(a, &ring.sum(&zero, a));
            assert_eq!(a, &ring.product(a, &one));
            assert_eq!(a, &ring.product(&one, a));
        }

        // check commutativity
        for a in &elements {
            for b in &elements {
                assert_eq!(ring.sum(a, b), ring.sum(b, a));
            }
        }

        // check associativity
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    assert_eq!(
                        ring.sum(a, &ring.sum(b, c)),
                        ring.sum(&ring.sum(a, b), c)
                    );
                    assert_eq!(
                        ring.product(a, &ring.product(b, c)),
                        ring.product(&ring.product(a, b), c)
                    );
                }
            }
        }

        // check distributivity
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    assert_eq!(
                        ring.product(a, &ring.sum(b, c)),
                        ring.sum(&ring.product(a, b), &ring.product(a, c))
                    );
                    assert_eq!(
                        ring.product(&ring.sum(a, b), c),
                        ring.sum(&ring.product(a, c), &ring.product(b, c))
                    );
                }
            }
        }
    }

    ///
    /// Checks that multiplication is commutative on all pairs of the given elements.
    ///
    #[stability::unstable(feature = "enable")]
    pub fn test_product_commutative<R: Ring, I: Iterator<Item = R::Element>>(ring: R, edge_case_elements: I)
        where R::Element: PartialEq + std::fmt::Debug
    {
        let elements = edge_case_elements.collect::<Vec<_>>();
        for a in &elements {
            for b in &elements {
                assert_eq!(ring.product(a, b), ring.product(b, a));
            }
        }
    }
}

#[cfg(test)]
use crate::primitive_int::StaticRing;

#[test]
fn test_pow() {
    let ZZ = StaticRing::<i64>::RING;
    assert_eq!(1, ZZ.pow(&0, 0));
    assert_eq!(1, ZZ.pow(&5, 0));
    assert_eq!(5, ZZ.pow(&5, 1));
    assert_eq!(1024, ZZ.pow(&2, 10));
    assert_eq!(-27, ZZ.pow(&-3, 3));
    assert_eq!(0, ZZ.pow(&0, 7));
}

#[test]
fn test_sum_all() {
    let ZZ = StaticRing::<i32>::RING;
    assert_eq!(0, ZZ.sum_all([].iter()));
    assert_eq!(15, ZZ.sum_all([1, 2, 3, 4, 5].iter()));
}

#[test]
fn test_internal_wrappings_dont_matter() {
    let ZZ = StaticRing::<i32>::RING;
    let by_ref = &ZZ;
    let boxed: Box<dyn Ring<Element = i32>> = Box::new(ZZ);
    let shared = Rc::new(ZZ);
    let atomic_shared = Arc::new(ZZ);

    assert_eq!(ZZ.product(&6, &7), by_ref.product(&6, &7));
    assert_eq!(ZZ.product(&6, &7), boxed.product(&6, &7));
    assert_eq!(ZZ.sum(&6, &7), shared.sum(&6, &7));
    assert_eq!(ZZ.sum(&6, &7), atomic_shared.sum(&6, &7));
    assert_eq!(1, boxed.identity());
    assert_eq!(0, shared.zero());
}

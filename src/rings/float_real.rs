use crate::ring::*;

///
/// An approximate implementation of the real numbers `R`, using 64-bit floating
/// point numbers. Clearly, the ring axioms only hold up to rounding errors.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Real64;

impl Real64 {

    pub const RING: Real64 = Real64;

    pub fn is_absolute_approx_eq(&self, lhs: f64, rhs: f64, absolute_threshold: f64) -> bool {
        (lhs - rhs).abs() < absolute_threshold
    }

    pub fn is_relative_approx_eq(&self, lhs: f64, rhs: f64, relative_threshold: f64) -> bool {
        self.is_absolute_approx_eq(lhs, rhs, lhs.abs() * relative_threshold)
    }

    ///
    /// Checks whether `lhs` and `rhs` are equal up to `precision` multiples of
    /// the machine epsilon. The comparison is relative, unless `lhs` is (close to)
    /// zero, in which case `rhs` must be close to zero as well. Equal values are
    /// always approximately equal, also for `precision = 0`.
    ///
    pub fn is_approx_eq(&self, lhs: f64, rhs: f64, precision: u64) -> bool {
        if lhs == rhs {
            return true;
        }
        let scaled_precision = precision as f64 * f64::EPSILON;
        if self.is_absolute_approx_eq(lhs, 0., scaled_precision) {
            self.is_absolute_approx_eq(rhs, 0., scaled_precision)
        } else {
            self.is_relative_approx_eq(lhs, rhs, scaled_precision)
        }
    }
}

impl Ring for Real64 {

    type Element = f64;

    fn zero(&self) -> f64 {
        0.
    }

    fn identity(&self) -> f64 {
        1.
    }

    fn sum(&self, lhs: &f64, rhs: &f64) -> f64 {
        lhs + rhs
    }

    fn product(&self, lhs: &f64, rhs: &f64) -> f64 {
        lhs * rhs
    }
}

#[test]
fn test_is_approx_eq() {
    let RR = Real64::RING;
    assert!(RR.is_approx_eq(0.1 + 0.2, 0.3, 4));
    assert!(!RR.is_approx_eq(0.1, 0.3, 4));
    assert!(RR.is_approx_eq(0., 1e-17, 100));
    assert!(!RR.is_approx_eq(0., 1e-3, 100));
}

#[test]
fn test_is_approx_eq_zero_precision() {
    let RR = Real64::RING;
    assert!(RR.is_approx_eq(1., 1., 0));
    assert!(RR.is_approx_eq(0., 0., 0));
    assert!(RR.is_approx_eq(-2.5, -2.5, 0));
    assert!(!RR.is_approx_eq(1., 1. + f64::EPSILON, 0));
}

#[test]
fn test_ring_operations() {
    let RR = Real64::RING;
    assert_eq!(0., RR.zero());
    assert_eq!(1., RR.identity());
    assert_eq!(3.5, RR.sum(&1.25, &2.25));
    assert_eq!(-2.5, RR.product(&-1.25, &2.));
    assert!(RR.is_approx_eq(RR.pow(&1.1, 10), 2.5937424601, 1000));
}

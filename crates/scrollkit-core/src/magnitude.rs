#![forbid(unsafe_code)]

//! Domain magnitudes.
//!
//! A [`Magnitude`] is an ordered, non-negative integer quantity used for both
//! the size of a scroller's domain and positions inside it. Two
//! implementations are provided:
//!
//! - [`Bounded`] (`i64`): the default fast path, valid while a domain stays
//!   within fixed-width range.
//! - [`Unbounded`] (`BigUint`): for domains that can grow without a fixed
//!   horizon, such as an open-ended simulation timeline.
//!
//! Every controller algorithm is written against this trait only, so the two
//! are drop-in substitutable and agree on all results for domains that fit
//! in both.

use std::fmt;

pub use num_bigint::BigUint;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

/// Fixed-width magnitude.
pub type Bounded = i64;

/// Arbitrary-precision magnitude.
pub type Unbounded = BigUint;

/// Significant bits kept when dividing two arbitrary-precision values.
const RATIO_PRECISION_BITS: u64 = 64;

/// Ordered, subtractable, divisible non-negative integer quantity.
///
/// Subtraction saturates at zero and never yields a negative value.
/// Implementations that can hold negative numbers (such as `i64`) treat
/// anything at or below zero as "empty" for [`Magnitude::is_positive`].
pub trait Magnitude: Clone + Ord + fmt::Debug + fmt::Display {
    /// The additive identity.
    fn zero() -> Self;

    /// The unit step.
    fn one() -> Self;

    /// Convert from an unsigned machine integer.
    fn from_u64(value: u64) -> Self;

    /// Convert to an unsigned machine integer, if representable.
    fn to_u64(&self) -> Option<u64>;

    /// Integral part of `value`, clamped to the representable non-negative
    /// range. Negative values map to zero.
    ///
    /// Returns `None` for NaN and infinities.
    fn from_f64(value: f64) -> Option<Self>;

    /// Nearest real value. Saturates to `f64::INFINITY` when out of range.
    fn to_f64(&self) -> f64;

    /// `self + rhs`.
    fn plus(&self, rhs: &Self) -> Self;

    /// `self - rhs`, saturating at zero.
    fn minus(&self, rhs: &Self) -> Self;

    /// Real-valued quotient `self / denominator`.
    ///
    /// Returns `None` when the denominator is not positive.
    fn ratio(&self, denominator: &Self) -> Option<f64>;

    /// Whether the value equals zero.
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Whether the value is strictly greater than zero.
    #[inline]
    fn is_positive(&self) -> bool {
        *self > Self::zero()
    }

    /// Shift by a signed delta, saturating at zero on the way down.
    fn offset(&self, delta: i64) -> Self {
        let step = Self::from_u64(delta.unsigned_abs());
        if delta >= 0 {
            self.plus(&step)
        } else {
            self.minus(&step)
        }
    }

    /// Clamp into `[0, size - 1]`.
    ///
    /// An empty domain has no valid index; the result is then the sentinel
    /// zero.
    fn clamp_index(&self, size: &Self) -> Self {
        let last = size.minus(&Self::one());
        self.clone().clamp(Self::zero(), last)
    }
}

impl Magnitude for i64 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn from_u64(value: u64) -> Self {
        i64::try_from(value).unwrap_or(i64::MAX)
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        u64::try_from(*self).ok()
    }

    fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // `as` saturates at the integer bounds.
        Some(value.max(0.0).trunc() as i64)
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        *self as f64
    }

    #[inline]
    fn plus(&self, rhs: &Self) -> Self {
        self.saturating_add(*rhs)
    }

    #[inline]
    fn minus(&self, rhs: &Self) -> Self {
        self.saturating_sub(*rhs).max(0)
    }

    fn ratio(&self, denominator: &Self) -> Option<f64> {
        if *denominator <= 0 {
            return None;
        }
        Some(*self as f64 / *denominator as f64)
    }
}

impl Magnitude for BigUint {
    #[inline]
    fn zero() -> Self {
        <BigUint as Zero>::zero()
    }

    #[inline]
    fn one() -> Self {
        <BigUint as One>::one()
    }

    #[inline]
    fn from_u64(value: u64) -> Self {
        BigUint::from(value)
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        <BigUint as ToPrimitive>::to_u64(self)
    }

    fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        if value < 1.0 {
            return Some(<BigUint as Zero>::zero());
        }
        <BigUint as FromPrimitive>::from_f64(value.trunc())
    }

    fn to_f64(&self) -> f64 {
        <BigUint as ToPrimitive>::to_f64(self).unwrap_or(f64::INFINITY)
    }

    #[inline]
    fn plus(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn minus(&self, rhs: &Self) -> Self {
        if self <= rhs {
            <BigUint as Zero>::zero()
        } else {
            self - rhs
        }
    }

    fn ratio(&self, denominator: &Self) -> Option<f64> {
        if <BigUint as Zero>::is_zero(denominator) {
            return None;
        }
        // Drop low bits shared by both operands so neither side overflows
        // `f64` while the leading bits of the quotient survive.
        let shift = self
            .bits()
            .max(denominator.bits())
            .saturating_sub(RATIO_PRECISION_BITS);
        let numerator = Magnitude::to_f64(&(self >> shift));
        let denominator = Magnitude::to_f64(&(denominator >> shift));
        Some(numerator / denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(value: u64) -> BigUint {
        BigUint::from(value)
    }

    fn big_one() -> BigUint {
        <BigUint as Magnitude>::one()
    }

    #[test]
    fn bounded_minus_saturates_at_zero() {
        assert_eq!(3i64.minus(&5), 0);
        assert_eq!(5i64.minus(&3), 2);
        assert_eq!(i64::MIN.minus(&1), 0);
    }

    #[test]
    fn unbounded_minus_saturates_at_zero() {
        assert_eq!(big(3).minus(&big(5)), big(0));
        assert_eq!(big(5).minus(&big(3)), big(2));
    }

    #[test]
    fn bounded_plus_saturates_at_max() {
        assert_eq!(i64::MAX.plus(&1), i64::MAX);
    }

    #[test]
    fn offset_moves_both_ways() {
        assert_eq!(10i64.offset(5), 15);
        assert_eq!(10i64.offset(-4), 6);
        assert_eq!(10i64.offset(-40), 0);
        assert_eq!(big(10).offset(-40), big(0));
        assert_eq!(big(10).offset(i64::MIN), big(0));
    }

    #[test]
    fn clamp_index_respects_domain() {
        assert_eq!(7i64.clamp_index(&5), 4);
        assert_eq!((-3i64).clamp_index(&5), 0);
        assert_eq!(2i64.clamp_index(&5), 2);
        assert_eq!(big(7).clamp_index(&big(5)), big(4));
    }

    #[test]
    fn clamp_index_of_empty_domain_is_sentinel_zero() {
        assert_eq!(7i64.clamp_index(&0), 0);
        assert_eq!(big(7).clamp_index(&big(0)), big(0));
    }

    #[test]
    fn ratio_rejects_zero_denominator() {
        assert_eq!(5i64.ratio(&0), None);
        assert_eq!(5i64.ratio(&-2), None);
        assert_eq!(big(5).ratio(&big(0)), None);
    }

    #[test]
    fn ratio_matches_between_widths() {
        for (n, d) in [(0u64, 1u64), (1, 3), (50, 100), (99, 100), (12_345, 67_890)] {
            let bounded = (n as i64).ratio(&(d as i64)).unwrap();
            let unbounded = big(n).ratio(&big(d)).unwrap();
            assert_eq!(bounded, unbounded, "{n}/{d}");
        }
    }

    #[test]
    fn unbounded_ratio_survives_huge_operands() {
        let denominator = big_one() << 5000u32;
        let numerator = &denominator >> 1u32;
        let ratio = numerator.ratio(&denominator).unwrap();
        assert!((ratio - 0.5).abs() < 1e-12);
        assert!(Magnitude::to_f64(&denominator).is_infinite());
    }

    #[test]
    fn from_f64_truncates_and_clamps() {
        assert_eq!(<i64 as Magnitude>::from_f64(3.9), Some(3));
        assert_eq!(<i64 as Magnitude>::from_f64(-2.5), Some(0));
        assert_eq!(<i64 as Magnitude>::from_f64(f64::NAN), None);
        assert_eq!(<i64 as Magnitude>::from_f64(f64::INFINITY), None);
        assert_eq!(<i64 as Magnitude>::from_f64(1e30), Some(i64::MAX));
        assert_eq!(<BigUint as Magnitude>::from_f64(3.9), Some(big(3)));
        assert_eq!(<BigUint as Magnitude>::from_f64(-2.5), Some(big(0)));
        assert_eq!(<BigUint as Magnitude>::from_f64(f64::NAN), None);
    }

    #[test]
    fn to_u64_is_checked() {
        assert_eq!(Magnitude::to_u64(&-1i64), None);
        assert_eq!(Magnitude::to_u64(&42i64), Some(42));
        assert_eq!(Magnitude::to_u64(&(big_one() << 70u32)), None);
        assert_eq!(Magnitude::to_u64(&big(42)), Some(42));
    }

    #[test]
    fn is_positive_treats_negative_as_empty() {
        assert!(!0i64.is_positive());
        assert!(!(-4i64).is_positive());
        assert!(1i64.is_positive());
        assert!(!big(0).is_positive());
        assert!(big(1).is_positive());
    }

    #[test]
    fn is_zero_matches_zero() {
        assert!(Magnitude::is_zero(&0i64));
        assert!(!Magnitude::is_zero(&3i64));
        assert!(Magnitude::is_zero(&big(0)));
        assert!(!Magnitude::is_zero(&big(3)));
    }
}

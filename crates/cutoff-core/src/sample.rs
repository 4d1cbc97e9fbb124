//! Floating-point sample types accepted by the filtering path.
//!
//! Filtering runs in the caller's precision: `f32` data is filtered with
//! `f32` arithmetic against coefficients narrowed to `f32`, `f64` data with
//! full double precision. Design itself always runs in `f64`.

use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Mul, Neg, Sub};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A real sample type (`f32` or `f64`).
///
/// This trait is sealed; it cannot be implemented outside this crate.
pub trait Sample:
    sealed::Sealed
    + Copy
    + Debug
    + Display
    + Default
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
{
    /// `true` for `f32`.
    const SINGLE_PRECISION: bool;

    /// Additive identity.
    const ZERO: Self;

    /// Convert from `f64`, rounding to nearest for `f32`.
    fn from_f64(value: f64) -> Self;

    /// Widen to `f64`.
    fn to_f64(self) -> f64;
}

impl Sample for f32 {
    const SINGLE_PRECISION: bool = true;
    const ZERO: Self = 0.0;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Sample for f64 {
    const SINGLE_PRECISION: bool = false;
    const ZERO: Self = 0.0;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_flags() {
        assert!(<f32 as Sample>::SINGLE_PRECISION);
        assert!(!<f64 as Sample>::SINGLE_PRECISION);
    }

    #[test]
    fn f32_rounds_through_single() {
        let x = 0.1_f64;
        let narrowed = <f32 as Sample>::from_f64(x).to_f64();
        assert_ne!(narrowed, x);
        assert!((narrowed - x).abs() < 1e-8);
    }
}

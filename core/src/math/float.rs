//! Floating-point computational types.
//!
//! Most floating-point functions are unavailable in `no_std`. The functions
//! that need them are provided either by `std`, when the `std` feature is
//! enabled, or by the `libm` crate when only the `libm` feature is. If `fp`
//! is enabled on its own, a portable fallback implementation is used.
//! Without `fp`, everything requiring square roots or trigonometry is
//! unavailable.

use crate::math::approx::ApproxEq;
use crate::math::num::Signed;

/// Trait for the floating-point types used as computational types.
///
/// A `Float` is its own computational type.
pub trait Float: Signed<Computational = Self> + ApproxEq {
    /// Returns the absolute value of `self`.
    fn abs(self) -> Self;

    /// Returns `1 / self`.
    #[inline]
    fn recip(self) -> Self {
        Self::ONE / self
    }

    /// Returns the square root of `self`, or NaN if `self` is negative.
    #[cfg(feature = "fp")]
    fn sqrt(self) -> Self;

    /// Returns the arccosine of `self` in radians, in the range [0, π],
    /// or NaN if `self` is outside [-1, 1].
    #[cfg(feature = "fp")]
    fn acos(self) -> Self;
}

macro_rules! impl_float {
    ($t:ident, libm: $sqrt:ident, $acos:ident) => {
        impl Float for $t {
            #[inline]
            fn abs(self) -> Self {
                if self < 0.0 { -self } else { self }
            }

            #[cfg(feature = "std")]
            #[inline]
            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }
            #[cfg(all(feature = "libm", not(feature = "std")))]
            #[inline]
            fn sqrt(self) -> Self {
                libm::$sqrt(self)
            }
            #[cfg(all(feature = "fp", not(any(feature = "std", feature = "libm"))))]
            #[inline]
            fn sqrt(self) -> Self {
                fallback::$t::sqrt(self)
            }

            #[cfg(feature = "std")]
            #[inline]
            fn acos(self) -> Self {
                $t::acos(self)
            }
            #[cfg(all(feature = "libm", not(feature = "std")))]
            #[inline]
            fn acos(self) -> Self {
                libm::$acos(self)
            }
            #[cfg(all(feature = "fp", not(any(feature = "std", feature = "libm"))))]
            #[inline]
            fn acos(self) -> Self {
                fallback::$t::acos(self)
            }
        }
    };
}

impl_float!(f32, libm: sqrtf, acosf);
impl_float!(f64, libm: sqrt, acos);

/// Portable square root and arccosine, used when `fp` is enabled without
/// `std` or `libm`.
#[cfg(any(test, all(feature = "fp", not(any(feature = "std", feature = "libm")))))]
mod fallback {
    macro_rules! impl_fallback {
        ($t:ident, magic: $magic:literal) => {
            pub mod $t {
                use core::$t::consts::{FRAC_PI_2, PI};

                /// Returns the square root of `x`.
                pub fn sqrt(x: $t) -> $t {
                    if x.is_nan() || x < 0.0 {
                        return $t::NAN;
                    }
                    if x == 0.0 || x == $t::INFINITY {
                        return x;
                    }
                    // Halving the exponent bits gives a first guess
                    let g = $t::from_bits((x.to_bits() >> 1) + $magic);
                    // Newton's method; after one step it decreases monotonically
                    let mut y = 0.5 * (g + x / g);
                    loop {
                        let next = 0.5 * (y + x / y);
                        if next >= y {
                            return y;
                        }
                        y = next;
                    }
                }

                /// Returns the arcsine of `x` for |x| ≤ 0.5 by its Taylor series.
                fn asin_small(x: $t) -> $t {
                    let x2 = x * x;
                    let (mut sum, mut term) = (x, x);
                    let mut k: $t = 0.0;
                    loop {
                        term *= x2 * (2.0 * k + 1.0) * (2.0 * k + 1.0)
                            / ((2.0 * k + 2.0) * (2.0 * k + 3.0));
                        let next = sum + term;
                        if next == sum {
                            return sum;
                        }
                        sum = next;
                        k += 1.0;
                    }
                }

                /// Returns the arccosine of `x` in radians.
                pub fn acos(x: $t) -> $t {
                    if x.is_nan() || !(-1.0..=1.0).contains(&x) {
                        $t::NAN
                    } else if x < -0.5 {
                        PI - acos(-x)
                    } else if x > 0.5 {
                        2.0 * asin_small(sqrt(0.5 * (1.0 - x)))
                    } else {
                        FRAC_PI_2 - asin_small(x)
                    }
                }
            }
        };
    }

    impl_fallback!(f32, magic: 0x1fc0_0000);
    impl_fallback!(f64, magic: 0x1ff8_0000_0000_0000);
}

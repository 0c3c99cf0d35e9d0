//! Testing and asserting approximate equality.

use core::iter::zip;

use crate::math::float::Float;
use crate::math::num::{Components, Computational, Scalar};

/// Trait for testing approximate equality.
///
/// Floating-point types are only an approximation of real numbers due to their
/// finite precision. The presence of rounding errors means that two floats may
/// not compare equal even if their counterparts in ℝ would. Even such a simple
/// expression as `0.1 + 0.2 == 0.3` will evaluate to false due to precision
/// issues.
///
/// Approximate equality is a more robust way to compare floating-point values
/// than strict equality. Two values are considered approximately equal if their
/// absolute difference is less than some small value, "epsilon". The choice of
/// the epsilon value is not an exact science, and depends on how much error
/// has accrued in the computation of the values.
///
/// Moreover, due to the nature of floating point, a naive comparison against
/// a fixed value does not work well. Rather, the epsilon should be *relative*
/// to the magnitude of the values being compared. For values whose magnitude
/// is less than one, the epsilon is used as an absolute tolerance instead.
///
/// Vectors and matrices compare their components pairwise in the
/// [computational type][Scalar::Computational] of their scalar, so integer
/// vectors can be compared approximately too.
pub trait ApproxEq<Other: ?Sized = Self, Epsilon = Self> {
    /// Returns whether `self` and `other` are approximately equal.
    /// Uses the epsilon returned by [`Self::relative_epsilon`].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, &Self::relative_epsilon())
    }

    /// Returns whether `self` and `other` are approximately equal,
    /// using the relative epsilon `rel_eps`.
    fn approx_eq_eps(&self, other: &Other, rel_eps: &Epsilon) -> bool;

    /// Returns the default relative epsilon of type `E`.
    ///
    /// This is `1e-6` for `f32` and `1e-12` for `f64`.
    fn relative_epsilon() -> Epsilon;
}

macro_rules! impl_approx_eq {
    ($t:ty, $eps:literal) => {
        impl ApproxEq for $t {
            fn approx_eq_eps(&self, other: &Self, rel_eps: &Self) -> bool {
                let diff = Float::abs(self - other);
                let scale = Float::abs(*self).max(Float::abs(*other)).max(1.0);
                diff.is_finite() && diff <= *rel_eps * scale
            }

            fn relative_epsilon() -> Self {
                $eps
            }
        }
    };
}

impl_approx_eq!(f32, 1e-6);
impl_approx_eq!(f64, 1e-12);

/// Returns whether `a` and `b` are approximately equal,
/// using the default epsilon of their type.
///
/// # Examples
/// ```
/// use ponymath_core::math::{approx::are_almost_equal, vec2};
///
/// assert!(are_almost_equal(&vec2(0.1 + 0.2, 1.0), &vec2(0.3, 1.0)));
/// assert!(!are_almost_equal(&vec2(0.1, 1.0), &vec2(0.2, 1.0)));
/// ```
pub fn are_almost_equal<T, E>(a: &T, b: &T) -> bool
where
    T: ApproxEq<T, E>,
{
    a.approx_eq(b)
}

/// Returns whether `a` and `b` are approximately equal,
/// using the relative epsilon `eps`.
///
/// # Examples
/// ```
/// use ponymath_core::math::{approx::are_almost_equal_eps, vec2};
///
/// let (a, b) = (vec2(10i32, 20), vec2(11, 20));
/// assert!(!are_almost_equal_eps(&a, &b, 0.01));
/// assert!(are_almost_equal_eps(&a, &b, 0.1));
/// ```
pub fn are_almost_equal_eps<T, E>(a: &T, b: &T, eps: E) -> bool
where
    T: ApproxEq<T, E>,
{
    a.approx_eq_eps(b, &eps)
}

/// Compares the components of `a` and `b` pairwise in the computational type.
pub(crate) fn components_approx_eq<C: Components>(
    a: &C,
    b: &C,
    eps: &Computational<C::Scalar>,
) -> bool {
    zip(a.as_slice(), b.as_slice()).all(|(&s, &o)| {
        s.to_computational()
            .approx_eq_eps(&o.to_computational(), eps)
    })
}

/// Asserts that two values are approximately equal.
/// Requires that the left operand has an applicable [`ApproxEq`] impl
/// and that both operands impl `Debug` unless a custom message is given.
///
/// # Panics
///
/// If the given values are not approximately equal.
///
/// # Examples
/// `assert_eq` would fail, but `assert_approx_eq` passes:
/// ```
/// # use ponymath_core::assert_approx_eq;
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// ```
/// A relative epsilon is used:
/// ```
/// # use ponymath_core::assert_approx_eq;
/// assert_ne!(1e7f32, 1e7 + 1.0);
/// assert_approx_eq!(1e7f32, 1e7 + 1.0);
/// ```
/// A custom epsilon can be given:
/// ```
/// # use ponymath_core::assert_approx_eq;
/// assert_approx_eq!(100.0, 101.0, eps = 0.01);
/// ```
/// Like `assert_eq`, this macro supports custom panic messages.
/// The epsilon, if present, must come before the format string.
/// ```should_panic
/// # use std::f32;
/// # use ponymath_core::assert_approx_eq;
/// assert_approx_eq!(f32::sin(3.14), 0.0, eps = 0.0001,
///     "3.14 is not a good approximation of {}!", f32::consts::PI);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, eps = $eps:literal) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b, eps = $eps,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(ApproxEq::approx_eq(a, b), $fmt $(, $args)*)
        }
    }};
    ($a:expr, $b:expr, eps = $eps:literal, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(
                ApproxEq::approx_eq_eps(a, b, &$eps),
                $fmt $(, $args)*
            )
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    mod f32 {
        #[test]
        fn approx_eq_zero() {
            assert_approx_eq!(0.0f32, 0.0);
            assert_approx_eq!(-0.0f32, 0.0);
            assert_approx_eq!(0.0f32, -0.0);
        }

        #[test]
        fn approx_eq_positive() {
            assert_approx_eq!(0.0f32, 0.0000001);
            assert_approx_eq!(0.0000001f32, 0.0);
            assert_approx_eq!(0.9999999f32, 1.0);
            assert_approx_eq!(1.0f32, 1.0000001);
            assert_approx_eq!(1.0e10f32, 1.0000001e10);
        }

        #[test]
        fn approx_eq_negative() {
            assert_approx_eq!(0.0f32, -0.0000001);
            assert_approx_eq!(-0.0000001f32, 0.0);
            assert_approx_eq!(-1.0f32, -1.0000001);
            assert_approx_eq!(-0.9999999f32, -1.0);
            assert_approx_eq!(-1.0e10f32, -1.0000001e10);
        }

        #[test]
        fn approx_eq_custom_epsilon() {
            assert_approx_eq!(0.0f32, 0.001, eps = 0.01);
            assert_approx_eq!(0.0f32, -0.001, eps = 0.01);
            assert_approx_eq!(1.0f32, 0.999, eps = 0.01);
            assert_approx_eq!(100.0f32, 99.9, eps = 0.01);
        }

        #[test]
        fn approx_eq_is_symmetric() {
            assert_approx_eq!(99.0f32, 100.0, eps = 0.01);
            assert_approx_eq!(100.0f32, 99.0, eps = 0.01);
        }

        #[test]
        #[should_panic]
        fn zero_not_approx_eq_to_one() {
            assert_approx_eq!(0.0f32, 1.0);
        }
        #[test]
        #[should_panic]
        fn one_not_approx_eq_to_1_00001() {
            assert_approx_eq!(1.0f32, 1.00001);
        }
        #[test]
        #[should_panic]
        fn inf_not_approx_eq_to_inf() {
            assert_approx_eq!(f32::INFINITY, f32::INFINITY);
        }
        #[test]
        #[should_panic]
        fn inf_not_approx_eq_to_finite() {
            assert_approx_eq!(f32::INFINITY, 1.0, eps = 1.0);
        }
        #[test]
        #[should_panic]
        fn nan_not_approx_eq_to_nan() {
            assert_approx_eq!(f32::NAN, f32::NAN);
        }
    }

    mod f64 {
        #[test]
        fn approx_eq_tighter_than_f32() {
            assert_approx_eq!(1.0f64, 1.0 + 1e-13);
            assert_approx_eq!(1.0f64, 1.0 + 1e-7, eps = 1e-6);
        }

        #[test]
        #[should_panic]
        fn f32_precision_not_enough() {
            assert_approx_eq!(1.0f64, 1.0000001);
        }
    }

    #[test]
    fn free_functions_use_given_epsilon() {
        assert!(are_almost_equal(&1.0f32, &1.0000001));
        assert!(!are_almost_equal(&1.0f32, &1.1));
        assert!(are_almost_equal_eps(&1.0f32, &1.1, 0.2));
    }
}

//! Scalar types and their computational counterparts.
//!
//! Every vector and matrix is generic over a *storage* scalar type `T`.
//! Arithmetic that stays exact under `T` (addition, multiplication, dot
//! products, determinants…) is done in `T` itself. Anything that cannot stay
//! exact, such as division in matrix inversion, square roots, or inverse
//! trigonometric functions, is done in the *computational* type of `T`,
//! given by [`Scalar::Computational`]:
//!
//! | Storage type                         | Computational type |
//! |--------------------------------------|--------------------|
//! | `i8`, `i16`, `i32`, `u8`, `u16`, `u32` | `f32`            |
//! | `i64`, `u64`, `isize`, `usize`       | `f64`              |
//! | `f32`                                | `f32`              |
//! | `f64`                                | `f64`              |

use core::fmt::{Debug, Display};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::math::float::Float;

/// Trait for the numeric types usable as vector and matrix components.
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    /// The floating-point type used for operations that cannot be done
    /// exactly in `Self`.
    type Computational: Float;

    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;

    /// Converts `self` to the computational type.
    fn to_computational(self) -> Self::Computational;

    /// Converts a computational value back to `Self`.
    ///
    /// For integer types the value is truncated toward zero, and saturates
    /// at the bounds of `Self`. NaN converts to zero.
    fn from_computational(c: Self::Computational) -> Self;

    /// Returns whether `self` is neither infinite nor NaN.
    /// Always true for integer types.
    fn is_finite(self) -> bool;
}

/// Trait for scalars that have an additive inverse.
pub trait Signed: Scalar + Neg<Output = Self> {
    /// The value −1.
    const NEG_ONE: Self;
}

/// Shorthand for the computational type of `T`.
pub type Computational<T> = <T as Scalar>::Computational;

/// Trait for fixed-size aggregates of scalar components.
///
/// Both vectors and matrices implement this; it provides their dimension
/// constants and a flat view of their components, which the shared
/// formatting and approximate-equality code works on.
pub trait Components {
    /// The component type.
    type Scalar: Scalar;

    /// The dimension of `Self`: the length of a vector, or the number of
    /// rows (and columns) of a square matrix.
    const DIM: usize;

    /// The total number of scalar components in `Self`.
    const COMPONENT_COUNT: usize;

    /// Returns all components of `self` as a flat slice.
    fn as_slice(&self) -> &[Self::Scalar];
}

macro_rules! impl_scalar {
    ($($t:ty => $c:ty, $zero:literal, $one:literal, |$x:ident| $finite:expr;)+) => {
        $(
            impl Scalar for $t {
                type Computational = $c;

                const ZERO: Self = $zero;
                const ONE: Self = $one;

                #[inline]
                fn to_computational(self) -> $c {
                    self as $c
                }
                #[inline]
                fn from_computational(c: $c) -> Self {
                    c as $t
                }
                #[inline]
                fn is_finite(self) -> bool {
                    let $x = self;
                    $finite
                }
            }
        )+
    };
}

impl_scalar! {
    i8 => f32, 0, 1, |_x| true;
    i16 => f32, 0, 1, |_x| true;
    i32 => f32, 0, 1, |_x| true;
    u8 => f32, 0, 1, |_x| true;
    u16 => f32, 0, 1, |_x| true;
    u32 => f32, 0, 1, |_x| true;
    i64 => f64, 0, 1, |_x| true;
    u64 => f64, 0, 1, |_x| true;
    isize => f64, 0, 1, |_x| true;
    usize => f64, 0, 1, |_x| true;
    f32 => f32, 0.0, 1.0, |x| f32::is_finite(x);
    f64 => f64, 0.0, 1.0, |x| f64::is_finite(x);
}

macro_rules! impl_signed {
    ($($t:ty = $neg_one:literal),+) => {
        $(
            impl Signed for $t {
                const NEG_ONE: Self = $neg_one;
            }
        )+
    };
}

impl_signed!(i8 = -1, i16 = -1, i32 = -1, i64 = -1, isize = -1);
impl_signed!(f32 = -1.0, f64 = -1.0);

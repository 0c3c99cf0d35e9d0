//! Linear algebra primitives.
//!
//! Includes fixed-size [vectors][self::vec] with two to four components and
//! square [matrices][mat] of dimension two to four, both generic over their
//! [scalar][num::Scalar] type, as well as utilities such as approximate
//! equality comparisons.
//!
//! Integer and floating-point scalars are both supported. Operations that
//! can be carried out exactly, such as dot products or determinants, are
//! computed in the scalar type itself; anything involving division, square
//! roots, or trigonometry is computed in the scalar's
//! [computational type][num::Scalar::Computational].

pub use {
    approx::{ApproxEq, are_almost_equal, are_almost_equal_eps},
    float::Float,
    mat::{Mat2x2, Mat3x3, Mat4x4, Matrix, RowMut, mat2, mat3, mat4},
    num::{Components, Computational, Scalar, Signed},
    vec::{Vec2, Vec3, Vec4, Vector, vec2, vec3, vec4},
};

/// Implements an operator trait in terms of an op-assign trait.
macro_rules! impl_op {
    ($trait:ident :: $method:ident, $self:ident, $rhs:ty, $op:tt) => {
        impl<T: Scalar, const N: usize> $trait<$rhs> for $self<T, N> {
            type Output = Self;
            #[inline]
            fn $method(mut self, rhs: $rhs) -> Self {
                self $op rhs;
                self
            }
        }
    };
}

/// Implements `scalar * x` for each primitive scalar type in terms of
/// `x * scalar`.
macro_rules! impl_scalar_lhs_mul {
    ($self:ident: $($t:ty),+) => {
        $(
            impl<const N: usize> Mul<$self<$t, N>> for $t {
                type Output = $self<$t, N>;
                #[inline]
                fn mul(self, rhs: $self<$t, N>) -> $self<$t, N> {
                    rhs * self
                }
            }
        )+
    };
}

pub mod approx;
pub mod float;
mod format;
pub mod mat;
pub mod num;
pub mod predefined;
pub mod vec;

//! Predefined vector and matrix constants.
//!
//! The direction constants follow a left-handed, y-up convention:
//! [`RIGHT`][Vector::RIGHT] is +x, [`UP`][Vector::UP] is +y, and
//! [`FORWARD`][Vector::FORWARD] is +z.

use crate::math::mat::Matrix;
use crate::math::num::{Scalar, Signed};
use crate::math::vec::Vector;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// The vector with all components zero.
    pub const ZERO: Self = Self([T::ZERO; N]);
    /// The vector with all components one.
    pub const ONE: Self = Self([T::ONE; N]);
}

impl<T: Signed, const N: usize> Vector<T, N> {
    /// The vector with all components negative one.
    pub const NEGATIVE: Self = Self([T::NEG_ONE; N]);
}

impl<T: Scalar> Vector<T, 2> {
    /// The unit vector along the x axis.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// The unit vector along the y axis.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Signed> Vector<T, 2> {
    /// (0, 1)
    pub const UP: Self = Self::Y;
    /// (0, -1)
    pub const DOWN: Self = Self([T::ZERO, T::NEG_ONE]);
    /// (1, 0)
    pub const RIGHT: Self = Self::X;
    /// (-1, 0)
    pub const LEFT: Self = Self([T::NEG_ONE, T::ZERO]);
}

impl<T: Scalar> Vector<T, 3> {
    /// The unit vector along the x axis.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// The unit vector along the y axis.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// The unit vector along the z axis.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Signed> Vector<T, 3> {
    /// (0, 1, 0)
    pub const UP: Self = Self::Y;
    /// (0, -1, 0)
    pub const DOWN: Self = Self([T::ZERO, T::NEG_ONE, T::ZERO]);
    /// (1, 0, 0)
    pub const RIGHT: Self = Self::X;
    /// (-1, 0, 0)
    pub const LEFT: Self = Self([T::NEG_ONE, T::ZERO, T::ZERO]);
    /// (0, 0, 1)
    pub const FORWARD: Self = Self::Z;
    /// (0, 0, -1)
    pub const BACK: Self = Self([T::ZERO, T::ZERO, T::NEG_ONE]);
}

impl<T: Scalar> Vector<T, 4> {
    /// The unit vector along the x axis.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// The unit vector along the y axis.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// The unit vector along the z axis.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// The unit vector along the w axis.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// The matrix with all components zero.
    pub const ZERO: Self = Self([[T::ZERO; N]; N]);
}

impl<T: Scalar> Matrix<T, 2> {
    /// The 2×2 identity matrix.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        [T::ONE, T::ZERO],
        [T::ZERO, T::ONE],
    ]);
}

impl<T: Scalar> Matrix<T, 3> {
    /// The 3×3 identity matrix.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        [T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE],
    ]);
}

impl<T: Scalar> Matrix<T, 4> {
    /// The 4×4 identity matrix.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        [T::ONE, T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ONE],
    ]);
}

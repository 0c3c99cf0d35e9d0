//! Square matrices.
//!
//! A [`Matrix<T, N>`][Matrix] holds `N`×`N` scalar components in
//! column-major order: the `N` components of column 0 come first, then
//! those of column 1, and so on. Elements are nevertheless addressed in the
//! conventional `(row, col)` order:
//!
//! ```
//! use ponymath_core::math::mat2;
//!
//! //           column 0  column 1
//! let m = mat2(1, 3,     2, 4);
//! assert_eq!(m[(0, 1)], 2);
//! assert_eq!(m.as_slice(), &[1, 3, 2, 4]);
//! assert_eq!(m.to_string(), "(1, 2)(3, 4)");
//! ```
//!
//! Determinants and adjugates are computed exactly in the scalar type.
//! The [inverse][Mat3x3::inverse] is computed in the computational type.

use core::array;
use core::fmt::{self, Debug, Display, Formatter};
use core::iter::zip;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub,
    SubAssign,
};

use num_traits::AsPrimitive;

use crate::math::approx::{ApproxEq, components_approx_eq};
use crate::math::format::write_tuple;
use crate::math::num::{Components, Computational, Scalar, Signed};
use crate::math::vec::{Vector, dot};

//
// Types
//

/// A square matrix of `N`×`N` components of type `T`, stored as an array
/// of columns.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Matrix<T, const N: usize>(pub [[T; N]; N]);

/// A 2×2 matrix with components of type `T`.
pub type Mat2x2<T = f32> = Matrix<T, 2>;
/// A 3×3 matrix with components of type `T`.
pub type Mat3x3<T = f32> = Matrix<T, 3>;
/// A 4×4 matrix with components of type `T`.
pub type Mat4x4<T = f32> = Matrix<T, 4>;

/// A mutable view to a single row of a matrix.
///
/// Returned by [`Matrix::row_mut`]. Because the matrix is stored by
/// columns, the components of a row are not contiguous in memory; this
/// proxy writes each access through to the right column.
///
/// # Examples
/// ```
/// use ponymath_core::math::{mat2, vec2};
///
/// let mut m = mat2(1, 3, 2, 4);
/// m.row_mut(1)[0] = 30;
/// assert_eq!(m.row(1), vec2(30, 4));
///
/// m.row_mut(0).set(vec2(-1, -2));
/// assert_eq!(m, mat2(-1, 30, -2, 4));
/// ```
pub struct RowMut<'a, T, const N: usize> {
    mat: &'a mut Matrix<T, N>,
    row: usize,
}

//
// Free fns
//

/// Returns a 2×2 matrix with the given components in column-major order.
#[inline]
pub const fn mat2<T>(m00: T, m10: T, m01: T, m11: T) -> Mat2x2<T> {
    Matrix([[m00, m10], [m01, m11]])
}

/// Returns a 3×3 matrix with the given components in column-major order.
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
#[inline]
pub const fn mat3<T>(
    m00: T, m10: T, m20: T,
    m01: T, m11: T, m21: T,
    m02: T, m12: T, m22: T,
) -> Mat3x3<T> {
    Matrix([[m00, m10, m20], [m01, m11, m21], [m02, m12, m22]])
}

/// Returns a 4×4 matrix with the given components in column-major order.
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
#[inline]
pub const fn mat4<T>(
    m00: T, m10: T, m20: T, m30: T,
    m01: T, m11: T, m21: T, m31: T,
    m02: T, m12: T, m22: T, m32: T,
    m03: T, m13: T, m23: T, m33: T,
) -> Mat4x4<T> {
    Matrix([
        [m00, m10, m20, m30],
        [m01, m11, m21, m31],
        [m02, m12, m22, m32],
        [m03, m13, m23, m33],
    ])
}

/// Returns the component-wise (Hadamard) product of `a` and `b`.
#[inline]
pub fn scale<T: Scalar, const N: usize>(
    a: &Matrix<T, N>,
    b: &Matrix<T, N>,
) -> Matrix<T, N> {
    Matrix::from_fn(|r, c| a[(r, c)] * b[(r, c)])
}

//
// Inherent impls
//

impl<T, const N: usize> Matrix<T, N> {
    /// Returns a matrix with the given columns.
    #[inline]
    pub const fn new(columns: [[T; N]; N]) -> Self {
        Self(columns)
    }

    /// Returns a matrix with the given columns.
    #[inline]
    pub fn from_columns(columns: [Vector<T, N>; N]) -> Self {
        Self(columns.map(|c| c.0))
    }

    /// Returns a matrix whose element at `(row, col)` is `f(row, col)`.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self(array::from_fn(|c| array::from_fn(|r| f(r, c))))
    }

    /// Returns a matrix whose components are the results of applying `f`
    /// to the components of `self`.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Matrix<U, N> {
        Matrix(self.0.map(|col| col.map(&mut f)))
    }

    /// Returns the components of `self` as a flat slice in column-major
    /// order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns the components of `self` as a flat mutable slice in
    /// column-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Returns a write-through view to row `i` of `self`.
    ///
    /// # Panics
    /// If `i >= N`.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> RowMut<'_, T, N> {
        assert!(i < N, "row index {i} out of bounds for dimension {N}");
        RowMut { mat: self, row: i }
    }
}

impl<T: Copy, const N: usize> Matrix<T, N> {
    /// Returns a matrix with the given rows.
    pub fn from_rows(rows: [Vector<T, N>; N]) -> Self {
        Self::from_fn(|r, c| rows[r].0[c])
    }

    /// Returns a matrix with components copied from a column-major slice.
    ///
    /// # Panics
    /// If `slice.len() != N * N`.
    ///
    /// # Examples
    /// ```
    /// use ponymath_core::math::{Mat2x2, mat2};
    ///
    /// let m = Mat2x2::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m, mat2(1.0, 2.0, 3.0, 4.0));
    /// ```
    pub fn from_slice(slice: &[T]) -> Self {
        assert_eq!(
            slice.len(),
            N * N,
            "a {N}x{N} matrix needs exactly {} components",
            N * N
        );
        Self::from_fn(|r, c| slice[c * N + r])
    }

    /// Returns row `i` of `self` as a vector.
    ///
    /// # Panics
    /// If `i >= N`.
    pub fn row(&self, i: usize) -> Vector<T, N> {
        Vector::from_fn(|c| self.0[c][i])
    }

    /// Returns column `i` of `self` as a vector.
    ///
    /// # Panics
    /// If `i >= N`.
    #[inline]
    pub fn column(&self, i: usize) -> Vector<T, N> {
        Vector(self.0[i])
    }

    /// Overwrites row `i` of `self` with `v`.
    pub fn set_row(&mut self, i: usize, v: Vector<T, N>) {
        for (col, x) in zip(&mut self.0, v.0) {
            col[i] = x;
        }
    }

    /// Overwrites column `i` of `self` with `v`.
    #[inline]
    pub fn set_column(&mut self, i: usize, v: Vector<T, N>) {
        self.0[i] = v.0;
    }

    /// Returns the main diagonal of `self`, from top left to bottom right.
    pub fn diagonal(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Returns the counter-diagonal of `self`, from top right to bottom
    /// left. Its `i`th component is the element at `(i, N - 1 - i)`.
    pub fn counter_diagonal(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self.0[N - 1 - i][i])
    }

    /// Returns the transpose of `self`.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(|r, c| self.0[r][c])
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// The dimension of the matrix.
    pub const DIM: usize = N;
    /// The number of components.
    pub const COMPONENT_COUNT: usize = N * N;

    /// Returns `self` converted to its computational type.
    #[inline]
    pub fn to_computational(&self) -> Matrix<Computational<T>, N> {
        self.map(Scalar::to_computational)
    }

    /// Returns `self` with each component cast to `U` like the `as`
    /// operator does. The layout is preserved.
    #[inline]
    pub fn cast<U>(self) -> Matrix<U, N>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(AsPrimitive::as_)
    }

    /// Overwrites the diagonal of `self` with `v`, and sets all other
    /// components to zero.
    ///
    /// # Examples
    /// ```
    /// use ponymath_core::math::{mat2, vec2};
    ///
    /// let mut m = mat2(1, 2, 3, 4);
    /// m.set_diagonal(vec2(5, 6));
    /// assert_eq!(m, mat2(5, 0, 0, 6));
    /// ```
    pub fn set_diagonal(&mut self, v: Vector<T, N>) {
        *self = Self::from_fn(|r, c| if r == c { v.0[r] } else { T::ZERO });
    }

    /// Overwrites the counter-diagonal of `self` with `v`, and sets all
    /// other components to zero.
    ///
    /// # Examples
    /// ```
    /// use ponymath_core::math::{mat2, vec2};
    ///
    /// let mut m = mat2(1, 2, 3, 4);
    /// m.set_counter_diagonal(vec2(5, 6));
    /// assert_eq!(m, mat2(0, 6, 5, 0));
    /// ```
    pub fn set_counter_diagonal(&mut self, v: Vector<T, N>) {
        *self = Self::from_fn(|r, c| {
            if r + c == N - 1 { v.0[r] } else { T::ZERO }
        });
    }

    /// Returns the sum of the diagonal of `self`.
    #[inline]
    pub fn trace(&self) -> T {
        self.diagonal().sum()
    }

    /// Multiplies `self` component-wise by `other` in place.
    #[inline]
    pub fn scale(&mut self, other: &Self) {
        *self = scale(self, other);
    }

    /// Returns whether every component of `self` equals zero.
    pub fn is_zero(&self) -> bool {
        self.as_slice().iter().all(|&c| c == T::ZERO)
    }

    /// Returns whether `self` is approximately zero, using the default
    /// epsilon.
    pub fn is_almost_zero(&self) -> bool {
        self.approx_eq(&Self::ZERO)
    }

    /// Returns whether `self` is approximately zero, using the epsilon `eps`.
    pub fn is_almost_zero_eps(&self, eps: Computational<T>) -> bool {
        self.approx_eq_eps(&Self::ZERO, &eps)
    }

    /// Returns whether `self` is the identity matrix.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Returns whether `self` is approximately the identity matrix, using
    /// the default epsilon.
    pub fn is_almost_identity(&self) -> bool {
        self.approx_eq(&Self::identity())
    }

    /// Returns whether `self` is approximately the identity matrix, using
    /// the epsilon `eps`.
    pub fn is_almost_identity_eps(&self, eps: Computational<T>) -> bool {
        self.approx_eq_eps(&Self::identity(), &eps)
    }

    /// Returns whether no component of `self` is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        self.as_slice().iter().all(|&c| c.is_finite())
    }

    fn identity() -> Self {
        Self::from_fn(|r, c| if r == c { T::ONE } else { T::ZERO })
    }
}

impl<T: Signed> Mat2x2<T> {
    /// Returns the determinant of `self`, computed exactly in `T`.
    ///
    /// # Examples
    /// ```
    /// use ponymath_core::math::mat2;
    ///
    /// assert_eq!(mat2(3, -7, 5, -2).determinant(), 29);
    /// ```
    pub fn determinant(&self) -> T {
        let [[a, c], [b, d]] = self.0;
        a * d - b * c
    }

    /// Returns the adjugate of `self`, computed exactly in `T`.
    ///
    /// The adjugate is the transpose of the cofactor matrix. For any
    /// matrix A, `A * adj(A)` equals `det(A)` times the identity.
    #[must_use]
    pub fn adjugate(&self) -> Self {
        let [[a, c], [b, d]] = self.0;
        mat2(d, -c, -b, a)
    }
}

macro_rules! impl_cofactors {
    ($n:literal, $minor:ident) => {
        impl<T: Signed> Matrix<T, $n> {
            /// Returns the submatrix of `self` with row `row` and column
            /// `col` removed.
            ///
            /// # Panics
            /// If `row` or `col` is out of bounds.
            pub fn minor(&self, row: usize, col: usize) -> $minor<T> {
                assert!(row < $n && col < $n, "({row}, {col}) out of bounds");
                let skip = |i: usize, j: usize| if i < j { i } else { i + 1 };
                Matrix::from_fn(|r, c| self.0[skip(c, col)][skip(r, row)])
            }

            /// Returns the cofactor of the element at `(row, col)`: the
            /// determinant of the corresponding minor, negated if
            /// `row + col` is odd.
            pub fn cofactor(&self, row: usize, col: usize) -> T {
                let det = self.minor(row, col).determinant();
                if (row + col) % 2 == 0 { det } else { -det }
            }

            /// Returns the determinant of `self`, computed exactly in `T`
            /// by cofactor expansion along the first row.
            pub fn determinant(&self) -> T {
                (0..$n).fold(T::ZERO, |acc, c| {
                    acc + self.0[c][0] * self.cofactor(0, c)
                })
            }

            /// Returns the adjugate of `self`, computed exactly in `T`.
            ///
            /// The adjugate is the transpose of the cofactor matrix. For
            /// any matrix A, `A * adj(A)` equals `det(A)` times the
            /// identity.
            #[must_use]
            pub fn adjugate(&self) -> Self {
                Self::from_fn(|r, c| self.cofactor(c, r))
            }
        }
    };
}

impl_cofactors!(3, Mat2x2);
impl_cofactors!(4, Mat3x3);

macro_rules! impl_inverse {
    ($($n:literal),+) => {
        $(
            impl<T: Signed> Matrix<T, $n> {
                /// Returns the inverse of `self`, computed in the
                /// computational type as the adjugate divided by the
                /// determinant.
                ///
                /// If `self` is singular, the result has infinite or NaN
                /// components; check with [`Matrix::is_finite`] if needed.
                pub fn inverse(&self) -> Matrix<Computational<T>, $n> {
                    let det = self.determinant().to_computational();
                    self.adjugate().to_computational() / det
                }
            }
        )+
    };
}

impl_inverse!(2, 3, 4);

impl<T: Copy, const N: usize> RowMut<'_, T, N> {
    /// Returns a copy of the row.
    pub fn get(&self) -> Vector<T, N> {
        self.mat.row(self.row)
    }

    /// Overwrites the row with `v`.
    pub fn set(&mut self, v: Vector<T, N>) {
        self.mat.set_row(self.row, v);
    }
}

//
// Local trait impls
//

impl<T: Scalar, const N: usize> Components for Matrix<T, N> {
    type Scalar = T;

    const DIM: usize = N;
    const COMPONENT_COUNT: usize = N * N;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }
}

impl<T: Scalar, const N: usize> ApproxEq<Self, Computational<T>>
    for Matrix<T, N>
{
    fn approx_eq_eps(&self, other: &Self, eps: &Computational<T>) -> bool {
        components_approx_eq(self, other, eps)
    }
    fn relative_epsilon() -> Computational<T> {
        <Computational<T> as ApproxEq>::relative_epsilon()
    }
}

//
// Foreign trait impls
//

impl<T: Scalar, const N: usize> Default for Matrix<T, N> {
    /// Returns the zero matrix.
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Copy + Display, const N: usize> Display for Matrix<T, N> {
    /// Formats `self` as a sequence of rows, each row like a vector:
    /// `(m00, m01)(m10, m11)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (0..N).try_for_each(|r| write_tuple(f, &self.row(r).0))
    }
}

impl<T: Copy + Debug, const N: usize> Debug for Matrix<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat{N}x{N}[")?;
        for r in 0..N {
            writeln!(f, "    {:?}", self.row(r).0)?;
        }
        write!(f, "]")
    }
}

impl<T, const N: usize> From<[[T; N]; N]> for Matrix<T, N> {
    /// Returns a matrix with the given columns.
    #[inline]
    fn from(columns: [[T; N]; N]) -> Self {
        Self(columns)
    }
}

impl<T: Copy> From<[T; 4]> for Mat2x2<T> {
    /// Returns a matrix with components from a column-major array.
    fn from(a: [T; 4]) -> Self {
        Self::from_slice(&a)
    }
}

impl<T: Copy> From<[T; 9]> for Mat3x3<T> {
    /// Returns a matrix with components from a column-major array.
    fn from(a: [T; 9]) -> Self {
        Self::from_slice(&a)
    }
}

impl<T: Copy> From<[T; 16]> for Mat4x4<T> {
    /// Returns a matrix with components from a column-major array.
    fn from(a: [T; 16]) -> Self {
        Self::from_slice(&a)
    }
}

impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    /// Returns a reference to the element at `(row, col)`.
    ///
    /// # Panics
    /// If `row >= N` or `col >= N`.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.0[col][row]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    /// Returns a mutable reference to the element at `(row, col)`.
    ///
    /// # Panics
    /// If `row >= N` or `col >= N`.
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.0[col][row]
    }
}

impl<T, const N: usize> Index<usize> for RowMut<'_, T, N> {
    type Output = T;

    #[inline]
    fn index(&self, col: usize) -> &T {
        &self.mat.0[col][self.row]
    }
}

impl<T, const N: usize> IndexMut<usize> for RowMut<'_, T, N> {
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut T {
        &mut self.mat.0[col][self.row]
    }
}

impl<T: Scalar, const N: usize> AddAssign for Matrix<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        zip(self.as_mut_slice(), rhs.as_slice()).for_each(|(s, &r)| *s += r);
    }
}

impl<T: Scalar, const N: usize> SubAssign for Matrix<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        zip(self.as_mut_slice(), rhs.as_slice()).for_each(|(s, &r)| *s -= r);
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Matrix<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.as_mut_slice().iter_mut().for_each(|s| *s *= rhs);
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Matrix<T, N> {
    /// Divides each component of `self` by `rhs`.
    ///
    /// For integer matrices the division truncates, and panics if `rhs` is
    /// zero.
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.as_mut_slice().iter_mut().for_each(|s| *s /= rhs);
    }
}

impl<T: Scalar, const N: usize> MulAssign for Matrix<T, N> {
    /// Replaces `self` with the matrix product `self * rhs`.
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const N: usize> Mul for Matrix<T, N> {
    type Output = Self;

    /// Returns the matrix product of `self` and `rhs`.
    ///
    /// Each element `(r, c)` of the result is the dot product of row `r`
    /// of `self` and column `c` of `rhs`.
    fn mul(self, rhs: Self) -> Self {
        Self::from_fn(|r, c| dot(&self.row(r), &rhs.column(c)))
    }
}

impl<T: Scalar, const N: usize> Mul<Vector<T, N>> for Matrix<T, N> {
    type Output = Vector<T, N>;

    /// Returns the product of `self` and the column vector `rhs`.
    fn mul(self, rhs: Vector<T, N>) -> Vector<T, N> {
        Vector::from_fn(|r| dot(&self.row(r), &rhs))
    }
}

impl<T: Signed, const N: usize> Neg for Matrix<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}

impl_op!(Add::add, Matrix, Matrix<T, N>, +=);
impl_op!(Sub::sub, Matrix, Matrix<T, N>, -=);
impl_op!(Mul::mul, Matrix, T, *=);
impl_op!(Div::div, Matrix, T, /=);

impl_scalar_lhs_mul!(Matrix:
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

#[cfg(test)]
mod tests {
    use alloc::{format, string::ToString};

    use crate::assert_approx_eq;
    use crate::math::vec::{vec2, vec3, vec4};

    use super::*;

    fn counting() -> Mat3x3<i32> {
        Matrix::from_fn(|r, c| (r * 3 + c + 1) as i32)
    }

    mod float {
        use super::*;

        #[test]
        fn inverse_2x2() {
            let m = mat2(3.0f64, 5.0, 2.0, 4.0);
            assert_approx_eq!(m.inverse(), mat2(2.0, -2.5, -1.0, 1.5));
        }

        #[test]
        fn inverse_of_identity_is_identity() {
            assert_eq!(Mat2x2::<f32>::IDENTITY.inverse(), Mat2x2::IDENTITY);
            assert_eq!(Mat3x3::<f64>::IDENTITY.inverse(), Mat3x3::IDENTITY);
            assert_eq!(Mat4x4::<f32>::IDENTITY.inverse(), Mat4x4::IDENTITY);
        }

        #[test]
        fn inverse_3x3_times_self_is_identity() {
            let m = mat3(2.0f64, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 4.0);
            assert_approx_eq!(m * m.inverse(), Mat3x3::<f64>::IDENTITY);
            assert!((m.inverse() * m).is_almost_identity());
        }

        #[test]
        fn inverse_of_singular_is_not_finite() {
            let m = mat2(1.0f32, 2.0, 2.0, 4.0);
            assert_eq!(m.determinant(), 0.0);
            assert!(!m.inverse().is_finite());
        }

        #[test]
        fn almost_zero() {
            let mut m = Mat3x3::<f32>::ZERO;
            assert!(m.is_almost_zero());
            m[(1, 2)] = 1e-7;
            assert!(!m.is_zero());
            assert!(m.is_almost_zero());
            m[(1, 2)] = 1.0;
            assert!(!m.is_almost_zero());
            assert!(m.is_almost_zero_eps(5.0));
        }

        #[test]
        fn almost_identity() {
            let mut m = Mat4x4::<f64>::IDENTITY;
            m[(3, 3)] += 1e-13;
            assert!(!m.is_identity());
            assert!(m.is_almost_identity());
            m[(0, 3)] = 0.01;
            assert!(!m.is_almost_identity());
            assert!(m.is_almost_identity_eps(0.1));
        }

        #[test]
        fn finite() {
            let mut m = Mat2x2::<f32>::IDENTITY;
            assert!(m.is_finite());
            m[(0, 1)] = f32::NAN;
            assert!(!m.is_finite());
        }

        #[test]
        fn scalar_division() {
            let m = mat2(1.0, 2.0, 3.0, 4.0) / 2.0;
            assert_eq!(m, mat2(0.5, 1.0, 1.5, 2.0));
        }

        #[test]
        fn display_uses_flags() {
            let m = mat2(1.0, 3.0, 2.0, 4.0);
            assert_eq!(format!("{m:.1}"), "(1.0, 2.0)(3.0, 4.0)");
        }
    }

    mod int {
        use super::*;

        #[test]
        fn determinant_2x2() {
            assert_eq!(mat2(3, -7, 5, -2).determinant(), 29);
            assert_eq!(Mat2x2::<i32>::IDENTITY.determinant(), 1);
        }

        #[test]
        fn determinant_3x3() {
            let m = mat3(10, -15, 3, 5, -20, 33, 6, 7, 19);
            assert_eq!(m.determinant(), -7190);
            assert_eq!(m.transpose().determinant(), -7190);
            assert_eq!(counting().determinant(), 0);
        }

        #[test]
        fn determinant_4x4() {
            let triangular = Mat4x4::from_rows([
                vec4(2, 1, 3, 4),
                vec4(0, 3, 5, 1),
                vec4(0, 0, -1, 2),
                vec4(0, 0, 0, 5),
            ]);
            assert_eq!(triangular.determinant(), -30);

            let m = Mat4x4::from_rows([
                vec4(1, 0, 2, -1),
                vec4(3, 0, 0, 5),
                vec4(2, 1, 4, -3),
                vec4(1, 0, 5, 0),
            ]);
            assert_eq!(m.determinant(), 30);
        }

        #[test]
        fn minor_and_cofactor() {
            let m = counting();
            assert_eq!(m.minor(0, 0), mat2(5, 8, 6, 9));
            assert_eq!(m.minor(1, 2), mat2(1, 7, 2, 8));
            assert_eq!(m.cofactor(0, 0), -3);
            assert_eq!(m.cofactor(0, 1), 6);
        }

        #[test]
        #[should_panic]
        fn minor_out_of_bounds() {
            let _ = counting().minor(3, 0);
        }

        #[test]
        fn adjugate_2x2() {
            assert_eq!(mat2(1, 3, 2, 4).adjugate(), mat2(4, -3, -2, 1));
        }

        #[test]
        fn adjugate_times_self_is_scaled_identity() {
            let m = mat3(10i32, -15, 3, 5, -20, 33, 6, 7, 19);
            let det = m.determinant();
            assert_eq!(m * m.adjugate(), Mat3x3::IDENTITY * det);
            assert_eq!(m.adjugate() * m, Mat3x3::IDENTITY * det);
        }

        #[test]
        fn inverse_is_computational() {
            let inv: Mat2x2<f32> = mat2(3, 5, 2, 4).inverse();
            assert_approx_eq!(inv, mat2(2.0, -2.5, -1.0, 1.5));
            let inv: Mat2x2<f64> = mat2(3i64, 5, 2, 4).inverse();
            assert_approx_eq!(inv, mat2(2.0, -2.5, -1.0, 1.5));
        }

        #[test]
        fn product() {
            let a = mat3(1, 2, 3, 4, 5, 6, 7, 8, 9);
            let b = mat3(2, 0, 1, 1, 3, 0, 0, 1, 4);
            let expected = mat3(9, 12, 15, 13, 17, 21, 32, 37, 42);
            assert_eq!(a * b, expected);

            let mut c = a;
            c *= b;
            assert_eq!(c, expected);
        }

        #[test]
        fn product_with_identity() {
            let m = counting();
            assert_eq!(m * Mat3x3::<i32>::IDENTITY, m);
            assert_eq!(Mat3x3::<i32>::IDENTITY * m, m);
        }

        #[test]
        fn product_with_vector() {
            let m = mat2(1, 3, 2, 4);
            assert_eq!(m * vec2(5, 6), vec2(17, 39));
            assert_eq!(Mat3x3::<i32>::IDENTITY * vec3(1, 2, 3), vec3(1, 2, 3));
        }

        #[test]
        fn scalar_division_truncates() {
            assert_eq!(mat2(7, -7, 6, 1) / 2, mat2(3, -3, 3, 0));
        }

        #[test]
        fn trace() {
            assert_eq!(counting().trace(), 15);
            assert_eq!(Mat4x4::<i32>::IDENTITY.trace(), 4);
        }

        #[test]
        fn almost_identity() {
            assert!(Mat3x3::<i32>::IDENTITY.is_almost_identity());
            assert!(!counting().is_almost_identity());
        }
    }

    #[test]
    fn dimensions() {
        assert_eq!(Mat2x2::<u8>::DIM, 2);
        assert_eq!(Mat2x2::<u8>::COMPONENT_COUNT, 4);
        assert_eq!(Mat3x3::<f64>::COMPONENT_COUNT, 9);
        assert_eq!(<Mat4x4<i64> as Components>::DIM, 4);
        assert_eq!(<Mat4x4<i64> as Components>::COMPONENT_COUNT, 16);
    }

    #[test]
    fn column_major_layout() {
        let m = mat3(1, 2, 3, 4, 5, 6, 7, 8, 9);
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(m.column(1), vec3(4, 5, 6));
        assert_eq!(m.row(1), vec3(2, 5, 8));
        assert_eq!(m[(2, 0)], 3);
        assert_eq!(m[(0, 2)], 7);
    }

    #[test]
    fn construction() {
        let m = counting();
        let rows = [vec3(1, 2, 3), vec3(4, 5, 6), vec3(7, 8, 9)];
        let cols = [vec3(1, 4, 7), vec3(2, 5, 8), vec3(3, 6, 9)];
        assert_eq!(Matrix::from_rows(rows), m);
        assert_eq!(Matrix::from_columns(cols), m);
        assert_eq!(Matrix::new([[1, 4, 7], [2, 5, 8], [3, 6, 9]]), m);
        assert_eq!(Mat3x3::from([1, 4, 7, 2, 5, 8, 3, 6, 9]), m);
        assert_eq!(Mat3x3::from_slice(m.as_slice()), m);
        assert_eq!(Mat2x2::from([1, 2, 3, 4]), mat2(1, 2, 3, 4));
    }

    #[test]
    fn from_flat_array_4x4() {
        let a: [i32; 16] = core::array::from_fn(|i| i as i32);
        let m = Mat4x4::from(a);
        assert_eq!(m.as_slice(), &a);
        assert_eq!(m.row(1), vec4(1, 5, 9, 13));
    }

    #[test]
    #[should_panic]
    fn from_slice_wrong_length() {
        let _ = Mat2x2::from_slice(&[1, 2, 3]);
    }

    #[test]
    fn set_rows_and_columns() {
        let mut m = Mat3x3::<i32>::ZERO;
        m.set_row(0, vec3(1, 2, 3));
        m.set_column(2, vec3(7, 8, 9));
        assert_eq!(m.row(0), vec3(1, 2, 7));
        assert_eq!(m.column(2), vec3(7, 8, 9));
        assert_eq!(m.row(2), vec3(0, 0, 9));
    }

    #[test]
    fn row_proxy() {
        let mut m = counting();
        m.row_mut(2)[1] = 80;
        assert_eq!(m[(2, 1)], 80);
        assert_eq!(m.row_mut(2).get(), vec3(7, 80, 9));

        let mut row = m.row_mut(0);
        row.set(vec3(-1, -2, -3));
        row[0] *= 10;
        assert_eq!(m.row(0), vec3(-10, -2, -3));
        assert_eq!(m.column(0), vec3(-10, 4, 7));
    }

    #[test]
    #[should_panic]
    fn row_proxy_out_of_bounds() {
        let mut m = counting();
        let _ = m.row_mut(3);
    }

    #[test]
    fn diagonals() {
        let m = counting();
        assert_eq!(m.diagonal(), vec3(1, 5, 9));
        assert_eq!(m.counter_diagonal(), vec3(3, 5, 7));
    }

    #[test]
    fn set_diagonal_zeroes_the_rest() {
        let mut m = counting();
        m.set_diagonal(vec3(1, 1, 1));
        assert_eq!(m, Mat3x3::IDENTITY);
        assert!(m.is_identity());
    }

    #[test]
    fn set_counter_diagonal_zeroes_the_rest() {
        let mut m = Mat4x4::from_fn(|r, c| (r + c) as i32 + 10);
        m.set_counter_diagonal(vec4(1, 2, 3, 4));
        let expected = Mat4x4::from_rows([
            vec4(0, 0, 0, 1),
            vec4(0, 0, 2, 0),
            vec4(0, 3, 0, 0),
            vec4(4, 0, 0, 0),
        ]);
        assert_eq!(m, expected);
        assert_eq!(m.counter_diagonal(), vec4(1, 2, 3, 4));
    }

    #[test]
    fn transpose() {
        let m = counting();
        assert_eq!(m.transpose().row(0), m.column(0));
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn arithmetic() {
        let a = mat2(1, 2, 3, 4);
        let b = mat2(4, 3, 2, 1);
        assert_eq!(a + b, mat2(5, 5, 5, 5));
        assert_eq!(a - b, mat2(-3, -1, 1, 3));
        assert_eq!(a * 2, mat2(2, 4, 6, 8));
        assert_eq!(2 * a, mat2(2, 4, 6, 8));
        assert_eq!(-a, mat2(-1, -2, -3, -4));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn hadamard() {
        let mut m = mat2(1, 2, 3, 4);
        m.scale(&mat2(2, 0, -1, 1));
        assert_eq!(m, mat2(2, 0, -3, 4));
        assert_eq!(scale(&m, &Mat2x2::IDENTITY), mat2(2, 0, 0, 4));
    }

    #[test]
    fn casting() {
        let m = mat2(1.5f32, -2.5, 3.0, 4.9).cast::<i32>();
        assert_eq!(m, mat2(1, -2, 3, 4));
        assert_eq!(m.cast::<f64>(), mat2(1.0, -2.0, 3.0, 4.0));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Mat3x3::<i32>::default(), Mat3x3::ZERO);
        assert!(Mat4x4::<f32>::default().is_zero());
    }

    #[test]
    fn display() {
        assert_eq!(mat2(1, 3, 2, 4).to_string(), "(1, 2)(3, 4)");
        assert_eq!(
            Mat3x3::<i32>::IDENTITY.to_string(),
            "(1, 0, 0)(0, 1, 0)(0, 0, 1)"
        );
    }

    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", mat2(1, 3, 2, 4)),
            "Mat2x2[\n    [1, 2]\n    [3, 4]\n]"
        );
    }
}

//! Fixed-size vectors.
//!
//! A [`Vector`] is an ordered tuple of `N` scalar components. The
//! aliases [`Vec2`], [`Vec3`], and [`Vec4`] name the supported sizes, and
//! the [`vec2`], [`vec3`], and [`vec4`] functions construct them.
//!
//! Binary geometric operations such as [`dot`], [`cross`], [`angle`], or
//! [`lerp`] are free functions in this module.

use core::array;
use core::fmt::{self, Debug, Display, Formatter};
use core::iter::zip;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub,
    SubAssign,
};

use num_traits::AsPrimitive;

use crate::math::approx::{ApproxEq, components_approx_eq};
#[cfg(feature = "fp")]
use crate::math::float::Float;
use crate::math::format::write_tuple;
use crate::math::num::{Components, Computational, Scalar, Signed};

//
// Types
//

/// A vector of `N` components of type `T`.
///
/// Components are stored in order: x, y, z, w. Equality is exact and
/// component-wise; for approximate comparison, see [`ApproxEq`].
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Vector<T, const N: usize>(pub [T; N]);

/// A 2-vector with components of type `T`.
pub type Vec2<T = f32> = Vector<T, 2>;
/// A 3-vector with components of type `T`.
pub type Vec3<T = f32> = Vector<T, 3>;
/// A 4-vector with components of type `T`.
pub type Vec4<T = f32> = Vector<T, 4>;

//
// Free fns
//

/// Returns a 2-vector with components `x` and `y`.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Returns a 3-vector with components `x`, `y`, and `z`.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Returns a 4-vector with components `x`, `y`, `z`, and `w`.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

/// Returns the dot product of `a` and `b`.
///
/// # Examples
/// ```
/// use ponymath_core::math::vec::{dot, vec3};
///
/// assert_eq!(dot(&vec3(1, 2, 3), &vec3(4, -5, 6)), 12);
/// ```
#[inline]
pub fn dot<T: Scalar, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
) -> T {
    zip(&a.0, &b.0).fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
}

/// Returns the cross product of `a` and `b`.
///
/// The result is perpendicular to both `a` and `b`, following the
/// right-hand rule.
///
/// # Examples
/// ```
/// use ponymath_core::math::vec::{cross, vec3};
///
/// assert_eq!(cross(&vec3(1, 0, 0), &vec3(0, 1, 0)), vec3(0, 0, 1));
/// ```
pub fn cross<T: Scalar>(a: &Vec3<T>, b: &Vec3<T>) -> Vec3<T> {
    let [ax, ay, az] = a.0;
    let [bx, by, bz] = b.0;
    vec3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
}

/// Returns the Euclidean distance between `a` and `b`.
#[cfg(feature = "fp")]
pub fn distance<T: Scalar, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
) -> Computational<T> {
    (a.to_computational() - b.to_computational()).magnitude()
}

/// Returns the squared Euclidean distance between `a` and `b`.
///
/// Each difference is taken as larger minus smaller, so unsigned vectors
/// never underflow.
#[inline]
pub fn distance_squared<T: Scalar, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
) -> T {
    zip(&a.0, &b.0).fold(T::ZERO, |acc, (&a, &b)| {
        let d = if a > b { a - b } else { b - a };
        acc + d * d
    })
}

/// Returns the unsigned angle between `a` and `b` in radians,
/// in the range [0, π].
///
/// The result is NaN if either vector is zero.
///
/// # Examples
/// ```
/// use std::f32::consts::FRAC_PI_2;
/// use ponymath_core::assert_approx_eq;
/// use ponymath_core::math::vec::{angle, vec2};
///
/// assert_approx_eq!(angle(&vec2(2, 0), &vec2(0, 3)), FRAC_PI_2);
/// ```
#[cfg(feature = "fp")]
pub fn angle<T: Scalar, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
) -> Computational<T> {
    let (a, b) = (a.to_computational(), b.to_computational());
    let cos = dot(&a, &b) / (a.magnitude() * b.magnitude());

    // Rounding may take the cosine slightly outside acos's domain
    let (min, max) = (
        <Computational<T> as Signed>::NEG_ONE,
        <Computational<T> as Scalar>::ONE,
    );
    let cos = if cos < min {
        min
    } else if cos > max {
        max
    } else {
        cos
    };
    cos.acos()
}

/// Returns the signed angle from `a` to `b` in radians, in the range [-π, π].
///
/// The angle is positive if the shortest rotation from `a` to `b` is
/// counterclockwise, and negative if it is clockwise.
///
/// # Examples
/// ```
/// use std::f64::consts::FRAC_PI_2;
/// use ponymath_core::assert_approx_eq;
/// use ponymath_core::math::vec::{angle_signed, vec2};
///
/// let (x, y) = (vec2(1.0, 0.0), vec2(0.0, 1.0));
/// assert_approx_eq!(angle_signed(&x, &y), FRAC_PI_2);
/// assert_approx_eq!(angle_signed(&y, &x), -FRAC_PI_2);
/// ```
#[cfg(feature = "fp")]
pub fn angle_signed<T: Scalar>(a: &Vec2<T>, b: &Vec2<T>) -> Computational<T> {
    let unsigned = angle(a, b);
    let ([ax, ay], [bx, by]) = (a.to_computational().0, b.to_computational().0);
    if ax * by - ay * bx < <Computational<T> as Scalar>::ZERO {
        -unsigned
    } else {
        unsigned
    }
}

/// Returns the signed angle from `a` to `b` in radians, in the range [-π, π].
///
/// The angle is positive if the rotation from `a` to `b` is counterclockwise
/// when looking against `axis`, that is, if `cross(a, b)` points the same way
/// as `axis`.
#[cfg(feature = "fp")]
pub fn angle_signed_around<T: Scalar>(
    a: &Vec3<T>,
    b: &Vec3<T>,
    axis: &Vec3<T>,
) -> Computational<T> {
    let unsigned = angle(a, b);
    let normal = cross(&a.to_computational(), &b.to_computational());
    if dot(&normal, &axis.to_computational())
        < <Computational<T> as Scalar>::ZERO
    {
        -unsigned
    } else {
        unsigned
    }
}

/// Returns the vector projection of `v` onto the direction `dir`.
///
/// `dir` must be normalized for the result to be the true projection.
/// If `dir` is zero, returns zero.
///
/// # Examples
/// ```
/// use ponymath_core::math::vec::{project, vec2};
///
/// assert_eq!(project(&vec2(3.0, 4.0), &vec2(1.0, 0.0)), vec2(3.0, 0.0));
/// ```
#[inline]
pub fn project<T: Scalar, const N: usize>(
    v: &Vector<T, N>,
    dir: &Vector<T, N>,
) -> Vector<T, N> {
    *dir * dot(v, dir)
}

/// Returns the projection of `v` onto the plane whose normal is `normal`.
///
/// `normal` must be normalized.
#[inline]
pub fn project_on_plane<T: Scalar, const N: usize>(
    v: &Vector<T, N>,
    normal: &Vector<T, N>,
) -> Vector<T, N> {
    *v - project(v, normal)
}

/// Returns the reflection of `v` off the plane whose normal is `normal`.
///
/// `normal` must be normalized.
///
/// # Examples
/// ```
/// use ponymath_core::math::vec::{reflect, vec2};
///
/// assert_eq!(reflect(&vec2(1, -1), &vec2(0, 1)), vec2(1, 1));
/// ```
#[inline]
pub fn reflect<T: Scalar, const N: usize>(
    v: &Vector<T, N>,
    normal: &Vector<T, N>,
) -> Vector<T, N> {
    let d = dot(v, normal);
    *v - *normal * (d + d)
}

/// Returns the component-wise product of `a` and `b`.
#[inline]
pub fn scale<T: Scalar, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
) -> Vector<T, N> {
    Vector::from_fn(|i| a.0[i] * b.0[i])
}

/// Returns the component-wise minimum of `a` and `b`.
#[inline]
pub fn min<T: Scalar, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
) -> Vector<T, N> {
    Vector::from_fn(|i| if b.0[i] < a.0[i] { b.0[i] } else { a.0[i] })
}

/// Returns the component-wise maximum of `a` and `b`.
#[inline]
pub fn max<T: Scalar, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
) -> Vector<T, N> {
    Vector::from_fn(|i| if b.0[i] > a.0[i] { b.0[i] } else { a.0[i] })
}

/// Returns `v` with each component clamped to the range given by the
/// corresponding components of `min` and `max`.
///
/// # Examples
/// ```
/// use ponymath_core::math::vec::{clamp, vec3};
///
/// let v = clamp(&vec3(-5, 5, 50), &vec3(0, 0, 0), &vec3(10, 10, 10));
/// assert_eq!(v, vec3(0, 5, 10));
/// ```
#[inline]
pub fn clamp<T: Scalar, const N: usize>(
    v: &Vector<T, N>,
    min: &Vector<T, N>,
    max: &Vector<T, N>,
) -> Vector<T, N> {
    Vector::from_fn(|i| {
        let c = v.0[i];
        if c < min.0[i] {
            min.0[i]
        } else if c > max.0[i] {
            max.0[i]
        } else {
            c
        }
    })
}

/// Linearly interpolates between `from` and `to`.
///
/// If `t` = 0, returns `from`; if `t` = 1, returns `to`. The interpolation
/// is done in the computational type and is not clamped: for `t < 0` or
/// `t > 1`, returns the appropriate extrapolated value.
///
/// # Examples
/// ```
/// use ponymath_core::math::vec::{lerp, vec2};
///
/// assert_eq!(lerp(&vec2(6i32, 4), &vec2(2, -3), 0.5), vec2(4, 0));
/// assert_eq!(lerp(&vec2(6i32, 4), &vec2(2, -3), 2.0), vec2(-2, -10));
/// ```
pub fn lerp<T: Scalar, const N: usize>(
    from: &Vector<T, N>,
    to: &Vector<T, N>,
    t: Computational<T>,
) -> Vector<T, N> {
    let (from, to) = (from.to_computational(), to.to_computational());
    Vector::from_fn(|i| {
        T::from_computational(from.0[i] + (to.0[i] - from.0[i]) * t)
    })
}

//
// Inherent impls
//

impl<T, const N: usize> Vector<T, N> {
    /// Returns a vector with the given components.
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        Self(components)
    }

    /// Returns a vector with each component initialized to `c`.
    #[inline]
    pub fn splat(c: T) -> Self
    where
        T: Copy,
    {
        Self([c; N])
    }

    /// Returns a vector whose `i`th component is `f(i)`.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self(array::from_fn(f))
    }

    /// Returns a vector whose components are the results of applying `f`
    /// to the components of `self`.
    #[inline]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }

    /// Returns a reference to the components of `self` as an array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns the components of `self` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns the components of `self` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// The dimension of the vector.
    pub const DIM: usize = N;
    /// The number of components.
    pub const COMPONENT_COUNT: usize = N;

    /// Returns `self` converted to its computational type.
    #[inline]
    pub fn to_computational(&self) -> Vector<Computational<T>, N> {
        self.map(Scalar::to_computational)
    }

    /// Returns `self` with each component cast to `U` like the `as`
    /// operator does.
    ///
    /// # Examples
    /// ```
    /// use ponymath_core::math::vec3;
    ///
    /// assert_eq!(vec3(1.9, -2.5, 3.0).cast::<i32>(), vec3(1, -2, 3));
    /// assert_eq!(vec3(1, 2, 3).cast::<f64>(), vec3(1.0, 2.0, 3.0));
    /// ```
    #[inline]
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(AsPrimitive::as_)
    }

    /// Returns the length of `self`, computed in the computational type.
    ///
    /// # Examples
    /// ```
    /// use ponymath_core::math::vec2;
    ///
    /// assert_eq!(vec2(3, 4).magnitude(), 5.0f32);
    /// ```
    #[cfg(feature = "fp")]
    #[inline]
    pub fn magnitude(&self) -> Computational<T> {
        let c = self.to_computational();
        dot(&c, &c).sqrt()
    }

    /// Returns the squared length of `self`. Exact for integer vectors.
    #[inline]
    pub fn magnitude_squared(&self) -> T {
        dot(self, self)
    }

    /// Returns the smallest component of `self`.
    pub fn min(&self) -> T {
        self.min_max().0
    }

    /// Returns the largest component of `self`.
    pub fn max(&self) -> T {
        self.min_max().1
    }

    /// Returns the smallest and the largest component of `self`.
    pub fn min_max(&self) -> (T, T) {
        let first = self.0[0];
        self.0[1..].iter().fold((first, first), |(min, max), &c| {
            (if c < min { c } else { min }, if c > max { c } else { max })
        })
    }

    /// Returns the sum of the components of `self`.
    #[inline]
    pub fn sum(&self) -> T {
        self.0.iter().fold(T::ZERO, |acc, &c| acc + c)
    }

    /// Returns `self` divided by its magnitude.
    ///
    /// The division happens in the computational type, so normalizing an
    /// integer vector truncates the result. Normalizing a zero vector
    /// gives NaN components (zero for integer vectors).
    ///
    /// # Examples
    /// ```
    /// use ponymath_core::math::vec3;
    ///
    /// assert_eq!(vec3(0.0, -4.0, 0.0).normalized(), vec3(0.0, -1.0, 0.0));
    /// ```
    #[cfg(feature = "fp")]
    #[must_use]
    pub fn normalized(&self) -> Self {
        let c = self.to_computational();
        let len = dot(&c, &c).sqrt();
        c.map(|x| T::from_computational(x / len))
    }

    /// Divides `self` by its magnitude in place.
    ///
    /// See [`Self::normalized`].
    #[cfg(feature = "fp")]
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns `self` with its components in reverse order.
    ///
    /// # Examples
    /// ```
    /// use ponymath_core::math::{vec2, vec3, vec4};
    ///
    /// assert_eq!(vec2(1, 2).swapped(), vec2(2, 1));
    /// assert_eq!(vec3(1, 2, 3).swapped(), vec3(3, 2, 1));
    /// assert_eq!(vec4(1, 2, 3, 4).swapped(), vec4(4, 3, 2, 1));
    /// ```
    #[must_use]
    #[inline]
    pub fn swapped(&self) -> Self {
        let mut res = *self;
        res.swap();
        res
    }

    /// Reverses the order of the components of `self` in place.
    #[inline]
    pub fn swap(&mut self) {
        self.0.reverse();
    }

    /// Multiplies `self` component-wise by `other` in place.
    #[inline]
    pub fn scale(&mut self, other: &Self) {
        *self = scale(self, other);
    }

    /// Overwrites all components of `self`.
    #[inline]
    pub fn set(&mut self, components: [T; N]) {
        self.0 = components;
    }

    /// Returns whether every component of `self` equals zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == T::ZERO)
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

    /// Returns whether the magnitude of `self` is exactly one.
    pub fn is_unit(&self) -> bool {
        self.magnitude_squared() == T::ONE
    }

    /// Returns whether the magnitude of `self` is approximately one,
    /// using the default epsilon.
    pub fn is_almost_unit(&self) -> bool {
        self.is_almost_unit_eps(Self::relative_epsilon())
    }

    /// Returns whether the magnitude of `self` is approximately one,
    /// using the epsilon `eps`.
    ///
    /// Without the `fp` feature, the squared magnitude is compared with one
    /// using `2 * eps`, its first-order equivalent near one.
    pub fn is_almost_unit_eps(&self, eps: Computational<T>) -> bool {
        let one = <Computational<T> as Scalar>::ONE;
        #[cfg(feature = "fp")]
        {
            self.magnitude().approx_eq_eps(&one, &eps)
        }
        #[cfg(not(feature = "fp"))]
        {
            let c = self.to_computational();
            dot(&c, &c).approx_eq_eps(&one, &(eps + eps))
        }
    }

    /// Returns whether all components of `self` are equal.
    pub fn is_uniform(&self) -> bool {
        self.0.iter().all(|&c| c == self.0[0])
    }

    /// Returns whether all components of `self` are approximately equal,
    /// using the default epsilon.
    pub fn is_almost_uniform(&self) -> bool {
        self.is_almost_uniform_eps(Self::relative_epsilon())
    }

    /// Returns whether all components of `self` are approximately equal,
    /// using the epsilon `eps`.
    pub fn is_almost_uniform_eps(&self, eps: Computational<T>) -> bool {
        let first = self.0[0].to_computational();
        self.0
            .iter()
            .all(|c| c.to_computational().approx_eq_eps(&first, &eps))
    }

    /// Returns whether no component of `self` is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|&c| c.is_finite())
    }
}

macro_rules! impl_accessors {
    ($n:literal: $($get:ident, $get_mut:ident = $i:literal;)+) => {
        impl<T: Copy> Vector<T, $n> {
            $(
                #[doc = concat!("Returns the ", stringify!($get), " component of `self`.")]
                #[inline]
                pub const fn $get(&self) -> T {
                    self.0[$i]
                }
                #[doc = concat!(
                    "Returns a mutable reference to the ",
                    stringify!($get),
                    " component of `self`."
                )]
                #[inline]
                pub fn $get_mut(&mut self) -> &mut T {
                    &mut self.0[$i]
                }
            )+
        }
    };
}

impl_accessors!(2: x, x_mut = 0; y, y_mut = 1;);
impl_accessors!(3: x, x_mut = 0; y, y_mut = 1; z, z_mut = 2;);
impl_accessors!(4: x, x_mut = 0; y, y_mut = 1; z, z_mut = 2; w, w_mut = 3;);

//
// Local trait impls
//

impl<T: Scalar, const N: usize> Components for Vector<T, N> {
    type Scalar = T;

    const DIM: usize = N;
    const COMPONENT_COUNT: usize = N;

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T: Scalar, const N: usize> ApproxEq<Self, Computational<T>>
    for Vector<T, N>
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

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    /// Returns the zero vector.
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Display, const N: usize> Display for Vector<T, N> {
    /// Formats `self` as `(x, y, …)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.0)
    }
}

impl<T: Debug, const N: usize> Debug for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{}", N)?;
        Debug::fmt(&self.0, f)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self(components)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    /// Returns a reference to the `i`th component of `self`.
    ///
    /// # Panics
    /// If `i >= N`.
    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    /// Returns a mutable reference to the `i`th component of `self`.
    ///
    /// # Panics
    /// If `i >= N`.
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        zip(&mut self.0, rhs.0).for_each(|(s, r)| *s += r);
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        zip(&mut self.0, rhs.0).for_each(|(s, r)| *s -= r);
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|s| *s *= rhs);
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    /// Divides each component of `self` by `rhs`.
    ///
    /// For integer vectors the division truncates, and panics if `rhs` is
    /// zero.
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|s| *s /= rhs);
    }
}

impl<T: Signed, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}

impl_op!(Add::add, Vector, Vector<T, N>, +=);
impl_op!(Sub::sub, Vector, Vector<T, N>, -=);
impl_op!(Mul::mul, Vector, T, *=);
impl_op!(Div::div, Vector, T, /=);

impl_scalar_lhs_mul!(Vector:
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

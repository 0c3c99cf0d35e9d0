//! Core functionality of the `ponymath` project.
//!
//! A small, generic linear algebra library: vectors with two to four
//! components and square matrices of dimension two to four, generic over
//! both integer and floating-point scalar types.
//!
//! ```
//! use ponymath_core::prelude::*;
//!
//! let m = mat3(10, -15, 3, 5, -20, 33, 6, 7, 19);
//! assert_eq!(m.determinant(), -7190);
//!
//! let inv: Mat3x3<f32> = m.inverse();
//! assert!((m.cast::<f32>() * inv).is_almost_identity_eps(1e-5));
//! ```
//!
//! # Crate features
//!
//! * `std`:
//!   Makes available items requiring floating-point functions not included
//!   in `core`: square roots and inverse trigonometric functions. Needed by
//!   vector magnitudes, normalization, distances, and angles.
//!
//!   If this feature is disabled, the crate only depends on `core`.
//!
//! * `fp`:
//!   Enables the items above without picking a backend. On its own it uses
//!   portable fallback implementations; `std` and `libm` both imply it.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate, for use in `no_std`
//!   environments.
//!
//! The `std` feature is enabled by default.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
extern crate alloc;

pub mod math;

pub mod prelude {
    pub use crate::math::{
        ApproxEq, Computational, Scalar, Signed,
        mat::{Mat2x2, Mat3x3, Mat4x4, Matrix, mat2, mat3, mat4},
        vec::{Vec2, Vec3, Vec4, Vector, cross, dot, lerp, vec2, vec3, vec4},
    };
}

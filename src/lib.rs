//!
//! Gfxmath is a small linear algebra library for real-time graphics.
//!
//! It provides 2, 3 and 4 component vectors, rotation quaternions and 3x3/4x4
//! matrices together with the usual transforms: rotation, scale, translation,
//! projection and look-at view matrices.
//!
//! All matrices are row-major and vectors are treated as rows. A point is
//! transformed as `v * M` and `A * B` applies `A` first, then `B`.
//!
//! ```
//! use gfxmath::{Mat4, Vec3};
//!
//! let m = Mat4::rotation(90.0, Vec3::new(0.0, 0.0, 1.0)).translate(1.0, 0.0, 0.0);
//! assert_eq!(m.transform_vec3(Vec3::ZERO), Vec3::new(0.0, 1.0, 0.0));
//! ```
//!
//! Equality is approximate everywhere, see [`EPSILON`]. Enable the `f32` feature
//! to build everything on single precision scalars.

pub mod codec;
pub mod error;
pub mod scalar;

mod mat3;
mod mat4;
mod quat;
mod vec2;
mod vec3;
mod vec4;

pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quat;
pub use scalar::{EPSILON, Scalar, approx_eq, is_near_zero};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

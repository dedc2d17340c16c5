//! Rotation quaternion
//!
//! A [`Quat`] stores `(sin(θ/2)·axis, cos(θ/2))` as `x, y, z, w`. Most operations
//! assume unit length without checking it; use [`Quat::normalize`] after
//! accumulating many products.
//!
//! Composition follows the row-vector convention used by the matrices in this
//! crate: `a * b` rotates by `a` first, then by `b`, exactly like
//! `Mat3::from_quat(a) * Mat3::from_quat(b)`.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::scalar::{Scalar, approx_eq, is_near_zero, write_components};
use crate::{Mat3, Mat4, Vec3, Vec4};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
#[repr(C)]
pub struct Quat {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
    pub w: Scalar,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Quat = Quat::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Self {
        Self { x, y, z, w }
    }

    pub fn set(&mut self, x: Scalar, y: Scalar, z: Scalar, w: Scalar) {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
    }

    pub const fn from_array(array: [Scalar; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }

    pub const fn to_array(self) -> [Scalar; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub const fn from_vec4(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    pub const fn to_vec4(self) -> Vec4 {
        Vec4::from_quat(self)
    }

    /// Builds a quaternion from its vector part and `w`
    pub const fn from_vector(v: Vec3, w: Scalar) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// The `x, y, z` part
    pub const fn vector(self) -> Vec3 {
        Vec3::from_quat(self)
    }

    pub fn get(&self, index: usize) -> Option<Scalar> {
        self.to_vec4().get(index)
    }

    pub fn length_squared(self) -> Scalar {
        self.to_vec4().length_squared()
    }

    pub fn length(self) -> Scalar {
        self.to_vec4().length()
    }

    pub fn normalize(self) -> Self {
        Self::from_vec4(self.to_vec4().normalize())
    }

    pub fn dot(self, other: Quat) -> Scalar {
        self.to_vec4().dot(other.to_vec4())
    }

    /// Returns `None` when `divisor` is zero
    pub fn divide(self, divisor: Scalar) -> Option<Self> {
        if divisor == 0.0 {
            debug!("Quat {self} divided by zero");
            return None;
        }
        Some(self * (1.0 / divisor))
    }

    /// Conjugate of this quaternion.
    ///
    /// This is only the inverse rotation for unit quaternions, the general
    /// inverse would also divide by the squared length.
    pub fn inverse(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Quaternion product: rotates by `self` first, then by `other`.
    ///
    /// `w = w1*w2 - v1·v2`, `v = v2*w1 + v1*w2 + v2 × v1`
    pub fn multiply(self, other: Quat) -> Self {
        let lv = self.vector();
        let rv = other.vector();
        let w = self.w * other.w - lv.dot(rv);
        let v = rv * self.w + lv * other.w + rv.cross(lv);
        Self::from_vector(v, w)
    }

    /// Rotates `v`, same result as the vector part of `q·(v, 0)·q⁻¹`
    pub fn rotate_vec3(self, v: Vec3) -> Vec3 {
        let u = self.vector();
        let uv = u.cross(v);
        let uuv = u.cross(uv);
        v + uv * (2.0 * self.w) + uuv * 2.0
    }

    /// Rotation of `angle` degrees around `axis`, the axis does not need to be normalized
    pub fn from_angle_axis(angle: Scalar, axis: Vec3) -> Self {
        let half = angle.to_radians() * 0.5;
        let (sin, cos) = half.sin_cos();
        Self::from_vector(axis.normalize() * sin, cos)
    }

    /// Extracts the rotation of an orthonormal matrix.
    ///
    /// Uses the trace when it is positive. Otherwise the pivot is `m[8]` if it
    /// is greater than `m[0]`, else `m[4]` if that is greater than `m[0]`, else
    /// `m[0]`. This is not always the largest diagonal element: `m[8]` wins over
    /// a larger `m[4]`, and ties keep `m[0]`.
    pub fn from_mat3(mat: &Mat3) -> Self {
        let m = &mat.m;
        let trace = m[0] + m[4] + m[8];
        if trace > 0.0 {
            let r = (trace + 1.0).sqrt();
            let w = r * 0.5;
            let r = 0.5 / r;
            return Self::new((m[5] - m[7]) * r, (m[6] - m[2]) * r, (m[1] - m[3]) * r, w);
        }

        let index = if m[8] > m[0] {
            2
        } else if m[4] > m[0] {
            1
        } else {
            0
        };

        let diagonal = match index {
            0 => m[0] - (m[4] + m[8]),
            1 => m[4] - (m[8] + m[0]),
            _ => m[8] - (m[0] + m[4]),
        };
        let mut r = (diagonal + 1.0).sqrt();
        let pivot = r * 0.5;
        // a zero pivot keeps r as computed
        if !is_near_zero(r) {
            r = 0.5 / r;
        }

        match index {
            0 => Self::new(
                pivot,
                (m[3] + m[1]) * r,
                (m[6] + m[2]) * r,
                (m[5] - m[7]) * r,
            ),
            1 => Self::new(
                (m[3] + m[1]) * r,
                pivot,
                (m[7] + m[5]) * r,
                (m[6] - m[2]) * r,
            ),
            _ => Self::new(
                (m[6] + m[2]) * r,
                (m[7] + m[5]) * r,
                pivot,
                (m[1] - m[3]) * r,
            ),
        }
    }

    /// Extracts the rotation of the upper 3x3 block
    pub fn from_mat4(mat: &Mat4) -> Self {
        Self::from_mat3(&mat.to_mat3())
    }

    /// Spherical interpolation from `from` to `to`, taking the shorter arc.
    ///
    /// `t` is clamped to `[0, 1]`. The scale factors are divided by `sin(dot)`
    /// rather than `sin(acos(dot))`, so the result is not of unit length and
    /// should be normalized when a rotation is needed. Its direction is the
    /// textbook slerp. Identical inputs (`dot == 1`) give the zero quaternion and
    /// orthogonal inputs (`dot == 0`) divide by zero.
    pub fn slerp(from: Quat, to: Quat, t: Scalar) -> Self {
        let mut dot = from.dot(to);
        let mut to = to;
        if dot < 0.0 {
            dot = -dot;
            to = -to;
        }

        let t = t.clamp(0.0, 1.0);
        // rounding can push the dot product of unit quaternions just above one
        let angle = dot.min(1.0).acos();
        let inverse_sin = 1.0 / dot.sin();

        let scale0 = ((1.0 - t) * angle).sin() * inverse_sin;
        let scale1 = (t * angle).sin() * inverse_sin;
        from * scale0 + to * scale1
    }
}

impl PartialEq for Quat {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x)
            && approx_eq(self.y, other.y)
            && approx_eq(self.z, other.z)
            && approx_eq(self.w, other.w)
    }
}

impl From<[Scalar; 4]> for Quat {
    fn from(array: [Scalar; 4]) -> Self {
        Self::from_array(array)
    }
}

impl From<Quat> for [Scalar; 4] {
    fn from(q: Quat) -> Self {
        q.to_array()
    }
}

impl From<Vec4> for Quat {
    fn from(v: Vec4) -> Self {
        Self::from_vec4(v)
    }
}

impl From<Quat> for Vec4 {
    fn from(q: Quat) -> Self {
        q.to_vec4()
    }
}

impl Index<usize> for Quat {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Scalar {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index {index} out of range for Quat"),
        }
    }
}

impl IndexMut<usize> for Quat {
    fn index_mut(&mut self, index: usize) -> &mut Scalar {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index {index} out of range for Quat"),
        }
    }
}

impl Add for Quat {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::from_vec4(self.to_vec4() + other.to_vec4())
    }
}

impl AddAssign for Quat {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Quat {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::from_vec4(self.to_vec4() - other.to_vec4())
    }
}

impl SubAssign for Quat {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<Scalar> for Quat {
    type Output = Self;
    fn mul(self, s: Scalar) -> Self {
        Self::from_vec4(self.to_vec4() * s)
    }
}

impl MulAssign<Scalar> for Quat {
    fn mul_assign(&mut self, s: Scalar) {
        *self = *self * s;
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        self.multiply(other)
    }
}

impl MulAssign for Quat {
    fn mul_assign(&mut self, other: Self) {
        *self = self.multiply(other);
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 {
        self.rotate_vec3(v)
    }
}

impl Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &self.to_array())
    }
}

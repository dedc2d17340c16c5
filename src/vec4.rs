//! 4 component vector
//!
//! `w` is a free component. By convention it is the homogeneous coordinate when a
//! [`Vec4`] is multiplied with a [`Mat4`](crate::Mat4).

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::scalar::{Scalar, approx_eq, guarded_recip, write_components};
use crate::{Quat, Vec3};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
#[repr(C)]
pub struct Vec4 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
    pub w: Scalar,
}

impl Vec4 {
    pub const ZERO: Vec4 = Vec4::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
    /// `(0, 0, 0, 1)`, the origin as a homogeneous point
    pub const IDENTITY: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

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

    /// Same components, reinterpreted as a plain vector
    pub const fn from_quat(q: Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }

    /// Drops the `w` component
    pub const fn truncate(self) -> Vec3 {
        Vec3::from_vec4(self)
    }

    pub fn get(&self, index: usize) -> Option<Scalar> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            3 => Some(self.w),
            _ => None,
        }
    }

    pub fn length_squared(self) -> Scalar {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    pub fn length(self) -> Scalar {
        self.length_squared().sqrt()
    }

    /// Scales to unit length, the zero vector stays zero
    pub fn normalize(self) -> Self {
        let mut mag = self.length();
        if mag != 0.0 {
            mag = 1.0 / mag;
        }
        self * mag
    }

    /// Component-wise reciprocal, zero components are passed through
    pub fn inverse(self) -> Self {
        Self::new(
            guarded_recip(self.x),
            guarded_recip(self.y),
            guarded_recip(self.z),
            guarded_recip(self.w),
        )
    }

    /// Returns `None` when `divisor` is zero
    pub fn divide(self, divisor: Scalar) -> Option<Self> {
        if divisor == 0.0 {
            debug!("Vec4 {self} divided by zero");
            return None;
        }
        Some(self * (1.0 / divisor))
    }

    pub fn dot(self, other: Vec4) -> Scalar {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn project(self, normal: Vec4) -> Self {
        normal * self.dot(normal)
    }

    pub fn reflect(self, normal: Vec4) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }
}

impl PartialEq for Vec4 {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x)
            && approx_eq(self.y, other.y)
            && approx_eq(self.z, other.z)
            && approx_eq(self.w, other.w)
    }
}

impl From<[Scalar; 4]> for Vec4 {
    fn from(array: [Scalar; 4]) -> Self {
        Self::from_array(array)
    }
}

impl From<Vec4> for [Scalar; 4] {
    fn from(v: Vec4) -> Self {
        v.to_array()
    }
}

impl Index<usize> for Vec4 {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Scalar {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index {index} out of range for Vec4"),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    fn index_mut(&mut self, index: usize) -> &mut Scalar {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index {index} out of range for Vec4"),
        }
    }
}

impl Add for Vec4 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl AddAssign for Vec4 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vec4 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl SubAssign for Vec4 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul for Vec4 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }
}

impl Mul<Scalar> for Vec4 {
    type Output = Self;
    fn mul(self, s: Scalar) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl MulAssign<Scalar> for Vec4 {
    fn mul_assign(&mut self, s: Scalar) {
        *self = *self * s;
    }
}

impl Neg for Vec4 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &self.to_array())
    }
}

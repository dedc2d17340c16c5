//! 3 component vector
//!
//! Used for positions, directions and normals. The vector part of a [`Quat`] and
//! the first three components of a [`Vec4`] can be taken out explicitly with
//! [`Vec3::from_quat`] and [`Vec3::from_vec4`], there is no implicit aliasing
//! between these types.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::scalar::{Scalar, approx_eq, guarded_recip, write_components};
use crate::{Quat, Vec4};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
#[repr(C)]
pub struct Vec3 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    pub fn set(&mut self, x: Scalar, y: Scalar, z: Scalar) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    pub const fn from_array(array: [Scalar; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }

    pub const fn to_array(self) -> [Scalar; 3] {
        [self.x, self.y, self.z]
    }

    /// Takes the `x`, `y` and `z` components, dropping `w`
    pub const fn from_vec4(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Takes the vector (imaginary) part of a quaternion
    pub const fn from_quat(q: Quat) -> Self {
        Self::new(q.x, q.y, q.z)
    }

    /// Extends this vector with a `w` component
    pub const fn extend(self, w: Scalar) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Range checked component access
    pub fn get(&self, index: usize) -> Option<Scalar> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    /// Squared length, useful when the actual magnitude is not needed
    pub fn length_squared(self) -> Scalar {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn length(self) -> Scalar {
        self.length_squared().sqrt()
    }

    /// Scales this vector to unit length.
    ///
    /// A vector of length zero is scaled by zero, so the result is the zero vector
    /// and never NaN.
    pub fn normalize(self) -> Self {
        let mut mag = self.length();
        if mag != 0.0 {
            mag = 1.0 / mag;
        }
        self * mag
    }

    /// Component-wise reciprocal. Components that are exactly zero are passed through.
    pub fn inverse(self) -> Self {
        Self::new(
            guarded_recip(self.x),
            guarded_recip(self.y),
            guarded_recip(self.z),
        )
    }

    /// Divides every component by `divisor`.
    ///
    /// Returns `None` when `divisor` is zero.
    pub fn divide(self, divisor: Scalar) -> Option<Self> {
        if divisor == 0.0 {
            debug!("Vec3 {self} divided by zero");
            return None;
        }
        Some(self * (1.0 / divisor))
    }

    pub fn dot(self, other: Vec3) -> Scalar {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`
    pub fn cross(self, other: Vec3) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Projects this vector onto `normal`, which is expected to be of unit length
    pub fn project(self, normal: Vec3) -> Self {
        normal * self.dot(normal)
    }

    /// Reflects this vector off a plane with the given unit `normal`
    pub fn reflect(self, normal: Vec3) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }
}

impl PartialEq for Vec3 {
    /// Component-wise comparison within [`EPSILON`](crate::EPSILON)
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y) && approx_eq(self.z, other.z)
    }
}

impl From<[Scalar; 3]> for Vec3 {
    fn from(array: [Scalar; 3]) -> Self {
        Self::from_array(array)
    }
}

impl From<Vec3> for [Scalar; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl Index<usize> for Vec3 {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Scalar {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index {index} out of range for Vec3"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut Scalar {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index {index} out of range for Vec3"),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

/// Component-wise multiplication
impl Mul for Vec3 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

impl Mul<Scalar> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: Scalar) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl MulAssign<Scalar> for Vec3 {
    fn mul_assign(&mut self, scalar: Scalar) {
        *self = *self * scalar;
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &self.to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::EPSILON;
    use fake::{Fake, Faker};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_vec3_operations() {
        let v1 = Vec3::new(1.0, 2.0, 3.0);
        let v2 = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(v1 + v2, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(v1 - v2, Vec3::new(-3.0, -3.0, -3.0));
        assert_eq!(v1 * v2, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(v1 * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(-v1, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(v1.dot(v2), 32.0);
        assert_eq!(v1.length_squared(), 14.0);
        assert_eq!(v1.length(), (14.0 as Scalar).sqrt());
    }

    #[test]
    fn test_assign_operators() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v += v;
        assert_eq!(v, Vec3::new(2.0, 4.0, 6.0));
        v -= Vec3::ONE;
        assert_eq!(v, Vec3::new(1.0, 3.0, 5.0));
        v *= -1.0;
        assert_eq!(v, Vec3::new(-1.0, -3.0, -5.0));
        v.set(7.0, 8.0, 9.0);
        assert_eq!(v, Vec3::new(7.0, 8.0, 9.0));
    }

    #[test]
    fn test_cross() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);
        assert_eq!(y.cross(x), -z);
        assert_eq!(
            Vec3::new(1.0, 2.0, 3.0).cross(Vec3::new(4.0, 5.0, 6.0)),
            Vec3::new(-3.0, 6.0, -3.0)
        );
    }

    #[test]
    fn test_normalize() {
        let v = Vec3::new(-1.0, 3.0, 5.0).normalize();
        assert!((v.length() - 1.0).abs() < EPSILON);

        let zero = Vec3::ZERO.normalize();
        assert!(!zero.x.is_nan() && !zero.y.is_nan() && !zero.z.is_nan());
        assert_eq!(zero, Vec3::ZERO);
    }

    #[test]
    fn test_inverse_passes_zero_through() {
        let v = Vec3::new(2.0, 0.0, -4.0).inverse();
        assert_eq!(v, Vec3::new(0.5, 0.0, -0.25));
        assert!(v.y.is_finite());
    }

    #[test]
    fn test_divide() {
        let v = Vec3::new(2.0, 4.0, 8.0);
        assert_eq!(v.divide(2.0), Some(Vec3::new(1.0, 2.0, 4.0)));
        assert_eq!(v.divide(0.0), None);
        assert_eq!(v.divide(-0.0), None);
    }

    #[test]
    fn test_project_reflect() {
        let up = Vec3::new(0.0, 1.0, 0.0);
        let v = Vec3::new(3.0, -2.0, 1.0);
        assert_eq!(v.project(up), Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(v.reflect(up), Vec3::new(3.0, 2.0, 1.0));
    }

    #[test]
    fn test_equality_uses_epsilon() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v, Vec3::new(1.0 + EPSILON / 2.0, 2.0, 3.0));
        assert_ne!(v, Vec3::new(1.0 + EPSILON * 2.0, 2.0, 3.0));
    }

    #[test]
    fn test_conversions() {
        let v4 = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Vec3::from_vec4(v4), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).extend(4.0), v4);
        let q = Quat::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(Vec3::from_quat(q), Vec3::new(5.0, 6.0, 7.0));
        let array: [Scalar; 3] = Vec3::new(1.0, 2.0, 3.0).into();
        assert_eq!(array, [1.0, 2.0, 3.0]);
        assert_eq!(Vec3::from([1.0, 2.0, 3.0]), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_index() {
        let mut v: Vec3 = Faker.fake();
        assert_eq!(v[0], v.x);
        assert_eq!(v[2], v.z);
        v[1] = 42.0;
        assert_eq!(v.y, 42.0);
        assert_eq!(v.get(1), Some(42.0));
        assert_eq!(v.get(3), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range() {
        let v = Vec3::ZERO;
        let _ = v[3];
    }

    #[test]
    fn test_display() {
        let v = Vec3::new(1.0, -2.5, 3.0);
        assert_eq!(format!("{v}"), "{ 1.000000, -2.500000, 3.000000 }");
        assert_eq!(format!("{v:.1}"), "{ 1.0, -2.5, 3.0 }");
    }
}

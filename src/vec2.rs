//! 2 component vector

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::scalar::{Scalar, approx_eq, guarded_recip, write_components};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
#[repr(C)]
pub struct Vec2 {
    pub x: Scalar,
    pub y: Scalar,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);
    pub const ONE: Vec2 = Vec2::new(1.0, 1.0);

    pub const fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    pub fn set(&mut self, x: Scalar, y: Scalar) {
        self.x = x;
        self.y = y;
    }

    pub const fn from_array(array: [Scalar; 2]) -> Self {
        Self::new(array[0], array[1])
    }

    pub const fn to_array(self) -> [Scalar; 2] {
        [self.x, self.y]
    }

    pub fn get(&self, index: usize) -> Option<Scalar> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            _ => None,
        }
    }

    pub fn length_squared(self) -> Scalar {
        self.x * self.x + self.y * self.y
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
        Self::new(guarded_recip(self.x), guarded_recip(self.y))
    }

    /// Returns `None` when `divisor` is zero
    pub fn divide(self, divisor: Scalar) -> Option<Self> {
        if divisor == 0.0 {
            debug!("Vec2 {self} divided by zero");
            return None;
        }
        Some(self * (1.0 / divisor))
    }

    pub fn dot(self, other: Vec2) -> Scalar {
        self.x * other.x + self.y * other.y
    }

    pub fn project(self, normal: Vec2) -> Self {
        normal * self.dot(normal)
    }

    pub fn reflect(self, normal: Vec2) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }
}

impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

impl From<[Scalar; 2]> for Vec2 {
    fn from(array: [Scalar; 2]) -> Self {
        Self::from_array(array)
    }
}

impl From<Vec2> for [Scalar; 2] {
    fn from(v: Vec2) -> Self {
        v.to_array()
    }
}

impl Index<usize> for Vec2 {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Scalar {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index {index} out of range for Vec2"),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    fn index_mut(&mut self, index: usize) -> &mut Scalar {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index {index} out of range for Vec2"),
        }
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul for Vec2 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }
}

impl Mul<Scalar> for Vec2 {
    type Output = Self;
    fn mul(self, s: Scalar) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl MulAssign<Scalar> for Vec2 {
    fn mul_assign(&mut self, s: Scalar) {
        *self = *self * s;
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &self.to_array())
    }
}

//! 3x3 rotation and scale matrix
//!
//! Storage is row-major and vectors are treated as rows, so a vector is
//! transformed as `v * M` and `A * B` applies `A` first, then `B`.
//!
//! Layout:
//! ```text
//! [ m[0] m[1] m[2] ]   row 0, the x axis image
//! [ m[3] m[4] m[5] ]   row 1, the y axis image
//! [ m[6] m[7] m[8] ]   row 2, the z axis image
//! ```

use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::scalar::{Scalar, approx_eq, is_near_zero, write_rows};
use crate::{Mat4, Quat, Vec3};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(C)]
pub struct Mat3 {
    /// Row-major matrix data
    pub m: [Scalar; 9],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);

    /// Create a new matrix with explicit values (row-major order)
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m0: Scalar,
        m1: Scalar,
        m2: Scalar,
        m3: Scalar,
        m4: Scalar,
        m5: Scalar,
        m6: Scalar,
        m7: Scalar,
        m8: Scalar,
    ) -> Self {
        Self {
            m: [m0, m1, m2, m3, m4, m5, m6, m7, m8],
        }
    }

    pub const fn from_array(m: [Scalar; 9]) -> Self {
        Self { m }
    }

    pub const fn to_array(self) -> [Scalar; 9] {
        self.m
    }

    pub const fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self::new(r0.x, r0.y, r0.z, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z)
    }

    /// Rotation matrix equivalent to a unit quaternion, `q * v == v * Mat3::from_quat(q)`
    pub fn from_quat(q: Quat) -> Self {
        let tx = 2.0 * q.x;
        let ty = 2.0 * q.y;
        let tz = 2.0 * q.z;
        let xx = tx * q.x;
        let xy = tx * q.y;
        let xz = tx * q.z;
        let yy = ty * q.y;
        let yz = tz * q.y;
        let zz = tz * q.z;
        let wx = tx * q.w;
        let wy = ty * q.w;
        let wz = tz * q.w;

        Self::new(
            1.0 - (yy + zz),
            xy + wz,
            xz - wy,
            xy - wz,
            1.0 - (xx + zz),
            yz + wx,
            xz + wy,
            yz - wx,
            1.0 - (xx + yy),
        )
    }

    /// Rotation of `angle` degrees around `axis` (Rodrigues).
    ///
    /// The axis is used as given and should be of unit length.
    pub fn rotation(angle: Scalar, axis: Vec3) -> Self {
        let (s, c) = angle.to_radians().sin_cos();
        let ic = 1.0 - c;
        let Vec3 { x, y, z } = axis;
        let xy = x * y * ic;
        let yz = y * z * ic;
        let xz = x * z * ic;
        let xs = s * x;
        let ys = s * y;
        let zs = s * z;

        Self::new(
            x * x * ic + c,
            xy + zs,
            xz - ys,
            xy - zs,
            y * y * ic + c,
            yz + xs,
            xz + ys,
            yz - xs,
            z * z * ic + c,
        )
    }

    /// Upper left 3x3 block of `mat`
    pub fn from_mat4(mat: &Mat4) -> Self {
        mat.to_mat3()
    }

    /// Embeds this matrix into a 4x4 matrix without translation
    pub const fn to_mat4(self) -> Mat4 {
        let m = self.m;
        Mat4::new(
            m[0], m[1], m[2], 0.0, m[3], m[4], m[5], 0.0, m[6], m[7], m[8], 0.0, 0.0, 0.0, 0.0,
            1.0,
        )
    }

    pub fn transpose(self) -> Self {
        let m = self.m;
        Self::new(m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8])
    }

    /// Scales the columns by `x`, `y` and `z`
    pub fn scale(self, x: Scalar, y: Scalar, z: Scalar) -> Self {
        let m = self.m;
        Self::new(
            m[0] * x,
            m[1] * y,
            m[2] * z,
            m[3] * x,
            m[4] * y,
            m[5] * z,
            m[6] * x,
            m[7] * y,
            m[8] * z,
        )
    }

    /// Matrix product `self * other`, applies `self` first
    pub fn multiply(self, other: Mat3) -> Self {
        let mut result: [Scalar; 9] = [0.0; 9];
        for (i, cell) in result.iter_mut().enumerate() {
            let (row, col) = (i / 3, i % 3);
            *cell = self.m[row * 3] * other.m[col]
                + self.m[row * 3 + 1] * other.m[3 + col]
                + self.m[row * 3 + 2] * other.m[6 + col];
        }
        Self { m: result }
    }

    /// Transforms `v` as a row vector, `v * self`
    pub fn rotate_vec3(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            v.x * m[0] + v.y * m[3] + v.z * m[6],
            v.x * m[1] + v.y * m[4] + v.z * m[7],
            v.x * m[2] + v.y * m[5] + v.z * m[8],
        )
    }

    /// Transforms `v` by the transpose, which undoes [`Mat3::rotate_vec3`]
    /// only when this matrix is orthogonal
    pub fn inverse_rotate_vec3(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0] * v.x + m[1] * v.y + m[2] * v.z,
            m[3] * v.x + m[4] * v.y + m[5] * v.z,
            m[6] * v.x + m[7] * v.y + m[8] * v.z,
        )
    }

    pub fn cofactor(&self) -> Self {
        let m = &self.m;
        Self::new(
            m[4] * m[8] - m[5] * m[7],
            -(m[3] * m[8] - m[5] * m[6]),
            m[3] * m[7] - m[4] * m[6],
            -(m[1] * m[8] - m[2] * m[7]),
            m[0] * m[8] - m[2] * m[6],
            -(m[0] * m[7] - m[1] * m[6]),
            m[1] * m[5] - m[2] * m[4],
            -(m[0] * m[5] - m[2] * m[3]),
            m[0] * m[4] - m[1] * m[3],
        )
    }

    /// Transpose of the cofactor matrix
    pub fn adjoint(&self) -> Self {
        self.cofactor().transpose()
    }

    /// Cofactor expansion along the first row
    pub fn determinant(&self) -> Scalar {
        let m = &self.m;
        m[0] * (m[4] * m[8] - m[5] * m[7])
            + m[1] * (m[5] * m[6] - m[3] * m[8])
            + m[2] * (m[3] * m[7] - m[4] * m[6])
    }

    /// Inverse through the adjoint, `None` when the determinant is near zero
    pub fn inverse(&self) -> Option<Self> {
        let determinant = self.determinant();
        if is_near_zero(determinant) {
            debug!("Mat3 is singular (determinant {determinant}), no inverse");
            return None;
        }
        let scale = 1.0 / determinant;
        let mut result = self.adjoint();
        result.m.iter_mut().for_each(|c| *c *= scale);
        Some(result)
    }

    /// Inverts in place. Returns false and leaves `self` untouched when singular.
    pub fn invert(&mut self) -> bool {
        match self.inverse() {
            Some(inverse) => {
                *self = inverse;
                true
            }
            None => false,
        }
    }

    /// Re-derives an orthonormal basis that keeps the direction of the third row.
    ///
    /// Row 2 is normalized, row 0 becomes `normalize(row1 × row2)` and row 1
    /// becomes `row2 × row0`.
    pub fn orthogonal(&self) -> Self {
        let forward = self.row(2).normalize();
        let right = self.row(1).cross(forward).normalize();
        let up = forward.cross(right);
        Self::from_rows(right, up, forward)
    }

    /// # Panics
    ///
    /// Panics if `index` is not 0, 1 or 2.
    pub fn row(&self, index: usize) -> Vec3 {
        assert!(index < 3, "row {index} out of range for Mat3");
        let base = index * 3;
        Vec3::new(self.m[base], self.m[base + 1], self.m[base + 2])
    }

    /// # Panics
    ///
    /// Panics if `index` is not 0, 1 or 2.
    pub fn column(&self, index: usize) -> Vec3 {
        assert!(index < 3, "column {index} out of range for Mat3");
        Vec3::new(self.m[index], self.m[index + 3], self.m[index + 6])
    }

    /// # Panics
    ///
    /// Panics if `index` is not 0, 1 or 2.
    pub fn set_row(&mut self, index: usize, v: Vec3) {
        assert!(index < 3, "row {index} out of range for Mat3");
        let base = index * 3;
        self.m[base..base + 3].copy_from_slice(&v.to_array());
    }

    /// # Panics
    ///
    /// Panics if `index` is not 0, 1 or 2.
    pub fn set_column(&mut self, index: usize, v: Vec3) {
        assert!(index < 3, "column {index} out of range for Mat3");
        self.m[index] = v.x;
        self.m[index + 3] = v.y;
        self.m[index + 6] = v.z;
    }

    /// Range checked access to the flat row-major storage
    pub fn get(&self, index: usize) -> Option<Scalar> {
        self.m.get(index).copied()
    }
}

impl PartialEq for Mat3 {
    fn eq(&self, other: &Self) -> bool {
        self.m.iter().zip(other.m.iter()).all(|(a, b)| approx_eq(*a, *b))
    }
}

impl From<[Scalar; 9]> for Mat3 {
    fn from(m: [Scalar; 9]) -> Self {
        Self::from_array(m)
    }
}

impl From<Quat> for Mat3 {
    fn from(q: Quat) -> Self {
        Self::from_quat(q)
    }
}

impl Index<usize> for Mat3 {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Scalar {
        &self.m[index]
    }
}

impl IndexMut<usize> for Mat3 {
    fn index_mut(&mut self, index: usize) -> &mut Scalar {
        &mut self.m[index]
    }
}

/// Matrix multiplication (A * B means A is applied first, then B)
impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, other: Mat3) -> Mat3 {
        self.multiply(other)
    }
}

impl MulAssign for Mat3 {
    fn mul_assign(&mut self, other: Mat3) {
        *self = self.multiply(other);
    }
}

impl Mul<Mat3> for Vec3 {
    type Output = Vec3;

    fn mul(self, mat: Mat3) -> Vec3 {
        mat.rotate_vec3(self)
    }
}

impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, &self.m, 3)
    }
}

//! 4x4 homogeneous transform matrix
//!
//! Storage is row-major with vectors treated as rows: a point is transformed as
//! `v * M` and `A * B` applies `A` first, then `B`. The translation lives in the
//! last row.
//!
//! Layout:
//! ```text
//! [ m[0]  m[1]  m[2]  m[3]  ]
//! [ m[4]  m[5]  m[6]  m[7]  ]
//! [ m[8]  m[9]  m[10] m[11] ]
//! [ m[12] m[13] m[14] m[15] ]   translation x, y, z
//! ```
//!
//! In memory this is the same sequence of sixteen scalars as a classic
//! column-major OpenGL matrix, so [`Mat4::m`] can be uploaded as is.

use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::scalar::{Scalar, approx_eq, is_near_zero, write_rows};
use crate::{Mat3, Quat, Vec3, Vec4};

/// For each row or column, the three others
const COMPLEMENT: [[usize; 3]; 4] = [[1, 2, 3], [0, 2, 3], [0, 1, 3], [0, 1, 2]];

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(C)]
pub struct Mat4 {
    /// Row-major matrix data
    pub m: [Scalar; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4::new(
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    );

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
        m9: Scalar,
        m10: Scalar,
        m11: Scalar,
        m12: Scalar,
        m13: Scalar,
        m14: Scalar,
        m15: Scalar,
    ) -> Self {
        Self {
            m: [
                m0, m1, m2, m3, m4, m5, m6, m7, m8, m9, m10, m11, m12, m13, m14, m15,
            ],
        }
    }

    pub const fn from_array(m: [Scalar; 16]) -> Self {
        Self { m }
    }

    pub const fn to_array(self) -> [Scalar; 16] {
        self.m
    }

    /// Builds a matrix whose first three columns are `x`, `y` and `z` and whose
    /// last column is `w`. The translation row is cleared and `m[15]` set to one.
    pub const fn from_axes3(x: Vec3, y: Vec3, z: Vec3, w: Vec3) -> Self {
        Self::new(
            x.x, y.x, z.x, w.x, x.y, y.y, z.y, w.y, x.z, y.z, z.z, w.z, 0.0, 0.0, 0.0, 1.0,
        )
    }

    /// The first three components of each column
    pub fn axes3(&self) -> (Vec3, Vec3, Vec3, Vec3) {
        (
            self.column3(0),
            self.column3(1),
            self.column3(2),
            self.column3(3),
        )
    }

    /// Builds a matrix from four full columns
    pub const fn from_axes4(x: Vec4, y: Vec4, z: Vec4, w: Vec4) -> Self {
        Self::new(
            x.x, y.x, z.x, w.x, x.y, y.y, z.y, w.y, x.z, y.z, z.z, w.z, x.w, y.w, z.w, w.w,
        )
    }

    pub fn axes4(&self) -> (Vec4, Vec4, Vec4, Vec4) {
        (
            self.column4(0),
            self.column4(1),
            self.column4(2),
            self.column4(3),
        )
    }

    pub const fn from_mat3(mat: &Mat3) -> Self {
        mat.to_mat4()
    }

    /// Upper left 3x3 block, dropping translation and the last column
    pub const fn to_mat3(&self) -> Mat3 {
        let m = &self.m;
        Mat3::new(m[0], m[1], m[2], m[4], m[5], m[6], m[8], m[9], m[10])
    }

    pub fn from_quat(q: Quat) -> Self {
        Mat3::from_quat(q).to_mat4()
    }

    /// Rotation of `angle` degrees around a unit `axis`, see [`Mat3::rotation`]
    pub fn rotation(angle: Scalar, axis: Vec3) -> Self {
        Mat3::rotation(angle, axis).to_mat4()
    }

    pub const fn translation(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self::new(
            1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, z, 1.0,
        )
    }

    /// Translates by `(x, y, z)` before this transform,
    /// same as `Mat4::translation(x, y, z) * self`
    pub fn translate(self, x: Scalar, y: Scalar, z: Scalar) -> Self {
        let mut result = self;
        let m = &self.m;
        result.m[12] = m[12] + x * m[0] + y * m[4] + z * m[8];
        result.m[13] = m[13] + x * m[1] + y * m[5] + z * m[9];
        result.m[14] = m[14] + x * m[2] + y * m[6] + z * m[10];
        result.m[15] = m[15] + x * m[3] + y * m[7] + z * m[11];
        result
    }

    /// Scales the columns of the rotation block, translation is kept
    pub fn scale(self, x: Scalar, y: Scalar, z: Scalar) -> Self {
        let mut result = self;
        for row in 0..3 {
            result.m[row * 4] *= x;
            result.m[row * 4 + 1] *= y;
            result.m[row * 4 + 2] *= z;
        }
        result
    }

    /// Perspective projection for the given clip planes
    pub fn frustum(
        left: Scalar,
        right: Scalar,
        bottom: Scalar,
        top: Scalar,
        near: Scalar,
        far: Scalar,
    ) -> Self {
        let x_delta = right - left;
        let y_delta = top - bottom;
        let z_delta = far - near;
        let near_double = 2.0 * near;

        let mut m: [Scalar; 16] = [0.0; 16];
        m[0] = near_double / x_delta;
        m[5] = near_double / y_delta;
        m[8] = (right + left) / x_delta;
        m[9] = (top + bottom) / y_delta;
        m[10] = -((far + near) / z_delta);
        m[11] = -1.0;
        m[14] = -((near_double * far) / z_delta);
        Self { m }
    }

    pub fn orthographic(
        left: Scalar,
        right: Scalar,
        bottom: Scalar,
        top: Scalar,
        near: Scalar,
        far: Scalar,
    ) -> Self {
        let x_delta = right - left;
        let y_delta = top - bottom;
        let z_delta = far - near;

        let mut m: [Scalar; 16] = [0.0; 16];
        m[0] = 2.0 / x_delta;
        m[5] = 2.0 / y_delta;
        m[10] = -2.0 / z_delta;
        m[12] = -((right + left) / x_delta);
        m[13] = -((top + bottom) / y_delta);
        m[14] = -((far + near) / z_delta);
        m[15] = 1.0;
        Self { m }
    }

    /// Symmetric perspective projection with a vertical field of view in degrees
    pub fn perspective(fov_y: Scalar, aspect: Scalar, near: Scalar, far: Scalar) -> Self {
        let top = near * (fov_y.to_radians() * 0.5).tan();
        let right = top * aspect;
        Self::frustum(-right, right, -top, top, near, far)
    }

    /// View matrix at `eye` looking towards `center`. The view looks down -z
    /// with `up` projected onto +y.
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let facing = (center - eye).normalize();
        let side = facing.cross(up.normalize()).normalize();
        let up = side.cross(facing);
        Self::from_axes3(side, up, -facing, Vec3::ZERO).translate(-eye.x, -eye.y, -eye.z)
    }

    pub fn transpose(self) -> Self {
        let mut result: [Scalar; 16] = [0.0; 16];
        for (i, cell) in result.iter_mut().enumerate() {
            *cell = self.m[(i % 4) * 4 + i / 4];
        }
        Self { m: result }
    }

    /// Matrix product `self * other`, applies `self` first
    pub fn multiply(self, other: Mat4) -> Self {
        let mut result: [Scalar; 16] = [0.0; 16];
        for (i, cell) in result.iter_mut().enumerate() {
            let (row, col) = (i / 4, i % 4);
            *cell = (0..4)
                .map(|k| self.m[row * 4 + k] * other.m[k * 4 + col])
                .sum();
        }
        Self { m: result }
    }

    /// Full homogeneous transform `v * self`
    pub fn multiply_vec4(&self, v: Vec4) -> Vec4 {
        let m = &self.m;
        Vec4::new(
            v.x * m[0] + v.y * m[4] + v.z * m[8] + v.w * m[12],
            v.x * m[1] + v.y * m[5] + v.z * m[9] + v.w * m[13],
            v.x * m[2] + v.y * m[6] + v.z * m[10] + v.w * m[14],
            v.x * m[3] + v.y * m[7] + v.z * m[11] + v.w * m[15],
        )
    }

    /// Transforms a point: rotation and scale, then translation. No perspective divide.
    pub fn transform_vec3(&self, v: Vec3) -> Vec3 {
        self.rotate_vec3(v) + Vec3::new(self.m[12], self.m[13], self.m[14])
    }

    /// Transforms a direction, translation is ignored
    pub fn rotate_vec3(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            v.x * m[0] + v.y * m[4] + v.z * m[8],
            v.x * m[1] + v.y * m[5] + v.z * m[9],
            v.x * m[2] + v.y * m[6] + v.z * m[10],
        )
    }

    /// Transforms a direction by the transpose of the rotation block
    pub fn inverse_rotate_vec3(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            v.x * m[0] + v.y * m[1] + v.z * m[2],
            v.x * m[4] + v.y * m[5] + v.z * m[6],
            v.x * m[8] + v.y * m[9] + v.z * m[10],
        )
    }

    /// Inverse of a rotation plus translation, no scale allowed.
    ///
    /// The rotation block is transposed and the translation becomes
    /// `-translation * rotationᵀ`.
    pub fn inverse_orthogonal(&self) -> Self {
        let rotation = self.to_mat3().transpose();
        let translation = rotation.rotate_vec3(Vec3::new(self.m[12], self.m[13], self.m[14]));
        let mut result = rotation.to_mat4();
        result.m[12] = -translation.x;
        result.m[13] = -translation.y;
        result.m[14] = -translation.z;
        result
    }

    /// Inverse of an affine transform through the 3x3 block.
    ///
    /// Returns `None` when the block's determinant is near zero.
    pub fn inverse_affine(&self) -> Option<Self> {
        let block = self.to_mat3();
        let Some(inverse) = block.inverse() else {
            debug!("Mat4 has a singular rotation block, no affine inverse");
            return None;
        };
        let translation = inverse.rotate_vec3(Vec3::new(self.m[12], self.m[13], self.m[14]));
        let mut result = inverse.to_mat4();
        result.m[12] = -translation.x;
        result.m[13] = -translation.y;
        result.m[14] = -translation.z;
        Some(result)
    }

    /// Inverts an affine transform in place.
    ///
    /// Returns false and resets `self` to identity when singular.
    pub fn invert_affine(&mut self) -> bool {
        match self.inverse_affine() {
            Some(inverse) => {
                *self = inverse;
                true
            }
            None => {
                *self = Self::IDENTITY;
                false
            }
        }
    }

    /// Inverse of any 4x4 matrix through the adjoint.
    ///
    /// Returns `None` when the determinant is near zero.
    pub fn inverse_general(&self) -> Option<Self> {
        let determinant = self.determinant();
        if is_near_zero(determinant) {
            debug!("Mat4 is singular (determinant {determinant}), no inverse");
            return None;
        }
        let scale = 1.0 / determinant;
        let mut result = self.adjoint();
        result.m.iter_mut().for_each(|c| *c *= scale);
        Some(result)
    }

    /// Inverts in place. Returns false and leaves `self` untouched when singular.
    pub fn invert_general(&mut self) -> bool {
        match self.inverse_general() {
            Some(inverse) => {
                *self = inverse;
                true
            }
            None => false,
        }
    }

    /// Determinant of the 3x3 minor made of the given rows and columns
    fn minor(&self, rows: [usize; 3], cols: [usize; 3]) -> Scalar {
        let at = |r: usize, c: usize| self.m[rows[r] * 4 + cols[c]];
        at(0, 0) * (at(1, 1) * at(2, 2) - at(2, 1) * at(1, 2))
            - at(0, 1) * (at(1, 0) * at(2, 2) - at(2, 0) * at(1, 2))
            + at(0, 2) * (at(1, 0) * at(2, 1) - at(2, 0) * at(1, 1))
    }

    fn signed_minor(&self, row: usize, col: usize) -> Scalar {
        let minor = self.minor(COMPLEMENT[row], COMPLEMENT[col]);
        if (row + col) % 2 == 0 { minor } else { -minor }
    }

    pub fn cofactor(&self) -> Self {
        let mut result: [Scalar; 16] = [0.0; 16];
        for (i, cell) in result.iter_mut().enumerate() {
            *cell = self.signed_minor(i / 4, i % 4);
        }
        Self { m: result }
    }

    /// Transpose of the cofactor matrix
    pub fn adjoint(&self) -> Self {
        let mut result: [Scalar; 16] = [0.0; 16];
        for (i, cell) in result.iter_mut().enumerate() {
            *cell = self.signed_minor(i % 4, i / 4);
        }
        Self { m: result }
    }

    /// Cofactor expansion along the first row
    pub fn determinant(&self) -> Scalar {
        (0..4).map(|col| self.m[col] * self.signed_minor(0, col)).sum()
    }

    /// # Panics
    ///
    /// Panics if `index` is greater than 3.
    pub fn row3(&self, index: usize) -> Vec3 {
        self.row4(index).truncate()
    }

    /// # Panics
    ///
    /// Panics if `index` is greater than 3.
    pub fn row4(&self, index: usize) -> Vec4 {
        assert!(index < 4, "row {index} out of range for Mat4");
        let base = index * 4;
        Vec4::new(
            self.m[base],
            self.m[base + 1],
            self.m[base + 2],
            self.m[base + 3],
        )
    }

    /// # Panics
    ///
    /// Panics if `index` is greater than 3.
    pub fn column3(&self, index: usize) -> Vec3 {
        self.column4(index).truncate()
    }

    /// # Panics
    ///
    /// Panics if `index` is greater than 3.
    pub fn column4(&self, index: usize) -> Vec4 {
        assert!(index < 4, "column {index} out of range for Mat4");
        Vec4::new(
            self.m[index],
            self.m[index + 4],
            self.m[index + 8],
            self.m[index + 12],
        )
    }

    /// Sets the first three components of a row
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 3.
    pub fn set_row3(&mut self, index: usize, v: Vec3) {
        assert!(index < 4, "row {index} out of range for Mat4");
        let base = index * 4;
        self.m[base..base + 3].copy_from_slice(&v.to_array());
    }

    /// # Panics
    ///
    /// Panics if `index` is greater than 3.
    pub fn set_row4(&mut self, index: usize, v: Vec4) {
        assert!(index < 4, "row {index} out of range for Mat4");
        let base = index * 4;
        self.m[base..base + 4].copy_from_slice(&v.to_array());
    }

    /// Sets the first three components of a column
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 3.
    pub fn set_column3(&mut self, index: usize, v: Vec3) {
        assert!(index < 4, "column {index} out of range for Mat4");
        self.m[index] = v.x;
        self.m[index + 4] = v.y;
        self.m[index + 8] = v.z;
    }

    /// # Panics
    ///
    /// Panics if `index` is greater than 3.
    pub fn set_column4(&mut self, index: usize, v: Vec4) {
        self.set_column3(index, v.truncate());
        self.m[index + 12] = v.w;
    }

    /// Range checked access to the flat row-major storage
    pub fn get(&self, index: usize) -> Option<Scalar> {
        self.m.get(index).copied()
    }
}

impl PartialEq for Mat4 {
    fn eq(&self, other: &Self) -> bool {
        self.m.iter().zip(other.m.iter()).all(|(a, b)| approx_eq(*a, *b))
    }
}

impl From<[Scalar; 16]> for Mat4 {
    fn from(m: [Scalar; 16]) -> Self {
        Self::from_array(m)
    }
}

impl From<Mat3> for Mat4 {
    fn from(mat: Mat3) -> Self {
        mat.to_mat4()
    }
}

impl From<Quat> for Mat4 {
    fn from(q: Quat) -> Self {
        Self::from_quat(q)
    }
}

impl Index<usize> for Mat4 {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Scalar {
        &self.m[index]
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, index: usize) -> &mut Scalar {
        &mut self.m[index]
    }
}

/// Matrix multiplication (A * B means A is applied first, then B)
impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, other: Mat4) -> Mat4 {
        self.multiply(other)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, other: Mat4) {
        *self = self.multiply(other);
    }
}

impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    fn mul(self, mat: Mat4) -> Vec4 {
        mat.multiply_vec4(self)
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, &self.m, 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{EPSILON, approx_eq};
    use pretty_assertions::assert_eq;

    const X_AXIS: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    const Y_AXIS: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    const Z_AXIS: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    fn general() -> Mat4 {
        Mat4::new(
            2.0, 0.0, 1.0, 0.0, 1.0, 3.0, 0.0, 1.0, 0.0, 1.0, 4.0, 0.0, 1.0, 0.0, 0.0, 5.0,
        )
    }

    fn affine() -> Mat4 {
        Mat4::rotation(30.0, Vec3::new(1.0, 1.0, 0.0).normalize())
            .scale(2.0, 0.5, 3.0)
            .translate(1.0, -2.0, 3.0)
    }

    fn project(m: &Mat4, p: Vec3) -> Vec3 {
        let clip = p.extend(1.0) * *m;
        clip.truncate() * (1.0 / clip.w)
    }

    #[test]
    fn test_translation() {
        let m = Mat4::translation(1.0, 2.0, 3.0);
        assert_eq!(m.transform_vec3(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.rotate_vec3(Vec3::ZERO), Vec3::ZERO);
        assert_eq!(m.rotate_vec3(X_AXIS), X_AXIS);
        assert_eq!(m.multiply_vec4(Vec4::IDENTITY), Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(m.multiply_vec4(Vec4::new(1.0, 0.0, 0.0, 0.0)), Vec4::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_translate_applies_first() {
        let m = Mat4::rotation(90.0, Z_AXIS).translate(1.0, 0.0, 0.0);
        // (0,0,0) moves to (1,0,0) and is then rotated onto y
        assert_eq!(m.transform_vec3(Vec3::ZERO), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(m, Mat4::translation(1.0, 0.0, 0.0) * Mat4::rotation(90.0, Z_AXIS));
        // rotation block is preserved
        assert_eq!(m.to_mat3(), Mat3::rotation(90.0, Z_AXIS));
    }

    #[test]
    fn test_scale() {
        let m = Mat4::translation(1.0, 2.0, 3.0).scale(2.0, 3.0, 4.0);
        assert_eq!(m.rotate_vec3(Vec3::ONE), Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(m.row3(3), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_multiply_identity() {
        let m = general();
        assert_eq!(m * Mat4::IDENTITY, m);
        assert_eq!(Mat4::IDENTITY * m, m);
        let mut n = m;
        n *= Mat4::IDENTITY;
        assert_eq!(n, m);
    }

    #[test]
    fn test_multiply_order() {
        let scale = Mat4::IDENTITY.scale(2.0, 1.0, 1.0);
        let translate = Mat4::translation(10.0, 0.0, 0.0);
        assert_eq!((scale * translate).transform_vec3(X_AXIS), Vec3::new(12.0, 0.0, 0.0));
        assert_eq!((translate * scale).transform_vec3(X_AXIS), Vec3::new(22.0, 0.0, 0.0));
    }

    #[test]
    fn test_transpose() {
        let m = general();
        let t = m.transpose();
        assert_eq!(t.row4(0), m.column4(0));
        assert_eq!(t.row4(3), m.column4(3));
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_inverse_rotate_vec3() {
        let m = Mat4::rotation(70.0, Y_AXIS).translate(3.0, 3.0, 3.0);
        let v = Vec3::new(1.0, -2.0, 0.5);
        assert_eq!(m.inverse_rotate_vec3(m.rotate_vec3(v)), v);
    }

    #[test]
    fn test_inverse_orthogonal() {
        let m = Mat4::rotation(-40.0, Vec3::new(0.0, 1.0, 1.0).normalize())
            .translate(5.0, -1.0, 2.0);
        let inverse = m.inverse_orthogonal();
        assert_eq!(m * inverse, Mat4::IDENTITY);
        assert_eq!(inverse, m.inverse_general().expect("invertible"));
    }

    #[test]
    fn test_inverse_affine() {
        let m = affine();
        let inverse = m.inverse_affine().expect("invertible");
        assert_eq!(m * inverse, Mat4::IDENTITY);
        assert_eq!(inverse * m, Mat4::IDENTITY);
        let p = Vec3::new(4.0, 5.0, -6.0);
        assert_eq!(inverse.transform_vec3(m.transform_vec3(p)), p);
        assert_eq!(inverse, m.inverse_general().expect("invertible"));
    }

    #[test]
    fn test_inverse_affine_singular_resets_to_identity() {
        let mut m = Mat4::translation(1.0, 2.0, 3.0).scale(1.0, 0.0, 1.0);
        assert_eq!(m.inverse_affine(), None);
        assert!(!m.invert_affine());
        assert_eq!(m, Mat4::IDENTITY);

        let mut ok = affine();
        assert!(ok.invert_affine());
        assert_eq!(ok * affine(), Mat4::IDENTITY);
    }

    #[test]
    fn test_inverse_general() {
        let m = general();
        let inverse = m.inverse_general().expect("invertible");
        assert_eq!(m * inverse, Mat4::IDENTITY);
        assert_eq!(inverse * m, Mat4::IDENTITY);
    }

    #[test]
    fn test_inverse_general_singular_leaves_input() {
        let mut m = general();
        m.set_row4(2, m.row4(1));
        let before = m;
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.inverse_general(), None);
        assert!(!m.invert_general());
        assert_eq!(m.m, before.m);
    }

    #[test]
    fn test_determinant() {
        assert_eq!(Mat4::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4::IDENTITY.scale(2.0, 3.0, 4.0).determinant(), 24.0);
        // expansion along the last row: 5 * 25 - 1 * 1
        assert!((general().determinant() - 124.0).abs() < EPSILON);
        let rotation = Mat4::rotation(33.0, Vec3::new(1.0, 2.0, 3.0).normalize());
        assert!((rotation.determinant() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_adjoint_and_cofactor() {
        let m = general();
        let det = m.determinant();
        let mut scaled = Mat4::IDENTITY;
        scaled.m.iter_mut().for_each(|c| *c *= det);
        assert_eq!(m * m.adjoint(), scaled);
        assert_eq!(m.cofactor(), m.adjoint().transpose());
        assert_eq!(Mat4::IDENTITY.adjoint(), Mat4::IDENTITY);
    }

    #[test]
    fn test_frustum() {
        let m = Mat4::frustum(-1.0, 3.0, -2.0, 2.0, 1.0, 10.0);
        assert_eq!(m.m[0], 0.5);
        assert_eq!(m.m[5], 0.5);
        assert_eq!(m.m[8], 0.5);
        assert_eq!(m.m[9], 0.0);
        assert_eq!(m.m[11], -1.0);
        assert_eq!(m.m[15], 0.0);
        // near plane corners land on the NDC corners
        assert_eq!(project(&m, Vec3::new(-1.0, -2.0, -1.0)), Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(project(&m, Vec3::new(3.0, 2.0, -1.0)), Vec3::new(1.0, 1.0, -1.0));
    }

    #[test]
    fn test_orthographic() {
        let m = Mat4::orthographic(-2.0, 2.0, -1.0, 1.0, 0.5, 20.0);
        assert_eq!(m.transform_vec3(Vec3::new(-2.0, -1.0, -0.5)), Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(m.transform_vec3(Vec3::new(2.0, 1.0, -20.0)), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(m.m[15], 1.0);
    }

    #[test]
    fn test_perspective() {
        let m = Mat4::perspective(90.0, 2.0, 1.0, 100.0);
        assert!(approx_eq(m.m[0], 0.5));
        assert!(approx_eq(m.m[5], 1.0));
        assert!(approx_eq(project(&m, Vec3::new(0.0, 0.0, -1.0)).z, -1.0));
        assert!(approx_eq(project(&m, Vec3::new(0.0, 0.0, -100.0)).z, 1.0));
        assert_eq!(project(&m, Vec3::new(2.0, 1.0, -1.0)), Vec3::new(1.0, 1.0, -1.0));
        assert_eq!(m, Mat4::frustum(-2.0, 2.0, -1.0, 1.0, 1.0, 100.0));
    }

    #[test]
    fn test_look_at() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let m = Mat4::look_at(eye, Vec3::new(1.0, 2.0, -7.0), Y_AXIS);
        assert_eq!(m.transform_vec3(eye), Vec3::ZERO);
        assert_eq!(m.transform_vec3(Vec3::new(1.0, 2.0, -7.0)), Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(m.transform_vec3(Vec3::new(1.0, 5.0, 3.0)), Vec3::new(0.0, 3.0, 0.0));

        let m = Mat4::look_at(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(m.transform_vec3(Vec3::ZERO), Vec3::new(0.0, 0.0, -5.0));
        // looking down -x with y up puts +z on the left
        assert_eq!(m.rotate_vec3(Z_AXIS), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(m.to_mat3() * m.to_mat3().transpose(), Mat3::IDENTITY);
    }

    #[test]
    fn test_axes() {
        let x = Vec3::new(1.0, 2.0, 3.0);
        let y = Vec3::new(4.0, 5.0, 6.0);
        let z = Vec3::new(7.0, 8.0, 9.0);
        let w = Vec3::new(-1.0, -2.0, -3.0);
        let m = Mat4::from_axes3(x, y, z, w);
        assert_eq!(m.axes3(), (x, y, z, w));
        assert_eq!(m.row4(3), Vec4::IDENTITY);

        let m4 = Mat4::from_axes4(x.extend(1.0), y.extend(2.0), z.extend(3.0), w.extend(4.0));
        let (ax, _, _, aw) = m4.axes4();
        assert_eq!(ax, x.extend(1.0));
        assert_eq!(aw, w.extend(4.0));
        assert_eq!(m4.row4(3), Vec4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_rows_and_columns() {
        let mut m = Mat4::IDENTITY;
        m.set_row3(3, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m, Mat4::translation(1.0, 2.0, 3.0));
        m.set_column4(3, Vec4::new(9.0, 8.0, 7.0, 6.0));
        assert_eq!(m.column4(3), Vec4::new(9.0, 8.0, 7.0, 6.0));
        assert_eq!(m.row4(0), Vec4::new(1.0, 0.0, 0.0, 9.0));
        m.set_column3(0, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(m.column3(0), Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(m.column4(0).w, 1.0);
        m.set_row4(1, Vec4::ONE);
        assert_eq!(m.row3(1), Vec3::ONE);
        assert_eq!(m.get(15), Some(6.0));
        assert_eq!(m.get(16), None);
        m[15] = 1.0;
        assert_eq!(m.m[15], 1.0);
    }

    #[test]
    #[should_panic(expected = "row 4 out of range for Mat4")]
    fn test_row_out_of_range() {
        Mat4::IDENTITY.row4(4);
    }

    #[test]
    fn test_quat_and_mat3_conversions() {
        let q = Quat::from_angle_axis(75.0, Vec3::new(1.0, 0.0, 1.0));
        let m = Mat4::from_quat(q);
        assert_eq!(m, Mat4::rotation(75.0, Vec3::new(1.0, 0.0, 1.0).normalize()));
        assert_eq!(m.to_mat3(), Mat3::from_quat(q));
        assert_eq!(Mat4::from_mat3(&m.to_mat3()), m);
        assert_eq!(Mat4::from(q), m);
        let v = Vec3::new(3.0, 1.0, 2.0);
        assert_eq!(m.rotate_vec3(v), q.rotate_vec3(v));
    }

    #[test]
    fn test_display() {
        let expected = "{ 1, 0, 0, 0,\n  0, 1, 0, 0,\n  0, 0, 1, 0,\n  4, 5, 6, 1 }";
        assert_eq!(format!("{:.0}", Mat4::translation(4.0, 5.0, 6.0)), expected);
    }
}

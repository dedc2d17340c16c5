#![allow(dead_code)]

use gfxmath::{Mat4, Quat, Scalar, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of random cases per property
pub const CASES: usize = 500;

/// Relative tolerance for results that accumulate rounding over several operations
#[cfg(not(feature = "f32"))]
pub const TOLERANCE: Scalar = gfxmath::EPSILON;

/// Relative tolerance for results that accumulate rounding over several operations
#[cfg(feature = "f32")]
pub const TOLERANCE: Scalar = 1.0e-3;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Seeded so failures can be reproduced
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_cafe)
}

pub fn random_vec3(rng: &mut StdRng, range: Scalar) -> Vec3 {
    Vec3::new(
        rng.random_range(-range..range),
        rng.random_range(-range..range),
        rng.random_range(-range..range),
    )
}

/// Random direction, never shorter than 0.1 before normalizing
pub fn random_axis(rng: &mut StdRng) -> Vec3 {
    loop {
        let v = random_vec3(rng, 1.0);
        if v.length() > 0.1 {
            return v.normalize();
        }
    }
}

pub fn random_rotation(rng: &mut StdRng) -> Quat {
    let angle = rng.random_range(-360.0..360.0);
    Quat::from_angle_axis(angle, random_axis(rng))
}

pub fn random_mat4(rng: &mut StdRng) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    m.m.iter_mut()
        .for_each(|c| *c = rng.random_range(-1.0..1.0));
    m
}

/// Rotation, positive scale and translation
pub fn random_affine(rng: &mut StdRng) -> Mat4 {
    let t = random_vec3(rng, 100.0);
    Mat4::from_quat(random_rotation(rng))
        .scale(
            rng.random_range(0.5..2.0),
            rng.random_range(0.5..2.0),
            rng.random_range(0.5..2.0),
        )
        .translate(t.x, t.y, t.z)
}

/// Equal within [`TOLERANCE`], scaled up for values larger than one
pub fn close(a: Scalar, b: Scalar) -> bool {
    (a - b).abs() < TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

pub fn close_all(a: &[Scalar], b: &[Scalar]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| close(*a, *b))
}

pub fn close_vec3(a: Vec3, b: Vec3) -> bool {
    close_all(&a.to_array(), &b.to_array())
}

pub fn close_mat4(a: &Mat4, b: &Mat4) -> bool {
    close_all(&a.m, &b.m)
}

/// True when `a` and `b` are the same rotation, `q` and `-q` included
pub fn same_rotation(a: Quat, b: Quat) -> bool {
    close_all(&a.to_array(), &b.to_array()) || close_all(&a.to_array(), &(-b).to_array())
}

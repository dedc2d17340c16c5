//! Scalar type and epsilon based comparisons
//!
//! The whole crate is built on a single floating point type. By default this is
//! `f64`; enabling the `f32` feature switches every vector, quaternion and matrix
//! to single precision.
//!
//! Equality in this crate is never an exact bit comparison. Two scalars are
//! considered equal when their difference is below [`EPSILON`].

use std::fmt;

/// Floating point type used by all types in this crate
#[cfg(not(feature = "f32"))]
pub type Scalar = f64;

/// Floating point type used by all types in this crate
#[cfg(feature = "f32")]
pub type Scalar = f32;

/// Threshold below which a scalar is treated as zero.
///
/// This is more or less the limit of accuracy for the operations in this crate,
/// it is not a machine epsilon.
#[cfg(not(feature = "f32"))]
pub const EPSILON: Scalar = 1.0e-9;

/// Threshold below which a scalar is treated as zero.
///
/// This is more or less the limit of accuracy for the operations in this crate,
/// it is not a machine epsilon.
#[cfg(feature = "f32")]
pub const EPSILON: Scalar = 1.0e-6;

/// Returns true if `x` is within [`EPSILON`] of zero
#[inline]
pub fn is_near_zero(x: Scalar) -> bool {
    x.abs() < EPSILON
}

/// Returns true if `x` and `y` differ by less than [`EPSILON`]
#[inline]
pub fn approx_eq(x: Scalar, y: Scalar) -> bool {
    is_near_zero(x - y)
}

/// Reciprocal that leaves an exact zero untouched instead of producing infinity
#[inline]
pub(crate) fn guarded_recip(x: Scalar) -> Scalar {
    if x != 0.0 { 1.0 / x } else { x }
}

/// Writes `{ a, b, c }` with six decimals unless the formatter asks for another precision
pub(crate) fn write_components(f: &mut fmt::Formatter<'_>, components: &[Scalar]) -> fmt::Result {
    let precision = f.precision().unwrap_or(6);
    f.write_str("{ ")?;
    for (index, component) in components.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{component:.precision$}")?;
    }
    f.write_str(" }")
}

/// Same as [`write_components`] but breaks the line after every `row_len` components
pub(crate) fn write_rows(
    f: &mut fmt::Formatter<'_>,
    components: &[Scalar],
    row_len: usize,
) -> fmt::Result {
    let precision = f.precision().unwrap_or(6);
    f.write_str("{ ")?;
    for (index, component) in components.iter().enumerate() {
        if index > 0 {
            if index % row_len == 0 {
                f.write_str(",\n  ")?;
            } else {
                f.write_str(", ")?;
            }
        }
        write!(f, "{component:.precision$}")?;
    }
    f.write_str(" }")
}

//! Little-endian byte encoding for vectors, quaternions and matrices.
//!
//! Every type is encoded as its components in storage order (`x, y, z, w` or the
//! row-major matrix elements), each as a little-endian [`Scalar`]. This is the
//! flat layout graphics APIs expect for vertex attributes and uniforms.
//!
//! ```
//! use gfxmath::Vec3;
//! use gfxmath::codec::{FlatBuffer, decode_slice, encode_slice};
//!
//! let points = [Vec3::new(1.0, 2.0, 3.0), Vec3::ONE];
//! let bytes = encode_slice(&points);
//! assert_eq!(bytes.len(), 2 * Vec3::SIZE);
//! let decoded: Vec<Vec3> = decode_slice(&bytes).unwrap();
//! assert_eq!(decoded, points);
//! ```

use std::io::{self, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use bytes::{BufMut, Bytes, BytesMut};
use log::debug;

use crate::error::DecodeError;
use crate::scalar::Scalar;
use crate::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

/// Size in bytes of one encoded [`Scalar`]
pub const SCALAR_SIZE: usize = std::mem::size_of::<Scalar>();

/// A fixed number of scalars with a flat little-endian encoding
pub trait FlatBuffer: Copy {
    /// Number of scalar components
    const LEN: usize;
    /// Encoded size in bytes
    const SIZE: usize = Self::LEN * SCALAR_SIZE;

    type Array: AsRef<[Scalar]> + AsMut<[Scalar]> + Default;

    fn to_array(self) -> Self::Array;

    fn from_array(array: Self::Array) -> Self;

    fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for component in self.to_array().as_ref() {
            write_scalar(writer, *component)?;
        }
        Ok(())
    }

    fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut array = Self::Array::default();
        for component in array.as_mut() {
            *component = read_scalar(reader)?;
        }
        Ok(Self::from_array(array))
    }

    /// Appends the encoded components to `buffer`
    fn put_into(&self, buffer: &mut BytesMut) {
        buffer.reserve(Self::SIZE);
        for component in self.to_array().as_ref() {
            put_scalar(buffer, *component);
        }
    }

    fn to_bytes(&self) -> Bytes {
        let mut buffer = BytesMut::with_capacity(Self::SIZE);
        self.put_into(&mut buffer);
        buffer.freeze()
    }

    /// Decodes one value, `bytes` must be exactly [`FlatBuffer::SIZE`] long
    fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() != Self::SIZE {
            debug!(
                "can not decode {} bytes, expected {}",
                bytes.len(),
                Self::SIZE
            );
            return Err(DecodeError::Length {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }
        let mut reader = bytes;
        Ok(Self::read_from(&mut reader)?)
    }
}

#[cfg(not(feature = "f32"))]
fn write_scalar<W: Write>(writer: &mut W, value: Scalar) -> io::Result<()> {
    writer.write_f64::<LittleEndian>(value)
}

#[cfg(feature = "f32")]
fn write_scalar<W: Write>(writer: &mut W, value: Scalar) -> io::Result<()> {
    writer.write_f32::<LittleEndian>(value)
}

#[cfg(not(feature = "f32"))]
fn read_scalar<R: Read>(reader: &mut R) -> io::Result<Scalar> {
    reader.read_f64::<LittleEndian>()
}

#[cfg(feature = "f32")]
fn read_scalar<R: Read>(reader: &mut R) -> io::Result<Scalar> {
    reader.read_f32::<LittleEndian>()
}

#[cfg(not(feature = "f32"))]
fn put_scalar(buffer: &mut BytesMut, value: Scalar) {
    buffer.put_f64_le(value);
}

#[cfg(feature = "f32")]
fn put_scalar(buffer: &mut BytesMut, value: Scalar) {
    buffer.put_f32_le(value);
}

/// Encodes a contiguous array of values back to back
pub fn encode_slice<T: FlatBuffer>(values: &[T]) -> Bytes {
    let mut buffer = BytesMut::with_capacity(values.len() * T::SIZE);
    for value in values {
        value.put_into(&mut buffer);
    }
    buffer.freeze()
}

/// Decodes a contiguous array of values, the length must be a multiple of `T::SIZE`
pub fn decode_slice<T: FlatBuffer>(bytes: &[u8]) -> Result<Vec<T>, DecodeError> {
    if bytes.len() % T::SIZE != 0 {
        debug!(
            "can not decode {} bytes as elements of {} bytes",
            bytes.len(),
            T::SIZE
        );
        return Err(DecodeError::Partial {
            element_size: T::SIZE,
            actual: bytes.len(),
        });
    }
    bytes.chunks_exact(T::SIZE).map(T::from_bytes).collect()
}

macro_rules! impl_flat_buffer {
    ($ty:ty, $len:expr) => {
        impl FlatBuffer for $ty {
            const LEN: usize = $len;
            type Array = [Scalar; $len];

            fn to_array(self) -> Self::Array {
                <$ty>::to_array(self)
            }

            fn from_array(array: Self::Array) -> Self {
                <$ty>::from_array(array)
            }
        }
    };
}

impl_flat_buffer!(Vec2, 2);
impl_flat_buffer!(Vec3, 3);
impl_flat_buffer!(Vec4, 4);
impl_flat_buffer!(Quat, 4);
impl_flat_buffer!(Mat3, 9);
impl_flat_buffer!(Mat4, 16);

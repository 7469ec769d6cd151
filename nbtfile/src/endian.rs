//! Byte order conversion between NBT's big endian wire layout and the host.
//!
//! Everything here is pure: no IO and no state. The value level conversions
//! ([`file_to_host`] and [`host_to_file`]) take a value whose bytes were
//! copied straight from the wire into host memory and fix its byte order, or
//! the reverse. Both are involutions, applying one after the other gives back
//! the original value. On a big endian host they are the identity.
//!
//! The byte level conversions ([`Scalar::from_file_bytes`],
//! [`read_file_array`] and friends) are what the decoder uses, since it never
//! holds an unconverted value.
//!
//! ```
//! use nbtfile::endian::{file_to_host, host_to_file, read_file_array};
//!
//! let raw = i32::from_ne_bytes([0x12, 0x34, 0x56, 0x78]);
//! assert_eq!(file_to_host(raw), 0x12345678);
//! assert_eq!(host_to_file(file_to_host(raw)), raw);
//!
//! let ints: Vec<i16> = read_file_array(&[0x00, 0x01, 0xff, 0xfe]);
//! assert_eq!(ints, vec![1, -2]);
//! ```

use byteorder::{BigEndian, ByteOrder};

mod private {
    // Only this crate can implement this trait. Other traits can inherit from
    // Sealed in order to prevent other crates from creating implementations.
    pub trait Sealed {}
}

/// A fixed width number that appears in NBT payloads. Implemented for `i8`,
/// `i16`, `i32`, `i64`, `f32` and `f64` only.
pub trait Scalar: private::Sealed + Copy + PartialEq + std::fmt::Debug {
    /// Width on the wire in bytes.
    const WIDTH: usize;

    /// Convert a value holding wire ordered bytes to host order.
    fn file_to_host(self) -> Self;

    /// Convert a host value to one holding wire ordered bytes.
    fn host_to_file(self) -> Self;

    /// Decode from the first `WIDTH` bytes of a big endian buffer.
    ///
    /// # Panics
    ///
    /// If `bytes` is shorter than `WIDTH`.
    fn from_file_bytes(bytes: &[u8]) -> Self;

    /// Encode into the first `WIDTH` bytes of `out` in big endian order.
    ///
    /// # Panics
    ///
    /// If `out` is shorter than `WIDTH`.
    fn to_file_bytes(self, out: &mut [u8]);
}

impl private::Sealed for i8 {}

impl Scalar for i8 {
    const WIDTH: usize = 1;

    fn file_to_host(self) -> Self {
        self
    }

    fn host_to_file(self) -> Self {
        self
    }

    fn from_file_bytes(bytes: &[u8]) -> Self {
        bytes[0] as i8
    }

    fn to_file_bytes(self, out: &mut [u8]) {
        out[0] = self as u8;
    }
}

macro_rules! int_scalar {
    ($t:ty, $read:ident, $write:ident) => {
        impl private::Sealed for $t {}

        impl Scalar for $t {
            const WIDTH: usize = std::mem::size_of::<$t>();

            fn file_to_host(self) -> Self {
                <$t>::from_be(self)
            }

            fn host_to_file(self) -> Self {
                self.to_be()
            }

            fn from_file_bytes(bytes: &[u8]) -> Self {
                BigEndian::$read(bytes)
            }

            fn to_file_bytes(self, out: &mut [u8]) {
                BigEndian::$write(out, self)
            }
        }
    };
}

// Floats are swapped through their bit pattern so that no arithmetic ever
// touches a value that is not yet in host order.
macro_rules! float_scalar {
    ($t:ty, $bits:ty, $read:ident, $write:ident) => {
        impl private::Sealed for $t {}

        impl Scalar for $t {
            const WIDTH: usize = std::mem::size_of::<$t>();

            fn file_to_host(self) -> Self {
                <$t>::from_bits(<$bits>::from_be(self.to_bits()))
            }

            fn host_to_file(self) -> Self {
                <$t>::from_bits(self.to_bits().to_be())
            }

            fn from_file_bytes(bytes: &[u8]) -> Self {
                BigEndian::$read(bytes)
            }

            fn to_file_bytes(self, out: &mut [u8]) {
                BigEndian::$write(out, self)
            }
        }
    };
}

int_scalar!(i16, read_i16, write_i16);
int_scalar!(i32, read_i32, write_i32);
int_scalar!(i64, read_i64, write_i64);
float_scalar!(f32, u32, read_f32, write_f32);
float_scalar!(f64, u64, read_f64, write_f64);

/// Convert a value holding wire ordered bytes to host order.
pub fn file_to_host<T: Scalar>(value: T) -> T {
    value.file_to_host()
}

/// Convert a host value to one holding wire ordered bytes.
pub fn host_to_file<T: Scalar>(value: T) -> T {
    value.host_to_file()
}

/// [`file_to_host`] applied to every element in place.
pub fn file_to_host_slice<T: Scalar>(values: &mut [T]) {
    for v in values.iter_mut() {
        *v = v.file_to_host();
    }
}

/// [`host_to_file`] applied to every element in place.
pub fn host_to_file_slice<T: Scalar>(values: &mut [T]) {
    for v in values.iter_mut() {
        *v = v.host_to_file();
    }
}

/// Decode a big endian buffer into host values. Trailing bytes that do not
/// make up a whole element are ignored.
pub fn read_file_array<T: Scalar>(bytes: &[u8]) -> Vec<T> {
    bytes
        .chunks_exact(T::WIDTH)
        .map(T::from_file_bytes)
        .collect()
}

/// Encode host values into a big endian buffer.
pub fn write_file_array<T: Scalar>(values: &[T]) -> Vec<u8> {
    let mut out = vec![0u8; values.len() * T::WIDTH];
    for (v, chunk) in values.iter().zip(out.chunks_exact_mut(T::WIDTH)) {
        v.to_file_bytes(chunk);
    }
    out
}

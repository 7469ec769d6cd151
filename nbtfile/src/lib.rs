//! nbtfile decodes NBT (named binary tag) data into an owned, strongly typed
//! tree of [`Value`]s. NBT is the format *Minecraft: Java Edition* uses to
//! store world data, player inventories and much more, but nothing here is
//! specific to the game.
//!
//! * For the decoder and its primitive reads, see [`decode`].
//! * For the decoded tree, see [`Value`], [`List`] and [`Compound`].
//! * For the byte order conversions used on the wire, see [`endian`].
//!
//! ```toml
//! [dependencies]
//! nbtfile = "0.1"
//! ```
//!
//! # Quick example
//!
//! Decode a single named compound and look inside it.
//!
//! ```
//! use nbtfile::{from_bytes, Value};
//!
//! # fn main() -> nbtfile::error::Result<()> {
//! let data = [
//!     10, 0, 4, b'r', b'o', b'o', b't', // compound "root"
//!     3, 0, 3, b'a', b'g', b'e', 0, 0, 0, 42, // int "age" = 42
//!     0, // end
//! ];
//!
//! let root = from_bytes(&data)?;
//! assert_eq!(root.name(), Some("root"));
//!
//! let compound = root.as_compound().unwrap();
//! assert_eq!(compound.get("age").and_then(Value::as_i64), Some(42));
//! # Ok(())
//! # }
//! ```
//!
//! # `Read` based decoding
//!
//! [`decode::Decoder`] only requires the `Read` trait on its input. It does no
//! decompression; NBT files on disk are usually gzip compressed and should be
//! wrapped in a decompressing reader first.

pub mod decode;
pub mod endian;
pub mod error;

mod value;

pub use decode::{from_bytes, from_bytes_with_opts, from_reader, from_reader_with_opts, DecodeOpts};
pub use value::*;

#[cfg(test)]
mod test;

/// An NBT tag kind. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of unnamed values, all of the same kind.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

impl Tag {
    /// The width in bytes of the payload for scalar kinds, or of a single
    /// element for array kinds. `None` for the variable sized kinds.
    pub fn width(self) -> Option<usize> {
        match self {
            Tag::Byte | Tag::ByteArray => Some(1),
            Tag::Short => Some(2),
            Tag::Int | Tag::Float | Tag::IntArray => Some(4),
            Tag::Long | Tag::Double | Tag::LongArray => Some(8),
            Tag::End | Tag::String | Tag::List | Tag::Compound => None,
        }
    }
}

// Crates exist to generate this code for us, but would add to our compile
// times, so we instead write it out manually. The tags will very rarely
// change so it isn't a massive burden.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 3,
            Tag::Long => 4,
            Tag::Float => 5,
            Tag::Double => 6,
            Tag::ByteArray => 7,
            Tag::String => 8,
            Tag::List => 9,
            Tag::Compound => 10,
            Tag::IntArray => 11,
            Tag::LongArray => 12,
        }
    }
}

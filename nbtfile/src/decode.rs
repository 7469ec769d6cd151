//! Decoding of NBT from any `Read` into an owned [`Value`] tree.
//!
//! [`Decoder`] exposes the primitive reads NBT is built from (a kind byte, a
//! name, a size prefix, a scalar, an array, a string) and composes them into
//! [`Decoder::read_list`] and [`Decoder::read_compound`], which recurse into
//! each other for nested data. Most callers only want [`from_bytes`] or
//! [`from_reader`], which read a single top level tag.
//!
//! Decoding is all or nothing. Any error aborts the whole decode and no
//! partial tree is returned. After an error the position of the underlying
//! reader is unspecified.
//!
//! # Limits
//!
//! Nesting depth and declared sizes are bounded by [`DecodeOpts`]. Without a
//! depth limit a small, hostile input of nested lists could exhaust the stack.
//!
//! ```
//! use nbtfile::{from_bytes_with_opts, DecodeOpts};
//! use nbtfile::error::ErrorKind;
//!
//! // compound "" { compound "" { end } end }
//! let data = [10, 0, 0, 10, 0, 0, 0, 0];
//! let err = from_bytes_with_opts(&data, DecodeOpts::new().max_depth(1)).unwrap_err();
//! assert_eq!(err.kind(), &ErrorKind::DepthLimit(1));
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, trace, warn};

use crate::endian::{self, Scalar};
use crate::error::{Error, Phase, Result};
use crate::{Compound, List, Name, Tag, Value};

// Declared list sizes are untrusted, don't reserve more than this up front.
const MAX_PREALLOC: usize = 1024;

/// Options for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOpts {
    max_depth: usize,
    max_seq_len: usize,
}

impl DecodeOpts {
    /// Default options: a depth of 512 and any size NBT can express.
    pub fn new() -> Self {
        Default::default()
    }

    /// Maximum number of lists and compounds that can be nested inside one
    /// another, counting the outermost.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }

    /// Maximum declared size of a list or array.
    pub fn max_seq_len(mut self, value: usize) -> Self {
        self.max_seq_len = value;
        self
    }
}

impl Default for DecodeOpts {
    fn default() -> Self {
        Self {
            max_depth: 512,
            max_seq_len: i32::MAX as usize,
        }
    }
}

/// A scalar that can be read on its own as a tag payload.
pub trait ScalarTag: Scalar {
    const TAG: Tag;

    fn into_value(name: Name, value: Self) -> Value;
}

/// A scalar that can be the element type of an NBT array.
pub trait ArrayTag: Scalar {
    const TAG: Tag;

    fn into_value(name: Name, values: Vec<Self>) -> Value;
}

macro_rules! scalar_tag {
    ($t:ty, $tag:ident) => {
        impl ScalarTag for $t {
            const TAG: Tag = Tag::$tag;

            fn into_value(name: Name, value: Self) -> Value {
                Value::$tag(name, value)
            }
        }
    };
}

macro_rules! array_tag {
    ($t:ty, $tag:ident) => {
        impl ArrayTag for $t {
            const TAG: Tag = Tag::$tag;

            fn into_value(name: Name, values: Vec<Self>) -> Value {
                Value::$tag(name, values)
            }
        }
    };
}

scalar_tag!(i8, Byte);
scalar_tag!(i16, Short);
scalar_tag!(i32, Int);
scalar_tag!(i64, Long);
scalar_tag!(f32, Float);
scalar_tag!(f64, Double);

array_tag!(i8, ByteArray);
array_tag!(i32, IntArray);
array_tag!(i64, LongArray);

/// Decoder can take any reader and decode it as NBT data. Does not do
/// decompression.
///
/// # Examples
///
/// ## Dump NBT
///
/// Reads GZip compressed data from stdin and prints it in Rust's `Debug`
/// format.
///
/// ```no_run
/// use nbtfile::decode::Decoder;
/// use flate2::read::GzDecoder;
///
/// let stdin = std::io::stdin();
/// let mut decoder = Decoder::new(GzDecoder::new(stdin));
///
/// match decoder.read_tag() {
///     Ok(value) => println!("{:#?}", value),
///     Err(e) => eprintln!("{}", e),
/// }
/// ```
///
/// ## Known layout
///
/// When the caller already knows what comes next it can use the primitives
/// directly. Here the input is known to be a named compound.
///
/// ```
/// use nbtfile::{decode::Decoder, Tag};
///
/// # fn main() -> nbtfile::error::Result<()> {
/// let data: &[u8] = &[10, 0, 1, b'c', 1, 0, 1, b'b', 7, 0];
/// let mut decoder = Decoder::new(data);
///
/// assert_eq!(decoder.read_kind()?, Tag::Compound);
/// let root = decoder.read_compound()?;
/// assert_eq!(root.as_compound().unwrap().get("b").unwrap().as_i64(), Some(7));
/// # Ok(())
/// # }
/// ```
pub struct Decoder<R: Read> {
    reader: R,
    opts: DecodeOpts,
    depth: usize,
}

impl Decoder<BufReader<File>> {
    /// Open a file for decoding. Failing to open it is a
    /// [`ResourceUnavailable`][`crate::error::ErrorKind::ResourceUnavailable`]
    /// error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::unavailable(path.display(), e))?;
        debug!("opened {} for decoding", path.display());
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> Decoder<R> {
    /// Create new decoder for the given reader.
    pub fn new(reader: R) -> Self {
        Self::with_opts(reader, DecodeOpts::default())
    }

    pub fn with_opts(reader: R, opts: DecodeOpts) -> Self {
        Self {
            reader,
            opts,
            depth: 0,
        }
    }

    /// Gets a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Gets a mutable reference to the underlying reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consumes this decoder, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read a complete named tag: kind, name and payload. An end tag has
    /// neither name nor payload and is returned as [`Value::End`].
    pub fn read_tag(&mut self) -> Result<Value> {
        let kind = self.read_kind()?;
        if kind == Tag::End {
            return Ok(Value::End);
        }

        let name = self.read_name()?;
        self.read_payload(kind, Some(name))
    }

    /// Read a single kind byte.
    pub fn read_kind(&mut self) -> Result<Tag> {
        let tag = self
            .reader
            .read_u8()
            .map_err(|e| Error::io(e, Phase::Kind))?;
        Tag::try_from(tag).map_err(|_| Error::unrecognized_kind(tag))
    }

    /// Read a tag name: a 2 byte length followed by that many bytes. Zero
    /// length names are fine.
    pub fn read_name(&mut self) -> Result<String> {
        self.read_size_prefixed_string(Phase::Name)
    }

    /// Read the 4 byte size prefix of an array or list. Negative sizes and
    /// sizes above [`DecodeOpts::max_seq_len`] are errors.
    pub fn read_size(&mut self) -> Result<usize> {
        let size = self
            .reader
            .read_i32::<BigEndian>()
            .map_err(|e| Error::io(e, Phase::Size))?;
        let size: usize = size
            .try_into()
            .map_err(|_| Error::invalid_length(size))?;

        if size > self.opts.max_seq_len {
            return Err(Error::length_limit(size, self.opts.max_seq_len));
        }
        Ok(size)
    }

    /// Read a fixed width payload, giving it `name`. The name is passed in
    /// rather than read so the same call works for unnamed list elements.
    pub fn read_scalar<T: ScalarTag>(&mut self, name: Name) -> Result<Value> {
        let mut buf = [0u8; 8];
        let buf = &mut buf[..T::WIDTH];
        self.reader
            .read_exact(buf)
            .map_err(|e| Error::io(e, Phase::Value))?;

        Ok(T::into_value(name, T::from_file_bytes(buf)))
    }

    /// Read `len` array elements, the size prefix having already been read.
    pub fn read_array<T: ArrayTag>(&mut self, name: Name, len: usize) -> Result<Value> {
        let bytes = len
            .checked_mul(T::WIDTH)
            .ok_or_else(|| Error::length_limit(len, usize::MAX / T::WIDTH))?;

        // Only buffer what the input actually has, rather than trusting the
        // declared length with an allocation.
        let mut buf = Vec::new();
        (&mut self.reader)
            .take(bytes as u64)
            .read_to_end(&mut buf)
            .map_err(|e| Error::io(e, Phase::Value))?;

        if buf.len() != bytes {
            return Err(Error::truncated(Phase::Value));
        }

        trace!("{:?} of {} elements", T::TAG, len);
        Ok(T::into_value(name, endian::read_file_array(&buf)))
    }

    /// Read a string payload: a 2 byte length followed by that many bytes.
    pub fn read_string(&mut self, name: Name) -> Result<Value> {
        let s = self.read_size_prefixed_string(Phase::Value)?;
        Ok(Value::String(name, s))
    }

    /// Read a list's name and then its payload.
    pub fn read_list(&mut self) -> Result<Value> {
        let name = self.read_name()?;
        self.read_list_payload(Some(name))
    }

    /// Read a list payload: element kind, size, then that many unnamed
    /// values of the element kind.
    pub fn read_list_payload(&mut self, name: Name) -> Result<Value> {
        self.nested(|de| {
            let element = de.read_kind()?;
            let len = de.read_size()?;
            trace!("list {:?} of {} {:?} at depth {}", name, len, element, de.depth);

            let values = if element == Tag::End {
                if len != 0 {
                    warn!("list of end tags declared {} elements, treating as empty", len);
                }
                Vec::new()
            } else {
                let mut values = Vec::with_capacity(len.min(MAX_PREALLOC));
                for _ in 0..len {
                    values.push(de.read_payload(element, None)?);
                }
                values
            };

            Ok(Value::List(name, List::from_decoded(element, values)))
        })
    }

    /// Read a compound's name and then its payload.
    pub fn read_compound(&mut self) -> Result<Value> {
        let name = self.read_name()?;
        self.read_compound_payload(Some(name))
    }

    /// Read named members until an end tag. The end tag is consumed but is
    /// not a member.
    pub fn read_compound_payload(&mut self, name: Name) -> Result<Value> {
        self.nested(|de| {
            trace!("compound {:?} at depth {}", name, de.depth);

            let mut compound = Compound::new();
            loop {
                let kind = de.read_kind()?;
                if kind == Tag::End {
                    break;
                }

                let member = de.read_name()?;
                compound.push_decoded(de.read_payload(kind, Some(member))?);
            }

            Ok(Value::Compound(name, compound))
        })
    }

    /// Read the payload for a tag of the given kind. An end tag has no
    /// payload, so this reads nothing and returns [`Value::End`].
    pub fn read_payload(&mut self, kind: Tag, name: Name) -> Result<Value> {
        match kind {
            Tag::End => Ok(Value::End),
            Tag::Byte => self.read_scalar::<i8>(name),
            Tag::Short => self.read_scalar::<i16>(name),
            Tag::Int => self.read_scalar::<i32>(name),
            Tag::Long => self.read_scalar::<i64>(name),
            Tag::Float => self.read_scalar::<f32>(name),
            Tag::Double => self.read_scalar::<f64>(name),
            Tag::ByteArray => {
                let len = self.read_size()?;
                self.read_array::<i8>(name, len)
            }
            Tag::IntArray => {
                let len = self.read_size()?;
                self.read_array::<i32>(name, len)
            }
            Tag::LongArray => {
                let len = self.read_size()?;
                self.read_array::<i64>(name, len)
            }
            Tag::String => self.read_string(name),
            Tag::List => self.read_list_payload(name),
            Tag::Compound => self.read_compound_payload(name),
        }
    }

    fn read_size_prefixed_string(&mut self, phase: Phase) -> Result<String> {
        let len = self
            .reader
            .read_u16::<BigEndian>()
            .map_err(|e| Error::io(e, phase))? as usize;

        let mut buf = vec![0; len];
        self.reader
            .read_exact(&mut buf[..])
            .map_err(|e| Error::io(e, phase))?;

        let decoded = cesu8::from_java_cesu8(&buf[..])
            .map(|s| s.into_owned())
            .ok();
        decoded.ok_or_else(|| Error::nonunicode(buf))
    }

    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.opts.max_depth {
            return Err(Error::depth_limit(self.opts.max_depth));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

/// Decode a single top level tag from a reader.
pub fn from_reader<R: Read>(reader: R) -> Result<Value> {
    from_reader_with_opts(reader, DecodeOpts::default())
}

/// Decode a single top level tag from a reader with the given options.
pub fn from_reader_with_opts<R: Read>(reader: R, opts: DecodeOpts) -> Result<Value> {
    Decoder::with_opts(reader, opts).read_tag()
}

/// Decode a single top level tag from bytes. Bytes left over after the tag
/// are an error.
pub fn from_bytes(input: &[u8]) -> Result<Value> {
    from_bytes_with_opts(input, DecodeOpts::default())
}

/// Decode a single top level tag from bytes with the given options.
pub fn from_bytes_with_opts(input: &[u8], opts: DecodeOpts) -> Result<Value> {
    let mut decoder = Decoder::with_opts(input, opts);
    let value = decoder.read_tag()?;

    let remaining = decoder.get_ref().len();
    if remaining != 0 {
        return Err(Error::trailing_data(remaining));
    }
    Ok(value)
}

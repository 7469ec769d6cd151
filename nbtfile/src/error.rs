//! Contains the Error and Result type used by the decoder.

use std::fmt::Display;

/// The part of a tag the decoder was reading when input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The one byte tag kind.
    Kind,
    /// The length prefix or bytes of a tag name.
    Name,
    /// The 4 byte size prefix of an array or list.
    Size,
    /// The payload itself, including the length prefix of a string.
    Value,
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Phase::Kind => "kind",
            Phase::Name => "name",
            Phase::Size => "size",
            Phase::Value => "value",
        })
    }
}

/// Errors that can occur while decoding. Every error is terminal for the
/// decode that raised it, no partial tree is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input could not be opened or read at all.
    ResourceUnavailable,

    /// Input ended part way through a tag.
    TruncatedInput(Phase),

    /// A kind byte outside of 0 to 12.
    UnrecognizedKind(u8),

    /// Expected unicode data but was not valid. Contained bytes are the
    /// invalid data.
    Nonunicode(Vec<u8>),

    /// A declared size was negative.
    InvalidLength(i32),

    /// Lists and compounds were nested deeper than allowed.
    DepthLimit(usize),

    /// A declared size was larger than allowed.
    LengthLimit(usize),

    /// Bytes were left over after the top level tag.
    TrailingData(usize),

    /// A list or compound was built from values breaking its invariants.
    InvalidList,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self.kind, ErrorKind::TruncatedInput(_))
    }

    /// The phase that was in progress if input was truncated.
    pub fn phase(&self) -> Option<Phase> {
        match self.kind {
            ErrorKind::TruncatedInput(phase) => Some(phase),
            _ => None,
        }
    }

    /// Map an IO error that happened in the given phase. Running out of
    /// input is truncation, anything else means the input is unusable.
    pub(crate) fn io(e: std::io::Error, phase: Phase) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::truncated(phase),
            _ => Self {
                msg: format!("io error while reading {}: {}", phase, e),
                kind: ErrorKind::ResourceUnavailable,
            },
        }
    }

    pub(crate) fn unavailable(what: impl Display, e: std::io::Error) -> Self {
        Self {
            msg: format!("cannot open {}: {}", what, e),
            kind: ErrorKind::ResourceUnavailable,
        }
    }

    pub(crate) fn truncated(phase: Phase) -> Self {
        Self {
            msg: format!("eof: unexpectedly ran out of input reading {}", phase),
            kind: ErrorKind::TruncatedInput(phase),
        }
    }

    pub(crate) fn unrecognized_kind(tag: u8) -> Self {
        Self {
            msg: format!("invalid nbt tag value: {}", tag),
            kind: ErrorKind::UnrecognizedKind(tag),
        }
    }

    pub(crate) fn nonunicode(d: Vec<u8>) -> Self {
        Self {
            msg: format!(
                "invalid nbt string: nonunicode: {}",
                String::from_utf8_lossy(&d),
            ),
            kind: ErrorKind::Nonunicode(d),
        }
    }

    pub(crate) fn invalid_length(size: i32) -> Self {
        Self {
            msg: format!("size was negative: {}", size),
            kind: ErrorKind::InvalidLength(size),
        }
    }

    pub(crate) fn depth_limit(max: usize) -> Self {
        Self {
            msg: format!("nesting deeper than the maximum of {}", max),
            kind: ErrorKind::DepthLimit(max),
        }
    }

    pub(crate) fn length_limit(size: usize, max: usize) -> Self {
        Self {
            msg: format!("size ({}) greater than max sequence length ({})", size, max),
            kind: ErrorKind::LengthLimit(max),
        }
    }

    pub(crate) fn trailing_data(remaining: usize) -> Self {
        Self {
            msg: format!("{} bytes of trailing data after tag", remaining),
            kind: ErrorKind::TrailingData(remaining),
        }
    }

    pub(crate) fn invalid_list(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::InvalidList,
        }
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

use flate2::read::GzDecoder;
use log::debug;
use nbtfile::decode::Decoder;
use nbtfile::error::Result;
use nbtfile::{from_reader_with_opts, DecodeOpts, Value};
use std::io::{self, BufRead, Write};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decode one tag from a file, decompressing it first if it is gzipped.
pub fn read_file(path: &Path, opts: DecodeOpts) -> Result<Value> {
    let reader = Decoder::open(path)?.into_inner();
    decode_input(reader, opts)
}

/// Decode one tag from buffered input, decompressing it first if it starts
/// with the gzip magic number.
pub fn decode_input<R: BufRead>(mut reader: R, opts: DecodeOpts) -> Result<Value> {
    // A failed peek isn't fatal here, the decoder will hit the same error
    // and report it properly.
    let gzip = reader
        .fill_buf()
        .map(|b| b.starts_with(&GZIP_MAGIC))
        .unwrap_or(false);

    if gzip {
        debug!("input is gzip compressed");
        from_reader_with_opts(GzDecoder::new(reader), opts)
    } else {
        from_reader_with_opts(reader, opts)
    }
}

/// Write the tree as indented text, one tag per line.
pub fn write_tree<W: Write>(out: &mut W, value: &Value) -> io::Result<()> {
    write_value(out, value, 0)
}

fn write_value<W: Write>(out: &mut W, value: &Value, indent: usize) -> io::Result<()> {
    let label = match value.name() {
        Some(name) => format!("{:?}({:?})", value.tag(), name),
        None => format!("{:?}", value.tag()),
    };
    write!(out, "{:indent$}{}", "", label, indent = indent)?;

    match value {
        Value::End => writeln!(out),
        Value::Byte(_, v) => writeln!(out, ": {}", v),
        Value::Short(_, v) => writeln!(out, ": {}", v),
        Value::Int(_, v) => writeln!(out, ": {}", v),
        Value::Long(_, v) => writeln!(out, ": {}", v),
        Value::Float(_, v) => writeln!(out, ": {}", v),
        Value::Double(_, v) => writeln!(out, ": {}", v),
        Value::String(_, v) => writeln!(out, ": {:?}", v),
        Value::ByteArray(_, v) => writeln!(out, ": {:?}", v),
        Value::IntArray(_, v) => writeln!(out, ": {:?}", v),
        Value::LongArray(_, v) => writeln!(out, ": {:?}", v),
        Value::List(_, list) => {
            writeln!(out, " [{} x {:?}]", list.len(), list.element())?;
            for v in list {
                write_value(out, v, indent + 4)?;
            }
            Ok(())
        }
        Value::Compound(_, compound) => {
            writeln!(out, " {{{} entries}}", compound.len())?;
            for v in compound {
                write_value(out, v, indent + 4)?;
            }
            Ok(())
        }
    }
}

use std::result;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::Serialize;

use super::{Compound, List, Value};

// Only payloads are serialized. Names become map keys of the enclosing
// compound, so a member name is never repeated inside its own value.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::End => serializer.serialize_unit(),
            Value::Byte(_, v) => serializer.serialize_i8(*v),
            Value::Short(_, v) => serializer.serialize_i16(*v),
            Value::Int(_, v) => serializer.serialize_i32(*v),
            Value::Long(_, v) => serializer.serialize_i64(*v),
            Value::Float(_, v) => serializer.serialize_f32(*v),
            Value::Double(_, v) => serializer.serialize_f64(*v),
            Value::String(_, v) => serializer.serialize_str(v),
            Value::ByteArray(_, v) => v.serialize(serializer),
            Value::IntArray(_, v) => v.serialize(serializer),
            Value::LongArray(_, v) => v.serialize(serializer),
            Value::List(_, v) => v.serialize(serializer),
            Value::Compound(_, v) => v.serialize(serializer),
        }
    }
}

impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for v in self {
            seq.serialize_element(v)?;
        }
        seq.end()
    }
}

// Duplicate names are written as repeated keys in member order. Formats that
// reject duplicate keys on the way back in will see the last one win.
impl Serialize for Compound {
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for v in self {
            map.serialize_entry(v.name().unwrap_or_default(), v)?;
        }
        map.end()
    }
}

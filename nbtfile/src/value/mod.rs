mod ser;

use crate::{
    error::{Error, Result},
    Tag,
};

/// An optional `String`. Members of a compound and the top level tag are
/// named, elements of a list are not.
pub type Name = Option<String>;

/// Value is a complete NBT tag. It owns its data. Compounds and Lists are
/// recursively decoded, so a `Value` is the root of an independent tree.
///
/// The name part of each variant is optional, since elements in an NBT list
/// do not have names. `End` only ever appears when the top level kind byte is
/// itself an end tag; it is never a member of a compound.
///
/// ```
/// # use nbtfile::{Value, Compound};
/// let v = Value::Compound(Some("level".into()), Compound::new());
/// match &v {
///     Value::Compound(Some(name), c) => println!("{} has {} members", name, c.len()),
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    End,
    Byte(Name, i8),
    Short(Name, i16),
    Int(Name, i32),
    Long(Name, i64),
    Float(Name, f32),
    Double(Name, f64),
    ByteArray(Name, Vec<i8>),
    String(Name, String),
    List(Name, List),
    Compound(Name, Compound),
    IntArray(Name, Vec<i32>),
    LongArray(Name, Vec<i64>),
}

impl Value {
    /// The kind of this tag.
    pub fn tag(&self) -> Tag {
        match self {
            Value::End => Tag::End,
            Value::Byte(..) => Tag::Byte,
            Value::Short(..) => Tag::Short,
            Value::Int(..) => Tag::Int,
            Value::Long(..) => Tag::Long,
            Value::Float(..) => Tag::Float,
            Value::Double(..) => Tag::Double,
            Value::ByteArray(..) => Tag::ByteArray,
            Value::String(..) => Tag::String,
            Value::List(..) => Tag::List,
            Value::Compound(..) => Tag::Compound,
            Value::IntArray(..) => Tag::IntArray,
            Value::LongArray(..) => Tag::LongArray,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Value::End => None,
            Value::Byte(n, _)
            | Value::Short(n, _)
            | Value::Int(n, _)
            | Value::Long(n, _)
            | Value::Float(n, _)
            | Value::Double(n, _)
            | Value::ByteArray(n, _)
            | Value::String(n, _)
            | Value::List(n, _)
            | Value::Compound(n, _)
            | Value::IntArray(n, _)
            | Value::LongArray(n, _) => n.as_deref(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(_, v) => Some(v as i64),
            Value::Short(_, v) => Some(v as i64),
            Value::Int(_, v) => Some(v as i64),
            Value::Long(_, v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(_, v) => Some(v as f64),
            Value::Short(_, v) => Some(v as f64),
            Value::Int(_, v) => Some(v as f64),
            Value::Long(_, v) => Some(v as f64),
            Value::Float(_, v) => Some(v as f64),
            Value::Double(_, v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(_, s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(_, l) => Some(l),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(_, c) => Some(c),
            _ => None,
        }
    }

    pub fn as_byte_array(&self) -> Option<&[i8]> {
        match self {
            Value::ByteArray(_, v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Value::IntArray(_, v) => Some(v),
            _ => None,
        }
    }

    pub fn as_long_array(&self) -> Option<&[i64]> {
        match self {
            Value::LongArray(_, v) => Some(v),
            _ => None,
        }
    }
}

/// A homogeneous sequence of unnamed values. Every element has the kind
/// returned by [`List::element`].
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    element: Tag,
    values: Vec<Value>,
}

impl List {
    /// Create a list, checking that every value is unnamed and of the
    /// element kind. A list of `End` must be empty.
    pub fn new(element: Tag, values: Vec<Value>) -> Result<Self> {
        if element == Tag::End && !values.is_empty() {
            return Err(Error::invalid_list("list of end tags must be empty"));
        }

        for v in &values {
            if v.tag() != element {
                return Err(Error::invalid_list(format!(
                    "list of {:?} contains a {:?}",
                    element,
                    v.tag()
                )));
            }
            if v.name().is_some() {
                return Err(Error::invalid_list("list elements cannot be named"));
            }
        }

        Ok(Self { element, values })
    }

    /// An empty list with element kind `End`, which is how empty lists
    /// usually appear on the wire.
    pub fn empty() -> Self {
        Self {
            element: Tag::End,
            values: Vec::new(),
        }
    }

    // The decoder builds elements straight from the element kind, so they
    // are correct by construction.
    pub(crate) fn from_decoded(element: Tag, values: Vec<Value>) -> Self {
        debug_assert!(values.iter().all(|v| v.tag() == element && v.name().is_none()));
        Self { element, values }
    }

    pub fn element(&self) -> Tag {
        self.element
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An ordered group of named values. Names are not required to be unique;
/// duplicates are kept in the order they were read.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    members: Vec<Value>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member. It must be named and cannot be an `End`.
    pub fn push(&mut self, value: Value) -> Result<()> {
        if value.tag() == Tag::End {
            return Err(Error::invalid_list("end tag cannot be a compound member"));
        }
        if value.name().is_none() {
            return Err(Error::invalid_list("compound members must be named"));
        }
        self.members.push(value);
        Ok(())
    }

    pub(crate) fn push_decoded(&mut self, value: Value) {
        self.members.push(value);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The first member with the given name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members.iter().find(|v| v.name() == Some(name))
    }

    /// Every member with the given name, in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.members.iter().filter(move |v| v.name() == Some(name))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.members.iter()
    }

    pub fn into_members(self) -> Vec<Value> {
        self.members
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Dynamic values passed in by the calling environment.
//!
//! `Value` is a closed model of everything a caller may hand to the bridge
//! as an index or configuration argument. Heap payloads are shared through
//! [`Heap`], whose constructor is private to this module, so heap values are
//! only built through the factory methods below.
//!
//! # Thread Safety
//!
//! Every payload is behind an `Arc`; values are `Send + Sync` and cheap to
//! clone.

mod array;
mod heap;

use std::fmt;

pub use array::{ArrayLike, ArrayRef, HostArray, Shape};
pub use heap::Heap;

/// A dynamically-typed host value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    // Markers
    /// Absent value (`None` in the host).
    None,
    /// The ellipsis marker (`...`).
    Ellipsis,

    // Scalars (inline)
    Bool(bool),
    /// Machine-width host integer.
    Int(i64),
    /// Arbitrary-precision host integer, held to 128 bits.
    BigInt(i128),
    Float(f64),

    // Heap types
    Str(Heap<String>),
    /// A `start:stop:step` slice object.
    Slice(Heap<SliceValue>),
    List(Heap<Vec<Value>>),
    Tuple(Heap<Vec<Value>>),
    /// An array operand.
    Array(ArrayRef),
    /// A host object the bridge has no model for; carries its type name.
    Opaque(Heap<String>),
}

/// Bounds of a slice object. `Value::None` marks an omitted bound.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceValue {
    pub start: Value,
    pub stop: Value,
    pub step: Value,
}

// Factory methods

impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(items))
    }

    /// Create a slice object from arbitrary bound values.
    #[inline]
    pub fn slice(start: Value, stop: Value, step: Value) -> Self {
        Value::Slice(Heap::new(SliceValue { start, stop, step }))
    }

    /// Create a slice object from optional integer bounds.
    ///
    /// ```text
    /// Value::range(Some(0), Some(5), None)   // 0:5
    /// ```
    pub fn range(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Self {
        let bound = |b: Option<i64>| b.map_or(Value::None, Value::Int);
        Value::slice(bound(start), bound(stop), bound(step))
    }

    #[inline]
    pub fn array(array: impl Into<ArrayRef>) -> Self {
        Value::Array(array.into())
    }

    /// Create an opaque host object of the named type.
    #[inline]
    pub fn opaque(type_name: impl Into<String>) -> Self {
        Value::Opaque(Heap::new(type_name.into()))
    }
}

impl From<HostArray> for ArrayRef {
    fn from(array: HostArray) -> Self {
        array.into_ref()
    }
}

// Queries

impl Value {
    /// The value is a string, number, or boolean the host can convert to
    /// another primitive.
    pub fn is_convertible(&self) -> bool {
        matches!(
            self,
            Value::Bool(_) | Value::Int(_) | Value::BigInt(_) | Value::Float(_) | Value::Str(_)
        )
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// List or tuple members; strings are not sequences here.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Host type name, used in diagnostics.
    pub fn type_name(&self) -> &str {
        match self {
            Value::None => "NoneType",
            Value::Ellipsis => "ellipsis",
            Value::Bool(_) => "bool",
            Value::Int(_) | Value::BigInt(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Slice(_) => "slice",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Array(_) => "ndarray",
            Value::Opaque(name) => name.as_str(),
        }
    }
}

// Display renders the host's repr, so messages can quote values verbatim.

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Ellipsis => write!(f, "Ellipsis"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(n) => write!(f, "{n}"),
            Value::BigInt(n) => write!(f, "{n}"),
            Value::Float(x) => write_float(f, *x),
            Value::Str(s) => write!(f, "{}", &**s),
            Value::Slice(s) => write!(f, "slice({}, {}, {})", s.start, s.stop, s.step),
            Value::List(items) => {
                write!(f, "[")?;
                write_items(f, items)?;
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Value::Array(a) => write!(f, "{a}"),
            Value::Opaque(name) => write!(f, "<{} object>", &**name),
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        write!(f, "nan")
    } else if x.is_infinite() {
        write!(f, "{}inf", if x < 0.0 { "-" } else { "" })
    } else if x.fract() == 0.0 && x.abs() < 1e16 {
        write!(f, "{x:.1}")
    } else {
        write!(f, "{x}")
    }
}

#[cfg(test)]
mod tests;

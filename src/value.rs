//! Values as they arrive from the host runtime.
//!
//! `Value` is the Rust-side tagged union. `HostValue` is the same thing laid
//! out for C callers: a tag plus one payload slot per numeric representation.
//! Both implement `Numeric`, which is all the adder needs to know.

use std::fmt;

pub const TAG_UNDEFINED: u32 = 0;
pub const TAG_NULL: u32 = 1;
pub const TAG_BOOLEAN: u32 = 2;
pub const TAG_INTEGER: u32 = 3;
pub const TAG_FLOAT: u32 = 4;
pub const TAG_STRING: u32 = 5;
pub const TAG_OBJECT: u32 = 6;

/// Runtime type tag of a host value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Object,
    Unknown,
}

impl ValueKind {
    /// Decode a C tag. Anything outside the known range is `Unknown`.
    pub fn from_tag(tag: u32) -> Self {
        match tag {
            TAG_UNDEFINED => ValueKind::Undefined,
            TAG_NULL => ValueKind::Null,
            TAG_BOOLEAN => ValueKind::Boolean,
            TAG_INTEGER => ValueKind::Integer,
            TAG_FLOAT => ValueKind::Float,
            TAG_STRING => ValueKind::String,
            TAG_OBJECT => ValueKind::Object,
            _ => ValueKind::Unknown,
        }
    }

    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(self, ValueKind::Integer | ValueKind::Float)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Object => "object",
            ValueKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Anything that carries a type tag and, when numeric, a double value.
pub trait Numeric {
    fn kind(&self) -> ValueKind;

    /// The value as an `f64`, or `None` if the tag is not numeric.
    fn as_f64(&self) -> Option<f64>;
}

/// A dynamically-typed value passed in from the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Object,
}

impl Numeric for Value {
    fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Object => ValueKind::Object,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Integer(i) => Some(i as f64),
            Value::Float(f) => Some(f),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

/// C layout of a host value. Only the payload matching `tag` is read.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct HostValue {
    pub tag: u32,
    pub int_value: i64,
    pub float_value: f64,
}

impl HostValue {
    pub fn integer(i: i64) -> Self {
        HostValue {
            tag: TAG_INTEGER,
            int_value: i,
            float_value: 0.0,
        }
    }

    pub fn float(f: f64) -> Self {
        HostValue {
            tag: TAG_FLOAT,
            int_value: 0,
            float_value: f,
        }
    }

    pub fn tagged(tag: u32) -> Self {
        HostValue {
            tag,
            ..Default::default()
        }
    }
}

impl Numeric for HostValue {
    fn kind(&self) -> ValueKind {
        ValueKind::from_tag(self.tag)
    }

    fn as_f64(&self) -> Option<f64> {
        match self.tag {
            TAG_INTEGER => Some(self.int_value as f64),
            TAG_FLOAT => Some(self.float_value),
            _ => None,
        }
    }
}

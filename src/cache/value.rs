//! Cache Value Module
//!
//! Tagged union of the value kinds a cache entry can hold, with checked
//! extraction into concrete Rust types.

use std::fmt;

// == Value ==
/// A value stored in the cache.
///
/// Extraction through `TryFrom<Value>` never coerces between kinds: an
/// `Int` is not a `Float` and is not a `String`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
}

impl Value {
    /// Returns the name of this value's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Bytes(_) => "bytes",
            Value::Json(_) => "json",
        }
    }

    /// Parses a textual literal into the narrowest matching kind.
    ///
    /// Order: integer, float, boolean, JSON object/array, then plain string.
    pub fn parse_literal(raw: &str) -> Self {
        if let Ok(n) = raw.parse::<i64>() {
            return Value::Int(n);
        }
        // "inf" and "nan" parse as f64 but are meant as words here
        if let Some(f) = raw.parse::<f64>().ok().filter(|f| f.is_finite()) {
            return Value::Float(f);
        }
        match raw {
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            _ => {}
        }
        if raw.starts_with('{') || raw.starts_with('[') {
            if let Ok(json) = serde_json::from_str(raw) {
                return Value::Json(json);
            }
        }
        Value::Str(raw.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            Value::Json(j) => write!(f, "{}", j),
        }
    }
}

// == Conversions ==
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

macro_rules! value_conversions {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = Value;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

value_conversions! {
    String => Str,
    i64 => Int,
    f64 => Float,
    bool => Bool,
    Vec<u8> => Bytes,
    serde_json::Value => Json,
}

//! Cell value types

use crate::error::{Error, Result};
use crate::style::StyleRef;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};

/// A scalar cell value
///
/// These are the only shapes a cell may hold; anything else is rejected at
/// assignment time, never deferred to serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum CellScalar {
    /// Text
    String(String),
    /// Integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Boolean (TRUE/FALSE)
    Bool(bool),
    /// Date/time (naive; the renderer applies the workbook date system)
    DateTime(NaiveDateTime),
}

impl Serialize for CellScalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CellScalar::String(s) => serializer.serialize_str(s),
            CellScalar::Int(n) => serializer.serialize_i64(*n),
            CellScalar::Float(n) => serializer.serialize_f64(*n),
            CellScalar::Bool(b) => serializer.serialize_bool(*b),
            CellScalar::DateTime(dt) => {
                serializer.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
            }
        }
    }
}

/// The value stored in a cell
///
/// Reading an unset cell yields [`CellValue::Empty`], not an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Empty,
    /// A scalar value
    Scalar(CellScalar),
}

impl CellValue {
    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Try to get the value as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Scalar(CellScalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Scalar(CellScalar::Int(n)) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a float (integers widen)
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Scalar(CellScalar::Float(n)) => Some(*n),
            CellValue::Scalar(CellScalar::Int(n)) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Scalar(CellScalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Convert a loosely-typed JSON value into a cell value
    ///
    /// This is the boundary used by language bindings: null becomes an empty
    /// cell, scalars map directly (integral numbers become `Int`), and any
    /// composite shape fails [`Error::TypeMismatch`] here, at assignment
    /// time.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        use serde_json::Value;
        match value {
            Value::Null => Ok(CellValue::Empty),
            Value::Bool(b) => Ok(CellValue::Scalar(CellScalar::Bool(*b))),
            Value::String(s) => Ok(CellValue::Scalar(CellScalar::String(s.clone()))),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(CellValue::Scalar(CellScalar::Int(i)))
                } else {
                    // f64 conversion cannot fail for a JSON number
                    Ok(CellValue::Scalar(CellScalar::Float(
                        n.as_f64().unwrap_or_default(),
                    )))
                }
            }
            Value::Array(_) => Err(Error::TypeMismatch("array is not a scalar".into())),
            Value::Object(_) => Err(Error::TypeMismatch("object is not a scalar".into())),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CellValue::Empty => serializer.serialize_str(""),
            CellValue::Scalar(s) => s.serialize(serializer),
        }
    }
}

impl From<CellScalar> for CellValue {
    fn from(s: CellScalar) -> Self {
        CellValue::Scalar(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Scalar(CellScalar::String(s.to_string()))
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Scalar(CellScalar::String(s))
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Scalar(CellScalar::Int(n))
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Scalar(CellScalar::Int(n as i64))
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Scalar(CellScalar::Int(n as i64))
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Scalar(CellScalar::Float(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Scalar(CellScalar::Bool(b))
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::Scalar(CellScalar::DateTime(dt))
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Scalar(CellScalar::DateTime(
            d.and_hms_opt(0, 0, 0).unwrap_or_default(),
        ))
    }
}

/// A cell assignment: a value plus an optional style tag
///
/// This models the tuple-like input accepted at the bindings boundary, where
/// a cell can be assigned either a bare scalar or a `[value, style-name]`
/// pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CellEntry {
    /// The value to assign
    pub value: CellValue,
    /// Optional style reference, resolved by the owning workbook's registry
    pub style: Option<StyleRef>,
}

impl CellEntry {
    /// Create an entry with the default style
    pub fn plain<V: Into<CellValue>>(value: V) -> Self {
        Self {
            value: value.into(),
            style: None,
        }
    }

    /// Create an entry with an explicit style reference
    pub fn styled<V: Into<CellValue>, S: Into<StyleRef>>(value: V, style: S) -> Self {
        Self {
            value: value.into(),
            style: Some(style.into()),
        }
    }

    /// Convert a loosely-typed JSON value into an entry
    ///
    /// Accepts a bare scalar, or a two-element `[value, style-name]` array.
    /// Any other composite (wrong arity, or a style tag that is not a
    /// string) fails [`Error::TypeMismatch`] immediately.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        use serde_json::Value;
        match value {
            Value::Array(items) => match items.as_slice() {
                [v, Value::String(style)] => Ok(Self {
                    value: CellValue::from_json(v)?,
                    style: Some(StyleRef::Named(style.clone())),
                }),
                _ => Err(Error::TypeMismatch(format!(
                    "expected [value, style-name], got array of {} elements",
                    items.len()
                ))),
            },
            other => Ok(Self {
                value: CellValue::from_json(other)?,
                style: None,
            }),
        }
    }
}

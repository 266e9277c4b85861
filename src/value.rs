//! Numeric interpretation of raw fields
//!
//! Every field of a [`Table`](crate::Table) is kept as the raw string it was ingested as. Whether
//! a column is numeric is decided at the point of use by parsing its fields with [`to_number`].
//! An empty field or a literal `?` (after trimming) is the missing sentinel and parses to
//! [`Value::Missing`]. A field that parses to NaN (such as `nan`) is missing as well, so
//! [`Value::Number`] never holds NaN.
use thiserror::Error;

/// The literal used to mark an absent value
pub const MISSING: &str = "?";

/// Error returned when a field is neither a number nor the missing sentinel
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{value:?} is neither a number nor a missing value")]
pub struct ParseValueError {
    pub value: String,
}

/// A parsed numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Missing,
    Number(f64),
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Returns the number, or `None` for a missing value
    pub fn number(&self) -> Option<f64> {
        match *self {
            Value::Number(x) => Some(x),
            Value::Missing => None,
        }
    }

    /// Threshold comparison used by numeric splits
    ///
    /// A missing value is never at least any threshold.
    pub fn at_least(&self, threshold: f64) -> bool {
        match *self {
            Value::Number(x) => x >= threshold,
            Value::Missing => false,
        }
    }
}

/// Returns true if the trimmed field is the missing sentinel
pub fn is_missing(s: &str) -> bool {
    let s = s.trim();
    s.is_empty() || s == MISSING
}

/// Parses a raw field into a [`Value`]
///
/// Surrounding whitespace is ignored. Empty fields, `?` and fields parsing to NaN yield
/// [`Value::Missing`].
pub fn to_number(s: &str) -> Result<Value, ParseValueError> {
    let s = s.trim();
    if s.is_empty() || s == MISSING {
        return Ok(Value::Missing);
    }

    match s.parse::<f64>() {
        Ok(x) if x.is_nan() => Ok(Value::Missing),
        Ok(x) => Ok(Value::Number(x)),
        Err(_) => Err(ParseValueError {
            value: s.to_string(),
        }),
    }
}

/// Returns true if [`to_number`] accepts the field, missing values included
pub fn is_number(s: &str) -> bool {
    to_number(s).is_ok()
}

/// Formats a number with the shortest representation that round-trips, always keeping a
/// fractional part for integral values (`4.0` rather than `4`).
pub fn format_number(x: f64) -> String {
    format!("{:?}", x)
}

mod coerce;

pub use coerce::{coerce, Literal};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Display;
use uuid::Uuid;

/// A typed field value or coerced literal.
///
/// Integer widths collapse to `I64` (signed and `u8..=u32`) or `U64` (`u64`, `usize`), floats to
/// `F64`. A literal is always coerced to the same variant its field produces, so comparisons
/// only ever see matching variants.
#[derive(Serialize, Debug, Clone, PartialEq, PartialOrd)]
pub enum Value {
    Bool(bool),
    Char(char),
    I64(i64),
    U64(u64),
    F64(f64),
    String(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Timestamp(DateTime<Utc>),
    Guid(Uuid),
    Enum(EnumValue),
}

/// An enumeration member. Members order by declaration position.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnumValue {
    pub ordinal: usize,
    pub name: &'static str,
}

impl Value {
    /// Textual form used by the contains-family operators.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s),
            Value::Enum(member) => Cow::Borrowed(member.name),
            Value::Bool(b) => Cow::Owned(b.to_string()),
            Value::Char(c) => Cow::Owned(c.to_string()),
            Value::I64(i) => Cow::Owned(i.to_string()),
            Value::U64(u) => Cow::Owned(u.to_string()),
            Value::F64(f) => Cow::Owned(f.to_string()),
            Value::Date(date) => Cow::Owned(date.format("%Y-%m-%d").to_string()),
            Value::DateTime(datetime) => Cow::Owned(datetime.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
            Value::Timestamp(timestamp) => Cow::Owned(timestamp.to_rfc3339()),
            Value::Guid(guid) => Cow::Owned(guid.hyphenated().to_string()),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{:?}", s),
            Value::Char(c) => write!(f, "{:?}", c),
            other => f.write_str(&other.text()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Bool(b) }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self { Value::I64(i) }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self { Value::I64(i as i64) }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self { Value::U64(u) }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self { Value::F64(f) }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::String(s.to_string()) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::String(s) }
}

impl From<Uuid> for Value {
    fn from(guid: Uuid) -> Self { Value::Guid(guid) }
}

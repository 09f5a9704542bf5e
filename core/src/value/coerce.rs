use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use dynql::ast::Operator;
use std::str::FromStr;
use uuid::Uuid;

use super::{EnumValue, Value};
use crate::error::CompileError;
use crate::options::CompileOptions;
use crate::schema::{EnumSchema, FieldType, ScalarType};

/// A literal after coercion against the terminal type of its path.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Present value for a non-nullable field.
    Typed(Value),
    /// Value for a nullable field. `None` only when the configured null literal was given.
    Nullable(Option<Value>),
    /// Needle for the contains family. Already lower-cased for the case-insensitive operator.
    Text(String),
}

impl Literal {
    /// Comparable value, if any. `Text` literals are never compared by value.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Literal::Typed(value) => Some(value),
            Literal::Nullable(value) => value.as_ref(),
            Literal::Text(_) => None,
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Typed(value) | Literal::Nullable(Some(value)) => write!(f, "{value}"),
            Literal::Nullable(None) => f.write_str("null"),
            Literal::Text(text) => write!(f, "{text:?}"),
        }
    }
}

/// Convert literal text to the terminal type of a clause's path.
///
/// The contains family always yields [`Literal::Text`]. Otherwise nullable wrappers are stripped,
/// then the text is matched as an enum member, a GUID, or a scalar of the declared width.
pub fn coerce(text: &str, target: &FieldType, operator: Operator, options: &CompileOptions) -> Result<Literal, CompileError> {
    if !target.is_comparable() {
        return Err(CompileError::invalid_literal(text, target));
    }

    match operator {
        Operator::Contains => return Ok(Literal::Text(text.to_lowercase())),
        Operator::ContainsCaseSensitive => return Ok(Literal::Text(text.to_string())),
        _ => {}
    }

    if target.is_nullable() {
        if options.null_literal.as_deref().is_some_and(|null| null.eq_ignore_ascii_case(text.trim())) {
            return Ok(Literal::Nullable(None));
        }
        return Ok(Literal::Nullable(Some(coerce_value(text, target.underlying(), options)?)));
    }

    Ok(Literal::Typed(coerce_value(text, target, options)?))
}

fn coerce_value(text: &str, target: &FieldType, options: &CompileOptions) -> Result<Value, CompileError> {
    match target {
        FieldType::Enum(schema) => coerce_enum(text, schema),
        FieldType::Scalar(ScalarType::Guid) => {
            Uuid::parse_str(text.trim()).map(Value::Guid).map_err(|_| CompileError::InvalidGuid(text.to_string()))
        }
        FieldType::Scalar(scalar) => coerce_scalar(text, *scalar, options),
        other => Err(CompileError::invalid_literal(text, other)),
    }
}

fn coerce_enum(text: &str, schema: &'static EnumSchema) -> Result<Value, CompileError> {
    let ordinal = schema
        .ordinal_of(text.trim())
        .ok_or_else(|| CompileError::InvalidEnumValue { text: text.to_string(), enumeration: schema.name.to_string() })?;
    Ok(Value::Enum(EnumValue { ordinal, name: schema.members[ordinal] }))
}

fn coerce_scalar(text: &str, scalar: ScalarType, options: &CompileOptions) -> Result<Value, CompileError> {
    let invalid = || CompileError::invalid_literal(text, scalar.name());
    let value = match scalar {
        ScalarType::String => Value::String(text.to_string()),
        ScalarType::Char => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Value::Char(c),
                _ => return Err(invalid()),
            }
        }
        ScalarType::Bool => match text.trim() {
            t if t.eq_ignore_ascii_case("true") => Value::Bool(true),
            t if t.eq_ignore_ascii_case("false") => Value::Bool(false),
            _ => return Err(invalid()),
        },
        ScalarType::I8 => Value::I64(parse::<i8>(text).ok_or_else(invalid)?.into()),
        ScalarType::I16 => Value::I64(parse::<i16>(text).ok_or_else(invalid)?.into()),
        ScalarType::I32 => Value::I64(parse::<i32>(text).ok_or_else(invalid)?.into()),
        ScalarType::I64 => Value::I64(parse::<i64>(text).ok_or_else(invalid)?),
        ScalarType::Isize => Value::I64(parse::<isize>(text).and_then(|i| i64::try_from(i).ok()).ok_or_else(invalid)?),
        ScalarType::U8 => Value::I64(parse::<u8>(text).ok_or_else(invalid)?.into()),
        ScalarType::U16 => Value::I64(parse::<u16>(text).ok_or_else(invalid)?.into()),
        ScalarType::U32 => Value::I64(parse::<u32>(text).ok_or_else(invalid)?.into()),
        ScalarType::U64 => Value::U64(parse::<u64>(text).ok_or_else(invalid)?),
        ScalarType::Usize => Value::U64(parse::<usize>(text).and_then(|u| u64::try_from(u).ok()).ok_or_else(invalid)?),
        // Parsed at declared width so the literal rounds exactly like the stored field.
        ScalarType::F32 => Value::F64(parse::<f32>(text).ok_or_else(invalid)?.into()),
        ScalarType::F64 => Value::F64(parse::<f64>(text).ok_or_else(invalid)?),
        ScalarType::Date => Value::Date(parse_date(text.trim(), options).ok_or_else(invalid)?),
        ScalarType::DateTime => Value::DateTime(parse_datetime(text.trim(), options).ok_or_else(invalid)?),
        ScalarType::Timestamp => Value::Timestamp(parse_timestamp(text.trim(), options).ok_or_else(invalid)?),
        ScalarType::Guid => Value::Guid(Uuid::parse_str(text.trim()).map_err(|_| CompileError::InvalidGuid(text.to_string()))?),
    };
    Ok(value)
}

fn parse<T: FromStr>(text: &str) -> Option<T> { text.trim().parse().ok() }

fn parse_date(text: &str, options: &CompileOptions) -> Option<NaiveDate> {
    options.date_formats.iter().find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

fn parse_datetime(text: &str, options: &CompileOptions) -> Option<NaiveDateTime> {
    options
        .datetime_formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| parse_date(text, options).map(|date| date.and_time(NaiveTime::MIN)))
}

fn parse_timestamp(text: &str, options: &CompileOptions) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .ok()
        .or_else(|| parse_datetime(text, options).map(|naive| Utc.from_utc_datetime(&naive)))
}

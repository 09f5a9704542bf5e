//! Mapping from Rust field types to [`FieldType`]s and runtime values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;
use uuid::Uuid;

use crate::model::Record;
use crate::schema::{FieldType, ScalarType};
use crate::value::Value;

/// Runtime view of one field of one item.
pub enum PropertyRef<'a> {
    Value(Value),
    /// Absent optional value
    Null,
    Record(&'a dyn Record),
    List(Vec<PropertyRef<'a>>),
}

impl<'a> PropertyRef<'a> {
    pub fn into_value(self) -> Option<Value> {
        match self {
            PropertyRef::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl std::fmt::Debug for PropertyRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyRef::Value(value) => write!(f, "Value({value})"),
            PropertyRef::Null => f.write_str("Null"),
            PropertyRef::Record(_) => f.write_str("Record"),
            PropertyRef::List(items) => f.debug_list().entries(items).finish(),
        }
    }
}

/// A type that can appear as a field of a [`Model`](crate::model::Model).
pub trait Property {
    fn field_type() -> FieldType;
    fn to_ref(&self) -> PropertyRef<'_>;
}

macro_rules! scalar_property {
    ($($ty:ty => $scalar:ident, |$v:ident| $value:expr;)*) => {$(
        impl Property for $ty {
            fn field_type() -> FieldType { FieldType::Scalar(ScalarType::$scalar) }
            fn to_ref(&self) -> PropertyRef<'_> {
                let $v = self;
                PropertyRef::Value($value)
            }
        }
    )*};
}

scalar_property! {
    bool => Bool, |v| Value::Bool(*v);
    char => Char, |v| Value::Char(*v);
    i8 => I8, |v| Value::I64(i64::from(*v));
    i16 => I16, |v| Value::I64(i64::from(*v));
    i32 => I32, |v| Value::I64(i64::from(*v));
    i64 => I64, |v| Value::I64(*v);
    isize => Isize, |v| Value::I64(*v as i64);
    u8 => U8, |v| Value::I64(i64::from(*v));
    u16 => U16, |v| Value::I64(i64::from(*v));
    u32 => U32, |v| Value::I64(i64::from(*v));
    u64 => U64, |v| Value::U64(*v);
    usize => Usize, |v| Value::U64(*v as u64);
    f32 => F32, |v| Value::F64(f64::from(*v));
    f64 => F64, |v| Value::F64(*v);
    String => String, |v| Value::String(v.clone());
    NaiveDate => Date, |v| Value::Date(*v);
    NaiveDateTime => DateTime, |v| Value::DateTime(*v);
    DateTime<Utc> => Timestamp, |v| Value::Timestamp(*v);
    Uuid => Guid, |v| Value::Guid(*v);
}

impl<T: Property> Property for Option<T> {
    fn field_type() -> FieldType { FieldType::Nullable(Box::new(T::field_type())) }

    fn to_ref(&self) -> PropertyRef<'_> {
        match self {
            Some(inner) => inner.to_ref(),
            None => PropertyRef::Null,
        }
    }
}

macro_rules! transparent_property {
    ($($wrapper:ident),*) => {$(
        impl<T: Property> Property for $wrapper<T> {
            fn field_type() -> FieldType { T::field_type() }
            fn to_ref(&self) -> PropertyRef<'_> { (**self).to_ref() }
        }
    )*};
}

transparent_property!(Box, Rc, Arc);

macro_rules! collection_property {
    ($($collection:ident),*) => {$(
        impl<T: Property> Property for $collection<T> {
            fn field_type() -> FieldType { FieldType::Collection(Box::new(T::field_type())) }
            fn to_ref(&self) -> PropertyRef<'_> { PropertyRef::List(self.iter().map(Property::to_ref).collect()) }
        }
    )*};
}

collection_property!(Vec, VecDeque, BTreeSet);

impl<T: Property, S: BuildHasher> Property for HashSet<T, S> {
    fn field_type() -> FieldType { FieldType::Collection(Box::new(T::field_type())) }
    fn to_ref(&self) -> PropertyRef<'_> { PropertyRef::List(self.iter().map(Property::to_ref).collect()) }
}

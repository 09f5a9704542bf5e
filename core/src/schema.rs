//! Static description of the fields of an item type.
//!
//! Schemas are built once per type (see [`Model::schema`](crate::model::Model::schema)) and are
//! read-only afterwards, so they can be shared freely between threads and compile calls.

use std::fmt;

/// Scalar types, keeping their declared width so literals can be range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    String,
    /// Calendar date without time (`chrono::NaiveDate`)
    Date,
    /// Date and time without offset (`chrono::NaiveDateTime`)
    DateTime,
    /// UTC instant (`chrono::DateTime<Utc>`)
    Timestamp,
    Guid,
}

impl ScalarType {
    pub fn name(&self) -> &'static str {
        match self {
            ScalarType::Bool => "bool",
            ScalarType::Char => "char",
            ScalarType::I8 => "i8",
            ScalarType::I16 => "i16",
            ScalarType::I32 => "i32",
            ScalarType::I64 => "i64",
            ScalarType::Isize => "isize",
            ScalarType::U8 => "u8",
            ScalarType::U16 => "u16",
            ScalarType::U32 => "u32",
            ScalarType::U64 => "u64",
            ScalarType::Usize => "usize",
            ScalarType::F32 => "f32",
            ScalarType::F64 => "f64",
            ScalarType::String => "string",
            ScalarType::Date => "date",
            ScalarType::DateTime => "datetime",
            ScalarType::Timestamp => "timestamp",
            ScalarType::Guid => "guid",
        }
    }
}

/// Member names of an enumeration, in declaration order.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumSchema {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

impl EnumSchema {
    pub const fn new(name: &'static str, members: &'static [&'static str]) -> Self { Self { name, members } }

    /// Case-insensitive member lookup, returning the member's ordinal.
    pub fn ordinal_of(&self, text: &str) -> Option<usize> { self.members.iter().position(|member| eq_ignore_case(member, text)) }
}

/// Lazy handle to the schema of a nested model.
///
/// Resolved on use rather than at construction so that models may refer to themselves or to
/// each other (`Vec<Employee>` inside `Employee`).
#[derive(Clone, Copy)]
pub struct SchemaRef(fn() -> &'static Schema);

impl SchemaRef {
    pub fn of<M: crate::model::Model>() -> Self { SchemaRef(M::schema) }

    pub fn get(&self) -> &'static Schema { (self.0)() }
}

impl fmt::Debug for SchemaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "SchemaRef({})", self.get().type_name()) }
}

impl PartialEq for SchemaRef {
    fn eq(&self, other: &Self) -> bool { std::ptr::eq(self.get(), other.get()) }
}

impl Eq for SchemaRef {}

/// Declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Scalar(ScalarType),
    Enum(&'static EnumSchema),
    Nullable(Box<FieldType>),
    Object(SchemaRef),
    Collection(Box<FieldType>),
}

impl FieldType {
    /// Strip any number of nullable wrappers.
    pub fn underlying(&self) -> &FieldType {
        match self {
            FieldType::Nullable(inner) => inner.underlying(),
            other => other,
        }
    }

    pub fn is_nullable(&self) -> bool { matches!(self, FieldType::Nullable(_)) }

    /// Element type if this is a (possibly nullable) collection.
    pub fn element(&self) -> Option<&FieldType> {
        match self.underlying() {
            FieldType::Collection(element) => Some(element),
            _ => None,
        }
    }

    /// Nested schema if this is a (possibly nullable) object.
    pub fn object(&self) -> Option<&'static Schema> {
        match self.underlying() {
            FieldType::Object(schema) => Some(schema.get()),
            _ => None,
        }
    }

    /// Whether values of this type can be compared against a literal.
    pub fn is_comparable(&self) -> bool { matches!(self.underlying(), FieldType::Scalar(_) | FieldType::Enum(_)) }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Scalar(scalar) => f.write_str(scalar.name()),
            FieldType::Enum(schema) => write!(f, "enum {}", schema.name),
            FieldType::Nullable(inner) => write!(f, "{inner}?"),
            FieldType::Object(schema) => f.write_str(schema.get().type_name()),
            FieldType::Collection(element) => write!(f, "[{element}]"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub field_type: FieldType,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, field_type: FieldType) -> Self { Self { name, field_type } }
}

/// Field list of one item type. The position of a field is the index used by
/// [`Record::field`](crate::model::Record::field).
#[derive(Debug)]
pub struct Schema {
    type_name: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    pub fn new(type_name: &'static str, fields: Vec<FieldDescriptor>) -> Self { Self { type_name, fields } }

    pub fn type_name(&self) -> &'static str { self.type_name }

    pub fn fields(&self) -> &[FieldDescriptor] { &self.fields }

    /// Case-insensitive field lookup.
    pub fn field(&self, name: &str) -> Option<(usize, &FieldDescriptor)> {
        self.fields.iter().enumerate().find(|(_, field)| eq_ignore_case(field.name, name))
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        a.eq_ignore_ascii_case(b)
    } else {
        a.to_lowercase() == b.to_lowercase()
    }
}

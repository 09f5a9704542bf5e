//! Hand-written models for unit tests, shaped like the output of `#[derive(Model)]`.

use std::sync::OnceLock;

use crate::model::{Enumeration, Model, Record};
use crate::property::{Property, PropertyRef};
use crate::schema::{EnumSchema, FieldDescriptor, FieldType, Schema, SchemaRef};
use crate::value::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Role {
    Admin,
    #[default]
    Member,
}

impl Enumeration for Role {
    fn enum_schema() -> &'static EnumSchema {
        static SCHEMA: EnumSchema = EnumSchema::new("Role", &["Admin", "Member"]);
        &SCHEMA
    }

    fn ordinal(&self) -> usize { *self as usize }
}

impl Property for Role {
    fn field_type() -> FieldType { FieldType::Enum(Self::enum_schema()) }
    fn to_ref(&self) -> PropertyRef<'_> { PropertyRef::Value(Value::Enum(self.to_enum_value())) }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
}

impl Record for Address {
    fn field(&self, index: usize) -> Option<PropertyRef<'_>> {
        match index {
            0 => Some(self.street.to_ref()),
            1 => Some(self.city.to_ref()),
            _ => None,
        }
    }
}

impl Model for Address {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::new("Address", vec![
                FieldDescriptor::new("street", <String as Property>::field_type()),
                FieldDescriptor::new("city", <String as Property>::field_type()),
            ])
        })
    }

    fn copy_field(&mut self, source: &Self, index: usize) {
        match index {
            0 => self.street = source.street.clone(),
            1 => self.city = source.city.clone(),
            _ => {}
        }
    }
}

impl Property for Address {
    fn field_type() -> FieldType { FieldType::Object(SchemaRef::of::<Self>()) }
    fn to_ref(&self) -> PropertyRef<'_> { PropertyRef::Record(self) }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub name: String,
    pub age: i32,
    pub email: Option<String>,
    pub role: Role,
    pub address: Option<Address>,
    pub tags: Vec<String>,
    pub friends: Vec<User>,
}

impl Record for User {
    fn field(&self, index: usize) -> Option<PropertyRef<'_>> {
        match index {
            0 => Some(self.name.to_ref()),
            1 => Some(self.age.to_ref()),
            2 => Some(self.email.to_ref()),
            3 => Some(self.role.to_ref()),
            4 => Some(self.address.to_ref()),
            5 => Some(self.tags.to_ref()),
            6 => Some(self.friends.to_ref()),
            _ => None,
        }
    }
}

impl Model for User {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::new("User", vec![
                FieldDescriptor::new("name", <String as Property>::field_type()),
                FieldDescriptor::new("age", <i32 as Property>::field_type()),
                FieldDescriptor::new("email", <Option<String> as Property>::field_type()),
                FieldDescriptor::new("role", <Role as Property>::field_type()),
                FieldDescriptor::new("address", <Option<Address> as Property>::field_type()),
                FieldDescriptor::new("tags", <Vec<String> as Property>::field_type()),
                FieldDescriptor::new("friends", <Vec<User> as Property>::field_type()),
            ])
        })
    }

    fn copy_field(&mut self, source: &Self, index: usize) {
        match index {
            0 => self.name = source.name.clone(),
            1 => self.age = source.age,
            2 => self.email = source.email.clone(),
            3 => self.role = source.role,
            4 => self.address = source.address.clone(),
            5 => self.tags = source.tags.clone(),
            6 => self.friends = source.friends.clone(),
            _ => {}
        }
    }
}

impl Property for User {
    fn field_type() -> FieldType { FieldType::Object(SchemaRef::of::<Self>()) }
    fn to_ref(&self) -> PropertyRef<'_> { PropertyRef::Record(self) }
}

pub fn user(name: &str, age: i32) -> User {
    User {
        name: name.to_string(),
        age,
        address: Some(Address { street: format!("{name} Street"), city: "Recife".to_string() }),
        ..Default::default()
    }
}

/// Bruno 27, Fred 33, Albert 37, Lucao 23, Luide 28.
pub fn roster() -> Vec<User> {
    vec![user("Bruno", 27), user("Fred", 33), user("Albert", 37), user("Lucao", 23), user("Luide", 28)]
}

use common::*;

use dynfilter::{EnumValue, Enumeration, FieldType, Model, Property, PropertyRef, Record, SchemaRef, Value};

#[test]
fn enumeration_schema() {
    assert_eq!(Role::enum_schema().name, "Role");
    assert_eq!(Role::enum_schema().members, &["Guest", "Member", "Admin"]);
    assert_eq!(Role::Admin.ordinal(), 2);
    assert_eq!(Role::field_type(), FieldType::Enum(Role::enum_schema()));
    assert_eq!(Role::Member.to_ref().into_value(), Some(Value::Enum(EnumValue { ordinal: 1, name: "Member" })));
}

#[test]
fn nested_models_are_objects() {
    assert_eq!(Address::field_type(), FieldType::Object(SchemaRef::of::<Address>()));
    assert_eq!(<Vec<Person>>::field_type(), FieldType::Collection(Box::new(FieldType::Object(SchemaRef::of::<Person>()))));
    assert_eq!(Person::schema().type_name(), "Person");
}

#[test]
fn records_expose_fields_by_position() {
    let bruno = person("Bruno", 27);
    let (index, _) = Person::schema().field("age").expect("age");
    assert_eq!(bruno.field(index).and_then(PropertyRef::into_value), Some(Value::I64(27)));
    assert!(matches!(bruno.field(Person::schema().field("manager").expect("manager").0), Some(PropertyRef::Null)));
    assert!(bruno.field(Person::schema().fields().len()).is_none());
}

#[test]
fn copy_field_copies_one_field() {
    let bruno = person("Bruno", 27);
    let mut copy = Person::default();
    copy.copy_field(&bruno, Person::schema().field("name").expect("name").0);
    assert_eq!(copy.name, "Bruno");
    assert_eq!(copy.age, 0);
}

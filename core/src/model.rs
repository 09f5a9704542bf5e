use crate::property::PropertyRef;
use crate::schema::{EnumSchema, Schema};
use crate::value::EnumValue;

/// Runtime field access for one item, by schema position.
///
/// Object-safe so that nested objects can be walked without knowing their concrete type.
pub trait Record {
    /// Current value of the field at `index` in the item's [`Schema`], or `None` if out of range.
    fn field(&self, index: usize) -> Option<PropertyRef<'_>>;
}

/// An item type that filter, order and select strings can be compiled against.
/// Usually implemented with `#[derive(Model)]`.
pub trait Model: Record + Default + Sized + 'static {
    /// The type's schema. Built once and cached for the life of the process.
    fn schema() -> &'static Schema;

    /// Copy the field at `index` from `source` into `self`. Used by projections.
    fn copy_field(&mut self, source: &Self, index: usize);
}

/// A fieldless enum usable as a field type. Usually implemented with `#[derive(Enumeration)]`.
pub trait Enumeration: Sized + 'static {
    fn enum_schema() -> &'static EnumSchema;

    /// Declaration position of this member.
    fn ordinal(&self) -> usize;

    fn to_enum_value(&self) -> EnumValue {
        let ordinal = self.ordinal();
        EnumValue { ordinal, name: Self::enum_schema().members[ordinal] }
    }
}

use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

use crate::error::CompileError;
use crate::model::Model;
use crate::schema::Schema;

/// Compile a select string into the schema positions of the named top-level fields.
///
/// Names match case-insensitively and may repeat; each field is kept once, in first-mention
/// order. Blank input yields `None`, meaning no projection.
pub fn compile_select(text: &str, schema: &'static Schema) -> Result<Option<ProjectionSpec>, CompileError> {
    debug!(item = schema.type_name(), select = text, "compiling select");

    let names = dynql::parse_select(text)?;
    if names.is_empty() {
        return Ok(None);
    }

    let mut fields = Vec::with_capacity(names.len());
    for name in names {
        let (index, _) = schema.field(&name).ok_or_else(|| CompileError::property_not_found(name.as_str(), schema.type_name()))?;
        if !fields.contains(&index) {
            fields.push(index);
        }
    }
    Ok(Some(ProjectionSpec { fields }))
}

/// Schema positions of the selected fields, independent of the item type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionSpec {
    fields: Vec<usize>,
}

impl ProjectionSpec {
    pub fn fields(&self) -> &[usize] { &self.fields }
}

/// A compiled projection: produces a fresh `T` holding only the selected fields, every other
/// field left at its default.
pub struct Projection<T> {
    spec: ProjectionSpec,
    _item: PhantomData<fn(&T) -> T>,
}

impl<T: Model> Projection<T> {
    pub fn compile(text: &str) -> Result<Option<Self>, CompileError> {
        Ok(compile_select(text, T::schema())?.map(|spec| Self { spec, _item: PhantomData }))
    }

    pub fn spec(&self) -> &ProjectionSpec { &self.spec }

    /// Selected field names, as declared.
    pub fn field_names(&self) -> Vec<&'static str> {
        let schema = T::schema();
        self.spec.fields.iter().map(|&index| schema.fields()[index].name).collect()
    }

    pub fn apply(&self, item: &T) -> T {
        let mut projected = T::default();
        for &index in &self.spec.fields {
            projected.copy_field(item, index);
        }
        projected
    }
}

impl<T> Clone for Projection<T> {
    fn clone(&self) -> Self { Self { spec: self.spec.clone(), _item: PhantomData } }
}

impl<T> fmt::Debug for Projection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.debug_struct("Projection").field("spec", &self.spec).finish() }
}

pub mod cache;
pub mod condition;
pub mod error;
pub mod model;
pub mod options;
pub mod order;
pub mod path;
pub mod projection;
pub mod property;
pub mod query;
pub mod schema;
pub mod selection;
pub mod value;

#[cfg(test)]
mod fixtures;

pub use cache::QueryCache;
pub use condition::Condition;
pub use error::CompileError;
pub use model::{Enumeration, Model, Record};
pub use options::CompileOptions;
pub use order::{Order, OrderSpec};
pub use path::PropertyPath;
pub use projection::{Projection, ProjectionSpec};
pub use property::{Property, PropertyRef};
pub use query::{DynamicQuery, QueryParams};
pub use schema::{EnumSchema, FieldDescriptor, FieldType, ScalarType, Schema, SchemaRef};
pub use selection::filter::{CompoundExpression, Filter};
pub use value::{EnumValue, Literal, Value};

pub use dynql::ast::{Direction, Operator};

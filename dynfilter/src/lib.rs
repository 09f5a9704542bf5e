//! # dynfilter
//!
//! Compiles the compact filter, order and select strings that clients put on the wire into typed,
//! reusable artifacts and applies them to in-memory collections.
//!
//! ## Query strings
//!
//! - **filter**: comma-separated clauses `path op literal`, where `op` is one of `=`, `!=`, `>`,
//!   `<`, `>=`, `<=`, `%` (contains, case-insensitive) or `%%` (contains, case-sensitive). A
//!   clause may list alternatives, `name%bru|fre`.
//! - **order**: `path`, `path=Asc` or `path=Desc`.
//! - **select**: comma-separated top-level field names.
//!
//! Paths are dotted (`address.street`) and resolve case-insensitively. A path crossing one
//! collection (`friends.name`) matches if any element matches.
//!
//! ## Example
//!
//! ```rust
//! use dynfilter::{DynamicQuery, Model, QueryParams};
//!
//! #[derive(Model, Debug, Clone, Default)]
//! pub struct Album {
//!     name: String,
//!     year: i32,
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let albums = vec![
//!     Album { name: "Origin of Symmetry".into(), year: 2001 },
//!     Album { name: "Absolution".into(), year: 2003 },
//!     Album { name: "Showbiz".into(), year: 1999 },
//! ];
//!
//! let params: QueryParams = serde_json::from_str(r#"{ "filter": "year>=2001", "order": "name", "select": "name" }"#)?;
//! let query = DynamicQuery::<Album>::compile(&params)?;
//! let result = query.apply(&albums);
//!
//! assert_eq!(result.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(), vec!["Absolution", "Origin of Symmetry"]);
//! assert!(result.iter().all(|a| a.year == 0));
//! # Ok(())
//! # }
//! ```

pub use dynfilter_core as core;
pub use dynql;

pub use dynfilter_core::{
    cache, condition, error, model, options, order, path, projection, property, query, schema, selection, value, CompileError,
    CompileOptions, CompoundExpression, Condition, Direction, DynamicQuery, EnumSchema, EnumValue, Enumeration, FieldDescriptor,
    FieldType, Filter, Literal, Model, Operator, Order, OrderSpec, Projection, ProjectionSpec, Property, PropertyPath, PropertyRef, QueryCache,
    QueryParams, Record, ScalarType, Schema, SchemaRef, Value,
};

// Re-export the derive macros. They share names with the traits they implement.
#[cfg(feature = "derive")]
pub use dynfilter_derive::*;

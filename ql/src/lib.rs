//! # dynql
//!
//! Text front-end for dynamic filters. Turns the compact query strings used by the transport
//! layer into an untyped AST:
//!
//! - filter: `name%a,age>=27`, `roles.name=admin|owner`
//! - order: `name` or `name=Desc`
//! - select: `name,age`
//!
//! Nothing here knows about item types; resolving paths and coercing literals against a schema
//! happens in `dynfilter-core`.

pub mod ast;
pub mod detector;
pub mod error;
pub mod grammar;
pub mod parser;

pub use parser::{parse_clause, parse_filter, parse_order, parse_path, parse_select};

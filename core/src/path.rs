use dynql::ast::PathExpr;
use std::fmt;

use crate::error::CompileError;
use crate::property::PropertyRef;
use crate::schema::{FieldType, Schema};

/// One resolved hop of a [`PropertyPath`].
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Declared field name, as spelled in the schema.
    pub name: &'static str,
    /// Field position within the owning schema.
    pub index: usize,
    pub field_type: FieldType,
}

/// A dotted path resolved against a schema.
///
/// At most one hop may cross a collection; that hop is the quantifier. Segments after it are
/// resolved against the collection's element type.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPath {
    root: &'static str,
    segments: Vec<Segment>,
    quantifier: Option<usize>,
    terminal: FieldType,
}

impl PropertyPath {
    /// Resolve each step case-insensitively, starting at `root`.
    pub fn resolve(path: &PathExpr, root: &'static Schema) -> Result<Self, CompileError> {
        let mut segments: Vec<Segment> = Vec::with_capacity(path.steps.len());
        let mut quantifier = None;
        let mut scope = Some(root);
        let mut terminal = None;

        for (position, step) in path.steps.iter().enumerate() {
            let step = step.trim();
            let schema = scope.ok_or_else(|| CompileError::property_not_found(step, root.type_name()))?;
            let (index, field) = schema.field(step).ok_or_else(|| CompileError::property_not_found(step, root.type_name()))?;

            let mut reached = &field.field_type;
            if let Some(element) = field.field_type.element() {
                if quantifier.is_some() || element.element().is_some() {
                    return Err(CompileError::UnsupportedPath { path: path.to_string(), reason: "more than one collection hop" });
                }
                quantifier = Some(position);
                reached = element;
            }

            scope = reached.object();
            terminal = Some(reached.clone());
            segments.push(Segment { name: field.name, index, field_type: field.field_type.clone() });
        }

        let terminal = terminal.ok_or_else(|| CompileError::property_not_found(path.to_string(), root.type_name()))?;
        Ok(Self { root: root.type_name(), segments, quantifier, terminal })
    }

    /// Resolve a path that must lead to a single orderable value: no collection hop and a scalar
    /// or enum terminal.
    pub fn resolve_single(path: &PathExpr, root: &'static Schema) -> Result<Self, CompileError> {
        let resolved = Self::resolve(path, root)?;
        if resolved.quantifier.is_some() {
            return Err(CompileError::UnsupportedPath { path: resolved.to_string(), reason: "path crosses a collection" });
        }
        if !resolved.terminal.is_comparable() {
            return Err(CompileError::UnsupportedPath { path: resolved.to_string(), reason: "path does not end in a scalar" });
        }
        Ok(resolved)
    }

    pub fn root(&self) -> &'static str { self.root }

    pub fn segments(&self) -> &[Segment] { &self.segments }

    /// Position of the segment that crosses a collection, if any.
    pub fn quantifier(&self) -> Option<usize> { self.quantifier }

    /// Type reached at the end of the path, with the collection element unwrapped if the
    /// quantifier is the last hop.
    pub fn terminal_type(&self) -> &FieldType { &self.terminal }

    /// Follow `segments` from `start`. A missing object anywhere along the way yields `Null`.
    pub(crate) fn walk<'a>(segments: &[Segment], start: PropertyRef<'a>) -> PropertyRef<'a> {
        let mut current = start;
        for segment in segments {
            current = match current {
                PropertyRef::Record(record) => record.field(segment.index).unwrap_or(PropertyRef::Null),
                _ => return PropertyRef::Null,
            };
        }
        current
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment.name)?;
        }
        Ok(())
    }
}

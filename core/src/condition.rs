use dynql::ast::{Clause, Operator};
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

use crate::error::CompileError;
use crate::model::Record;
use crate::options::CompileOptions;
use crate::path::PropertyPath;
use crate::property::PropertyRef;
use crate::value::{coerce, Literal, Value};

/// A single typed predicate: resolved path, operator and coerced literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    path: PropertyPath,
    operator: Operator,
    literal: Literal,
}

impl Condition {
    pub fn compile(path: PropertyPath, operator: Operator, text: &str, options: &CompileOptions) -> Result<Self, CompileError> {
        let literal = coerce(text, path.terminal_type(), operator, options)?;
        trace!(%path, %operator, %literal, "compiled condition");
        Ok(Self { path, operator, literal })
    }

    /// Compile one alternative of a parsed clause against an already resolved path.
    pub(crate) fn from_clause(clause: &Clause, path: &PropertyPath, text: &str, options: &CompileOptions) -> Result<Self, CompileError> {
        Self::compile(path.clone(), clause.operator, text, options)
    }

    pub fn path(&self) -> &PropertyPath { &self.path }

    pub fn operator(&self) -> Operator { self.operator }

    pub fn literal(&self) -> &Literal { &self.literal }

    /// Evaluate against one item. Across a collection hop the condition holds if any element
    /// satisfies it; an empty or absent collection never does.
    pub fn evaluate(&self, item: &dyn Record) -> bool {
        let segments = self.path.segments();
        match self.path.quantifier() {
            None => self.test(PropertyPath::walk(segments, PropertyRef::Record(item))),
            Some(hop) => match PropertyPath::walk(&segments[..=hop], PropertyRef::Record(item)) {
                PropertyRef::List(elements) => {
                    elements.into_iter().any(|element| self.test(PropertyPath::walk(&segments[hop + 1..], element)))
                }
                _ => false,
            },
        }
    }

    fn test(&self, terminal: PropertyRef<'_>) -> bool {
        let actual = match terminal {
            PropertyRef::Value(value) => Some(value),
            PropertyRef::Null => None,
            PropertyRef::Record(_) | PropertyRef::List(_) => return false,
        };
        self.test_value(actual.as_ref())
    }

    fn test_value(&self, actual: Option<&Value>) -> bool {
        if let Literal::Text(needle) = &self.literal {
            let Some(actual) = actual else { return false };
            return match self.operator {
                Operator::Contains => actual.text().to_lowercase().contains(needle.as_str()),
                Operator::ContainsCaseSensitive => actual.text().contains(needle.as_str()),
                _ => false,
            };
        }

        let expected = self.literal.value();
        match self.operator {
            Operator::Equals => actual == expected,
            Operator::NotEquals => actual != expected,
            Operator::GreaterThan => compare(actual, expected) == Some(Ordering::Greater),
            Operator::LessThan => compare(actual, expected) == Some(Ordering::Less),
            Operator::GreaterOrEqual => matches!(compare(actual, expected), Some(Ordering::Greater | Ordering::Equal)),
            Operator::LessOrEqual => matches!(compare(actual, expected), Some(Ordering::Less | Ordering::Equal)),
            Operator::Contains | Operator::ContainsCaseSensitive => false,
        }
    }
}

/// Ordering between two present values. Any absent side is unordered.
fn compare(actual: Option<&Value>, expected: Option<&Value>) -> Option<Ordering> { actual?.partial_cmp(expected?) }

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{} {} {}", self.path, self.operator, self.literal) }
}

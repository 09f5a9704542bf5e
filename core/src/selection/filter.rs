//! Compile filter strings into boolean expression trees and evaluate them over items.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

use crate::condition::Condition;
use crate::error::CompileError;
use crate::model::{Model, Record};
use crate::options::CompileOptions;
use crate::path::PropertyPath;
use crate::schema::Schema;

/// Boolean tree of conditions.
#[derive(Debug, Clone, PartialEq)]
pub enum CompoundExpression {
    Condition(Condition),
    And(Box<CompoundExpression>, Box<CompoundExpression>),
    Or(Box<CompoundExpression>, Box<CompoundExpression>),
}

impl CompoundExpression {
    pub fn and(self, other: CompoundExpression) -> Self { CompoundExpression::And(Box::new(self), Box::new(other)) }

    pub fn or(self, other: CompoundExpression) -> Self { CompoundExpression::Or(Box::new(self), Box::new(other)) }

    pub fn evaluate(&self, item: &dyn Record) -> bool {
        match self {
            CompoundExpression::Condition(condition) => condition.evaluate(item),
            CompoundExpression::And(left, right) => left.evaluate(item) && right.evaluate(item),
            CompoundExpression::Or(left, right) => left.evaluate(item) || right.evaluate(item),
        }
    }

    /// Number of leaf conditions.
    pub fn condition_count(&self) -> usize {
        match self {
            CompoundExpression::Condition(_) => 1,
            CompoundExpression::And(left, right) | CompoundExpression::Or(left, right) => left.condition_count() + right.condition_count(),
        }
    }
}

impl fmt::Display for CompoundExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompoundExpression::Condition(condition) => write!(f, "{condition}"),
            CompoundExpression::And(left, right) => write!(f, "({left} AND {right})"),
            CompoundExpression::Or(left, right) => write!(f, "({left} OR {right})"),
        }
    }
}

/// Compile a filter string against `schema`. `None` means the filter was blank and matches
/// every item.
///
/// Clauses fold left to right. A plain clause is ANDed onto everything before it. In a clause
/// with alternatives (`a%x|y`), the first alternative is ANDed onto everything before it and
/// each later alternative is ORed with the whole expression built so far, so
/// `a=1,b%x|y` becomes `(a=1 AND b%x) OR b%y`.
pub fn compile_filter(text: &str, schema: &'static Schema, options: &CompileOptions) -> Result<Option<CompoundExpression>, CompileError> {
    debug!(item = schema.type_name(), filter = text, "compiling filter");

    let mut expression: Option<CompoundExpression> = None;
    for clause in dynql::parse_filter(text)? {
        let path = PropertyPath::resolve(&clause.path, schema)?;
        for (position, alternative) in clause.values.iter().enumerate() {
            let condition = CompoundExpression::Condition(Condition::from_clause(&clause, &path, alternative, options)?);
            expression = Some(match expression {
                None => condition,
                Some(previous) if position == 0 => previous.and(condition),
                Some(previous) => previous.or(condition),
            });
        }
    }

    Ok(expression)
}

/// A compiled filter for items of type `T`.
pub struct Filter<T> {
    expression: Option<CompoundExpression>,
    _item: PhantomData<fn(&T)>,
}

impl<T: Model> Filter<T> {
    pub fn compile(text: &str) -> Result<Self, CompileError> { Self::compile_with(text, &CompileOptions::default()) }

    pub fn compile_with(text: &str, options: &CompileOptions) -> Result<Self, CompileError> {
        Ok(Self { expression: compile_filter(text, T::schema(), options)?, _item: PhantomData })
    }

    /// A filter that keeps every item.
    pub fn all() -> Self { Self { expression: None, _item: PhantomData } }

    pub fn is_match_all(&self) -> bool { self.expression.is_none() }

    pub fn expression(&self) -> Option<&CompoundExpression> { self.expression.as_ref() }

    pub fn matches(&self, item: &T) -> bool { self.expression.as_ref().map_or(true, |expression| expression.evaluate(item)) }

    /// Lazily keep the items that match, preserving their order. Accepts owned or borrowed items.
    pub fn apply<I>(&self, items: I) -> FilterIterator<'_, T, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        FilterIterator { filter: self, iter: items.into_iter() }
    }
}

impl<T> Clone for Filter<T> {
    fn clone(&self) -> Self { Self { expression: self.expression.clone(), _item: PhantomData } }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.debug_struct("Filter").field("expression", &self.expression).finish() }
}

impl<T> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expression {
            Some(expression) => write!(f, "{expression}"),
            None => f.write_str("TRUE"),
        }
    }
}

pub struct FilterIterator<'a, T, I> {
    filter: &'a Filter<T>,
    iter: I,
}

impl<T, I> Iterator for FilterIterator<'_, T, I>
where
    T: Model,
    I: Iterator,
    I::Item: Borrow<T>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> { self.iter.by_ref().find(|item| self.filter.matches(Borrow::<T>::borrow(item))) }
}

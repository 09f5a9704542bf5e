use dynql::ast::Direction;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

use crate::error::CompileError;
use crate::model::Model;
use crate::options::CompileOptions;
use crate::path::PropertyPath;
use crate::property::PropertyRef;
use crate::schema::Schema;
use crate::value::Value;

/// Sort key and direction, independent of the item type.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSpec {
    pub path: PropertyPath,
    pub direction: Direction,
}

/// Compile an order string, `path` or `path=Asc|Desc`. Blank input yields `None`.
pub fn compile_order(text: &str, schema: &'static Schema, options: &CompileOptions) -> Result<Option<OrderSpec>, CompileError> {
    debug!(item = schema.type_name(), order = text, "compiling order");

    let Some(order) = dynql::parse_order(text)? else { return Ok(None) };
    let path = PropertyPath::resolve_single(&order.path, schema)?;
    Ok(Some(OrderSpec { path, direction: order.direction.unwrap_or(options.default_direction) }))
}

/// A compiled single-key ordering for items of type `T`.
///
/// Sorting is stable. Absent values sort first when ascending and last when descending.
pub struct Order<T> {
    spec: OrderSpec,
    _item: PhantomData<fn(&T)>,
}

impl<T: Model> Order<T> {
    pub fn compile(text: &str) -> Result<Option<Self>, CompileError> { Self::compile_with(text, &CompileOptions::default()) }

    pub fn compile_with(text: &str, options: &CompileOptions) -> Result<Option<Self>, CompileError> {
        Ok(compile_order(text, T::schema(), options)?.map(|spec| Self { spec, _item: PhantomData }))
    }

    pub fn spec(&self) -> &OrderSpec { &self.spec }

    pub fn direction(&self) -> Direction { self.spec.direction }

    /// Sort key of one item. `None` if the value or any object on the way to it is absent.
    /// NaN keys count as absent.
    pub fn value_of(&self, item: &T) -> Option<Value> {
        PropertyPath::walk(self.spec.path.segments(), PropertyRef::Record(item))
            .into_value()
            .filter(|value| !matches!(value, Value::F64(f) if f.is_nan()))
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering { self.compare_values(self.value_of(a).as_ref(), self.value_of(b).as_ref()) }

    fn compare_values(&self, a: Option<&Value>, b: Option<&Value>) -> Ordering {
        let ordering = match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        };
        match self.spec.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }

    pub fn sort(&self, items: &mut [T]) { items.sort_by(|a, b| self.compare(a, b)) }

    /// Stable sort of borrowed items. Each key is extracted once.
    pub fn sort_refs(&self, items: &mut Vec<&T>) {
        let mut keyed: Vec<(Option<Value>, &T)> = items.drain(..).map(|item| (self.value_of(item), item)).collect();
        keyed.sort_by(|(a, _), (b, _)| self.compare_values(a.as_ref(), b.as_ref()));
        items.extend(keyed.into_iter().map(|(_, item)| item));
    }
}

impl<T> Clone for Order<T> {
    fn clone(&self) -> Self { Self { spec: self.spec.clone(), _item: PhantomData } }
}

impl<T> fmt::Debug for Order<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.debug_struct("Order").field("spec", &self.spec).finish() }
}

impl<T> fmt::Display for Order<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}={}", self.spec.path, self.spec.direction) }
}

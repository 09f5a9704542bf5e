use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CompileError;
use crate::model::Model;
use crate::options::CompileOptions;
use crate::order::Order;
use crate::projection::Projection;
use crate::selection::filter::Filter;

/// The three query strings as they arrive from a request.
///
/// `query` is an alternate name for the filter, used only when `filter` is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    pub filter: Option<String>,
    pub query: Option<String>,
    pub order: Option<String>,
    pub select: Option<String>,
}

impl QueryParams {
    pub fn new() -> Self { Self::default() }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn select(mut self, select: impl Into<String>) -> Self {
        self.select = Some(select.into());
        self
    }

    /// Effective filter text: `filter`, falling back to `query`.
    pub fn filter_text(&self) -> Option<&str> { self.filter.as_deref().or(self.query.as_deref()) }
}

/// Filter, order and projection compiled together for items of type `T`.
pub struct DynamicQuery<T> {
    pub filter: Filter<T>,
    pub order: Option<Order<T>>,
    pub select: Option<Projection<T>>,
}

impl<T: Model> DynamicQuery<T> {
    pub fn compile(params: &QueryParams) -> Result<Self, CompileError> { Self::compile_with(params, &CompileOptions::default()) }

    /// Compile every present string. Absent strings mean match-all, no ordering and no projection.
    pub fn compile_with(params: &QueryParams, options: &CompileOptions) -> Result<Self, CompileError> {
        let filter = match params.filter_text() {
            Some(text) => Filter::compile_with(text, options)?,
            None => Filter::all(),
        };
        let order = match params.order.as_deref() {
            Some(text) => Order::compile_with(text, options)?,
            None => None,
        };
        let select = match params.select.as_deref() {
            Some(text) => Projection::compile(text)?,
            None => None,
        };
        Ok(Self { filter, order, select })
    }

    /// Matching items, ordered, without projection.
    pub fn apply_refs<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        let mut matched: Vec<&'a T> = self.filter.apply(items).collect();
        if let Some(order) = &self.order {
            order.sort_refs(&mut matched);
        }
        matched
    }

    /// Filter, then order, then project.
    pub fn apply(&self, items: &[T]) -> Vec<T>
    where T: Clone {
        let matched = self.apply_refs(items);
        match &self.select {
            Some(projection) => matched.into_iter().map(|item| projection.apply(item)).collect(),
            None => matched.into_iter().cloned().collect(),
        }
    }
}

impl<T> Clone for DynamicQuery<T> {
    fn clone(&self) -> Self { Self { filter: self.filter.clone(), order: self.order.clone(), select: self.select.clone() } }
}

impl<T> fmt::Debug for DynamicQuery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicQuery").field("filter", &self.filter).field("order", &self.order).field("select", &self.select).finish()
    }
}

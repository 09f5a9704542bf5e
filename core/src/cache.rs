use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;
use tracing::{debug, trace};

use crate::error::CompileError;
use crate::model::Model;
use crate::options::CompileOptions;
use crate::order::Order;
use crate::projection::Projection;
use crate::selection::filter::Filter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Artifact {
    Filter,
    Order,
    Select,
}

type CacheKey = (Artifact, TypeId, String);

/// Entry bound used by [`QueryCache::new`].
pub const DEFAULT_MAX_ENTRIES: usize = 1024;

/// Concurrent memo of compiled artifacts keyed by item type and query text.
///
/// Compilation is deterministic, so a cached artifact is interchangeable with a fresh one.
/// Failed compilations are not cached. Once `max_entries` artifacts are held, new ones are
/// still compiled and returned but not stored.
pub struct QueryCache {
    options: CompileOptions,
    max_entries: usize,
    entries: DashMap<CacheKey, Arc<dyn Any + Send + Sync>>,
}

impl Default for QueryCache {
    fn default() -> Self { Self::new(CompileOptions::default()) }
}

impl QueryCache {
    pub fn new(options: CompileOptions) -> Self { Self::with_max_entries(options, DEFAULT_MAX_ENTRIES) }

    pub fn with_max_entries(options: CompileOptions, max_entries: usize) -> Self {
        Self { options, max_entries, entries: DashMap::new() }
    }

    pub fn options(&self) -> &CompileOptions { &self.options }

    pub fn max_entries(&self) -> usize { self.max_entries }

    pub fn filter<T: Model>(&self, text: &str) -> Result<Arc<Filter<T>>, CompileError> {
        self.get_or_compile(Artifact::Filter, text, || Filter::compile_with(text, &self.options))
    }

    pub fn order<T: Model>(&self, text: &str) -> Result<Arc<Option<Order<T>>>, CompileError> {
        self.get_or_compile(Artifact::Order, text, || Order::compile_with(text, &self.options))
    }

    pub fn projection<T: Model>(&self, text: &str) -> Result<Arc<Option<Projection<T>>>, CompileError> {
        self.get_or_compile(Artifact::Select, text, || Projection::compile(text))
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn clear(&self) { self.entries.clear() }

    fn get_or_compile<A, F>(&self, artifact: Artifact, text: &str, compile: F) -> Result<Arc<A>, CompileError>
    where
        A: Any + Send + Sync,
        F: FnOnce() -> Result<A, CompileError>,
    {
        let key = (artifact, TypeId::of::<A>(), text.to_string());
        if let Some(hit) = self.entries.get(&key).and_then(|entry| entry.value().clone().downcast::<A>().ok()) {
            trace!(?artifact, text, "query cache hit");
            return Ok(hit);
        }

        let compiled = Arc::new(compile()?);
        // The bound is checked before inserting; concurrent misses may overshoot it by the number of racing threads.
        if self.entries.len() < self.max_entries {
            self.entries.insert(key, compiled.clone());
        } else {
            debug!(?artifact, text, max_entries = self.max_entries, "query cache full, not storing");
        }
        Ok(compiled)
    }
}

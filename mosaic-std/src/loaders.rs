//! Standard data loaders.
//!
//! The framework only declares the [`DataLoader`] contract. These loaders
//! cover the usual cases: run the definition directly, report everything as
//! loading (first client-side render), or memoize loaded states across passes.

use mosaic_core::{DataLoader, DataState, DynDataDefinition};
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

/// Runs the data definition and reports its outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefinitionLoader;

impl<S: Sync + 'static> DataLoader<S> for DefinitionLoader {
    async fn load(
        &self,
        kind: &str,
        definition: &dyn DynDataDefinition<S>,
        config: &Value,
        services: &S,
    ) -> DataState {
        match definition.load_dyn(config, services).await {
            Ok(value) => DataState::loaded(value),
            Err(err) => {
                #[cfg(feature = "tracing")]
                {
                    tracing::warn!(target: "mosaic", kind, error = %err, "data load failed");
                }
                #[cfg(not(feature = "tracing"))]
                {
                    let _ = kind;
                }
                DataState::errored(err)
            }
        }
    }
}

/// Reports every load as in flight without running it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingLoader;

impl<S: Sync + 'static> DataLoader<S> for PendingLoader {
    async fn load(
        &self,
        _kind: &str,
        _definition: &dyn DynDataDefinition<S>,
        _config: &Value,
        _services: &S,
    ) -> DataState {
        DataState::Loading
    }
}

/// Derives the services part of a [`CachedLoader`] key.
///
/// Implemented by [`Unscoped`] and by any `Fn(&S) -> String`.
pub trait CacheScope<S>: Send + Sync {
    /// The scope of one pass, e.g. the site or locale its services serve.
    fn scope(&self, services: &S) -> String;
}

/// Every pass shares one cache scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unscoped;

impl<S> CacheScope<S> for Unscoped {
    fn scope(&self, _services: &S) -> String {
        String::new()
    }
}

impl<S, F> CacheScope<S> for F
where
    F: Fn(&S) -> String + Send + Sync,
{
    fn scope(&self, services: &S) -> String {
        self(services)
    }
}

type CacheKey = (String, String, String);

/// Memoizes loaded states of an inner loader, keyed by `(scope, type, config)`.
///
/// Only [`DataState::Loaded`] is cached; failures are retried on the next pass.
///
/// A loader built with [`CachedLoader::new`] is [`Unscoped`]: it assumes the
/// services bag does not change what a definition loads. When it does (one
/// registry serving several sites or locales), build it with
/// [`CachedLoader::scoped`] so each scope caches separately.
#[derive(Debug, Default)]
pub struct CachedLoader<L, K = Unscoped> {
    inner: L,
    scope: K,
    cache: Mutex<HashMap<CacheKey, DataState>>,
}

impl<L> CachedLoader<L> {
    /// Wrap a loader with a single cache scope.
    pub fn new(inner: L) -> Self {
        Self::scoped(inner, Unscoped)
    }
}

impl<L, K> CachedLoader<L, K> {
    /// Wrap a loader, partitioning the cache by a services-derived scope.
    ///
    /// ```rust,ignore
    /// let loader = CachedLoader::scoped(DefinitionLoader, |site: &Site| site.locale.clone());
    /// ```
    pub fn scoped(inner: L, scope: K) -> Self {
        Self {
            inner,
            scope,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The wrapped loader.
    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// Number of cached states.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Check whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Drop every cached state of one type, in every scope.
    pub fn invalidate(&self, kind: &str) {
        self.entries().retain(|(_, cached_kind, _), _| cached_kind != kind);
    }

    /// Drop every cached state.
    pub fn clear(&self) {
        self.entries().clear();
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<CacheKey, DataState>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn cached(&self, key: &CacheKey) -> Option<DataState> {
        self.entries().get(key).cloned()
    }

    fn store(&self, key: CacheKey, state: DataState) {
        self.entries().insert(key, state);
    }
}

impl<S, L, K> DataLoader<S> for CachedLoader<L, K>
where
    S: Sync + 'static,
    L: DataLoader<S>,
    K: CacheScope<S>,
{
    async fn load(
        &self,
        kind: &str,
        definition: &dyn DynDataDefinition<S>,
        config: &Value,
        services: &S,
    ) -> DataState {
        let key = (
            self.scope.scope(services),
            kind.to_owned(),
            config.to_string(),
        );
        if let Some(state) = self.cached(&key) {
            return state;
        }

        let state = self.inner.load(kind, definition, config, services).await;
        if state.is_loaded() {
            self.store(key, state.clone());
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_core::{BoxError, DataDefinition};
    use serde_json::json;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    struct Counting {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl DataDefinition<()> for Counting {
        type Config = Value;
        type Data = Value;

        async fn load(&self, config: Value, _services: &()) -> Result<Value, BoxError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err("backend unavailable".into())
            } else {
                Ok(json!({ "echo": config }))
            }
        }
    }

    fn counting(fail: bool) -> (Counting, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Counting {
                calls: Arc::clone(&calls),
                fail,
            },
            calls,
        )
    }

    #[tokio::test]
    async fn test_definition_loader_states() {
        let (ok, _) = counting(false);
        let ok: &dyn DynDataDefinition<()> = &ok;
        let state = DefinitionLoader.load("k", ok, &json!(1), &()).await;
        assert_eq!(state, DataState::loaded(json!({ "echo": 1 })));

        let (failing, _) = counting(true);
        let failing: &dyn DynDataDefinition<()> = &failing;
        let state = DefinitionLoader.load("k", failing, &json!(1), &()).await;
        assert_eq!(state, DataState::errored("backend unavailable"));
    }

    #[tokio::test]
    async fn test_pending_loader_never_runs_definition() {
        let (definition, calls) = counting(false);
        let definition: &dyn DynDataDefinition<()> = &definition;
        let state = PendingLoader.load("k", definition, &json!(1), &()).await;

        assert_eq!(state, DataState::Loading);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cached_loader_memoizes_loaded() {
        let (definition, calls) = counting(false);
        let definition: &dyn DynDataDefinition<()> = &definition;
        let loader = CachedLoader::new(DefinitionLoader);

        loader.load("k", definition, &json!(1), &()).await;
        loader.load("k", definition, &json!(1), &()).await;
        loader.load("k", definition, &json!(2), &()).await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(loader.len(), 2);

        loader.invalidate("k");
        assert!(loader.is_empty());
    }

    #[tokio::test]
    async fn test_cached_loader_retries_failures() {
        let (definition, calls) = counting(true);
        let definition: &dyn DynDataDefinition<()> = &definition;
        let loader = CachedLoader::new(DefinitionLoader);

        loader.load("k", definition, &json!(1), &()).await;
        loader.load("k", definition, &json!(1), &()).await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(loader.is_empty());
    }
}

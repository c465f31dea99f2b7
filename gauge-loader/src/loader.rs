//! Single-flight category loading
//!
//! At most one load per category id runs at any time. Concurrent callers
//! for the same uncached id await the same slot and receive the same
//! `Arc<UnitCategory>`. Successful loads are cached for the life of the
//! loader and fed into the search index; failed loads are not cached.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::OnceCell;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use gauge_core::{GaugeError, Result, UnitCategory};
use gauge_search::{SearchIndex, SharedSearchIndex};

use crate::provider::ProviderRegistry;

/// Categories loaded before first use
pub const ESSENTIAL_CATEGORIES: [&str; 3] = ["length", "mass", "temperature"];

type Slot = Arc<OnceCell<Arc<UnitCategory>>>;

/// Cache of loaded categories plus slots for loads in progress
#[derive(Default)]
pub struct LoaderState {
    cache: HashMap<String, Arc<UnitCategory>>,
    in_flight: HashMap<String, Slot>,
}

impl LoaderState {
    pub fn cached_ids(&self) -> Vec<String> {
        self.cache.keys().cloned().collect()
    }
}

struct Inner {
    providers: ProviderRegistry,
    state: Mutex<LoaderState>,
    search: SharedSearchIndex,
}

/// Loads categories on demand; clones share the same cache and index
#[derive(Clone)]
pub struct CategoryLoader {
    inner: Arc<Inner>,
}

impl CategoryLoader {
    pub fn new(providers: ProviderRegistry, search: SharedSearchIndex) -> Self {
        CategoryLoader {
            inner: Arc::new(Inner {
                providers,
                state: Mutex::new(LoaderState::default()),
                search,
            }),
        }
    }

    /// Loader over the built-in categories with a fresh search index
    pub fn standard() -> Self {
        Self::new(ProviderRegistry::standard(), SearchIndex::shared())
    }

    fn state(&self) -> MutexGuard<'_, LoaderState> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load a category, returning the cached copy when present
    pub async fn load_unit_category(&self, category_id: &str) -> Result<Arc<UnitCategory>> {
        let slot = {
            let mut state = self.state();
            if let Some(category) = state.cache.get(category_id) {
                return Ok(Arc::clone(category));
            }
            if !self.inner.providers.contains(category_id) {
                return Err(GaugeError::UnknownCategory(category_id.to_string()));
            }
            Arc::clone(
                state
                    .in_flight
                    .entry(category_id.to_string())
                    .or_insert_with(|| Arc::new(OnceCell::new())),
            )
        };

        // An empty slot after a failure lets the next caller retry.
        let category = slot.get_or_try_init(|| self.fetch(category_id)).await?;
        Ok(Arc::clone(category))
    }

    async fn fetch(&self, category_id: &str) -> Result<Arc<UnitCategory>> {
        let provider = self
            .inner
            .providers
            .get(category_id)
            .ok_or_else(|| GaugeError::UnknownCategory(category_id.to_string()))?;

        debug!(category = category_id, "loading category");
        let category = match provider.load().await {
            Ok(category) => Arc::new(category),
            Err(e) => {
                debug!(category = category_id, error = %e, "category load failed");
                return Err(e);
            }
        };

        // indexed before it becomes visible through the cache
        self.inner
            .search
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .add_category(category_id, &category);

        {
            let mut state = self.state();
            state.cache.insert(category_id.to_string(), Arc::clone(&category));
            state.in_flight.remove(category_id);
        }

        debug!(category = category_id, units = category.unit_count(), "category loaded");
        Ok(category)
    }

    /// Schedule background loads; failures are logged, never surfaced.
    ///
    /// The returned handle may be dropped; awaiting it waits for all loads.
    pub fn preload_categories(&self, category_ids: Vec<String>) -> JoinHandle<()> {
        let loader = self.clone();
        tokio::spawn(async move {
            // let foreground work run first
            tokio::task::yield_now().await;
            for id in category_ids {
                if loader.is_loaded(&id) {
                    continue;
                }
                if let Err(e) = loader.load_unit_category(&id).await {
                    warn!(category = %id, error = %e, "preload failed");
                }
            }
        })
    }

    /// Load the default essential set (length, mass, temperature)
    pub async fn initialize_essential_categories(&self) -> Vec<Arc<UnitCategory>> {
        self.initialize_categories(&ESSENTIAL_CATEGORIES).await
    }

    /// Load a fixed set up front, skipping (and logging) any that fail
    pub async fn initialize_categories<S: AsRef<str>>(&self, category_ids: &[S]) -> Vec<Arc<UnitCategory>> {
        let mut loaded = Vec::with_capacity(category_ids.len());
        for id in category_ids {
            let id = id.as_ref();
            match self.load_unit_category(id).await {
                Ok(category) => loaded.push(category),
                Err(e) => warn!(category = id, error = %e, "essential category unavailable"),
            }
        }
        info!(loaded = loaded.len(), requested = category_ids.len(), "essential categories initialized");
        loaded
    }

    /// Cached category, without loading
    pub fn cached(&self, category_id: &str) -> Option<Arc<UnitCategory>> {
        self.state().cache.get(category_id).cloned()
    }

    pub fn is_loaded(&self, category_id: &str) -> bool {
        self.state().cache.contains_key(category_id)
    }

    /// Ids of loaded categories
    pub fn loaded_categories(&self) -> Vec<String> {
        self.state().cached_ids()
    }

    /// Ids with a registered provider, in registration order
    pub fn available_categories(&self) -> Vec<String> {
        self.inner.providers.category_ids().to_vec()
    }

    pub fn has_provider(&self, category_id: &str) -> bool {
        self.inner.providers.contains(category_id)
    }

    /// Handle to the index this loader feeds
    pub fn search_index(&self) -> SharedSearchIndex {
        Arc::clone(&self.inner.search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{CategoryProvider, StaticProvider};
    use async_trait::async_trait;
    use gauge_core::Unit;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingProvider {
        calls: Arc<AtomicUsize>,
        failures: usize,
        delay: Duration,
    }

    #[async_trait]
    impl CategoryProvider for CountingProvider {
        async fn load(&self) -> Result<UnitCategory> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            if call < self.failures {
                return Err(GaugeError::load_failed("length", "source offline"));
            }
            Ok(UnitCategory::new("length", "Length")
                .with_base_unit("meter")
                .with_units(vec![Unit::base("meter", "meter", "m")]))
        }
    }

    fn counting_loader(failures: usize) -> (CategoryLoader, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = CountingProvider {
            calls: Arc::clone(&calls),
            failures,
            delay: Duration::from_millis(20),
        };
        let registry = ProviderRegistry::new().with_provider("length", provider);
        (CategoryLoader::new(registry, SearchIndex::shared()), calls)
    }

    #[tokio::test]
    async fn test_concurrent_loads_share_one_fetch() {
        let (loader, calls) = counting_loader(0);
        let (a, b) = tokio::join!(
            loader.load_unit_category("length"),
            loader.load_unit_category("length")
        );
        let (a, b) = (a.unwrap(), b.unwrap());
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_spawned_concurrent_loads_share_one_fetch() {
        let (loader, calls) = counting_loader(0);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let loader = loader.clone();
                tokio::spawn(async move { loader.load_unit_category("length").await })
            })
            .collect();
        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.await.unwrap().unwrap());
        }
        assert!(results.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cached_after_load() {
        let (loader, calls) = counting_loader(0);
        assert!(!loader.is_loaded("length"));
        let first = loader.load_unit_category("length").await.unwrap();
        let second = loader.load_unit_category("length").await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(loader.is_loaded("length"));
        assert!(loader.cached("length").is_some());
    }

    #[tokio::test]
    async fn test_failed_load_is_retried() {
        let (loader, calls) = counting_loader(1);
        let err = loader.load_unit_category("length").await.unwrap_err();
        assert_eq!(err.code(), gauge_core::codes::LOAD_FAILED);
        assert!(!loader.is_loaded("length"));

        let category = loader.load_unit_category("length").await.unwrap();
        assert_eq!(category.id, "length");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unknown_category() {
        let loader = CategoryLoader::standard();
        let err = loader.load_unit_category("currency").await.unwrap_err();
        assert_eq!(err, GaugeError::UnknownCategory("currency".to_string()));
    }

    #[tokio::test]
    async fn test_load_feeds_search_index() {
        let loader = CategoryLoader::standard();
        loader.load_unit_category("mass").await.unwrap();
        let index = loader.search_index();
        let results = index.read().unwrap().search("pound", 5, None);
        assert_eq!(results[0].unit_id, "pound");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_cached_category_is_already_indexed() {
        let (loader, _calls) = counting_loader(0);
        let watcher = {
            let loader = loader.clone();
            tokio::spawn(async move {
                loop {
                    if loader.cached("length").is_some() {
                        let index = loader.search_index();
                        let index = index.read().unwrap();
                        return index.entry("length", "meter").is_some();
                    }
                    tokio::task::yield_now().await;
                }
            })
        };
        loader.load_unit_category("length").await.unwrap();
        assert!(watcher.await.unwrap());
    }

    #[tokio::test]
    async fn test_preload_swallows_failures() {
        let registry = ProviderRegistry::standard().with_provider("broken", CountingProvider {
            calls: Arc::new(AtomicUsize::new(0)),
            failures: usize::MAX,
            delay: Duration::from_millis(1),
        });
        let loader = CategoryLoader::new(registry, SearchIndex::shared());
        let handle = loader.preload_categories(vec![
            "broken".to_string(),
            "nonexistent".to_string(),
            "speed".to_string(),
        ]);
        handle.await.unwrap();
        assert!(loader.is_loaded("speed"));
        assert!(!loader.is_loaded("broken"));
    }

    #[tokio::test]
    async fn test_initialize_essential_categories() {
        let loader = CategoryLoader::standard();
        let loaded = loader.initialize_essential_categories().await;
        assert_eq!(loaded.len(), 3);
        for id in ESSENTIAL_CATEGORIES {
            assert!(loader.is_loaded(id));
        }
    }

    #[tokio::test]
    async fn test_initialize_skips_unavailable() {
        let registry = ProviderRegistry::new()
            .with_provider("length", StaticProvider::new(gauge_units::BUILTIN_CATEGORIES[0].1));
        let loader = CategoryLoader::new(registry, SearchIndex::shared());
        let loaded = loader.initialize_essential_categories().await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loader.loaded_categories(), vec!["length".to_string()]);
    }
}

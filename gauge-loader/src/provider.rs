//! Category providers: id → async source of category data

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use gauge_core::{Result, UnitCategory};
use gauge_units::{CategoryBuilder, BUILTIN_CATEGORIES};

/// Produces a category's unit data on demand
#[async_trait]
pub trait CategoryProvider: Send + Sync {
    async fn load(&self) -> Result<UnitCategory>;
}

/// Provider backed by a static builder function
pub struct StaticProvider {
    build: CategoryBuilder,
}

impl StaticProvider {
    pub fn new(build: CategoryBuilder) -> Self {
        StaticProvider { build }
    }
}

#[async_trait]
impl CategoryProvider for StaticProvider {
    async fn load(&self) -> Result<UnitCategory> {
        Ok((self.build)())
    }
}

/// Registered providers, keyed by category id
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn CategoryProvider>>,
    order: Vec<String>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in category
    pub fn standard() -> Self {
        BUILTIN_CATEGORIES
            .iter()
            .fold(Self::new(), |registry, (id, build)| {
                registry.with_provider(id, StaticProvider::new(*build))
            })
    }

    /// Register (or replace) the provider for a category id
    pub fn with_provider<P: CategoryProvider + 'static>(self, category_id: &str, provider: P) -> Self {
        self.with_shared_provider(category_id, Arc::new(provider))
    }

    pub fn with_shared_provider(mut self, category_id: &str, provider: Arc<dyn CategoryProvider>) -> Self {
        if !self.providers.contains_key(category_id) {
            self.order.push(category_id.to_string());
        }
        self.providers.insert(category_id.to_string(), provider);
        self
    }

    pub fn get(&self, category_id: &str) -> Option<Arc<dyn CategoryProvider>> {
        self.providers.get(category_id).cloned()
    }

    pub fn contains(&self, category_id: &str) -> bool {
        self.providers.contains_key(category_id)
    }

    /// Category ids in registration order
    pub fn category_ids(&self) -> &[String] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registers_builtins() {
        let registry = ProviderRegistry::standard();
        assert!(registry.contains("length"));
        assert!(registry.contains("fuel_economy"));
        assert!(!registry.contains("currency"));
        assert_eq!(registry.category_ids()[0], "length");
        assert_eq!(registry.category_ids().len(), BUILTIN_CATEGORIES.len());
    }

    #[test]
    fn test_replacing_keeps_order() {
        let registry = ProviderRegistry::standard()
            .with_provider("length", StaticProvider::new(|| UnitCategory::new("length", "Custom")));
        assert_eq!(registry.category_ids().len(), BUILTIN_CATEGORIES.len());
        assert_eq!(registry.category_ids()[0], "length");
    }

    #[tokio::test]
    async fn test_static_provider_loads() {
        let registry = ProviderRegistry::standard();
        let provider = registry.get("mass").unwrap();
        let category = provider.load().await.unwrap();
        assert_eq!(category.id, "mass");
        assert!(category.lookup_unit("pound").is_some());
    }
}

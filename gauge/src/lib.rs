//! Gauge - Unit conversion core
//!
//! One handle over the category loader, search index and both conversion
//! engines:
//!
//! ```no_run
//! # async fn demo() -> gauge::Result<()> {
//! use gauge::{ConversionOptions, Gauge};
//!
//! let gauge = Gauge::with_standard_library();
//! gauge.initialize().await;
//! let result = gauge
//!     .convert(100.0, "temperature", "celsius", "fahrenheit", &ConversionOptions::default())
//!     .await?;
//! assert_eq!(result.formatted_value, "212.0");
//! # Ok(())
//! # }
//! ```

mod config;

use std::sync::{Arc, PoisonError};

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::info;

pub use config::{GaugeConfig, CONFIG_ENV};
pub use gauge_convert::compound::{CompoundFormatConfig, CompoundFormatType, CompoundOptions};
pub use gauge_convert::{CompoundEngine, ConversionEngine};
pub use gauge_core::prelude;
pub use gauge_core::{
    CompoundConversionResult, CompoundMeasurement, ConversionOptions, ConversionRequest,
    ErrorReport, GaugeError, MeasurementComponent, NumericInput, Result, RoundingMode, Unit,
    UnitCategory, UnitConversionResult, UnitInfo,
};
pub use gauge_loader::{CategoryLoader, CategoryProvider, ProviderRegistry, StaticProvider};
pub use gauge_search::{SearchFilter, SearchIndex, UnitSearchResult};
pub use gauge_units::{builtin_category, builtin_category_ids};

/// Registered category, with details once loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: String,
    pub loaded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_count: Option<usize>,
}

/// Main Gauge handle; clones share caches and the search index
#[derive(Clone)]
pub struct Gauge {
    providers: ProviderRegistry,
    config: GaugeConfig,
    loader: CategoryLoader,
    scalar: ConversionEngine,
    compound: CompoundEngine,
}

impl Gauge {
    pub fn new(providers: ProviderRegistry, config: GaugeConfig) -> Self {
        let loader = CategoryLoader::new(providers.clone(), SearchIndex::shared());
        let scalar = ConversionEngine::new(loader.clone(), config.precision_policy());
        let compound = CompoundEngine::new(scalar.clone());
        Gauge {
            providers,
            config,
            loader,
            scalar,
            compound,
        }
    }

    /// Every built-in category with the default configuration
    pub fn with_standard_library() -> Self {
        Self::new(ProviderRegistry::standard(), GaugeConfig::default())
    }

    /// Builder: replace the configuration. Starts from an empty cache.
    pub fn with_config(self, config: GaugeConfig) -> Self {
        Self::new(self.providers, config)
    }

    /// Builder: register (or replace) a category provider. Starts from an
    /// empty cache.
    pub fn with_provider<P: CategoryProvider + 'static>(self, category_id: &str, provider: P) -> Self {
        Self::new(self.providers.with_provider(category_id, provider), self.config)
    }

    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    pub fn loader(&self) -> &CategoryLoader {
        &self.loader
    }

    pub fn conversion_engine(&self) -> &ConversionEngine {
        &self.scalar
    }

    pub fn compound_engine(&self) -> &CompoundEngine {
        &self.compound
    }

    /// Load the configured essential categories; returns the ids loaded
    pub async fn initialize(&self) -> Vec<String> {
        let loaded = self
            .loader
            .initialize_categories(&self.config.essential_categories)
            .await;
        let ids: Vec<String> = loaded.iter().map(|c| c.id.clone()).collect();
        info!(categories = ?ids, "gauge initialized");
        ids
    }

    /// Start loading the configured preload set in the background
    pub fn preload(&self) -> JoinHandle<()> {
        self.loader.preload_categories(self.config.preload_categories.clone())
    }

    pub async fn category(&self, category_id: &str) -> Result<Arc<UnitCategory>> {
        self.loader.load_unit_category(category_id).await
    }

    /// Registered categories in registration order
    pub fn categories(&self) -> Vec<CategorySummary> {
        self.loader
            .available_categories()
            .into_iter()
            .map(|id| match self.loader.cached(&id) {
                Some(category) => CategorySummary {
                    loaded: true,
                    name: Some(category.name.clone()),
                    unit_count: Some(category.unit_count()),
                    id,
                },
                None => CategorySummary {
                    id,
                    loaded: false,
                    name: None,
                    unit_count: None,
                },
            })
            .collect()
    }

    pub async fn convert(
        &self,
        value: f64,
        category_id: &str,
        from_unit_id: &str,
        to_unit_id: &str,
        options: &ConversionOptions,
    ) -> Result<UnitConversionResult> {
        self.scalar
            .convert(value, category_id, from_unit_id, to_unit_id, options)
            .await
    }

    pub async fn convert_request(&self, request: &ConversionRequest) -> Result<UnitConversionResult> {
        self.scalar.convert_request(request).await
    }

    pub async fn compatible_units(&self, category_id: &str, unit_id: &str) -> Result<Vec<Unit>> {
        self.scalar.get_compatible_units(category_id, unit_id).await
    }

    pub async fn popular_units(&self, category_id: &str, limit: usize) -> Result<Vec<Unit>> {
        self.scalar.get_popular_units(category_id, limit).await
    }

    pub async fn convert_compound<S: AsRef<str>>(
        &self,
        measurement: &CompoundMeasurement,
        target_unit_ids: &[S],
        options: &CompoundOptions,
    ) -> Result<CompoundConversionResult> {
        self.compound
            .convert_compound(measurement, target_unit_ids, options)
            .await
    }

    pub async fn parse_compound_input(
        &self,
        input: &str,
        format_type: CompoundFormatType,
    ) -> Option<CompoundMeasurement> {
        self.compound.parse_compound_input(input, format_type).await
    }

    pub async fn format_compound_measurement(
        &self,
        measurement: &CompoundMeasurement,
        format_type: CompoundFormatType,
    ) -> String {
        self.compound
            .format_compound_measurement(measurement, format_type)
            .await
    }

    pub async fn parse_and_convert(
        &self,
        input: &str,
        format_type: CompoundFormatType,
        target_unit_ids: Option<&[String]>,
    ) -> Result<Option<CompoundConversionResult>> {
        self.compound
            .parse_and_convert(input, format_type, target_unit_ids)
            .await
    }

    /// Search loaded categories. `limit` defaults to the configured limit.
    pub fn search_units(
        &self,
        query: &str,
        limit: Option<usize>,
        filter: Option<&SearchFilter>,
    ) -> Vec<UnitSearchResult> {
        let limit = limit.unwrap_or(self.config.search_limit);
        let index = self.loader.search_index();
        let index = index.read().unwrap_or_else(PoisonError::into_inner);
        index.search(query, limit, filter)
    }
}

impl Default for Gauge {
    fn default() -> Self {
        Self::with_standard_library()
    }
}

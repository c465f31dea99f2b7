//! Precision policy: per-category defaults plus magnitude-based adjustment

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Hard ceiling on decimal places
pub const MAX_PRECISION: u32 = 10;

/// Fallback precision for categories without an entry
pub const DEFAULT_PRECISION: u32 = 4;

/// Decimal-place bounds for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPrecision {
    pub default: u32,
    #[serde(default)]
    pub min: u32,
    #[serde(default = "max_precision")]
    pub max: u32,
}

fn max_precision() -> u32 {
    MAX_PRECISION
}

impl CategoryPrecision {
    pub const fn new(default: u32) -> Self {
        CategoryPrecision { default, min: 0, max: MAX_PRECISION }
    }
}

/// Chooses how many decimals a converted value keeps
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrecisionPolicy {
    pub categories: HashMap<String, CategoryPrecision>,
    pub fallback: CategoryPrecision,
}

impl Default for PrecisionPolicy {
    fn default() -> Self {
        let mut categories = HashMap::new();
        for id in ["length", "mass", "volume", "area"] {
            categories.insert(id.to_string(), CategoryPrecision::new(4));
        }
        categories.insert("temperature".to_string(), CategoryPrecision::new(2));
        categories.insert("time".to_string(), CategoryPrecision::new(3));
        categories.insert(
            "currency".to_string(),
            CategoryPrecision { default: 2, min: 2, max: 2 },
        );
        PrecisionPolicy {
            categories,
            fallback: CategoryPrecision::new(DEFAULT_PRECISION),
        }
    }
}

impl PrecisionPolicy {
    /// Bounds for a category (fallback when not configured)
    pub fn for_category(&self, category_id: &str) -> CategoryPrecision {
        self.categories
            .get(category_id)
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Builder: override one category
    pub fn with_category(mut self, category_id: &str, precision: CategoryPrecision) -> Self {
        self.categories.insert(category_id.to_string(), precision);
        self
    }

    /// Merge overrides on top of this policy
    pub fn merge(mut self, overrides: &HashMap<String, CategoryPrecision>) -> Self {
        for (id, precision) in overrides {
            self.categories.insert(id.clone(), *precision);
        }
        self
    }

    /// Precision for a result value, adjusted by its magnitude.
    ///
    /// Tiny values get more decimals so they never round to zero; huge
    /// values get fewer so they do not show false precision.
    pub fn dynamic(&self, category_id: &str, value: f64) -> u32 {
        let bounds = self.for_category(category_id);
        let max = bounds.max.min(MAX_PRECISION);
        let min = bounds.min.min(max);
        let abs = value.abs();

        if abs == 0.0 || !abs.is_finite() {
            return bounds.default.min(max);
        }

        let precision = if abs < 0.001 {
            max
        } else if abs < 0.01 {
            6
        } else if abs < 0.1 {
            5
        } else if abs < 1.0 {
            4
        } else if abs > 1_000_000.0 {
            min
        } else if abs > 10_000.0 {
            bounds.default.min(1)
        } else {
            bounds.default
        };

        precision.clamp(min, max)
    }
}

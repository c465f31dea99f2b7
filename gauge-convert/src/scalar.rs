//! Scalar conversion engine
//!
//! Converts a value between two units of one category by normalizing
//! through the category base unit: `to.from_base(from.to_base(value))`.

use std::sync::Arc;

use tracing::debug;

use gauge_core::format::{format_plain, format_value};
use gauge_core::{
    now_millis, ConversionOptions, ConversionRequest, GaugeError, PrecisionPolicy, Result,
    Unit, UnitCategory, UnitConversionResult, MAX_PRECISION,
};
use gauge_loader::CategoryLoader;

/// Converts single values; cheap to clone
#[derive(Clone)]
pub struct ConversionEngine {
    loader: CategoryLoader,
    policy: Arc<PrecisionPolicy>,
}

impl ConversionEngine {
    pub fn new(loader: CategoryLoader, policy: PrecisionPolicy) -> Self {
        ConversionEngine {
            loader,
            policy: Arc::new(policy),
        }
    }

    pub fn loader(&self) -> &CategoryLoader {
        &self.loader
    }

    pub fn policy(&self) -> &PrecisionPolicy {
        &self.policy
    }

    /// Convert `value` from one unit to another within a category
    pub async fn convert(
        &self,
        value: f64,
        category_id: &str,
        from_unit_id: &str,
        to_unit_id: &str,
        options: &ConversionOptions,
    ) -> Result<UnitConversionResult> {
        let category = self.loader.load_unit_category(category_id).await?;
        self.convert_in(&category, value, from_unit_id, to_unit_id, options)
    }

    /// Convert a wire-format request (value may be numeric text)
    pub async fn convert_request(&self, request: &ConversionRequest) -> Result<UnitConversionResult> {
        let value = request.value.resolve()?;
        self.convert(
            value,
            &request.category_id,
            &request.from_unit_id,
            &request.to_unit_id,
            &request.options,
        )
        .await
    }

    /// Convert against an already loaded category
    pub fn convert_in(
        &self,
        category: &UnitCategory,
        value: f64,
        from_unit_id: &str,
        to_unit_id: &str,
        options: &ConversionOptions,
    ) -> Result<UnitConversionResult> {
        if !value.is_finite() {
            return Err(GaugeError::InvalidNumber(value.to_string()));
        }

        let from = find_unit(category, from_unit_id)?;
        let to = find_unit(category, to_unit_id)?;

        let raw = if from_unit_id == to_unit_id {
            value
        } else {
            to.from_base(from.to_base(value))
        };
        if !raw.is_finite() {
            return Err(GaugeError::InvalidNumber(format!(
                "{} {} has no finite value in {}",
                value, from.symbol, to.symbol
            )));
        }

        let precision = self.select_precision(&category.id, raw, options);
        let mut rounded = options.rounding_mode.apply(raw, precision);
        if rounded == 0.0 {
            rounded = 0.0;
        }

        let formatted_value = if options.format {
            format_value(rounded, &category.id, precision)
        } else {
            format_plain(rounded)
        };

        debug!(
            category = %category.id,
            from = from_unit_id,
            to = to_unit_id,
            value,
            result = rounded,
            precision,
            "converted"
        );

        Ok(UnitConversionResult {
            value: rounded,
            formatted_value,
            from_unit: from.info(),
            to_unit: to.info(),
            category: category.id.clone(),
            precision,
            timestamp: options.timestamp.unwrap_or_else(now_millis),
        })
    }

    /// Explicit precision wins, capped at `MAX_PRECISION`; otherwise the
    /// category policy adjusted by magnitude
    pub fn select_precision(&self, category_id: &str, result: f64, options: &ConversionOptions) -> u32 {
        match options.precision {
            Some(precision) => precision.min(MAX_PRECISION),
            None => self.policy.dynamic(category_id, result),
        }
    }

    /// Every other unit in the category. All units of a category are
    /// treated as mutually convertible.
    pub async fn get_compatible_units(&self, category_id: &str, unit_id: &str) -> Result<Vec<Unit>> {
        let category = self.loader.load_unit_category(category_id).await?;
        find_unit(&category, unit_id)?;
        Ok(category
            .all_units()
            .filter(|u| u.id != unit_id)
            .cloned()
            .collect())
    }

    /// Declared popular units, or a ranking that puts the base unit first
    /// and proportional units next
    pub async fn get_popular_units(&self, category_id: &str, limit: usize) -> Result<Vec<Unit>> {
        let category = self.loader.load_unit_category(category_id).await?;
        Ok(popular_units(&category, limit))
    }
}

fn find_unit<'a>(category: &'a UnitCategory, unit_id: &str) -> Result<&'a Unit> {
    category
        .lookup_unit(unit_id)
        .ok_or_else(|| GaugeError::unit_not_found(&category.id, unit_id))
}

pub(crate) fn popular_units(category: &UnitCategory, limit: usize) -> Vec<Unit> {
    if let Some(ids) = &category.popular_units {
        return ids
            .iter()
            .filter_map(|id| category.lookup_unit(id))
            .take(limit)
            .cloned()
            .collect();
    }

    let mut ranked: Vec<&Unit> = category.all_units().collect();
    ranked.sort_by_key(|u| {
        if u.base_unit {
            0
        } else if u.conversion_factor.is_some() {
            1
        } else {
            2
        }
    });
    ranked.into_iter().take(limit).cloned().collect()
}

//! Compound conversion engine
//!
//! Three independent pieces: decomposition of a total into ordered units,
//! parsing of free-text compound input, and template-based display.

mod decompose;
mod display;
mod formats;
mod parse;

use serde::{Deserialize, Serialize};
use tracing::debug;

use gauge_core::{
    now_millis, CompoundConversionResult, CompoundMeasurement, ConversionOptions, GaugeError,
    Result, Unit,
};

use crate::scalar::ConversionEngine;

pub use decompose::{decompose, resolve_targets, total_in_base, FLOOR_TOLERANCE};
pub use display::render;
pub use formats::{format_config, CompoundFormatConfig, CompoundFormatType};
pub use parse::{parse_input, parse_number_text};

/// Options for a compound conversion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundOptions {
    /// Precision of the single unit equivalent
    #[serde(default)]
    pub precision: Option<u32>,
    /// Produce `formatted` with this format's display template
    #[serde(default)]
    pub format_type: Option<CompoundFormatType>,
    #[serde(default)]
    pub timestamp: Option<u64>,
}

impl CompoundOptions {
    pub fn formatted_as(format_type: CompoundFormatType) -> Self {
        CompoundOptions {
            format_type: Some(format_type),
            ..Default::default()
        }
    }
}

#[derive(Clone)]
pub struct CompoundEngine {
    scalar: ConversionEngine,
}

impl CompoundEngine {
    pub fn new(scalar: ConversionEngine) -> Self {
        CompoundEngine { scalar }
    }

    /// Decompose a measurement into the target units, largest first
    pub async fn convert_compound<S: AsRef<str>>(
        &self,
        measurement: &CompoundMeasurement,
        target_unit_ids: &[S],
        options: &CompoundOptions,
    ) -> Result<CompoundConversionResult> {
        if measurement.is_empty() {
            return Err(GaugeError::invalid_input("compound measurement has no components"));
        }
        let Some(first_target) = target_unit_ids.first() else {
            return Err(GaugeError::invalid_input("no target units given"));
        };

        let category = self
            .scalar
            .loader()
            .load_unit_category(&measurement.category_id)
            .await?;
        let targets = resolve_targets(&category, target_unit_ids)?;
        let total = total_in_base(&category, measurement)?;
        let components = decompose(total, &targets);
        let timestamp = options.timestamp.unwrap_or_else(now_millis);

        let single_unit_equivalent = match category.base_unit() {
            Some(base) => {
                let scalar_options = ConversionOptions {
                    precision: options.precision,
                    timestamp: Some(timestamp),
                    ..Default::default()
                };
                Some(self.scalar.convert_in(&category, total, &base.id, first_target.as_ref(), &scalar_options)?)
            }
            None => None,
        };

        let result = CompoundMeasurement::new(&category.id, components);
        let formatted = options
            .format_type
            .map(|format| render(format.config().display_pattern, &result, Some(category.as_ref())));

        debug!(
            category = %category.id,
            total,
            targets = target_unit_ids.len(),
            "compound conversion"
        );

        Ok(CompoundConversionResult {
            input: measurement.clone(),
            result,
            total_in_base_unit: total,
            single_unit_equivalent,
            formatted,
            timestamp,
        })
    }

    /// Parse free text with a format's patterns; `None` when unrecognized
    pub async fn parse_compound_input(
        &self,
        input: &str,
        format_type: CompoundFormatType,
    ) -> Option<CompoundMeasurement> {
        let config = format_type.config();
        let category = match self.scalar.loader().load_unit_category(config.category_id).await {
            Ok(category) => category,
            Err(e) => {
                debug!(format = %format_type, error = %e, "compound category unavailable");
                return None;
            }
        };
        parse_input(config, &category, input)
    }

    /// Render with the format's display template. The measurement's
    /// category is loaded so symbols resolve; unknown ids print as-is.
    pub async fn format_compound_measurement(
        &self,
        measurement: &CompoundMeasurement,
        format_type: CompoundFormatType,
    ) -> String {
        let category = match self.scalar.loader().load_unit_category(&measurement.category_id).await {
            Ok(category) => Some(category),
            Err(e) => {
                debug!(format = %format_type, error = %e, "rendering without category symbols");
                None
            }
        };
        render(format_type.config().display_pattern, measurement, category.as_deref())
    }

    /// Parse then decompose into `target_unit_ids`, or the format's
    /// default units. `Ok(None)` when the input is unrecognized.
    pub async fn parse_and_convert(
        &self,
        input: &str,
        format_type: CompoundFormatType,
        target_unit_ids: Option<&[String]>,
    ) -> Result<Option<CompoundConversionResult>> {
        let Some(measurement) = self.parse_compound_input(input, format_type).await else {
            return Ok(None);
        };
        let options = CompoundOptions::formatted_as(format_type);
        let result = match target_unit_ids {
            Some(ids) if !ids.is_empty() => self.convert_compound(&measurement, ids, &options).await?,
            _ => {
                let defaults = format_type.config().default_from_format;
                self.convert_compound(&measurement, defaults, &options).await?
            }
        };
        Ok(Some(result))
    }

    /// Units offered by a format, resolved against its category
    pub async fn allowed_units(&self, format_type: CompoundFormatType) -> Result<Vec<Unit>> {
        let config = format_type.config();
        let category = self.scalar.loader().load_unit_category(config.category_id).await?;
        Ok(config
            .allowed_unit_ids
            .iter()
            .filter_map(|id| category.lookup_unit(id))
            .cloned()
            .collect())
    }
}

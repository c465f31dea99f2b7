//! Conversion requests, options and results

use std::time::{SystemTime, UNIX_EPOCH};
use serde::{Deserialize, Serialize};

use crate::error::{GaugeError, Result};
use crate::precision::MAX_PRECISION;
use crate::unit::UnitInfo;

/// How a value is brought to its final precision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Nearest, halves away from zero
    #[default]
    Round,
    Ceil,
    Floor,
    Trunc,
}

impl RoundingMode {
    /// Apply `op(value * 10^precision) / 10^precision`
    pub fn apply(self, value: f64, precision: u32) -> f64 {
        let scale = 10f64.powi(precision.min(MAX_PRECISION) as i32);
        let scaled = value * scale;
        let rounded = match self {
            RoundingMode::Round => scaled.round(),
            RoundingMode::Ceil => scaled.ceil(),
            RoundingMode::Floor => scaled.floor(),
            RoundingMode::Trunc => scaled.trunc(),
        };
        let result = rounded / scale;
        // keep the unscaled value when scaling overflowed
        if result.is_finite() {
            result
        } else {
            value
        }
    }
}

/// Options accepted by the scalar engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOptions {
    /// Decimal places to keep; bypasses the category policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(default)]
    pub rounding_mode: RoundingMode,
    /// `false` returns the plain numeric string instead of category formatting
    #[serde(default = "default_format")]
    pub format: bool,
    /// Milliseconds since the epoch to stamp on the result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

fn default_format() -> bool {
    true
}

impl Default for ConversionOptions {
    fn default() -> Self {
        ConversionOptions {
            precision: None,
            rounding_mode: RoundingMode::Round,
            format: true,
            timestamp: None,
        }
    }
}

impl ConversionOptions {
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = mode;
        self
    }

    pub fn unformatted(mut self) -> Self {
        self.format = false;
        self
    }

    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Immutable snapshot of one conversion; JSON-safe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitConversionResult {
    pub value: f64,
    pub formatted_value: String,
    pub from_unit: UnitInfo,
    pub to_unit: UnitInfo,
    pub category: String,
    pub precision: u32,
    pub timestamp: u64,
}

/// A numeric value as it arrives on the wire: a number or numeric text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// Resolve to a number; text may carry `,` grouping and surrounding spaces
    pub fn resolve(&self) -> Result<f64> {
        match self {
            NumericInput::Number(n) => Ok(*n),
            NumericInput::Text(s) => {
                let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
                cleaned
                    .parse::<f64>()
                    .map_err(|_| GaugeError::InvalidNumber(s.clone()))
            }
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

/// Wire form of a scalar conversion request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    pub value: NumericInput,
    pub category_id: String,
    pub from_unit_id: String,
    pub to_unit_id: String,
    #[serde(default)]
    pub options: ConversionOptions,
}

/// Milliseconds since the Unix epoch
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_modes() {
        assert_eq!(RoundingMode::Round.apply(1.23456, 2), 1.23);
        assert_eq!(RoundingMode::Ceil.apply(1.231, 2), 1.24);
        assert_eq!(RoundingMode::Floor.apply(1.239, 2), 1.23);
        assert_eq!(RoundingMode::Trunc.apply(-1.239, 2), -1.23);
        assert_eq!(RoundingMode::Floor.apply(-1.231, 2), -1.24);
    }

    #[test]
    fn test_rounding_zero_precision() {
        assert_eq!(RoundingMode::Round.apply(2.5, 0), 3.0);
        assert_eq!(RoundingMode::Trunc.apply(2.9, 0), 2.0);
    }

    #[test]
    fn test_rounding_precision_capped() {
        assert_eq!(RoundingMode::Round.apply(1.23456789012345, u32::MAX), 1.2345678901);
        assert_eq!(RoundingMode::Floor.apply(2.5, 4_000_000_000), 2.5);
    }

    #[test]
    fn test_numeric_input() {
        assert_eq!(NumericInput::Number(2.5).resolve().unwrap(), 2.5);
        assert_eq!(NumericInput::Text(" 1,234.5 ".into()).resolve().unwrap(), 1234.5);
        assert!(NumericInput::Text("abc".into()).resolve().is_err());
    }

    #[test]
    fn test_request_deserialize() {
        let json = r#"{
            "value": "100",
            "categoryId": "temperature",
            "fromUnitId": "celsius",
            "toUnitId": "fahrenheit",
            "options": {"roundingMode": "floor", "format": false}
        }"#;
        let req: ConversionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.value.resolve().unwrap(), 100.0);
        assert_eq!(req.options.rounding_mode, RoundingMode::Floor);
        assert!(!req.options.format);
        assert!(req.options.precision.is_none());
    }

    #[test]
    fn test_options_default_formats() {
        let opts: ConversionOptions = serde_json::from_str("{}").unwrap();
        assert!(opts.format);
        assert_eq!(opts.rounding_mode, RoundingMode::Round);
    }

    #[test]
    fn test_result_is_json_safe() {
        let result = UnitConversionResult {
            value: 212.0,
            formatted_value: "212.0".into(),
            from_unit: UnitInfo { id: "celsius".into(), name: "Celsius".into(), symbol: "°C".into() },
            to_unit: UnitInfo { id: "fahrenheit".into(), name: "Fahrenheit".into(), symbol: "°F".into() },
            category: "temperature".into(),
            precision: 2,
            timestamp: 1,
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: UnitConversionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
        assert!(json.contains("formattedValue"));
    }
}

//! Error taxonomy for conversions, lookups and category loading
//!
//! Compound parse failures are not errors: parsing returns `None`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNIT_NOT_FOUND: &str = "UNIT_NOT_FOUND";
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
    pub const LOAD_FAILED: &str = "LOAD_FAILED";
    pub const INVALID_CONFIG: &str = "INVALID_CONFIG";
}

/// Errors surfaced by the conversion core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaugeError {
    /// No data source is registered for the category id
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The unit id is absent from the loaded category and its subcategories
    #[error("Unit '{unit}' not found in category '{category}'")]
    UnitNotFound { category: String, unit: String },

    /// Malformed compound measurement or missing target units
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// NaN, infinite or unparseable numeric value
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// The category provider failed to produce data
    #[error("Failed to load category '{category}': {message}")]
    LoadFailed { category: String, message: String },

    /// Unreadable or malformed configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl GaugeError {
    pub fn unit_not_found(category: &str, unit: &str) -> Self {
        GaugeError::UnitNotFound {
            category: category.to_string(),
            unit: unit.to_string(),
        }
    }

    pub fn invalid_input(details: impl Into<String>) -> Self {
        GaugeError::InvalidInput(details.into())
    }

    pub fn load_failed(category: &str, message: impl Into<String>) -> Self {
        GaugeError::LoadFailed {
            category: category.to_string(),
            message: message.into(),
        }
    }

    /// Machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            GaugeError::UnknownCategory(_) => codes::UNKNOWN_CATEGORY,
            GaugeError::UnitNotFound { .. } => codes::UNIT_NOT_FOUND,
            GaugeError::InvalidInput(_) => codes::INVALID_INPUT,
            GaugeError::InvalidNumber(_) => codes::INVALID_NUMBER,
            GaugeError::LoadFailed { .. } => codes::LOAD_FAILED,
            GaugeError::Config(_) => codes::INVALID_CONFIG,
        }
    }

    /// Hint for the caller on how to recover
    pub fn suggestion(&self) -> Option<String> {
        match self {
            GaugeError::UnknownCategory(_) => {
                Some("Category unavailable; list categories to see what is registered".to_string())
            }
            GaugeError::UnitNotFound { category, .. } => {
                Some(format!("Search units or list the units of '{}'", category))
            }
            GaugeError::InvalidNumber(_) => Some("Provide a finite numeric value".to_string()),
            GaugeError::Config(_) => Some("Check the file named by GAUGE_CONFIG".to_string()),
            GaugeError::InvalidInput(_) | GaugeError::LoadFailed { .. } => None,
        }
    }

    /// Structured form for JSON consumers
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code().to_string(),
            message: self.to_string(),
            suggestion: self.suggestion(),
        }
    }
}

/// Serializable error payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

pub type Result<T> = std::result::Result<T, GaugeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(GaugeError::UnknownCategory("x".into()).code(), codes::UNKNOWN_CATEGORY);
        assert_eq!(GaugeError::unit_not_found("length", "furlong").code(), codes::UNIT_NOT_FOUND);
        assert_eq!(GaugeError::invalid_input("empty").code(), codes::INVALID_INPUT);
    }

    #[test]
    fn test_display() {
        let err = GaugeError::unit_not_found("length", "furlong");
        assert_eq!(err.to_string(), "Unit 'furlong' not found in category 'length'");
    }

    #[test]
    fn test_report_serialization() {
        let report = GaugeError::invalid_input("no components").report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["code"], "INVALID_INPUT");
        assert!(json.get("suggestion").is_none());
    }
}

//! Multi-unit quantities (5 ft 10 in, 1 cup 2 tbsp)

use serde::{Deserialize, Serialize};

use crate::conversion::UnitConversionResult;
use crate::unit::Unit;

/// One part of a compound quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementComponent {
    pub value: f64,
    pub unit_id: String,
    /// Resolved unit, when known; never serialized
    #[serde(skip)]
    pub unit: Option<Unit>,
}

impl MeasurementComponent {
    pub fn new(value: f64, unit_id: &str) -> Self {
        MeasurementComponent {
            value,
            unit_id: unit_id.to_string(),
            unit: None,
        }
    }

    pub fn resolved(value: f64, unit: &Unit) -> Self {
        MeasurementComponent {
            value,
            unit_id: unit.id.clone(),
            unit: Some(unit.clone()),
        }
    }
}

impl PartialEq for MeasurementComponent {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.unit_id == other.unit_id
    }
}

/// A quantity expressed as several unit components of one category.
///
/// The sum of `unit.to_base(value)` over all components is the total
/// base-unit value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundMeasurement {
    pub components: Vec<MeasurementComponent>,
    pub category_id: String,
}

impl CompoundMeasurement {
    pub fn new(category_id: &str, components: Vec<MeasurementComponent>) -> Self {
        CompoundMeasurement {
            components,
            category_id: category_id.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// `(value, unit_id)` pairs, convenient for assertions and display
    pub fn parts(&self) -> Vec<(f64, &str)> {
        self.components
            .iter()
            .map(|c| (c.value, c.unit_id.as_str()))
            .collect()
    }
}

/// Output of a compound decomposition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundConversionResult {
    pub input: CompoundMeasurement,
    pub result: CompoundMeasurement,
    pub total_in_base_unit: f64,
    /// The same quantity expressed in the first target unit alone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_unit_equivalent: Option<UnitConversionResult>,
    /// Display string when a format type was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    pub timestamp: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts() {
        let m = CompoundMeasurement::new("length", vec![
            MeasurementComponent::new(5.0, "foot"),
            MeasurementComponent::new(10.0, "inch"),
        ]);
        assert_eq!(m.parts(), vec![(5.0, "foot"), (10.0, "inch")]);
        assert!(!m.is_empty());
    }

    #[test]
    fn test_component_unit_not_serialized() {
        let inch = Unit::new("inch", "inch", "in", 0.0254);
        let c = MeasurementComponent::resolved(10.0, &inch);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["unitId"], "inch");
        assert!(json.get("unit").is_none());

        let back: MeasurementComponent = serde_json::from_value(json).unwrap();
        assert!(back.unit.is_none());
        assert_eq!(back, c);
    }
}

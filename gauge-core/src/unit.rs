//! Unit and category representation
//!
//! Every unit knows only its relationship to its category's base unit.
//! Converting between two units always goes through that base unit.

use std::fmt;
use serde::{Serialize, Deserialize};

/// How a unit's values map onto the category base unit
#[derive(Clone, Copy)]
pub enum Conversion {
    /// Affine mapping: base = value * factor + offset
    Linear { factor: f64, offset: f64 },
    /// Arbitrary mapping for units that are not affine (e.g. reciprocal fuel economy)
    Custom {
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    },
}

impl Conversion {
    /// Proportional mapping with no offset
    pub const fn factor(factor: f64) -> Self {
        Conversion::Linear { factor, offset: 0.0 }
    }

    pub fn to_base(&self, value: f64) -> f64 {
        match self {
            Conversion::Linear { factor, offset } => value * factor + offset,
            Conversion::Custom { to_base, .. } => to_base(value),
        }
    }

    pub fn from_base(&self, value: f64) -> f64 {
        match self {
            Conversion::Linear { factor, offset } => (value - offset) / factor,
            Conversion::Custom { from_base, .. } => from_base(value),
        }
    }
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Linear { factor, offset } => f
                .debug_struct("Linear")
                .field("factor", factor)
                .field("offset", offset)
                .finish(),
            Conversion::Custom { .. } => f.write_str("Custom"),
        }
    }
}

/// A unit of measurement within one category
#[derive(Debug, Clone)]
pub struct Unit {
    /// Identifier, unique within its category (e.g. "meter", "cup_us")
    pub id: String,
    /// Display name (e.g. "meter")
    pub name: String,
    pub plural_name: Option<String>,
    /// Short symbol (e.g. "m")
    pub symbol: String,
    pub aliases: Vec<String>,
    pub conversion: Conversion,
    /// Marks the category's reference unit
    pub base_unit: bool,
    /// Multiplier to the base unit, when the unit is purely proportional
    pub conversion_factor: Option<f64>,
}

impl Unit {
    /// Create a unit proportional to the base unit
    pub fn new(id: &str, name: &str, symbol: &str, factor: f64) -> Self {
        Unit {
            id: id.to_string(),
            name: name.to_string(),
            plural_name: None,
            symbol: symbol.to_string(),
            aliases: Vec::new(),
            conversion: Conversion::factor(factor),
            base_unit: false,
            conversion_factor: Some(factor),
        }
    }

    /// Create the category's base unit
    pub fn base(id: &str, name: &str, symbol: &str) -> Self {
        let mut unit = Unit::new(id, name, symbol, 1.0);
        unit.base_unit = true;
        unit
    }

    /// Create a unit with an offset (temperature scales)
    pub fn affine(id: &str, name: &str, symbol: &str, factor: f64, offset: f64) -> Self {
        Unit {
            conversion: Conversion::Linear { factor, offset },
            conversion_factor: None,
            ..Unit::new(id, name, symbol, factor)
        }
    }

    /// Create a unit with arbitrary conversion functions
    pub fn custom(
        id: &str,
        name: &str,
        symbol: &str,
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    ) -> Self {
        Unit {
            conversion: Conversion::Custom { to_base, from_base },
            conversion_factor: None,
            ..Unit::new(id, name, symbol, 1.0)
        }
    }

    /// Builder: set plural name
    pub fn plural(mut self, plural: &str) -> Self {
        self.plural_name = Some(plural.to_string());
        self
    }

    /// Builder: add aliases
    pub fn aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases.extend(aliases.iter().map(|a| a.to_string()));
        self
    }

    /// Convert a value in this unit to the category base unit
    pub fn to_base(&self, value: f64) -> f64 {
        self.conversion.to_base(value)
    }

    /// Convert a base-unit value into this unit
    pub fn from_base(&self, value: f64) -> f64 {
        self.conversion.from_base(value)
    }

    /// Check whether a name, symbol or alias refers to this unit (case-insensitive)
    pub fn matches_text(&self, text: &str) -> bool {
        let text = text.trim().to_lowercase();
        self.symbol.to_lowercase() == text
            || self.name.to_lowercase() == text
            || self.plural_name.as_ref().is_some_and(|p| p.to_lowercase() == text)
            || self.aliases.iter().any(|a| a.to_lowercase() == text)
    }

    /// JSON-safe snapshot of this unit
    pub fn info(&self) -> UnitInfo {
        UnitInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            symbol: self.symbol.clone(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Serializable identity of a unit (no conversion functions)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitInfo {
    pub id: String,
    pub name: String,
    pub symbol: String,
}

/// A named group of units inside a category (e.g. "us_customary" volumes)
#[derive(Debug, Clone)]
pub struct SubCategory {
    pub id: String,
    pub name: String,
    pub units: Vec<Unit>,
}

impl SubCategory {
    pub fn new(id: &str, name: &str, units: Vec<Unit>) -> Self {
        SubCategory {
            id: id.to_string(),
            name: name.to_string(),
            units,
        }
    }
}

/// A category of mutually convertible units
#[derive(Debug, Clone)]
pub struct UnitCategory {
    pub id: String,
    pub name: String,
    pub base_unit_id: Option<String>,
    pub units: Vec<Unit>,
    pub subcategories: Vec<SubCategory>,
    pub popular_units: Option<Vec<String>>,
}

impl UnitCategory {
    pub fn new(id: &str, name: &str) -> Self {
        UnitCategory {
            id: id.to_string(),
            name: name.to_string(),
            base_unit_id: None,
            units: Vec::new(),
            subcategories: Vec::new(),
            popular_units: None,
        }
    }

    /// Builder: name the base unit
    pub fn with_base_unit(mut self, unit_id: &str) -> Self {
        self.base_unit_id = Some(unit_id.to_string());
        self
    }

    /// Builder: add direct units
    pub fn with_units(mut self, units: Vec<Unit>) -> Self {
        self.units.extend(units);
        self
    }

    /// Builder: add a subcategory
    pub fn with_subcategory(mut self, subcategory: SubCategory) -> Self {
        self.subcategories.push(subcategory);
        self
    }

    /// Builder: declare the popular units, in display order
    pub fn with_popular(mut self, unit_ids: &[&str]) -> Self {
        self.popular_units = Some(unit_ids.iter().map(|u| u.to_string()).collect());
        self
    }

    /// Find a unit by id: direct units first, then each subcategory in order.
    /// First match wins when ids repeat across subcategories.
    pub fn lookup_unit(&self, unit_id: &str) -> Option<&Unit> {
        self.units
            .iter()
            .find(|u| u.id == unit_id)
            .or_else(|| {
                self.subcategories
                    .iter()
                    .find_map(|sub| sub.units.iter().find(|u| u.id == unit_id))
            })
    }

    /// All units, direct units first, then subcategories in declaration order
    pub fn all_units(&self) -> impl Iterator<Item = &Unit> {
        self.units
            .iter()
            .chain(self.subcategories.iter().flat_map(|sub| sub.units.iter()))
    }

    /// All units paired with the id of the subcategory holding them
    pub fn units_with_subcategory(&self) -> impl Iterator<Item = (Option<&str>, &Unit)> {
        self.units.iter().map(|u| (None, u)).chain(
            self.subcategories
                .iter()
                .flat_map(|sub| sub.units.iter().map(move |u| (Some(sub.id.as_str()), u))),
        )
    }

    /// The reference unit: `base_unit_id` if declared, else the first flagged unit
    pub fn base_unit(&self) -> Option<&Unit> {
        match &self.base_unit_id {
            Some(id) => self.lookup_unit(id),
            None => self.all_units().find(|u| u.base_unit),
        }
    }

    pub fn unit_count(&self) -> usize {
        self.all_units().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length() -> UnitCategory {
        UnitCategory::new("length", "Length")
            .with_base_unit("meter")
            .with_units(vec![
                Unit::base("meter", "meter", "m"),
                Unit::new("kilometer", "kilometer", "km", 1000.0),
            ])
            .with_subcategory(SubCategory::new("imperial", "Imperial", vec![
                Unit::new("foot", "foot", "ft", 0.3048).plural("feet"),
                Unit::new("inch", "inch", "in", 0.0254),
            ]))
            .with_subcategory(SubCategory::new("survey", "Survey", vec![
                Unit::new("foot", "survey foot", "ftUS", 1200.0 / 3937.0),
            ]))
    }

    #[test]
    fn test_linear_round_trip() {
        let km = Unit::new("kilometer", "kilometer", "km", 1000.0);
        assert_eq!(km.to_base(5.0), 5000.0);
        assert_eq!(km.from_base(5000.0), 5.0);
    }

    #[test]
    fn test_affine_conversion() {
        let celsius = Unit::affine("celsius", "Celsius", "°C", 1.0, 273.15);
        assert!((celsius.to_base(100.0) - 373.15).abs() < 1e-9);
        assert!((celsius.from_base(273.15)).abs() < 1e-9);
        assert!(celsius.conversion_factor.is_none());
    }

    #[test]
    fn test_custom_conversion() {
        let inverse = Unit::custom("inv", "inverse", "1/x", |v| 1.0 / v, |v| 1.0 / v);
        assert_eq!(inverse.to_base(4.0), 0.25);
        assert_eq!(inverse.from_base(0.25), 4.0);
    }

    #[test]
    fn test_lookup_searches_subcategories_in_order() {
        let cat = length();
        assert_eq!(cat.lookup_unit("meter").map(|u| u.symbol.as_str()), Some("m"));
        // duplicate id: first subcategory wins
        assert_eq!(cat.lookup_unit("foot").map(|u| u.symbol.as_str()), Some("ft"));
        assert!(cat.lookup_unit("furlong").is_none());
    }

    #[test]
    fn test_all_units_order() {
        let cat = length();
        let ids: Vec<&str> = cat.all_units().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["meter", "kilometer", "foot", "inch", "foot"]);
        assert_eq!(cat.unit_count(), 5);
    }

    #[test]
    fn test_base_unit_resolution() {
        let cat = length();
        assert_eq!(cat.base_unit().map(|u| u.id.as_str()), Some("meter"));

        let mut flagged = length();
        flagged.base_unit_id = None;
        assert_eq!(flagged.base_unit().map(|u| u.id.as_str()), Some("meter"));
    }

    #[test]
    fn test_matches_text() {
        let foot = Unit::new("foot", "foot", "ft", 0.3048).plural("feet").aliases(&["'"]);
        assert!(foot.matches_text("FT"));
        assert!(foot.matches_text("feet"));
        assert!(foot.matches_text("'"));
        assert!(!foot.matches_text("yard"));
    }
}

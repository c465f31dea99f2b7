//! Compound format configurations
//!
//! Each format names a category, its default unit sequence, the regexes
//! accepted as free-text input and the template used for display.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use gauge_core::GaugeError;

/// Supported compound formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompoundFormatType {
    /// feet + inches
    Height,
    /// pounds + ounces
    Weight,
    /// stone + pounds
    BodyWeight,
    /// cups + tablespoons + teaspoons
    Cooking,
    /// hours + minutes + seconds
    Duration,
}

impl CompoundFormatType {
    pub fn all() -> [CompoundFormatType; 5] {
        [
            CompoundFormatType::Height,
            CompoundFormatType::Weight,
            CompoundFormatType::BodyWeight,
            CompoundFormatType::Cooking,
            CompoundFormatType::Duration,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundFormatType::Height => "HEIGHT",
            CompoundFormatType::Weight => "WEIGHT",
            CompoundFormatType::BodyWeight => "BODY_WEIGHT",
            CompoundFormatType::Cooking => "COOKING",
            CompoundFormatType::Duration => "DURATION",
        }
    }

    pub fn config(&self) -> &'static CompoundFormatConfig {
        format_config(*self)
    }

    fn index(&self) -> usize {
        match self {
            CompoundFormatType::Height => 0,
            CompoundFormatType::Weight => 1,
            CompoundFormatType::BodyWeight => 2,
            CompoundFormatType::Cooking => 3,
            CompoundFormatType::Duration => 4,
        }
    }
}

impl fmt::Display for CompoundFormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompoundFormatType {
    type Err = GaugeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
        CompoundFormatType::all()
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| GaugeError::invalid_input(format!("unknown compound format '{}'", s)))
    }
}

/// Static configuration for one compound format
#[derive(Debug)]
pub struct CompoundFormatConfig {
    pub category_id: &'static str,
    /// Unit sequence used when no target units are given
    pub default_from_format: &'static [&'static str],
    /// Units offered for this format
    pub allowed_unit_ids: &'static [&'static str],
    /// Tried in order; first match wins
    pub parse_patterns: Vec<Regex>,
    /// `{i}` is the i-th value, `{i:unit}` its symbol
    pub display_pattern: &'static str,
    /// Informal unit text → unit id, for single value input
    pub unit_aliases: &'static [(&'static str, &'static str)],
    /// Capture index → unit id; falls back to `default_from_format`
    pub component_units: &'static [&'static str],
}

impl CompoundFormatConfig {
    /// Unit id for the i-th value captured by a parse pattern
    pub fn unit_for_index(&self, index: usize) -> Option<&'static str> {
        self.component_units
            .get(index)
            .or_else(|| self.default_from_format.get(index))
            .copied()
    }

    /// Case-insensitive lookup in the informal name table
    pub fn alias(&self, text: &str) -> Option<&'static str> {
        let text = text.trim().to_lowercase();
        self.unit_aliases
            .iter()
            .find(|(alias, _)| *alias == text)
            .map(|(_, unit_id)| *unit_id)
    }
}

const NUM: &str = r"(\d+(?:\.\d+)?)";

fn compile(format: CompoundFormatType, patterns: &[String]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(format = %format, pattern = %pattern, error = %e, "skipping invalid compound pattern");
                None
            }
        })
        .collect()
}

/// Two-part pattern: `<n> <major> [sep] <n> <minor>`
fn pair(major: &str, minor: &str, minor_optional: bool) -> String {
    let minor = if minor_optional {
        format!("(?:{})?", minor)
    } else {
        format!("(?:{})", minor)
    };
    format!(
        r"(?i)^\s*{num}\s*(?:{major})\s*(?:,|\+|and)?\s*{num}\s*{minor}\s*$",
        num = NUM,
        major = major,
        minor = minor,
    )
}

fn single(unit: &str) -> String {
    format!(r"(?i)^\s*{}\s*(?:{})\s*$", NUM, unit)
}

const FEET: &str = r"'|ft|feet|foot";
const INCHES: &str = "\"|''|in|inch|inches";
const POUNDS: &str = r"lbs?|pounds?";
const OUNCES: &str = r"oz|ounces?";
const STONE: &str = r"st|stones?";
const CUPS: &str = r"cups?|c";
const TBSP: &str = r"tbsps?|tbs|tablespoons?";
const TSP: &str = r"tsps?|teaspoons?";
const HOURS: &str = r"h|hrs?|hours?";
const MINUTES: &str = r"m|mins?|minutes?";
const SECONDS: &str = r"s|secs?|seconds?";

fn build_config(format: CompoundFormatType) -> CompoundFormatConfig {
    match format {
        CompoundFormatType::Height => CompoundFormatConfig {
            category_id: "length",
            default_from_format: &["foot", "inch"],
            allowed_unit_ids: &["foot", "inch", "centimeter", "meter"],
            parse_patterns: compile(format, &[
                pair(FEET, INCHES, true),
                single(FEET),
            ]),
            display_pattern: "{0} {0:unit} {1} {1:unit}",
            unit_aliases: &[
                ("'", "foot"), ("ft", "foot"), ("feet", "foot"), ("foot", "foot"),
                ("\"", "inch"), ("in", "inch"), ("inch", "inch"), ("inches", "inch"),
                ("cm", "centimeter"), ("m", "meter"),
            ],
            component_units: &["foot", "inch"],
        },

        CompoundFormatType::Weight => CompoundFormatConfig {
            category_id: "mass",
            default_from_format: &["pound", "ounce"],
            allowed_unit_ids: &["pound", "ounce", "kilogram", "gram"],
            parse_patterns: compile(format, &[
                pair(POUNDS, OUNCES, false),
                single(POUNDS),
            ]),
            display_pattern: "{0} {0:unit} {1} {1:unit}",
            unit_aliases: &[
                ("lb", "pound"), ("lbs", "pound"), ("pound", "pound"), ("pounds", "pound"),
                ("oz", "ounce"), ("ounce", "ounce"), ("ounces", "ounce"),
                ("kg", "kilogram"), ("kilo", "kilogram"), ("kilos", "kilogram"), ("g", "gram"),
            ],
            component_units: &["pound", "ounce"],
        },

        CompoundFormatType::BodyWeight => CompoundFormatConfig {
            category_id: "mass",
            default_from_format: &["stone", "pound"],
            allowed_unit_ids: &["stone", "pound", "kilogram"],
            parse_patterns: compile(format, &[
                pair(STONE, POUNDS, true),
                single(STONE),
            ]),
            display_pattern: "{0} {0:unit} {1} {1:unit}",
            unit_aliases: &[
                ("st", "stone"), ("stone", "stone"), ("stones", "stone"),
                ("lb", "pound"), ("lbs", "pound"), ("pound", "pound"), ("pounds", "pound"),
                ("kg", "kilogram"),
            ],
            component_units: &["stone", "pound"],
        },

        CompoundFormatType::Cooking => CompoundFormatConfig {
            category_id: "volume",
            default_from_format: &["cup_us", "tablespoon_us", "teaspoon_us"],
            allowed_unit_ids: &["cup_us", "tablespoon_us", "teaspoon_us", "fluid_ounce_us", "milliliter"],
            parse_patterns: compile(format, &[
                format!(
                    r"(?i)^\s*{n}\s*(?:{c})\s*(?:,|\+|and)?\s*{n}\s*(?:{tb})\s*(?:,|\+|and)?\s*{n}\s*(?:{ts})\s*$",
                    n = NUM, c = CUPS, tb = TBSP, ts = TSP,
                ),
                pair(CUPS, TBSP, false),
                format!(r"(?i)^\s*(\d+)\s+(\d+)\s*/\s*(\d+)\s*(?:{})\s*$", CUPS),
            ]),
            display_pattern: "{0} {0:unit} {1} {1:unit} {2} {2:unit}",
            unit_aliases: &[
                ("c", "cup_us"), ("cup", "cup_us"), ("cups", "cup_us"),
                ("tbsp", "tablespoon_us"), ("tbsps", "tablespoon_us"), ("tbs", "tablespoon_us"),
                ("tablespoon", "tablespoon_us"), ("tablespoons", "tablespoon_us"),
                ("tsp", "teaspoon_us"), ("tsps", "teaspoon_us"),
                ("teaspoon", "teaspoon_us"), ("teaspoons", "teaspoon_us"),
                ("fl oz", "fluid_ounce_us"), ("ml", "milliliter"),
            ],
            component_units: &["cup_us", "tablespoon_us", "teaspoon_us"],
        },

        CompoundFormatType::Duration => CompoundFormatConfig {
            category_id: "time",
            default_from_format: &["hour", "minute", "second"],
            allowed_unit_ids: &["hour", "minute", "second", "day"],
            parse_patterns: compile(format, &[
                format!(
                    r"(?i)^\s*{n}\s*(?:{h})\s*(?:,|and)?\s*{n}\s*(?:{m})\s*(?:,|and)?\s*(?:{n}\s*(?:{s}))?\s*$",
                    n = NUM, h = HOURS, m = MINUTES, s = SECONDS,
                ),
                r"^\s*(\d+):(\d{1,2})(?::(\d{1,2}(?:\.\d+)?))?\s*$".to_string(),
            ]),
            display_pattern: "{0} {0:unit} {1} {1:unit} {2} {2:unit}",
            unit_aliases: &[
                ("h", "hour"), ("hr", "hour"), ("hrs", "hour"), ("hour", "hour"), ("hours", "hour"),
                ("m", "minute"), ("min", "minute"), ("mins", "minute"), ("minute", "minute"), ("minutes", "minute"),
                ("s", "second"), ("sec", "second"), ("secs", "second"), ("second", "second"), ("seconds", "second"),
            ],
            component_units: &["hour", "minute", "second"],
        },
    }
}

static FORMATS: LazyLock<[CompoundFormatConfig; 5]> =
    LazyLock::new(|| CompoundFormatType::all().map(build_config));

/// Configuration for a format type
pub fn format_config(format_type: CompoundFormatType) -> &'static CompoundFormatConfig {
    &FORMATS[format_type.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_format_configured() {
        for format in CompoundFormatType::all() {
            let config = format_config(format);
            assert!(!config.default_from_format.is_empty(), "{}", format);
            assert!(!config.parse_patterns.is_empty(), "{}", format);
            for unit_id in config.default_from_format {
                assert!(config.allowed_unit_ids.contains(unit_id), "{} {}", format, unit_id);
            }
        }
    }

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(format_config(CompoundFormatType::Height).parse_patterns.len(), 2);
        assert_eq!(format_config(CompoundFormatType::Weight).parse_patterns.len(), 2);
        assert_eq!(format_config(CompoundFormatType::BodyWeight).parse_patterns.len(), 2);
        assert_eq!(format_config(CompoundFormatType::Cooking).parse_patterns.len(), 3);
        assert_eq!(format_config(CompoundFormatType::Duration).parse_patterns.len(), 2);
    }

    #[test]
    fn test_configured_units_exist() {
        for format in CompoundFormatType::all() {
            let config = format_config(format);
            let category = gauge_units::builtin_category(config.category_id).unwrap();
            let ids = config
                .allowed_unit_ids
                .iter()
                .chain(config.component_units)
                .chain(config.unit_aliases.iter().map(|(_, id)| id));
            for unit_id in ids {
                assert!(category.lookup_unit(unit_id).is_some(), "{} {}", format, unit_id);
            }
        }
    }

    #[test]
    fn test_unit_for_index() {
        let config = format_config(CompoundFormatType::Cooking);
        assert_eq!(config.unit_for_index(0), Some("cup_us"));
        assert_eq!(config.unit_for_index(2), Some("teaspoon_us"));
        assert_eq!(config.unit_for_index(3), None);
    }

    #[test]
    fn test_alias_lookup() {
        let config = format_config(CompoundFormatType::Cooking);
        assert_eq!(config.alias("TBSP"), Some("tablespoon_us"));
        assert_eq!(config.alias("pinch"), None);
    }

    #[test]
    fn test_format_type_from_str() {
        assert_eq!("height".parse::<CompoundFormatType>().unwrap(), CompoundFormatType::Height);
        assert_eq!("body-weight".parse::<CompoundFormatType>().unwrap(), CompoundFormatType::BodyWeight);
        assert!("shoe_size".parse::<CompoundFormatType>().is_err());
    }

    #[test]
    fn test_format_type_serde() {
        let json = serde_json::to_string(&CompoundFormatType::BodyWeight).unwrap();
        assert_eq!(json, "\"BODY_WEIGHT\"");
    }
}

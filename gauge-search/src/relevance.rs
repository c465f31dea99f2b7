//! Relevance scoring for unit search
//!
//! The first rule that applies decides the score; rules are checked in
//! descending order of strength.

use crate::UnitIndexEntry;

pub const EXACT_NAME: u32 = 100;
pub const EXACT_SYMBOL: u32 = 90;
pub const NAME_PREFIX: u32 = 80;
pub const SYMBOL_PREFIX: u32 = 75;
pub const NAME_CONTAINS: u32 = 60;
pub const SYMBOL_CONTAINS: u32 = 55;
pub const ALIAS_EXACT: u32 = 50;
pub const ALIAS_CONTAINS: u32 = 40;
pub const NAME_WORD_PREFIX: u32 = 30;
pub const RESIDUAL: u32 = 10;

/// Score an entry against a lowercased, trimmed query
pub fn score(entry: &UnitIndexEntry, query: &str) -> u32 {
    let name = entry.name.to_lowercase();
    let symbol = entry.symbol.to_lowercase();

    if name == query {
        EXACT_NAME
    } else if symbol == query {
        EXACT_SYMBOL
    } else if name.starts_with(query) {
        NAME_PREFIX
    } else if symbol.starts_with(query) {
        SYMBOL_PREFIX
    } else if name.contains(query) {
        NAME_CONTAINS
    } else if symbol.contains(query) {
        SYMBOL_CONTAINS
    } else if entry.aliases.iter().any(|a| a.to_lowercase() == query) {
        ALIAS_EXACT
    } else if entry.aliases.iter().any(|a| a.to_lowercase().contains(query)) {
        ALIAS_CONTAINS
    } else if name.split_whitespace().any(|word| word.starts_with(query)) {
        NAME_WORD_PREFIX
    } else {
        RESIDUAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, symbol: &str, aliases: &[&str]) -> UnitIndexEntry {
        UnitIndexEntry {
            unit_id: name.replace(' ', "_"),
            category_id: "test".to_string(),
            subcategory_id: None,
            name: name.to_string(),
            symbol: symbol.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn test_rule_order() {
        let meter = entry("meter", "m", &["metre"]);
        assert_eq!(score(&meter, "meter"), EXACT_NAME);
        assert_eq!(score(&meter, "m"), EXACT_SYMBOL);
        assert_eq!(score(&meter, "met"), NAME_PREFIX);
        assert_eq!(score(&meter, "ete"), NAME_CONTAINS);
        assert_eq!(score(&meter, "metre"), ALIAS_EXACT);
        assert_eq!(score(&meter, "etre"), ALIAS_CONTAINS);
    }

    #[test]
    fn test_symbol_rules() {
        let kmh = entry("kilometer per hour", "km/h", &["kph"]);
        assert_eq!(score(&kmh, "km/"), SYMBOL_PREFIX);
        assert_eq!(score(&kmh, "m/h"), SYMBOL_CONTAINS);
        assert_eq!(score(&kmh, "kph"), ALIAS_EXACT);
    }

    #[test]
    fn test_residual() {
        let foot = entry("foot", "ft", &[]);
        assert_eq!(score(&foot, "feet"), RESIDUAL);
    }

    #[test]
    fn test_case_insensitive() {
        let mb = entry("megabyte", "MB", &[]);
        assert_eq!(score(&mb, "mb"), EXACT_SYMBOL);
    }
}

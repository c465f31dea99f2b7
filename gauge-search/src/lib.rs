//! Gauge Search - Unit search index
//!
//! An inverted index from lowercased terms (names, symbols, aliases,
//! plural names and their individual words) to composite unit keys
//! (`category:unit`). Populated incrementally as categories load.

mod relevance;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tracing::debug;

use gauge_core::UnitCategory;

pub use relevance::score;

/// Queries shorter than this return nothing
pub const MIN_QUERY_LEN: usize = 2;

/// Default number of results
pub const DEFAULT_LIMIT: usize = 10;

/// Indexed identity of one unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitIndexEntry {
    pub unit_id: String,
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<String>,
    pub name: String,
    pub symbol: String,
    pub aliases: Vec<String>,
}

/// One ranked hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSearchResult {
    pub unit_id: String,
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<String>,
    pub name: String,
    pub symbol: String,
    pub relevance: u32,
}

/// Restricts search results
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub subcategory_id: Option<String>,
}

impl SearchFilter {
    pub fn category(category_id: &str) -> Self {
        SearchFilter {
            category_id: Some(category_id.to_string()),
            subcategory_id: None,
        }
    }

    fn accepts(&self, entry: &UnitIndexEntry) -> bool {
        if let Some(cat) = &self.category_id {
            if &entry.category_id != cat {
                return false;
            }
        }
        if let Some(sub) = &self.subcategory_id {
            if entry.subcategory_id.as_ref() != Some(sub) {
                return false;
            }
        }
        true
    }
}

/// Term → unit keys, and unit key → entry
#[derive(Debug, Default)]
pub struct SearchIndex {
    terms: BTreeMap<String, BTreeSet<String>>,
    units: HashMap<String, UnitIndexEntry>,
}

/// Index handle shared between the loader (writer) and readers
pub type SharedSearchIndex = Arc<RwLock<SearchIndex>>;

/// Composite key for a unit
pub fn unit_key(category_id: &str, unit_id: &str) -> String {
    format!("{}:{}", category_id, unit_id)
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index behind a shared handle
    pub fn shared() -> SharedSearchIndex {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Index every unit of a category. Re-adding overwrites entries
    /// without duplicating keys.
    pub fn add_category(&mut self, category_id: &str, category: &UnitCategory) {
        let mut added = 0usize;
        for (subcategory_id, unit) in category.units_with_subcategory() {
            let key = unit_key(category_id, &unit.id);
            let entry = UnitIndexEntry {
                unit_id: unit.id.clone(),
                category_id: category_id.to_string(),
                subcategory_id: subcategory_id.map(str::to_string),
                name: unit.name.clone(),
                symbol: unit.symbol.clone(),
                aliases: unit.aliases.clone(),
            };

            let mut terms: Vec<&str> = vec![unit.name.as_str(), unit.symbol.as_str()];
            terms.extend(unit.aliases.iter().map(String::as_str));
            if let Some(plural) = &unit.plural_name {
                terms.push(plural.as_str());
            }
            for term in terms {
                self.index_term(term, &key);
            }

            self.units.insert(key, entry);
            added += 1;
        }
        debug!(category = category_id, units = added, terms = self.terms.len(), "indexed category");
    }

    fn index_term(&mut self, term: &str, key: &str) {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return;
        }
        if term.split_whitespace().count() > 1 {
            for word in term.split_whitespace().filter(|w| w.chars().count() > 2) {
                self.terms.entry(word.to_string()).or_default().insert(key.to_string());
            }
        }
        self.terms.entry(term).or_default().insert(key.to_string());
    }

    /// Ranked search. Each unit appears at most once; results are sorted
    /// by relevance (ties by name, then key) and truncated to `limit`.
    pub fn search(&self, query: &str, limit: usize, filter: Option<&SearchFilter>) -> Vec<UnitSearchResult> {
        let query = query.trim().to_lowercase();
        if query.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }

        let mut matched: BTreeSet<&str> = BTreeSet::new();
        for (term, keys) in &self.terms {
            if term.contains(query.as_str()) {
                matched.extend(keys.iter().map(String::as_str));
            }
        }

        let mut results: Vec<(&str, UnitSearchResult)> = matched
            .into_iter()
            .filter_map(|key| self.units.get(key).map(|entry| (key, entry)))
            .filter(|(_, entry)| filter.map_or(true, |f| f.accepts(entry)))
            .map(|(key, entry)| {
                (key, UnitSearchResult {
                    unit_id: entry.unit_id.clone(),
                    category_id: entry.category_id.clone(),
                    subcategory_id: entry.subcategory_id.clone(),
                    name: entry.name.clone(),
                    symbol: entry.symbol.clone(),
                    relevance: relevance::score(entry, &query),
                })
            })
            .collect();

        results.sort_by(|(ka, a), (kb, b)| {
            b.relevance
                .cmp(&a.relevance)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| ka.cmp(kb))
        });
        results.truncate(limit);
        results.into_iter().map(|(_, r)| r).collect()
    }

    pub fn entry(&self, category_id: &str, unit_id: &str) -> Option<&UnitIndexEntry> {
        self.units.get(&unit_key(category_id, unit_id))
    }

    /// Drop everything
    pub fn clear(&mut self) {
        self.terms.clear();
        self.units.clear();
    }

    /// Number of indexed units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_core::Unit;

    fn index_with(categories: &[&str]) -> SearchIndex {
        let mut index = SearchIndex::new();
        for id in categories {
            let category = gauge_units::builtin_category(id).unwrap();
            index.add_category(id, &category);
        }
        index
    }

    #[test]
    fn test_short_query_returns_nothing() {
        let index = index_with(&["length"]);
        assert!(index.search("m", 10, None).is_empty());
        assert!(index.search("  ", 10, None).is_empty());
    }

    #[test]
    fn test_meter_ranks_above_alias_hits() {
        let index = index_with(&["length", "mass"]);
        let results = index.search("met", 10, None);
        assert!(!results.is_empty());
        assert_eq!(results[0].unit_id, "meter");

        let meter_score = results[0].relevance;
        let tonne = results.iter().find(|r| r.unit_id == "tonne");
        // "metric ton" is an alias of tonne
        assert_eq!(tonne.map(|r| r.relevance), Some(relevance::ALIAS_CONTAINS));
        assert!(meter_score > relevance::ALIAS_CONTAINS);
    }

    #[test]
    fn test_results_are_deduplicated() {
        let index = index_with(&["length"]);
        let results = index.search("inch", 10, None);
        let inch_hits = results.iter().filter(|r| r.unit_id == "inch").count();
        assert_eq!(inch_hits, 1);
        assert_eq!(results[0].relevance, relevance::EXACT_NAME);
    }

    #[test]
    fn test_limit_and_order() {
        let index = index_with(&["length", "area", "volume"]);
        let results = index.search("meter", 3, None);
        assert_eq!(results.len(), 3);
        for pair in results.windows(2) {
            assert!(pair[0].relevance >= pair[1].relevance);
        }
    }

    #[test]
    fn test_filter_by_category() {
        let index = index_with(&["length", "area"]);
        let filter = SearchFilter::category("area");
        let results = index.search("meter", 20, Some(&filter));
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.category_id == "area"));
    }

    #[test]
    fn test_filter_by_subcategory() {
        let index = index_with(&["volume"]);
        let filter = SearchFilter {
            category_id: Some("volume".into()),
            subcategory_id: Some("imperial".into()),
        };
        let results = index.search("pint", 10, Some(&filter));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].unit_id, "pint_uk");
    }

    #[test]
    fn test_words_of_multi_word_terms_are_indexed() {
        let index = index_with(&["speed"]);
        let results = index.search("hour", 10, None);
        assert!(results.iter().any(|r| r.unit_id == "kilometer_per_hour"));
        assert!(results.iter().any(|r| r.unit_id == "mile_per_hour"));
    }

    #[test]
    fn test_multi_word_alias_with_one_long_word() {
        let category = UnitCategory::new("mass", "Mass")
            .with_units(vec![Unit::new("short_ton", "short ton", "sh tn", 907.18474).aliases(&["us ton"])]);
        let mut index = SearchIndex::new();
        index.add_category("mass", &category);
        assert!(index.terms.contains_key("ton"));
        assert!(index.terms.contains_key("short"));
        assert!(!index.terms.contains_key("us"));
    }

    #[test]
    fn test_plural_names_match() {
        let index = index_with(&["length"]);
        let results = index.search("feet", 10, None);
        assert_eq!(results[0].unit_id, "foot");
        assert_eq!(results[0].relevance, relevance::RESIDUAL);
    }

    #[test]
    fn test_re_adding_overwrites() {
        let mut index = index_with(&["length"]);
        let count = index.len();
        let terms = index.term_count();
        let length = gauge_units::builtin_category("length").unwrap();
        index.add_category("length", &length);
        assert_eq!(index.len(), count);
        assert_eq!(index.term_count(), terms);
    }

    #[test]
    fn test_clear() {
        let mut index = index_with(&["length"]);
        assert!(!index.is_empty());
        index.clear();
        assert!(index.is_empty());
        assert!(index.search("meter", 10, None).is_empty());
    }

    #[test]
    fn test_entry_lookup() {
        let mut index = SearchIndex::new();
        let category = UnitCategory::new("length", "Length")
            .with_units(vec![Unit::base("meter", "meter", "m")]);
        index.add_category("length", &category);
        let entry = index.entry("length", "meter").unwrap();
        assert_eq!(entry.symbol, "m");
        assert!(entry.subcategory_id.is_none());
    }
}

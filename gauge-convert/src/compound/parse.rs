//! Free-text compound input ("5 ft 10 in", "2 1/2 cups", "1:30")

use std::sync::LazyLock;

use regex::{Captures, Match, Regex};
use tracing::{debug, warn};

use gauge_core::{CompoundMeasurement, MeasurementComponent, Unit, UnitCategory};

use super::formats::CompoundFormatConfig;

/// `<number> <unit text>`, where number may be a mixed number or fraction
static SINGLE_VALUE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let pattern = r"^\s*(\d+\s+\d+\s*/\s*\d+|\d+\s*/\s*\d+|\d+(?:\.\d+)?|\.\d+)\s*([^\d\s/].*?)\s*$";
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(error = %e, "single value pattern failed to compile");
            None
        }
    }
});

/// One `<number> <unit text>` run of a multi-component input
static COMPONENT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    match Regex::new(r"(\d+(?:\.\d+)?)\s*([^\d,+]+)") {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(error = %e, "component pattern failed to compile");
            None
        }
    }
});

/// Parse input against a format's patterns, then as a run of
/// `<number> <unit>` components, then the single value fallback.
/// Unrecognized input yields `None`.
pub fn parse_input(
    config: &CompoundFormatConfig,
    category: &UnitCategory,
    input: &str,
) -> Option<CompoundMeasurement> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    for pattern in &config.parse_patterns {
        let Some(caps) = pattern.captures(input) else {
            continue;
        };
        let has_fraction = pattern.as_str().contains('/');
        let Some(values) = captured_values(input, &caps, has_fraction) else {
            continue;
        };
        if let Some(measurement) = assemble(config, category, &values) {
            debug!(input, pattern = %pattern.as_str(), "compound input matched");
            return Some(measurement);
        }
    }

    parse_components(config, category, input).or_else(|| parse_single_value(config, category, input))
}

/// Values keyed by slot. A mixed number or fraction fills one slot;
/// optional groups that did not participate leave their slot empty.
fn captured_values(input: &str, caps: &Captures<'_>, has_fraction: bool) -> Option<Vec<(usize, f64)>> {
    let groups: Vec<Option<Match<'_>>> = (1..caps.len()).map(|i| caps.get(i)).collect();
    let mut values = Vec::new();
    let mut slot = 0;
    let mut i = 0;

    while i < groups.len() {
        let (value, consumed) = match fraction_at(input, &groups, i, has_fraction) {
            Some(found) => found,
            None => match groups[i] {
                Some(m) => (m.as_str().parse::<f64>().ok()?, 1),
                None => {
                    i += 1;
                    slot += 1;
                    continue;
                }
            },
        };
        if !value.is_finite() {
            return None;
        }
        values.push((slot, value));
        slot += 1;
        i += consumed;
    }

    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Mixed number (`whole num/den`, three groups) or simple fraction
/// (`num/den`, two groups) starting at group `i`
fn fraction_at(input: &str, groups: &[Option<Match<'_>>], i: usize, has_fraction: bool) -> Option<(f64, usize)> {
    if !has_fraction {
        return None;
    }
    let number = |m: Match<'_>| m.as_str().parse::<f64>().ok();
    let first = groups.get(i).copied().flatten()?;
    let second = groups.get(i + 1).copied().flatten()?;

    if let Some(third) = groups.get(i + 2).copied().flatten() {
        if !slash_between(input, first, second) && slash_between(input, second, third) {
            let value = number(first)? + number(second)? / number(third)?;
            return Some((value, 3));
        }
    }
    if slash_between(input, first, second) {
        return Some((number(first)? / number(second)?, 2));
    }
    None
}

fn slash_between(input: &str, a: Match<'_>, b: Match<'_>) -> bool {
    input
        .get(a.end()..b.start())
        .is_some_and(|gap| gap.trim() == "/")
}

fn assemble(
    config: &CompoundFormatConfig,
    category: &UnitCategory,
    values: &[(usize, f64)],
) -> Option<CompoundMeasurement> {
    let mut components = Vec::with_capacity(values.len());
    for &(slot, value) in values {
        let unit_id = config.unit_for_index(slot)?;
        let unit = category.lookup_unit(unit_id)?;
        components.push(MeasurementComponent::resolved(value, unit));
    }
    Some(CompoundMeasurement::new(&category.id, components))
}

/// Two or more `<number> <unit>` runs in any unit order, e.g. "1 cup 2 tsp".
/// Runs may be separated by whitespace, `,`, `+` or "and".
fn parse_components(
    config: &CompoundFormatConfig,
    category: &UnitCategory,
    input: &str,
) -> Option<CompoundMeasurement> {
    let re = COMPONENT.as_ref()?;
    let mut components = Vec::new();
    let mut last_end = 0;

    for caps in re.captures_iter(input) {
        let run = caps.get(0)?;
        if !is_separator(input.get(last_end..run.start())?) {
            return None;
        }
        last_end = run.end();
        let value: f64 = caps.get(1)?.as_str().parse().ok()?;
        let unit = resolve_unit(config, category, unit_text(caps.get(2)?.as_str()))?;
        components.push(MeasurementComponent::resolved(value, unit));
    }

    if components.len() < 2 || !is_separator(input.get(last_end..)?) {
        return None;
    }
    debug!(input, components = components.len(), "compound input parsed as unit runs");
    Some(CompoundMeasurement::new(&category.id, components))
}

fn is_separator(gap: &str) -> bool {
    gap.chars().all(|c| c.is_whitespace() || c == ',' || c == '+')
}

/// Unit text of a run with a trailing "and" connector removed
fn unit_text(raw: &str) -> &str {
    let text = raw.trim();
    match text.rsplit_once(char::is_whitespace) {
        Some((head, last)) if last.eq_ignore_ascii_case("and") => head.trim_end(),
        _ => text,
    }
}

/// Format alias first, then any unit of the category matching the text
fn resolve_unit<'a>(config: &CompoundFormatConfig, category: &'a UnitCategory, text: &str) -> Option<&'a Unit> {
    match config.alias(text) {
        Some(unit_id) => category.lookup_unit(unit_id),
        None => category.all_units().find(|u| u.matches_text(text)),
    }
}

fn parse_single_value(
    config: &CompoundFormatConfig,
    category: &UnitCategory,
    input: &str,
) -> Option<CompoundMeasurement> {
    let re = SINGLE_VALUE.as_ref()?;
    let caps = re.captures(input)?;
    let value = parse_number_text(caps.get(1)?.as_str())?;
    let unit_text = caps.get(2)?.as_str();

    let unit = resolve_unit(config, category, unit_text)?;

    debug!(input, unit = %unit.id, "compound input parsed as single value");
    Some(CompoundMeasurement::new(&category.id, vec![MeasurementComponent::resolved(value, unit)]))
}

/// Decimal, simple fraction or mixed number
pub fn parse_number_text(text: &str) -> Option<f64> {
    let text = text.trim();
    let value = match text.split_once('/') {
        None => text.parse::<f64>().ok()?,
        Some((left, denominator)) => {
            let denominator: f64 = denominator.trim().parse().ok()?;
            if denominator == 0.0 {
                return None;
            }
            let left = left.trim();
            let (whole, numerator) = match left.rsplit_once(char::is_whitespace) {
                Some((whole, numerator)) => (whole.trim().parse::<f64>().ok()?, numerator.parse::<f64>().ok()?),
                None => (0.0, left.parse::<f64>().ok()?),
            };
            whole + numerator / denominator
        }
    };
    value.is_finite().then_some(value)
}

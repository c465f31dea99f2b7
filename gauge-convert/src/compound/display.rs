//! Display templates: `{i}` is the i-th value, `{i:unit}` its symbol

use gauge_core::format::format_trimmed;
use gauge_core::{CompoundMeasurement, MeasurementComponent, UnitCategory};

/// Fill a display template from a measurement
pub fn render(pattern: &str, measurement: &CompoundMeasurement, category: Option<&UnitCategory>) -> String {
    let mut out = pattern.to_string();
    for (i, component) in measurement.components.iter().enumerate() {
        out = out
            .replace(&format!("{{{}:unit}}", i), &symbol(component, category))
            .replace(&format!("{{{}}}", i), &format_trimmed(component.value, 2));
    }
    strip_placeholders(&out)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn symbol(component: &MeasurementComponent, category: Option<&UnitCategory>) -> String {
    if let Some(unit) = &component.unit {
        return unit.symbol.clone();
    }
    category
        .and_then(|c| c.lookup_unit(&component.unit_id))
        .map(|u| u.symbol.clone())
        .unwrap_or_else(|| component.unit_id.clone())
}

fn strip_placeholders(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tail.find('}') {
            Some(end) if is_placeholder(&tail[1..end]) => rest = &tail[end + 1..],
            _ => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn is_placeholder(inner: &str) -> bool {
    let index = inner.strip_suffix(":unit").unwrap_or(inner);
    !index.is_empty() && index.chars().all(|c| c.is_ascii_digit())
}

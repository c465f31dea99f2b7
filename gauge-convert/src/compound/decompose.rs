//! Greedy decomposition of a base-unit total into ordered target units

use gauge_core::{CompoundMeasurement, GaugeError, MeasurementComponent, Result, Unit, UnitCategory};

/// Relative slack applied before flooring and when zeroing the residual
pub const FLOOR_TOLERANCE: f64 = 1e-9;

/// Sum of every component in base units. Components without a resolved
/// unit are looked up in the category.
pub fn total_in_base(category: &UnitCategory, measurement: &CompoundMeasurement) -> Result<f64> {
    let mut total = 0.0;
    for component in &measurement.components {
        if !component.value.is_finite() {
            return Err(GaugeError::InvalidNumber(component.value.to_string()));
        }
        let unit = match &component.unit {
            Some(unit) => unit,
            None => category
                .lookup_unit(&component.unit_id)
                .ok_or_else(|| GaugeError::unit_not_found(&category.id, &component.unit_id))?,
        };
        total += unit.to_base(component.value);
    }
    Ok(total)
}

/// Resolve target ids, preserving order
pub fn resolve_targets<'a, S: AsRef<str>>(category: &'a UnitCategory, unit_ids: &[S]) -> Result<Vec<&'a Unit>> {
    unit_ids
        .iter()
        .map(|id| {
            let id = id.as_ref();
            category
                .lookup_unit(id)
                .ok_or_else(|| GaugeError::unit_not_found(&category.id, id))
        })
        .collect()
}

/// Whole amounts of every target but the last; the last absorbs the
/// remainder rounded to 2 decimals.
pub fn decompose(total: f64, targets: &[&Unit]) -> Vec<MeasurementComponent> {
    let tolerance = FLOOR_TOLERANCE * total.abs().max(1.0);
    let mut remaining = total;
    let mut components = Vec::with_capacity(targets.len());

    for (i, unit) in targets.iter().enumerate() {
        if i + 1 == targets.len() {
            components.push(MeasurementComponent::resolved(round2(unit.from_base(remaining)), unit));
            break;
        }

        let amount = unit.from_base(remaining);
        let whole = (amount + FLOOR_TOLERANCE * amount.abs().max(1.0)).floor();
        components.push(MeasurementComponent::resolved(whole, unit));

        remaining -= unit.to_base(whole);
        if remaining.abs() < tolerance {
            remaining = 0.0;
        }
    }
    components
}

fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

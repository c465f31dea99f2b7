//! Temperature scales (base: kelvin)
//!
//! Celsius and Fahrenheit carry an offset, so they have no conversion factor.

use gauge_core::{Unit, UnitCategory};

pub fn temperature() -> UnitCategory {
    UnitCategory::new("temperature", "Temperature")
        .with_base_unit("kelvin")
        .with_units(vec![
            Unit::affine("celsius", "Celsius", "°C", 1.0, 273.15).aliases(&["degC", "centigrade", "C"]),
            Unit::affine("fahrenheit", "Fahrenheit", "°F", 5.0 / 9.0, 459.67 * 5.0 / 9.0).aliases(&["degF", "F"]),
            Unit::base("kelvin", "kelvin", "K").plural("kelvins"),
            Unit::new("rankine", "Rankine", "°R", 5.0 / 9.0).aliases(&["degR"]),
        ])
        .with_popular(&["celsius", "fahrenheit", "kelvin"])
}

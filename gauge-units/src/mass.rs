//! Mass units (base: kilogram)

use gauge_core::{SubCategory, Unit, UnitCategory};

pub fn mass() -> UnitCategory {
    UnitCategory::new("mass", "Mass & Weight")
        .with_base_unit("kilogram")
        .with_subcategory(SubCategory::new("metric", "Metric", vec![
            Unit::base("kilogram", "kilogram", "kg").plural("kilograms").aliases(&["kilo", "kilos"]),
            Unit::new("gram", "gram", "g", 0.001).plural("grams").aliases(&["gramme"]),
            Unit::new("milligram", "milligram", "mg", 1e-6).plural("milligrams"),
            Unit::new("microgram", "microgram", "µg", 1e-9).plural("micrograms").aliases(&["mcg", "ug"]),
            Unit::new("tonne", "tonne", "t", 1000.0).plural("tonnes").aliases(&["metric ton"]),
        ]))
        .with_subcategory(SubCategory::new("imperial", "Imperial / US", vec![
            Unit::new("pound", "pound", "lb", 0.45359237).plural("pounds").aliases(&["lbs"]),
            Unit::new("ounce", "ounce", "oz", 0.028349523125).plural("ounces"),
            Unit::new("stone", "stone", "st", 6.35029318).plural("stones"),
            Unit::new("short_ton", "short ton", "ton", 907.18474).plural("short tons").aliases(&["us ton"]),
            Unit::new("long_ton", "long ton", "LT", 1016.0469088).plural("long tons").aliases(&["imperial ton"]),
            Unit::new("grain", "grain", "gr", 0.00006479891).plural("grains"),
        ]))
        .with_subcategory(SubCategory::new("other", "Other", vec![
            Unit::new("carat", "carat", "ct", 0.0002).plural("carats"),
            Unit::new("troy_ounce", "troy ounce", "ozt", 0.0311034768).plural("troy ounces"),
        ]))
        .with_popular(&["kilogram", "gram", "pound", "ounce", "stone"])
}

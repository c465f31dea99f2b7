//! Volume units (base: liter)

use gauge_core::{SubCategory, Unit, UnitCategory};

pub fn volume() -> UnitCategory {
    UnitCategory::new("volume", "Volume")
        .with_base_unit("liter")
        .with_subcategory(SubCategory::new("metric", "Metric", vec![
            Unit::base("liter", "liter", "L").plural("liters").aliases(&["litre", "litres", "l"]),
            Unit::new("milliliter", "milliliter", "mL", 0.001).plural("milliliters").aliases(&["millilitre", "ml", "cc"]),
            Unit::new("centiliter", "centiliter", "cL", 0.01).plural("centiliters").aliases(&["cl"]),
            Unit::new("deciliter", "deciliter", "dL", 0.1).plural("deciliters").aliases(&["dl"]),
            Unit::new("cubic_meter", "cubic meter", "m³", 1000.0).plural("cubic meters").aliases(&["m3"]),
            Unit::new("cubic_centimeter", "cubic centimeter", "cm³", 0.001).plural("cubic centimeters").aliases(&["cm3"]),
        ]))
        .with_subcategory(SubCategory::new("us_customary", "US Customary", vec![
            Unit::new("teaspoon_us", "teaspoon", "tsp", 0.00492892159375).plural("teaspoons"),
            Unit::new("tablespoon_us", "tablespoon", "tbsp", 0.01478676478125).plural("tablespoons"),
            Unit::new("fluid_ounce_us", "fluid ounce", "fl oz", 0.0295735295625).plural("fluid ounces").aliases(&["floz"]),
            Unit::new("cup_us", "cup", "cup", 0.2365882365).plural("cups"),
            Unit::new("pint_us", "pint", "pt", 0.473176473).plural("pints"),
            Unit::new("quart_us", "quart", "qt", 0.946352946).plural("quarts"),
            Unit::new("gallon_us", "gallon", "gal", 3.785411784).plural("gallons"),
            Unit::new("cubic_inch", "cubic inch", "in³", 0.016387064).plural("cubic inches").aliases(&["in3"]),
            Unit::new("cubic_foot", "cubic foot", "ft³", 28.316846592).plural("cubic feet").aliases(&["ft3"]),
        ]))
        .with_subcategory(SubCategory::new("imperial", "Imperial", vec![
            Unit::new("teaspoon_uk", "imperial teaspoon", "tsp (UK)", 0.00591938802083).plural("imperial teaspoons"),
            Unit::new("tablespoon_uk", "imperial tablespoon", "tbsp (UK)", 0.0177581640625).plural("imperial tablespoons"),
            Unit::new("fluid_ounce_uk", "imperial fluid ounce", "fl oz (UK)", 0.0284130625).plural("imperial fluid ounces"),
            Unit::new("pint_uk", "imperial pint", "pt (UK)", 0.56826125).plural("imperial pints"),
            Unit::new("gallon_uk", "imperial gallon", "gal (UK)", 4.54609).plural("imperial gallons"),
        ]))
        .with_popular(&["liter", "milliliter", "cup_us", "gallon_us", "fluid_ounce_us", "tablespoon_us"])
}

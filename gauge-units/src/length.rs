//! Length units (base: meter)

use gauge_core::{SubCategory, Unit, UnitCategory};

pub fn length() -> UnitCategory {
    UnitCategory::new("length", "Length")
        .with_base_unit("meter")
        .with_subcategory(SubCategory::new("metric", "Metric", vec![
            Unit::base("meter", "meter", "m").plural("meters").aliases(&["metre", "metres"]),
            Unit::new("kilometer", "kilometer", "km", 1000.0).plural("kilometers").aliases(&["kilometre", "klick"]),
            Unit::new("centimeter", "centimeter", "cm", 0.01).plural("centimeters").aliases(&["centimetre"]),
            Unit::new("millimeter", "millimeter", "mm", 0.001).plural("millimeters").aliases(&["millimetre"]),
            Unit::new("micrometer", "micrometer", "µm", 1e-6).plural("micrometers").aliases(&["micron", "um"]),
            Unit::new("nanometer", "nanometer", "nm", 1e-9).plural("nanometers").aliases(&["nanometre"]),
        ]))
        .with_subcategory(SubCategory::new("imperial", "Imperial / US", vec![
            Unit::new("inch", "inch", "in", 0.0254).plural("inches").aliases(&["\""]),
            Unit::new("foot", "foot", "ft", 0.3048).plural("feet").aliases(&["'"]),
            Unit::new("yard", "yard", "yd", 0.9144).plural("yards"),
            Unit::new("mile", "mile", "mi", 1609.344).plural("miles").aliases(&["statute mile"]),
            Unit::new("nautical_mile", "nautical mile", "nmi", 1852.0).plural("nautical miles").aliases(&["NM"]),
            Unit::new("furlong", "furlong", "fur", 201.168).plural("furlongs"),
        ]))
        .with_subcategory(SubCategory::new("astronomical", "Astronomical", vec![
            Unit::new("astronomical_unit", "astronomical unit", "au", 149_597_870_700.0).plural("astronomical units"),
            Unit::new("light_year", "light year", "ly", 9_460_730_472_580_800.0).plural("light years").aliases(&["lightyear"]),
            Unit::new("parsec", "parsec", "pc", 30_856_775_814_913_673.0).plural("parsecs"),
        ]))
        .with_popular(&["meter", "kilometer", "centimeter", "foot", "inch", "mile"])
}

pub fn area() -> UnitCategory {
    UnitCategory::new("area", "Area")
        .with_base_unit("square_meter")
        .with_units(vec![
            Unit::base("square_meter", "square meter", "m²").plural("square meters").aliases(&["m2", "sq m"]),
            Unit::new("square_kilometer", "square kilometer", "km²", 1e6).plural("square kilometers").aliases(&["km2"]),
            Unit::new("square_centimeter", "square centimeter", "cm²", 1e-4).plural("square centimeters").aliases(&["cm2"]),
            Unit::new("hectare", "hectare", "ha", 10_000.0).plural("hectares"),
            Unit::new("acre", "acre", "ac", 4046.8564224).plural("acres"),
            Unit::new("square_foot", "square foot", "ft²", 0.09290304).plural("square feet").aliases(&["ft2", "sq ft"]),
            Unit::new("square_inch", "square inch", "in²", 0.00064516).plural("square inches").aliases(&["in2", "sq in"]),
            Unit::new("square_yard", "square yard", "yd²", 0.83612736).plural("square yards").aliases(&["yd2"]),
            Unit::new("square_mile", "square mile", "mi²", 2_589_988.110336).plural("square miles").aliases(&["mi2"]),
        ])
        .with_popular(&["square_meter", "square_foot", "hectare", "acre"])
}

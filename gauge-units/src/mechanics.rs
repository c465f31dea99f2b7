//! Derived mechanical and miscellaneous categories

use std::f64::consts::PI;
use gauge_core::{Unit, UnitCategory};

pub fn speed() -> UnitCategory {
    UnitCategory::new("speed", "Speed")
        .with_base_unit("meter_per_second")
        .with_units(vec![
            Unit::base("meter_per_second", "meter per second", "m/s").plural("meters per second"),
            Unit::new("kilometer_per_hour", "kilometer per hour", "km/h", 1.0 / 3.6).plural("kilometers per hour").aliases(&["kph", "kmh"]),
            Unit::new("mile_per_hour", "mile per hour", "mph", 0.44704).plural("miles per hour"),
            Unit::new("foot_per_second", "foot per second", "ft/s", 0.3048).plural("feet per second").aliases(&["fps"]),
            Unit::new("knot", "knot", "kn", 1852.0 / 3600.0).plural("knots").aliases(&["kt"]),
            Unit::new("mach", "mach", "Ma", 340.29).aliases(&["speed of sound"]),
        ])
        .with_popular(&["kilometer_per_hour", "mile_per_hour", "meter_per_second", "knot"])
}

pub fn pressure() -> UnitCategory {
    UnitCategory::new("pressure", "Pressure")
        .with_base_unit("pascal")
        .with_units(vec![
            Unit::base("pascal", "pascal", "Pa").plural("pascals"),
            Unit::new("hectopascal", "hectopascal", "hPa", 100.0).plural("hectopascals"),
            Unit::new("kilopascal", "kilopascal", "kPa", 1000.0).plural("kilopascals"),
            Unit::new("megapascal", "megapascal", "MPa", 1e6).plural("megapascals"),
            Unit::new("bar", "bar", "bar", 100_000.0).plural("bars"),
            Unit::new("millibar", "millibar", "mbar", 100.0).plural("millibars"),
            Unit::new("atmosphere", "atmosphere", "atm", 101_325.0).plural("atmospheres"),
            Unit::new("psi", "pound per square inch", "psi", 6894.757293168).plural("pounds per square inch"),
            Unit::new("mmhg", "millimeter of mercury", "mmHg", 133.322387415).plural("millimeters of mercury"),
            Unit::new("torr", "torr", "Torr", 101_325.0 / 760.0),
            Unit::new("inhg", "inch of mercury", "inHg", 3386.389).plural("inches of mercury"),
        ])
        .with_popular(&["pascal", "kilopascal", "bar", "psi", "atmosphere"])
}

pub fn energy() -> UnitCategory {
    UnitCategory::new("energy", "Energy")
        .with_base_unit("joule")
        .with_units(vec![
            Unit::base("joule", "joule", "J").plural("joules"),
            Unit::new("kilojoule", "kilojoule", "kJ", 1000.0).plural("kilojoules"),
            Unit::new("megajoule", "megajoule", "MJ", 1e6).plural("megajoules"),
            Unit::new("calorie", "calorie", "cal", 4.184).plural("calories"),
            Unit::new("kilocalorie", "kilocalorie", "kcal", 4184.0).plural("kilocalories").aliases(&["Calorie", "food calorie"]),
            Unit::new("watt_hour", "watt-hour", "Wh", 3600.0).plural("watt-hours"),
            Unit::new("kilowatt_hour", "kilowatt-hour", "kWh", 3.6e6).plural("kilowatt-hours"),
            Unit::new("electronvolt", "electronvolt", "eV", 1.602176634e-19).plural("electronvolts"),
            Unit::new("btu", "British thermal unit", "BTU", 1055.05585262).plural("British thermal units"),
            Unit::new("foot_pound", "foot-pound", "ft⋅lbf", 1.3558179483314).plural("foot-pounds").aliases(&["ftlb"]),
        ])
        .with_popular(&["joule", "kilojoule", "kilocalorie", "kilowatt_hour"])
}

pub fn power() -> UnitCategory {
    UnitCategory::new("power", "Power")
        .with_base_unit("watt")
        .with_units(vec![
            Unit::base("watt", "watt", "W").plural("watts"),
            Unit::new("milliwatt", "milliwatt", "mW", 0.001).plural("milliwatts"),
            Unit::new("kilowatt", "kilowatt", "kW", 1000.0).plural("kilowatts"),
            Unit::new("megawatt", "megawatt", "MW", 1e6).plural("megawatts"),
            Unit::new("gigawatt", "gigawatt", "GW", 1e9).plural("gigawatts"),
            Unit::new("horsepower", "horsepower", "hp", 745.699872).aliases(&["mechanical horsepower"]),
            Unit::new("metric_horsepower", "metric horsepower", "PS", 735.49875).aliases(&["cv", "pferdestärke"]),
            Unit::new("btu_per_hour", "BTU per hour", "BTU/h", 0.29307107).aliases(&["btuh"]),
        ])
}

pub fn force() -> UnitCategory {
    UnitCategory::new("force", "Force")
        .with_base_unit("newton")
        .with_units(vec![
            Unit::base("newton", "newton", "N").plural("newtons"),
            Unit::new("kilonewton", "kilonewton", "kN", 1000.0).plural("kilonewtons"),
            Unit::new("dyne", "dyne", "dyn", 1e-5).plural("dynes"),
            Unit::new("pound_force", "pound-force", "lbf", 4.4482216152605),
            Unit::new("kilogram_force", "kilogram-force", "kgf", 9.80665).aliases(&["kilopond"]),
        ])
}

pub fn frequency() -> UnitCategory {
    UnitCategory::new("frequency", "Frequency")
        .with_base_unit("hertz")
        .with_units(vec![
            Unit::base("hertz", "hertz", "Hz"),
            Unit::new("kilohertz", "kilohertz", "kHz", 1e3),
            Unit::new("megahertz", "megahertz", "MHz", 1e6),
            Unit::new("gigahertz", "gigahertz", "GHz", 1e9),
            Unit::new("rpm", "revolution per minute", "rpm", 1.0 / 60.0).plural("revolutions per minute"),
        ])
}

pub fn angle() -> UnitCategory {
    UnitCategory::new("angle", "Angle")
        .with_base_unit("degree")
        .with_units(vec![
            Unit::base("degree", "degree", "°").plural("degrees").aliases(&["deg"]),
            Unit::new("radian", "radian", "rad", 180.0 / PI).plural("radians"),
            Unit::new("gradian", "gradian", "grad", 0.9).plural("gradians").aliases(&["gon"]),
            Unit::new("arcminute", "arcminute", "′", 1.0 / 60.0).plural("arcminutes").aliases(&["arcmin"]),
            Unit::new("arcsecond", "arcsecond", "″", 1.0 / 3600.0).plural("arcseconds").aliases(&["arcsec"]),
            Unit::new("turn", "turn", "tr", 360.0).plural("turns").aliases(&["revolution"]),
        ])
}

fn liters_per_100km_from_mpg(mpg: f64) -> f64 {
    235.214583 / mpg
}

fn km_per_liter_to_l100(kml: f64) -> f64 {
    100.0 / kml
}

/// Fuel economy is reciprocal between consumption and distance-per-volume
/// units, so the non-base units use custom conversions.
pub fn fuel_economy() -> UnitCategory {
    UnitCategory::new("fuel_economy", "Fuel Economy")
        .with_base_unit("liter_per_100km")
        .with_units(vec![
            Unit::base("liter_per_100km", "liter per 100 kilometers", "L/100km").plural("liters per 100 kilometers"),
            Unit::custom("mpg_us", "mile per gallon", "mpg", liters_per_100km_from_mpg, liters_per_100km_from_mpg)
                .plural("miles per gallon"),
            Unit::custom("mpg_uk", "mile per imperial gallon", "mpg (UK)", |v| 282.480936 / v, |v| 282.480936 / v)
                .plural("miles per imperial gallon"),
            Unit::custom("km_per_liter", "kilometer per liter", "km/L", km_per_liter_to_l100, km_per_liter_to_l100)
                .plural("kilometers per liter"),
        ])
        .with_popular(&["liter_per_100km", "mpg_us", "km_per_liter"])
}

//! Gauge Units - Built-in unit registry
//!
//! Static per-category definitions. Every unit converts to and from its
//! category's base unit; converting between two units routes through it.
//!
//! Categories:
//! - Length (m, km, ft, mi, etc.) and Area (m², ft², acre, etc.)
//! - Mass (kg, g, lb, oz, st, etc.)
//! - Volume (L, mL, cup, tbsp, gal, etc.)
//! - Temperature (°C, °F, K, °R)
//! - Time (s, min, h, d, etc.)
//! - Digital storage (B, kB, MiB, etc.) and data transfer rate (bps, MB/s, etc.)
//! - Speed, Pressure, Energy, Power, Force, Frequency, Angle
//! - Fuel economy (L/100km, mpg)

mod length;
mod mass;
mod volume;
mod temperature;
mod time;
mod digital;
mod mechanics;

use gauge_core::UnitCategory;

/// Builds one category's data
pub type CategoryBuilder = fn() -> UnitCategory;

/// Every built-in category id paired with its builder, in display order
pub static BUILTIN_CATEGORIES: [(&str, CategoryBuilder); 16] = [
    ("length", length::length),
    ("mass", mass::mass),
    ("temperature", temperature::temperature),
    ("volume", volume::volume),
    ("area", length::area),
    ("time", time::time),
    ("speed", mechanics::speed),
    ("digital_storage", digital::digital_storage),
    ("data_transfer_rate", digital::data_transfer_rate),
    ("pressure", mechanics::pressure),
    ("energy", mechanics::energy),
    ("power", mechanics::power),
    ("force", mechanics::force),
    ("frequency", mechanics::frequency),
    ("angle", mechanics::angle),
    ("fuel_economy", mechanics::fuel_economy),
];

/// Build a built-in category by id
pub fn builtin_category(id: &str) -> Option<UnitCategory> {
    BUILTIN_CATEGORIES
        .iter()
        .find(|(cat_id, _)| *cat_id == id)
        .map(|(_, build)| build())
}

/// Ids of all built-in categories
pub fn builtin_category_ids() -> Vec<&'static str> {
    BUILTIN_CATEGORIES.iter().map(|(id, _)| *id).collect()
}

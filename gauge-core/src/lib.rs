//! Gauge Core - Fundamental types
//!
//! This crate provides the core types used throughout Gauge:
//! - `Unit` / `UnitCategory`: units and the base-unit relationship
//! - `CompoundMeasurement`: multi-unit quantities
//! - `UnitConversionResult`: JSON-safe conversion snapshots
//! - `GaugeError`: error taxonomy
//! - `PrecisionPolicy` and `format`: precision selection and display rules

mod unit;
mod compound;
mod conversion;
mod error;
mod precision;
pub mod format;

pub use unit::{Conversion, Unit, UnitInfo, SubCategory, UnitCategory};
pub use compound::{CompoundMeasurement, MeasurementComponent, CompoundConversionResult};
pub use conversion::{
    ConversionOptions, ConversionRequest, NumericInput, RoundingMode,
    UnitConversionResult, now_millis,
};
pub use error::{GaugeError, ErrorReport, Result, codes};
pub use precision::{CategoryPrecision, PrecisionPolicy, DEFAULT_PRECISION, MAX_PRECISION};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Unit, UnitCategory, SubCategory, CompoundMeasurement, MeasurementComponent,
        ConversionOptions, RoundingMode, UnitConversionResult, GaugeError, Result,
    };
}

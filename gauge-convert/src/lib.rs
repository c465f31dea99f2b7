//! Gauge Convert - Conversion engines
//!
//! - `ConversionEngine`: single value conversion through the category base unit
//! - `CompoundEngine`: multi-unit decomposition, free-text parsing and display

mod scalar;
pub mod compound;

pub use scalar::ConversionEngine;
pub use compound::{CompoundEngine, CompoundFormatConfig, CompoundFormatType, CompoundOptions, format_config};

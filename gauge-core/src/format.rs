//! Category-aware number formatting shared by both conversion engines
//!
//! Output is en-US style: `,` grouping, `.` decimal point, trailing
//! fraction zeros trimmed down to the rule's minimum.

use crate::precision::MAX_PRECISION;

/// Values at or above this magnitude render in scientific notation
const SCIENTIFIC_THRESHOLD: f64 = 1e15;

/// Significant digits kept in a scientific mantissa
const SCIENTIFIC_DIGITS: usize = 6;

/// Fraction-digit bounds for one rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FractionDigits {
    pub min: u32,
    pub max: u32,
}

impl FractionDigits {
    pub const fn up_to(max: u32) -> Self {
        FractionDigits { min: 0, max }
    }

    pub const fn exactly(digits: u32) -> Self {
        FractionDigits { min: digits, max: digits }
    }
}

/// Pick fraction-digit bounds for a category and value
pub fn fraction_digits(category_id: &str, value: f64, precision: u32) -> FractionDigits {
    let abs = value.abs();
    match category_id {
        "temperature" => FractionDigits { min: 1, max: precision.max(1) },
        "time" => {
            if abs >= 100.0 {
                FractionDigits::up_to(0)
            } else if abs >= 1.0 {
                FractionDigits::up_to(precision.min(2))
            } else {
                FractionDigits::up_to(precision)
            }
        }
        "digital_storage" | "data_transfer_rate" => {
            if abs >= 1.0 {
                FractionDigits::up_to(precision.min(2))
            } else {
                FractionDigits::up_to(precision)
            }
        }
        "currency" => FractionDigits::exactly(2),
        _ => FractionDigits::up_to(precision),
    }
}

/// Format a converted value for display according to its category
pub fn format_value(value: f64, category_id: &str, precision: u32) -> String {
    if !value.is_finite() {
        return format_plain(value);
    }
    if value.abs() >= SCIENTIFIC_THRESHOLD {
        return format_scientific(value);
    }
    let digits = fraction_digits(category_id, value, precision);
    format_grouped(value, digits)
}

/// Plain numeric string, no grouping and no padding
pub fn format_plain(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Fixed-point rendering with `,` thousands grouping
pub fn format_grouped(value: f64, digits: FractionDigits) -> String {
    let max = digits.max.min(MAX_PRECISION) as usize;
    let rendered = format!("{:.*}", max, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, f),
        None => (rendered.as_str(), ""),
    };

    let mut frac = frac_part.to_string();
    while frac.len() > digits.min.min(MAX_PRECISION) as usize && frac.ends_with('0') {
        frac.pop();
    }

    let mut out = String::new();
    let is_zero = int_part.chars().all(|c| c == '0') && frac.chars().all(|c| c == '0');
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

/// Round to a number of decimal places and render without grouping,
/// trailing zeros trimmed (used by compound display templates)
pub fn format_trimmed(value: f64, decimals: u32) -> String {
    let rendered = format_grouped(value, FractionDigits::up_to(decimals));
    rendered.replace(',', "")
}

fn format_scientific(value: f64) -> String {
    let rendered = format!("{:.*e}", SCIENTIFIC_DIGITS - 1, value);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let mantissa = if mantissa.contains('.') {
                mantissa.trim_end_matches('0').trim_end_matches('.')
            } else {
                mantissa
            };
            format!("{}e{}", mantissa, exponent)
        }
        None => rendered,
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

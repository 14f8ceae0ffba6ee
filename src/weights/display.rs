//! Display formatting for weights and volumes
//!
//! All inputs are kilogram values as stored. Missing data (zero or NaN)
//! is shown as "-".

use super::converter::{kg_to_lbs, round_to};
use super::units::{
    unit_label, DEFAULT_DISPLAY_PRECISION, EMPTY_DISPLAY, WHOLE_VOLUME_THRESHOLD,
};

/// Format a stored weight with one decimal and its unit, e.g. "135.0 lbs"
pub fn format_weight(weight: f64, use_metric: bool) -> String {
    let converted = if use_metric { weight } else { kg_to_lbs(weight, true) };
    format!("{} {}", to_fixed_one(converted), unit_label(use_metric))
}

/// One-decimal text of the exact binary value, like JS `toFixed(1)`.
///
/// 0.15 is stored as 0.1499999... and gives "0.1". Only values that sit
/// exactly on a tie (odd multiples of 0.25) round away from zero; Rust's
/// formatter alone would round those to even.
pub fn to_fixed_one(value: f64) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    if value == 0.0 {
        return "0.0".to_string();
    }

    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}", (value * 10.0).round() / 10.0);
    }

    format!("{:.1}", value)
}

/// Display a stored single weight, e.g. "135 lbs" or "61.2 kg".
///
/// Pound values are snapped. Trailing zeros are dropped ("100 kg", not
/// "100.0 kg").
pub fn display_weight(weight: f64, use_metric: bool, include_unit: bool, precision: u32) -> String {
    if weight.is_nan() || weight == 0.0 {
        return EMPTY_DISPLAY.to_string();
    }

    let converted = if use_metric { weight } else { kg_to_lbs(weight, true) };
    let formatted = format_number(round_to(converted, precision));

    if include_unit {
        format!("{} {}", formatted, unit_label(use_metric))
    } else {
        formatted
    }
}

/// `display_weight` with the unit label and one decimal
pub fn display_weight_default(weight: f64, use_metric: bool) -> String {
    display_weight(weight, use_metric, true, DEFAULT_DISPLAY_PRECISION)
}

/// Display a training volume.
///
/// Volumes in kilograms are converted without snapping unless
/// `is_already_converted` says the value is in the display unit already.
/// Values of 1000 and above are shown as whole numbers with thousands
/// separators ("1,500 kg").
pub fn display_volume(volume: f64, use_metric: bool, is_already_converted: bool) -> String {
    if volume.is_nan() || volume == 0.0 {
        return EMPTY_DISPLAY.to_string();
    }

    let converted = if is_already_converted || use_metric {
        volume
    } else {
        kg_to_lbs(volume, false)
    };
    let label = unit_label(use_metric);

    if converted >= WHOLE_VOLUME_THRESHOLD {
        return format!("{} {}", group_thousands(round_to(converted, 0)), label);
    }

    format!("{} {}", format_number(round_to(converted, 1)), label)
}

/// Shortest decimal text for a number, without a trailing ".0"
///
/// Magnitudes below 1e-6 or at least 1e21 use exponent form ("1e-7",
/// "1.5e+21"), matching JS `String(n)`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude < 1e-6 || magnitude >= 1e21 {
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        };
    }

    value.to_string()
}

/// Format a whole number with comma thousands separators, e.g. "12,345"
pub fn group_thousands(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0.0 && digits != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(80.0, true), "80.0 kg");
        assert_eq!(format_weight(61.235, false), "135.0 lbs");
        assert_eq!(format_weight(61.25, true), "61.3 kg");
        assert_eq!(format_weight(20.0, false), "44.1 lbs");
    }

    #[test]
    fn test_display_weight_empty() {
        assert_eq!(display_weight_default(0.0, true), "-");
        assert_eq!(display_weight_default(f64::NAN, false), "-");
    }

    #[test]
    fn test_display_weight() {
        assert_eq!(display_weight_default(100.0, true), "100 kg");
        assert_eq!(display_weight_default(61.235, true), "61.2 kg");
        assert_eq!(display_weight_default(61.235, false), "135 lbs");
        assert_eq!(display_weight_default(20.0, false), "44.1 lbs");
    }

    #[test]
    fn test_display_weight_options() {
        assert_eq!(display_weight(61.235, true, false, 1), "61.2");
        assert_eq!(display_weight(61.235, true, true, 2), "61.24 kg");
        assert_eq!(display_weight(61.235, true, false, 2), "61.24");
        assert_eq!(display_weight(61.235, true, true, 0), "61 kg");
        assert_eq!(display_weight(-0.01, true, true, 1), "0 kg");
    }

    #[test]
    fn test_display_volume_thousands() {
        assert_eq!(display_volume(1500.0, true, false), "1,500 kg");
        assert_eq!(display_volume(1000.0, true, false), "1,000 kg");
        assert_eq!(display_volume(1234567.8, true, false), "1,234,568 kg");
    }

    #[test]
    fn test_display_volume_converts_without_snapping() {
        // 1000 kg = 2204.62 lbs, rounded to a whole number
        assert_eq!(display_volume(1000.0, false, false), "2,205 lbs");
        // 100 kg would snap to 220 as a single weight, but not as volume
        assert_eq!(display_volume(100.0, false, false), "220.5 lbs");
    }

    #[test]
    fn test_display_volume_already_converted() {
        assert_eq!(display_volume(2204.62, false, true), "2,205 lbs");
        assert_eq!(display_volume(450.0, false, true), "450 lbs");
    }

    #[test]
    fn test_display_volume_small_and_empty() {
        assert_eq!(display_volume(612.35, true, false), "612.4 kg");
        assert_eq!(display_volume(0.0, true, false), "-");
        assert_eq!(display_volume(f64::NAN, false, true), "-");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(-12345.0), "-12,345");
        assert_eq!(group_thousands(100000.0), "100,000");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(135.0), "135");
        assert_eq!(format_number(61.2), "61.2");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_format_number_exponent_form() {
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e21), "1.5e+21");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(display_weight(1e-7, true, true, 10), "1e-7 kg");
    }

    #[test]
    fn test_to_fixed_one_uses_exact_value() {
        // Stored just below the .x5 boundary: rounds down
        assert_eq!(to_fixed_one(0.15), "0.1");
        assert_eq!(to_fixed_one(1.45), "1.4");
        assert_eq!(to_fixed_one(0.35), "0.3");
        // Exact ties round away from zero
        assert_eq!(to_fixed_one(61.25), "61.3");
        assert_eq!(to_fixed_one(0.25), "0.3");
        assert_eq!(to_fixed_one(-0.25), "-0.3");
        assert_eq!(to_fixed_one(2.0), "2.0");
        assert_eq!(to_fixed_one(-0.0), "0.0");
        assert_eq!(format_weight(0.15, true), "0.1 kg");
    }
}

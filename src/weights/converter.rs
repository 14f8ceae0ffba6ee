//! Weight conversion functions
//!
//! Converts between kilograms (storage) and pounds (display), snapping
//! converted pound values back onto weights a lifter would actually load.

use super::units::{
    COMMON_LBS_WEIGHTS, DEFAULT_SNAP_TOLERANCE, DISPLAY_DECIMALS, KG_TO_LBS,
    PLATE_INCREMENT_LBS, STORAGE_DECIMALS,
};

/// Round to `decimals` places, half away from zero.
///
/// The shift happens on the decimal text of `value` rather than on
/// `value * 10^decimals`, so `round_to(1.005, 2)` gives 1.01 instead of
/// falling victim to 1.005 being stored as 1.00499999...
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let shifted = match format!("{}e{}", value, decimals).parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        // More decimals than f64 can hold: nothing to round
        _ => return value,
    };

    let rounded = shifted.round();
    format!("{}e-{}", rounded, decimals)
        .parse::<f64>()
        .unwrap_or_else(|_| rounded / 10f64.powi(decimals as i32))
}

/// Snap a pound value onto a common gym weight.
///
/// Order of preference:
/// 1. the first entry of `COMMON_LBS_WEIGHTS` within `tolerance` (ascending scan,
///    not necessarily the closest entry)
/// 2. the nearest 2.5 lb increment, if within `tolerance`
/// 3. `lbs` rounded to one decimal
pub fn snap_to_common_weight(lbs: f64, tolerance: f64) -> f64 {
    if let Some(common) = COMMON_LBS_WEIGHTS
        .iter()
        .copied()
        .find(|common| (lbs - common).abs() <= tolerance)
    {
        return common;
    }

    let nearest_increment = (lbs / PLATE_INCREMENT_LBS).round() * PLATE_INCREMENT_LBS;
    if (lbs - nearest_increment).abs() <= tolerance {
        return nearest_increment;
    }

    tracing::debug!("No common weight within {} lbs of {}, keeping raw value", tolerance, lbs);
    round_to(lbs, 1)
}

/// `snap_to_common_weight` with the default 0.5 lb tolerance
pub fn snap_to_common_weight_default(lbs: f64) -> f64 {
    snap_to_common_weight(lbs, DEFAULT_SNAP_TOLERANCE)
}

/// Closest entry of `COMMON_LBS_WEIGHTS` within `tolerance`, if any.
///
/// Unlike snapping, this compares every candidate. Ties go to the lighter weight.
pub fn closest_common_weight(lbs: f64, tolerance: f64) -> Option<f64> {
    COMMON_LBS_WEIGHTS
        .iter()
        .copied()
        .filter(|common| (lbs - common).abs() <= tolerance)
        .fold(None, |best: Option<f64>, common| match best {
            Some(b) if (lbs - b).abs() <= (lbs - common).abs() => Some(b),
            _ => Some(common),
        })
}

/// Convert kilograms to pounds
///
/// Snap for single weights shown to the user. Pass `snap = false` for
/// anything that gets multiplied or summed (volume, totals).
pub fn kg_to_lbs(kg: f64, snap: bool) -> f64 {
    let raw_lbs = kg * KG_TO_LBS;
    if snap {
        snap_to_common_weight_default(raw_lbs)
    } else {
        round_to(raw_lbs, DISPLAY_DECIMALS)
    }
}

/// Convert pounds to kilograms for storage (4 decimal places)
pub fn lbs_to_kg(lbs: f64) -> f64 {
    round_to(lbs / KG_TO_LBS, STORAGE_DECIMALS)
}

/// True for the values the storage conversions treat as "no weight"
pub(crate) fn is_blank(weight: f64) -> bool {
    weight == 0.0 || weight.is_nan()
}

/// Convert user input to the storage unit (kg)
///
/// Zero and NaN become 0.
pub fn convert_to_storage_unit(weight: f64, is_in_metric: bool) -> f64 {
    if is_blank(weight) {
        return 0.0;
    }
    if is_in_metric {
        weight
    } else {
        lbs_to_kg(weight)
    }
}

/// Convert a stored kilogram value to the user's display unit
///
/// Zero and NaN become 0. Pounds are snapped.
pub fn convert_from_storage_unit(weight: f64, is_in_metric: bool) -> f64 {
    if is_blank(weight) {
        return 0.0;
    }
    if is_in_metric {
        weight
    } else {
        kg_to_lbs(weight, true)
    }
}

/// Volume (weight x reps) of a stored kilogram weight in the display unit.
///
/// Never snapped: volume is an aggregate, not something on the bar.
pub fn calculate_volume(weight: f64, reps: f64, use_metric: bool) -> f64 {
    let volume_in_kg = weight * reps;

    if use_metric {
        volume_in_kg
    } else {
        kg_to_lbs(volume_in_kg, false)
    }
}

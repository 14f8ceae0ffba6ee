//! Weight MCP Tools
//!
//! Conversion and display tools for logged lifts. Inputs are kilograms as
//! stored unless a tool says otherwise.

use serde::Serialize;

use crate::weights::{
    calculate_volume, closest_common_weight, convert_from_storage_unit, convert_to_storage_unit,
    display_volume, display_weight, display_weight_default, kg_to_lbs, lbs_to_kg,
    snap_to_common_weight, UnitError, UnitSystem, COMMON_LBS_WEIGHTS, KG_TO_LBS,
};

// ============================================================================
// Response Structs
// ============================================================================

/// Response for convert_weight
#[derive(Debug, Serialize)]
pub struct ConvertWeightResponse {
    pub input: f64,
    pub input_unit: String,
    /// Value to persist, in kilograms
    pub stored_kg: f64,
    pub display_metric: String,
    pub display_imperial: String,
    /// Pound value snapped with the configured tolerance
    pub snapped_lbs: f64,
    /// Closest common weight within the configured tolerance, if any
    pub closest_common_lbs: Option<f64>,
}

/// Response for display_weight
#[derive(Debug, Serialize)]
pub struct DisplayWeightResponse {
    pub weight_kg: f64,
    pub unit: String,
    pub converted: f64,
    pub display: String,
}

/// Response for display_volume
#[derive(Debug, Serialize)]
pub struct DisplayVolumeResponse {
    pub volume: f64,
    pub unit: String,
    pub is_already_converted: bool,
    pub display: String,
}

/// Response for set_volume
#[derive(Debug, Serialize)]
pub struct SetVolumeResponse {
    pub weight_kg: f64,
    pub reps: f64,
    pub unit: String,
    pub volume: f64,
    pub display: String,
}

/// One set of a workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetInput {
    pub weight_kg: f64,
    pub reps: f64,
}

/// Per-set line of workout_volume
#[derive(Debug, Serialize)]
pub struct SetVolume {
    pub set_number: usize,
    pub weight: String,
    pub reps: f64,
    pub volume: f64,
}

/// Response for workout_volume
#[derive(Debug, Serialize)]
pub struct WorkoutVolumeResponse {
    pub unit: String,
    pub sets: Vec<SetVolume>,
    pub total_volume: f64,
    pub total_display: String,
}

/// Round-trip result for a single common weight
#[derive(Debug, Serialize)]
pub struct RoundTripEntry {
    pub lbs: f64,
    pub stored_kg: f64,
    pub recovered_lbs: f64,
    pub recovered_with_tolerance: f64,
    pub drifted: bool,
}

/// Response for plate_round_trip
#[derive(Debug, Serialize)]
pub struct RoundTripResponse {
    pub tolerance: f64,
    pub total: usize,
    pub drifted: usize,
    pub entries: Vec<RoundTripEntry>,
}

// ============================================================================
// Validation
// ============================================================================

/// Weights may be zero or NaN (shown as "-"), but not infinite
fn check_weight(field: &'static str, value: f64) -> Result<f64, UnitError> {
    if value.is_infinite() {
        return Err(UnitError::NotFinite { field, value });
    }
    Ok(value)
}

fn check_reps(reps: f64) -> Result<f64, UnitError> {
    if !reps.is_finite() {
        return Err(UnitError::NotFinite { field: "reps", value: reps });
    }
    if reps < 0.0 {
        return Err(UnitError::Negative { field: "reps", value: reps });
    }
    Ok(reps)
}

fn rejected(e: UnitError) -> String {
    tracing::warn!("Rejected tool input: {}", e);
    e.to_string()
}

// ============================================================================
// Tool Functions
// ============================================================================

/// Convert a weight entered by the user into the stored kilogram value and
/// both display forms
pub fn convert_weight(
    value: f64,
    from: UnitSystem,
    tolerance: f64,
) -> Result<ConvertWeightResponse, String> {
    let value = check_weight("weight", value).map_err(rejected)?;
    let stored_kg = convert_to_storage_unit(value, from.is_metric());
    let raw_lbs = stored_kg * KG_TO_LBS;

    Ok(ConvertWeightResponse {
        input: value,
        input_unit: from.label().to_string(),
        stored_kg,
        display_metric: display_weight_default(stored_kg, true),
        display_imperial: display_weight_default(stored_kg, false),
        snapped_lbs: snap_to_common_weight(raw_lbs, tolerance),
        closest_common_lbs: closest_common_weight(raw_lbs, tolerance),
    })
}

/// Display a stored weight in the requested unit
pub fn display_stored_weight(
    weight_kg: f64,
    units: UnitSystem,
    include_unit: bool,
    precision: u32,
) -> Result<DisplayWeightResponse, String> {
    let weight_kg = check_weight("weight_kg", weight_kg).map_err(rejected)?;

    Ok(DisplayWeightResponse {
        weight_kg,
        unit: units.label().to_string(),
        converted: convert_from_storage_unit(weight_kg, units.is_metric()),
        display: display_weight(weight_kg, units.is_metric(), include_unit, precision),
    })
}

/// Format a volume for display
pub fn display_volume_value(
    volume: f64,
    units: UnitSystem,
    is_already_converted: bool,
) -> Result<DisplayVolumeResponse, String> {
    let volume = check_weight("volume", volume).map_err(rejected)?;

    Ok(DisplayVolumeResponse {
        volume,
        unit: units.label().to_string(),
        is_already_converted,
        display: display_volume(volume, units.is_metric(), is_already_converted),
    })
}

/// Volume of a single set
pub fn set_volume(weight_kg: f64, reps: f64, units: UnitSystem) -> Result<SetVolumeResponse, String> {
    let weight_kg = check_weight("weight_kg", weight_kg).map_err(rejected)?;
    let reps = check_reps(reps).map_err(rejected)?;

    let volume = calculate_volume(weight_kg, reps, units.is_metric());

    Ok(SetVolumeResponse {
        weight_kg,
        reps,
        unit: units.label().to_string(),
        volume,
        display: display_volume(volume, units.is_metric(), true),
    })
}

/// Volume of every set in a workout plus the total.
///
/// The total is summed in kilograms and converted once, so per-set
/// rounding does not accumulate.
pub fn workout_volume(sets: &[SetInput], units: UnitSystem) -> Result<WorkoutVolumeResponse, String> {
    let mut lines = Vec::with_capacity(sets.len());
    let mut total_kg = 0.0;

    for (i, set) in sets.iter().enumerate() {
        let weight_kg = check_weight("weight_kg", set.weight_kg).map_err(rejected)?;
        let reps = check_reps(set.reps).map_err(rejected)?;

        // Blank weights count as nothing lifted
        if !weight_kg.is_nan() {
            total_kg += weight_kg * reps;
        }

        lines.push(SetVolume {
            set_number: i + 1,
            weight: display_weight_default(weight_kg, units.is_metric()),
            reps,
            volume: calculate_volume(weight_kg, reps, units.is_metric()),
        });
    }

    let total_volume = if units.is_metric() {
        total_kg
    } else {
        kg_to_lbs(total_kg, false)
    };

    Ok(WorkoutVolumeResponse {
        unit: units.label().to_string(),
        sets: lines,
        total_volume,
        total_display: display_volume(total_kg, units.is_metric(), false),
    })
}

/// Run every common weight through lbs -> kg -> lbs and report drift.
///
/// Drift is judged with `tolerance`; `recovered_lbs` shows the default
/// display snapping for comparison.
pub fn plate_round_trip(tolerance: f64) -> RoundTripResponse {
    let entries: Vec<RoundTripEntry> = COMMON_LBS_WEIGHTS
        .iter()
        .map(|&lbs| {
            let stored_kg = lbs_to_kg(lbs);
            let recovered_with_tolerance = snap_to_common_weight(stored_kg * KG_TO_LBS, tolerance);
            RoundTripEntry {
                lbs,
                stored_kg,
                recovered_lbs: kg_to_lbs(stored_kg, true),
                recovered_with_tolerance,
                drifted: recovered_with_tolerance != lbs,
            }
        })
        .collect();

    let drifted = entries.iter().filter(|e| e.drifted).count();
    if drifted > 0 {
        tracing::warn!("{} common weights did not survive a kg round trip", drifted);
    }

    RoundTripResponse {
        tolerance,
        total: entries.len(),
        drifted,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_weight_from_lbs() {
        let result = convert_weight(135.0, UnitSystem::Imperial, 0.5).unwrap();
        assert_eq!(result.stored_kg, 61.235);
        assert_eq!(result.input_unit, "lbs");
        assert_eq!(result.display_imperial, "135 lbs");
        assert_eq!(result.display_metric, "61.2 kg");
        assert_eq!(result.snapped_lbs, 135.0);
        assert_eq!(result.closest_common_lbs, Some(135.0));
    }

    #[test]
    fn test_convert_weight_from_kg() {
        let result = convert_weight(100.0, UnitSystem::Metric, 0.5).unwrap();
        assert_eq!(result.stored_kg, 100.0);
        assert_eq!(result.display_metric, "100 kg");
        assert_eq!(result.display_imperial, "220 lbs");
    }

    #[test]
    fn test_convert_weight_blank_and_infinite() {
        let result = convert_weight(f64::NAN, UnitSystem::Imperial, 0.5).unwrap();
        assert_eq!(result.stored_kg, 0.0);
        assert_eq!(result.display_imperial, "-");

        assert!(convert_weight(f64::INFINITY, UnitSystem::Metric, 0.5).is_err());
    }

    #[test]
    fn test_display_stored_weight() {
        let result = display_stored_weight(61.235, UnitSystem::Imperial, true, 1).unwrap();
        assert_eq!(result.converted, 135.0);
        assert_eq!(result.display, "135 lbs");

        let result = display_stored_weight(61.235, UnitSystem::Metric, false, 2).unwrap();
        assert_eq!(result.display, "61.24");
    }

    #[test]
    fn test_display_volume_value() {
        let result = display_volume_value(1500.0, UnitSystem::Metric, false).unwrap();
        assert_eq!(result.display, "1,500 kg");
    }

    #[test]
    fn test_set_volume() {
        let result = set_volume(100.0, 10.0, UnitSystem::Metric).unwrap();
        assert_eq!(result.volume, 1000.0);
        assert_eq!(result.display, "1,000 kg");

        let result = set_volume(100.0, 10.0, UnitSystem::Imperial).unwrap();
        assert_eq!(result.volume, 2204.62);
        assert_eq!(result.display, "2,205 lbs");
    }

    #[test]
    fn test_set_volume_rejects_bad_reps() {
        assert!(set_volume(100.0, -1.0, UnitSystem::Metric).is_err());
        assert!(set_volume(100.0, f64::NAN, UnitSystem::Metric).is_err());
    }

    #[test]
    fn test_workout_volume() {
        let sets = [
            SetInput { weight_kg: 100.0, reps: 5.0 },
            SetInput { weight_kg: 100.0, reps: 5.0 },
            SetInput { weight_kg: f64::NAN, reps: 5.0 },
        ];
        let result = workout_volume(&sets, UnitSystem::Metric).unwrap();
        assert_eq!(result.sets.len(), 3);
        assert_eq!(result.sets[0].set_number, 1);
        assert_eq!(result.sets[0].weight, "100 kg");
        assert_eq!(result.sets[2].weight, "-");
        assert_eq!(result.total_volume, 1000.0);
        assert_eq!(result.total_display, "1,000 kg");

        let result = workout_volume(&sets, UnitSystem::Imperial).unwrap();
        assert_eq!(result.total_volume, 2204.62);
        assert_eq!(result.total_display, "2,205 lbs");
    }

    #[test]
    fn test_workout_volume_empty() {
        let result = workout_volume(&[], UnitSystem::Metric).unwrap();
        assert!(result.sets.is_empty());
        assert_eq!(result.total_volume, 0.0);
        assert_eq!(result.total_display, "-");
    }

    #[test]
    fn test_plate_round_trip_has_no_drift() {
        let result = plate_round_trip(0.5);
        assert_eq!(result.total, COMMON_LBS_WEIGHTS.len());
        assert_eq!(result.drifted, 0);
        assert!(result.entries.iter().all(|e| e.recovered_with_tolerance == e.lbs));
    }

    #[test]
    fn test_plate_round_trip_uses_given_tolerance() {
        // With 5.1 lbs of slack, 9.9999 lbs reaches the 5 lb entry first
        let result = plate_round_trip(5.1);
        assert!(result.drifted > 0);

        let ten = result.entries.iter().find(|e| e.lbs == 10.0).unwrap();
        assert_eq!(ten.recovered_lbs, 10.0);
        assert_eq!(ten.recovered_with_tolerance, 5.0);
        assert!(ten.drifted);
    }
}

//! Unit types and conversion constants
//!
//! Weights are always stored in kilograms. Pounds exist only for display and
//! for accepting user input from imperial lifters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when interpreting unit input at the tool boundary
#[derive(Debug, Error, PartialEq)]
pub enum UnitError {
    #[error("Invalid unit system: '{0}'. Valid values: metric (kg), imperial (lbs)")]
    InvalidUnitSystem(String),

    #[error("Invalid {field}: {value} (must be a finite number)")]
    NotFinite { field: &'static str, value: f64 },

    #[error("Invalid {field}: {value} (must not be negative)")]
    Negative { field: &'static str, value: f64 },
}

/// Display unit system selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms, the storage unit
    Metric,
    /// Pounds
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Parse from string, accepting unit abbreviations as well as system names
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "kg" | "kgs" | "kilogram" | "kilograms" => Some(UnitSystem::Metric),
            "imperial" | "lb" | "lbs" | "pound" | "pounds" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }

    /// Like `from_str`, but reports the rejected input
    pub fn parse(s: &str) -> Result<Self, UnitError> {
        Self::from_str(s).ok_or_else(|| UnitError::InvalidUnitSystem(s.to_string()))
    }

    /// Unit label appended to formatted values
    pub fn label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }

    pub fn is_metric(&self) -> bool {
        matches!(self, UnitSystem::Metric)
    }

    pub fn from_metric_flag(use_metric: bool) -> Self {
        if use_metric {
            UnitSystem::Metric
        } else {
            UnitSystem::Imperial
        }
    }
}

/// Label for a boolean unit flag
pub fn unit_label(use_metric: bool) -> &'static str {
    UnitSystem::from_metric_flag(use_metric).label()
}

// ============================================================================
// Conversion Constants
// ============================================================================

/// Pounds per kilogram
pub const KG_TO_LBS: f64 = 2.20462262185;

/// Smallest plate increment found in most gyms, in pounds
pub const PLATE_INCREMENT_LBS: f64 = 2.5;

/// How far (in lbs) a converted value may drift and still snap
pub const DEFAULT_SNAP_TOLERANCE: f64 = 0.5;

/// Decimal places for display conversions
pub const DISPLAY_DECIMALS: u32 = 2;

/// Decimal places for values written to storage
pub const STORAGE_DECIMALS: u32 = 4;

/// Decimal places used by `display_weight` when the caller has no preference
pub const DEFAULT_DISPLAY_PRECISION: u32 = 1;

/// Volumes at or above this magnitude are shown as whole numbers
pub const WHOLE_VOLUME_THRESHOLD: f64 = 1000.0;

/// Placeholder shown for missing or zero values
pub const EMPTY_DISPLAY: &str = "-";

// ============================================================================
// Common Weights
// ============================================================================

/// Plate and dumbbell totals lifters actually enter, in pounds.
///
/// Ascending with no duplicates. Snapping takes the first entry within
/// tolerance, so order matters.
pub const COMMON_LBS_WEIGHTS: &[f64] = &[
    2.5, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0,
    75.0, 80.0, 85.0, 90.0, 95.0, 100.0, 105.0, 110.0, 115.0, 120.0, 125.0, 130.0, 135.0,
    140.0, 145.0, 150.0, 155.0, 160.0, 165.0, 170.0, 175.0, 180.0, 185.0, 190.0, 195.0,
    200.0, 205.0, 210.0, 215.0, 220.0, 225.0, 230.0, 235.0, 240.0, 245.0, 250.0, 255.0,
    260.0, 265.0, 270.0, 275.0, 280.0, 285.0, 290.0, 295.0, 300.0, 315.0, 335.0, 350.0,
    365.0, 385.0, 400.0, 405.0, 425.0, 450.0, 475.0, 495.0, 500.0, 515.0, 545.0, 585.0,
    600.0, 635.0, 675.0, 700.0, 725.0, 765.0, 800.0, 855.0, 900.0, 945.0, 1000.0,
];

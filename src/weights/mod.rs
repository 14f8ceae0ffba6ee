//! Weight units module
//!
//! Kilogram storage, pound display, plate snapping and volume formatting.

pub mod coerce;
pub mod converter;
pub mod display;
pub mod units;

pub use coerce::{parse_number, to_number};
pub use converter::{
    calculate_volume, closest_common_weight, convert_from_storage_unit, convert_to_storage_unit,
    kg_to_lbs, lbs_to_kg, round_to, snap_to_common_weight, snap_to_common_weight_default,
};
pub use display::{
    display_volume, display_weight, display_weight_default, format_number, format_weight,
    group_thousands, to_fixed_one,
};
pub use units::{
    unit_label, UnitError, UnitSystem, COMMON_LBS_WEIGHTS, DEFAULT_SNAP_TOLERANCE, KG_TO_LBS,
};

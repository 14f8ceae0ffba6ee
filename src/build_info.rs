//! Build information module
//!
//! Compile-time metadata plus the conversion table this binary was built with.

use serde::Serialize;

use crate::config::Config;
use crate::weights::{COMMON_LBS_WEIGHTS, KG_TO_LBS};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("LIFTLOG_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What a running server was built with. The conversion constant and
/// table size are included so stored kilograms can be traced to the
/// factor that produced them.
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_timestamp: &'static str,
    pub kg_to_lbs: f64,
    pub common_weight_count: usize,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: VERSION,
            build_timestamp: BUILD_TIMESTAMP,
            kg_to_lbs: KG_TO_LBS,
            common_weight_count: COMMON_LBS_WEIGHTS.len(),
        }
    }
}

/// Print the startup banner, with the active unit settings, to stderr
pub fn print_startup_banner(config: &Config) {
    let info = BuildInfo::current();
    eprintln!("===============================================");
    eprintln!("  Liftlog {} (built {})", info.version, info.build_timestamp);
    eprintln!(
        "  Default units: {} | snap tolerance: {} lbs",
        config.default_units.label(),
        config.snap_tolerance
    );
    eprintln!(
        "  1 kg = {} lbs | {} common weights",
        info.kg_to_lbs, info.common_weight_count
    );
    eprintln!("===============================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_carries_conversion_table() {
        let info = BuildInfo::current();
        assert_eq!(info.version, VERSION);
        assert_eq!(info.kg_to_lbs, 2.20462262185);
        assert_eq!(info.common_weight_count, COMMON_LBS_WEIGHTS.len());
        assert!(!info.build_timestamp.is_empty());
    }
}

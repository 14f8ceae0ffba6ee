//! Runtime configuration
//!
//! Read once from the environment at startup.

use thiserror::Error;

use crate::weights::{UnitSystem, DEFAULT_SNAP_TOLERANCE};

/// Environment variable selecting the unit system used when a tool call omits one
pub const DEFAULT_UNITS_VAR: &str = "LIFTLOG_DEFAULT_UNITS";

/// Environment variable overriding the snap tolerance (lbs) used by the tools
pub const SNAP_TOLERANCE_VAR: &str = "LIFTLOG_SNAP_TOLERANCE";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var}: invalid unit system '{value}' (expected metric or imperial)")]
    InvalidUnits { var: &'static str, value: String },

    #[error("{var}: invalid tolerance '{value}' (expected a positive number of pounds)")]
    InvalidTolerance { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub default_units: UnitSystem,
    pub snap_tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_units: UnitSystem::Imperial,
            snap_tolerance: DEFAULT_SNAP_TOLERANCE,
        }
    }
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(DEFAULT_UNITS_VAR) {
            config.default_units =
                UnitSystem::from_str(&value).ok_or_else(|| ConfigError::InvalidUnits {
                    var: DEFAULT_UNITS_VAR,
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup(SNAP_TOLERANCE_VAR) {
            config.snap_tolerance = match value.trim().parse::<f64>() {
                Ok(t) if t.is_finite() && t > 0.0 => t,
                _ => {
                    return Err(ConfigError::InvalidTolerance {
                        var: SNAP_TOLERANCE_VAR,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }

    /// Resolve an optional unit string from a tool call against the default
    pub fn resolve_units(&self, units: Option<&str>) -> Result<UnitSystem, String> {
        match units {
            None => Ok(self.default_units),
            Some(s) => UnitSystem::parse(s).map_err(|e| e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_units, UnitSystem::Imperial);
        assert_eq!(config.snap_tolerance, 0.5);
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (DEFAULT_UNITS_VAR, "kg"),
            (SNAP_TOLERANCE_VAR, "1.25"),
        ]))
        .unwrap();
        assert_eq!(config.default_units, UnitSystem::Metric);
        assert_eq!(config.snap_tolerance, 1.25);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Config::from_lookup(lookup_from(&[(DEFAULT_UNITS_VAR, "stone")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUnits { .. }));

        for bad in ["0", "-1", "abc", "inf"] {
            let err =
                Config::from_lookup(lookup_from(&[(SNAP_TOLERANCE_VAR, bad)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTolerance { .. }), "{}", bad);
        }
    }

    #[test]
    fn test_resolve_units() {
        let config = Config::default();
        assert_eq!(config.resolve_units(None), Ok(UnitSystem::Imperial));
        assert_eq!(config.resolve_units(Some("metric")), Ok(UnitSystem::Metric));
        assert!(config.resolve_units(Some("stone")).is_err());
    }
}

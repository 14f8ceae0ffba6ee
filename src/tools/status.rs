//! Liftlog Status Tool
//!
//! Provides runtime status information about the Liftlog service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::Config;

/// Unit handling instructions for AI assistants
pub const UNITS_INSTRUCTIONS: &str = r#"
# Liftlog Weight Unit Instructions

## Storage

Every weight is stored in **kilograms**, rounded to 4 decimal places.
When a lifter enters pounds, call `convert_weight` with `units: "imperial"`
and persist the returned `stored_kg`. Never store pounds.

## Display

- Single weights (a set, a plate load, a PR): `display_weight`.
  Pound values are snapped to common gym weights, so 61.235 kg shows as
  "135 lbs" rather than "135.0001 lbs".
- Volumes (weight x reps, session totals, chart values): `display_volume`,
  `set_volume` or `workout_volume`. Volumes are **never** snapped.
  Values of 1000 and above are shown as whole numbers with separators
  ("12,450 lbs").

## Missing Values

Zero, empty and non-numeric weights display as "-" and store as 0.
There is no way to tell "no data" from "zero" through these tools.

## Units Parameter

Accepts `metric` / `kg` or `imperial` / `lbs`. When omitted, the server's
configured default is used (see `liftlog_status`).
"#;

/// Runtime status of the Liftlog service
#[derive(Debug, Clone, Serialize)]
pub struct LiftlogStatus {
    /// Build information
    pub version: &'static str,
    pub build_timestamp: &'static str,

    /// Active configuration
    pub default_units: &'static str,
    pub snap_tolerance: f64,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: String,
    config: Config,
}

impl StatusTracker {
    pub fn new(config: Config) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            config,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> LiftlogStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        LiftlogStatus {
            version: build_info.version,
            build_timestamp: build_info.build_timestamp,
            default_units: self.config.default_units.as_str(),
            snap_tolerance: self.config.snap_tolerance,
            started_at: self.started_at.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::UnitSystem;

    #[test]
    fn test_status_reports_config() {
        let config = Config {
            default_units: UnitSystem::Metric,
            snap_tolerance: 1.0,
        };
        let status = StatusTracker::new(config).get_status();
        assert_eq!(status.default_units, "metric");
        assert_eq!(status.snap_tolerance, 1.0);
        assert_eq!(status.process_id, std::process::id());
        assert!(status.started_at.ends_with('Z'));
    }
}

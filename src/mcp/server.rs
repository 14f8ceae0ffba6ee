//! Liftlog MCP Server Implementation
//!
//! Implements the MCP server with all Liftlog tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::tools::status::StatusTracker;
use crate::tools::weights::{self, SetInput};
use crate::weights::{to_number, UnitSystem};

/// Liftlog MCP Service
#[derive(Clone)]
pub struct LiftlogService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Config,
    tool_router: ToolRouter<LiftlogService>,
}

impl LiftlogService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config))),
            config,
            tool_router: Self::tool_router(),
        }
    }

    fn units(&self, units: Option<&str>) -> Result<UnitSystem, McpError> {
        self.config
            .resolve_units(units)
            .map_err(|e| McpError::invalid_params(e, None))
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

fn default_true() -> bool { true }
fn default_precision() -> u32 { 1 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertWeightParams {
    /// Weight as entered by the user (number or numeric string)
    #[serde(default)]
    pub weight: Value,
    /// Unit the weight was entered in: "metric"/"kg" or "imperial"/"lbs"
    pub units: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DisplayWeightParams {
    /// Stored weight in kilograms (number or numeric string)
    #[serde(default)]
    pub weight_kg: Value,
    /// Display unit: "metric"/"kg" or "imperial"/"lbs"
    pub units: Option<String>,
    #[serde(default = "default_true")]
    pub include_unit: bool,
    /// Decimal places (default 1)
    #[serde(default = "default_precision")]
    pub precision: u32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DisplayVolumeParams {
    /// Volume in kilograms, or in the display unit if is_already_converted
    #[serde(default)]
    pub volume: Value,
    pub units: Option<String>,
    #[serde(default)]
    pub is_already_converted: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetVolumeParams {
    /// Stored weight in kilograms
    #[serde(default)]
    pub weight_kg: Value,
    #[serde(default)]
    pub reps: Value,
    pub units: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetParams {
    #[serde(default)]
    pub weight_kg: Value,
    #[serde(default)]
    pub reps: Value,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WorkoutVolumeParams {
    pub sets: Vec<SetParams>,
    pub units: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl LiftlogService {
    // --- Status ---

    #[tool(description = "Get the current status of the Liftlog service including build info, unit configuration, and process information")]
    async fn liftlog_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status())
    }

    #[tool(description = "Get instructions for storing and displaying weights. Call this before logging lifts or when unsure which unit tool to use.")]
    fn units_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::UNITS_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(UNITS_INSTRUCTIONS)]))
    }

    // --- Weights ---

    #[tool(description = "Convert a weight entered by the user into the kilogram value to store, with metric and imperial display strings")]
    fn convert_weight(&self, Parameters(p): Parameters<ConvertWeightParams>) -> Result<CallToolResult, McpError> {
        let units = self.units(p.units.as_deref())?;
        let result = weights::convert_weight(to_number(&p.weight), units, self.config.snap_tolerance)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Display a stored (kilogram) weight in kg or lbs. Pound values are snapped to common gym weights.")]
    fn display_weight(&self, Parameters(p): Parameters<DisplayWeightParams>) -> Result<CallToolResult, McpError> {
        let units = self.units(p.units.as_deref())?;
        let result = weights::display_stored_weight(to_number(&p.weight_kg), units, p.include_unit, p.precision)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Display a training volume in kg or lbs. Volumes are never snapped; values of 1000+ are shown as whole numbers with separators.")]
    fn display_volume(&self, Parameters(p): Parameters<DisplayVolumeParams>) -> Result<CallToolResult, McpError> {
        let units = self.units(p.units.as_deref())?;
        let result = weights::display_volume_value(to_number(&p.volume), units, p.is_already_converted)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Calculate the volume (weight x reps) of one set from a stored kilogram weight")]
    fn set_volume(&self, Parameters(p): Parameters<SetVolumeParams>) -> Result<CallToolResult, McpError> {
        let units = self.units(p.units.as_deref())?;
        let result = weights::set_volume(to_number(&p.weight_kg), to_number(&p.reps), units)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Calculate per-set and total volume for a workout. Weights are stored kilograms.")]
    fn workout_volume(&self, Parameters(p): Parameters<WorkoutVolumeParams>) -> Result<CallToolResult, McpError> {
        let units = self.units(p.units.as_deref())?;
        let sets: Vec<SetInput> = p
            .sets
            .iter()
            .map(|s| SetInput {
                weight_kg: to_number(&s.weight_kg),
                reps: to_number(&s.reps),
            })
            .collect();
        let result = weights::workout_volume(&sets, units)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Check that every common gym weight in lbs survives a round trip through kilogram storage")]
    fn plate_round_trip(&self) -> Result<CallToolResult, McpError> {
        json_result(&weights::plate_round_trip(self.config.snap_tolerance))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for LiftlogService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "liftlog".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Liftlog".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Liftlog - weight units for strength training logs. \
                 IMPORTANT: Call units_instructions before logging lifts. \
                 Weights are stored in kilograms: convert_weight turns user input into stored_kg. \
                 Display: display_weight (single weights, snapped lbs), display_volume (never snapped). \
                 Volume: set_volume, workout_volume. \
                 Diagnostics: liftlog_status, plate_round_trip."
                    .into(),
            ),
        }
    }
}

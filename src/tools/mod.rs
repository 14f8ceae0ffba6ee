//! Liftlog Tools module
//!
//! MCP tool implementations for weight conversion and display.

pub mod status;
pub mod weights;

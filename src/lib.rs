//! Liftlog Library
//!
//! Weight unit conversion and display for strength training logs.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod tools;
pub mod weights;

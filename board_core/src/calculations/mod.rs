//! # Board Calculations
//!
//! This module contains the analysis operations. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, material) -> Result<*Result, CalcError>` - Pure function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`board`] - Simply-supported board load & deflection analysis
//! - [`curve`] - Load-deflection curve sampling for plotting

pub mod board;
pub mod curve;

// Re-export commonly used types
pub use board::{calculate, BoardInput, BoardResult, LoadType};
pub use curve::{sample_curve, CurveSample, DEFAULT_SAMPLE_COUNT};

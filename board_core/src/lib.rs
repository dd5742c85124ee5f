//! # board_core - Board Load & Deflection Analysis Engine
//!
//! `board_core` answers three questions about a wooden board under load:
//! is it safe, how much does it bend, and how much can it carry. All
//! inputs and outputs are JSON-serializable, making the crate easy to
//! drive from a UI, a CLI, or an AI assistant.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Well-Documented**: Every type and function has examples
//!
//! ## Quick Start
//!
//! ```rust
//! use board_core::calculations::board::{calculate, BoardInput, LoadType};
//! use board_core::calculations::curve::{sample_curve, DEFAULT_SAMPLE_COUNT};
//! use board_core::materials::SAMANEA;
//!
//! let input = BoardInput {
//!     label: "Tabletop".to_string(),
//!     length_cm: 120.0,
//!     width_cm: 60.0,
//!     thickness_cm: 3.0,
//!     load_kg: 80.0,
//!     load_type: LoadType::Center,
//! };
//!
//! let result = calculate(&input, &SAMANEA).unwrap();
//! let curve = sample_curve(&input, &SAMANEA, &result, DEFAULT_SAMPLE_COUNT).unwrap();
//!
//! println!("Safe: {}, curve points: {}", result.is_safe, curve.len());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Board analysis and curve sampling
//! - [`materials`] - Wood species property records
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, sample_curve, BoardInput, BoardResult, CurveSample, LoadType};
pub use errors::{CalcError, CalcResult};
pub use materials::{WoodProperties, SAMANEA};

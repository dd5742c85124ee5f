//! # Board Load & Deflection Calculation
//!
//! Analyzes a wooden board as a simply-supported rectangular beam under
//! a center point load or a uniformly distributed load.
//!
//! ## Assumptions
//!
//! - Simply-supported (pin-roller) boundary conditions
//! - Rectangular cross-section, bending about the thickness axis
//! - Small-deflection linear elastic theory
//! - Single span (no cantilever or multi-span configurations)
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use board_core::calculations::board::{calculate, BoardInput, LoadType};
//! use board_core::materials::SAMANEA;
//!
//! let input = BoardInput {
//!     label: "Coffee table top".to_string(),
//!     length_cm: 120.0,
//!     width_cm: 60.0,
//!     thickness_cm: 3.0,
//!     load_kg: 80.0,
//!     load_type: LoadType::Center,
//! };
//!
//! let result = calculate(&input, &SAMANEA).unwrap();
//!
//! println!("Deflection: {:.2} mm", result.deflection_mm);
//! println!("Safety factor: {:.2}", result.safety_factor);
//! println!("Safe: {}", result.is_safe);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::WoodProperties;
use crate::units::{Centimeters, Kilograms, Meters, Millimeters, Newtons, Pascals};

/// Minimum safety factor for a board to be reported as safe.
///
/// Domain policy constant: a bare minimum for furniture.
pub const MIN_SAFETY_FACTOR: f64 = 1.5;

/// Target safety factor used when reverse-solving the recommended
/// maximum load.
pub const TARGET_SAFETY_FACTOR: f64 = 2.0;

/// Where the load sits on the board.
///
/// A closed two-variant choice so the formula branch is exhaustive and
/// compiler-checked. Both variants assume the same total load; they
/// differ only in load placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadType {
    /// Point load at midspan (worst case for a person sitting centered)
    Center,
    /// Uniform load over the full span (e.g., items spread across a shelf)
    Distributed,
}

impl LoadType {
    /// All load type variants for UI selection
    pub const ALL: [LoadType; 2] = [LoadType::Center, LoadType::Distributed];

    /// Short description of the placement assumption
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::Center => "Point load at midspan",
            LoadType::Distributed => "Uniform load over full span",
        }
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadType::Center => write!(f, "Center"),
            LoadType::Distributed => write!(f, "Distributed"),
        }
    }
}

/// Input parameters for a board analysis.
///
/// Geometry is entered in centimeters and the load in kilograms, the
/// units a workshop actually measures in; the engine converts to SI
/// internally.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Bench seat",
///   "length_cm": 120.0,
///   "width_cm": 60.0,
///   "thickness_cm": 3.0,
///   "load_kg": 80.0,
///   "load_type": "center"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardInput {
    /// User label for this board (e.g., "Bench seat", "Shelf B")
    pub label: String,

    /// Span between supports in centimeters
    pub length_cm: f64,

    /// Board width in centimeters
    pub width_cm: f64,

    /// Board thickness in centimeters (the bending direction)
    pub thickness_cm: f64,

    /// Total applied load in kilograms
    pub load_kg: f64,

    /// Load placement assumption
    pub load_type: LoadType,
}

impl BoardInput {
    /// Validate input parameters.
    ///
    /// Every geometry field must be a strictly positive finite number
    /// and the load a non-negative finite number. Validation runs
    /// before any computation; a failed input never partially computes.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("length_cm", self.length_cm),
            ("width_cm", self.width_cm),
            ("thickness_cm", self.thickness_cm),
        ] {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Dimension must be a finite number",
                ));
            }
            if value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Dimension must be positive",
                ));
            }
        }
        if !self.load_kg.is_finite() {
            return Err(CalcError::invalid_input(
                "load_kg",
                self.load_kg.to_string(),
                "Load must be a finite number",
            ));
        }
        if self.load_kg < 0.0 {
            return Err(CalcError::invalid_input(
                "load_kg",
                self.load_kg.to_string(),
                "Load must not be negative",
            ));
        }
        Ok(())
    }

    /// Span in meters
    pub fn span_m(&self) -> f64 {
        Meters::from(Centimeters(self.length_cm)).value()
    }

    /// Width in meters
    pub fn width_m(&self) -> f64 {
        Meters::from(Centimeters(self.width_cm)).value()
    }

    /// Thickness in meters
    pub fn thickness_m(&self) -> f64 {
        Meters::from(Centimeters(self.thickness_cm)).value()
    }

    /// Second moment of area I = w·t³/12 (m⁴)
    ///
    /// Rectangular cross-section with the load axis along the thickness.
    pub fn moment_of_inertia_m4(&self) -> f64 {
        self.width_m() * self.thickness_m().powi(3) / 12.0
    }

    /// Board volume (m³)
    pub fn volume_m3(&self) -> f64 {
        self.span_m() * self.width_m() * self.thickness_m()
    }

    /// Board self-weight from volume × density (kg)
    pub fn weight_kg(&self, material: &WoodProperties) -> f64 {
        self.volume_m3() * material.density_kg_m3
    }

    /// Midspan deflection under an arbitrary load, in millimeters.
    ///
    /// Uses the same formula branch as [`calculate`] so a deflection
    /// curve can be sampled at loads other than `self.load_kg`.
    /// Center: δ = F·L³/(48·E·I). Distributed: δ = 5·F·L³/(384·E·I).
    pub fn deflection_mm_under(&self, load_kg: f64, material: &WoodProperties) -> f64 {
        let force_n = Newtons::from(Kilograms(load_kg)).value();
        let span = self.span_m();
        let e_pa = Pascals::from(crate::units::Megapascals(material.moe_mpa)).value();
        let i = self.moment_of_inertia_m4();

        let deflection_m = match self.load_type {
            LoadType::Center => force_n * span.powi(3) / (48.0 * e_pa * i),
            LoadType::Distributed => 5.0 * force_n * span.powi(3) / (384.0 * e_pa * i),
        };
        Millimeters::from(Meters(deflection_m)).value()
    }
}

/// Results from a board analysis.
///
/// A result is derived wholesale from one `(BoardInput, WoodProperties)`
/// pair. It has no identity of its own; whenever an input changes the
/// caller recomputes and the previous result is superseded.
///
/// ## JSON Example
///
/// ```json
/// {
///   "deflection_mm": 2.46,
///   "bending_stress_mpa": 2.62,
///   "safety_factor": 22.94,
///   "is_safe": true,
///   "max_load_recommended_kg": 917.4,
///   "weight_kg": 11.45
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardResult {
    /// Vertical displacement at midspan under the given load (mm)
    pub deflection_mm: f64,

    /// Extreme-fiber bending stress (MPa)
    pub bending_stress_mpa: f64,

    /// Modulus of rupture / bending stress (dimensionless)
    ///
    /// At zero load the stress is zero and the ratio is reported as
    /// positive infinity, never NaN.
    pub safety_factor: f64,

    /// Whether the safety factor exceeds [`MIN_SAFETY_FACTOR`]
    pub is_safe: bool,

    /// Load that would produce a safety factor of exactly
    /// [`TARGET_SAFETY_FACTOR`] (kg)
    pub max_load_recommended_kg: f64,

    /// Self-weight of the board from volume × density (kg)
    pub weight_kg: f64,
}

/// Calculate board stresses, deflection, and recommended load.
///
/// This is a pure function: no side effects, deterministic, safe to
/// call concurrently, cheap enough to re-run on every keystroke of a
/// reactive UI.
///
/// # Arguments
///
/// * `input` - Board geometry, load, and load placement
/// * `material` - Wood species properties (density, MOE, MOR)
///
/// # Returns
///
/// * `Ok(BoardResult)` - Calculation results
/// * `Err(CalcError)` - Structured error if any input is invalid
///
/// # Example
///
/// ```rust
/// use board_core::calculations::board::{calculate, BoardInput, LoadType};
/// use board_core::materials::SAMANEA;
///
/// let input = BoardInput {
///     label: "Shelf".to_string(),
///     length_cm: 80.0,
///     width_cm: 25.0,
///     thickness_cm: 2.0,
///     load_kg: 30.0,
///     load_type: LoadType::Distributed,
/// };
///
/// let result = calculate(&input, &SAMANEA).expect("valid input");
/// assert!(result.bending_stress_mpa > 0.0);
/// ```
pub fn calculate(input: &BoardInput, material: &WoodProperties) -> CalcResult<BoardResult> {
    input.validate()?;
    material.validate()?;

    // SI conversions
    let span = input.span_m();
    let thickness = input.thickness_m();
    let force_n = Newtons::from(Kilograms(input.load_kg)).value();
    let mor_pa = Pascals::from(crate::units::Megapascals(material.mor_mpa)).value();

    let i = input.moment_of_inertia_m4();

    // Max bending moment for the chosen load placement
    let moment_nm = match input.load_type {
        LoadType::Center => force_n * span / 4.0,
        LoadType::Distributed => force_n * span / 8.0,
    };

    // Extreme-fiber bending stress: σ = M·y/I with y = t/2.
    // Near-zero thickness makes I tiny and the stress very large; that
    // is a legitimate (unsafe) answer, not an error.
    let fiber_y = thickness / 2.0;
    let stress_pa = moment_nm * fiber_y / i;

    // Zero load means zero stress; report an infinite safety factor
    // rather than dividing into NaN.
    let safety_factor = if stress_pa > 0.0 {
        mor_pa / stress_pa
    } else {
        f64::INFINITY
    };

    // Reverse solve the load that lands exactly on the target factor
    let target_stress_pa = mor_pa / TARGET_SAFETY_FACTOR;
    let target_moment_nm = target_stress_pa * i / fiber_y;
    let target_force_n = match input.load_type {
        LoadType::Center => target_moment_nm * 4.0 / span,
        LoadType::Distributed => target_moment_nm * 8.0 / span,
    };
    let max_load_recommended_kg = Kilograms::from(Newtons(target_force_n)).value();

    Ok(BoardResult {
        deflection_mm: input.deflection_mm_under(input.load_kg, material),
        bending_stress_mpa: crate::units::Megapascals::from(Pascals(stress_pa)).value(),
        safety_factor,
        is_safe: safety_factor > MIN_SAFETY_FACTOR,
        max_load_recommended_kg,
        weight_kg: input.weight_kg(material),
    })
}

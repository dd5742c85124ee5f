//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64
//! wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The engine uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! The engine accepts workshop-friendly units (centimeters, kilograms,
//! megapascals) and computes internally in base SI:
//! - Length: centimeters (cm), meters (m), millimeters (mm)
//! - Mass: kilograms (kg)
//! - Force: newtons (N), converted from mass via standard gravity
//! - Stress: pascals (Pa), megapascals (MPa)
//!
//! ## Example
//!
//! ```rust
//! use board_core::units::{Centimeters, Meters, Kilograms, Newtons};
//!
//! let span = Centimeters(120.0);
//! let span_m: Meters = span.into();
//! assert_eq!(span_m.0, 1.2);
//!
//! let load = Kilograms(80.0);
//! let force: Newtons = load.into();
//! assert!((force.0 - 784.8).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Standard gravity used to convert a mass in kilograms to a force in
/// newtons (m/s²).
pub const GRAVITY_M_PER_S2: f64 = 9.81;

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Mass and Force Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

impl From<Kilograms> for Newtons {
    fn from(kg: Kilograms) -> Self {
        Newtons(kg.0 * GRAVITY_M_PER_S2)
    }
}

impl From<Newtons> for Kilograms {
    fn from(n: Newtons) -> Self {
        Kilograms(n.0 / GRAVITY_M_PER_S2)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pascals (Pa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals (MPa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

impl From<Megapascals> for Pascals {
    fn from(mpa: Megapascals) -> Self {
        Pascals(mpa.0 * 1e6)
    }
}

impl From<Pascals> for Megapascals {
    fn from(pa: Pascals) -> Self {
        Megapascals(pa.0 / 1e6)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Centimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Kilograms);
impl_arithmetic!(Newtons);
impl_arithmetic!(Pascals);
impl_arithmetic!(Megapascals);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centimeters_to_meters() {
        let cm = Centimeters(250.0);
        let m: Meters = cm.into();
        assert_eq!(m.0, 2.5);

        let back: Centimeters = m.into();
        assert_eq!(back.0, 250.0);
    }

    #[test]
    fn test_meters_to_millimeters() {
        let m = Meters(0.0024);
        let mm: Millimeters = m.into();
        assert!((mm.0 - 2.4).abs() < 1e-12);
    }

    #[test]
    fn test_kilograms_to_newtons() {
        let kg = Kilograms(100.0);
        let n: Newtons = kg.into();
        assert_eq!(n.0, 981.0);

        let back: Kilograms = n.into();
        assert!((back.0 - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_megapascals_to_pascals() {
        let mpa = Megapascals(60.0);
        let pa: Pascals = mpa.into();
        assert_eq!(pa.0, 60_000_000.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(1.2);
        let b = Meters(0.2);
        assert!(((a + b).0 - 1.4).abs() < 1e-12);
        assert!(((a - b).0 - 1.0).abs() < 1e-12);
        assert!(((a * 2.0).0 - 2.4).abs() < 1e-12);
        assert!(((a / 2.0).0 - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_serialization() {
        let kg = Kilograms(80.5);
        let json = serde_json::to_string(&kg).unwrap();
        assert_eq!(json, "80.5");

        let roundtrip: Kilograms = serde_json::from_str(&json).unwrap();
        assert_eq!(kg, roundtrip);
    }
}

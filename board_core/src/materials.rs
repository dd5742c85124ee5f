//! # Materials
//!
//! Wood material property records for board analysis.
//!
//! A [`WoodProperties`] record carries the three numbers the engine
//! needs (density, modulus of elasticity, modulus of rupture) plus a
//! display name and free-text notes. The engine accepts any valid
//! record; [`SAMANEA`] is the built-in species for the current domain
//! (Rain Tree furniture boards).
//!
//! ## Example
//!
//! ```rust
//! use board_core::materials::{WoodProperties, SAMANEA};
//!
//! let wood = SAMANEA.clone();
//! assert_eq!(wood.density_kg_m3, 530.0);
//!
//! // Or supply your own record
//! let oak = WoodProperties::new("European Oak", 720.0, 11_000.0, 95.0);
//! assert!(oak.validate().is_ok());
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Material properties of a wood species.
///
/// All numeric fields must be strictly positive finite numbers.
/// `mor_mpa <= moe_mpa` is NOT enforced; the two moduli live on
/// different scales and are independent measurements.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Samanea Saman (Rain Tree)",
///   "density_kg_m3": 530.0,
///   "moe_mpa": 8500.0,
///   "mor_mpa": 60.0,
///   "description": "Soft to medium hardwood, kiln dried"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WoodProperties {
    /// Display name (e.g., "Samanea Saman (Rain Tree)")
    pub name: String,

    /// Air-dry density (kg/m³)
    pub density_kg_m3: f64,

    /// Modulus of elasticity E (MPa) - stiffness
    pub moe_mpa: f64,

    /// Modulus of rupture (MPa) - strength limit
    pub mor_mpa: f64,

    /// Free-text notes about the species
    #[serde(default)]
    pub description: String,
}

impl WoodProperties {
    /// Create a record with an empty description.
    pub fn new(name: impl Into<String>, density_kg_m3: f64, moe_mpa: f64, mor_mpa: f64) -> Self {
        WoodProperties {
            name: name.into(),
            density_kg_m3,
            moe_mpa,
            mor_mpa,
            description: String::new(),
        }
    }

    /// Validate the record.
    ///
    /// Every numeric field must be a strictly positive finite number.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("density_kg_m3", self.density_kg_m3),
            ("moe_mpa", self.moe_mpa),
            ("mor_mpa", self.mor_mpa),
        ] {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Material property must be a finite number",
                ));
            }
            if value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Material property must be positive",
                ));
            }
        }
        Ok(())
    }
}

impl Default for WoodProperties {
    fn default() -> Self {
        SAMANEA.clone()
    }
}

impl std::fmt::Display for WoodProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Samanea saman (Rain Tree / Chamchuri) reference properties.
///
/// Air-dry density ~0.53 g/cm³, MOE ~8.5 GPa (soft-medium range),
/// MOR ~60 MPa.
pub static SAMANEA: Lazy<WoodProperties> = Lazy::new(|| WoodProperties {
    name: "Samanea Saman (Rain Tree)".to_string(),
    density_kg_m3: 530.0,
    moe_mpa: 8500.0,
    mor_mpa: 60.0,
    description: "Soft to medium hardwood. At 12% moisture content the density is \
                  550-700 kg/m³ with very low total shrinkage (tangential 1.8%, \
                  radial 1.0%). Kiln dried to 15-20% moisture to prevent warping."
        .to_string(),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samanea_reference_values() {
        assert_eq!(SAMANEA.density_kg_m3, 530.0);
        assert_eq!(SAMANEA.moe_mpa, 8500.0);
        assert_eq!(SAMANEA.mor_mpa, 60.0);
        assert!(SAMANEA.validate().is_ok());
    }

    #[test]
    fn test_default_is_samanea() {
        let wood = WoodProperties::default();
        assert_eq!(wood, *SAMANEA);
    }

    #[test]
    fn test_custom_record_valid() {
        let oak = WoodProperties::new("European Oak", 720.0, 11_000.0, 95.0);
        assert!(oak.validate().is_ok());
        assert_eq!(oak.to_string(), "European Oak");
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let bad = WoodProperties::new("Bad", 0.0, 8500.0, 60.0);
        let err = bad.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let bad = WoodProperties::new("Bad", 530.0, -1.0, 60.0);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let bad = WoodProperties::new("Bad", 530.0, 8500.0, f64::NAN);
        assert!(bad.validate().is_err());

        let bad = WoodProperties::new("Bad", f64::INFINITY, 8500.0, 60.0);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let json = serde_json::to_string_pretty(&*SAMANEA).unwrap();
        let roundtrip: WoodProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(*SAMANEA, roundtrip);
    }

    #[test]
    fn test_description_defaults_empty() {
        let json = r#"{"name":"Teak","density_kg_m3":655.0,"moe_mpa":12000.0,"mor_mpa":100.0}"#;
        let wood: WoodProperties = serde_json::from_str(json).unwrap();
        assert!(wood.description.is_empty());
        assert!(wood.validate().is_ok());
    }
}
